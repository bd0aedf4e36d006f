//! Unit tests for console field parsers.

use super::*;

mod parse_isbn_tests {
    use super::*;

    #[test]
    fn trims_and_accepts_valid_isbn() {
        assert_eq!(parse_isbn("  0-306-40615-2 \n").unwrap(), "0-306-40615-2");
    }

    #[test]
    fn rejects_short_isbn() {
        let err = parse_isbn("12345").unwrap_err();
        assert!(matches!(err, InventoryError::MalformedInput(_)));
        assert_eq!(err.to_string(), "Invalid input: Invalid ISBN format");
    }
}

mod parse_price_tests {
    use super::*;

    #[test]
    fn parses_decimal() {
        let price = parse_price("12.50").unwrap();
        assert!((price - 12.5).abs() < 0.001);
    }

    #[test]
    fn parses_integer() {
        let price = parse_price("100").unwrap();
        assert!((price - 100.0).abs() < 0.001);
    }

    #[test]
    fn parses_zero() {
        assert_eq!(parse_price("0").unwrap(), 0.0);
    }

    #[test]
    fn fails_for_negative() {
        assert!(parse_price("-1.00").is_err());
    }

    #[test]
    fn fails_for_non_finite() {
        assert!(parse_price("NaN").is_err());
        assert!(parse_price("inf").is_err());
    }

    #[test]
    fn fails_for_invalid_input() {
        assert!(parse_price("not a number").is_err());
        assert!(parse_price("").is_err());
    }
}

mod parse_quantity_tests {
    use super::*;

    #[test]
    fn parses_whole_numbers() {
        assert_eq!(parse_quantity("5").unwrap(), 5);
        assert_eq!(parse_quantity(" 0 ").unwrap(), 0);
    }

    #[test]
    fn fails_for_negative_and_fractional() {
        assert!(parse_quantity("-3").is_err());
        assert!(parse_quantity("2.5").is_err());
        assert!(parse_quantity("abc").is_err());
    }

    #[test]
    fn sale_quantity_rejects_zero() {
        assert!(parse_sale_quantity("0").is_err());
        assert_eq!(parse_sale_quantity("3").unwrap(), 3);
    }
}
