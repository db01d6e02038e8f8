use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static NOT_PRICE_CHAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9.,]").unwrap());
static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9]+\.?[0-9]*|\.[0-9]+)").unwrap());

/// Trims and collapses every whitespace run to a single space.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// Parses a locale-formatted price such as `"€1 234,50"` or `"$19.99"`.
///
/// Everything but digits and separators is dropped, commas become decimal
/// points, then the longest leading number is read (`"1.234.56"` gives
/// `1.234`). Returns `NaN` when no number is left.
pub fn parse_price(text: &str) -> f64 {
    let stripped = NOT_PRICE_CHAR.replace_all(text, "");
    let normalized = stripped.replace(',', ".");

    LEADING_NUMBER
        .find(&normalized)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  Pull \n\t Gris  "), "Pull Gris");
        assert_eq!(normalize_whitespace("\u{a0}Veste\u{a0}\u{a0}Bleue"), "Veste Bleue");
        assert_eq!(normalize_whitespace("   "), "");
        assert_eq!(normalize_whitespace(""), "");
    }

    #[test]
    fn test_normalize_whitespace_is_idempotent() {
        for input in [
            "  a  b  ",
            "\n\nChemise\n  Oxford\n\n 45,50 €\n",
            "single",
            "",
            " \t ",
        ] {
            let once = normalize_whitespace(input);
            assert_eq!(normalize_whitespace(&once), once);
        }
    }

    #[test]
    fn test_parse_price_locales() {
        assert_eq!(parse_price("€1 234,50"), 1234.50);
        assert_eq!(parse_price("$19.99"), 19.99);
        assert_eq!(parse_price("12,00 €"), 12.0);
        assert_eq!(parse_price("45,50 €"), 45.5);
        assert_eq!(parse_price("8 €"), 8.0);
    }

    #[test]
    fn test_parse_price_without_digits_is_nan() {
        assert!(parse_price("no price").is_nan());
        assert!(parse_price("").is_nan());
        assert!(parse_price(",").is_nan());
    }

    #[test]
    fn test_parse_price_reads_leading_number_only() {
        assert_eq!(parse_price("1.234.56"), 1.234);
        assert_eq!(parse_price(",5 €"), 0.5);
        assert_eq!(parse_price("Pull Gris\n 45,50 €"), 45.5);
    }
}
