use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for image URLs: must carry an http or https scheme
    /// - Valid: "http://img.example.com/a.png", "https://cdn.example.com/villa"
    /// - Invalid: "ftp://example.com", "www.example.com", "HTTP//oops"
    pub static ref IMAGE_URL_REGEX: Regex = Regex::new(r"^https?://").unwrap();

    /// Regex for unsigned decimal numbers with at most one dot
    /// - Valid: "199", "199.5", ".5", "10."
    /// - Invalid: "-1", "1.2.3", "1e5", "", "."
    pub static ref UNSIGNED_DECIMAL_REGEX: Regex = Regex::new(r"^(\d+\.?\d*|\.\d+)$").unwrap();

    /// Regex for unsigned integers
    pub static ref UNSIGNED_INTEGER_REGEX: Regex = Regex::new(r"^\d+$").unwrap();
}

pub fn is_http_url(value: &str) -> bool {
    IMAGE_URL_REGEX.is_match(value)
}

/// Parse a non-negative decimal the way a form field is typed
pub fn parse_unsigned_decimal(value: &str) -> Option<f64> {
    let value = value.trim();
    if !UNSIGNED_DECIMAL_REGEX.is_match(value) {
        return None;
    }
    value.parse::<f64>().ok()
}

/// Parse a non-negative integer the way a form field is typed
pub fn parse_unsigned_integer(value: &str) -> Option<i64> {
    let value = value.trim();
    if !UNSIGNED_INTEGER_REGEX.is_match(value) {
        return None;
    }
    value.parse::<i64>().ok()
}
