use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating Indian postal codes (pincode fields)
    /// Must be exactly six decimal digits with nothing around them
    /// - Valid: "560001", "110092"
    /// - Invalid: "12a456", "5600011", "56001", " 560001"
    pub static ref PINCODE_REGEX: Regex = Regex::new(r"^\d{6}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pincode_regex_valid() {
        assert!(PINCODE_REGEX.is_match("560001"));
        assert!(PINCODE_REGEX.is_match("110092"));
        assert!(PINCODE_REGEX.is_match("000000"));
    }

    #[test]
    fn test_pincode_regex_invalid() {
        assert!(!PINCODE_REGEX.is_match("12a456")); // letter inside
        assert!(!PINCODE_REGEX.is_match("56001")); // too short
        assert!(!PINCODE_REGEX.is_match("5600011")); // too long
        assert!(!PINCODE_REGEX.is_match(" 560001")); // leading whitespace
        assert!(!PINCODE_REGEX.is_match("560001 ")); // trailing whitespace
        assert!(!PINCODE_REGEX.is_match("")); // empty
    }
}
