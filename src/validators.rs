//! Regex-backed format validators for Indian statutory identifiers and
//! contact fields, wired into request DTOs via `validator`'s custom
//! validation hooks. Empty values pass — presence is a separate concern.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use validator::ValidationError;

static PAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("valid PAN regex"));

static GSTIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").expect("valid GSTIN regex")
});

static TAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{4}[0-9]{5}[A-Z]$").expect("valid TAN regex"));

static CIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[LU][0-9]{5}[A-Z]{2}[0-9]{4}[A-Z]{3}[0-9]{6}$").expect("valid CIN regex")
});

static IFSC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").expect("valid IFSC regex"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{10,15}$").expect("valid phone regex"));

static PINCODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{6}$").expect("valid pincode regex"));

fn check(value: &str, re: &Regex, code: &'static str, message: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() || re.is_match(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new(code);
        err.message = Some(Cow::Borrowed(message));
        Err(err)
    }
}

pub fn validate_pan(value: &str) -> Result<(), ValidationError> {
    check(value, &PAN_RE, "pan", "Enter a valid PAN (e.g. ABCDE1234F).")
}

pub fn validate_gstin(value: &str) -> Result<(), ValidationError> {
    check(
        value,
        &GSTIN_RE,
        "gstin",
        "Enter a valid GSTIN (e.g. 27ABCDE1234F1Z5).",
    )
}

pub fn validate_tan(value: &str) -> Result<(), ValidationError> {
    check(value, &TAN_RE, "tan", "Enter a valid TAN (e.g. ABCD12345E).")
}

pub fn validate_cin(value: &str) -> Result<(), ValidationError> {
    check(
        value,
        &CIN_RE,
        "cin",
        "Enter a valid CIN (e.g. U12345MH2020PTC123456).",
    )
}

pub fn validate_ifsc(value: &str) -> Result<(), ValidationError> {
    check(
        value,
        &IFSC_RE,
        "ifsc",
        "Enter a valid IFSC (e.g. HDFC0001234).",
    )
}

pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    check(value, &PHONE_RE, "phone", "Enter a valid phone number.")
}

pub fn validate_pincode(value: &str) -> Result<(), ValidationError> {
    check(value, &PINCODE_RE, "pincode", "Enter a valid 6-digit pincode.")
}

/// Email check that tolerates the empty string; presence is validated
/// separately where an address is mandatory.
pub fn validate_email_opt(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || validator::validate_email(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("email");
        err.message = Some(Cow::Borrowed("Enter a valid email address."));
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pan_format() {
        assert!(validate_pan("ABCDE1234F").is_ok());
        assert!(validate_pan("").is_ok());
        assert!(validate_pan("abcde1234f").is_err());
        assert!(validate_pan("ABCDE12345").is_err());
    }

    #[test]
    fn gstin_format() {
        assert!(validate_gstin("27ABCDE1234F1Z5").is_ok());
        assert!(validate_gstin("27ABCDE1234F1X5").is_err());
        assert!(validate_gstin("7ABCDE1234F1Z5").is_err());
    }

    #[test]
    fn ifsc_format() {
        assert!(validate_ifsc("HDFC0001234").is_ok());
        assert!(validate_ifsc("HDFC1001234").is_err());
    }

    #[test]
    fn phone_format() {
        assert!(validate_phone("9876543210").is_ok());
        assert!(validate_phone("+919876543210").is_ok());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("98765abcde").is_err());
    }

    #[test]
    fn optional_email() {
        assert!(validate_email_opt("").is_ok());
        assert!(validate_email_opt("ravi@example.com").is_ok());
        assert!(validate_email_opt("not-an-email").is_err());
    }

    #[test]
    fn tan_and_cin_and_pincode() {
        assert!(validate_tan("ABCD12345E").is_ok());
        assert!(validate_tan("ABCD1234E").is_err());
        assert!(validate_cin("U12345MH2020PTC123456").is_ok());
        assert!(validate_cin("X12345MH2020PTC123456").is_err());
        assert!(validate_pincode("400001").is_ok());
        assert!(validate_pincode("4000011").is_err());
    }
}
