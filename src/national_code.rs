use std::fmt;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};
use thiserror::Error;

use crate::checksum::{expected_check_digit, MIN_DIGIT_COUNT, STANDARDIZED_DIGIT_COUNT};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NationalCodeError {
    /// Fewer than 8 or more than 10 digits remain after stripping separators
    #[error("expected 8 to 10 digits, found {found}")]
    InvalidDigitCount { found: usize },

    /// The standardized code is a single repeated digit
    #[error("all digits of the standardized code are identical")]
    RepeatedDigits,

    /// The check digit does not match the weighted checksum of the payload
    #[error("check digit does not match the weighted checksum")]
    InvalidChecksum,
}

/// An Iranian national code in its standardized 10-digit form.
///
/// Parsing strips separators, restores elided leading zeros and verifies the
/// check digit, so a constructed value always holds a valid code. The value
/// serializes as its standardized string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct NationalCode(String);

impl NationalCode {
    /// The standardized 10-digit form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The check digit (last digit of the standardized form).
    pub fn check_digit(&self) -> u32 {
        // The constructor guarantees exactly 10 ASCII digits
        (self.0.as_bytes()[STANDARDIZED_DIGIT_COUNT - 1] - b'0') as u32
    }
}

impl FromStr for NationalCode {
    type Err = NationalCodeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).collect();

        if digits.len() < MIN_DIGIT_COUNT || digits.len() > STANDARDIZED_DIGIT_COUNT {
            return Err(NationalCodeError::InvalidDigitCount {
                found: digits.len(),
            });
        }

        let mut standardized = [0u32; STANDARDIZED_DIGIT_COUNT];
        standardized[STANDARDIZED_DIGIT_COUNT - digits.len()..].copy_from_slice(&digits);

        if standardized.iter().all(|&digit| digit == standardized[0]) {
            return Err(NationalCodeError::RepeatedDigits);
        }

        let check_digit = standardized[STANDARDIZED_DIGIT_COUNT - 1];
        if expected_check_digit(&standardized[..STANDARDIZED_DIGIT_COUNT - 1]) != check_digit {
            return Err(NationalCodeError::InvalidChecksum);
        }

        let code = standardized
            .iter()
            .map(|&digit| char::from_digit(digit, 10).unwrap_or('0'))
            .collect();
        Ok(NationalCode(code))
    }
}

impl fmt::Display for NationalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_test::{assert_tokens, Token};

    #[test]
    fn test_parse_standardizes_input() {
        let cases = vec![
            ("0499370899", "0499370899"),
            // separators stripped
            ("049-937089-9", "0499370899"),
            // elided leading zeros restored
            ("499370899", "0499370899"),
            ("00785415", "0000785415"),
        ];
        for (input, standardized) in cases {
            let code: NationalCode = input.parse().unwrap();
            assert_eq!(code.as_str(), standardized);
            assert_eq!(code.to_string(), standardized);
        }
    }

    #[test]
    fn test_check_digit_accessor() {
        let code: NationalCode = "0499370899".parse().unwrap();
        assert_eq!(code.check_digit(), 9);
        let code: NationalCode = "2000000010".parse().unwrap();
        assert_eq!(code.check_digit(), 0);
    }

    #[test]
    fn test_parse_errors() {
        let cases = vec![
            ("12345", NationalCodeError::InvalidDigitCount { found: 5 }),
            ("", NationalCodeError::InvalidDigitCount { found: 0 }),
            ("12345678901", NationalCodeError::InvalidDigitCount { found: 11 }),
            ("1111111111", NationalCodeError::RepeatedDigits),
            // all zeros after padding
            ("00000000", NationalCodeError::RepeatedDigits),
            ("6587452158", NationalCodeError::InvalidChecksum),
            ("0079039549", NationalCodeError::InvalidChecksum),
        ];
        for (input, expected_err) in cases {
            assert_eq!(input.parse::<NationalCode>(), Err(expected_err));
        }
    }

    #[test]
    fn test_serde_string_form() {
        let code: NationalCode = "499370899".parse().unwrap();
        assert_tokens(&code, &[Token::Str("0499370899")]);
    }

    #[test]
    fn test_deserialize_rejects_invalid_codes() {
        assert!(serde_json::from_str::<NationalCode>("\"6587452158\"").is_err());
        assert!(serde_json::from_str::<NationalCode>("\"1111111111\"").is_err());
    }
}
