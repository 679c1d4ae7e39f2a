use crate::checksum::Validator;

pub struct IranNationalCodeChecksum;

pub(crate) const MIN_DIGIT_COUNT: usize = 8;
pub(crate) const STANDARDIZED_DIGIT_COUNT: usize = 10;

/// Expected check digit for the 9 payload digits, most significant first.
/// Weights run from 10 down to 2 and the weighted sum is reduced mod 11.
pub(crate) fn expected_check_digit(payload: &[u32]) -> u32 {
    let sum: u32 = payload
        .iter()
        .enumerate()
        .map(|(i, &digit)| digit * (STANDARDIZED_DIGIT_COUNT as u32 - i as u32))
        .sum();

    let remainder = sum % 11;
    if remainder < 2 {
        remainder
    } else {
        11 - remainder
    }
}

impl Validator for IranNationalCodeChecksum {
    // https://en.wikipedia.org/wiki/National_identification_number#Iran
    fn is_valid_match(&self, input: &str) -> bool {
        let digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).collect();

        // The raw digit count is checked before padding, so inputs may elide
        // up to two leading zeros
        if digits.len() < MIN_DIGIT_COUNT || digits.len() > STANDARDIZED_DIGIT_COUNT {
            return false;
        }

        // Left-pad with zeros to the standardized 10-digit form
        let mut standardized = [0u32; STANDARDIZED_DIGIT_COUNT];
        standardized[STANDARDIZED_DIGIT_COUNT - digits.len()..].copy_from_slice(&digits);

        // A single repeated digit always satisfies the mod-11 checksum, but
        // such codes are never issued
        if standardized.iter().all(|&digit| digit == standardized[0]) {
            return false;
        }

        let check_digit = standardized[STANDARDIZED_DIGIT_COUNT - 1];
        expected_check_digit(&standardized[..STANDARDIZED_DIGIT_COUNT - 1]) == check_digit
    }
}
