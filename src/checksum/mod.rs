mod iran_national_code;

pub use crate::checksum::iran_national_code::IranNationalCodeChecksum;
pub(crate) use crate::checksum::iran_national_code::{
    expected_check_digit, MIN_DIGIT_COUNT, STANDARDIZED_DIGIT_COUNT,
};

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, input: &str) -> bool;
}
