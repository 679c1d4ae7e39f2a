// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod national_code;

// This is the public API of the national code library
pub use checksum::{IranNationalCodeChecksum, Validator};
pub use national_code::{NationalCode, NationalCodeError};

/// Validates an Iranian national code against its official checksum.
///
/// Separators such as spaces and dashes are ignored, and codes whose leading
/// zeros were elided are restored to the standardized 10-digit form before
/// the check digit is verified. Every malformed input (wrong digit count,
/// single repeated digit, checksum mismatch) yields `false`; this never
/// panics.
pub fn is_valid_national_code(input: &str) -> bool {
    IranNationalCodeChecksum.is_valid_match(input)
}
