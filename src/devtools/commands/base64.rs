use crate::error::Result;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;

/// Standard alphabet, no padding. Decoding tolerates non-zero trailing bits
/// in the last symbol, so `aGVsbG9` decodes to `hello` like `aGVsbG8` does.
const RAW_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Encode,
    Decode,
}

/// Encodes with the standard alphabet, without padding or line breaks.
pub fn encode(input: &[u8]) -> Vec<u8> {
    RAW_STANDARD.encode(input).into_bytes()
}

/// Decodes unpadded standard base64. Line breaks are skipped, so text piped
/// in with a trailing newline decodes as expected.
pub fn decode(input: &[u8]) -> Result<Vec<u8>> {
    let cleaned: Vec<u8> = input
        .iter()
        .copied()
        .filter(|b| *b != b'\n' && *b != b'\r')
        .collect();

    Ok(RAW_STANDARD.decode(cleaned)?)
}

pub fn run(mode: Mode, input: &[u8]) -> Result<Vec<u8>> {
    match mode {
        Mode::Encode => Ok(encode(input)),
        Mode::Decode => decode(input),
    }
}
