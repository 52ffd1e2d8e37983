use luhn_core::alphabet;
use luhn_core::LuhnError;

/// Maps a character to its index in the base-36 alphabet, ignoring case.
///
/// The index is not checked against any modulus.
pub fn char_to_int(character: char) -> Result<u32, LuhnError> {
    decode_at(character, 0)
}

/// Maps an alphabet index back to its uppercase character.
pub fn int_to_char(value: u32) -> Option<char> {
    alphabet::symbol(value)
}

pub(crate) fn decode_at(character: char, position: usize) -> Result<u32, LuhnError> {
    alphabet::index_of(character).ok_or_else(|| LuhnError::invalid_character(character, position))
}
