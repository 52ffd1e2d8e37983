//! The base-36 alphabet shared by every engine.

/// Ordered symbols: the digits `0-9` followed by the letters `A-Z`.
pub const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of symbols in [`ALPHABET`].
pub const ALPHABET_LEN: u32 = 36;

const INVALID: u8 = u8::MAX;

/// ASCII byte to alphabet index. Lowercase letters map to the same index as
/// their uppercase form; every other byte maps to [`INVALID`].
static LOOKUP: [u8; 256] = build_lookup();

const fn build_lookup() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let symbols = ALPHABET.as_bytes();
    let mut idx = 0;
    while idx < symbols.len() {
        let byte = symbols[idx];
        table[byte as usize] = idx as u8;
        if byte.is_ascii_uppercase() {
            table[byte.to_ascii_lowercase() as usize] = idx as u8;
        }
        idx += 1;
    }
    table
}

/// Returns the alphabet index of `character`, ignoring ASCII case.
pub fn index_of(character: char) -> Option<u32> {
    if !character.is_ascii() {
        return None;
    }
    match LOOKUP[character as usize] {
        INVALID => None,
        idx => Some(u32::from(idx)),
    }
}

/// Returns the uppercase symbol stored at `index`.
pub fn symbol(index: u32) -> Option<char> {
    ALPHABET.as_bytes().get(index as usize).map(|&byte| char::from(byte))
}
