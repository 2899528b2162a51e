//! Shared instances of well-known alphabets.

use once_cell::sync::Lazy;

use crate::alphabet::Alphabet;

static BINARY: Lazy<Alphabet> = Lazy::new(|| built_in("01"));
static OCTAL: Lazy<Alphabet> = Lazy::new(|| built_in("01234567"));
static DECIMAL: Lazy<Alphabet> = Lazy::new(|| built_in("0123456789"));
static LOWER_HEX: Lazy<Alphabet> = Lazy::new(|| built_in("0123456789abcdef"));
static UPPER_HEX: Lazy<Alphabet> = Lazy::new(|| built_in("0123456789ABCDEF"));
static BASE36: Lazy<Alphabet> = Lazy::new(|| built_in("0123456789abcdefghijklmnopqrstuvwxyz"));
static BASE58: Lazy<Alphabet> = Lazy::new(|| built_in("123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz"));
static BASE62: Lazy<Alphabet> = Lazy::new(|| built_in("0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz"));
static BASE64: Lazy<Alphabet> = Lazy::new(|| built_in("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/"));

fn built_in(symbols: &str) -> Alphabet {
    match Alphabet::from_symbols(symbols) {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build alphabet"),
    }
}

pub fn binary() -> &'static Alphabet {
    &BINARY
}

pub fn octal() -> &'static Alphabet {
    &OCTAL
}

pub fn decimal() -> &'static Alphabet {
    &DECIMAL
}

pub fn lower_hex() -> &'static Alphabet {
    &LOWER_HEX
}

pub fn upper_hex() -> &'static Alphabet {
    &UPPER_HEX
}

pub fn base36() -> &'static Alphabet {
    &BASE36
}

/// The Bitcoin base58 alphabet.
pub fn base58() -> &'static Alphabet {
    &BASE58
}

pub fn base62() -> &'static Alphabet {
    &BASE62
}

/// The standard base64 symbol set, as a plain radix-64 positional alphabet
/// (no padding or chunking).
pub fn base64() -> &'static Alphabet {
    &BASE64
}
