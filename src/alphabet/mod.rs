pub mod decode;
pub mod encode;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;
use std::{error, fmt};

use crate::word::Word;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    DuplicateSymbol { symbol: char, first: usize, second: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::DuplicateSymbol { symbol, first, second } => {
                write!(f, "Duplicate symbol '{}' at indexes {} and {}", symbol, first, second)
            }
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WordError {
    OffendingCharacters { word: String, characters: Vec<char> },
}

impl error::Error for WordError {}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordError::OffendingCharacters { word, characters } => {
                write!(f, "Invalid word {:?}, offending characters {:?}", word, characters)
            }
        }
    }
}

/// An ordered, duplicate-free set of symbols. The index of a symbol is its
/// digit value; the symbol count is the radix.
#[derive(Clone, Debug)]
pub struct Alphabet {
    symbols: Vec<char>,
    digits: HashMap<char, usize>,
}

impl Alphabet {
    pub fn from_symbols(symbols: &str) -> Result<Self, Error> {
        Self::checked(symbols.chars())
    }

    pub fn from_chars(symbols: &[char]) -> Result<Self, Error> {
        Self::checked(symbols.iter().copied())
    }

    /// The identity alphabet of radix `radix`: digit `d` maps to code point
    /// `d`, except that digits at and above 0xD800 shift past the surrogate
    /// block, which holds no scalar values.
    ///
    /// # Panics
    /// If `radix` exceeds the number of scalar values (1,112,064).
    pub fn from_radix(radix: u32) -> Self {
        Self::distinct((0..radix).map(identity_symbol).collect())
    }

    pub fn from_range(range: RangeInclusive<char>) -> Self {
        Self::distinct(range.collect())
    }

    fn checked(symbols: impl Iterator<Item = char>) -> Result<Self, Error> {
        let mut collected = Vec::new();
        let mut digits = HashMap::new();
        for (second, symbol) in symbols.enumerate() {
            if let Some(&first) = digits.get(&symbol) {
                return Err(Error::DuplicateSymbol { symbol, first, second });
            }
            digits.insert(symbol, second);
            collected.push(symbol);
        }
        Ok(Self { symbols: collected, digits })
    }

    // symbols known distinct by construction
    fn distinct(symbols: Vec<char>) -> Self {
        let digits = symbols.iter().copied().enumerate().map(|(digit, symbol)| (symbol, digit)).collect();
        Self { symbols, digits }
    }

    pub fn radix(&self) -> usize {
        self.symbols.len()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn symbol(&self, digit: usize) -> Option<char> {
        self.symbols.get(digit).copied()
    }

    pub fn digit(&self, symbol: char) -> Option<usize> {
        self.digits.get(&symbol).copied()
    }

    /// Whether every character of `word` belongs to this alphabet. Absent
    /// input is invalid; the empty string is valid.
    pub fn validate<'s>(&self, word: impl Into<Option<&'s str>>) -> bool {
        match word.into() {
            Some(word) => word.chars().all(|character| self.digits.contains_key(&character)),
            None => false,
        }
    }

    /// The characters of `word` that do not belong to this alphabet, in input
    /// order, one entry per occurrence. Absent input yields `None`, which is
    /// distinct from "no offenses" (`Some` of an empty vector).
    pub fn offending_characters<'s>(&self, word: impl Into<Option<&'s str>>) -> Option<Vec<char>> {
        word.into().map(|word| self.offenses(word))
    }

    fn offenses(&self, word: &str) -> Vec<char> {
        word.chars().filter(|character| !self.digits.contains_key(character)).collect()
    }

    /// Validates `text` and wraps it as a [`Word`] of this alphabet.
    pub fn word(&self, text: impl Into<String>) -> Result<Word<'_>, WordError> {
        let text = text.into();
        let characters = self.offenses(&text);
        if characters.is_empty() {
            Ok(Word::new(text, self))
        } else {
            Err(WordError::OffendingCharacters { word: text, characters })
        }
    }
}

fn identity_symbol(digit: u32) -> char {
    let code_point = if digit < 0xD800 { digit } else { digit + 0x800 };
    match char::from_u32(code_point) {
        Some(symbol) => symbol,
        None => panic!("radix exceeds the number of scalar values"),
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

/// Alphabets compare by symbol sequence; the digit table is derived from it.
impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for Alphabet {}

impl Hash for Alphabet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbols.hash(state);
    }
}

impl Serialize for Alphabet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Alphabet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let symbols = String::deserialize(deserializer)?;
        Self::from_symbols(&symbols).map_err(de::Error::custom)
    }
}
