//! Finite character alphabets and the words they spell.
//!
//! An [`Alphabet`] is an ordered, duplicate-free set of symbols defining a
//! positional numeral system of radix equal to the symbol count. A [`Word`]
//! is an immutable string certified valid against the alphabet that produced
//! it, so conversion never operates on unvalidated text.
//!
//! ```
//! use alphabet::Alphabet;
//!
//! let hex = Alphabet::from_symbols("0123456789abcdef")?;
//! let word = hex.encode_u64(255);
//! assert_eq!(word.text(), "ff");
//! assert_eq!(word.to_u64(), 255);
//! # Ok::<(), alphabet::Error>(())
//! ```

pub mod alphabet;
pub mod alphabets;
pub mod word;

pub use alphabet::{Alphabet, Error, WordError};
pub use word::Word;
