//! Errors reported by the checked operations.

use thiserror::Error;

//-----------------------------------------------------------------------------

/// An error from validating input or parsing a checksum.
///
/// The core canonicalization and hashing operations are total and never return an error.
/// Errors arise only from strict alphabet checks, double-stranded input that does not anneal, and malformed text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeguidError {
    /// The sequence contains symbols missing from the complement table.
    #[error("Symbols {0} are not in the alphabet")]
    UnknownSymbols(String),

    /// The complement table maps a symbol to a value that is not a key.
    #[error("Complement table maps {from:?} to {to:?}, which is not in the table")]
    IncompleteTable { from: char, to: char },

    /// A complement table symbol is not an ASCII character.
    #[error("Symbol {0:#04x} is not an ASCII character")]
    NonAsciiSymbol(u8),

    /// The overhang places the strands so that they cannot overlap.
    #[error("Overhang {overhang} is out of range for strands of length {watson} and {crick}")]
    InvalidOverhang { watson: usize, crick: usize, overhang: isize },

    /// The overlapping parts of the strands are not complementary.
    #[error("Mismatched basepairs")]
    Mismatch,

    /// The strands of a circular molecule differ in length.
    #[error("Strands of a circular molecule must have the same length: {watson} != {crick}")]
    LengthMismatch { watson: usize, crick: usize },

    /// The text figure of a double-stranded molecule cannot be parsed.
    #[error("Invalid dsDNA representation: {0}")]
    InvalidRepresentation(String),

    /// A checksum string cannot be parsed.
    #[error("Invalid checksum: {0}")]
    InvalidChecksum(String),
}

//-----------------------------------------------------------------------------
