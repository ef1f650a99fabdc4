//! Complement tables and input normalization.
//!
//! A [`ComplementTable`] maps each nucleotide symbol to its pairing partner.
//! Tables are case-insensitive: a lower-case symbol maps to the lower-case complement.
//! Symbols missing from the table pass through unchanged when complementing, but [`ComplementTable::check`] reports them.
//!
//! The IUPAC table follows Cornish-Bowden (1985):
//!
//! | Symbol | Meaning | Complement |
//! |--------|---------|------------|
//! | A | A | T |
//! | C | C | G |
//! | G | G | C |
//! | T | T | A |
//! | U | U | A |
//! | M | A or C | K |
//! | R | A or G | Y |
//! | W | A or T | W |
//! | S | C or G | S |
//! | Y | C or T | R |
//! | K | G or T | M |
//! | V | A or C or G | B |
//! | H | A or C or T | D |
//! | D | A or G or T | H |
//! | B | C or G or T | V |
//! | N | any | N |
//! | X | unknown | X |

use crate::SeguidError;

use std::collections::BTreeSet;
use std::fmt;

//-----------------------------------------------------------------------------

/// Complement table for the unambiguous DNA bases `ACGT`.
pub const DNA: ComplementTable = ComplementTable::from_pairs(&[
    (b'A', b'T'), (b'C', b'G'), (b'G', b'C'), (b'T', b'A'),
]);

/// Complement table for the unambiguous RNA bases `ACGU`.
pub const RNA: ComplementTable = ComplementTable::from_pairs(&[
    (b'A', b'U'), (b'C', b'G'), (b'G', b'C'), (b'U', b'A'),
]);

/// Complement table for the IUPAC nucleotide codes.
pub const IUPAC: ComplementTable = ComplementTable::from_pairs(&[
    (b'A', b'T'), (b'C', b'G'), (b'G', b'C'), (b'T', b'A'),
    (b'M', b'K'), (b'R', b'Y'), (b'W', b'W'), (b'S', b'S'),
    (b'Y', b'R'), (b'K', b'M'), (b'V', b'B'), (b'H', b'D'),
    (b'D', b'H'), (b'B', b'V'), (b'X', b'X'), (b'N', b'N'),
    (b'U', b'A'),
]);

//-----------------------------------------------------------------------------

/// A mapping from nucleotide symbols to their complements.
///
/// The mapping is defined over ASCII bytes.
/// Every other character is outside the alphabet and maps to itself.
#[derive(Clone, PartialEq, Eq)]
pub struct ComplementTable {
    complement: [u8; 256],
    present: [bool; 256],
}

/// Construction.
impl ComplementTable {
    // Identity mapping with no symbols.
    const fn empty() -> Self {
        let mut complement = [0u8; 256];
        let mut i = 0;
        while i < 256 {
            complement[i] = i as u8;
            i += 1;
        }
        ComplementTable { complement, present: [false; 256] }
    }

    // Adds the pair in both cases.
    const fn insert(&mut self, from: u8, to: u8) {
        let upper_from = from.to_ascii_uppercase();
        let lower_from = from.to_ascii_lowercase();
        self.complement[upper_from as usize] = to.to_ascii_uppercase();
        self.present[upper_from as usize] = true;
        self.complement[lower_from as usize] = to.to_ascii_lowercase();
        self.present[lower_from as usize] = true;
    }

    // Builds a table without checking that the complements are in the table.
    const fn from_pairs(pairs: &[(u8, u8)]) -> Self {
        let mut result = Self::empty();
        let mut i = 0;
        while i < pairs.len() {
            let (from, to) = pairs[i];
            result.insert(from, to);
            i += 1;
        }
        result
    }

    /// Builds a table from `(symbol, complement)` pairs.
    ///
    /// Both cases of each pair are added to the table.
    /// Returns an error if a symbol is not ASCII or if a complement is not a symbol in the table.
    ///
    /// # Examples
    ///
    /// ```
    /// use seguid::ComplementTable;
    ///
    /// let table = ComplementTable::new(&[(b'A', b'T'), (b'T', b'A')]).unwrap();
    /// assert_eq!(table.complement('a'), 't');
    /// assert!(ComplementTable::new(&[(b'A', b'T')]).is_err());
    /// ```
    pub fn new(pairs: &[(u8, u8)]) -> Result<Self, SeguidError> {
        for &(from, to) in pairs {
            Self::check_ascii(from)?;
            Self::check_ascii(to)?;
        }
        let result = Self::from_pairs(pairs);
        for &(from, to) in pairs {
            if !result.present[to as usize] {
                return Err(SeguidError::IncompleteTable { from: from as char, to: to as char });
            }
        }
        Ok(result)
    }

    /// Returns a copy of the table with the given symbols added as their own complements.
    ///
    /// This is used for the padding and separator characters in double-stranded messages.
    /// Returns an error if a symbol is not ASCII.
    pub fn with_symbols(&self, symbols: &[u8]) -> Result<Self, SeguidError> {
        let mut result = self.clone();
        for &symbol in symbols {
            Self::check_ascii(symbol)?;
            result.insert(symbol, symbol);
        }
        Ok(result)
    }

    fn check_ascii(symbol: u8) -> Result<(), SeguidError> {
        if symbol.is_ascii() { Ok(()) } else { Err(SeguidError::NonAsciiSymbol(symbol)) }
    }
}

/// Queries.
impl ComplementTable {
    /// Returns the complement of the given character.
    ///
    /// Characters outside the alphabet are returned unchanged.
    #[inline]
    pub fn complement(&self, c: char) -> char {
        if c.is_ascii() {
            self.complement[c as usize] as char
        } else {
            c
        }
    }

    /// Returns `true` if the character is in the alphabet.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.present[c as usize]
    }

    /// Returns an iterator over the symbols in the alphabet in sorted order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        (0..=u8::MAX).filter(|&b| self.present[b as usize]).map(char::from)
    }

    /// Checks that every character of the sequence is in the alphabet.
    ///
    /// Returns an error listing the unknown characters in sorted order.
    pub fn check(&self, seq: &str) -> Result<(), SeguidError> {
        let unknown: BTreeSet<char> = seq.chars().filter(|&c| !self.contains(c)).collect();
        if unknown.is_empty() {
            return Ok(());
        }
        let symbols: Vec<String> = unknown.iter().map(|c| format!("{:?}", c)).collect();
        Err(SeguidError::UnknownSymbols(symbols.join(" ")))
    }
}

impl fmt::Debug for ComplementTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.symbols().map(|c| (c, self.complement(c))))
            .finish()
    }
}

//-----------------------------------------------------------------------------

/// Normalizes raw input into a sequence.
///
/// Removes every character that is not an ASCII letter and converts the rest to upper case.
///
/// # Examples
///
/// ```
/// use seguid::normalize;
///
/// assert_eq!(normalize(" gat-ta\nca 12"), "GATTACA");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

//-----------------------------------------------------------------------------


//-----------------------------------------------------------------------------
