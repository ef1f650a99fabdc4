//! Double-stranded molecules given as two explicit strands.
//!
//! A [`DoubleStrand`] consists of the top (Watson) strand and the bottom (Crick) strand, both written 5' to 3'.
//! The overhang is the number of bottom strand bases extending past the top strand at the left end.
//! A negative overhang means that the top strand extends past the bottom strand.
//!
//! ```text
//! dsDNA       overhang
//!
//! --nnn...    2
//! nnnnn...
//!
//! nnnnn...    0
//! nnnnn...
//!
//! nnnnn...   -2
//! --nnn...
//! ```
//!
//! The canonical message of a molecule is its two-line text figure, starting from the smaller strand.
//! Missing bases are shown as `-` and the lines are separated by a newline.
//! For example, top strand `TATGCC`, bottom strand `GCATAC`, and overhang 1 give the message `"-GCATAC\nCCGTAT-"`.

use crate::{algorithms, ComplementTable, Flavor, Seguid, SeguidError};

use std::cmp;

//-----------------------------------------------------------------------------

/// A double-stranded DNA molecule with possible single-stranded overhangs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DoubleStrand {
    watson: String,
    crick: String,
    overhang: isize,
}

/// Constants.
impl DoubleStrand {
    /// Character for a missing base in the text figure.
    pub const PADDING: char = '-';

    /// Separator between the strands in the text figure.
    pub const SEPARATOR: char = '\n';
}

//-----------------------------------------------------------------------------

/// Construction.
impl DoubleStrand {
    /// Creates a new molecule from the strands and the overhang.
    ///
    /// The strands are converted to upper case.
    /// Returns an error if a strand contains symbols outside the table, if the overhang leaves no room for the strands to overlap, or if the overlapping bases are not complementary.
    ///
    /// # Examples
    ///
    /// ```
    /// use seguid::{DoubleStrand, DNA};
    ///
    /// let dna = DoubleStrand::new("TATGCC", "gcatac", 1, &DNA).unwrap();
    /// assert_eq!(dna.to_repr(), "-TATGCC\nCATACG-");
    /// assert!(DoubleStrand::new("TATGCC", "GCATAC", 0, &DNA).is_err());
    /// ```
    pub fn new(watson: &str, crick: &str, overhang: isize, table: &ComplementTable) -> Result<Self, SeguidError> {
        let watson = watson.to_ascii_uppercase();
        let crick = crick.to_ascii_uppercase();
        table.check(&watson)?;
        table.check(&crick)?;

        // The table only contains ASCII symbols, so lengths in bytes are lengths in bases.
        let watson_len = watson.len() as isize;
        let crick_len = crick.len() as isize;
        if overhang <= -watson_len || overhang >= crick_len {
            return Err(SeguidError::InvalidOverhang {
                watson: watson.len(),
                crick: crick.len(),
                overhang,
            });
        }

        // Positions are relative to the left end of the bottom strand.
        let bottom = algorithms::reverse_complement(&crick, table);
        let start = cmp::max(overhang, 0);
        let end = cmp::min(overhang + watson_len, crick_len);
        let top = &watson[(start - overhang) as usize..(end - overhang) as usize];
        if top != &bottom[start as usize..end as usize] {
            return Err(SeguidError::Mismatch);
        }

        Ok(DoubleStrand { watson, crick, overhang })
    }

    /// Creates a fully annealed molecule from the top strand.
    ///
    /// The bottom strand is the reverse complement of the top strand.
    pub fn from_watson(watson: &str, table: &ComplementTable) -> Result<Self, SeguidError> {
        let crick = algorithms::reverse_complement(watson, table);
        Self::new(watson, &crick, 0, table)
    }

    /// Parses a molecule from its text figure.
    ///
    /// The figure consists of two non-empty lines, with `-` marking missing bases at the ends.
    /// Blank lines, common indentation, and trailing whitespace are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use seguid::{DoubleStrand, DNA};
    ///
    /// let figure = "
    ///     -TATGCC
    ///     CATACG-
    /// ";
    /// let dna = DoubleStrand::from_repr(figure, &DNA).unwrap();
    /// assert_eq!(dna.watson(), "TATGCC");
    /// assert_eq!(dna.crick(), "GCATAC");
    /// assert_eq!(dna.overhang(), 1);
    /// ```
    pub fn from_repr(figure: &str, table: &ComplementTable) -> Result<Self, SeguidError> {
        let lines: Vec<&str> = figure.lines().filter(|line| !line.trim().is_empty()).collect();
        if lines.len() != 2 {
            return Err(SeguidError::InvalidRepresentation(format!(
                "expected two non-empty lines, found {}", lines.len()
            )));
        }

        let indent = lines.iter()
            .map(|line| line.len() - line.trim_start_matches([' ', '\t']).len())
            .min()
            .unwrap_or(0);
        let top = lines[0][indent..].trim_end();
        let bottom = lines[1][indent..].trim_end();

        let top_padding = top.len() - top.trim_start_matches(Self::PADDING).len();
        let bottom_padding = bottom.len() - bottom.trim_start_matches(Self::PADDING).len();
        let watson = top.trim_matches(Self::PADDING);
        let crick: String = bottom.trim_matches(Self::PADDING).chars().rev().collect();
        if watson.is_empty() || crick.is_empty() {
            return Err(SeguidError::InvalidRepresentation(String::from("empty strand")));
        }
        let overhang = top_padding as isize - bottom_padding as isize;

        Self::new(watson, &crick, overhang, table)
    }
}

//-----------------------------------------------------------------------------

/// Queries and canonical messages.
impl DoubleStrand {
    /// Returns the top strand (5' to 3').
    pub fn watson(&self) -> &str {
        &self.watson
    }

    /// Returns the bottom strand (5' to 3').
    pub fn crick(&self) -> &str {
        &self.crick
    }

    /// Returns the overhang at the left end.
    pub fn overhang(&self) -> isize {
        self.overhang
    }

    /// Returns the overhang of the same molecule with the strands swapped.
    pub fn flipped_overhang(&self) -> isize {
        self.watson.len() as isize - self.crick.len() as isize + self.overhang
    }

    // Renders the two-line figure with the given top strand.
    fn render(watson: &str, crick: &str, overhang: isize) -> String {
        let watson_len = watson.len() as isize;
        let crick_len = crick.len() as isize;
        let padding = |count: isize| Self::PADDING.to_string().repeat(cmp::max(count, 0) as usize);

        let mut result = String::with_capacity(2 * (watson.len() + crick.len()) + 1);
        result.push_str(&padding(overhang));
        result.push_str(watson);
        result.push_str(&padding(crick_len - watson_len - overhang));
        result.push(Self::SEPARATOR);
        result.push_str(&padding(-overhang));
        result.extend(crick.chars().rev());
        result.push_str(&padding(overhang + watson_len - crick_len));
        result
    }

    /// Returns the text figure of the molecule with the top strand on the first line.
    pub fn to_repr(&self) -> String {
        Self::render(&self.watson, &self.crick, self.overhang)
    }

    /// Returns the canonical message of the molecule.
    ///
    /// This is the text figure of the molecule, oriented so that the smaller strand is on the first line.
    /// Ties are broken by the overhang.
    pub fn canonical_message(&self) -> String {
        let forward = (self.watson.as_str(), self.crick.as_str(), self.overhang);
        let reverse = (self.crick.as_str(), self.watson.as_str(), self.flipped_overhang());
        let (watson, crick, overhang) = cmp::min(forward, reverse);
        Self::render(watson, crick, overhang)
    }

    /// Returns the checksum of the molecule as a linear molecule.
    pub fn linear_seguid(&self) -> Seguid {
        Seguid::from_message(Flavor::DoubleLinear, &self.canonical_message())
    }

    /// Returns the checksum of the molecule as a circular molecule.
    ///
    /// Both strands are rotated so that one of them becomes its minimal rotation.
    /// Of the two options, the one with the smaller strands is hashed as a linear molecule.
    /// Returns an error if the strands differ in length or the molecule has an overhang.
    pub fn circular_seguid(&self) -> Result<Seguid, SeguidError> {
        if self.watson.len() != self.crick.len() {
            return Err(SeguidError::LengthMismatch { watson: self.watson.len(), crick: self.crick.len() });
        }
        if self.overhang != 0 {
            return Err(SeguidError::InvalidOverhang {
                watson: self.watson.len(),
                crick: self.crick.len(),
                overhang: self.overhang,
            });
        }

        let len = self.watson.len() as isize;
        let x = algorithms::minimal_rotation_start(self.watson.as_bytes()) as isize;
        let y = algorithms::minimal_rotation_start(self.crick.as_bytes()) as isize;
        let from_watson = (algorithms::rotate(&self.watson, x), algorithms::rotate(&self.crick, len - x));
        let from_crick = (algorithms::rotate(&self.crick, y), algorithms::rotate(&self.watson, len - y));
        let (watson, crick) = cmp::min(from_watson, from_crick);

        let rotated = DoubleStrand { watson, crick, overhang: 0 };
        Ok(Seguid::from_message(Flavor::DoubleCircular, &rotated.canonical_message()))
    }
}

//-----------------------------------------------------------------------------

/// Returns the checksum of a linear double-stranded molecule given as two strands.
///
/// See [`DoubleStrand::new`] for the arguments and errors.
///
/// # Examples
///
/// ```
/// use seguid::{strands, DNA};
///
/// let a = strands::dlseguid("TATGCC", "GCATAC", 1, &DNA).unwrap();
/// let b = strands::dlseguid("GCATAC", "TATGCC", 1, &DNA).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "dlseguid:E7YtPGWjj3qCaPzWurlYBaJy_X4");
/// ```
pub fn dlseguid(watson: &str, crick: &str, overhang: isize, table: &ComplementTable) -> Result<Seguid, SeguidError> {
    let molecule = DoubleStrand::new(watson, crick, overhang, table)?;
    let message = molecule.canonical_message();
    message_table(table)?.check(&message)?;
    Ok(Seguid::from_message(Flavor::DoubleLinear, &message))
}

// The table extended with the padding and separator characters of the text figure.
fn message_table(table: &ComplementTable) -> Result<ComplementTable, SeguidError> {
    table.with_symbols(&[DoubleStrand::PADDING as u8, DoubleStrand::SEPARATOR as u8])
}

/// Returns the checksum of a circular double-stranded molecule given as two strands.
///
/// The strands must have the same length and be fully complementary.
/// All rotations of the molecule have the same checksum.
pub fn dcseguid(watson: &str, crick: &str, table: &ComplementTable) -> Result<Seguid, SeguidError> {
    table.check(watson)?;
    table.check(crick)?;
    if watson.len() != crick.len() {
        return Err(SeguidError::LengthMismatch { watson: watson.len(), crick: crick.len() });
    }
    let molecule = DoubleStrand::new(watson, crick, 0, table)?;
    molecule.circular_seguid()
}

//-----------------------------------------------------------------------------


//-----------------------------------------------------------------------------
