//! SEGUID checksums of different flavors.
//!
//! A [`Seguid`] combines a [`Flavor`] with the encoded digest.
//! The flavor determines how the sequence is turned into the canonical message before hashing.
//! The textual form of a checksum is `prefix:value`, where the prefix names the flavor:
//!
//! * `seguid`: the original SEGUID (Babnigg & Giometti 2006) using the standard base64 alphabet.
//! * `slseguid`: single-stranded linear sequences; the sequence is hashed as is.
//! * `scseguid`: single-stranded circular sequences; the minimal rotation is hashed.
//! * `lseguid`: linear double-stranded sequences given as one strand; the smaller strand is hashed.
//! * `cseguid`: circular double-stranded sequences given as one strand; the smallest rotation of either strand is hashed.
//! * `dlseguid`: linear double-stranded sequences with explicit strands and overhangs (see [`crate::strands`]).
//! * `dcseguid`: circular double-stranded sequences with explicit strands (see [`crate::strands`]).
//!
//! All flavors except `seguid` use the base64url alphabet and are safe for file names and URLs.

use crate::{algorithms, digest, ComplementTable, SeguidError};

use std::fmt;
use std::str::FromStr;

//-----------------------------------------------------------------------------

/// The way a sequence is canonicalized before hashing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Flavor {
    /// Original SEGUID with standard base64 encoding.
    Seguid,
    /// Single-stranded linear.
    SingleLinear,
    /// Single-stranded circular.
    SingleCircular,
    /// Double-stranded linear, given as a single strand.
    Linear,
    /// Double-stranded circular, given as a single strand.
    Circular,
    /// Double-stranded linear, given as two strands.
    DoubleLinear,
    /// Double-stranded circular, given as two strands.
    DoubleCircular,
}

impl Flavor {
    /// All flavors.
    pub const ALL: [Flavor; 7] = [
        Flavor::Seguid,
        Flavor::SingleLinear,
        Flavor::SingleCircular,
        Flavor::Linear,
        Flavor::Circular,
        Flavor::DoubleLinear,
        Flavor::DoubleCircular,
    ];

    /// Returns the name of the flavor, which is also the checksum prefix.
    pub fn name(self) -> &'static str {
        match self {
            Flavor::Seguid => "seguid",
            Flavor::SingleLinear => "slseguid",
            Flavor::SingleCircular => "scseguid",
            Flavor::Linear => "lseguid",
            Flavor::Circular => "cseguid",
            Flavor::DoubleLinear => "dlseguid",
            Flavor::DoubleCircular => "dcseguid",
        }
    }

    /// Returns the flavor with the given name, if there is one.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flavor| flavor.name() == name)
    }

    /// Returns `true` if the value uses the base64url alphabet.
    pub fn is_url_safe(self) -> bool {
        self != Flavor::Seguid
    }

    /// Returns `true` if the checksum is for a double-stranded molecule.
    pub fn is_double_stranded(self) -> bool {
        matches!(self, Flavor::Linear | Flavor::Circular | Flavor::DoubleLinear | Flavor::DoubleCircular)
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//-----------------------------------------------------------------------------

/// A SEGUID checksum.
///
/// # Examples
///
/// ```
/// use seguid::{Flavor, Seguid, IUPAC};
///
/// let checksum = Seguid::slseguid("AT");
/// assert_eq!(checksum.flavor(), Flavor::SingleLinear);
/// assert_eq!(checksum.value(), "Ax_RG6hzSrMEEWoCO1IWMGska-4");
/// assert_eq!(checksum.to_string(), "slseguid:Ax_RG6hzSrMEEWoCO1IWMGska-4");
///
/// let parsed: Seguid = "slseguid:Ax_RG6hzSrMEEWoCO1IWMGska-4".parse().unwrap();
/// assert_eq!(parsed, checksum);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seguid {
    flavor: Flavor,
    value: String,
}

/// Constants.
impl Seguid {
    /// Separator between the prefix and the value.
    const SEPARATOR: char = ':';
}

/// Construction.
impl Seguid {
    /// Hashes a canonical message that has already been built for the given flavor.
    pub fn from_message(flavor: Flavor, message: &str) -> Self {
        let value = if flavor.is_url_safe() {
            digest::identifier_for(message)
        } else {
            digest::standard_identifier_for(message)
        };
        Seguid { flavor, value }
    }

    /// Original SEGUID for a protein or single-stranded linear sequence.
    ///
    /// The value may contain `+` and `/`.
    /// Use [`Seguid::slseguid`] for a URL-safe checksum.
    pub fn seguid(seq: &str) -> Self {
        Self::from_message(Flavor::Seguid, seq)
    }

    /// Checksum for a single-stranded linear sequence.
    ///
    /// This hashes the sequence without canonicalization.
    pub fn slseguid(seq: &str) -> Self {
        Self::from_message(Flavor::SingleLinear, seq)
    }

    /// Checksum for a single-stranded circular sequence.
    ///
    /// All rotations of the sequence have the same checksum.
    pub fn scseguid(seq: &str) -> Self {
        let message = algorithms::minimal_rotation(&seq.to_ascii_uppercase());
        Self::from_message(Flavor::SingleCircular, &message)
    }

    /// Checksum for a linear double-stranded sequence given as one strand.
    ///
    /// Both strands have the same checksum.
    pub fn lseguid(seq: &str, table: &ComplementTable) -> Self {
        let message = algorithms::canonical_linear(seq, table);
        Self::from_message(Flavor::Linear, &message)
    }

    /// Checksum for a circular double-stranded sequence given as one strand.
    ///
    /// All rotations of both strands have the same checksum.
    pub fn cseguid(seq: &str, table: &ComplementTable) -> Self {
        let message = algorithms::canonical_circular(seq, table);
        Self::from_message(Flavor::Circular, &message)
    }
}

/// Queries.
impl Seguid {
    /// Returns the flavor of the checksum.
    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Returns the encoded digest without the prefix.
    pub fn value(&self) -> &str {
        &self.value
    }

    // Returns `true` if `value` is a well-formed value for the flavor.
    fn is_valid_value(flavor: Flavor, value: &str) -> bool {
        let (extra_1, extra_2) = if flavor.is_url_safe() { (b'-', b'_') } else { (b'+', b'/') };
        value.len() == digest::IDENTIFIER_LEN
            && value.bytes().all(|b| b.is_ascii_alphanumeric() || b == extra_1 || b == extra_2)
    }
}

impl fmt::Display for Seguid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.flavor, Self::SEPARATOR, self.value)
    }
}

impl FromStr for Seguid {
    type Err = SeguidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, value) = s.split_once(Self::SEPARATOR)
            .ok_or_else(|| SeguidError::InvalidChecksum(format!("missing prefix in {}", s)))?;
        let flavor = Flavor::from_name(prefix)
            .ok_or_else(|| SeguidError::InvalidChecksum(format!("unknown prefix {}", prefix)))?;
        if !Self::is_valid_value(flavor, value) {
            return Err(SeguidError::InvalidChecksum(format!("malformed value {}", value)));
        }
        Ok(Seguid { flavor, value: String::from(value) })
    }
}

//-----------------------------------------------------------------------------

/// Returns the strand-independent checksum of a linear double-stranded sequence.
///
/// The sequence and its reverse complement have the same checksum.
pub fn linear_identifier(seq: &str, table: &ComplementTable) -> Seguid {
    Seguid::lseguid(seq, table)
}

/// Returns the rotation- and strand-independent checksum of a circular double-stranded sequence.
///
/// All rotations of the sequence and its reverse complement have the same checksum.
pub fn circular_identifier(seq: &str, table: &ComplementTable) -> Seguid {
    Seguid::cseguid(seq, table)
}

//-----------------------------------------------------------------------------


//-----------------------------------------------------------------------------
