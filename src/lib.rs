//! Sequence Globally Unique Identifiers (SEGUID) for biological sequences.
//!
//! A SEGUID is the SHA-1 hash of a canonical representation of a sequence, encoded with unpadded base64url.
//! The canonical representation makes the identifier independent of the orientations that do not change the molecule.
//! For linear double-stranded DNA, the sequence and its reverse complement get the same identifier.
//! For circular DNA, all rotations of both strands also get the same identifier.
//!
//! The complement table is always passed explicitly.
//! [`IUPAC`] covers the IUPAC nucleotide codes, while [`DNA`] and [`RNA`] accept only the unambiguous bases.
//!
//! ```
//! use seguid::{linear_identifier, circular_identifier, IUPAC};
//!
//! let a = linear_identifier("GATTACA", &IUPAC);
//! let b = linear_identifier("TGTAATC", &IUPAC);
//! assert_eq!(a, b);
//!
//! let c = circular_identifier("ACGTTT", &IUPAC);
//! let d = circular_identifier("TTACGT", &IUPAC);
//! assert_eq!(c, d);
//! assert_eq!(c.value().len(), 27);
//! ```

pub mod algorithms;
pub mod alphabet;
pub mod digest;
pub mod error;
pub mod identifier;
pub mod strands;

pub use algorithms::{canonical, canonical_circular, canonical_linear, minimal_rotation, reverse_complement, rotate, Topology};
pub use alphabet::{normalize, ComplementTable, DNA, IUPAC, RNA};
pub use digest::identifier_for;
pub use error::SeguidError;
pub use identifier::{circular_identifier, linear_identifier, Flavor, Seguid};
pub use strands::{dcseguid, dlseguid, DoubleStrand};
