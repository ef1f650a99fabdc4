//! Algorithms for choosing the canonical orientation of a sequence.
//!
//! A linear double-stranded molecule can be read from either strand.
//! The canonical form is the lexicographically smaller of the sequence and its reverse complement.
//!
//! A circular molecule can additionally be read starting from any position.
//! The canonical form is the smallest rotation of either strand.
//! Rotations are found with a linear-time least rotation scan instead of comparing all rotations.
//!
//! All comparisons use plain code point order on upper-cased sequences.

use crate::ComplementTable;

use std::cmp;

//-----------------------------------------------------------------------------

/// Topology of a molecule.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Topology {
    /// The molecule has two ends.
    Linear,
    /// The end of the molecule wraps back to the start.
    Circular,
}

//-----------------------------------------------------------------------------

/// Returns the reverse complement of the sequence.
///
/// Characters outside the alphabet of the table are kept as they are.
///
/// # Examples
///
/// ```
/// use seguid::{reverse_complement, IUPAC};
///
/// assert_eq!(reverse_complement("GATTACA", &IUPAC), "TGTAATC");
/// assert_eq!(reverse_complement("acgN", &IUPAC), "Ncgt");
/// ```
pub fn reverse_complement(seq: &str, table: &ComplementTable) -> String {
    seq.chars().rev().map(|c| table.complement(c)).collect()
}

/// Rotates the sequence `amount` characters to the left.
///
/// A negative amount rotates to the right.
/// Rotating by `amount` is the same as rotating by `amount + k * len` for any integer `k`.
///
/// # Examples
///
/// ```
/// use seguid::rotate;
///
/// assert_eq!(rotate("GATACCA", 1), "ATACCAG");
/// assert_eq!(rotate("GATACCA", -1), "AGATACC");
/// assert_eq!(rotate("GATACCA", 8), "ATACCAG");
/// ```
pub fn rotate(seq: &str, amount: isize) -> String {
    let len = seq.chars().count();
    if len == 0 {
        return String::new();
    }
    let shift = amount.rem_euclid(len as isize) as usize;
    let split = seq.char_indices().nth(shift).map(|(offset, _)| offset).unwrap_or(seq.len());
    let mut result = String::with_capacity(seq.len());
    result.push_str(&seq[split..]);
    result.push_str(&seq[..split]);
    result
}

//-----------------------------------------------------------------------------

/// Returns the starting offset of the lexicographically smallest rotation.
///
/// The slice is treated as circular.
/// When several rotations are equal, the result is the same offset for the same input every time.
/// Returns `0` for an empty slice.
///
/// The scan keeps the best known start `a` and a probe start `b`.
/// When the probe is smaller, it becomes the new best start.
/// When the best start is smaller, or the comparison reaches the probe start, the matched run is skipped.
pub fn minimal_rotation_start<T: Ord>(seq: &[T]) -> usize {
    let n = seq.len();
    if n == 0 {
        return 0;
    }

    // Position `i` of the doubled sequence.
    let at = |i: usize| &seq[i % n];

    let mut a = 0;
    let mut b = 0;
    while b < n {
        for i in 0..(n - a) {
            let best = at(a + i);
            let probe = at(b + i);
            if best < probe || a + i == b {
                if i > 0 {
                    b += i - 1;
                }
                break;
            }
            if best > probe {
                a = b;
                break;
            }
        }
        b += 1;
    }

    a
}

/// Returns the lexicographically smallest rotation of the sequence.
///
/// # Examples
///
/// ```
/// use seguid::minimal_rotation;
///
/// assert_eq!(minimal_rotation("TAGACCA"), "ACCATAG");
/// assert_eq!(minimal_rotation("TAAA"), "AAAT");
/// assert_eq!(minimal_rotation(""), "");
/// ```
pub fn minimal_rotation(seq: &str) -> String {
    let start = if seq.is_ascii() {
        minimal_rotation_start(seq.as_bytes())
    } else {
        let chars: Vec<char> = seq.chars().collect();
        minimal_rotation_start(&chars)
    };
    rotate(seq, start as isize)
}

//-----------------------------------------------------------------------------

/// Returns the canonical form of a linear double-stranded sequence.
///
/// The result is the upper-cased sequence or its reverse complement, whichever is smaller.
/// A sequence and its reverse complement have the same canonical form.
pub fn canonical_linear(seq: &str, table: &ComplementTable) -> String {
    let forward = seq.to_ascii_uppercase();
    let reverse = reverse_complement(&forward, table);
    debug_assert_eq!(forward.len(), reverse.len());
    if forward <= reverse {
        forward
    } else {
        reverse
    }
}

/// Returns the canonical form of a circular double-stranded sequence.
///
/// The result is the smaller of the minimal rotations of the upper-cased sequence and its reverse complement.
/// All rotations of both strands have the same canonical form.
pub fn canonical_circular(seq: &str, table: &ComplementTable) -> String {
    let forward = seq.to_ascii_uppercase();
    let reverse = reverse_complement(&forward, table);
    let forward = minimal_rotation(&forward);
    let reverse = minimal_rotation(&reverse);
    debug_assert_eq!(forward.len(), reverse.len());
    cmp::min(forward, reverse)
}

/// Returns the canonical form of a double-stranded sequence with the given topology.
pub fn canonical(seq: &str, topology: Topology, table: &ComplementTable) -> String {
    match topology {
        Topology::Linear => canonical_linear(seq, table),
        Topology::Circular => canonical_circular(seq, table),
    }
}

//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests;

//-----------------------------------------------------------------------------
