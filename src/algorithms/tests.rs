use super::*;

use crate::{DNA, IUPAC};

use rand::Rng;

//-----------------------------------------------------------------------------

const ROUNDS: usize = 200;
const MAX_LEN: usize = 40;

// Returns a random sequence over the given alphabet.
fn random_sequence(rng: &mut impl Rng, alphabet: &[u8], len: usize) -> String {
    (0..len).map(|_| alphabet[rng.random_range(0..alphabet.len())] as char).collect()
}

// Returns all rotations of the sequence, starting from offset 0.
fn all_rotations(seq: &str) -> Vec<String> {
    let chars: Vec<char> = seq.chars().collect();
    (0..chars.len())
        .map(|i| chars[i..].iter().chain(chars[..i].iter()).collect())
        .collect()
}

fn brute_force_minimum(seq: &str) -> String {
    all_rotations(seq).into_iter().min().unwrap_or_default()
}

//-----------------------------------------------------------------------------

#[test]
fn reverse_complement_examples() {
    assert_eq!(reverse_complement("", &IUPAC), "", "Wrong reverse complement for an empty sequence");
    assert_eq!(reverse_complement("AATT", &IUPAC), "AATT", "AATT should be self-complementary");
    assert_eq!(reverse_complement("GATTACA", &IUPAC), "TGTAATC", "Wrong reverse complement for GATTACA");
    assert_eq!(reverse_complement("gaTTaca", &IUPAC), "tgtAAtc", "Case should be preserved");
    assert_eq!(reverse_complement("RYKMSWBDHVNX", &IUPAC), "XNBDHVWSKMRY", "Wrong reverse complement for IUPAC codes");
    assert_eq!(reverse_complement("AC-GZ", &IUPAC), "ZC-GT", "Unknown characters should pass through");
    assert_eq!(reverse_complement("ACGU", &IUPAC), "ACGT", "U should be complemented to A");
    assert_eq!(reverse_complement("ACGU", &crate::RNA), "ACGU", "Wrong RNA reverse complement");
    assert_eq!(reverse_complement("AÅC", &IUPAC), "GÅT", "Non-ASCII characters should pass through");
}

#[test]
fn reverse_complement_involution() {
    let mut rng = rand::rng();
    let alphabet = b"ACGTMRWSYKVHDBXNacgtn";
    for round in 0..ROUNDS {
        let len = rng.random_range(0..=MAX_LEN);
        let seq = random_sequence(&mut rng, alphabet, len);
        let rc = reverse_complement(&seq, &IUPAC);
        assert_eq!(rc.len(), seq.len(), "Reverse complement changed the length in round {}", round);
        assert_eq!(reverse_complement(&rc, &IUPAC), seq, "Reverse complement is not an involution in round {}", round);
    }
}

#[test]
fn rotate_examples() {
    assert_eq!(rotate("", 3), "", "Rotating an empty sequence should do nothing");
    assert_eq!(rotate("GATACCA", 0), "GATACCA", "Rotation by 0 should do nothing");
    assert_eq!(rotate("GATACCA", 7), "GATACCA", "Rotation by the length should do nothing");
    assert_eq!(rotate("GATACCA", 1), "ATACCAG", "Wrong left rotation");
    assert_eq!(rotate("GATACCA", -1), "AGATACC", "Wrong right rotation");
    assert_eq!(rotate("GATACCA", 8), "ATACCAG", "Rotation should be modulo length");
    assert_eq!(rotate("GATACCA", -15), "AGATACC", "Negative rotation should be modulo length");
    assert_eq!(rotate("ÅAB", 1), "ABÅ", "Rotation should work on characters");
}

//-----------------------------------------------------------------------------

#[test]
fn minimal_rotation_examples() {
    assert_eq!(minimal_rotation_start::<u8>(&[]), 0, "Empty input should start at 0");
    assert_eq!(minimal_rotation(""), "", "Wrong rotation for an empty sequence");
    assert_eq!(minimal_rotation("A"), "A", "Wrong rotation for a single character");
    assert_eq!(minimal_rotation("TAAA"), "AAAT", "Wrong rotation for TAAA");
    assert_eq!(minimal_rotation_start(b"TAAA"), 1, "Wrong start for TAAA");

    let seq = "TAGACCA";
    let expected = "ACCATAG";
    let rotations = all_rotations(seq);
    assert!(rotations.iter().any(|r| r == expected), "{} is not a rotation of {}", expected, seq);
    assert_eq!(minimal_rotation(seq), expected, "Wrong rotation for {}", seq);

    assert_eq!(
        minimal_rotation("ACAACAAACAACACAAACAAACACAAC"),
        "AAACAAACACAACACAACAAACAACAC",
        "Wrong rotation for a long repetitive sequence"
    );
    assert_eq!(
        minimal_rotation("abaabaaabaababaaabaaababaab"),
        "aaabaaababaababaabaaabaabab",
        "Wrong rotation for a lower-case sequence"
    );
    // Upper case sorts before lower case.
    assert_eq!(
        minimal_rotation("abaabaaabaababaaabaaaBabaab"),
        "Babaababaabaaabaababaaabaaa",
        "Wrong rotation with mixed case"
    );
    assert_eq!(minimal_rotation("CÅBA"), "ACÅB", "Wrong rotation with non-ASCII characters");
}

#[test]
fn minimal_rotation_ties() {
    for seq in ["AAAA", "ACAC", "ACGACGACG", "TTTTTTTTA"] {
        let first = minimal_rotation_start(seq.as_bytes());
        let second = minimal_rotation_start(seq.as_bytes());
        assert_eq!(first, second, "Start is not deterministic for {}", seq);
        assert_eq!(minimal_rotation(seq), brute_force_minimum(seq), "Wrong rotation for {}", seq);
    }
}

#[test]
fn minimal_rotation_random() {
    let mut rng = rand::rng();
    for round in 0..ROUNDS {
        // Small alphabets create many repeats.
        let alphabet: &[u8] = if round % 2 == 0 { b"AC" } else { b"ACGT" };
        let len = rng.random_range(1..=MAX_LEN);
        let seq = random_sequence(&mut rng, alphabet, len);
        let start = minimal_rotation_start(seq.as_bytes());
        assert!(start < len, "Start {} out of range for {} in round {}", start, seq, round);
        let result = minimal_rotation(&seq);
        assert_eq!(result, rotate(&seq, start as isize), "Result does not match the start in round {}", round);
        assert!(all_rotations(&seq).contains(&result), "{} is not a rotation of {} in round {}", result, seq, round);
        assert_eq!(result, brute_force_minimum(&seq), "Wrong minimal rotation of {} in round {}", seq, round);
    }
}

//-----------------------------------------------------------------------------

#[test]
fn canonical_linear_examples() {
    assert_eq!(canonical_linear("", &IUPAC), "", "Empty sequence should have an empty canonical form");
    assert_eq!(canonical_linear("ACGT", &IUPAC), "ACGT", "Wrong canonical form for a palindrome");
    let rc = reverse_complement("ACGT", &IUPAC);
    assert_eq!(rc, "ACGT", "ACGT should be its own reverse complement");
    assert_eq!(canonical_linear("ACGT", &IUPAC), canonical_linear(&rc, &IUPAC), "Palindrome canonical forms differ");

    assert_eq!(canonical_linear("TTTA", &IUPAC), "TAAA", "Reverse complement should be chosen");
    assert_eq!(canonical_linear("taaa", &IUPAC), "TAAA", "Input should be upper-cased");
    assert_eq!(canonical_linear("GATTACA", &IUPAC), "GATTACA", "Forward strand should be chosen");
    assert_eq!(canonical_linear("TGTAATC", &IUPAC), "GATTACA", "Strands should have the same canonical form");
}

#[test]
fn canonical_linear_random() {
    let mut rng = rand::rng();
    for round in 0..ROUNDS {
        let len = rng.random_range(0..=MAX_LEN);
        let seq = random_sequence(&mut rng, b"ACGTacgtN", len);
        let rc = reverse_complement(&seq, &IUPAC);
        let canonical = canonical_linear(&seq, &IUPAC);
        assert_eq!(canonical.len(), seq.len(), "Canonical form changed the length in round {}", round);
        assert_eq!(canonical, canonical_linear(&rc, &IUPAC), "Strands differ in round {}", round);
        let upper = seq.to_ascii_uppercase();
        assert!(canonical == upper || canonical == reverse_complement(&upper, &IUPAC), "Canonical form is not a strand in round {}", round);
    }
}

#[test]
fn canonical_circular_examples() {
    assert_eq!(canonical_circular("", &IUPAC), "", "Empty sequence should have an empty canonical form");
    let canonical = canonical_circular("ACGTACGT", &IUPAC);
    assert_eq!(canonical, "ACGTACGT", "Wrong canonical form for ACGTACGT");
    assert_eq!(canonical_circular("GTACGTAC", &IUPAC), canonical, "Rotation has a different canonical form");
    let rc = reverse_complement("ACGTACGT", &IUPAC);
    assert_eq!(canonical_circular(&rc, &IUPAC), canonical, "Reverse complement has a different canonical form");

    assert_eq!(canonical_circular("TTTA", &IUPAC), "AAAT", "Wrong canonical form for TTTA");
    assert_eq!(canonical_circular("gattaca", &IUPAC), "AATCTGT", "Wrong canonical form for GATTACA");
    assert_eq!(canonical_circular("TAGACCA", &IUPAC), "ACCATAG", "Wrong canonical form for TAGACCA");
}

#[test]
fn canonical_circular_random() {
    let mut rng = rand::rng();
    for round in 0..ROUNDS {
        let len = rng.random_range(1..=MAX_LEN);
        let seq = random_sequence(&mut rng, b"ACGT", len);
        let canonical = canonical_circular(&seq, &IUPAC);
        for rotation in all_rotations(&seq) {
            assert_eq!(canonical_circular(&rotation, &IUPAC), canonical, "Rotation {} of {} differs in round {}", rotation, seq, round);
            let rc = reverse_complement(&rotation, &IUPAC);
            assert_eq!(canonical_circular(&rc, &IUPAC), canonical, "Reverse complement {} of {} differs in round {}", rc, seq, round);
        }
        let expected = cmp::min(brute_force_minimum(&seq), brute_force_minimum(&reverse_complement(&seq, &IUPAC)));
        assert_eq!(canonical, expected, "Wrong canonical form for {} in round {}", seq, round);
    }
}

#[test]
fn canonical_topology() {
    assert_eq!(canonical("TTTA", Topology::Linear, &DNA), "TAAA", "Wrong linear canonical form");
    assert_eq!(canonical("TTTA", Topology::Circular, &DNA), "AAAT", "Wrong circular canonical form");
}

#[test]
fn candidates_have_equal_length() {
    // Characters outside the table, including multi-byte ones, keep both candidates the same length.
    for seq in ["ACG-T", "AÅCΩ", "ZZZA", "acgu\n"] {
        let upper = seq.to_ascii_uppercase();
        let rc = reverse_complement(&upper, &DNA);
        assert_eq!(rc.len(), upper.len(), "Strands of {:?} differ in length", seq);
        assert_eq!(minimal_rotation(&rc).len(), minimal_rotation(&upper).len(), "Rotations of {:?} differ in length", seq);
        assert_eq!(canonical_linear(seq, &DNA).len(), seq.len(), "Linear canonical form of {:?} changed the length", seq);
        assert_eq!(canonical_circular(seq, &DNA).len(), seq.len(), "Circular canonical form of {:?} changed the length", seq);
    }
}

//-----------------------------------------------------------------------------
