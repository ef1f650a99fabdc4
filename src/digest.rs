//! Hashing canonical messages into identifiers.
//!
//! The identifier is the SHA-1 digest of the upper-cased message, encoded with base64url (RFC 4648 section 5) without padding.
//! The hash algorithm is fixed, so that independent implementations produce the same identifiers.
//! SHA-1 is linked into the crate, so hashing cannot fail.

use sha1::{Digest, Sha1};

//-----------------------------------------------------------------------------

/// Length of a SHA-1 digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// Length of an encoded identifier in characters.
pub const IDENTIFIER_LEN: usize = 27;

//-----------------------------------------------------------------------------

/// Returns the SHA-1 digest of the upper-cased message.
pub fn sha1_digest(message: &str) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha1::new();
    hasher.update(message.to_ascii_uppercase().as_bytes());
    let hash = hasher.finalize();
    let mut result = [0u8; DIGEST_LEN];
    result.copy_from_slice(&hash);
    result
}

/// Returns the identifier for the given canonical message.
///
/// The result is always [`IDENTIFIER_LEN`] characters over `[A-Za-z0-9_-]`.
///
/// # Examples
///
/// ```
/// use seguid::identifier_for;
///
/// assert_eq!(identifier_for("AT"), "Ax_RG6hzSrMEEWoCO1IWMGska-4");
/// assert_eq!(identifier_for("at"), "Ax_RG6hzSrMEEWoCO1IWMGska-4");
/// ```
pub fn identifier_for(message: &str) -> String {
    let digest = sha1_digest(message);
    base64_url::encode(&digest)
}

/// Returns the identifier for the given message using the standard base64 alphabet.
///
/// This is the original SEGUID encoding, which may contain `+` and `/`.
/// It is not safe for URLs or file names.
pub fn standard_identifier_for(message: &str) -> String {
    identifier_for(message)
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            _ => c,
        })
        .collect()
}

//-----------------------------------------------------------------------------


//-----------------------------------------------------------------------------
