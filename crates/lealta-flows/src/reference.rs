//! # Reference Codes
//!
//! Human-readable correlation codes attached to every submission.
//!
//! Format: 4-character groups of uppercase alphanumerics, dash
//! separated (`AB12-CD34-EF56`). The code exists purely for
//! correlation and display; it is NOT a cryptographic token and makes
//! no uniqueness guarantee. Collision handling belongs to the remote
//! system.

use std::fmt;

use rand::Rng;

/// Characters a reference code may contain.
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Groups per code and characters per group.
const GROUPS: usize = 3;
const GROUP_LEN: usize = 4;

/// A generated correlation code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceCode(String);

impl ReferenceCode {
    /// Generates a fresh code, e.g. `K3Q9-ZZ01-M4XA`.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let mut code = String::with_capacity(GROUPS * GROUP_LEN + GROUPS - 1);

        for group in 0..GROUPS {
            if group > 0 {
                code.push('-');
            }
            for _ in 0..GROUP_LEN {
                let idx = rng.random_range(0..CHARSET.len());
                code.push(CHARSET[idx] as char);
            }
        }

        ReferenceCode(code)
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReferenceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ReferenceCode> for String {
    fn from(code: ReferenceCode) -> Self {
        code.0
    }
}
