//! Ethereum address representation.

use std::fmt;

use tiny_keccak::{Hasher, Keccak};

/// A 20-byte Ethereum address.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    #[inline]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Lowercase hex body without the 0x prefix. This is the form patterns
    /// are matched against.
    #[inline]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Lowercase hex with the 0x prefix.
    pub fn to_hex_prefixed(&self) -> String {
        format!("0x{}", self.to_hex())
    }

    /// EIP-55 mixed-case checksum form with the 0x prefix. This is the form
    /// shown to the user and written to the output file.
    pub fn to_checksum(&self) -> String {
        let hex_body = self.to_hex();

        let mut hasher = Keccak::v256();
        hasher.update(hex_body.as_bytes());
        let mut hash = [0u8; 32];
        hasher.finalize(&mut hash);

        let mut out = String::with_capacity(42);
        out.push_str("0x");

        for (i, c) in hex_body.chars().enumerate() {
            let nibble = if i % 2 == 0 {
                hash[i / 2] >> 4
            } else {
                hash[i / 2] & 0x0f
            };
            if c.is_ascii_alphabetic() && nibble >= 8 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }

        out
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_checksum())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_checksum())
    }
}
