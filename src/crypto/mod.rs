//! Ethereum key generation and address derivation.
//!
//! Keys come from secp256k1 with OS randomness; addresses are the last 20
//! bytes of the Keccak-256 hash of the uncompressed public key.

mod address;
mod keypair;

pub use address::Address;
pub use keypair::Keypair;
