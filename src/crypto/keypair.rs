//! Ethereum keypair generation.

use rand::RngCore;
use secp256k1::{All, PublicKey, Secp256k1, SecretKey};
use tiny_keccak::{Hasher, Keccak};

use super::Address;

/// A secp256k1 keypair with its derived Ethereum address.
#[derive(Debug, Clone)]
pub struct Keypair {
    /// 32-byte private key.
    secret_key: [u8; 32],
    /// Address derived from the public key.
    address: Address,
}

impl Keypair {
    /// Generates a keypair from 32 fresh random bytes.
    ///
    /// Fails when the drawn scalar is zero or not below the curve order;
    /// callers retry with new randomness. The secp context is passed in so
    /// a worker can build it once and reuse it across its whole loop.
    #[inline]
    pub fn generate<R: RngCore>(
        secp: &Secp256k1<All>,
        rng: &mut R,
    ) -> Result<Self, secp256k1::Error> {
        let mut secret_bytes = [0u8; 32];
        rng.fill_bytes(&mut secret_bytes);
        Self::from_secret_key(secp, secret_bytes)
    }

    /// Builds a keypair from an existing 32-byte secret key.
    pub fn from_secret_key(
        secp: &Secp256k1<All>,
        secret_bytes: [u8; 32],
    ) -> Result<Self, secp256k1::Error> {
        let secret_key = SecretKey::from_slice(&secret_bytes)?;
        let public_key = PublicKey::from_secret_key(secp, &secret_key);

        Ok(Self {
            secret_key: secret_bytes,
            address: Self::derive_address(&public_key),
        })
    }

    /// Derives the Ethereum address: Keccak-256 over the 64-byte uncompressed
    /// public key (without the 0x04 marker), keeping the last 20 bytes.
    #[inline]
    fn derive_address(public_key: &PublicKey) -> Address {
        let public_key_bytes = public_key.serialize_uncompressed();

        let mut hasher = Keccak::v256();
        hasher.update(&public_key_bytes[1..]);

        let mut hash = [0u8; 32];
        hasher.finalize(&mut hash);

        let mut address_bytes = [0u8; 20];
        address_bytes.copy_from_slice(&hash[12..]);

        Address::from_bytes(address_bytes)
    }

    /// Returns the private key as a 0x-prefixed hex string.
    pub fn private_key_hex(&self) -> String {
        format!("0x{}", hex::encode(self.secret_key))
    }

    /// Returns the raw private key bytes.
    pub fn private_key_bytes(&self) -> &[u8; 32] {
        &self.secret_key
    }

    /// Returns the derived address.
    #[inline]
    pub fn address(&self) -> &Address {
        &self.address
    }
}
