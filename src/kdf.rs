// This file is part of libpep.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Blake2b-based subkey derivation, supplementing the `pep` pipeline for
//! callers who want to manage the `secret: &str` parameter of
//! [`crate::pep::make_factor`] as a single root seed rather than storing one
//! secret string per user/context. Mirrors libsodium's
//! `crypto_kdf_blake2b_{keygen, derive_from_key}`, which `original_source`'s
//! key-server scenarios build on to turn one root secret into per-user,
//! per-context subkeys (see `PEP.PEPWithKeyServer` /
//! `PEP.PEPWithoutKeyServer`).
//!
//! This is a derivation primitive only; *how* access manager and
//! transcryptor agree on and distribute a root seed is explicitly out of
//! scope (see the crate-level non-goals).

use blake2::digest::Mac;
use blake2::Blake2bMac512;
use rand_core::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// An 8-byte domain-separation tag, analogous to libsodium's
/// `crypto_kdf_blake2b_CONTEXTBYTES`.
pub type KdfContext = [u8; 8];

/// A 32-byte root seed from which many subkeys can be derived. Zeroized on
/// drop since it is secret key material.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SeedKey([u8; 32]);

impl SeedKey {
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> SeedKey {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        SeedKey(bytes)
    }

    #[cfg(feature = "std")]
    pub fn generate_os() -> SeedKey {
        SeedKey::generate(&mut rand::rngs::OsRng)
    }

    pub fn from_bytes(bytes: [u8; 32]) -> SeedKey {
        SeedKey(bytes)
    }
}

/// Derives `out_len` bytes of subkey material from `seed`, domain-separated
/// by `subkey_id` and `context`. `Blake2bMac512` keyed on `seed`, MACing
/// `context ‖ subkey_id ‖ block_index`, expanded in 64-byte blocks
/// (counter-mode over the block index) when `out_len` exceeds a single
/// Blake2b-512 tag. Keying on `seed` rather than hashing it as ordinary
/// input is what makes this a keyed derivation rather than a public hash,
/// matching libsodium's `crypto_kdf_blake2b_derive_from_key`.
pub fn derive_subkey(seed: &SeedKey, subkey_id: u64, context: &KdfContext, out_len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(out_len);
    let mut block_index: u64 = 0;
    while out.len() < out_len {
        let mut mac = Blake2bMac512::new_from_slice(&seed.0).expect("32-byte seed is a valid Blake2b key");
        mac.update(context);
        mac.update(&subkey_id.to_le_bytes());
        mac.update(&block_index.to_le_bytes());
        let tag = mac.finalize().into_bytes();
        let remaining = out_len - out.len();
        out.extend_from_slice(&tag[..remaining.min(tag.len())]);
        block_index += 1;
    }
    out
}
