// This file is part of libpep.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The PEP pipeline: global key generation, pseudonym derivation from an
//! identity string, and conversion of a global encrypted pseudonym to a
//! local encrypted pseudonym for a given (decryption-context,
//! pseudonymisation-context) pair.
//!
//! # Wire contract
//!
//! `make_factor` hashes `SHA-512(type ‖ "|" ‖ secret ‖ "|" ‖ context)` with a
//! literal `|` separator and this exact field order. Like the proof
//! transcript in [`crate::proof`], this ordering is part of the external
//! contract: any deviation forks compatibility with other implementations.
//! Callers are responsible for ensuring `context` strings don't themselves
//! need to be distinguished from adversarially chosen inputs containing
//! `|` — this layer does not reject such inputs.

use sha2::{Digest, Sha512};

use crate::elgamal::{self, ElGamal};
use crate::error::Result;
use crate::group::GroupElement;
use crate::scalar::Scalar;

/// The system-wide public key, shared with anyone who needs to encrypt a
/// global pseudonym.
pub type GlobalPublicKey = GroupElement;
/// The system-wide secret key. Held by whoever can mint fresh global
/// decryption keys; never used directly to decrypt a local pseudonym.
pub type GlobalSecretKey = Scalar;
/// An identity-derived pseudonym, encrypted under the global public key.
pub type GlobalEncryptedPseudonym = ElGamal;
/// A global encrypted pseudonym rewritten (via [`rks`](elgamal::rks)) so
/// that it decrypts under a recipient-specific local key.
pub type LocalEncryptedPseudonym = ElGamal;
/// The decrypted plaintext pseudonym, local to one (recipient, context)
/// pair.
pub type LocalPseudonym = GroupElement;
/// The secret scalar that decrypts a [`LocalEncryptedPseudonym`].
pub type LocalDecryptionKey = Scalar;

/// Generates a fresh global keypair: `y <- random`, `Y = y*G`.
pub fn generate_global_keys<R: rand_core::RngCore + rand_core::CryptoRng>(
    rng: &mut R,
) -> Result<(GlobalPublicKey, GlobalSecretKey)> {
    let secret = Scalar::random(rng);
    let public = secret.base_mult()?;
    Ok((public, secret))
}

/// Maps an identity string onto a group element via SHA-512 hash-to-curve,
/// then encrypts it under the global public key. The same identity always
/// maps to the same plaintext point, which is what makes local pseudonyms
/// derived from it stable within a fixed pseudonymisation context.
pub fn generate_pseudonym<R: rand_core::RngCore + rand_core::CryptoRng>(
    identity: &str,
    pk: &GlobalPublicKey,
    rng: &mut R,
) -> Result<GlobalEncryptedPseudonym> {
    let digest: [u8; 64] = Sha512::digest(identity.as_bytes()).into();
    let p = GroupElement::from_hash(&digest);
    elgamal::encrypt(&p, pk, rng)
}

/// `Scalar::from_hash(SHA-512(type ‖ "|" ‖ secret ‖ "|" ‖ context))`.
pub fn make_factor(kind: &str, secret: &str, context: &str) -> Scalar {
    let mut hasher = Sha512::new();
    hasher.update(kind.as_bytes());
    hasher.update(b"|");
    hasher.update(secret.as_bytes());
    hasher.update(b"|");
    hasher.update(context.as_bytes());
    let digest: [u8; 64] = hasher.finalize().into();
    Scalar::from_hash(&digest)
}

pub fn make_pseudonymisation_factor(secret: &str, context: &str) -> Scalar {
    make_factor("pseudonym", secret, context)
}

pub fn make_decryption_factor(secret: &str, context: &str) -> Scalar {
    make_factor("decryption", secret, context)
}

/// Rewrites a global encrypted pseudonym into a local one for the given
/// (decryption-context, pseudonymisation-context) pair: `RKS(e, t, u)` with
/// `u` the pseudonymisation factor and `t` the decryption factor.
pub fn convert_to_local_pseudonym(
    e: &GlobalEncryptedPseudonym,
    secret: &str,
    decryption_context: &str,
    pseudonymisation_context: &str,
) -> Result<LocalEncryptedPseudonym> {
    let u = make_pseudonymisation_factor(secret, pseudonymisation_context);
    let t = make_decryption_factor(secret, decryption_context);
    elgamal::rks(e, &t, &u)
}

/// The inverse of [`convert_to_local_pseudonym`]: `RKS(e, t^-1, u^-1)`.
pub fn convert_from_local_pseudonym(
    e: &LocalEncryptedPseudonym,
    secret: &str,
    decryption_context: &str,
    pseudonymisation_context: &str,
) -> Result<GlobalEncryptedPseudonym> {
    let u = make_pseudonymisation_factor(secret, pseudonymisation_context);
    let t = make_decryption_factor(secret, decryption_context);
    elgamal::rks(e, &t.invert()?, &u.invert()?)
}

/// `t*y`, the secret scalar that decrypts a local pseudonym produced via
/// [`convert_to_local_pseudonym`] with the same `decryption_context`.
pub fn make_local_decryption_key(y: &GlobalSecretKey, secret: &str, decryption_context: &str) -> LocalDecryptionKey {
    let t = make_decryption_factor(secret, decryption_context);
    t * *y
}

pub fn decrypt_local_pseudonym(e: &LocalEncryptedPseudonym, k: &LocalDecryptionKey) -> Result<LocalPseudonym> {
    elgamal::decrypt(e, k)
}

pub fn rerandomize_global<R: rand_core::RngCore + rand_core::CryptoRng>(
    e: &GlobalEncryptedPseudonym,
    rng: &mut R,
) -> Result<GlobalEncryptedPseudonym> {
    elgamal::rerandomize(e, &Scalar::random(rng))
}

pub fn rerandomize_local<R: rand_core::RngCore + rand_core::CryptoRng>(
    e: &LocalEncryptedPseudonym,
    rng: &mut R,
) -> Result<LocalEncryptedPseudonym> {
    elgamal::rerandomize(e, &Scalar::random(rng))
}
