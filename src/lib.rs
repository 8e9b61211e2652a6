// This file is part of libpep.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Polymorphic encryption and pseudonymisation (PEP) over ristretto255.
//!
//! A data custodian holds identifiers encrypted under a *global* public
//! key. An access manager and a transcryptor cooperate to rewrite each
//! ciphertext so that it decrypts to a *local* pseudonym under a *local*
//! private key derived from the global one, without either party learning
//! the plaintext pseudonym. Independent observations of the same identifier
//! yield unlinkable ciphertexts across contexts but linkable plaintexts
//! within a context.
//!
//! Module map:
//!
//! - [`scalar`] / [`group`] — the ristretto255 algebra: canonical scalars
//!   mod `L` and validated, non-identity group elements.
//! - [`elgamal`] — ElGamal ciphertexts and their four homomorphic rewrites
//!   (rerandomise, rekey, reshuffle, combined RKS).
//! - [`proof`] — Schnorr proofs of knowledge via Fiat–Shamir, reused both as
//!   a signature scheme and as proved variants of each ElGamal rewrite.
//! - [`pep`] — the pseudonymisation pipeline built on the above: global key
//!   generation, pseudonym derivation, and global-to-local conversion.
//! - [`kdf`] — Blake2b subkey derivation, supplementing the pipeline for
//!   callers managing one root secret instead of one secret per context.
//! - [`error`] — the encoding/domain error taxonomy.
//!
//! # What this crate does not do
//!
//! No network protocol, no persistence, no policy for how an access manager
//! and a transcryptor agree on or distribute their shared secrets, and no
//! side-channel countermeasures beyond what `curve25519-dalek` and `subtle`
//! already provide. See each module's docs for the algebraic guarantees it
//! does make.

pub mod elgamal;
pub mod error;
pub mod group;
pub mod kdf;
pub mod pep;
pub mod proof;
pub mod scalar;

pub use elgamal::ElGamal;
pub use error::{Error, Result};
pub use group::GroupElement;
pub use proof::{Proof, Signature};
pub use scalar::Scalar;
