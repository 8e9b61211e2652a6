// This file is part of libpep.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schnorr proofs of knowledge via the Fiat–Shamir transform, and the
//! proved variants of each ElGamal transform built on top of them.
//!
//! # Wire contract
//!
//! The challenge hash input is `SHA-512(A ‖ M ‖ N ‖ C1 ‖ C2)`, using the raw
//! 32-byte point encodings in exactly that order. This ordering is a
//! cross-implementation compatibility requirement: any deviation produces a
//! proof transcript incompatible with every other implementation of this
//! protocol, not merely a differently-shaped but equally-valid proof.

use sha2::{Digest, Sha512};

use crate::elgamal::ElGamal;
use crate::group::{self, GroupElement};
use crate::scalar::Scalar;

/// A Schnorr proof of knowledge of `a` such that `A = a*G` and `N = a*M`
/// for a public `M`. `A` is transmitted alongside the proof, not inside it,
/// so that proved transforms needing two proofs over the same secret factor
/// (e.g. [`ProvedReshuffle`]) can share a single `A` value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Proof {
    pub n: GroupElement,
    pub c1: GroupElement,
    pub c2: GroupElement,
    pub s: Scalar,
}

impl Proof {
    /// The `N = a*M` component, i.e. the value the proof attests to.
    pub fn value(&self) -> GroupElement {
        self.n
    }
}

fn challenge(a: &GroupElement, m: &GroupElement, n: &GroupElement, c1: &GroupElement, c2: &GroupElement) -> Scalar {
    let mut hasher = Sha512::new();
    hasher.update(a.to_bytes());
    hasher.update(m.to_bytes());
    hasher.update(n.to_bytes());
    hasher.update(c1.to_bytes());
    hasher.update(c2.to_bytes());
    let digest: [u8; 64] = hasher.finalize().into();
    Scalar::from_hash(&digest)
}

/// Proves knowledge of `a` such that `A = a*G` and `N = a*M`, for secret `a`
/// and public `M`. Returns the public commitment `A` alongside the proof.
pub fn create_proof<R: rand_core::RngCore + rand_core::CryptoRng>(
    a: &Scalar,
    m: &GroupElement,
    rng: &mut R,
) -> crate::error::Result<(GroupElement, Proof)> {
    let r = Scalar::random(rng);
    let big_a = a.base_mult()?;
    let n = group::scalar_mul(a, m)?;
    let c1 = r.base_mult()?;
    let c2 = group::scalar_mul(&r, m)?;
    let e = challenge(&big_a, m, &n, &c1, &c2);
    let s = *a * e + r;
    Ok((big_a, Proof { n, c1, c2, s }))
}

/// Verifies `(A, M, Proof{N, C1, C2, s})`: accepts iff `s*G = e*A + C1` and
/// `s*M = e*N + C2`, where `e` is recomputed from the transcript.
pub fn verify_proof(a: &GroupElement, m: &GroupElement, proof: &Proof) -> bool {
    let e = challenge(a, m, &proof.n, &proof.c1, &proof.c2);

    let Ok(lhs1) = proof.s.base_mult() else { return false };
    let Ok(rhs1_term) = group::scalar_mul(&e, a) else { return false };
    let rhs1 = rhs1_term + proof.c1;

    let Ok(lhs2) = group::scalar_mul(&proof.s, m) else { return false };
    let Ok(rhs2_term) = group::scalar_mul(&e, &proof.n) else { return false };
    let rhs2 = rhs2_term + proof.c2;

    lhs1 == rhs1 && lhs2 == rhs2
}

/// A [`Proof`] whose `M` is the signed message encoded as a group element
/// and whose `A` is the signer's public key. Message bytes that are not
/// already a group element must be hashed onto the curve by the caller
/// (e.g. via [`GroupElement::from_hash`]) before signing.
pub type Signature = Proof;

pub fn sign<R: rand_core::RngCore + rand_core::CryptoRng>(
    message: &GroupElement,
    secret: &Scalar,
    rng: &mut R,
) -> crate::error::Result<Signature> {
    let (_a, proof) = create_proof(secret, message, rng)?;
    Ok(proof)
}

pub fn verify(message: &GroupElement, signature: &Signature, public_key: &GroupElement) -> bool {
    verify_proof(public_key, message, signature)
}

/// A proved rerandomisation: `S = s*G` plus one proof of knowledge of `s`
/// against `e.Y`. The verifier reconstructs `(S + B, proof.N + C, Y)`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProvedRerandomize {
    pub s_commitment: GroupElement,
    pub proof: Proof,
}

pub fn prove_rerandomize<R: rand_core::RngCore + rand_core::CryptoRng>(
    e: &ElGamal,
    s: &Scalar,
    rng: &mut R,
) -> crate::error::Result<ProvedRerandomize> {
    let (s_commitment, proof) = create_proof(s, &e.y, rng)?;
    Ok(ProvedRerandomize { s_commitment, proof })
}

pub fn verify_rerandomize(e: &ElGamal, p: &ProvedRerandomize) -> Option<ElGamal> {
    if !verify_proof(&p.s_commitment, &e.y, &p.proof) {
        return None;
    }
    Some(ElGamal {
        b: p.s_commitment + e.b,
        c: p.proof.value() + e.c,
        y: e.y,
    })
}

/// A proved reshuffle: two proofs of knowledge of the same factor `n`
/// against `e.B` and `e.C`. Both commitments equal `n*G`; both are kept
/// here for symmetry with `ProvedRekey`/`ProvedRks`, though a compact wire
/// encoding may transmit only one (see the module docs' note on redundant
/// vs. compact transmission).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProvedReshuffle {
    pub b_commitment: GroupElement,
    pub b_proof: Proof,
    pub c_commitment: GroupElement,
    pub c_proof: Proof,
}

pub fn prove_reshuffle<R: rand_core::RngCore + rand_core::CryptoRng>(
    e: &ElGamal,
    n: &Scalar,
    rng: &mut R,
) -> crate::error::Result<ProvedReshuffle> {
    let (b_commitment, b_proof) = create_proof(n, &e.b, rng)?;
    let (c_commitment, c_proof) = create_proof(n, &e.c, rng)?;
    Ok(ProvedReshuffle { b_commitment, b_proof, c_commitment, c_proof })
}

pub fn verify_reshuffle(e: &ElGamal, p: &ProvedReshuffle) -> Option<ElGamal> {
    if e.y.is_identity() {
        return None;
    }
    if !verify_proof(&p.b_commitment, &e.b, &p.b_proof) || !verify_proof(&p.c_commitment, &e.c, &p.c_proof) {
        return None;
    }
    Some(ElGamal { b: p.b_proof.value(), c: p.c_proof.value(), y: e.y })
}

/// A proved rekey: a proof of knowledge of `k^-1` against `e.B`, and a
/// proof of knowledge of `k` against `e.Y`. The second commitment,
/// `y_commitment`, is `k*G`, recoverable via [`ProvedRekey::rekeyed_public_key`]
/// without decrypting anything.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProvedRekey {
    pub b_commitment: GroupElement,
    pub b_proof: Proof,
    pub y_commitment: GroupElement,
    pub y_proof: Proof,
}

impl ProvedRekey {
    pub fn rekeyed_public_key(&self) -> GroupElement {
        self.y_commitment
    }
}

pub fn prove_rekey<R: rand_core::RngCore + rand_core::CryptoRng>(
    e: &ElGamal,
    k: &Scalar,
    rng: &mut R,
) -> crate::error::Result<ProvedRekey> {
    let k_inv = k.invert()?;
    let (b_commitment, b_proof) = create_proof(&k_inv, &e.b, rng)?;
    let (y_commitment, y_proof) = create_proof(k, &e.y, rng)?;
    Ok(ProvedRekey { b_commitment, b_proof, y_commitment, y_proof })
}

pub fn verify_rekey(e: &ElGamal, p: &ProvedRekey) -> Option<ElGamal> {
    if !verify_proof(&p.b_commitment, &e.b, &p.b_proof) || !verify_proof(&p.y_commitment, &e.y, &p.y_proof) {
        return None;
    }
    Some(ElGamal { b: p.b_proof.value(), c: e.c, y: p.y_proof.value() })
}

/// A proved RKS: three proofs of knowledge, with factors `n/k`, `n`, `k`
/// proven against `B`, `C`, `Y` respectively.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProvedRks {
    pub b_commitment: GroupElement,
    pub b_proof: Proof,
    pub c_commitment: GroupElement,
    pub c_proof: Proof,
    pub y_commitment: GroupElement,
    pub y_proof: Proof,
}

impl ProvedRks {
    pub fn rekeyed_public_key(&self) -> GroupElement {
        self.y_commitment
    }
}

pub fn prove_rks<R: rand_core::RngCore + rand_core::CryptoRng>(
    e: &ElGamal,
    k: &Scalar,
    n: &Scalar,
    rng: &mut R,
) -> crate::error::Result<ProvedRks> {
    let factor = (*n / *k)?;
    let (b_commitment, b_proof) = create_proof(&factor, &e.b, rng)?;
    let (c_commitment, c_proof) = create_proof(n, &e.c, rng)?;
    let (y_commitment, y_proof) = create_proof(k, &e.y, rng)?;
    Ok(ProvedRks { b_commitment, b_proof, c_commitment, c_proof, y_commitment, y_proof })
}

pub fn verify_rks(e: &ElGamal, p: &ProvedRks) -> Option<ElGamal> {
    if !verify_proof(&p.b_commitment, &e.b, &p.b_proof)
        || !verify_proof(&p.c_commitment, &e.c, &p.c_proof)
        || !verify_proof(&p.y_commitment, &e.y, &p.y_proof)
    {
        return None;
    }
    Some(ElGamal { b: p.b_proof.value(), c: p.c_proof.value(), y: p.y_proof.value() })
}
