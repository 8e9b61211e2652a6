// This file is part of libpep.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! ElGamal ciphertexts over ristretto255 and their four homomorphic
//! rewrites: rerandomise, rekey, reshuffle, and the combined RKS.

use crate::error::{Error, Result};
use crate::group::{self, GroupElement};
use crate::scalar::Scalar;

/// `(B, C, Y)` with `B = r*G`, `C = M + r*Y`, `Y` the public key the
/// ciphertext was encrypted under. `Y` travels with the ciphertext so that
/// rekey/reshuffle/RKS are self-describing: the caller never has to track
/// "which key does this decrypt under" out of band.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElGamal {
    pub b: GroupElement,
    pub c: GroupElement,
    pub y: GroupElement,
}

impl ElGamal {
    pub fn to_hex(&self) -> String {
        format!("{}{}{}", self.b.to_hex(), self.c.to_hex(), self.y.to_hex())
    }

    /// Decodes `B ‖ C ‖ Y`, 192 lowercase hex characters. Component
    /// validation (valid, non-identity points) is delegated to
    /// `GroupElement::from_hex`.
    pub fn from_hex(s: &str) -> Result<ElGamal> {
        if s.len() != 192 {
            return Err(Error::Encoding("ElGamal hex must be 192 characters"));
        }
        let b = GroupElement::from_hex(&s[0..64])?;
        let c = GroupElement::from_hex(&s[64..128])?;
        let y = GroupElement::from_hex(&s[128..192])?;
        Ok(ElGamal { b, c, y })
    }
}

/// Encrypts plaintext point `m` under public key `y`. Fails if `y` is the
/// identity element (encrypting under an empty public key would send the
/// plaintext in clear).
pub fn encrypt<R: rand_core::RngCore + rand_core::CryptoRng>(
    m: &GroupElement,
    y: &GroupElement,
    rng: &mut R,
) -> Result<ElGamal> {
    if y.is_identity() {
        return Err(Error::Domain("cannot encrypt under the identity public key"));
    }
    let r = Scalar::random(rng);
    let b = r.base_mult()?;
    let c = *m + group::scalar_mul(&r, y)?;
    Ok(ElGamal { b, c, y: *y })
}

/// `C - y*B`.
pub fn decrypt(e: &ElGamal, y: &Scalar) -> Result<GroupElement> {
    Ok(e.c - group::scalar_mul(y, &e.b)?)
}

/// Replaces the encryption randomness `r` with `r + s`, leaving the
/// plaintext and key unchanged: `(s*G + B, s*Y + C, Y)`.
pub fn rerandomize(e: &ElGamal, s: &Scalar) -> Result<ElGamal> {
    Ok(ElGamal {
        b: s.base_mult()? + e.b,
        c: group::scalar_mul(s, &e.y)? + e.c,
        y: e.y,
    })
}

/// Rewrites so the ciphertext decrypts under `k*y` instead of `y`:
/// `(B/k, C, k*Y)`. Fails if `k` is zero.
pub fn rekey(e: &ElGamal, k: &Scalar) -> Result<ElGamal> {
    Ok(ElGamal {
        b: (e.b / *k)?,
        c: e.c,
        y: group::scalar_mul(k, &e.y)?,
    })
}

/// Rewrites so the ciphertext decrypts to `n*M` instead of `M`:
/// `(n*B, n*C, Y)`. Fails if `n` is zero.
pub fn reshuffle(e: &ElGamal, n: &Scalar) -> Result<ElGamal> {
    Ok(ElGamal {
        b: group::scalar_mul(n, &e.b)?,
        c: group::scalar_mul(n, &e.c)?,
        y: e.y,
    })
}

/// Combined rekey(k) + reshuffle(n) in one step:
/// `((n/k)*B, n*C, k*Y)`. Equal to `rekey(reshuffle(e, n), k)` and to
/// `reshuffle(rekey(e, k), n)`.
pub fn rks(e: &ElGamal, k: &Scalar, n: &Scalar) -> Result<ElGamal> {
    let factor = (*n / *k)?;
    Ok(ElGamal {
        b: group::scalar_mul(&factor, &e.b)?,
        c: group::scalar_mul(n, &e.c)?,
        y: group::scalar_mul(k, &e.y)?,
    })
}
