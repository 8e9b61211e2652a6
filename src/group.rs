// This file is part of libpep.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ristretto255 group elements.
//!
//! Wraps [`curve25519_dalek::ristretto::RistrettoPoint`] /
//! [`CompressedRistretto`], adding the validity checks this crate requires
//! at the deserialisation boundary (a valid encoding that is not the
//! identity), constant-time equality, and hex I/O.

use core::fmt;
use core::ops::{Add, Div, Sub};

use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::traits::Identity;
use subtle::ConstantTimeEq;

use crate::error::{Error, Result};
use crate::scalar::Scalar;

/// A valid ristretto255 group element. The identity element can be
/// constructed (e.g. as an intermediate result of addition) but is rejected
/// wherever a non-identity point is required: on hex decode, and as the
/// base of a scalar multiplication.
#[derive(Clone, Copy)]
pub struct GroupElement(pub(crate) RistrettoPoint);

impl GroupElement {
    pub(crate) fn from_dalek(p: RistrettoPoint) -> GroupElement {
        GroupElement(p)
    }

    pub fn identity() -> GroupElement {
        GroupElement(RistrettoPoint::identity())
    }

    pub fn is_identity(&self) -> bool {
        self.0 == RistrettoPoint::identity()
    }

    /// May return the identity element, since ristretto hash-to-curve can
    /// land there with negligible but nonzero probability.
    pub fn random<R: rand_core::RngCore + rand_core::CryptoRng>(rng: &mut R) -> GroupElement {
        let mut bytes = [0u8; 64];
        rng.fill_bytes(&mut bytes);
        GroupElement::from_hash(&bytes)
    }

    #[cfg(feature = "std")]
    pub fn random_os() -> GroupElement {
        GroupElement::random(&mut rand::rngs::OsRng)
    }

    /// Ristretto hash-to-curve of a 64-byte digest.
    pub fn from_hash(bytes: &[u8; 64]) -> GroupElement {
        GroupElement(RistrettoPoint::from_uniform_bytes(bytes))
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.compress().to_bytes()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Decodes 64 lowercase hex chars into a valid, non-identity group
    /// element. Rejects wrong length, invalid ristretto encodings, and the
    /// all-zero (identity) encoding.
    pub fn from_hex(s: &str) -> Result<GroupElement> {
        if s.len() != 64 {
            return Err(Error::Encoding("group element hex must be 64 characters"));
        }
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| Error::Encoding("group element hex contains non-hex digits"))?;
        let point = CompressedRistretto(bytes)
            .decompress()
            .ok_or(Error::Encoding("group element is not a valid ristretto255 encoding"))?;
        if point == RistrettoPoint::identity() {
            return Err(Error::Encoding("group element must not be the identity"));
        }
        Ok(GroupElement(point))
    }
}

impl PartialEq for GroupElement {
    fn eq(&self, other: &Self) -> bool {
        self.0.compress().ct_eq(&other.0.compress()).into()
    }
}
impl Eq for GroupElement {}

impl fmt::Debug for GroupElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GroupElement({})", self.to_hex())
    }
}

impl Add for GroupElement {
    type Output = GroupElement;
    fn add(self, rhs: GroupElement) -> GroupElement {
        GroupElement(self.0 + rhs.0)
    }
}

impl Sub for GroupElement {
    type Output = GroupElement;
    fn sub(self, rhs: GroupElement) -> GroupElement {
        GroupElement(self.0 - rhs.0)
    }
}

/// `scalar * point`. Fails (domain error) if the scalar is zero or the
/// point is the identity.
pub fn scalar_mul(scalar: &Scalar, point: &GroupElement) -> Result<GroupElement> {
    if scalar.is_zero() {
        return Err(Error::Domain("cannot multiply by the zero scalar"));
    }
    if point.is_identity() {
        return Err(Error::Domain("cannot multiply the identity element"));
    }
    Ok(GroupElement(scalar.0 * point.0))
}

impl Div<Scalar> for GroupElement {
    type Output = Result<GroupElement>;
    fn div(self, rhs: Scalar) -> Result<GroupElement> {
        let inv = rhs.invert()?;
        scalar_mul(&inv, &self)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GroupElement {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GroupElement {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<GroupElement, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        GroupElement::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let g = GroupElement::random_os();
        if g.is_identity() {
            return; // negligible-probability branch, not worth retrying in a unit test
        }
        let hex = g.to_hex();
        assert_eq!(GroupElement::from_hex(&hex).unwrap(), g);
    }

    #[test]
    fn hex_rejects_identity() {
        let zero = "00".repeat(32);
        assert!(GroupElement::from_hex(&zero).is_err());
    }

    #[test]
    fn hex_rejects_bad_length() {
        assert!(GroupElement::from_hex("ab").is_err());
    }

    #[test]
    fn scalar_mul_rejects_zero_scalar() {
        let g = GroupElement::random_os();
        assert!(scalar_mul(&Scalar::ZERO, &g).is_err());
    }

    #[test]
    fn scalar_mul_rejects_identity_point() {
        let s = Scalar::random_os();
        assert!(scalar_mul(&s, &GroupElement::identity()).is_err());
    }
}
