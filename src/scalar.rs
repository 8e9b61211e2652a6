// This file is part of libpep.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scalars mod the ristretto255 group order `L`.
//!
//! Wraps [`curve25519_dalek::scalar::Scalar`], which already stores values
//! reduced mod `L` in little-endian form; this module adds the canonical /
//! non-zero checks required at the deserialisation and domain-operation
//! boundaries, plus constant-time equality and hex I/O.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use curve25519_dalek::scalar::Scalar as DalekScalar;
use rand_core::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;

use crate::error::{Error, Result};

/// An integer in `[0, L)`, canonical whenever it leaves this module.
#[derive(Clone, Copy)]
pub struct Scalar(pub(crate) DalekScalar);

impl Scalar {
    pub const ZERO: Scalar = Scalar(DalekScalar::ZERO);
    pub const ONE: Scalar = Scalar(DalekScalar::ONE);

    /// Uniformly random, canonical, and non-zero: samples are drawn from
    /// `curve25519-dalek`'s `Scalar::random` (uniform over `[0, L)`) and
    /// resampled on the negligible-probability `1/L` chance of landing on
    /// zero, matching libsodium's `crypto_core_ristretto255_scalar_random`
    /// (which resamples internally for the same reason) and the `[1, L)`
    /// invariant this crate requires of every random scalar. A zero draw
    /// surviving the loop would indicate a broken primitive layer and is a
    /// fatal, not recoverable, condition.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Scalar {
        loop {
            let s = DalekScalar::random(rng);
            if s != DalekScalar::ZERO {
                return Scalar(s);
            }
        }
    }

    /// Convenience wrapper over [`Scalar::random`] using the OS CSPRNG.
    #[cfg(feature = "std")]
    pub fn random_os() -> Scalar {
        Scalar::random(&mut rand::rngs::OsRng)
    }

    /// Reduce a 64-byte hash output mod `L`. If the reduced scalar is zero,
    /// the low byte is forced to `0x01` so that callers relying on
    /// non-zero factors (`Encrypt`, `Rekey`, ...) never see a zero output.
    pub fn from_hash(bytes: &[u8; 64]) -> Scalar {
        let reduced = DalekScalar::from_bytes_mod_order_wide(bytes);
        if reduced == DalekScalar::ZERO {
            let mut forced = [0u8; 32];
            forced[0] = 0x01;
            Scalar(DalekScalar::from_bytes_mod_order(forced))
        } else {
            Scalar(reduced)
        }
    }

    /// Multiplicative inverse. Fails (domain error) on the zero scalar.
    pub fn invert(&self) -> Result<Scalar> {
        if self.is_zero() {
            return Err(Error::Domain("cannot invert the zero scalar"));
        }
        Ok(Scalar(self.0.invert()))
    }

    /// `1 - s mod L`.
    pub fn complement(&self) -> Scalar {
        Scalar(DalekScalar::ONE - self.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == DalekScalar::ZERO
    }

    /// `s * G`, the ristretto255 basepoint multiplication. Fails on the
    /// zero scalar, since that would yield the identity element, which this
    /// crate treats as an invalid `GroupElement`.
    pub fn base_mult(&self) -> Result<crate::group::GroupElement> {
        if self.is_zero() {
            return Err(Error::Domain("cannot base-multiply the zero scalar"));
        }
        Ok(crate::group::GroupElement::from_dalek(&self.0 * curve25519_dalek::constants::RISTRETTO_BASEPOINT_TABLE))
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Decodes 64 lowercase hex chars into a canonical, non-zero scalar.
    /// Rejects wrong length, non-hex digits, non-canonical encodings, and
    /// the zero scalar.
    pub fn from_hex(s: &str) -> Result<Scalar> {
        if s.len() != 64 {
            return Err(Error::Encoding("scalar hex must be 64 characters"));
        }
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| Error::Encoding("scalar hex contains non-hex digits"))?;
        let candidate: Option<DalekScalar> = DalekScalar::from_canonical_bytes(bytes).into();
        let candidate = candidate.ok_or(Error::Encoding("scalar is not a canonical encoding"))?;
        if candidate == DalekScalar::ZERO {
            return Err(Error::Encoding("scalar must not be zero"));
        }
        Ok(Scalar(candidate))
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}
impl Eq for Scalar {}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({})", self.to_hex())
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::ZERO
    }
}

impl Neg for Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        Scalar(-self.0)
    }
}

impl Add for Scalar {
    type Output = Scalar;
    fn add(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 + rhs.0)
    }
}

impl Sub for Scalar {
    type Output = Scalar;
    fn sub(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 - rhs.0)
    }
}

impl Mul for Scalar {
    type Output = Scalar;
    fn mul(self, rhs: Scalar) -> Scalar {
        Scalar(self.0 * rhs.0)
    }
}

impl Div for Scalar {
    type Output = Result<Scalar>;
    fn div(self, rhs: Scalar) -> Result<Scalar> {
        Ok(Scalar(self.0 * rhs.invert()?.0))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Scalar {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Scalar {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Scalar, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Scalar::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_hash_forces_non_zero() {
        let zero_hash = [0u8; 64];
        let s = Scalar::from_hash(&zero_hash);
        assert!(!s.is_zero());
    }

    #[test]
    fn hex_roundtrip() {
        let s = Scalar::random_os();
        let hex = s.to_hex();
        assert_eq!(Scalar::from_hex(&hex).unwrap(), s);
    }

    #[test]
    fn hex_rejects_zero() {
        assert!(Scalar::from_hex(&"00".repeat(32)).is_err());
    }

    #[test]
    fn hex_rejects_non_canonical() {
        // L = 0x1000000000000000000000000000000014def9dea2f79cd658126 31a5cf5d3ee
        // little-endian bytes of L, with the top byte bumped: encodes >= L.
        let over_l = "edd3f55c1a631258d69cf7a2def9de1400000000000000000000000000000020";
        assert_eq!(over_l.len(), 64);
        assert!(Scalar::from_hex(over_l).is_err());
    }

    #[test]
    fn invert_zero_fails() {
        assert!(Scalar::ZERO.invert().is_err());
    }

    #[test]
    fn complement_law() {
        let s = Scalar::random_os();
        let c = s.complement();
        assert_eq!(s + c, Scalar::ONE);
    }

    #[test]
    fn div_by_zero_fails() {
        let s = Scalar::random_os();
        assert!((s / Scalar::ZERO).is_err());
    }
}
