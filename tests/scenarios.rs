// This file is part of libpep.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Concrete seed scenarios from the core's testable-properties list: fixed
//! multi-party protocols built directly on the scalar/group algebra,
//! independent of the ElGamal and pipeline layers above them.

use sha2::{Digest, Sha512};

use libpep::group::{self, GroupElement};
use libpep::scalar::Scalar;

/// A miniature SRP-style handshake: client and server derive the same
/// shared secret from a verifier point `V = x*G` without the server ever
/// learning `x` directly. Exercises `from_hash`, basepoint multiplication,
/// and the scalar/point algebra together in a realistic multi-party shape.
#[test]
fn srp_style_handshake_agrees_on_shared_secret() {
    let salt = b"a-fixed-test-salt";
    let password = b"foobar";

    let x_digest: [u8; 64] = {
        let mut hasher = Sha512::new();
        hasher.update(salt);
        hasher.update(password);
        hasher.finalize().into()
    };
    let x = Scalar::from_hash(&x_digest);
    let v = x.base_mult().unwrap();

    let a = Scalar::random_os();
    let b = Scalar::random_os();
    let big_a = a.base_mult().unwrap();
    let big_b = b.base_mult().unwrap() + v;

    let u_digest: [u8; 64] = {
        let mut hasher = Sha512::new();
        hasher.update(big_a.to_bytes());
        hasher.update(big_b.to_bytes());
        hasher.finalize().into()
    };
    let u = Scalar::from_hash(&u_digest);

    // Client: S_C = (a + u*x) * (B - V)
    let client_exponent = a + u * x;
    let client_secret = group::scalar_mul(&client_exponent, &(big_b - v)).unwrap();

    // Server: S_S = b * (A + u*V)
    let server_point = big_a + group::scalar_mul(&u, &v).unwrap();
    let server_secret = group::scalar_mul(&b, &server_point).unwrap();

    assert_eq!(client_secret, server_secret);
}

/// A two-party blinded evaluation: the server raises a message point to its
/// secret exponent `k` without ever seeing the message in the clear, using
/// only the group's scalar-multiplication linearity (`r^-1 * (r*k*M) =
/// k*M`) — the same blinding idea `GroupElement::from_hash` plus scalar
/// arithmetic is built to support, independent of the ElGamal ciphertext
/// layer entirely.
#[test]
fn blinded_evaluation_unblinds_to_the_direct_result() {
    let message_digest: [u8; 64] = Sha512::digest(b"libpep blinding example").into();
    let message = GroupElement::from_hash(&message_digest);

    let k = Scalar::random_os();
    let r = Scalar::random_os();

    // Client blinds the message and sends r*M to the server.
    let blinded = group::scalar_mul(&r, &message).unwrap();

    // Server evaluates k*(r*M) without learning M.
    let server_response = group::scalar_mul(&k, &blinded).unwrap();

    // Client removes the blinding factor: r^-1 * (k*r*M) = k*M.
    let unblinded = (server_response / r).unwrap();

    let direct = group::scalar_mul(&k, &message).unwrap();
    assert_eq!(unblinded, direct);
}
