// This file is part of libpep.
// SPDX-License-Identifier: MIT OR Apache-2.0

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use libpep::elgamal;
use libpep::group::GroupElement;
use libpep::pep;
use libpep::proof;
use libpep::scalar::Scalar;

fn bench_core_ops(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let y = Scalar::random_os();
    let pk = y.base_mult().unwrap();
    let m = GroupElement::random_os();
    let e = elgamal::encrypt(&m, &pk, &mut rng).unwrap();
    let k = Scalar::random_os();
    let n = Scalar::random_os();

    c.bench_function("elgamal::encrypt", |b| {
        b.iter(|| elgamal::encrypt(black_box(&m), black_box(&pk), &mut rng).unwrap())
    });

    c.bench_function("elgamal::decrypt", |b| {
        b.iter(|| elgamal::decrypt(black_box(&e), black_box(&y)).unwrap())
    });

    c.bench_function("elgamal::rks", |b| {
        b.iter(|| elgamal::rks(black_box(&e), black_box(&k), black_box(&n)).unwrap())
    });

    c.bench_function("proof::create_proof", |b| {
        b.iter(|| proof::create_proof(black_box(&k), black_box(&e.y), &mut rng).unwrap())
    });

    let (big_a, p) = proof::create_proof(&k, &e.y, &mut rng).unwrap();
    c.bench_function("proof::verify_proof", |b| {
        b.iter(|| proof::verify_proof(black_box(&big_a), black_box(&e.y), black_box(&p)))
    });

    c.bench_function("pep::generate_pseudonym", |b| {
        b.iter(|| pep::generate_pseudonym(black_box("alice@example.org"), black_box(&pk), &mut rng).unwrap())
    });

    c.bench_function("pep::convert_to_local_pseudonym", |b| {
        b.iter(|| {
            pep::convert_to_local_pseudonym(
                black_box(&e),
                black_box("server-secret"),
                black_box("dec-ctx"),
                black_box("pse-ctx"),
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_core_ops);
criterion_main!(benches);
