// This file is part of libpep.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error taxonomy for the core algebra and pipeline.
//!
//! Two kinds only. Proof verification failure is deliberately *not* one of
//! them: a failed proof is an expected outcome of adversarial input, not a
//! fault, and is surfaced by the `verify_*` functions returning `None`.

use thiserror::Error;

/// Errors raised at the deserialisation boundary or by an operation whose
/// algebraic preconditions were violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed wire input: wrong length, non-hex digits, a non-canonical
    /// scalar, an invalid point encoding, or a forbidden zero/identity value.
    #[error("encoding error: {0}")]
    Encoding(&'static str),

    /// An operation required a non-zero scalar or non-identity point and
    /// received one. Also covers the underlying primitive library reporting
    /// failure (e.g. scalar multiplication degenerating on a zero input).
    #[error("domain error: {0}")]
    Domain(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;
