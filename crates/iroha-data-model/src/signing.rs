// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The signing seam.
//!
//! Key management and signature algorithms live outside this crate. A
//! [`Signer`] receives the encoded `Payload` bytes and returns an opaque
//! signature that is embedded in the request verbatim.

use crate::crypto::{PublicKey, Signature};
use thiserror::Error;

/// Signature production failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignError {
    #[error("Signer unavailable: {0}")]
    Unavailable(String),

    #[error("Signing failed: {0}")]
    Failed(String),
}

/// Produces signatures over encoded payloads.
pub trait Signer: Send + Sync {
    /// Key that verifies signatures made by this signer.
    fn public_key(&self) -> PublicKey;

    /// Raw signature bytes over `message`.
    fn sign_bytes(&self, message: &[u8]) -> Result<Vec<u8>, SignError>;

    /// Full signature: key plus signature bytes.
    fn sign(&self, message: &[u8]) -> Result<Signature, SignError> {
        Ok(Signature {
            public_key: self.public_key(),
            payload: self.sign_bytes(message)?,
        })
    }
}

impl<S: Signer + ?Sized> Signer for &S {
    fn public_key(&self) -> PublicKey {
        (**self).public_key()
    }

    fn sign_bytes(&self, message: &[u8]) -> Result<Vec<u8>, SignError> {
        (**self).sign_bytes(message)
    }
}
