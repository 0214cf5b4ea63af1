//! Curve engine seam
//!
//! The session state machine never touches curve arithmetic directly; it
//! goes through [`CurveEngine`]. [`P256Engine`] is the production engine,
//! delegating scalar multiplication, signing and key agreement to the
//! RustCrypto `p256` backend while checking that the injected domain
//! parameters actually describe the curve it executes.

use ecprobe_params::{
    DomainParameterSet, SCALAR_SIZE, SECP256R1, SHARED_SECRET_SIZE, UNCOMPRESSED_POINT_SIZE,
};
use p256::ecdsa::{signature::Signer, Signature, SigningKey, VerifyingKey};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use rand::{CryptoRng, RngCore};

use crate::error::{Error, Result};

/// Signature as fixed-width raw scalar encodings, before DER wrapping
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawSignature {
    pub r: [u8; SCALAR_SIZE],
    pub s: [u8; SCALAR_SIZE],
}

/// Curve arithmetic collaborator for a 256-bit device session
pub trait CurveEngine {
    /// Backend-held private key
    type PrivateKey;

    /// Whether `params` describe the curve this engine executes
    fn accepts(&self, params: &DomainParameterSet) -> bool;

    /// Generate a fresh key pair, returning the uncompressed public point
    fn generate_keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> Result<(Self::PrivateKey, [u8; UNCOMPRESSED_POINT_SIZE])>;

    /// Reconstruct a key pair from an externally supplied private scalar
    ///
    /// The scalar may be deliberately out of distribution; the backend's
    /// reaction to it is part of what the harness observes.
    fn keypair_from_scalar(
        &self,
        scalar: &[u8; SCALAR_SIZE],
    ) -> Result<(Self::PrivateKey, [u8; UNCOMPRESSED_POINT_SIZE])>;

    /// ECDSA hash-then-sign of `message` under `key`
    fn sign(&self, key: &Self::PrivateKey, message: &[u8]) -> Result<RawSignature>;

    /// Write the shared secret `key · G` into `secret`
    fn agree_with_generator(
        &self,
        key: &Self::PrivateKey,
        secret: &mut [u8; SHARED_SECRET_SIZE],
    ) -> Result<()>;
}

/// Production engine backed by the RustCrypto `p256` crate
pub struct P256Engine;

fn encode_public(key: &SigningKey) -> [u8; UNCOMPRESSED_POINT_SIZE] {
    let point = VerifyingKey::from(key).to_encoded_point(false);
    let mut out = [0u8; UNCOMPRESSED_POINT_SIZE];
    out.copy_from_slice(point.as_bytes());
    out
}

impl CurveEngine for P256Engine {
    type PrivateKey = SigningKey;

    fn accepts(&self, params: &DomainParameterSet) -> bool {
        params.ct_matches(&SECP256R1)
    }

    fn generate_keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> Result<(Self::PrivateKey, [u8; UNCOMPRESSED_POINT_SIZE])> {
        let key = SigningKey::random(rng);
        let public = encode_public(&key);
        Ok((key, public))
    }

    fn keypair_from_scalar(
        &self,
        scalar: &[u8; SCALAR_SIZE],
    ) -> Result<(Self::PrivateKey, [u8; UNCOMPRESSED_POINT_SIZE])> {
        let key = SigningKey::from_bytes(&(*scalar).into()).map_err(|_| Error::KeyGeneration {
            context: "private scalar outside [1, n-1]",
        })?;
        let public = encode_public(&key);
        Ok((key, public))
    }

    fn sign(&self, key: &Self::PrivateKey, message: &[u8]) -> Result<RawSignature> {
        let signature: Signature = key.try_sign(message).map_err(|_| Error::Signing {
            context: "p256 backend",
        })?;
        let (r, s) = signature.split_bytes();
        Ok(RawSignature {
            r: r.into(),
            s: s.into(),
        })
    }

    fn agree_with_generator(
        &self,
        key: &Self::PrivateKey,
        secret: &mut [u8; SHARED_SECRET_SIZE],
    ) -> Result<()> {
        let shared = p256::ecdh::diffie_hellman(key.as_nonzero_scalar(), &p256::AffinePoint::GENERATOR);
        secret.copy_from_slice(shared.raw_secret_bytes());
        Ok(())
    }
}
