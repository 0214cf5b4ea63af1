//! Reference provider catalog and signing backend
//!
//! Wraps the RustCrypto NIST backends behind a small catalog keyed by
//! curve identifier, standing in for a native provider's named-curve
//! table. Unlike the device side, nothing here is parameter-injected;
//! this is the known-good fast path the device results are compared
//! against.

use p256::ecdsa::signature::hazmat::PrehashSigner;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::error::{Error, Result};

/// Curves advertised by the reference provider
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Curve {
    P256,
    P384,
}

static CATALOG: &[(&[&str], Curve)] = &[
    (&["secp256r1", "P-256", "prime256v1"], Curve::P256),
    (&["secp384r1", "P-384"], Curve::P384),
];

impl Curve {
    /// Resolve a curve identifier against the provider catalog
    pub fn resolve(name: &str) -> Result<Self> {
        CATALOG
            .iter()
            .find(|(aliases, _)| aliases.iter().any(|a| a.eq_ignore_ascii_case(name)))
            .map(|(_, curve)| *curve)
            .ok_or_else(|| Error::UnknownCurve(name.to_string()))
    }

    /// Primary identifiers of the advertised curves
    pub fn catalog() -> impl Iterator<Item = &'static str> {
        CATALOG.iter().map(|(aliases, _)| aliases[0])
    }

    /// Width of one affine coordinate in bytes
    pub fn coordinate_bytes(self) -> usize {
        match self {
            Self::P256 => 32,
            Self::P384 => 48,
        }
    }
}

/// Hash algorithms accepted for the hash-then-sign step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashAlg {
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlg {
    /// Resolve a hash identifier, tolerating `SHA-256`/`sha256` spellings
    pub fn resolve(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().replace('-', "").as_str() {
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            _ => Err(Error::UnknownHash(name.to_string())),
        }
    }

    /// Digest `message` with this algorithm
    pub fn digest(self, message: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha256 => Sha256::digest(message).to_vec(),
            Self::Sha384 => Sha384::digest(message).to_vec(),
            Self::Sha512 => Sha512::digest(message).to_vec(),
        }
    }
}

/// One reference key pair, fixed for a whole harness run
pub enum ProviderKeyPair {
    P256(p256::ecdsa::SigningKey),
    P384(p384::ecdsa::SigningKey),
}

impl ProviderKeyPair {
    /// Generate a key pair on the given catalog curve
    pub fn generate<R: CryptoRng + RngCore>(curve: Curve, rng: &mut R) -> Self {
        match curve {
            Curve::P256 => Self::P256(p256::ecdsa::SigningKey::random(rng)),
            Curve::P384 => Self::P384(p384::ecdsa::SigningKey::random(rng)),
        }
    }

    /// Public point as `04 ‖ X ‖ Y` hex with fixed-width coordinate fields
    pub fn public_point_hex(&self) -> String {
        match self {
            Self::P256(key) => {
                let point = p256::ecdsa::VerifyingKey::from(key).to_encoded_point(false);
                hex::encode(point.as_bytes())
            }
            Self::P384(key) => {
                let point = p384::ecdsa::VerifyingKey::from(key).to_encoded_point(false);
                hex::encode(point.as_bytes())
            }
        }
    }

    /// Private scalar as fixed-width hex; only ever emitted behind the
    /// debug toggle
    pub fn private_scalar_hex(&self) -> String {
        match self {
            Self::P256(key) => hex::encode(key.to_bytes()),
            Self::P384(key) => hex::encode(key.to_bytes()),
        }
    }

    /// Hash-then-sign `message`, returning the provider's DER signature
    ///
    /// The digest output feeds the signing primitive as a prehash, so
    /// hash widths other than the field width are truncated or padded by
    /// the backend the same way a native provider would.
    pub fn sign(&self, hash: HashAlg, message: &[u8]) -> Result<Vec<u8>> {
        let prehash = hash.digest(message);
        match self {
            Self::P256(key) => {
                let signature: p256::ecdsa::Signature = key.sign_prehash(&prehash)?;
                Ok(signature.to_der().as_bytes().to_vec())
            }
            Self::P384(key) => {
                let signature: p384::ecdsa::Signature = key.sign_prehash(&prehash)?;
                Ok(signature.to_der().as_bytes().to_vec())
            }
        }
    }
}
