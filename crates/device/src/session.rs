//! Session state machine of the device under test
//!
//! One mutable slot, no history, no concurrency. The only way back to a
//! usable state after an operation is a fresh PREPARE, which regenerates
//! the key material and resets everything, so each observed operation is
//! backed by exactly one key-generation event.
//!
//! ```text
//! Uninitialized --prepare--> Prepared --sign--> Signed
//!                               |                 |
//!                               +--agree--> Exchanged
//!        (Signed/Exchanged --prepare--> Prepared again)
//! ```

use ecprobe_codec::DerSignature;
use ecprobe_params::{DomainParameterSet, SHARED_SECRET_SIZE, UNCOMPRESSED_POINT_SIZE};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::engine::{CurveEngine, P256Engine};
use crate::error::{Error, Result};
use crate::scalar::single_bit_scalar;
use crate::secret::SecretSlot;

/// Size of the session's fixed message buffer
pub const MESSAGE_SIZE: usize = 32;

/// Recognizable prefix of the deterministic fixed message variant
const FIXED_MESSAGE_PREFIX: [u8; 7] = [0x12, 0x34, 0x56, 0x78, 0xAB, 0xCD, 0xEF];

/// Session lifecycle states
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No key material; every operate command fails with NotReady
    Uninitialized,
    /// Key pair and message in place, ready for one operation
    Prepared,
    /// A signature was produced; a new PREPARE is required to continue
    Signed,
    /// A shared secret was derived; a new PREPARE is required to continue
    Exchanged,
}

/// Static configuration choices of a device build
///
/// The observed device variants differ in two places: whether PREPARE
/// interprets its parameter byte as a bias bit position, and whether the
/// derived shared secret is transmitted or stays device-resident. Both are
/// explicit here instead of being implied by which program was loaded.
#[derive(Clone, Copy, Debug)]
pub struct SessionOptions {
    /// Interpret P1 of PREPARE as a single-bit scalar position instead of
    /// generating the private key randomly
    pub biased_prepare: bool,
    /// Transmit the shared secret in the key-agreement response; when
    /// false the secret never leaves the device
    pub reveal_shared_secret: bool,
    /// Use the deterministic fixed message instead of a per-session
    /// random one
    pub fixed_message: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            biased_prepare: true,
            reveal_shared_secret: false,
            fixed_message: false,
        }
    }
}

/// Response payload of a successful PREPARE
#[derive(Clone, Debug)]
pub struct PrepareOutput {
    /// Uncompressed public point of the new session key pair
    pub public_point: [u8; UNCOMPRESSED_POINT_SIZE],
    /// Fixed message all signatures of this session will cover
    pub message: [u8; MESSAGE_SIZE],
}

/// The device-resident session slot
pub struct Session<E: CurveEngine> {
    engine: E,
    options: SessionOptions,
    state: SessionState,
    key: Option<E::PrivateKey>,
    public_point: [u8; UNCOMPRESSED_POINT_SIZE],
    message: [u8; MESSAGE_SIZE],
    shared: SecretSlot<SHARED_SECRET_SIZE>,
}

impl Session<P256Engine> {
    /// Session backed by the P-256 engine
    pub fn p256(options: SessionOptions) -> Self {
        Self::new(P256Engine, options)
    }
}

impl<E: CurveEngine> Session<E> {
    /// Create an uninitialized session
    pub fn new(engine: E, options: SessionOptions) -> Self {
        Self {
            engine,
            options,
            state: SessionState::Uninitialized,
            key: None,
            public_point: [0u8; UNCOMPRESSED_POINT_SIZE],
            message: [0u8; MESSAGE_SIZE],
            shared: SecretSlot::zeroed(),
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Configuration this session was built with
    pub fn options(&self) -> SessionOptions {
        self.options
    }

    /// Inject domain parameters and (re)generate the session key pair
    ///
    /// With `bias` set, the private scalar is overridden with `2^bias`
    /// instead of the generated one, bypassing key-generation randomness.
    /// A failed prepare leaves the previous session untouched; a
    /// successful one destructively replaces it, zeroing the secret slot
    /// first.
    pub fn prepare<R: CryptoRng + RngCore>(
        &mut self,
        rng: &mut R,
        params: &DomainParameterSet,
        bias: Option<u8>,
    ) -> Result<PrepareOutput> {
        if !self.engine.accepts(params) {
            return Err(Error::ParameterMismatch {
                context: "injected parameters do not match the session engine",
            });
        }

        let (key, public_point) = match bias {
            Some(bit) => self.engine.keypair_from_scalar(&single_bit_scalar(bit))?,
            None => self.engine.generate_keypair(rng)?,
        };

        let mut message = [0u8; MESSAGE_SIZE];
        if self.options.fixed_message {
            message[..FIXED_MESSAGE_PREFIX.len()].copy_from_slice(&FIXED_MESSAGE_PREFIX);
        } else {
            rng.fill_bytes(&mut message);
        }

        self.shared.clear();
        self.key = Some(key);
        self.public_point = public_point;
        self.message = message;
        self.state = SessionState::Prepared;

        Ok(PrepareOutput {
            public_point,
            message,
        })
    }

    /// Sign the session's fixed message, returning the DER encoding
    ///
    /// Valid only in `Prepared`; transitions to `Signed`.
    pub fn sign(&mut self) -> Result<Vec<u8>> {
        if self.state != SessionState::Prepared {
            return Err(Error::NotReady {
                context: "sign requires a prepared session",
            });
        }
        let key = self.key.as_ref().ok_or(Error::NotReady {
            context: "no private key in the session slot",
        })?;

        let raw = self.engine.sign(key, &self.message)?;
        let der = DerSignature::from_raw_scalars(&raw.r, &raw.s).to_der();

        self.state = SessionState::Signed;
        Ok(der)
    }

    /// Derive the shared secret `d · G` into the device-resident slot
    ///
    /// Valid only in `Prepared`; transitions to `Exchanged`. The slot is
    /// zeroed before being recomputed. The secret is returned only when
    /// the session was configured to reveal it.
    pub fn agree(&mut self) -> Result<Option<&[u8; SHARED_SECRET_SIZE]>> {
        if self.state != SessionState::Prepared {
            return Err(Error::NotReady {
                context: "key agreement requires a prepared session",
            });
        }
        let key = self.key.as_ref().ok_or(Error::NotReady {
            context: "no private key in the session slot",
        })?;

        self.shared.clear();
        let mut secret = [0u8; SHARED_SECRET_SIZE];
        self.engine.agree_with_generator(key, &mut secret)?;
        self.shared.as_mut().copy_from_slice(&secret);
        secret.zeroize();

        self.state = SessionState::Exchanged;
        Ok(self
            .options
            .reveal_shared_secret
            .then(|| self.shared.expose()))
    }

    /// Device-resident shared secret, available after a key agreement
    ///
    /// Differential runs read this out-of-band to cross-check the device
    /// result even when the protocol withholds it.
    pub fn shared_secret(&self) -> Option<&[u8; SHARED_SECRET_SIZE]> {
        (self.state == SessionState::Exchanged).then(|| self.shared.expose())
    }

    /// Public point of the current session key pair
    pub fn public_point(&self) -> &[u8; UNCOMPRESSED_POINT_SIZE] {
        &self.public_point
    }

    /// Fixed message of the current session
    pub fn message(&self) -> &[u8; MESSAGE_SIZE] {
        &self.message
    }
}
