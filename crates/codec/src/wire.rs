//! Fixed-offset command/response framing
//!
//! A command is `CLA ‖ INS ‖ P1 ‖ payload`; a response is `payload ‖ SW1 ‖
//! SW2`. Payload lengths are conveyed by the transport's own framing, so
//! neither frame carries an internal length prefix. The status words use
//! the ISO 7816 values the device class answers with.

use crate::error::{Error, Result};

/// Application class byte identifying the probe command set
pub const CLA_PROBE: u8 = 0xB0;

/// Instruction: inject parameters and (re)generate the session key pair
pub const INS_PREPARE: u8 = 0x5A;

/// Instruction: sign the session's fixed message
pub const INS_SIGN: u8 = 0x5B;

/// Instruction: derive the session's shared secret
pub const INS_KEX: u8 = 0x5C;

/// Size of the fixed command header (CLA, INS, P1)
pub const COMMAND_HEADER_SIZE: usize = 3;

/// Size of the trailing status word
pub const STATUS_WORD_SIZE: usize = 2;

/// Response status codes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Command completed
    Ok,
    /// Instruction byte not recognized
    UnsupportedInstruction,
    /// Class byte not recognized
    UnsupportedClass,
    /// Preconditions not met: operate before prepare, or key material
    /// not initialized
    NotReady,
}

impl Status {
    /// Encode as a two-byte status word
    pub fn to_word(self) -> u16 {
        match self {
            Self::Ok => 0x9000,
            Self::UnsupportedInstruction => 0x6D00,
            Self::UnsupportedClass => 0x6E00,
            Self::NotReady => 0x6985,
        }
    }

    /// Decode from a two-byte status word
    pub fn from_word(word: u16) -> Result<Self> {
        match word {
            0x9000 => Ok(Self::Ok),
            0x6D00 => Ok(Self::UnsupportedInstruction),
            0x6E00 => Ok(Self::UnsupportedClass),
            0x6985 => Ok(Self::NotReady),
            word => Err(Error::UnknownStatus { word }),
        }
    }
}

/// Command frame sent to the device under test
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub cla: u8,
    pub ins: u8,
    /// Bias bit position for the bias-capable PREPARE variant, ignored
    /// otherwise
    pub p1: u8,
    pub payload: Vec<u8>,
}

impl Command {
    /// PREPARE command with the given parameter byte
    pub fn prepare(p1: u8) -> Self {
        Self {
            cla: CLA_PROBE,
            ins: INS_PREPARE,
            p1,
            payload: Vec::new(),
        }
    }

    /// SIGN command
    pub fn sign() -> Self {
        Self {
            cla: CLA_PROBE,
            ins: INS_SIGN,
            p1: 0,
            payload: Vec::new(),
        }
    }

    /// Key-agreement command
    pub fn key_agree() -> Self {
        Self {
            cla: CLA_PROBE,
            ins: INS_KEX,
            p1: 0,
            payload: Vec::new(),
        }
    }

    /// Encode to wire bytes
    pub fn encode(&self) -> Vec<u8> {
        let mut frame = Vec::with_capacity(COMMAND_HEADER_SIZE + self.payload.len());
        frame.push(self.cla);
        frame.push(self.ins);
        frame.push(self.p1);
        frame.extend_from_slice(&self.payload);
        frame
    }

    /// Decode from wire bytes
    pub fn decode(frame: &[u8]) -> Result<Self> {
        if frame.len() < COMMAND_HEADER_SIZE {
            return Err(Error::TruncatedFrame {
                context: "Command::decode",
                expected: COMMAND_HEADER_SIZE,
                actual: frame.len(),
            });
        }
        Ok(Self {
            cla: frame[0],
            ins: frame[1],
            p1: frame[2],
            payload: frame[COMMAND_HEADER_SIZE..].to_vec(),
        })
    }
}

/// Response frame returned by the device under test
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub payload: Vec<u8>,
    pub status: Status,
}

impl Response {
    /// Successful response with the given payload
    pub fn ok(payload: Vec<u8>) -> Self {
        Self {
            payload,
            status: Status::Ok,
        }
    }

    /// Response carrying a status and no payload
    pub fn status_only(status: Status) -> Self {
        Self {
            payload: Vec::new(),
            status,
        }
    }

    /// Encode to wire bytes
    pub fn encode(&self) -> Vec<u8> {
        let mut frame = Vec::with_capacity(self.payload.len() + STATUS_WORD_SIZE);
        frame.extend_from_slice(&self.payload);
        frame.extend_from_slice(&self.status.to_word().to_be_bytes());
        frame
    }

    /// Decode from wire bytes
    pub fn decode(frame: &[u8]) -> Result<Self> {
        if frame.len() < STATUS_WORD_SIZE {
            return Err(Error::TruncatedFrame {
                context: "Response::decode",
                expected: STATUS_WORD_SIZE,
                actual: frame.len(),
            });
        }
        let split = frame.len() - STATUS_WORD_SIZE;
        let word = u16::from_be_bytes([frame[split], frame[split + 1]]);
        Ok(Self {
            payload: frame[..split].to_vec(),
            status: Status::from_word(word)?,
        })
    }
}
