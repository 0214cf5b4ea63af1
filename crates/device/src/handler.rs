//! Wire command dispatch
//!
//! Maps decoded [`Command`] frames onto session operations and session
//! errors back onto status words. Mirrors the turn-taking of the real
//! device: one command in, one response out, never a partial result.

use ecprobe_codec::wire::{CLA_PROBE, INS_KEX, INS_PREPARE, INS_SIGN};
use ecprobe_codec::{Command, Response, Status};
use ecprobe_params::SECP256R1;
use rand::{CryptoRng, RngCore};

use crate::engine::CurveEngine;
use crate::error::Error;
use crate::session::Session;

impl<E: CurveEngine> Session<E> {
    /// Process one command frame against this session
    ///
    /// A rejected command (unknown class or instruction, precondition
    /// violation) produces a bare status response and leaves the session
    /// in its prior state.
    pub fn handle<R: CryptoRng + RngCore>(&mut self, rng: &mut R, command: &Command) -> Response {
        if command.cla != CLA_PROBE {
            return Response::status_only(Status::UnsupportedClass);
        }

        let outcome = match command.ins {
            INS_PREPARE => self.handle_prepare(rng, command.p1),
            INS_SIGN => self.sign(),
            INS_KEX => self.handle_key_agree(),
            _ => return Response::status_only(Status::UnsupportedInstruction),
        };

        match outcome {
            Ok(payload) => Response::ok(payload),
            Err(err) => Response::status_only(status_for(&err)),
        }
    }

    fn handle_prepare<R: CryptoRng + RngCore>(
        &mut self,
        rng: &mut R,
        p1: u8,
    ) -> crate::error::Result<Vec<u8>> {
        // The device program carries its explicit parameters compiled in;
        // nothing curve-related arrives over the wire.
        let bias = self.options().biased_prepare.then_some(p1);
        let output = self.prepare(rng, &SECP256R1, bias)?;

        let mut payload = Vec::with_capacity(output.public_point.len() + output.message.len());
        payload.extend_from_slice(&output.public_point);
        payload.extend_from_slice(&output.message);
        Ok(payload)
    }

    fn handle_key_agree(&mut self) -> crate::error::Result<Vec<u8>> {
        let revealed = self.agree()?.map(|secret| secret.to_vec());
        Ok(revealed.unwrap_or_default())
    }
}

/// Status word for a failed session operation
///
/// Engine failures have no dedicated status word on the wire; they
/// surface as the precondition status, the same way the device reports
/// an unusable key slot.
fn status_for(err: &Error) -> Status {
    match err {
        Error::NotReady { .. } => Status::NotReady,
        Error::ParameterMismatch { .. }
        | Error::KeyGeneration { .. }
        | Error::Signing { .. }
        | Error::Agreement { .. } => Status::NotReady,
    }
}
