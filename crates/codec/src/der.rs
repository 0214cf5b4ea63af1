//! ASN.1 DER codec for ECDSA signatures
//!
//! Encodes and decodes `SEQUENCE { INTEGER r, INTEGER s }` exactly. Both
//! integers are interpreted as unsigned magnitudes: the decoder drops any
//! sign-avoidance `0x00` prefix, the encoder re-inserts one whenever the
//! magnitude's high bit is set. Sequence lengths are accepted and produced
//! in short form and in multi-byte long form, so signatures over wide
//! curves (content ≥ 128 bytes) round-trip as well.
//!
//! The decoder is strict: a wrong tag, a truncated element, or any byte
//! remaining after the second integer is corruption and reported as
//! [`Error::MalformedSignature`], never ignored.

use crate::error::{Error, Result};

/// ASN.1 SEQUENCE tag
pub const SEQUENCE_TAG: u8 = 0x30;

/// ASN.1 INTEGER tag
pub const INTEGER_TAG: u8 = 0x02;

/// ECDSA signature as a pair of unsigned integer magnitudes
///
/// Magnitudes are stored minimal (no leading zero bytes, at least one byte)
/// and big-endian, matching what the DER integers carry after sign-byte
/// stripping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerSignature {
    /// Signature component r
    pub r: Vec<u8>,
    /// Signature component s
    pub s: Vec<u8>,
}

impl DerSignature {
    /// Create a signature from two big-endian magnitudes
    ///
    /// Leading zero bytes are stripped so that equal values compare equal
    /// regardless of how the caller padded them.
    pub fn new(r: impl Into<Vec<u8>>, s: impl Into<Vec<u8>>) -> Self {
        Self {
            r: minimal_magnitude(&r.into()),
            s: minimal_magnitude(&s.into()),
        }
    }

    /// Create a signature from fixed-width raw scalar encodings
    ///
    /// Convenience for the `r ‖ s` fixed-width form that curve backends
    /// produce.
    pub fn from_raw_scalars(r: &[u8], s: &[u8]) -> Self {
        Self::new(r, s)
    }

    /// Encode as `SEQUENCE { INTEGER r, INTEGER s }`
    pub fn to_der(&self) -> Vec<u8> {
        let mut body = Vec::with_capacity(self.r.len() + self.s.len() + 6);
        push_integer(&mut body, &self.r);
        push_integer(&mut body, &self.s);

        let mut der = Vec::with_capacity(body.len() + 4);
        der.push(SEQUENCE_TAG);
        push_length(&mut der, body.len());
        der.extend_from_slice(&body);
        der
    }

    /// Decode from DER bytes
    ///
    /// Fails with [`Error::MalformedSignature`] on any tag mismatch,
    /// truncation, length inconsistency, or trailing data.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let mut at = 0usize;

        if take(der, &mut at, "missing SEQUENCE tag")? != SEQUENCE_TAG {
            return Err(malformed("expected SEQUENCE tag"));
        }
        let content_len = read_length(der, &mut at)?;
        if der.len() - at != content_len {
            return Err(malformed("SEQUENCE length does not match input"));
        }

        let r = read_integer(der, &mut at)?;
        let s = read_integer(der, &mut at)?;

        if at != der.len() {
            return Err(malformed("trailing bytes after second INTEGER"));
        }

        Ok(Self { r, s })
    }
}

fn malformed(context: &'static str) -> Error {
    Error::MalformedSignature { context }
}

fn take(der: &[u8], at: &mut usize, context: &'static str) -> Result<u8> {
    let byte = *der.get(*at).ok_or(malformed(context))?;
    *at += 1;
    Ok(byte)
}

/// Read a definite length in short or long form
///
/// Long form: high bit of the first byte set, low seven bits give the count
/// of subsequent big-endian length bytes, most significant first.
fn read_length(der: &[u8], at: &mut usize) -> Result<usize> {
    let first = take(der, at, "missing length")?;
    if first & 0x80 == 0 {
        return Ok(first as usize);
    }

    let count = (first & 0x7F) as usize;
    if count == 0 || count > core::mem::size_of::<usize>() {
        return Err(malformed("unsupported long-form length"));
    }

    let mut len = 0usize;
    for _ in 0..count {
        len = (len << 8) | take(der, at, "truncated long-form length")? as usize;
    }
    Ok(len)
}

fn push_length(out: &mut Vec<u8>, len: usize) {
    if len < 0x80 {
        out.push(len as u8);
    } else {
        let bytes = len.to_be_bytes();
        let skip = bytes.iter().take_while(|&&b| b == 0).count();
        out.push(0x80 | (bytes.len() - skip) as u8);
        out.extend_from_slice(&bytes[skip..]);
    }
}

/// Read one INTEGER element and return its unsigned magnitude
///
/// The element carries a single-byte length in this signature profile;
/// each component is bounded by field width + 1.
fn read_integer(der: &[u8], at: &mut usize) -> Result<Vec<u8>> {
    if take(der, at, "missing INTEGER tag")? != INTEGER_TAG {
        return Err(malformed("expected INTEGER tag"));
    }
    let len = take(der, at, "missing INTEGER length")? as usize;
    if len == 0 {
        return Err(malformed("empty INTEGER body"));
    }
    let end = at
        .checked_add(len)
        .filter(|&end| end <= der.len())
        .ok_or(malformed("truncated INTEGER body"))?;
    let magnitude = minimal_magnitude(&der[*at..end]);
    *at = end;
    Ok(magnitude)
}

fn push_integer(out: &mut Vec<u8>, magnitude: &[u8]) {
    let m = minimal_magnitude(magnitude);
    let pad = usize::from(m[0] & 0x80 != 0);
    out.push(INTEGER_TAG);
    out.push((m.len() + pad) as u8);
    if pad == 1 {
        out.push(0x00);
    }
    out.extend_from_slice(&m);
}

/// Strip leading zero bytes, keeping at least one byte
fn minimal_magnitude(bytes: &[u8]) -> Vec<u8> {
    let skip = bytes
        .iter()
        .take_while(|&&b| b == 0)
        .count()
        .min(bytes.len().saturating_sub(1));
    if bytes.is_empty() {
        vec![0x00]
    } else {
        bytes[skip..].to_vec()
    }
}
