//! The timing loop

use std::io::Write;
use std::time::Instant;

use ecprobe_codec::DerSignature;
use rand::{CryptoRng, RngCore};

use crate::error::Result;
use crate::provider::{Curve, HashAlg, ProviderKeyPair};

/// Size of the host-side fixed message
pub const HOST_MESSAGE_SIZE: usize = 64;

/// Parameters of one harness run
#[derive(Clone, Debug)]
pub struct HarnessConfig {
    /// Curve identifier resolved against the provider catalog
    pub curve: String,
    /// Hash algorithm identifier for the hash-then-sign step
    pub hash: String,
    /// Number of signatures to produce
    pub count: u32,
    /// Emit the private scalar in the header record (debug runs only)
    pub emit_private_scalar: bool,
}

/// Execute one harness run, writing records to `out`
///
/// Emits one header record — public point, fixed message, optionally the
/// private scalar, all in hex — followed by exactly `count` records of
/// the form `r_hex,s_hex,elapsed_ns`. The elapsed measurement brackets
/// the signing call only; key generation, catalog lookup and record
/// formatting are excluded. Iterations are strictly sequential so that
/// each elapsed value reflects one isolated signing operation.
pub fn run<R, W>(config: &HarnessConfig, rng: &mut R, out: &mut W) -> Result<()>
where
    R: CryptoRng + RngCore,
    W: Write,
{
    let curve = Curve::resolve(&config.curve)?;
    let hash = HashAlg::resolve(&config.hash)?;

    let keypair = ProviderKeyPair::generate(curve, rng);
    let mut message = [0u8; HOST_MESSAGE_SIZE];
    rng.fill_bytes(&mut message);

    write!(
        out,
        "{} {}",
        keypair.public_point_hex(),
        hex::encode(message)
    )?;
    if config.emit_private_scalar {
        write!(out, " {}", keypair.private_scalar_hex())?;
    }
    writeln!(out)?;

    for _ in 0..config.count {
        let started = Instant::now();
        let der = keypair.sign(hash, &message)?;
        let elapsed = started.elapsed();

        let signature = DerSignature::from_der(&der)?;
        writeln!(
            out,
            "{},{},{}",
            hex::encode(&signature.r),
            hex::encode(&signature.s),
            elapsed.as_nanos()
        )?;
    }

    Ok(())
}
