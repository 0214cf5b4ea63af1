//! Timing harness entry point
//!
//! `sign-timing <curve> <hash> <signature count>`
//!
//! Writes one header record and `count` timing records to stdout. Set the
//! `SIGN_TIMING_DEBUG` environment variable to include the private scalar
//! in the header.

use std::env;
use std::io;
use std::process;

use ecprobe_harness::{run, Error, HarnessConfig};
use rand::rngs::OsRng;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("usage: sign-timing <curve> <hash> <signature count>");
        process::exit(1);
    }

    let count = match args[3].parse::<u32>() {
        Ok(count) if count > 0 => count,
        _ => {
            eprintln!("usage: sign-timing <curve> <hash> <signature count>");
            process::exit(1);
        }
    };

    let config = HarnessConfig {
        curve: args[1].clone(),
        hash: args[2].clone(),
        count,
        emit_private_scalar: env::var_os("SIGN_TIMING_DEBUG").is_some(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = run(&config, &mut OsRng, &mut out) {
        eprintln!("{}", err);
        match err {
            Error::UnknownCurve(_) => process::exit(3),
            _ => process::exit(2),
        }
    }
}
