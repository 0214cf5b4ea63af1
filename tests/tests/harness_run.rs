//! Harness run output format and failure modes

use ecprobe_harness::{run, Error, HarnessConfig};
use ecprobe_tests::test_rng;

fn config(curve: &str, hash: &str, count: u32) -> HarnessConfig {
    HarnessConfig {
        curve: curve.to_string(),
        hash: hash.to_string(),
        count,
        emit_private_scalar: false,
    }
}

#[test]
fn five_iterations_emit_header_plus_five_records() {
    let mut out = Vec::new();
    run(&config("secp256r1", "SHA-256", 5), &mut test_rng(200), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);

    // Header: fixed-width public point and 64-byte message, both hex.
    let header: Vec<&str> = lines[0].split(' ').collect();
    assert_eq!(header.len(), 2);
    assert!(header[0].starts_with("04"));
    assert_eq!(header[0].len(), 2 * (1 + 2 * 32));
    assert_eq!(header[1].len(), 2 * 64);

    for line in &lines[1..] {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 3, "record: {}", line);
        assert!(hex::decode(fields[0]).is_ok());
        assert!(hex::decode(fields[1]).is_ok());
        let elapsed: u128 = fields[2].parse().unwrap();
        assert!(elapsed > 0, "elapsed must be strictly positive");
    }
}

#[test]
fn debug_toggle_appends_the_private_scalar() {
    let mut cfg = config("P-256", "sha256", 1);
    cfg.emit_private_scalar = true;

    let mut out = Vec::new();
    run(&cfg, &mut test_rng(201), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let header: Vec<&str> = text.lines().next().unwrap().split(' ').collect();
    assert_eq!(header.len(), 3);
    assert_eq!(header[2].len(), 2 * 32);
}

#[test]
fn p384_records_use_the_wider_coordinate_fields() {
    let mut out = Vec::new();
    run(&config("secp384r1", "SHA-384", 1), &mut test_rng(202), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    let point = lines[0].split(' ').next().unwrap();
    assert_eq!(point.len(), 2 * (1 + 2 * 48));
}

#[test]
fn unknown_curve_terminates_the_run_before_any_crypto() {
    let mut out = Vec::new();
    let err = run(
        &config("brainpoolP256r1", "SHA-256", 5),
        &mut test_rng(203),
        &mut out,
    )
    .unwrap_err();
    assert!(matches!(err, Error::UnknownCurve(_)));
    assert!(out.is_empty(), "no records may be emitted");
}

#[test]
fn unknown_hash_terminates_the_run() {
    let mut out = Vec::new();
    let err = run(&config("secp256r1", "md5", 5), &mut test_rng(204), &mut out).unwrap_err();
    assert!(matches!(err, Error::UnknownHash(_)));
    assert!(out.is_empty());
}
