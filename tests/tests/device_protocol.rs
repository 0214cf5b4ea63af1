//! End-to-end device protocol runs over the wire codec

use ecprobe_codec::{Command, DerSignature, Response, Status};
use ecprobe_device::{single_bit_scalar, Session, SessionOptions, MESSAGE_SIZE};
use ecprobe_params::{SECP256R1, UNCOMPRESSED_POINT_SIZE};
use ecprobe_tests::{p256_field_bytes, test_rng};
use p256::ecdsa::signature::Verifier;
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};

/// Round-trip one command through the byte-level codec, as a transport
/// would, and hand the decoded response back.
fn transact(
    session: &mut Session<ecprobe_device::P256Engine>,
    rng: &mut (impl rand::CryptoRng + rand::RngCore),
    command: Command,
) -> Response {
    let decoded = Command::decode(&command.encode()).expect("command frame");
    let response = session.handle(rng, &decoded);
    Response::decode(&response.encode()).expect("response frame")
}

#[test]
fn prepare_then_sign_verifies_under_the_returned_point() {
    let mut rng = test_rng(100);
    let mut session = Session::p256(SessionOptions {
        biased_prepare: false,
        ..SessionOptions::default()
    });

    let prepared = transact(&mut session, &mut rng, Command::prepare(0));
    assert_eq!(prepared.status, Status::Ok);
    assert_eq!(
        prepared.payload.len(),
        UNCOMPRESSED_POINT_SIZE + MESSAGE_SIZE
    );

    let (point, message) = prepared.payload.split_at(UNCOMPRESSED_POINT_SIZE);

    let signed = transact(&mut session, &mut rng, Command::sign());
    assert_eq!(signed.status, Status::Ok);

    let der = DerSignature::from_der(&signed.payload).expect("device DER signature");
    let signature = Signature::from_scalars(p256_field_bytes(&der.r), p256_field_bytes(&der.s))
        .expect("scalar pair");
    let verifier = VerifyingKey::from_sec1_bytes(point).expect("public point");
    verifier
        .verify(message, &signature)
        .expect("signature must verify under the returned point");
}

#[test]
fn operate_before_prepare_returns_not_ready() {
    let mut rng = test_rng(101);

    for command in [Command::sign(), Command::key_agree()] {
        let mut session = Session::p256(SessionOptions::default());
        let response = transact(&mut session, &mut rng, command);
        assert_eq!(response.status, Status::NotReady);
        assert!(response.payload.is_empty());
    }
}

#[test]
fn biased_prepare_reports_the_predicted_public_point() {
    let mut rng = test_rng(102);
    let mut session = Session::p256(SessionOptions::default());

    // Bit 0: private scalar 1, public point is the generator itself.
    let response = transact(&mut session, &mut rng, Command::prepare(0));
    assert_eq!(response.status, Status::Ok);
    assert_eq!(&response.payload[..UNCOMPRESSED_POINT_SIZE], &SECP256R1.g);

    // Any other position must agree with an independently derived pair.
    for bit in [7u8, 8, 100, 255] {
        let response = transact(&mut session, &mut rng, Command::prepare(bit));
        assert_eq!(response.status, Status::Ok);

        let key = SigningKey::from_bytes(&single_bit_scalar(bit).into()).unwrap();
        let expected = VerifyingKey::from(&key);
        let reported =
            VerifyingKey::from_sec1_bytes(&response.payload[..UNCOMPRESSED_POINT_SIZE]).unwrap();
        assert_eq!(reported, expected, "bit {}", bit);
    }
}

#[test]
fn each_operation_requires_a_fresh_prepare() {
    let mut rng = test_rng(103);
    let mut session = Session::p256(SessionOptions::default());

    transact(&mut session, &mut rng, Command::prepare(12));
    assert_eq!(
        transact(&mut session, &mut rng, Command::sign()).status,
        Status::Ok
    );
    assert_eq!(
        transact(&mut session, &mut rng, Command::sign()).status,
        Status::NotReady
    );
    assert_eq!(
        transact(&mut session, &mut rng, Command::key_agree()).status,
        Status::NotReady
    );

    transact(&mut session, &mut rng, Command::prepare(12));
    assert_eq!(
        transact(&mut session, &mut rng, Command::key_agree()).status,
        Status::Ok
    );
}

#[test]
fn revealed_secret_matches_the_device_resident_slot() {
    let mut rng = test_rng(104);
    let mut session = Session::p256(SessionOptions {
        reveal_shared_secret: true,
        ..SessionOptions::default()
    });

    transact(&mut session, &mut rng, Command::prepare(0));
    let response = transact(&mut session, &mut rng, Command::key_agree());
    assert_eq!(response.status, Status::Ok);

    // d = 1, so the shared secret with the generator is the generator's
    // own X coordinate.
    assert_eq!(&response.payload[..], SECP256R1.generator_x());
    assert_eq!(
        session.shared_secret().map(|s| &s[..]),
        Some(SECP256R1.generator_x())
    );
}

#[test]
fn foreign_class_and_instruction_bytes_are_rejected() {
    let mut rng = test_rng(105);
    let mut session = Session::p256(SessionOptions::default());

    let foreign_class = Command {
        cla: 0x80,
        ins: 0x5A,
        p1: 0,
        payload: Vec::new(),
    };
    assert_eq!(
        transact(&mut session, &mut rng, foreign_class).status,
        Status::UnsupportedClass
    );

    let foreign_ins = Command {
        cla: 0xB0,
        ins: 0x99,
        p1: 0,
        payload: Vec::new(),
    };
    assert_eq!(
        transact(&mut session, &mut rng, foreign_ins).status,
        Status::UnsupportedInstruction
    );
}
