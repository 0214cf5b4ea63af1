//! Property tests for the DER signature codec

use ecprobe_codec::{DerSignature, Error};
use proptest::collection::vec;
use proptest::prelude::*;

proptest! {
    /// Round-trip over the full magnitude range a 256-bit curve can
    /// produce, including the sign-byte-requiring high-bit values.
    #[test]
    fn round_trip_is_exact(
        r in vec(any::<u8>(), 1..=33),
        s in vec(any::<u8>(), 1..=33),
    ) {
        let sig = DerSignature::new(r, s);
        let back = DerSignature::from_der(&sig.to_der()).unwrap();
        prop_assert_eq!(back, sig);
    }

    /// Forcing the top byte high exercises the sign-avoidance prefix on
    /// every iteration.
    #[test]
    fn high_bit_magnitudes_round_trip(
        head_r in 0x80u8..=0xFF,
        head_s in 0x80u8..=0xFF,
        tail in vec(any::<u8>(), 0..32),
    ) {
        let mut r = vec![head_r];
        r.extend_from_slice(&tail);
        let mut s = vec![head_s];
        s.extend_from_slice(&tail);

        let sig = DerSignature::new(r, s);
        let der = sig.to_der();
        // Encoded r starts with the sign-avoidance zero.
        prop_assert_eq!(der[4], 0x00);
        prop_assert_eq!(DerSignature::from_der(&der).unwrap(), sig);
    }

    /// Any single trailing byte is corruption, never silently ignored.
    #[test]
    fn trailing_byte_is_always_malformed(
        r in vec(any::<u8>(), 1..=33),
        s in vec(any::<u8>(), 1..=33),
        extra in any::<u8>(),
    ) {
        let mut der = DerSignature::new(r, s).to_der();
        der.push(extra);
        prop_assert!(
            matches!(
                DerSignature::from_der(&der),
                Err(Error::MalformedSignature { .. })
            ),
            "expected Err(MalformedSignature)"
        );
    }

    /// Truncation anywhere inside the frame is deterministically rejected.
    #[test]
    fn truncation_is_always_malformed(
        r in vec(any::<u8>(), 1..=33),
        s in vec(any::<u8>(), 1..=33),
        cut_seed in any::<usize>(),
    ) {
        let der = DerSignature::new(r, s).to_der();
        let cut = cut_seed % der.len();
        prop_assert!(
            matches!(
                DerSignature::from_der(&der[..cut]),
                Err(Error::MalformedSignature { .. })
            ),
            "expected Err(MalformedSignature)"
        );
    }
}
