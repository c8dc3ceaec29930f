//! Property-based tests for the EdDSA schemes

use edcrypt_sign::eddsa::{self, Curve, EccKey, RFC8032_MODE};
use edcrypt_sign::Error;
use edcrypt_tests::message_input;
use proptest::prelude::*;

fn curve() -> impl Strategy<Value = Curve> {
    prop_oneof![Just(Curve::Ed25519), Just(Curve::Ed448)]
}

fn seed_for(curve: Curve, bytes: &[u8; 57]) -> EccKey {
    EccKey::from_seed(curve, &bytes[..curve.key_size()]).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn sign_then_verify(
        curve in curve(),
        seed in any::<[u8; 57]>(),
        message in prop::collection::vec(any::<u8>(), 0..300),
        context in prop::collection::vec(any::<u8>(), 0..=255),
        prehash in any::<bool>(),
    ) {
        let key = seed_for(curve, &seed);
        let scheme = eddsa::new(&key, RFC8032_MODE, Some(context.as_slice())).unwrap();

        let signature = scheme.sign(message_input(curve, prehash, &message)).unwrap();
        prop_assert_eq!(signature.len(), curve.signature_size());
        prop_assert!(scheme.verify(message_input(curve, prehash, &message), &signature).is_ok());

        // A public-only copy verifies the same way
        let public = key.public_key();
        let verifier = eddsa::new(&public, RFC8032_MODE, Some(context.as_slice())).unwrap();
        prop_assert!(verifier.verify(message_input(curve, prehash, &message), &signature).is_ok());
    }

    #[test]
    fn signing_is_deterministic(
        curve in curve(),
        seed in any::<[u8; 57]>(),
        message in prop::collection::vec(any::<u8>(), 0..128),
    ) {
        let key = seed_for(curve, &seed);
        let scheme = eddsa::new(&key, RFC8032_MODE, None).unwrap();
        let a = scheme.sign(&message).unwrap();
        let b = scheme.sign(&message).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn flipped_signature_bit_is_rejected(
        curve in curve(),
        seed in any::<[u8; 57]>(),
        message in prop::collection::vec(any::<u8>(), 0..128),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let key = seed_for(curve, &seed);
        let scheme = eddsa::new(&key, RFC8032_MODE, None).unwrap();
        let mut signature = scheme.sign(&message).unwrap();

        let i = position.index(signature.len());
        signature[i] ^= 1 << bit;
        prop_assert_eq!(scheme.verify(&message, &signature), Err(Error::NotAuthentic));
    }

    #[test]
    fn altered_message_is_rejected(
        curve in curve(),
        seed in any::<[u8; 57]>(),
        message in prop::collection::vec(any::<u8>(), 1..128),
        position in any::<prop::sample::Index>(),
        prehash in any::<bool>(),
    ) {
        let key = seed_for(curve, &seed);
        let scheme = eddsa::new(&key, RFC8032_MODE, None).unwrap();
        let signature = scheme.sign(message_input(curve, prehash, &message)).unwrap();

        let mut altered = message.clone();
        let i = position.index(altered.len());
        altered[i] ^= 0x01;
        prop_assert_eq!(
            scheme.verify(message_input(curve, prehash, &altered), &signature),
            Err(Error::NotAuthentic)
        );
    }

    #[test]
    fn signature_is_bound_to_context(
        curve in curve(),
        seed in any::<[u8; 57]>(),
        message in prop::collection::vec(any::<u8>(), 0..64),
        ctx_a in prop::collection::vec(any::<u8>(), 0..32),
        ctx_b in prop::collection::vec(any::<u8>(), 0..32),
    ) {
        prop_assume!(ctx_a != ctx_b);
        let key = seed_for(curve, &seed);
        let signer = eddsa::new(&key, RFC8032_MODE, Some(ctx_a.as_slice())).unwrap();
        let other = eddsa::new(&key, RFC8032_MODE, Some(ctx_b.as_slice())).unwrap();

        let signature = signer.sign(&message).unwrap();
        prop_assert_eq!(other.verify(&message, &signature), Err(Error::NotAuthentic));
    }

    #[test]
    fn signature_is_bound_to_key(
        curve in curve(),
        seed_a in any::<[u8; 57]>(),
        seed_b in any::<[u8; 57]>(),
        message in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        prop_assume!(seed_a[..curve.key_size()] != seed_b[..curve.key_size()]);
        let key_a = seed_for(curve, &seed_a);
        let key_b = seed_for(curve, &seed_b);
        let signature = eddsa::new(&key_a, RFC8032_MODE, None).unwrap().sign(&message).unwrap();

        let scheme_b = eddsa::new(&key_b, RFC8032_MODE, None).unwrap();
        prop_assert_eq!(scheme_b.verify(&message, &signature), Err(Error::NotAuthentic));
    }

    #[test]
    fn imported_public_key_round_trips(
        curve in curve(),
        seed in any::<[u8; 57]>(),
    ) {
        let key = seed_for(curve, &seed);
        let imported = eddsa::import_public_key(key.public_bytes()).unwrap();
        prop_assert_eq!(imported.curve(), curve);
        prop_assert_eq!(imported, key.public_key());
    }
}
