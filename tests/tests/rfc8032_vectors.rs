//! Known-answer tests from RFC 8032 §7

use edcrypt_sign::eddsa::{self, import_private_key, import_public_key, RFC8032_MODE};
use edcrypt_sign::Error;
use edcrypt_tests::message_input;
use edcrypt_tests::vectors::{self, ALL};

#[test]
fn test_public_key_derivation() {
    for v in ALL {
        let key = import_private_key(&v.secret_bytes()).unwrap();
        assert_eq!(key.curve(), v.curve, "{}", v.name);
        assert_eq!(hex::encode(key.public_bytes()), v.public, "{}", v.name);
    }
}

#[test]
fn test_sign_matches_vectors() {
    for v in ALL {
        let key = import_private_key(&v.secret_bytes()).unwrap();
        let ctx = v.context_bytes();
        let scheme = eddsa::new(&key, RFC8032_MODE, Some(ctx.as_slice())).unwrap();
        let message = v.message_bytes();

        let signature = scheme
            .sign(message_input(v.curve, v.prehash, &message))
            .unwrap();
        assert_eq!(hex::encode(&signature), v.signature, "{}", v.name);
    }
}

#[test]
fn test_verify_vectors_with_public_key() {
    for v in ALL {
        let key = import_public_key(&v.public_bytes()).unwrap();
        assert!(!key.has_private());
        let ctx = v.context_bytes();
        let scheme = eddsa::new(&key, RFC8032_MODE, Some(ctx.as_slice())).unwrap();
        let message = v.message_bytes();

        scheme
            .verify(message_input(v.curve, v.prehash, &message), &v.signature_bytes())
            .unwrap_or_else(|e| panic!("{}: {}", v.name, e));
    }
}

#[test]
fn test_signing_is_deterministic() {
    for v in ALL {
        let key = import_private_key(&v.secret_bytes()).unwrap();
        let ctx = v.context_bytes();
        let scheme = eddsa::new(&key, RFC8032_MODE, Some(ctx.as_slice())).unwrap();
        let message = v.message_bytes();

        let first = scheme.sign(message_input(v.curve, v.prehash, &message)).unwrap();
        let second = scheme.sign(message_input(v.curve, v.prehash, &message)).unwrap();
        assert_eq!(first, second, "{}", v.name);
    }
}

#[test]
fn test_vectors_reject_wrong_mode() {
    // A pre-hash signature must not verify as a pure one over the same bytes,
    // and the other way round.
    for v in ALL {
        let key = import_public_key(&v.public_bytes()).unwrap();
        let ctx = v.context_bytes();
        let scheme = eddsa::new(&key, RFC8032_MODE, Some(ctx.as_slice())).unwrap();
        let message = v.message_bytes();

        let err = scheme
            .verify(message_input(v.curve, !v.prehash, &message), &v.signature_bytes())
            .unwrap_err();
        assert_eq!(err, Error::NotAuthentic, "{}", v.name);
    }
}

#[test]
fn test_context_vectors_are_context_bound() {
    let foo = vectors::ED25519CTX_FOO;
    let bar = vectors::ED25519CTX_BAR;
    assert_eq!(foo.secret, bar.secret);
    assert_ne!(foo.signature, bar.signature);

    let key = import_public_key(&foo.public_bytes()).unwrap();
    let scheme = eddsa::new(&key, RFC8032_MODE, Some(b"bar".as_slice())).unwrap();
    let err = scheme
        .verify(&foo.message_bytes(), &foo.signature_bytes())
        .unwrap_err();
    assert_eq!(err, Error::NotAuthentic);
    scheme
        .verify(&bar.message_bytes(), &bar.signature_bytes())
        .unwrap();

    // Ed448 carries the prefix even without a context, so the empty and
    // "foo" contexts give different signatures over the same message.
    let plain = vectors::ED448_ONE_OCTET;
    let with_ctx = vectors::ED448_ONE_OCTET_CTX;
    assert_ne!(plain.signature, with_ctx.signature);
    let key = import_public_key(&plain.public_bytes()).unwrap();
    let scheme = eddsa::new(&key, RFC8032_MODE, None).unwrap();
    assert_eq!(
        scheme
            .verify(&with_ctx.message_bytes(), &with_ctx.signature_bytes())
            .unwrap_err(),
        Error::NotAuthentic
    );
}

#[test]
fn test_sha_abc_vector_is_sha512_of_abc() {
    use sha2::{Digest, Sha512};
    let v = vectors::ED25519_TEST_SHA_ABC;
    assert_eq!(v.message_bytes(), Sha512::digest(b"abc").to_vec());
}

#[test]
fn test_prehash_vectors_accept_caller_digest_state() {
    use sha2::{Digest, Sha512};
    use sha3::digest::Update;
    use sha3::Shake256;

    let v = vectors::ED25519PH_ABC;
    let key = import_private_key(&v.secret_bytes()).unwrap();
    let scheme = eddsa::new(&key, RFC8032_MODE, None).unwrap();
    let mut state = Sha512::new();
    Digest::update(&mut state, b"ab");
    Digest::update(&mut state, b"c");
    assert_eq!(hex::encode(scheme.sign(state).unwrap()), v.signature);

    let v = vectors::ED448PH_ABC_CTX;
    let key = import_private_key(&v.secret_bytes()).unwrap();
    let scheme = eddsa::new(&key, RFC8032_MODE, Some(b"foo".as_slice())).unwrap();
    let mut state = Shake256::default();
    state.update(b"abc");
    assert_eq!(hex::encode(scheme.sign(state).unwrap()), v.signature);
}
