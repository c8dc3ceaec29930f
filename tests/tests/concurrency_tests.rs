//! Keys and schemes shared between threads

use std::thread;

use edcrypt_sign::eddsa::{self, Curve, EccKey, RFC8032_MODE};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const THREADS: usize = 8;

#[test]
fn test_shared_key_signs_and_verifies_concurrently() {
    let mut rng = ChaCha20Rng::from_seed([9u8; 32]);
    for curve in [Curve::Ed25519, Curve::Ed448] {
        let key = EccKey::generate(curve, &mut rng);
        let scheme = eddsa::new(&key, RFC8032_MODE, Some(b"threads".as_slice())).unwrap();

        let expected: Vec<Vec<u8>> = (0..THREADS)
            .map(|i| scheme.sign(format!("message {i}").as_bytes()).unwrap())
            .collect();

        thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|i| {
                    let scheme = &scheme;
                    let expected = &expected;
                    s.spawn(move || {
                        let message = format!("message {i}");
                        let signature = scheme.sign(message.as_bytes()).unwrap();
                        assert_eq!(&signature, &expected[i]);
                        scheme.verify(message.as_bytes(), &signature).unwrap();
                        // Someone else's signature does not verify here
                        let other = &expected[(i + 1) % THREADS];
                        assert!(scheme.verify(message.as_bytes(), other).is_err());
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }
        });
    }
}

#[test]
fn test_one_scheme_per_thread() {
    let keys: Vec<EccKey> = (0..THREADS)
        .map(|i| {
            let curve = if i % 2 == 0 { Curve::Ed25519 } else { Curve::Ed448 };
            EccKey::generate(curve, &mut ChaCha20Rng::seed_from_u64(i as u64))
        })
        .collect();

    thread::scope(|s| {
        for key in &keys {
            s.spawn(move || {
                let signer = eddsa::new(key, RFC8032_MODE, None).unwrap();
                let signature = signer.sign(b"independent").unwrap();

                let public = key.public_key();
                let verifier = eddsa::new(&public, RFC8032_MODE, None).unwrap();
                verifier.verify(b"independent", &signature).unwrap();
            });
        }
    });
}
