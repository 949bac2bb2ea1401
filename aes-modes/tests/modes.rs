//! End-to-end behaviour of every mode through the public API

use aes_modes::{CipherMode, CipherModeError, CipherModes, BLOCK_SIZE};
use proptest::prelude::*;

fn sequential_key(len: usize) -> Vec<u8> {
    (0..len as u8).collect()
}

/// Every mode paired with each key length it accepts.
fn all_modes(aad: &[u8]) -> Vec<(CipherMode<'_>, Vec<u8>)> {
    let mut cases = Vec::new();
    for mode in [
        CipherMode::Ecb,
        CipherMode::Cbc,
        CipherMode::Cfb,
        CipherMode::Ofb,
        CipherMode::Ctr,
        CipherMode::Gcm { aad },
        CipherMode::Xts { sector: 42 },
    ] {
        for &len in mode.key_sizes() {
            cases.push((mode, sequential_key(len)));
        }
    }
    cases
}

#[test]
fn test_roundtrip_every_mode_and_key_size() {
    let plaintext = b"1234567890ABCDEF".repeat(4);

    for (mode, key) in all_modes(b"header-aad") {
        let ciphertext = mode.encrypt(&key, &plaintext).unwrap();
        let decrypted = mode.decrypt(&key, &ciphertext).unwrap();
        assert_eq!(decrypted, plaintext, "{mode} with {}-byte key", key.len());
    }
}

#[test]
fn test_empty_plaintext_roundtrip() {
    for (mode, key) in all_modes(b"") {
        let ciphertext = mode.encrypt(&key, b"").unwrap();
        assert!(mode.decrypt(&key, &ciphertext).unwrap().is_empty(), "{mode}");
    }
}

#[test]
fn test_randomized_modes_are_not_deterministic() {
    let key = sequential_key(32);
    let plaintext = b"same plaintext, same key";

    for mode in [
        CipherMode::Cbc,
        CipherMode::Cfb,
        CipherMode::Ofb,
        CipherMode::Ctr,
        CipherMode::Gcm { aad: b"" },
    ] {
        let a = mode.encrypt(&key, plaintext).unwrap();
        let b = mode.encrypt(&key, plaintext).unwrap();
        assert_ne!(a, b, "{mode}");
        assert_ne!(a[..mode.iv_len()], b[..mode.iv_len()], "{mode}");
    }
}

#[test]
fn test_gcm_rejects_every_single_bit_flip() {
    let key = sequential_key(16);
    let aad = b"header-aad";
    let ciphertext = CipherModes::gcm_encrypt(&key, b"The quick brown fox", aad).unwrap();

    for byte in 0..ciphertext.len() {
        for bit in 0..8 {
            let mut tampered = ciphertext.clone();
            tampered[byte] ^= 1 << bit;
            assert_eq!(
                CipherModes::gcm_decrypt(&key, &tampered, aad),
                Err(CipherModeError::AuthenticationFailed),
                "byte {byte} bit {bit}"
            );
        }
    }
}

#[test]
fn test_cbc_tampered_last_byte() {
    let plaintext = b"Sphinx of black quartz, judge my vow";

    for len in [16, 24, 32] {
        let key = sequential_key(len);
        let mut ciphertext = CipherModes::cbc_encrypt(&key, plaintext).unwrap();
        let last = ciphertext.len() - 1;
        ciphertext[last] ^= 0xFF;

        match CipherModes::cbc_decrypt(&key, &ciphertext) {
            Err(e) => assert_eq!(e, CipherModeError::InvalidPadding),
            Ok(decrypted) => assert_ne!(decrypted, plaintext),
        }
    }
}

#[test]
fn test_cbc_forged_padding_is_rejected() {
    // 36-byte plaintext: the last block carries twelve 0x0C pad bytes.
    let key = sequential_key(32);
    let plaintext = b"Sphinx of black quartz, judge my vow";
    assert_eq!(plaintext.len(), 36);

    let mut ciphertext = CipherModes::cbc_encrypt(&key, plaintext).unwrap();
    assert_eq!(ciphertext.len(), BLOCK_SIZE + 48);
    assert_eq!(CipherModes::cbc_decrypt(&key, &ciphertext).unwrap(), plaintext);

    // Flipping the last byte of the second-to-last block flips the last
    // plaintext byte: 0x0C ^ 0xFF = 0xF3, which is not a valid pad value.
    let target = ciphertext.len() - BLOCK_SIZE - 1;
    ciphertext[target] ^= 0xFF;
    assert_eq!(
        CipherModes::cbc_decrypt(&key, &ciphertext),
        Err(CipherModeError::InvalidPadding)
    );
}

#[test]
fn test_stream_modes_tampered_last_byte() {
    let key = sequential_key(24);
    let plaintext = b"The quick brown fox jumps over the lazy dog";

    for mode in [CipherMode::Cfb, CipherMode::Ofb, CipherMode::Ctr] {
        let mut ciphertext = mode.encrypt(&key, plaintext).unwrap();
        let last = ciphertext.len() - 1;
        ciphertext[last] ^= 0xFF;

        let decrypted = mode.decrypt(&key, &ciphertext).unwrap();
        let n = plaintext.len();
        assert_eq!(decrypted[..n - 1], plaintext[..n - 1], "{mode}");
        assert_eq!(decrypted[n - 1], plaintext[n - 1] ^ 0xFF, "{mode}");
    }
}

#[test]
fn test_ctr_bit_flip_anywhere() {
    let key = sequential_key(16);
    let plaintext = [0u8; 64];
    let mut ciphertext = CipherModes::ctr_encrypt(&key, &plaintext).unwrap();

    ciphertext[BLOCK_SIZE + 20] ^= 0x01;
    ciphertext[BLOCK_SIZE + 63] ^= 0x10;
    let decrypted = CipherModes::ctr_decrypt(&key, &ciphertext).unwrap();

    let mut expected = plaintext;
    expected[20] ^= 0x01;
    expected[63] ^= 0x10;
    assert_eq!(decrypted, expected);
}

#[test]
fn test_xts_tampering_stays_in_its_block() {
    let plaintext = b"1234567890ABCDEF".repeat(4);

    for len in [32, 48, 64] {
        let key = sequential_key(len);
        let mut ciphertext = CipherModes::xts_encrypt(&key, &plaintext, 42).unwrap();
        let last = ciphertext.len() - 1;
        ciphertext[last] ^= 0xFF;

        let decrypted = CipherModes::xts_decrypt(&key, &ciphertext, 42).unwrap();
        assert_eq!(decrypted[..48], plaintext[..48]);
        assert_ne!(decrypted[48..], plaintext[48..]);
    }
}

#[test]
fn test_key_size_boundaries() {
    for len in [0, 15, 17, 31, 33] {
        let key = sequential_key(len);
        for mode in [
            CipherMode::Ecb,
            CipherMode::Cbc,
            CipherMode::Cfb,
            CipherMode::Ofb,
            CipherMode::Ctr,
            CipherMode::Gcm { aad: b"" },
        ] {
            assert!(
                matches!(
                    mode.encrypt(&key, b"data"),
                    Err(CipherModeError::InvalidKeySize { .. })
                ),
                "{mode} accepted a {len}-byte key"
            );
            assert!(
                matches!(
                    mode.decrypt(&key, &[0u8; 64]),
                    Err(CipherModeError::InvalidKeySize { .. })
                ),
                "{mode} accepted a {len}-byte key"
            );
        }
    }

    let xts = CipherMode::Xts { sector: 0 };
    for len in [16, 24, 31, 33, 47, 49, 63, 65] {
        assert!(matches!(
            xts.encrypt(&sequential_key(len), &[0u8; 16]),
            Err(CipherModeError::InvalidKeySize { .. })
        ));
    }
}

#[test]
fn test_short_ciphertext_per_mode() {
    let key = sequential_key(16);
    for mode in [
        CipherMode::Cbc,
        CipherMode::Cfb,
        CipherMode::Ofb,
        CipherMode::Ctr,
        CipherMode::Gcm { aad: b"" },
    ] {
        let short = vec![0u8; mode.iv_len() - 1];
        assert_eq!(
            mode.decrypt(&key, &short),
            Err(CipherModeError::CiphertextTooShort {
                len: short.len(),
                min: mode.iv_len()
            }),
            "{mode}"
        );
    }
}

#[test]
fn test_modes_are_usable_across_threads() {
    let key = sequential_key(32);
    let handles: Vec<_> = (0..4u64)
        .map(|sector| {
            let key = key.clone();
            std::thread::spawn(move || {
                let data = vec![sector as u8; 64];
                let gcm = CipherMode::Gcm { aad: b"thread" };
                let sealed = gcm.encrypt(&key, &data).unwrap();
                assert_eq!(gcm.decrypt(&key, &sealed).unwrap(), data);

                let xts_key = [key.as_slice(), key.as_slice()].concat();
                let xts = CipherMode::Xts { sector };
                let ct = xts.encrypt(&xts_key, &data).unwrap();
                assert_eq!(xts.decrypt(&xts_key, &ct).unwrap(), data);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

proptest! {
    #[test]
    fn prop_roundtrip_arbitrary_plaintext(
        data in proptest::collection::vec(any::<u8>(), 0..300),
        aad in proptest::collection::vec(any::<u8>(), 0..32),
        key_len in prop::sample::select(vec![16usize, 24, 32]),
    ) {
        let key = sequential_key(key_len);
        for mode in [
            CipherMode::Ecb,
            CipherMode::Cbc,
            CipherMode::Cfb,
            CipherMode::Ofb,
            CipherMode::Ctr,
            CipherMode::Gcm { aad: &aad },
        ] {
            let ciphertext = mode.encrypt(&key, &data).unwrap();
            prop_assert_eq!(&mode.decrypt(&key, &ciphertext).unwrap(), &data);
        }
    }

    #[test]
    fn prop_xts_roundtrip_whole_blocks(
        blocks in 0usize..16,
        fill in any::<u8>(),
        sector in any::<u64>(),
        key_len in prop::sample::select(vec![32usize, 48, 64]),
    ) {
        let key = sequential_key(key_len);
        let data = vec![fill; blocks * BLOCK_SIZE];
        let ciphertext = CipherModes::xts_encrypt(&key, &data, sector).unwrap();
        prop_assert_eq!(ciphertext.len(), data.len());
        prop_assert_eq!(CipherModes::xts_decrypt(&key, &ciphertext, sector).unwrap(), data);
    }

    #[test]
    fn prop_stream_output_length(
        data in proptest::collection::vec(any::<u8>(), 0..100),
    ) {
        let key = sequential_key(16);
        for mode in [CipherMode::Cfb, CipherMode::Ofb, CipherMode::Ctr] {
            prop_assert_eq!(mode.encrypt(&key, &data).unwrap().len(), BLOCK_SIZE + data.len());
        }
    }
}
