use aes_core::round::{add_round_key, inv_mix_columns, inv_mix_columns_fast};
use aes_core::sbox::{inv_sbox, sbox};
use aes_core::{decrypt_block, encrypt_block, expand_key, Error, Key, State};
use proptest::prelude::*;

fn any_key() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 16),
        prop::collection::vec(any::<u8>(), 24),
        prop::collection::vec(any::<u8>(), 32),
    ]
}

fn bad_key_len() -> impl Strategy<Value = usize> {
    (0usize..64).prop_filter("valid AES key length", |len| ![16, 24, 32].contains(len))
}

proptest! {
    #[test]
    fn decrypt_inverts_encrypt(key in any_key(), block in any::<[u8; 16]>()) {
        let ct = encrypt_block(&block, &key).unwrap();
        prop_assert_eq!(decrypt_block(&ct, &key).unwrap(), block);
    }

    #[test]
    fn cached_schedule_matches_one_shot(key in any_key(), block in any::<[u8; 16]>()) {
        let rks = aes_core::expand(&Key::new(&key).unwrap());
        prop_assert_eq!(rks.encrypt(&block), encrypt_block(&block, &key).unwrap());
        prop_assert_eq!(rks.decrypt(&block), decrypt_block(&block, &key).unwrap());
    }

    #[test]
    fn substitution_is_an_involution_pair(b in any::<u8>()) {
        prop_assert_eq!(inv_sbox(sbox(b)), b);
        prop_assert_eq!(sbox(inv_sbox(b)), b);
    }

    #[test]
    fn add_round_key_is_self_inverse(state in any::<[u8; 16]>(), key in any::<[u8; 16]>()) {
        let original = State::from(state);
        let round_key = State::from(key);
        let mut s = original;
        add_round_key(&mut s, &round_key);
        add_round_key(&mut s, &round_key);
        prop_assert_eq!(s, original);
    }

    #[test]
    fn inverse_mix_columns_forms_agree(state in any::<[u8; 16]>()) {
        let mut direct = State::from(state);
        let mut fast = direct;
        inv_mix_columns(&mut direct);
        inv_mix_columns_fast(&mut fast);
        prop_assert_eq!(direct, fast);
    }

    #[test]
    fn bad_key_lengths_are_rejected(len in bad_key_len()) {
        let key = vec![0u8; len];
        prop_assert_eq!(expand_key(&key), Err(Error::InvalidKeyLength(len)));
        prop_assert_eq!(encrypt_block(&[0u8; 16], &key), Err(Error::InvalidKeyLength(len)));
    }

    #[test]
    fn bad_block_lengths_are_rejected(len in (0usize..48).prop_filter("one block", |l| *l != 16)) {
        let block = vec![0u8; len];
        prop_assert_eq!(encrypt_block(&block, &[0u8; 16]), Err(Error::InvalidBlockLength(len)));
        prop_assert_eq!(decrypt_block(&block, &[0u8; 24]), Err(Error::InvalidBlockLength(len)));
    }
}
