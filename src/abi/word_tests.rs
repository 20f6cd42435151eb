use super::*;

fn word_hex(word: &Word) -> String {
    hex::encode(word)
}

#[test]
fn uint_is_left_padded_big_endian() {
    let word = encode_uint(U256::from(0x0102u64), 16).unwrap();
    assert_eq!(
        word_hex(&word),
        "0000000000000000000000000000000000000000000000000000000000000102"
    );
    assert_eq!(decode_uint(&word, 16).unwrap(), U256::from(0x0102u64));
}

#[test]
fn uint_rejects_value_wider_than_declared() {
    let err = encode_uint(U256::from(256u64), 8).unwrap_err();
    assert!(matches!(err, CodecError::EncodingViolation { ref ty, .. } if ty == "uint8"));
}

#[test]
fn uint_decode_rejects_dirty_high_bytes() {
    let mut word = [0u8; WORD_SIZE];
    word[WORD_SIZE - 5] = 1;
    assert!(decode_uint(&word, 32).is_err());
    assert!(decode_uint(&word, 40).is_ok());
}

#[test]
fn unsupported_widths_are_violations() {
    for bits in [0, 7, 257, 264] {
        assert!(
            matches!(
                encode_uint(U256::ZERO, bits),
                Err(CodecError::EncodingViolation { .. })
            ),
            "width {bits} must be rejected"
        );
    }
    assert!(decode_int(&[0u8; WORD_SIZE], 12).is_err());
}

#[test]
fn negative_int_is_sign_extended() {
    let minus_one = I256::from_raw(U256::MAX);
    let word = encode_int(minus_one, 8).unwrap();
    assert_eq!(word, [0xff; WORD_SIZE]);
    assert_eq!(decode_int(&word, 8).unwrap(), minus_one);
}

#[test]
fn int_decode_rejects_broken_sign_extension() {
    let mut word = [0u8; WORD_SIZE];
    word[WORD_SIZE - 1] = 0x80;
    // 0x80 is -128 as int8, which requires 0xff fill.
    assert!(decode_int(&word, 8).is_err());
    // The same word is a valid positive int16.
    assert!(decode_int(&word, 16).is_ok());
}

#[test]
fn int256_accepts_every_word() {
    let word = [0xa5u8; WORD_SIZE];
    assert!(decode_int(&word, 256).is_ok());
}

#[test]
fn bool_words() {
    assert_eq!(encode_bool(true)[WORD_SIZE - 1], 1);
    assert_eq!(encode_bool(false), [0u8; WORD_SIZE]);
    assert!(decode_bool(&encode_bool(true)).unwrap());

    let mut two = [0u8; WORD_SIZE];
    two[WORD_SIZE - 1] = 2;
    assert!(decode_bool(&two).is_err());

    let mut dirty = encode_bool(true);
    dirty[0] = 1;
    assert!(decode_bool(&dirty).is_err());
}

#[test]
fn address_occupies_low_twenty_bytes() {
    let address = Address::repeat_byte(0xab);
    let word = encode_address(&address);
    assert_eq!(&word[..12], &[0u8; 12]);
    assert_eq!(&word[12..], address.as_slice());
    assert_eq!(decode_address(&word).unwrap(), address);
}

#[test]
fn address_decode_rejects_dirty_padding() {
    let mut word = encode_address(&Address::repeat_byte(1));
    word[11] = 0xff;
    assert!(matches!(
        decode_address(&word),
        Err(CodecError::EncodingViolation { .. })
    ));
}

#[test]
fn fixed_bytes_are_right_padded() {
    let word = encode_fixed_bytes(&[1, 2, 3, 4]).unwrap();
    assert_eq!(&word[..4], &[1, 2, 3, 4]);
    assert!(word[4..].iter().all(|b| *b == 0));
    let decoded = decode_fixed_bytes::<4>(&word).unwrap();
    assert_eq!(decoded.as_slice(), &[1, 2, 3, 4]);
}

#[test]
fn fixed_bytes_padding_is_not_inspected() {
    let mut word = encode_fixed_bytes(&[9, 9]).unwrap();
    word[WORD_SIZE - 1] = 0xee;
    assert_eq!(decode_fixed_bytes::<2>(&word).unwrap().as_slice(), &[9, 9]);
}

#[test]
fn fixed_bytes_length_bounds() {
    assert!(encode_fixed_bytes(&[]).is_err());
    assert!(encode_fixed_bytes(&[0u8; 33]).is_err());
    assert!(encode_fixed_bytes(&[0u8; 32]).is_ok());
}

#[test]
fn read_word_reports_truncation() {
    let data = [0u8; 40];
    assert!(read_word(&data, 8).is_ok());
    assert_eq!(
        read_word(&data, 9).unwrap_err(),
        CodecError::TruncatedInput {
            needed: 41,
            available: 40
        }
    );
}

#[test]
fn oversized_length_word_saturates() {
    let mut data = [0u8; WORD_SIZE];
    data[0] = 1;
    assert_eq!(read_usize(&data, 0).unwrap(), usize::MAX);
    assert_eq!(read_usize(&usize_word(77), 0).unwrap(), 77);
}

#[test]
fn padding_rounds_up_to_word() {
    assert_eq!(padded_len(0), 0);
    assert_eq!(padded_len(1), 32);
    assert_eq!(padded_len(32), 32);
    assert_eq!(padded_len(1000), 1024);
}

// =========================================================================
// Property-based tests
// =========================================================================

use proptest::prelude::*;

proptest! {
    #[test]
    fn uint_roundtrip_within_width(raw in any::<u64>(), bytes in 1usize..=8) {
        let bits = bytes * 8;
        let value = if bits == 64 { raw } else { raw & ((1u64 << bits) - 1) };
        let word = encode_uint(U256::from(value), bits).unwrap();
        prop_assert_eq!(decode_uint(&word, bits).unwrap(), U256::from(value));
    }

    #[test]
    fn int_roundtrip_for_i64(value in any::<i64>()) {
        let signed = I256::try_from(value).unwrap();
        let word = encode_int(signed, 64).unwrap();
        prop_assert_eq!(decode_int(&word, 64).unwrap(), signed);
    }

    #[test]
    fn address_roundtrip(bytes in any::<[u8; 20]>()) {
        let address = Address::from(bytes);
        prop_assert_eq!(decode_address(&encode_address(&address)).unwrap(), address);
    }
}
