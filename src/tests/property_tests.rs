//! Randomized round-trip and field isolation checks

use rand::Rng;

use super::test_utils::{assert_fields, random_fields};
use crate::layout::truncate_amount;
use crate::*;

const ITERATIONS: usize = 2_000;

#[test]
fn test_roundtrip_truncates_amounts() {
    let mut rng = rand::rng();
    for _ in 0..ITERATIONS {
        let (t, f, d, o) = random_fields(&mut rng);
        let (_, _, deposit, owed_deposit) = decode(encode(t, f, d, o));

        assert_eq!(deposit, d - d % (1 << 32));
        assert_eq!(owed_deposit, o - o % (1 << 32));
        assert_eq!(deposit & 0xffff_ffff, 0);
        assert_eq!(owed_deposit & 0xffff_ffff, 0);
    }
}

#[test]
fn test_roundtrip_exact_bounded_fields() {
    let mut rng = rand::rng();
    for _ in 0..ITERATIONS {
        let (t, f, d, o) = random_fields(&mut rng);
        let (timestamp, flow_rate, _, _) = decode(encode(t, f, d, o));

        assert_eq!(timestamp as u64, t);
        assert_eq!(flow_rate, f);
    }
}

#[test]
fn test_field_isolation() {
    let mut rng = rand::rng();
    for _ in 0..ITERATIONS {
        let (t, f, d, o) = random_fields(&mut rng);
        let (t2, f2, d2, o2) = random_fields(&mut rng);
        let base = decode(encode(t, f, d, o));

        let (_, flow_rate, deposit, owed_deposit) = decode(encode(t2, f, d, o));
        assert_eq!((flow_rate, deposit, owed_deposit), (base.1, base.2, base.3));

        let (timestamp, _, deposit, owed_deposit) = decode(encode(t, f2, d, o));
        assert_eq!((timestamp, deposit, owed_deposit), (base.0, base.2, base.3));

        let (timestamp, flow_rate, _, owed_deposit) = decode(encode(t, f, d2, o));
        assert_eq!((timestamp, flow_rate, owed_deposit), (base.0, base.1, base.3));

        let (timestamp, flow_rate, deposit, _) = decode(encode(t, f, d, o2));
        assert_eq!((timestamp, flow_rate, deposit), (base.0, base.1, base.2));
    }
}

#[test]
fn test_decode_is_stable_under_reencode() {
    let mut rng = rand::rng();
    for _ in 0..ITERATIONS {
        let word = Word256::from_limbs([
            rng.random(),
            rng.random(),
            rng.random(),
            rng.random(),
        ]);
        let (t, f, d, o) = decode(word);
        assert_eq!(encode(t as u64, f, d, o), word);
    }
}

#[test]
fn test_extractor_agrees_with_decode() {
    let mut rng = rand::rng();
    let extract = FlowWordCodec::new().extract;
    for _ in 0..ITERATIONS {
        let (t, f, d, o) = random_fields(&mut rng);
        let word = encode(t, f, d, o);
        assert_fields(
            (
                extract.timestamp(word),
                extract.flow_rate(word),
                extract.deposit(word),
                extract.owed_deposit(word),
            ),
            (t as u32, f, truncate_amount(d), truncate_amount(o)),
        );
    }
}

#[test]
fn test_hex_roundtrip_random_words() {
    let mut rng = rand::rng();
    for _ in 0..ITERATIONS {
        let (t, f, d, o) = random_fields(&mut rng);
        let word = encode(t, f, d, o);
        assert_eq!(Word256::from_hex(&format!("{:#x}", word)), Ok(word));
    }
}
