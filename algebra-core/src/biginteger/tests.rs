use super::*;
use crate::UniformRand;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

fn naf_value(digits: &[i64]) -> i128 {
    digits
        .iter()
        .rev()
        .fold(0i128, |acc, &d| acc * 2 + i128::from(d))
}

#[test]
fn test_bigint_shifts() {
    let mut a = BigInteger256::from(1);
    a.muln(130);
    assert_eq!(a.0, [0, 0, 4, 0]);
    assert_eq!(a.num_bits(), 131);
    a.divn(129);
    assert_eq!(a, BigInteger256::from(2));
    a.div2();
    assert_eq!(a, BigInteger256::one());
    a.mul2();
    assert_eq!(a, BigInteger256::from(2));
    a.muln(256);
    assert!(a.is_zero());
}

#[test]
fn test_bigint_add_sub_carry() {
    let mut a = BigInt([u64::MAX; 4]);
    assert!(a.add_nocarry(&BigInteger256::one()));
    assert!(a.is_zero());
    assert!(a.sub_noborrow(&BigInteger256::one()));
    assert_eq!(a, BigInt([u64::MAX; 4]));
}

#[test]
fn test_bigint_ordering() {
    let a = BigInt([0, 0, 1]);
    let b = BigInt([u64::MAX, u64::MAX, 0]);
    assert!(a > b);
    assert!(b < a);
    assert_eq!(a.cmp(&a), Ordering::Equal);
}

#[test]
fn test_bigint_bits_and_bytes() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789);
    for _ in 0..20 {
        let a = BigInteger384::rand(&mut rng);
        assert_eq!(BigInteger384::from_bits_be(&a.to_bits_be()), a);
        assert_eq!(BigInteger384::from_bytes_be(&a.to_bytes_be()), Some(a));
        assert_eq!(BigInteger384::from_bytes_le(&a.to_bytes_le()), Some(a));
    }
    assert_eq!(
        BigInteger64::from_bytes_be(&[1, 2]),
        Some(BigInteger64::from(0x0102))
    );
    assert_eq!(BigInteger64::from_bytes_be(&[0u8; 9]), None);
}

#[test]
fn test_find_naf() {
    // 7 = 8 - 1
    let naf = BigInteger64::from(7).find_naf();
    assert_eq!(naf, vec![-1, 0, 0, 1]);

    let mut rng = XorShiftRng::seed_from_u64(1231275789);
    for _ in 0..100 {
        let v: u64 = rng.gen();
        let naf = BigInteger64::from(v).find_naf();
        let digits: Vec<i64> = naf.iter().map(|d| i64::from(*d)).collect();
        assert_eq!(naf_value(&digits), i128::from(v));
        for pair in naf.windows(2) {
            assert!(pair[0] == 0 || pair[1] == 0);
        }
    }
}

#[test]
fn test_find_wnaf() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789);
    for w in 2..8 {
        for _ in 0..20 {
            let v: u64 = rng.gen();
            let wnaf = BigInteger64::from(v).find_wnaf(w).unwrap();
            assert_eq!(naf_value(&wnaf), i128::from(v));
            for d in wnaf.iter().filter(|d| **d != 0) {
                assert_eq!(d.abs() % 2, 1);
                assert!(d.abs() < 1 << (w - 1));
            }
        }
    }
    assert!(BigInteger64::from(3).find_wnaf(1).is_none());
}
