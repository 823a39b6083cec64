use super::*;

#[test]
fn splitmix_is_seed_stable() {
    let mut a = SplitMix64::new(42);
    let mut b = SplitMix64::new(42);
    for _ in 0..16 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
    let mut c = SplitMix64::new(43);
    assert_ne!(SplitMix64::new(42).next_u64(), c.next_u64());
}

#[test]
fn next_index_stays_in_range() {
    let mut rng = SplitMix64::new(7);
    for _ in 0..256 {
        assert!(rng.next_index(5) < 5);
    }
}

#[test]
fn slot_angle_divides_full_turn() {
    assert_eq!(slot_angle(0, 4, 0.0), 0.0);
    assert!((slot_angle(1, 4, 0.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    assert!((slot_angle(2, 8, 1.0) - (std::f64::consts::FRAC_PI_2 + 1.0)).abs() < 1e-12);
}

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}
