use super::*;

#[test]
fn same_seed_gives_same_sequence() {
    let mut a = RainRng::seeded(42);
    let mut b = RainRng::seeded(42);
    for _ in 0..100 {
        assert_eq!(a.below(1_000), b.below(1_000));
        assert_eq!(a.in_range(0.0..=1.0f64), b.in_range(0.0..=1.0f64));
    }
}

#[test]
fn seed_is_reported() {
    assert_eq!(RainRng::seeded(5).seed(), Some(5));
    assert_eq!(RainRng::from_entropy().seed(), None);
    assert_eq!(RainRng::from_seed_option(Some(9)).seed(), Some(9));
    assert_eq!(RainRng::from_seed_option(None).seed(), None);
}

#[test]
fn draws_stay_in_range() {
    let mut rng = RainRng::seeded(1);
    for _ in 0..1_000 {
        let v = rng.in_range(15u8..=22);
        assert!((15..=22).contains(&v));
        let s = rng.in_range(30.0..=90.0f64);
        assert!((30.0..=90.0).contains(&s));
        assert!(rng.below(100) < 100);
    }
}

#[test]
fn degenerate_range_returns_its_only_value() {
    let mut rng = RainRng::seeded(1);
    assert_eq!(rng.in_range(7usize..=7), 7);
    assert_eq!(rng.below(1), 0);
}
