use super::*;
use std::collections::HashSet;

#[test]
fn random_columns_respect_default_ranges() {
    let ranges = ColumnRanges::default();
    let alphabet = GlyphAlphabet::default();
    for seed in 0..200 {
        let mut rng = RainRng::seeded(seed);
        let column = ColumnModel::random(6.5, &ranges, &alphabet, &mut rng);
        let len = column.characters().len();
        assert!((10..=30).contains(&len), "len {len}");
        assert!((15..=22).contains(&column.font_size()));
        assert!((30.0..=90.0).contains(&column.speed()));
        assert!(column.characters().iter().all(|&c| alphabet.contains(c)));
        assert_eq!(column.x(), 6.5);
    }
}

#[test]
fn fixed_ranges_give_exact_values() {
    let ranges = ColumnRanges {
        char_count: Bounds::new(4, 4),
        font_size: Bounds::new(20, 20),
        speed: Bounds::new(45.0, 45.0),
    };
    let alphabet = GlyphAlphabet::from_str_chars("x").unwrap();
    let mut rng = RainRng::seeded(0);
    let column = ColumnModel::random(0.0, &ranges, &alphabet, &mut rng);
    assert_eq!(column.characters(), &['x', 'x', 'x', 'x']);
    assert_eq!(column.font_size(), 20);
    assert_eq!(column.speed(), 45.0);
}

#[test]
fn every_column_gets_a_new_identity() {
    let ranges = ColumnRanges::default();
    let alphabet = GlyphAlphabet::default();
    let mut rng = RainRng::seeded(1);
    let ids: HashSet<_> = (0..100)
        .map(|_| ColumnModel::random(0.0, &ranges, &alphabet, &mut rng).id())
        .collect();
    assert_eq!(ids.len(), 100);
}

#[test]
fn bounds_helpers() {
    let b = Bounds::new(2, 5);
    assert!(b.is_valid());
    assert!(b.contains(2));
    assert!(b.contains(5));
    assert!(!b.contains(6));
    assert_eq!(b.range(), 2..=5);
    assert!(!Bounds::new(3.0, 1.0).is_valid());
}

#[test]
fn ranges_deserialize_from_partial_json() {
    let ranges: ColumnRanges =
        serde_json::from_str(r#"{ "speed": { "min": 10.0, "max": 20.0 } }"#).unwrap();
    assert_eq!(ranges.speed, Bounds::new(10.0, 20.0));
    assert_eq!(ranges.char_count, ColumnRanges::default().char_count);
    assert_eq!(ranges.font_size, ColumnRanges::default().font_size);
}
