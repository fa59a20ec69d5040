use super::*;

#[test]
fn default_alphabet_is_binary_digits() {
    let alphabet = GlyphAlphabet::default();
    assert_eq!(alphabet.glyphs(), &['0', '1']);
    assert_eq!(alphabet.len(), 2);
    assert!(!alphabet.is_empty());
}

#[test]
fn empty_alphabet_is_rejected() {
    assert!(GlyphAlphabet::new(std::iter::empty()).is_none());
    assert!(GlyphAlphabet::from_str_chars("").is_none());
    assert!(GlyphAlphabet::from_str_chars("\n\t").is_none());
}

#[test]
fn control_characters_are_skipped() {
    let alphabet = GlyphAlphabet::from_str_chars("0\n1").unwrap();
    assert_eq!(alphabet.glyphs(), &['0', '1']);
}

#[test]
fn random_glyph_is_always_a_member() {
    let alphabet = GlyphAlphabet::from_str_chars("ｱｲｳ01").unwrap();
    let mut rng = RainRng::seeded(3);
    for _ in 0..1_000 {
        assert!(alphabet.contains(alphabet.random(&mut rng)));
    }
}

#[test]
fn random_glyph_covers_the_whole_alphabet() {
    let alphabet = GlyphAlphabet::default();
    let mut rng = RainRng::seeded(11);
    let mut seen = [false; 2];
    for _ in 0..200 {
        match alphabet.random(&mut rng) {
            '0' => seen[0] = true,
            '1' => seen[1] = true,
            other => panic!("unexpected glyph {other:?}"),
        }
    }
    assert_eq!(seen, [true, true]);
}
