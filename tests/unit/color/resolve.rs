use super::*;

fn palette(pairs: &[(&str, &str)]) -> FiguraResult<Palette> {
    let raw: BTreeMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Palette::from_literals(&raw)
}

#[test]
fn resolves_hex_and_triple_literals() {
    let empty = Palette::new();
    assert_eq!(resolve("#FF0000", &empty).unwrap(), Color(0xFF0000));
    assert_eq!(resolve("(255,0,0)", &empty).unwrap(), Color(0xFF0000));
    assert_eq!(resolve("#a1B2c3", &empty).unwrap(), Color(0xA1B2C3));
}

#[test]
fn triple_is_not_clamped() {
    let empty = Palette::new();
    assert_eq!(resolve("(256,0,0)", &empty).unwrap(), Color(0x0100_0000));
    assert_eq!(resolve("(0,0,300)", &empty).unwrap(), Color(300));
}

#[test]
fn wide_channels_keep_their_high_bits() {
    let empty = Palette::new();
    assert_eq!(resolve("(70000,0,0)", &empty).unwrap(), Color(4_587_520_000));
    assert_eq!(resolve("(0,65536,0)", &empty).unwrap(), Color(1 << 24));

    // Still a literal, never a palette miss, however long the digit run.
    let huge = resolve("(99999999999999999999999,0,0)", &empty).unwrap();
    assert_eq!(parse_literal("(99999999999999999999999,0,0)"), Some(huge));
}

#[test]
fn non_literals_fall_through_to_palette() {
    for token in [
        "(1, 2, 3)",
        "(1,2)",
        "(1,2,3,4)",
        "(+1,2,3)",
        "(-1,2,3)",
        "(,2,3)",
        "#FFF",
        "#GG0000",
        "FF0000",
        "#FF00000",
        "",
    ] {
        assert_eq!(parse_literal(token), None, "{token:?}");
        let err = resolve(token, &Palette::new()).unwrap_err();
        assert!(matches!(err, FiguraError::ColorNotFound(_)), "{token:?}");
    }
}

#[test]
fn palette_lookup_and_missing_key() {
    let p = palette(&[("red", "#FF0000")]).unwrap();
    assert_eq!(resolve("red", &p).unwrap(), Color(0xFF0000));

    let err = resolve("blue", &p).unwrap_err();
    assert!(matches!(err, FiguraError::ColorNotFound(_)));
    assert_eq!(err.to_string(), "Not found color 'blue'");
}

#[test]
fn literal_wins_over_palette_key_of_same_spelling() {
    let p = palette(&[("#000000", "#FFFFFF")]).unwrap();
    assert_eq!(resolve("#000000", &p).unwrap(), Color::BLACK);
}

#[test]
fn palette_values_cannot_alias_siblings() {
    let err = palette(&[("a", "#FF0000"), ("b", "a")]).unwrap_err();
    assert_eq!(err.to_string(), "Not found color 'a'");

    let p = palette(&[("a", "#FF0000"), ("b", "(0,255,0)")]).unwrap();
    assert_eq!(p.len(), 2);
    assert_eq!(p.get("b"), Some(Color(0x00FF00)));
    assert_eq!(
        p.iter().map(|(k, _)| k).collect::<Vec<_>>(),
        vec!["a", "b"]
    );
}

#[test]
fn hex_roundtrip_preserves_value() {
    let empty = Palette::new();
    for token in ["#000000", "#FFFFFF", "#1a2B3c", "(12,34,56)", "(0,128,255)"] {
        let c = resolve(token, &empty).unwrap();
        assert_eq!(resolve(&c.to_hex(), &empty).unwrap(), c, "{token}");
    }
}
