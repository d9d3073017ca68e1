//! Alphabet and converter construction

use shorturl::{Alphabet, Converter, Error, CANONICAL_SYMBOLS, MAX_CANONICAL_RADIX};

#[test]
fn test_construct_from_string() {
    let conv = Converter::new("0123456789ABCDEF").unwrap();
    assert_eq!(conv.radix(), 16);
}

#[test]
fn test_construct_from_radix() {
    for radix in 2..=MAX_CANONICAL_RADIX {
        let conv = Converter::with_radix(radix).unwrap();
        assert_eq!(conv.radix(), radix);
        assert!(CANONICAL_SYMBOLS.starts_with(&conv.alphabet().to_string()));
    }
}

#[test]
fn test_construct_from_symbol_sequence() {
    let conv = Converter::from_symbols((0u8..254).map(char::from)).unwrap();
    assert_eq!(conv.radix(), 254);

    let emoji = Converter::from_symbols(['🍎', '🍌', '🍒']).unwrap();
    assert_eq!(emoji.to_base(5), "🍌🍒");
}

#[test]
fn test_construct_rejects_short_sources() {
    assert!(matches!(Converter::new(""), Err(Error::InvalidArgument(_))));
    assert!(matches!(Converter::new("1"), Err(Error::InvalidArgument(_))));
    assert!(matches!(
        Converter::from_symbols(Vec::new()),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn test_construct_rejects_duplicates() {
    assert!(matches!(
        Converter::new("ABCcC"),
        Err(Error::DuplicateSymbol { symbol: 'C' })
    ));
    assert!(matches!(
        Converter::from_symbols("abca".chars()),
        Err(Error::DuplicateSymbol { symbol: 'a' })
    ));
}

#[test]
fn test_construct_rejects_large_canonical_radix() {
    let err = Converter::with_radix(128).unwrap_err();
    assert_eq!(
        err,
        Error::Range {
            requested: 128,
            max: 62
        }
    );
    assert!(err.to_string().contains("62"));
}

#[test]
fn test_alphabet_parses_from_str() {
    let alphabet: Alphabet = "XY".parse().unwrap();
    assert_eq!(alphabet.radix(), 2);
    assert!("XX".parse::<Alphabet>().is_err());
}

#[test]
fn test_radix_law() {
    for symbols in ["01", "abBA", "9876543210", "☔☕☀☂♣♠☁", CANONICAL_SYMBOLS] {
        let alphabet = Alphabet::new(symbols).unwrap();
        assert_eq!(alphabet.radix(), symbols.chars().count());
    }
}
