use letter_mash::{find_top_words, load_dictionary, loader, DictionaryError, Error, Grid, Position};
use std::io::Write;
use std::path::Path;

#[test]
fn test_parse_point_key() {
    let entries = loader::parse_entries(r#"[{"word": "خدا", "point": 4}, {"word": "پدر", "point": 3}]"#).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].word, "خدا");
    assert_eq!(entries[0].score, 4);
    assert_eq!(entries[1].score, 3);
}

#[test]
fn test_parse_score_key() {
    let dictionary = loader::load_from_str(r#"[{"word": "ابر", "score": 3}]"#).unwrap();
    assert_eq!(dictionary.score_of("ابر"), Some(3));
}

#[test]
fn test_malformed_json() {
    let err = loader::load_from_str(r#"[{"word": "ابر"}"#).unwrap_err();
    assert!(matches!(err, Error::Json(_)));

    let err = loader::load_from_str(r#"[{"word": "ابر"}]"#).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_invalid_entries_rejected() {
    let err = loader::load_from_str(r#"[{"word": "ابر", "point": -1}]"#).unwrap_err();
    assert!(matches!(
        err,
        Error::Dictionary(DictionaryError::NonPositiveScore { score: -1, .. })
    ));

    let err = loader::load_from_str(r#"[{"word": " ", "point": 2}]"#).unwrap_err();
    assert!(matches!(err, Error::Dictionary(DictionaryError::InvalidWord { .. })));
}

#[test]
fn test_missing_file() {
    let err = loader::load_from_path(Path::new("/src/main/resources/dictionary/words.json")).unwrap_err();
    assert!(matches!(err, Error::DictionaryFile { .. }));
    assert!(err.to_string().contains("Dictionary file not found or is not readable"));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"word": "خدا", "point": 4}}, {{"word": "اتشنشانی", "point": 8}}]"#
    )
    .unwrap();

    let dictionary = loader::load_from_path(file.path()).unwrap();
    assert_eq!(dictionary.len(), 2);
    assert_eq!(dictionary.score_of("اتشنشانی"), Some(8));
}

#[test]
fn test_embedded_dictionary() {
    let dictionary = load_dictionary().unwrap();
    assert!(dictionary.len() > 50);
    assert_eq!(dictionary.score_of("ابر"), Some(3));
    assert_eq!(dictionary.score_of("پدر"), Some(4));
    assert_eq!(dictionary.score_of("ربا"), Some(3));
}

#[test]
fn test_embedded_dictionary_search() {
    let dictionary = load_dictionary().unwrap();
    let grid = Grid::parse("ا ب ر ظ ظ ظ ظ ظ ظ ظ ظ ظ ظ پ د ر").unwrap();

    let results = find_top_words(&dictionary, &grid, 3, Some("همه"));
    let words: Vec<_> = results.iter().map(|r| (r.word.as_str(), r.score)).collect();
    assert_eq!(words, vec![("پدر", 4), ("ابر", 3), ("ربا", 3)]);
    assert_eq!(
        results[0].path,
        vec![Position::new(3, 1), Position::new(3, 2), Position::new(3, 3)]
    );
}
