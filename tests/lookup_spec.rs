use std::io::Write;
use std::sync::Arc;
use std::thread;

use flate2::Compression;
use flate2::write::GzEncoder;
use lemmatizer::{
    Language, LemmaError, Lemmatizer, MalformedLines, ParseOptions, Registry, Resolution,
};

type LemmaCase = (&'static str, &'static str, &'static str);

const LEMMA_CASES: &[LemmaCase] = &[
    ("italian", "lavorerai", "lavorare"),
    ("italian", "bicchieri", "bicchiere"),
    ("italian", "lunghi", "lungo"),
    ("italian", "Alberto", "Alberto"),
    ("swedish", "Avtalet", "avtal"),
    ("swedish", "avtalets", "avtal"),
    ("swedish", "avtalens", "avtal"),
    ("swedish", "Avtaletsadlkj", "Avtaletsadlkj"),
    ("english", "goes", "go"),
    ("english", "wolves", "wolf"),
    ("english", "agreed", "agree"),
    ("english", "Edward", "Edward"),
    ("french", "avait", "avoir"),
    ("spanish", "Buenas", "bueno"),
    ("german", "Hast", "haben"),
];

const IN_DICT_CASES: &[(&str, &str, bool)] = &[
    ("italian", "armadio", true),
    ("italian", "ammaccabanane", false),
    ("swedish", "Avtalet", true),
    ("swedish", "Avtalt", false),
];

fn lemmatizer(name: &str) -> Lemmatizer {
    Lemmatizer::new(name).unwrap_or_else(|e| panic!("failed to load {}: {}", name, e))
}

fn gzip(text: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes()).expect("gzip write");
    encoder.finish().expect("gzip finish")
}

#[test]
fn lemma_matches_expected_forms() {
    for (language, input, expected) in LEMMA_CASES {
        let l = lemmatizer(language);
        assert_eq!(l.lemma(input), *expected, "{} lemma({})", language, input);

        // The lowercased index must agree with the exact-case one once both
        // sides of the pair are folded.
        let lowered_in = input.to_lowercase();
        let lowered_out = expected.to_lowercase();
        assert_eq!(
            l.lemma_lower(&lowered_in),
            lowered_out,
            "{} lemma_lower({})",
            language,
            lowered_in
        );
    }
}

#[test]
fn membership_matches_expected() {
    for (language, word, expected) in IN_DICT_CASES {
        let l = lemmatizer(language);
        assert_eq!(
            l.in_dict(word),
            *expected,
            "{} in_dict({})",
            language,
            word
        );
    }
}

#[test]
fn absent_words_resolve_to_themselves() {
    let l = lemmatizer("english");
    for word in ["Edward", "blorptastic", "λέξη"] {
        assert_eq!(l.lemma(word), word);
        assert!(!l.in_dict(word));
        assert_eq!(l.lemmas(word), vec![word], "lemmas({}) must be a singleton", word);
        assert_eq!(l.resolve(word), Resolution::Guessed(word));
    }
}

#[test]
fn present_words_are_found_and_consistent() {
    let l = lemmatizer("english");
    for word in ["goes", "went", "wolves", "children", "agreed"] {
        assert!(l.in_dict(word), "in_dict({})", word);
        let resolution = l.resolve(word);
        assert!(resolution.is_found(), "resolve({}) must be a hit", word);
        assert!(
            l.lemmas(word).contains(&l.lemma(word)),
            "lemma({}) must be a member of lemmas({})",
            word,
            word
        );
        assert!(!l.lemmas(word).is_empty());
    }
}

#[test]
fn multi_candidate_forms_keep_every_lemma() {
    let l = lemmatizer("italian");

    let mut candidates = l.lemmas("soli");
    assert!(
        candidates.contains(&l.lemma("soli")),
        "lemma(soli) must come from lemmas(soli)"
    );
    candidates.sort_unstable();
    assert_eq!(candidates, ["solare", "sole", "solere", "solo"]);

    // The tie-break is first-seen order in the asset, stable across loads.
    let again = lemmatizer("italian");
    assert_eq!(l.lemma("soli"), again.lemma("soli"));
}

#[test]
fn every_bundled_language_loads() {
    let registry = Registry::bundled();
    for language in Language::ALL {
        let l = registry
            .lemmatizer(language)
            .unwrap_or_else(|e| panic!("failed to load {}: {}", language, e));
        assert!(l.entry_count() > 0, "{} dictionary is empty", language);
        assert_eq!(l.language(), language);
        assert_eq!(l.parse_stats().skipped, 0, "{} asset has bad lines", language);
    }
}

#[test]
fn unknown_language_is_rejected() {
    let err = Lemmatizer::new("klingon").unwrap_err();
    assert!(
        matches!(err, LemmaError::UnsupportedLanguage(ref name) if name == "klingon"),
        "got {:?}",
        err
    );
}

#[test]
fn language_names_match_case_insensitively() {
    let l = lemmatizer("English");
    assert_eq!(l.language(), Language::English);
}

#[test]
fn registry_without_asset_is_unsupported() {
    let registry = Registry::empty();
    let err = registry.lemmatizer(Language::French).unwrap_err();
    assert!(matches!(err, LemmaError::UnsupportedLanguage(_)), "got {:?}", err);
}

#[test]
fn truncated_asset_is_corrupt() {
    let bundled = Registry::bundled();
    let full = bundled.asset(Language::Swedish).expect("bundled asset");

    let mut registry = Registry::empty();
    registry.register(Language::Swedish, full[..full.len() / 2].to_vec());
    let err = registry.lemmatizer(Language::Swedish).unwrap_err();
    assert!(matches!(err, LemmaError::AssetCorrupt { .. }), "got {:?}", err);
}

#[test]
fn non_gzip_asset_is_corrupt() {
    let mut registry = Registry::empty();
    registry.register(Language::English, b"plain text, not gzip".to_vec());
    let err = registry.lemmatizer(Language::English).unwrap_err();
    assert!(matches!(err, LemmaError::AssetCorrupt { .. }), "got {:?}", err);
}

#[test]
fn duplicate_pairs_merge_in_first_seen_order() {
    let mut registry = Registry::empty();
    registry.register(
        Language::English,
        gzip("sole\tsoli\nsolo\tsoli\nsole\tsoli\nsolare\tsoli\n"),
    );
    let l = registry
        .lemmatizer(Language::English)
        .expect("load synthetic asset");

    // Exact duplicates are discarded, new candidates append in order.
    assert_eq!(l.lemmas("soli"), ["sole", "solo", "solare"]);
    assert_eq!(l.lemma("soli"), "sole");
    assert_eq!(l.entry_count(), 1);
}

#[test]
fn case_variants_pool_into_the_lowercased_index() {
    let mut registry = Registry::empty();
    registry.register(Language::German, gzip("haben\tHast\nhasten\thast\n"));
    let l = registry
        .lemmatizer(Language::German)
        .expect("load synthetic asset");

    // Exact-case lookups stay distinct.
    assert_eq!(l.lemma("Hast"), "haben");
    assert_eq!(l.lemma("hast"), "hasten");

    // The lowercased index pools both spellings, first-seen candidate wins.
    assert_eq!(l.lemma_lower("hast"), "haben");
    assert!(l.resolve_lower("hast").is_found());
}

#[test]
fn malformed_line_fails_strict_parse() {
    for bad in ["no separator here", "\tgoes", "go\t", "go\tgoes\textra"] {
        let mut registry = Registry::empty();
        registry.register(Language::English, gzip(&format!("go\tgoes\n{}\n", bad)));
        let err = registry.lemmatizer(Language::English).unwrap_err();
        assert!(
            matches!(err, LemmaError::ParseError { line: 2, .. }),
            "line {:?} got {:?}",
            bad,
            err
        );
    }
}

#[test]
fn malformed_lines_can_be_skipped() {
    let mut registry = Registry::empty();
    registry.register(
        Language::English,
        gzip("go\tgoes\nnonsense\n\nwolf\twolves\r\n"),
    );
    let options = ParseOptions {
        malformed_lines: MalformedLines::Skip,
    };
    let l = registry
        .lemmatizer_with(Language::English, options)
        .expect("tolerant load");

    assert_eq!(l.entry_count(), 2);
    assert_eq!(l.parse_stats().skipped, 1);
    assert_eq!(l.lemma("wolves"), "wolf");
}

#[test]
fn lemmatizer_is_shared_across_threads() {
    let l = Arc::new(lemmatizer("swedish"));
    let workers: Vec<_> = (0..4)
        .map(|_| {
            let l = Arc::clone(&l);
            thread::spawn(move || {
                for _ in 0..100 {
                    assert_eq!(l.lemma("Avtalet"), "avtal");
                    assert_eq!(l.lemma_lower("avtalet"), "avtal");
                    assert!(!l.in_dict("Avtalt"));
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().expect("lookup worker panicked");
    }
}
