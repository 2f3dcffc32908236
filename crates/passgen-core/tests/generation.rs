use rand::rngs::StdRng;
use rand::SeedableRng;

use passgen_core::random::{Draw, ScriptedSource};
use passgen_core::{
    generate_passphrase, ConfigRule, Exit, GenerationConfig, PassgenError, PassphraseBuilder,
    RngSource, WordCorpus,
};

const SEEDS: u64 = 200;

fn seeded(seed: u64) -> RngSource<StdRng> {
    RngSource::new(StdRng::seed_from_u64(seed))
}

#[test]
fn test_two_words_no_decoration() {
    let corpus = WordCorpus::new(["correct", "horse", "battery", "staple"]).unwrap();
    let config = GenerationConfig::default().with_number_of_words(2);

    for seed in 0..SEEDS {
        let passphrase = generate_passphrase(&corpus, &config, &mut seeded(seed)).unwrap();
        let value = passphrase.as_str();

        assert_eq!(passphrase.words(), 2);
        assert!(value.chars().all(|c| c.is_ascii_lowercase()));
        let split = corpus.iter().any(|first| {
            value
                .strip_prefix(first)
                .is_some_and(|rest| corpus.iter().any(|second| second == rest))
        });
        assert!(split, "{} is not two corpus words", value);
    }
}

#[test]
fn test_length_bounds_hold() {
    let corpus = WordCorpus::embedded();
    let config = GenerationConfig::default()
        .with_min_chars(20)
        .with_max_chars(30)
        .with_symbol_probability(0.3)
        .with_number_probability(0.3)
        .with_uppercase_probability(0.5);
    let builder = PassphraseBuilder::new(&corpus, &config).unwrap();

    for seed in 0..SEEDS {
        let passphrase = builder.generate(&mut seeded(seed)).unwrap();
        assert!(
            (20..=30).contains(&passphrase.len()),
            "seed {}: length {}",
            seed,
            passphrase.len()
        );
    }
}

#[test]
fn test_word_target_is_a_floor_without_min() {
    let corpus = WordCorpus::embedded();
    let config = GenerationConfig::default()
        .with_number_of_words(5)
        .with_wordless_iteration_probability(0.4)
        .with_symbol_probability(0.5);

    for seed in 0..SEEDS {
        let passphrase = generate_passphrase(&corpus, &config, &mut seeded(seed)).unwrap();
        assert!(passphrase.words() >= 5);
        assert_eq!(passphrase.exit(), Exit::MinReached);
    }
}

#[test]
fn test_tight_window_lands_inside() {
    let corpus = WordCorpus::embedded();
    let config = GenerationConfig::default()
        .with_number_of_words(1)
        .with_min_chars(20)
        .with_max_chars(22);

    for seed in 0..SEEDS {
        let passphrase = generate_passphrase(&corpus, &config, &mut seeded(seed)).unwrap();
        assert!(
            (20..=22).contains(&passphrase.len()),
            "seed {}: length {}",
            seed,
            passphrase.len()
        );
    }
}

#[test]
fn test_tight_window_past_min_with_words_short_fails() {
    let corpus = WordCorpus::embedded();
    let config = GenerationConfig::default()
        .with_min_chars(20)
        .with_max_chars(22);
    let builder = PassphraseBuilder::new(&corpus, &config).unwrap();

    let mut failures = 0;
    for seed in 0..1000 {
        match builder.generate(&mut seeded(seed)) {
            Ok(passphrase) => assert!(
                (20..=22).contains(&passphrase.len()),
                "seed {}: length {}",
                seed,
                passphrase.len()
            ),
            // min_chars met before the fourth word leaves a window of at
            // most one character, and no corpus word is that short.
            Err(PassgenError::NoSuitableWord {
                longer_than,
                shorter_than,
            }) => {
                assert!(longer_than <= 0, "seed {}: longer_than {}", seed, longer_than);
                assert_eq!(shorter_than, longer_than + 2);
                failures += 1;
            }
            Err(other) => panic!("seed {}: unexpected error {}", seed, other),
        }
    }
    assert!(failures > 0);
}

#[test]
fn test_graded_corpus_tight_fit_word_in_window() {
    let words: Vec<String> = (1..=12)
        .map(|n| char::from(b'a' + n as u8 - 1).to_string().repeat(n))
        .collect();
    let corpus = WordCorpus::new(&words).unwrap();
    let config = GenerationConfig::default()
        .with_number_of_words(1)
        .with_min_chars(20)
        .with_max_chars(22);

    // Twelve chars of "l" leaves 8 to min, too far for the shortcut; the
    // next word "hhhhhhhh" reaches min exactly.
    let mut rng = ScriptedSource::new([
        Draw::Index(11),
        Draw::Unit(0.0),
        Draw::Unit(0.9),
        Draw::Unit(0.1),
        Draw::Unit(0.9),
        Draw::Unit(0.9),
        Draw::Index(7),
        Draw::Unit(0.0),
        Draw::Unit(0.9),
        Draw::Unit(0.1),
        Draw::Unit(0.9),
        Draw::Unit(0.9),
    ]);
    let passphrase = generate_passphrase(&corpus, &config, &mut rng).unwrap();
    assert_eq!(passphrase.len(), 20);
    assert_eq!(passphrase.exit(), Exit::MinReached);

    // "jjjjjjjjjj" then "eeeee": 15 chars in, 5 to min and 7 to max, so
    // only the six-letter word qualifies for the final slot.
    let mut rng = ScriptedSource::new([
        Draw::Index(9),
        Draw::Unit(0.0),
        Draw::Unit(0.9),
        Draw::Unit(0.1),
        Draw::Unit(0.9),
        Draw::Unit(0.9),
        Draw::Index(4),
        Draw::Unit(0.0),
        Draw::Unit(0.9),
        Draw::Unit(0.1),
        Draw::Unit(0.9),
        Draw::Unit(0.9),
        Draw::Index(0),
        Draw::Unit(0.9),
    ]);
    let passphrase = generate_passphrase(&corpus, &config, &mut rng).unwrap();
    assert_eq!(passphrase.as_str(), "jjjjjjjjjjeeeeeffffff");
    assert_eq!(passphrase.len(), 21);
    assert_eq!(passphrase.exit(), Exit::TightFit);
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn test_uppercase_probability_one_capitalises_every_word() {
    let corpus = WordCorpus::embedded();
    let config = GenerationConfig::default().with_uppercase_probability(1.0);

    for seed in 0..SEEDS {
        let passphrase = generate_passphrase(&corpus, &config, &mut seeded(seed)).unwrap();
        let value = passphrase.as_str();
        let capitals = value.chars().filter(|c| c.is_ascii_uppercase()).count();
        assert_eq!(capitals, passphrase.words());
        assert!(value.starts_with(|c: char| c.is_ascii_uppercase()));
    }
}

#[test]
fn test_uppercase_probability_zero_capitalises_nothing() {
    let corpus = WordCorpus::embedded();
    let config = GenerationConfig::default().with_number_of_words(6);

    for seed in 0..SEEDS {
        let passphrase = generate_passphrase(&corpus, &config, &mut seeded(seed)).unwrap();
        assert!(!passphrase.as_str().chars().any(|c| c.is_uppercase()));
    }
}

#[test]
fn test_mixed_case_wordlist_stays_lowercase_without_capitalisation() {
    let corpus =
        WordCorpus::from_reader("Paris\nparis\nBerlin\nLISBON\nOslo\n".as_bytes()).unwrap();
    assert_eq!(corpus.len(), 4);
    let config = GenerationConfig::default().with_number_of_words(3);

    for seed in 0..SEEDS {
        let passphrase = generate_passphrase(&corpus, &config, &mut seeded(seed)).unwrap();
        assert!(
            passphrase.as_str().chars().all(|c| c.is_ascii_lowercase()),
            "seed {}: {}",
            seed,
            passphrase
        );
    }
}

#[test]
fn test_no_decorations_means_letters_only() {
    let corpus = WordCorpus::embedded();
    let config = GenerationConfig::default()
        .with_uppercase_probability(0.5)
        .with_wordless_iteration_probability(0.5)
        .with_min_chars(24);

    for seed in 0..SEEDS {
        let passphrase = generate_passphrase(&corpus, &config, &mut seeded(seed)).unwrap();
        assert!(passphrase.as_str().chars().all(char::is_alphabetic));
    }
}

#[test]
fn test_decorations_appear_when_certain() {
    let corpus = WordCorpus::embedded();
    let config = GenerationConfig::default()
        .with_number_of_words(3)
        .with_symbol_probability(1.0)
        .with_number_probability(1.0);

    let passphrase = generate_passphrase(&corpus, &config, &mut seeded(9)).unwrap();
    let value = passphrase.as_str();
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    let symbols = value.chars().filter(|c| c.is_ascii_punctuation()).count();
    assert_eq!(digits, 3);
    assert_eq!(symbols, 3);
    assert!(!value.contains('9'));
}

#[test]
fn test_every_invalid_config_fails_before_drawing() {
    let corpus = WordCorpus::embedded();
    let cases = [
        (
            GenerationConfig::default().with_symbol_probability(-0.5),
            "symbol_probability must be between 0 and 1",
        ),
        (
            GenerationConfig::default().with_wordless_iteration_probability(1.0),
            "wordless_iteration_probability must be less than 1",
        ),
        (
            GenerationConfig::default().with_min_chars(0),
            "min_chars must be a positive integer",
        ),
        (
            GenerationConfig::default().with_max_chars(0),
            "max_chars must be a positive integer",
        ),
        (
            GenerationConfig::default().with_number_of_words(-1),
            "number_of_words must be a positive integer",
        ),
        (
            GenerationConfig::default()
                .with_min_chars(12)
                .with_max_chars(11),
            "max_chars cannot be less than min_chars",
        ),
        (
            GenerationConfig::default().with_max_min_gap_threshold(-4),
            "max_min_gap_threshold cannot be negative",
        ),
        (
            GenerationConfig::default().with_short_gap_word_threshold(0),
            "short_gap_word_threshold must be a positive integer",
        ),
    ];

    for (config, message) in cases {
        let mut rng = ScriptedSource::empty();
        let err = generate_passphrase(&corpus, &config, &mut rng).unwrap_err();
        assert!(matches!(err, PassgenError::InvalidConfiguration { .. }));
        assert_eq!(err.to_string(), format!("Invalid configuration: {}", message));
        assert_eq!(rng.taken(), 0);
    }
}

#[test]
fn test_rule_is_exposed() {
    let corpus = WordCorpus::embedded();
    let config = GenerationConfig::default().with_short_gap_word_threshold(-2);
    let err = PassphraseBuilder::new(&corpus, &config).unwrap_err();
    assert_eq!(err.rule(), Some(ConfigRule::ShortGapThresholdNotPositive));
}

#[test]
fn test_shared_corpus_across_threads() {
    let corpus = WordCorpus::embedded();
    let config = GenerationConfig::default();

    let handles: Vec<_> = (0..4)
        .map(|seed| {
            let corpus = corpus.clone();
            let config = config.clone();
            std::thread::spawn(move || {
                generate_passphrase(&corpus, &config, &mut seeded(seed))
                    .map(|passphrase| passphrase.words())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), 4);
    }
}

#[test]
fn test_config_from_toml_table_shape() {
    let json = r#"{
        "number_of_words": 3,
        "min_chars": 15,
        "max_chars": 40,
        "uppercase_probability": 0.25
    }"#;
    let config: GenerationConfig = serde_json::from_str(json).unwrap();
    let corpus = WordCorpus::embedded();
    let passphrase = generate_passphrase(&corpus, &config, &mut seeded(1)).unwrap();
    assert!((15..=40).contains(&passphrase.len()));
}
