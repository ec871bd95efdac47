use chance_core::{CHARS_LOWER, CHARS_UPPER, Casing, CharacterPoolOptions, Error, NUMBERS, SYMBOLS};
use chance_generate::{Chance, ChanceConfig};

fn default_pool() -> String {
    [CHARS_LOWER, CHARS_UPPER, SYMBOLS, NUMBERS].concat()
}

#[test]
fn same_seed_replays_the_same_values() {
    let mut left = Chance::seeded(2024);
    let mut right = Chance::seeded(2024);
    for _ in 0..20 {
        assert_eq!(left.sentence(0, 0).unwrap(), right.sentence(0, 0).unwrap());
        assert_eq!(left.randstring(12).unwrap(), right.randstring(12).unwrap());
        assert_eq!(left.boolean(30).unwrap(), right.boolean(30).unwrap());
        assert_eq!(left.integer(-50, 50).unwrap(), right.integer(-50, 50).unwrap());
    }
    assert_eq!(left.seed(), 2024);
}

#[test]
fn entropy_seed_is_reported_and_replayable() {
    let mut first = Chance::default();
    let mut replay = Chance::seeded(first.seed());
    assert_eq!(first.word(0, 3).unwrap(), replay.word(0, 3).unwrap());
}

#[test]
fn default_character_comes_from_full_pool() {
    let pool = default_pool();
    let mut chance = Chance::seeded(1);
    for _ in 0..500 {
        let ch = chance.character().unwrap();
        assert!(pool.contains(ch), "{ch:?}");
    }
}

#[test]
fn character_options_match_reference_cases() {
    let mut chance = Chance::seeded(7);
    let cases: Vec<(CharacterPoolOptions, String)> = vec![
        (CharacterPoolOptions::custom("asdFG"), "asdFG".to_string()),
        (CharacterPoolOptions::custom(SYMBOLS), SYMBOLS.to_string()),
        (
            CharacterPoolOptions::default()
                .with_casing(Casing::Lower)
                .alpha_only(),
            [CHARS_LOWER, NUMBERS].concat(),
        ),
        (
            CharacterPoolOptions::default()
                .with_casing(Casing::Upper)
                .alpha_only(),
            [CHARS_UPPER, NUMBERS].concat(),
        ),
        (CharacterPoolOptions::default().symbol_only(), SYMBOLS.to_string()),
        (
            CharacterPoolOptions::default().with_casing(Casing::Lower),
            [CHARS_LOWER, SYMBOLS, NUMBERS].concat(),
        ),
        (
            CharacterPoolOptions::default().alpha_only(),
            [CHARS_LOWER, CHARS_UPPER, NUMBERS].concat(),
        ),
        (
            CharacterPoolOptions::custom("asdASD123!@#")
                .with_casing(Casing::Upper)
                .alpha_only(),
            "ASD123".to_string(),
        ),
    ];

    for (options, allowed) in cases {
        for _ in 0..100 {
            let ch = chance.character_with(&options).unwrap();
            assert!(allowed.contains(ch), "{ch:?} not in {allowed:?}");
        }
    }
}

#[test]
fn conflicting_pool_options_fail_everywhere() {
    let mut chance = Chance::seeded(7);
    let options = CharacterPoolOptions::default().alpha_only().symbol_only();
    assert!(matches!(chance.character_with(&options), Err(Error::Range(_))));
    assert!(matches!(
        chance.randstring_with(5, &options),
        Err(Error::Range(_))
    ));
}

#[test]
fn configured_pool_drives_randstring() {
    let config = ChanceConfig {
        seed: Some(99),
        pool: CharacterPoolOptions::default()
            .with_casing(Casing::Lower)
            .alpha_only(),
    };
    let allowed = [CHARS_LOWER, NUMBERS].concat();
    let mut chance = Chance::new(config);
    let value = chance.randstring(64).unwrap();
    assert_eq!(value.len(), 64);
    assert!(value.chars().all(|ch| allowed.contains(ch)), "{value}");
}

#[test]
fn text_operations_through_facade() {
    let mut chance = Chance::seeded(13);
    assert!((2..=3).contains(&chance.syllable(0).unwrap().len()));
    assert_eq!(chance.syllable(5).unwrap().len(), 5);
    assert_eq!(chance.word(5, 0).unwrap().len(), 5);
    assert!(chance.word(0, 5).unwrap().len() <= 15);
    assert!(chance.word(5, 4).is_err());
    assert!(chance.sentence(0, 0).unwrap().len() < 500);
    assert!(chance.sentence(30, 4).is_err());
    let bounded = chance.sentence(30, 0).unwrap();
    assert!(bounded.ends_with('.') && bounded.len() > 1);
}

#[test]
fn boolean_default_matches_explicit_default_likelihood() {
    let mut implicit = Chance::seeded(31);
    let mut explicit = Chance::seeded(31);
    for _ in 0..100 {
        assert_eq!(
            implicit.boolean_default().unwrap(),
            explicit.boolean(50).unwrap()
        );
    }
}

#[test]
fn boolean_default_yields_both_values() {
    let mut chance = Chance::seeded(3);
    let trues = (0..400)
        .filter(|_| chance.boolean_default().unwrap())
        .count();
    assert!(trues > 0 && trues < 400);
}
