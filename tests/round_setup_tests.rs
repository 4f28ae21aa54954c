//! Round setup scenario tests.
//!
//! These walk the documented setup scenarios end to end through the
//! public API: validation failures, fallback category, assist mode, and
//! the roster guarantees.

use impostor::{
    builtin, setup_round, GameRng, PlayerId, SetupError, IMPOSTOR_CARD_TEXT, MIN_PLAYERS,
};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Test the happy path: 3 players, "food", assist off.
#[test]
fn test_three_players_food_no_assist() {
    let catalog = builtin();
    let rng = GameRng::new(42);

    let round = setup_round(&names(&["Ana", "Beto", "Caro"]), "food", false, &catalog, &rng)
        .expect("valid input");

    assert_eq!(round.roster().len(), 3);
    assert_eq!(round.roster().iter().filter(|p| p.is_impostor).count(), 1);

    // Both non-impostors show the same word, drawn from the food pool
    let food = catalog.find_category("food").unwrap();
    let civilians: Vec<_> = round.roster().iter().filter(|p| !p.is_impostor).collect();
    assert_eq!(civilians.len(), 2);
    assert_eq!(civilians[0].word, civilians[1].word);
    assert!(food.words.iter().any(|w| w.word == civilians[0].word));

    // Assist off: nobody gets a hint
    assert!(round.roster().iter().all(|p| p.hint.is_none()));
}

/// Test that "Ana" and "ana " collide.
#[test]
fn test_case_and_whitespace_duplicate() {
    let catalog = builtin();
    let rng = GameRng::new(42);

    let result = setup_round(&names(&["Ana", "Beto", "ana "]), "food", false, &catalog, &rng);
    assert!(matches!(result, Err(SetupError::DuplicateName { .. })));
}

/// Test that two players are rejected.
#[test]
fn test_two_players_rejected() {
    let catalog = builtin();
    let rng = GameRng::new(42);

    let result = setup_round(&names(&["Ana", "Beto"]), "food", false, &catalog, &rng);
    assert_eq!(result, Err(SetupError::TooFewPlayers { found: 2 }));
    assert!(2 < MIN_PLAYERS);
}

/// Test that an unknown category id falls back instead of failing.
#[test]
fn test_unknown_category_uses_fallback() {
    let catalog = builtin();
    let rng = GameRng::new(42);

    let round = setup_round(
        &names(&["Ana", "Beto", "Caro"]),
        "nonexistent",
        false,
        &catalog,
        &rng,
    )
    .expect("fallback, not failure");

    assert_eq!(round.category().id, catalog.fallback_category().id);
    assert!(round
        .category()
        .words
        .iter()
        .any(|w| w.word == round.chosen_word().word));
}

/// Test assist mode: only the impostor carries a hint.
#[test]
fn test_assist_gives_only_the_impostor_a_hint() {
    let catalog = builtin();

    for seed in 0..30 {
        let rng = GameRng::new(seed);
        let round = setup_round(
            &names(&["Ana", "Beto", "Caro", "Dani"]),
            "animals",
            true,
            &catalog,
            &rng,
        )
        .unwrap();

        for player in round.roster() {
            if player.is_impostor {
                assert_eq!(player.hint.as_deref(), Some(round.chosen_word().hint.as_str()));
                assert_eq!(player.word, IMPOSTOR_CARD_TEXT);
            } else {
                assert!(player.hint.is_none());
            }
        }
    }
}

/// Test that the shuffle is decoupled from the impostor pick: the impostor
/// lands in every seat across seeds.
#[test]
fn test_impostor_seat_varies() {
    let catalog = builtin();
    let mut seats_seen = std::collections::HashSet::new();

    for seed in 0..100 {
        let rng = GameRng::new(seed);
        let round = setup_round(
            &names(&["Ana", "Beto", "Caro"]),
            "food",
            false,
            &catalog,
            &rng,
        )
        .unwrap();

        let seat = round
            .roster()
            .iter()
            .position(|p| p.is_impostor)
            .unwrap();
        seats_seen.insert(seat);
    }

    assert_eq!(seats_seen.len(), 3);
}

/// Test that a large group is handled like any other: validation never
/// caps the roster, and the guarantees hold at size.
#[test]
fn test_large_roster_is_valid_input() {
    let catalog = builtin();
    let rng = GameRng::new(42);
    let many: Vec<String> = (0..300).map(|i| format!("jugador{}", i)).collect();

    let round = setup_round(&many, "food", false, &catalog, &rng).expect("valid input");

    assert_eq!(round.roster().len(), 300);
    assert_eq!(round.roster().iter().filter(|p| p.is_impostor).count(), 1);
    assert_eq!(round.player(PlayerId::new(299)).unwrap().name, "jugador299");
}

/// Test that every input name survives setup, trimmed, under a stable id.
#[test]
fn test_roster_preserves_names_under_stable_ids() {
    let catalog = builtin();
    let rng = GameRng::new(7);

    let round = setup_round(
        &names(&[" Ana", "Beto ", "", "Caro", "  "]),
        "cities",
        false,
        &catalog,
        &rng,
    )
    .unwrap();

    assert_eq!(round.roster().len(), 3);
    assert_eq!(round.player(PlayerId::new(0)).unwrap().name, "Ana");
    assert_eq!(round.player(PlayerId::new(1)).unwrap().name, "Beto");
    assert_eq!(round.player(PlayerId::new(2)).unwrap().name, "Caro");
}
