//! Tests for the guessing game state machine.

use strictly_guess::{ActionLabel, GameConfiguration, GuessGame, Phase, StatusText};

fn classic() -> GameConfiguration {
    GameConfiguration::new(7, 3, 1, 100, 100).expect("valid config")
}

fn game_with_secret(secret: i64) -> GuessGame {
    GuessGame::with_secret(classic(), secret).expect("secret in bounds")
}

#[test]
fn test_too_high_then_win() {
    let mut game = game_with_secret(42);

    let instruction = game.submit_guess("50");
    assert_eq!(instruction.status, StatusText::TooHigh);
    assert_eq!(instruction.attempts_remaining, 6);

    let instruction = game.submit_guess("42");
    assert_eq!(instruction.status, StatusText::Win);
    assert_eq!(instruction.attempts_remaining, 5);
    assert_eq!(instruction.history, vec![50, 42]);
    assert_eq!(instruction.history_text, "50, 42");
    assert_eq!(instruction.action_label, ActionLabel::PlayAgain);
    assert_eq!(game.phase(), Phase::Won);
}

#[test]
fn test_not_a_number_leaves_state_unchanged() {
    let mut game = game_with_secret(42);

    let instruction = game.submit_guess("abc");
    assert_eq!(instruction.status, StatusText::InvalidNumber);
    assert_eq!(instruction.attempts_remaining, 7);
    assert!(instruction.history.is_empty());
    assert_eq!(game.phase(), Phase::Playing);

    let instruction = game.submit_guess("");
    assert_eq!(instruction.status, StatusText::InvalidNumber);
    assert_eq!(game.state().remaining_attempts(), 7);
}

#[test]
fn test_single_wrong_attempt_loses() {
    let config = GameConfiguration::new(1, 0, 1, 100, 100).unwrap();
    let mut game = GuessGame::with_secret(config, 7).unwrap();

    let instruction = game.submit_guess("5");
    assert_eq!(instruction.status, StatusText::GameOver);
    assert_eq!(instruction.attempts_remaining, 0);
    assert_eq!(instruction.action_label, ActionLabel::PlayAgain);
    assert_eq!(game.phase(), Phase::Lost);
}

#[test]
fn test_duplicate_guess_costs_nothing() {
    let mut game = game_with_secret(42);

    game.submit_guess("50");
    let instruction = game.submit_guess("50");
    assert_eq!(instruction.status, StatusText::DuplicateGuess);
    assert_eq!(instruction.attempts_remaining, 6);
    assert_eq!(instruction.history, vec![50]);
    assert_eq!(game.phase(), Phase::Playing);
}

#[test]
fn test_out_of_range_guesses() {
    let mut game = game_with_secret(42);

    assert_eq!(game.submit_guess("101").status, StatusText::NumberTooHigh);
    assert_eq!(game.submit_guess("0").status, StatusText::NumberTooLow);
    assert_eq!(game.submit_guess("-5").status, StatusText::NumberTooLow);
    assert_eq!(
        game.submit_guess("123456789012345678901234567890").status,
        StatusText::NumberTooHigh
    );
    assert_eq!(game.state().remaining_attempts(), 7);
    assert!(game.state().history().is_empty());
}

#[test]
fn test_too_low() {
    let mut game = game_with_secret(42);
    let instruction = game.submit_guess(" 10 ");
    assert_eq!(instruction.status, StatusText::TooLow);
    assert_eq!(instruction.history, vec![10]);
}

#[test]
fn test_every_valid_guess_spends_one_attempt() {
    let mut game = game_with_secret(100);
    for (i, guess) in ["10", "20", "30", "40", "50", "60"].iter().enumerate() {
        let before = game.state().remaining_attempts();
        game.submit_guess(guess);
        assert_eq!(game.state().remaining_attempts(), before - 1);
        assert_eq!(game.state().history().len(), i + 1);
        let value: i64 = guess.parse().unwrap();
        assert_eq!(
            game.state().history().iter().filter(|v| **v == value).count(),
            1
        );
    }
}

#[test]
fn test_exhausting_attempts_loses() {
    let mut game = game_with_secret(99);
    let mut last = None;
    for guess in 1..=7 {
        last = Some(game.submit_guess(&guess.to_string()));
    }
    let last = last.unwrap();
    assert_eq!(last.status, StatusText::GameOver);
    assert_eq!(last.attempts_remaining, 0);
    assert_eq!(last.history.len(), 7);
    assert_eq!(game.phase(), Phase::Lost);
}

#[test]
fn test_correct_guess_on_last_attempt_wins() {
    let mut game = game_with_secret(7);
    for guess in 1..=6 {
        game.submit_guess(&guess.to_string());
    }
    let instruction = game.submit_guess("7");
    assert_eq!(instruction.status, StatusText::Win);
    assert_eq!(instruction.attempts_remaining, 0);
    assert_eq!(game.phase(), Phase::Won);
}

#[test]
fn test_terminal_phase_ignores_guesses() {
    let mut game = game_with_secret(42);
    game.submit_guess("42");
    let won = game.current();

    for raw in ["1", "42", "abc", "500"] {
        let instruction = game.submit_guess(raw);
        assert_eq!(instruction, won);
    }
    assert_eq!(game.phase(), Phase::Won);
    assert_eq!(game.state().history(), &[42]);
    assert_eq!(game.state().remaining_attempts(), 6);
}

#[test]
fn test_lost_phase_ignores_guesses() {
    let config = GameConfiguration::new(1, 0, 1, 100, 100).unwrap();
    let mut game = GuessGame::with_secret(config, 7).unwrap();
    game.submit_guess("5");

    let instruction = game.submit_guess("7");
    assert_eq!(instruction.status, StatusText::GameOver);
    assert_eq!(game.phase(), Phase::Lost);
    assert_eq!(game.state().history(), &[5]);
}

#[test]
fn test_low_attempts_warning_tracks_threshold() {
    let mut game = game_with_secret(100);
    let expected = [false, false, false, true, true, true];
    for (guess, warn) in (1..=6).zip(expected) {
        let instruction = game.submit_guess(&guess.to_string());
        assert_eq!(
            instruction.low_attempts_warning, warn,
            "after guess {} with {} left",
            guess, instruction.attempts_remaining
        );
        assert_eq!(
            instruction.low_attempts_warning,
            game.phase() == Phase::Playing && instruction.attempts_remaining <= 3
        );
    }

    // Terminal phases never warn.
    let instruction = game.submit_guess("7");
    assert_eq!(game.phase(), Phase::Lost);
    assert!(!instruction.low_attempts_warning);
}

#[test]
fn test_threshold_equal_to_attempts_warns_from_start() {
    let config = GameConfiguration::new(3, 3, 1, 100, 100).unwrap();
    let mut game = GuessGame::with_secret(config, 50).unwrap();
    assert!(game.current().low_attempts_warning);

    game.submit_guess("10");
    let instruction = game.reset();
    assert_eq!(instruction.status, StatusText::Initial);
    assert_eq!(instruction.attempts_remaining, 3);
    assert!(instruction.low_attempts_warning);
}

#[test]
fn test_warning_cleared_on_win() {
    let mut game = game_with_secret(5);
    for guess in 1..=4 {
        game.submit_guess(&guess.to_string());
    }
    assert!(game.current().low_attempts_warning);
    let instruction = game.submit_guess("5");
    assert_eq!(instruction.status, StatusText::Win);
    assert!(!instruction.low_attempts_warning);
}

#[test]
fn test_reset_restores_initial_state() {
    let mut game = game_with_secret(42);
    game.submit_guess("50");
    game.submit_guess("42");

    let instruction = game.reset();
    assert_eq!(instruction.status, StatusText::Initial);
    assert_eq!(instruction.attempts_remaining, 7);
    assert!(instruction.history.is_empty());
    assert!(instruction.history_text.is_empty());
    assert!(!instruction.low_attempts_warning);
    assert_eq!(instruction.action_label, ActionLabel::Guess);
    assert_eq!(instruction.highlight_color, None);
    assert_eq!(game.phase(), Phase::Playing);
    assert!(!game.state().is_color_cycling());
}

#[test]
fn test_reset_draws_secret_in_bounds() {
    let config = GameConfiguration::new(3, 1, -5, 5, 100).unwrap();
    let mut game = GuessGame::seeded(config.clone(), 11).unwrap();
    for _ in 0..200 {
        game.reset();
        assert!(config.contains(game.state().secret()));
    }
}

#[test]
fn test_reset_while_playing() {
    let mut game = game_with_secret(42);
    game.submit_guess("10");
    game.submit_guess("20");
    let instruction = game.reset();
    assert_eq!(instruction.attempts_remaining, 7);
    assert_eq!(game.phase(), Phase::Playing);
}

#[test]
fn test_seeded_games_repeat() {
    let a = GuessGame::seeded(classic(), 1234).unwrap();
    let b = GuessGame::seeded(classic(), 1234).unwrap();
    assert_eq!(a.state().secret(), b.state().secret());
}

#[test]
fn test_invalid_config_aborts_construction() {
    let config: GameConfiguration =
        serde_json::from_str(r#"{"max_attempts": 0}"#).expect("deserializes");
    assert!(GuessGame::new(config).is_err());
}
