//! Turn flow: handover, power refill, turn-start draws, deck-out and
//! command history.

mod common;

use common::*;
use fueros_engine::core::{Command, GameError, PlayerId};
use fueros_engine::events::GameEvent;
use fueros_engine::rules::{CommandOutcome, GameOverReason, GameResult};
use fueros_engine::zones::ZoneKind;
use fueros_engine::MatchConfig;

const P0: PlayerId = PlayerId::FIRST;
const P1: PlayerId = PlayerId::SECOND;

#[test]
fn test_turns_alternate() {
    let mut game = open_hands(&[CLERK], &[CLERK]);
    assert_eq!(game.active_player(), P0);
    assert_eq!(game.turn_number(), 1);
    game.drain_events();

    let report = game.end_turn(P0).unwrap();

    assert_eq!(report.ended, P0);
    assert_eq!(report.active, P1);
    assert_eq!(report.turn, 2);
    assert_eq!(game.active_player(), P1);
    assert_eq!(
        game.drain_events(),
        vec![GameEvent::TurnEnded { new_active: P1, turn: 2 }]
    );
}

#[test]
fn test_end_turn_out_of_turn() {
    let mut game = open_hands(&[CLERK], &[CLERK]);

    assert_eq!(
        game.end_turn(P1),
        Err(GameError::NotYourTurn { player: P1, active: P0 })
    );
    assert_eq!(game.turn_number(), 1);
}

#[test]
fn test_second_player_can_start() {
    let config = config().with_first_player(P1);
    let mut game = open_hands_with(&[CLERK], &[CLERK], config);

    assert_eq!(game.active_player(), P1);
    assert!(game.end_turn(P1).is_ok());
    assert_eq!(game.active_player(), P0);
}

#[test]
fn test_commands_cannot_name_missing_seat() {
    assert!(PlayerId::try_new(2).is_err());
    assert!(serde_json::from_str::<Command>(r#"{"EndTurn":{"player":2}}"#).is_err());
    assert!(serde_json::from_str::<Command>(r#"{"DrawCard":{"player":255}}"#).is_err());

    let mut game = open_hands(&[CLERK], &[CLERK]);
    let command: Command = serde_json::from_str(r#"{"EndTurn":{"player":1}}"#).unwrap();
    assert_eq!(
        game.apply(command),
        Err(GameError::NotYourTurn { player: P1, active: P0 })
    );
    assert_eq!(game.turn_number(), 1);
}

// =============================================================================
// Power
// =============================================================================

#[test]
fn test_power_refills_each_turn() {
    let config = MatchConfig::default().with_mandatory_draw(false);
    let mut game = open_hands_with(&[CLERK, SMEAR], &[CLERK], config);
    assert_eq!(game.power(P0), 1);
    assert_eq!(game.power(P1), 1);

    play(&mut game, P0, SMEAR);
    assert_eq!(game.power(P0), 0);

    game.end_turn(P0).unwrap();
    assert_eq!(game.power(P1), 2);

    game.end_turn(P1).unwrap();
    assert_eq!(game.power(P0), 1);
}

#[test]
fn test_power_capped() {
    let config = config().with_starting_power(9).with_max_power(10);
    let mut game = open_hands_with(&[CLERK], &[CLERK], config);

    pass_round(&mut game);
    assert_eq!(game.power(P0), 10);
    pass_round(&mut game);
    assert_eq!(game.power(P0), 10);
}

// =============================================================================
// Draws
// =============================================================================

#[test]
fn test_opening_hands_and_turn_start_draw() {
    let config = config().with_mandatory_draw(true).with_starting_hand_size(5);
    let mut game = with_decks(&[CLERK; 10], &[CLERK; 10], config);
    assert_eq!(game.hand(P0).count(), 5);
    assert_eq!(game.hand(P1).count(), 5);

    let report = game.end_turn(P0).unwrap();

    let drawn = report.drawn.unwrap();
    assert!(game.hand(P1).contains(drawn));
    assert_eq!(game.hand(P1).count(), 6);
    assert_eq!(game.deck_size(P1), 4);
    assert_eq!(game.hand(P0).count(), 5);
}

#[test]
fn test_opening_deal_stops_at_empty_deck() {
    let config = config().with_starting_hand_size(5);
    let game = with_decks(&[CLERK; 2], &[CLERK; 8], config);

    assert_eq!(game.hand(P0).count(), 2);
    assert_eq!(game.deck_size(P0), 0);
    assert_eq!(game.hand(P1).count(), 5);
}

#[test]
fn test_deck_out_loses() {
    let config = config().with_mandatory_draw(true).with_starting_hand_size(3);
    let mut game = with_decks(&[CLERK; 5], &[CLERK; 3], config);
    assert_eq!(game.deck_size(P1), 0);

    let report = game.end_turn(P0).unwrap();

    assert_eq!(report.drawn, None);
    let outcome = game.outcome().unwrap();
    assert_eq!(outcome.result, GameResult::Winner(P0));
    assert_eq!(outcome.reason, GameOverReason::DeckOut);
    assert!(game
        .drain_events()
        .contains(&GameEvent::GameOver { winner: Some(P0), reason: GameOverReason::DeckOut }));
    assert_eq!(game.end_turn(P1), Err(GameError::GameAlreadyOver));
}

#[test]
fn test_full_hand_skips_turn_draw() {
    let config = config()
        .with_mandatory_draw(true)
        .with_starting_hand_size(3)
        .with_max_hand_size(3);
    let mut game = with_decks(&[CLERK; 6], &[CLERK; 6], config);

    let report = game.end_turn(P0).unwrap();

    assert_eq!(report.drawn, None);
    assert!(!game.is_game_over());
    assert_eq!(game.hand(P1).count(), 3);
    assert_eq!(game.deck_size(P1), 3);
}

#[test]
fn test_explicit_draw() {
    let config = config().with_starting_hand_size(1).with_max_hand_size(2);
    let mut game = with_decks(&[CLERK; 2], &[CLERK], config);

    let card = game.draw_card(P0).unwrap();
    assert!(game.hand(P0).contains(card));
    assert_eq!(game.draw_card(P0), Err(GameError::HandFull));

    play(&mut game, P0, CLERK);
    assert_eq!(game.draw_card(P0), Err(GameError::DeckEmpty));
    assert!(!game.is_game_over());
}

// =============================================================================
// History
// =============================================================================

#[test]
fn test_history_records_accepted_commands() {
    let mut game = open_hands(&[CLERK, SMEAR], &[CLERK]);
    let clerk = in_hand(&game, P0, CLERK);

    game.play_card(P0, clerk).unwrap();
    let _ = game.attack_player(P0, clerk);
    game.end_turn(P0).unwrap();
    game.end_turn(P1).unwrap();

    let history: Vec<_> = game.history().iter().cloned().collect();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].command, Command::PlayCard { player: P0, card: clerk });
    assert_eq!((history[0].turn, history[0].sequence), (1, 0));
    assert_eq!((history[1].turn, history[1].sequence), (1, 1));
    assert_eq!(history[2].player(), P1);
    assert_eq!((history[2].turn, history[2].sequence), (2, 0));
}

#[test]
fn test_replay_reproduces_match() {
    let config = config().with_mandatory_draw(true).with_starting_hand_size(3);
    let deck = [LOBBYIST, INTERN, SMEAR, GOVERNOR, BRIEFING, CLERK, FUNDRAISER, SCANDAL];
    let mut game = with_decks(&deck, &deck, config.clone());

    for _ in 0..4 {
        let player = game.active_player();
        let hand: Vec<_> = game.hand(player).ids().collect();
        for card in hand {
            let _ = game.play_card(player, card);
        }
        game.end_turn(player).unwrap();
    }

    let mut replay = with_decks(&deck, &deck, config);
    for record in game.history().iter() {
        let outcome = replay.apply(record.command).unwrap();
        if let Command::EndTurn { .. } = record.command {
            assert!(matches!(outcome, CommandOutcome::TurnEnded(_)));
        }
    }

    assert_eq!(replay.snapshot(), game.snapshot());
    for card in game.board(P0).ids().chain(game.discard(P0).ids()) {
        assert_eq!(replay.locate(card), game.locate(card));
    }
    assert!(game.history().len() >= 4);
    assert_eq!(replay.history(), game.history());
}

#[test]
fn test_played_cards_are_located() {
    let mut game = open_hands(&[GOVERNOR, SMEAR], &[CLERK]);
    let governor = play(&mut game, P0, GOVERNOR);
    let smear = play(&mut game, P0, SMEAR);

    assert_eq!(game.locate(governor), Some((P0, ZoneKind::Board)));
    assert_eq!(game.locate(smear), Some((P0, ZoneKind::Discard)));
}
