//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use fueros_engine::cards::{CardCatalog, CardDefinition, CardId, CardKind};
use fueros_engine::core::{InstanceId, MatchConfig, PlayerId, PlayerMap};
use fueros_engine::effects::EffectDescriptor;
use fueros_engine::rules::GameState;

pub const GOVERNOR: u32 = 1;
pub const SENATOR: u32 = 2;
pub const LOBBYIST: u32 = 3;
pub const INTERN: u32 = 4;
pub const OFFICE: u32 = 5;
pub const SMEAR: u32 = 6;
pub const SCANDAL: u32 = 7;
pub const FUNDRAISER: u32 = 8;
pub const BRIEFING: u32 = 9;
pub const INSIDER_TIP: u32 = 10;
pub const FILIBUSTER: u32 = 11;
pub const RECRUIT: u32 = 12;
pub const MAGNATE: u32 = 13;
pub const LEAK: u32 = 14;
pub const CLERK: u32 = 15;
pub const BLANK: u32 = 16;

pub fn catalog() -> Arc<CardCatalog> {
    let cards = [
        CardDefinition::new(CardId::new(GOVERNOR), "Governor", CardKind::Politician)
            .with_cost(2)
            .with_stats(2, 4)
            .with_immediate_action(),
        CardDefinition::new(CardId::new(SENATOR), "Senator", CardKind::Politician)
            .with_cost(3)
            .with_stats(1, 3)
            .with_immunity()
            .with_immediate_action(),
        CardDefinition::new(CardId::new(LOBBYIST), "Lobbyist", CardKind::Character)
            .with_cost(1)
            .with_stats(2, 5)
            .with_immediate_action(),
        CardDefinition::new(CardId::new(INTERN), "Intern", CardKind::Character)
            .with_cost(1)
            .with_stats(3, 1)
            .with_immediate_action(),
        CardDefinition::new(CardId::new(OFFICE), "Campaign Office", CardKind::Support)
            .with_cost(1)
            .with_stats(0, 3),
        CardDefinition::new(CardId::new(SMEAR), "Smear", CardKind::Action)
            .with_cost(1)
            .with_effect(EffectDescriptor::DamageTargetPlayer { amount: 3 }),
        CardDefinition::new(CardId::new(SCANDAL), "Scandal", CardKind::Event)
            .with_cost(2)
            .with_effect(EffectDescriptor::DamageBothPlayers { amount: 4 }),
        CardDefinition::new(CardId::new(FUNDRAISER), "Fundraiser", CardKind::Action)
            .with_cost(1)
            .with_effect(EffectDescriptor::HealCasterPlayer { amount: 5 }),
        CardDefinition::new(CardId::new(BRIEFING), "Briefing", CardKind::Action)
            .with_cost(1)
            .with_effect(EffectDescriptor::DrawCards { count: 2 }),
        CardDefinition::new(CardId::new(INSIDER_TIP), "Insider Tip", CardKind::Action)
            .with_cost(2)
            .with_effect(EffectDescriptor::DrawAndReduceCost {
                count: 2,
                reduction: 1,
                duration: 1,
            }),
        CardDefinition::new(CardId::new(FILIBUSTER), "Filibuster", CardKind::Event)
            .with_cost(2)
            .with_effect(EffectDescriptor::BlockEnemyPoliticians { duration: 2 }),
        CardDefinition::new(CardId::new(RECRUIT), "Recruit", CardKind::Character)
            .with_cost(1)
            .with_stats(2, 4),
        CardDefinition::new(CardId::new(MAGNATE), "Magnate", CardKind::Character)
            .with_cost(9)
            .with_stats(5, 5),
        CardDefinition::new(CardId::new(LEAK), "Leak", CardKind::Action)
            .with_cost(0)
            .with_effect(EffectDescriptor::HealTargetPlayer { amount: 3 }),
        CardDefinition::new(CardId::new(CLERK), "Clerk", CardKind::Character)
            .with_cost(0)
            .with_stats(0, 3)
            .with_immediate_action(),
        CardDefinition::new(CardId::new(BLANK), "Press Release", CardKind::Event)
            .with_cost(1),
    ];
    Arc::new(CardCatalog::from_definitions(cards).expect("fixture catalog"))
}

/// Ten power per turn, no turn-start draw.
pub fn config() -> MatchConfig {
    MatchConfig::default()
        .with_starting_power(10)
        .with_max_power(10)
        .with_mandatory_draw(false)
}

fn ids(cards: &[u32]) -> Vec<CardId> {
    cards.iter().copied().map(CardId::new).collect()
}

/// A match where each player's whole deck is dealt as the opening hand.
pub fn open_hands(first: &[u32], second: &[u32]) -> GameState {
    open_hands_with(first, second, config())
}

pub fn open_hands_with(first: &[u32], second: &[u32], config: MatchConfig) -> GameState {
    let hand_size = first.len().max(second.len());
    let max_hand = hand_size.max(config.max_hand_size);
    let config = config
        .with_starting_hand_size(hand_size)
        .with_max_hand_size(max_hand);
    let decks = PlayerMap::new(|p| if p == PlayerId::FIRST { ids(first) } else { ids(second) });
    GameState::new(catalog(), decks, config, 42).expect("fixture match")
}

/// A match with explicit decks and opening hand size.
pub fn with_decks(first: &[u32], second: &[u32], config: MatchConfig) -> GameState {
    let decks = PlayerMap::new(|p| if p == PlayerId::FIRST { ids(first) } else { ids(second) });
    GameState::new(catalog(), decks, config, 42).expect("fixture match")
}

/// First hand instance of definition `card`.
pub fn in_hand(game: &GameState, player: PlayerId, card: u32) -> InstanceId {
    game.hand(player)
        .iter()
        .find(|c| c.card == CardId::new(card))
        .map(|c| c.id)
        .expect("card in hand")
}

/// Play the first copy of `card` from hand and return its instance id.
pub fn play(game: &mut GameState, player: PlayerId, card: u32) -> InstanceId {
    let id = in_hand(game, player, card);
    game.play_card(player, id).expect("play succeeds");
    id
}

/// End the current turn and the opponent's, returning to the same player.
pub fn pass_round(game: &mut GameState) {
    let me = game.active_player();
    game.end_turn(me).expect("end turn");
    game.end_turn(me.opponent()).expect("end opponent turn");
}
