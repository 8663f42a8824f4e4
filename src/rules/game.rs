//! The match state machine.
//!
//! `GameState` exclusively owns both players' zones, life and power. The
//! only way to change a match is one of its command methods (or `apply`,
//! which routes a `Command` to them). Each command either completes and
//! appends its events to the log, or is rejected with a `GameError` and
//! leaves the match exactly as it was.
//!
//! ## Turn structure
//!
//! - Turn 1 belongs to `MatchConfig::first_player`, who starts with
//!   `starting_power` and does not draw.
//! - Every later turn start: gain `power_per_turn` (capped), clear cooldown
//!   and acted flags on the new active player's board, then draw one card
//!   if mandatory draws are on. Drawing from an empty deck loses the game.
//! - `end_turn` first ticks the timed effects on the player whose turn is
//!   ending, then hands over.

use std::sync::Arc;

use im::Vector;
use rustc_hash::FxHashSet;
use tracing::{debug, error, info, trace};

use super::combat::{CombatReport, CombatResolver};
use super::outcome::{GameOutcome, GameOverReason, GameResult};
use super::snapshot::MatchSnapshot;
use super::turn::TurnController;
use crate::cards::{BoardCard, CardCatalog, CardId, CardKind, HandCard};
use crate::core::{
    AttackTarget, Command, CommandRecord, GameError, GameRng, InstanceId, MatchConfig, PlayerId,
    PlayerMap,
};
use crate::effects::{EffectContext, EffectEngine};
use crate::events::{EventLog, GameEvent};
use crate::player::PlayerState;
use crate::zones::{Zone, ZoneKind};

/// A card that was played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayOutcome {
    pub card: InstanceId,
    pub kind: CardKind,
    pub cost_paid: i32,
    /// Board for permanents, discard for actions and events.
    pub destination: ZoneKind,
}

/// A completed turn handover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub ended: PlayerId,
    pub active: PlayerId,
    pub turn: u32,
    /// Card drawn at the start of the new turn, if any.
    pub drawn: Option<InstanceId>,
}

/// Result of `GameState::apply`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Played(PlayOutcome),
    Attacked(CombatReport),
    TurnEnded(TurnReport),
    Drew(InstanceId),
}

/// A two-player match.
#[derive(Debug)]
pub struct GameState {
    catalog: Arc<CardCatalog>,
    config: MatchConfig,
    players: PlayerMap<PlayerState>,
    turn: TurnController,
    outcome: Option<GameOutcome>,
    rng: GameRng,
    next_instance: InstanceId,
    history: Vector<CommandRecord>,
    events: EventLog,
}

impl GameState {
    /// Set up a match: build and shuffle both decks, then deal opening
    /// hands.
    ///
    /// Every card id in `decks` must be in the catalog.
    pub fn new(
        catalog: Arc<CardCatalog>,
        decks: PlayerMap<Vec<CardId>>,
        config: MatchConfig,
        seed: u64,
    ) -> Result<Self, GameError> {
        config.validate()?;

        let mut rng = GameRng::new(seed);
        let mut next_instance = InstanceId::new(0);
        let mut players = PlayerMap::new(|player| PlayerState::new(player, &config));

        for (player, list) in decks.iter() {
            let state = &mut players[player];
            for &card in list {
                catalog.require(card)?;
                state.deck.add(HandCard::new(next_instance, card))?;
                next_instance = next_instance.next();
            }
            state.shuffle_deck(&mut rng);
        }

        let mut game = Self {
            catalog,
            turn: TurnController::new(config.first_player),
            config,
            players,
            outcome: None,
            rng,
            next_instance,
            history: Vector::new(),
            events: EventLog::new(),
        };

        for player in PlayerId::all() {
            game.deal_opening_hand(player);
        }

        debug!(
            seed,
            cards = next_instance.raw(),
            first = %game.turn.active(),
            "Match created"
        );
        Ok(game)
    }

    /// Rebuild a match from a snapshot.
    ///
    /// The configuration, the catalog references and every invariant of
    /// `check_invariants` (seat ownership included) are checked before the
    /// snapshot is accepted. Seat numbers themselves are range-checked when
    /// the snapshot is decoded.
    pub fn restore(catalog: Arc<CardCatalog>, snapshot: MatchSnapshot) -> Result<Self, GameError> {
        snapshot.config.validate()?;

        let game = Self {
            catalog,
            config: snapshot.config,
            players: snapshot.players,
            turn: snapshot.turn,
            outcome: snapshot.outcome,
            rng: GameRng::from_state(&snapshot.rng),
            next_instance: snapshot.next_instance,
            history: snapshot.history,
            events: EventLog::new(),
        };

        for (_, state) in game.players.iter() {
            for card in state.deck.iter().chain(state.hand.iter()).chain(state.discard.iter()) {
                game.catalog.require(card.card)?;
            }
            for card in state.board.iter() {
                game.catalog.require(card.card)?;
            }
        }
        game.check_invariants()?;

        debug!(turn = game.turn.turn_number(), "Match restored");
        Ok(game)
    }

    /// Capture the match.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            config: self.config.clone(),
            players: self.players.clone(),
            turn: self.turn.clone(),
            outcome: self.outcome,
            rng: self.rng.state(),
            next_instance: self.next_instance,
            history: self.history.clone(),
        }
    }

    /// Independent copy for lookahead.
    ///
    /// Takes `&mut self` because forking the RNG advances the fork counter.
    /// The copy starts with an empty event log.
    #[must_use]
    pub fn clone_state(&mut self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            config: self.config.clone(),
            players: self.players.clone(),
            turn: self.turn.clone(),
            outcome: self.outcome,
            rng: self.rng.fork(),
            next_instance: self.next_instance,
            history: self.history.clone(),
            events: EventLog::new(),
        }
    }

    // === Commands ===

    /// Play a card from `player`'s hand.
    ///
    /// Politicians, characters and supports go to the board; actions and
    /// events resolve their effect and go to the discard pile.
    pub fn play_card(&mut self, player: PlayerId, card: InstanceId) -> Result<PlayOutcome, GameError> {
        self.transact(Command::PlayCard { player, card }, |game| {
            game.play_card_inner(player, card)
        })
    }

    /// Attack a card or the opponent with one of `player`'s board cards.
    pub fn attack(
        &mut self,
        player: PlayerId,
        attacker: InstanceId,
        target: AttackTarget,
    ) -> Result<CombatReport, GameError> {
        self.transact(Command::Attack { player, attacker, target }, |game| {
            game.attack_inner(player, attacker, target)
        })
    }

    /// Attack the opponent's life total directly.
    pub fn attack_player(&mut self, player: PlayerId, attacker: InstanceId) -> Result<CombatReport, GameError> {
        self.attack(player, attacker, AttackTarget::OpponentPlayer)
    }

    /// Hand the turn to the opponent.
    pub fn end_turn(&mut self, player: PlayerId) -> Result<TurnReport, GameError> {
        self.transact(Command::EndTurn { player }, |game| game.end_turn_inner(player))
    }

    /// Draw one card outside of any effect. An empty deck is a plain
    /// rejection here, not a loss.
    pub fn draw_card(&mut self, player: PlayerId) -> Result<InstanceId, GameError> {
        self.transact(Command::DrawCard { player }, |game| game.draw_card_inner(player))
    }

    /// Execute a command value.
    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome, GameError> {
        match command {
            Command::PlayCard { player, card } => self.play_card(player, card).map(CommandOutcome::Played),
            Command::Attack { player, attacker, target } => {
                self.attack(player, attacker, target).map(CommandOutcome::Attacked)
            }
            Command::EndTurn { player } => self.end_turn(player).map(CommandOutcome::TurnEnded),
            Command::DrawCard { player } => self.draw_card(player).map(CommandOutcome::Drew),
        }
    }

    // === Validation ===

    /// Check whether `player` could play `card` right now, without
    /// changing anything.
    pub fn check_play(&self, player: PlayerId, card: InstanceId) -> Result<(), GameError> {
        self.check_command(player)?;

        let state = &self.players[player];
        let hand_card = state.hand.get(card).ok_or(GameError::CardNotFound(card))?;
        let definition = self.catalog.require(hand_card.card)?;

        if definition.kind.occupies_slot() && state.board.is_full() {
            return Err(GameError::ZoneFull);
        }
        let needed = state.effective_cost(hand_card, definition);
        if needed > state.power {
            return Err(GameError::InsufficientPower {
                needed,
                available: state.power,
            });
        }
        Ok(())
    }

    /// Check whether an attack would be accepted right now, without
    /// changing anything.
    pub fn check_attack(
        &self,
        player: PlayerId,
        attacker: InstanceId,
        target: AttackTarget,
    ) -> Result<(), GameError> {
        self.check_command(player)?;

        let opponent = &self.players[player.opponent()];
        let card = self.players[player]
            .board
            .get(attacker)
            .ok_or(GameError::CardNotFound(attacker))?;
        if !CombatResolver::can_initiate_attack(card) {
            return Err(GameError::CardNotEligibleToAttack);
        }

        let target_card = match target {
            AttackTarget::Card(id) => Some(opponent.board.get(id).ok_or(GameError::CardNotFound(id))?),
            AttackTarget::OpponentPlayer => None,
        };
        CombatResolver::check_target(card, target_card, opponent)
    }

    fn check_command(&self, player: PlayerId) -> Result<(), GameError> {
        if self.outcome.is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        self.turn.require_active(player)
    }

    // === Queries ===

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Zone<HandCard> {
        &self.players[player].hand
    }

    #[must_use]
    pub fn board(&self, player: PlayerId) -> &Zone<BoardCard> {
        &self.players[player].board
    }

    #[must_use]
    pub fn discard(&self, player: PlayerId) -> &Zone<HandCard> {
        &self.players[player].discard
    }

    #[must_use]
    pub fn deck_size(&self, player: PlayerId) -> usize {
        self.players[player].deck.count()
    }

    #[must_use]
    pub fn life(&self, player: PlayerId) -> i32 {
        self.players[player].life
    }

    #[must_use]
    pub fn power(&self, player: PlayerId) -> i32 {
        self.players[player].power
    }

    /// Current cost of a card in `player`'s hand, after modifiers.
    pub fn effective_cost(&self, player: PlayerId, card: InstanceId) -> Result<i32, GameError> {
        let state = &self.players[player];
        let hand_card = state.hand.get(card).ok_or(GameError::CardNotFound(card))?;
        let definition = self.catalog.require(hand_card.card)?;
        Ok(state.effective_cost(hand_card, definition))
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.turn.active()
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn.turn_number()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Accepted commands, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<CommandRecord> {
        &self.history
    }

    /// Owner and zone of an instance.
    #[must_use]
    pub fn locate(&self, card: InstanceId) -> Option<(PlayerId, ZoneKind)> {
        self.players.iter().find_map(|(player, state)| {
            let zone = if state.deck.contains(card) {
                ZoneKind::Deck
            } else if state.hand.contains(card) {
                ZoneKind::Hand
            } else if state.board.contains(card) {
                ZoneKind::Board
            } else if state.discard.contains(card) {
                ZoneKind::Discard
            } else {
                return None;
            };
            Some((player, zone))
        })
    }

    /// Take every event produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Verify the structural invariants that must hold between commands:
    /// each seat holds its own player, every instance sits in exactly one
    /// zone, power is non-negative, hand and board are within their limits
    /// and no dying card is left on a board.
    pub fn check_invariants(&self) -> Result<(), GameError> {
        let mut seen = FxHashSet::default();
        let mut total = 0;

        for (player, state) in self.players.iter() {
            if state.id() != player {
                return Err(GameError::InvariantViolation(format!(
                    "{} sits in the seat of {}",
                    state.id(),
                    player
                )));
            }
            total += state.card_count();
            for id in state.instance_ids() {
                if !seen.insert(id) {
                    return Err(GameError::InvariantViolation(format!("{} is in two zones", id)));
                }
            }
            if state.power < 0 {
                return Err(GameError::InvariantViolation(format!("{} has negative power", player)));
            }
            if state.hand.count() > self.config.max_hand_size {
                return Err(GameError::InvariantViolation(format!("{} hand over limit", player)));
            }
            if state.board.slot_count() > self.config.board_slots {
                return Err(GameError::InvariantViolation(format!("{} board over limit", player)));
            }
            if let Some(card) = state.board.iter().find(|c| c.is_dying) {
                return Err(GameError::InvariantViolation(format!(
                    "{} left dying on the board",
                    card.id
                )));
            }
        }

        if total != self.next_instance.raw() as usize {
            return Err(GameError::InvariantViolation(format!(
                "{} instances tracked, {} allocated",
                total,
                self.next_instance.raw()
            )));
        }
        Ok(())
    }

    // === Internals ===

    /// Run a command body. On failure every player, the turn marker and
    /// the event log are put back as they were.
    fn transact<T>(
        &mut self,
        command: Command,
        body: impl FnOnce(&mut Self) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        self.check_command(command.player())?;

        let players = self.players.clone();
        let turn = self.turn.clone();
        let event_mark = self.events.len();
        let turn_number = self.turn.turn_number();
        let sequence = self.turn.next_sequence();

        match body(self) {
            Ok(value) => {
                self.history
                    .push_back(CommandRecord::new(command, turn_number, sequence));
                debug!(
                    command = command.name(),
                    player = %command.player(),
                    turn = turn_number,
                    sequence,
                    events = self.events.len() - event_mark,
                    "Command accepted"
                );
                Ok(value)
            }
            Err(err) => {
                self.players = players;
                self.turn = turn;
                self.outcome = None;
                self.events.truncate(event_mark);
                if err.is_rule_rejection() {
                    trace!(command = command.name(), player = %command.player(), %err, "Command rejected");
                } else {
                    error!(command = ?command, %err, "Command aborted");
                }
                Err(err)
            }
        }
    }

    fn play_card_inner(&mut self, player: PlayerId, card: InstanceId) -> Result<PlayOutcome, GameError> {
        self.check_play(player, card)?;

        let catalog = Arc::clone(&self.catalog);
        let turn = self.turn.turn_number();
        let (caster, opponent) = self.players.pair_mut(player);

        let hand_card = caster.hand.remove(card)?;
        let definition = catalog.require(hand_card.card)?;
        let cost_paid = caster.pay(&hand_card, definition)?;

        let destination = if definition.kind.is_permanent() {
            caster.board.add(BoardCard::enter(hand_card, definition))?;
            ZoneKind::Board
        } else {
            let mut ctx = EffectContext {
                caster: &mut *caster,
                target: opponent,
                turn,
                events: &mut self.events,
            };
            EffectEngine::resolve(&definition.effect, &mut ctx)?;
            caster.discard.add(hand_card)?;
            ZoneKind::Discard
        };

        self.events.push(GameEvent::CardMoved {
            card,
            owner: player,
            from: ZoneKind::Hand,
            to: destination,
        });
        trace!(%card, name = %definition.name, cost_paid, to = %destination, "Card played");

        self.check_life_totals();
        Ok(PlayOutcome {
            card,
            kind: definition.kind,
            cost_paid,
            destination,
        })
    }

    fn attack_inner(
        &mut self,
        player: PlayerId,
        attacker: InstanceId,
        target: AttackTarget,
    ) -> Result<CombatReport, GameError> {
        self.check_attack(player, attacker, target)?;

        let (mine, theirs) = self.players.pair_mut(player);
        let attacking = mine
            .board
            .get_mut(attacker)
            .ok_or(GameError::CardNotFound(attacker))?;

        let report = match target {
            AttackTarget::Card(id) => {
                let defending = theirs.board.get_mut(id).ok_or(GameError::CardNotFound(id))?;
                CombatResolver::resolve_card_vs_card(
                    attacking,
                    defending,
                    (player, player.opponent()),
                    &mut self.events,
                )?
            }
            AttackTarget::OpponentPlayer => {
                CombatResolver::resolve_card_vs_player(attacking, theirs, &mut self.events)?
            }
        };

        self.remove_dying()?;
        self.check_life_totals();
        Ok(report)
    }

    fn end_turn_inner(&mut self, player: PlayerId) -> Result<TurnReport, GameError> {
        let ending = self.turn.turn_number();
        EffectEngine::tick_durations(&mut self.players[player], ending, &mut self.events);

        let active = self.turn.advance();
        let turn = self.turn.turn_number();
        self.events.push(GameEvent::TurnEnded {
            new_active: active,
            turn,
        });

        let drawn = self.begin_turn(active)?;
        Ok(TurnReport {
            ended: player,
            active,
            turn,
            drawn,
        })
    }

    fn draw_card_inner(&mut self, player: PlayerId) -> Result<InstanceId, GameError> {
        let card = self.players[player].draw()?;
        self.events.push(GameEvent::CardMoved {
            card: card.id,
            owner: player,
            from: ZoneKind::Deck,
            to: ZoneKind::Hand,
        });
        Ok(card.id)
    }

    /// Turn-start upkeep for `player`. Returns the card drawn, if any.
    fn begin_turn(&mut self, player: PlayerId) -> Result<Option<InstanceId>, GameError> {
        let state = &mut self.players[player];
        state.gain_power(self.config.power_per_turn);
        CombatResolver::reset_for_new_turn(&mut state.board);

        if !self.config.mandatory_draw {
            return Ok(None);
        }

        match state.draw() {
            Ok(card) => {
                self.events.push(GameEvent::CardMoved {
                    card: card.id,
                    owner: player,
                    from: ZoneKind::Deck,
                    to: ZoneKind::Hand,
                });
                Ok(Some(card.id))
            }
            Err(GameError::HandFull) => {
                debug!(%player, "Hand full, turn draw skipped");
                Ok(None)
            }
            Err(GameError::DeckEmpty) => {
                self.finish(GameResult::Winner(player.opponent()), GameOverReason::DeckOut);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn deal_opening_hand(&mut self, player: PlayerId) {
        for _ in 0..self.config.starting_hand_size {
            match self.players[player].draw() {
                Ok(card) => self.events.push(GameEvent::CardMoved {
                    card: card.id,
                    owner: player,
                    from: ZoneKind::Deck,
                    to: ZoneKind::Hand,
                }),
                Err(_) => break,
            }
        }
    }

    /// Move every dying board card to its owner's discard pile.
    fn remove_dying(&mut self) -> Result<(), GameError> {
        for (owner, state) in self.players.iter_mut() {
            for card in state.board.take_where(|c| c.is_dying) {
                let id = card.id;
                state.discard.add(card.into_hand())?;
                self.events.push(GameEvent::CardMoved {
                    card: id,
                    owner,
                    from: ZoneKind::Board,
                    to: ZoneKind::Discard,
                });
            }
        }
        Ok(())
    }

    fn check_life_totals(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        let first_down = self.players[PlayerId::FIRST].is_defeated();
        let second_down = self.players[PlayerId::SECOND].is_defeated();
        let result = match (first_down, second_down) {
            (true, true) => GameResult::Draw,
            (true, false) => GameResult::Winner(PlayerId::SECOND),
            (false, true) => GameResult::Winner(PlayerId::FIRST),
            (false, false) => return,
        };
        self.finish(result, GameOverReason::LifeDepleted);
    }

    fn finish(&mut self, result: GameResult, reason: GameOverReason) {
        let outcome = GameOutcome { result, reason };
        self.outcome = Some(outcome);
        self.events.push(GameEvent::GameOver {
            winner: outcome.winner(),
            reason,
        });
        info!(?result, ?reason, turn = self.turn.turn_number(), "Match over");
    }
}
