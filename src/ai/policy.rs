//! Command-choosing policies for computer players.
//!
//! Policies only ever read the match and return a `Command`; the caller
//! submits it through `GameState::apply` like any other input.

use tracing::{trace, warn};

use crate::cards::BoardCard;
use crate::core::{AttackTarget, Command, GameRng, InstanceId, PlayerId};
use crate::rules::{GameOutcome, GameState};

/// Chooses the next command for a player.
pub trait Policy {
    /// Pick a command for `player`, or `None` when `player` cannot act
    /// (not their turn, or the match is over).
    fn choose(&mut self, state: &GameState, player: PlayerId) -> Option<Command>;
}

/// Every command `player` could submit right now that would be accepted.
///
/// Ending the turn is always included while it is `player`'s turn.
#[must_use]
pub fn legal_commands(state: &GameState, player: PlayerId) -> Vec<Command> {
    if state.is_game_over() || state.active_player() != player {
        return Vec::new();
    }

    let mut commands = Vec::new();

    for card in state.hand(player).ids() {
        if state.check_play(player, card).is_ok() {
            commands.push(Command::PlayCard { player, card });
        }
    }

    for attacker in state.board(player).ids() {
        for target in attack_targets(state, player) {
            if state.check_attack(player, attacker, target).is_ok() {
                commands.push(Command::Attack { player, attacker, target });
            }
        }
    }

    let me = state.player(player);
    if !me.deck().is_empty() && !me.hand().is_full() {
        commands.push(Command::DrawCard { player });
    }

    commands.push(Command::EndTurn { player });
    commands
}

fn attack_targets(state: &GameState, player: PlayerId) -> Vec<AttackTarget> {
    std::iter::once(AttackTarget::OpponentPlayer)
        .chain(state.board(player.opponent()).ids().map(AttackTarget::Card))
        .collect()
}

/// Plays the most expensive card it can, then attacks, then passes.
///
/// Target preference for each attack: a forced immune target (the weakest
/// one), otherwise the strongest card the attacker kills outright,
/// otherwise the opponent's face.
#[derive(Clone, Debug, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    fn best_play(state: &GameState, player: PlayerId) -> Option<Command> {
        state
            .hand(player)
            .ids()
            .filter(|&card| state.check_play(player, card).is_ok())
            .filter_map(|card| state.effective_cost(player, card).ok().map(|cost| (card, cost)))
            .fold(None, |best: Option<(InstanceId, i32)>, (card, cost)| match best {
                Some((_, best_cost)) if best_cost >= cost => best,
                _ => Some((card, cost)),
            })
            .map(|(card, _)| Command::PlayCard { player, card })
    }

    fn best_attack(state: &GameState, player: PlayerId) -> Option<Command> {
        let mut attackers: Vec<&BoardCard> = state.board(player).iter().collect();
        attackers.sort_by(|a, b| b.attack.cmp(&a.attack));

        let opponent_board = state.board(player.opponent());
        for attacker in attackers {
            let legal: Vec<AttackTarget> = attack_targets(state, player)
                .into_iter()
                .filter(|&t| state.check_attack(player, attacker.id, t).is_ok())
                .collect();
            if legal.is_empty() {
                continue;
            }

            let legal_cards: Vec<&BoardCard> = legal
                .iter()
                .filter_map(|t| match t {
                    AttackTarget::Card(id) => opponent_board.get(*id),
                    AttackTarget::OpponentPlayer => None,
                })
                .collect();
            let face_open = legal.contains(&AttackTarget::OpponentPlayer);

            let forced = if face_open {
                None
            } else {
                legal_cards
                    .iter()
                    .filter(|c| c.immune)
                    .min_by_key(|c| c.health)
            };
            let kill = legal_cards
                .iter()
                .filter(|c| c.health <= attacker.attack)
                .max_by_key(|c| c.attack);

            let target = match (forced, kill) {
                (Some(card), _) => AttackTarget::Card(card.id),
                (None, Some(card)) => AttackTarget::Card(card.id),
                (None, None) if face_open => AttackTarget::OpponentPlayer,
                (None, None) => legal[0],
            };
            trace!(attacker = %attacker.id, ?target, "Greedy attack");
            return Some(Command::Attack {
                player,
                attacker: attacker.id,
                target,
            });
        }
        None
    }
}

impl Policy for GreedyPolicy {
    fn choose(&mut self, state: &GameState, player: PlayerId) -> Option<Command> {
        if state.is_game_over() || state.active_player() != player {
            return None;
        }
        Self::best_play(state, player)
            .or_else(|| Self::best_attack(state, player))
            .or(Some(Command::EndTurn { player }))
    }
}

/// Picks uniformly among the legal commands. Useful for fuzzing.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn choose(&mut self, state: &GameState, player: PlayerId) -> Option<Command> {
        let commands = legal_commands(state, player);
        if commands.is_empty() {
            return None;
        }
        let index = self.rng.gen_range_usize(0..commands.len());
        Some(commands[index])
    }
}

/// Let `policy` play both seats until the match ends or `max_commands`
/// commands have been submitted.
pub fn play_out<P: Policy>(
    state: &mut GameState,
    policy: &mut P,
    max_commands: usize,
) -> Option<GameOutcome> {
    for _ in 0..max_commands {
        if state.is_game_over() {
            break;
        }
        let player = state.active_player();
        let Some(command) = policy.choose(state, player) else {
            break;
        };
        if let Err(err) = state.apply(command) {
            warn!(?command, %err, "Policy chose a rejected command, passing instead");
            if state.end_turn(player).is_err() {
                break;
            }
        }
    }
    state.outcome()
}
