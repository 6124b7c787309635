use std::collections::{BTreeMap, BTreeSet};

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, trace};

use crate::betting::BettingRound;
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::{HandResult, HandSnapshot, Phase, SeatView, ShowdownEntry, Street};
use crate::hand::{evaluate, Hand};
use crate::logger::{ActionRecord, BlindRecord, HandRecord};
use crate::player::{ActionKind, PlayerAction, Seat, SeatStatus};
use crate::pot::{build_pots, distribute, record_contribution, settle_street, Pots};
use crate::rules::{legal_actions, validate_action, ActionContext, ValidatedAction};
use crate::table::{Table, TableConfig};

const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// Single-table no-limit hold'em engine for 2 to 9 seats.
///
/// Drives a hand from blinds to payout. Callers feed actions for the seat
/// reported by [`Engine::current_actor`]; streets, side pots and showdown
/// follow automatically.
///
/// # Examples
///
/// ```
/// use holdem_engine::engine::Engine;
/// use holdem_engine::game::Phase;
/// use holdem_engine::player::PlayerAction;
/// use holdem_engine::table::TableConfig;
///
/// let config = TableConfig { seats: 3, seed: Some(7), ..TableConfig::default() };
/// let mut engine = Engine::with_players(config, 3).unwrap();
/// engine.start_hand().unwrap();
///
/// // everyone folds to the big blind
/// while let Some(seat) = engine.current_actor() {
///     engine.apply_action(seat, PlayerAction::Fold).unwrap();
/// }
/// assert_eq!(engine.phase(), Phase::Finished);
/// assert!(engine.last_result().unwrap().uncontested);
/// ```
#[derive(Debug)]
pub struct Engine {
    table: Table,
    deck: Deck,
    /// Drives the first button draw; the deck keeps its own stream
    rng: ChaCha20Rng,
    seed: u64,
    phase: Phase,
    round: Option<BettingRound>,
    hand_no: u64,
    /// Sum of all stacks when the current hand started
    chips_in_play: u32,
    record: Option<HandRecord>,
    last_result: Option<HandResult>,
}

impl Engine {
    pub fn new(config: TableConfig) -> Result<Self, GameError> {
        let seed = config.seed.unwrap_or(DEFAULT_SEED);
        let table = Table::new(config)?;
        Ok(Self {
            table,
            deck: Deck::new_with_seed(seed),
            rng: ChaCha20Rng::seed_from_u64(seed.wrapping_add(1)),
            seed,
            phase: Phase::Waiting,
            round: None,
            hand_no: 0,
            chips_in_play: 0,
            record: None,
            last_result: None,
        })
    }

    /// Seats `players` players from seat 0 upward, each with the starting stack.
    pub fn with_players(config: TableConfig, players: usize) -> Result<Self, GameError> {
        let mut engine = Self::new(config)?;
        for id in 0..players {
            engine.sit(id, format!("Player {}", id + 1))?;
        }
        Ok(engine)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn hand_no(&self) -> u64 {
        self.hand_no
    }
    pub fn table(&self) -> &Table {
        &self.table
    }
    pub fn board(&self) -> &[Card] {
        self.table.board()
    }
    pub fn button(&self) -> Option<usize> {
        self.table.button()
    }
    pub fn last_result(&self) -> Option<&HandResult> {
        self.last_result.as_ref()
    }
    /// History of the current or most recent hand.
    pub fn hand_record(&self) -> Option<&HandRecord> {
        self.record.as_ref()
    }

    /// Street being bet, while a hand is in progress.
    pub fn street(&self) -> Option<Street> {
        self.live_round().map(BettingRound::street)
    }

    pub fn current_actor(&self) -> Option<usize> {
        self.live_round().and_then(BettingRound::current_actor)
    }

    fn live_round(&self) -> Option<&BettingRound> {
        if self.phase == Phase::Betting {
            self.round.as_ref()
        } else {
            None
        }
    }

    fn ensure_between_hands(&self) -> Result<(), GameError> {
        if self.phase == Phase::Betting {
            Err(GameError::HandInProgress)
        } else {
            Ok(())
        }
    }

    pub fn sit(&mut self, id: usize, name: impl Into<String>) -> Result<(), GameError> {
        let stack = self.table.config().starting_stack;
        self.sit_with_stack(id, name, stack)
    }

    pub fn sit_with_stack(
        &mut self,
        id: usize,
        name: impl Into<String>,
        stack: u32,
    ) -> Result<(), GameError> {
        self.ensure_between_hands()?;
        self.table.sit(id, name.into(), stack)?;
        debug!(seat = id, stack, "player seated");
        Ok(())
    }

    pub fn leave(&mut self, id: usize) -> Result<Seat, GameError> {
        self.ensure_between_hands()?;
        let seat = self.table.leave(id)?;
        debug!(seat = id, stack = seat.stack(), "player left");
        Ok(seat)
    }

    pub fn sit_out(&mut self, id: usize) -> Result<(), GameError> {
        self.set_sitting_out(id, true)
    }

    pub fn sit_in(&mut self, id: usize) -> Result<(), GameError> {
        self.set_sitting_out(id, false)
    }

    fn set_sitting_out(&mut self, id: usize, sitting_out: bool) -> Result<(), GameError> {
        self.ensure_between_hands()?;
        self.table
            .seat_mut(id)
            .ok_or(GameError::InvalidSeat(id))?
            .set_sitting_out(sitting_out);
        Ok(())
    }

    /// Starts a new hand: moves the button, shuffles, deals two hole cards to
    /// every eligible seat and posts the blinds.
    ///
    /// # Errors
    ///
    /// - [`GameError::HandInProgress`] - the previous hand is still being bet
    /// - [`GameError::InsufficientPlayers`] - fewer than two seats can be dealt in
    pub fn start_hand(&mut self) -> Result<(), GameError> {
        self.ensure_between_hands()?;
        let available = self.table.eligible_count();
        if available < 2 {
            return Err(GameError::InsufficientPlayers { available });
        }

        for seat in self.table.seats_mut() {
            seat.reset_for_hand();
        }
        self.table.clear_board();
        let button = self
            .table
            .rotate_button(&mut self.rng)
            .ok_or(GameError::InsufficientPlayers { available })?;
        self.deck.shuffle();
        self.hand_no += 1;
        self.last_result = None;
        self.chips_in_play = self.table.seats().map(Seat::stack).sum();
        let stacks = self.table.seats().map(|s| (s.id(), s.stack())).collect();

        // clockwise from the left of the button; the button is dealt last
        let dealt: Vec<usize> = self
            .table
            .clockwise_after(button)
            .filter(|&id| {
                self.table
                    .seat(id)
                    .is_some_and(|s| s.status() == SeatStatus::Active)
            })
            .collect();
        let first = self.deck.deal(dealt.len())?;
        let second = self.deck.deal(dealt.len())?;
        for ((&id, a), b) in dealt.iter().zip(first).zip(second) {
            if let Some(seat) = self.table.seat_mut(id) {
                seat.deal([a, b]);
            }
        }

        let config = self.table.config();
        let (small_blind, big_blind) = (config.small_blind, config.big_blind);
        let sb_seat = dealt[0];
        let bb_seat = dealt[1 % dealt.len()];
        let blinds = vec![
            self.post_blind(sb_seat, small_blind)?,
            self.post_blind(bb_seat, big_blind)?,
        ];

        let to_act = self.action_queue(self.table.clockwise_after(bb_seat));
        self.round = Some(BettingRound::new(
            Street::Preflop,
            big_blind,
            big_blind,
            Some(bb_seat),
            to_act,
        ));
        self.record = Some(HandRecord {
            hand_id: None,
            hand_no: self.hand_no,
            seed: self.seed,
            button,
            small_blind,
            big_blind,
            blinds,
            stacks,
            actions: Vec::new(),
            board: Vec::new(),
            payouts: Vec::new(),
            showdown: Vec::new(),
            ts: None,
        });
        self.phase = Phase::Betting;
        info!(
            hand_no = self.hand_no,
            button,
            sb_seat,
            bb_seat,
            players = dealt.len(),
            "hand started"
        );
        self.advance()
    }

    /// Posts up to `amount`; a short stack goes all-in for what it has.
    fn post_blind(&mut self, id: usize, amount: u32) -> Result<BlindRecord, GameError> {
        let seat = self.table.seat_mut(id).ok_or(GameError::InvalidSeat(id))?;
        let posted = amount.min(seat.stack());
        record_contribution(seat, posted)?;
        trace!(seat = id, posted, "blind posted");
        Ok(BlindRecord {
            seat: id,
            amount: posted,
        })
    }

    /// Seats of `order` that still have to act, in turn order. Once at most
    /// one seat at the table can act, that seat only acts while it owes
    /// chips to an all-in seat.
    fn action_queue(&self, order: impl Iterator<Item = usize>) -> Vec<usize> {
        let actors: Vec<usize> = order
            .filter(|&id| self.table.seat(id).is_some_and(Seat::can_act))
            .collect();
        if self.table.seats().filter(|s| s.can_act()).count() >= 2 {
            return actors;
        }
        let top = self
            .table
            .seats()
            .filter(|s| s.is_in_hand())
            .map(Seat::round_contribution)
            .max()
            .unwrap_or(0);
        actors
            .into_iter()
            .filter(|&id| {
                self.table
                    .seat(id)
                    .is_some_and(|s| s.round_contribution() < top)
            })
            .collect()
    }

    /// Other seats able to act, clockwise from `aggressor`.
    fn responders(&self, aggressor: usize) -> Vec<usize> {
        self.table
            .clockwise_after(aggressor)
            .filter(|&id| id != aggressor && self.table.seat(id).is_some_and(Seat::can_act))
            .collect()
    }

    /// Applies an action for `seat`. Nothing changes when an error is returned.
    ///
    /// # Errors
    ///
    /// - [`GameError::NoHandInProgress`] - no hand is being bet
    /// - [`GameError::NotYourTurn`] - `seat` is not the current actor
    /// - [`GameError::IllegalAction`] / [`GameError::InsufficientStack`] - see
    ///   [`crate::rules::validate_action`]
    pub fn apply_action(&mut self, seat: usize, action: PlayerAction) -> Result<(), GameError> {
        let round = self.live_round().ok_or(GameError::NoHandInProgress)?;
        let street = round.street();
        let expected = round.current_actor().ok_or(GameError::NoHandInProgress)?;
        if seat != expected {
            return Err(GameError::NotYourTurn {
                expected,
                actual: seat,
            });
        }
        let ctx = self
            .action_context(seat)
            .ok_or(GameError::InvalidSeat(seat))?;
        let validated = validate_action(&ctx, action).inspect_err(|e| {
            debug!(seat, ?action, error = %e, "action rejected");
        })?;

        let chips = validated.chips(ctx.round_contribution);
        let actor = self
            .table
            .seat_mut(seat)
            .ok_or(GameError::InvalidSeat(seat))?;
        if validated == ValidatedAction::Fold {
            actor.fold();
        } else if chips > 0 {
            record_contribution(actor, chips)?;
        }

        // Some(None) marks a short all-in raise that keeps the increment
        let increment = match validated {
            ValidatedAction::Bet(n) => Some(Some(n.max(ctx.big_blind))),
            ValidatedAction::Raise { to, full } => Some(full.then(|| to - ctx.highest_bet)),
            _ => None,
        };
        let responders = match increment {
            Some(_) => self.responders(seat),
            None => Vec::new(),
        };
        let round = self.round.as_mut().ok_or(GameError::NoHandInProgress)?;
        match increment {
            Some(inc) => round.mark_aggression(ctx.round_contribution + chips, inc, responders),
            None => round.mark_acted(),
        }
        let pending: Vec<usize> = round.pending().collect();
        let queue = self.action_queue(pending.into_iter());
        if let Some(round) = self.round.as_mut() {
            round.retain_pending(|seat| queue.contains(seat));
        }
        if let Some(record) = self.record.as_mut() {
            record.actions.push(ActionRecord {
                seat,
                street,
                action,
            });
        }
        debug!(seat, ?action, ?street, chips, "action applied");
        debug_assert_eq!(self.chips_on_table(), self.chips_in_play);
        self.advance()
    }

    fn chips_on_table(&self) -> u32 {
        self.table
            .seats()
            .map(|s| s.stack() + s.hand_contribution())
            .sum()
    }

    /// Moves the hand forward once the current street has nothing left to do.
    fn advance(&mut self) -> Result<(), GameError> {
        let live = self.table.seats().filter(|s| s.is_in_hand()).count();
        if live <= 1 {
            return self.settle(BTreeMap::new(), Vec::new(), true);
        }
        let Some(round) = self.round.as_ref() else {
            return Err(GameError::NoHandInProgress);
        };
        if !round.is_closed() {
            return Ok(());
        }
        let street = round.street();
        settle_street(self.table.seats_mut());
        let actors = self.table.seats().filter(|s| s.can_act()).count();
        match street.next() {
            Some(next) if actors >= 2 => self.open_street(next),
            Some(_) => {
                debug!(?street, "betting closed early, running out the board");
                self.run_out_board(street)?;
                self.showdown()
            }
            None => self.showdown(),
        }
    }

    fn open_street(&mut self, street: Street) -> Result<(), GameError> {
        self.deal_board(street)?;
        let button = self.table.button().ok_or(GameError::NoHandInProgress)?;
        let to_act = self.action_queue(self.table.clockwise_after(button));
        let big_blind = self.table.config().big_blind;
        self.round = Some(BettingRound::new(street, 0, big_blind, None, to_act));
        Ok(())
    }

    /// Burns one card and deals the street's community cards.
    fn deal_board(&mut self, street: Street) -> Result<(), GameError> {
        self.deck.burn_card()?;
        let cards = self.deck.deal(street.cards_dealt())?;
        self.table.push_board(&cards);
        debug!(?street, board = ?self.table.board(), "board dealt");
        Ok(())
    }

    fn run_out_board(&mut self, from: Street) -> Result<(), GameError> {
        let mut street = from;
        while let Some(next) = street.next() {
            self.deal_board(next)?;
            street = next;
        }
        Ok(())
    }

    fn showdown(&mut self) -> Result<(), GameError> {
        self.phase = Phase::Showdown;
        let board = self.table.board().to_vec();
        let mut hands: BTreeMap<usize, Hand> = BTreeMap::new();
        let mut shown = Vec::new();
        for seat in self.table.seats().filter(|s| s.is_in_hand()) {
            let Some(hole) = seat.hole_cards() else {
                continue;
            };
            let mut cards = board.clone();
            cards.extend_from_slice(&hole);
            let hand = evaluate(&cards)?;
            debug!(seat = seat.id(), %hand, "showdown");
            hands.insert(seat.id(), hand.clone());
            shown.push(ShowdownEntry {
                seat: seat.id(),
                hole_cards: hole,
                hand,
            });
        }
        self.settle(hands, shown, false)
    }

    /// Builds the pots, pays them out and closes the hand.
    ///
    /// # Panics
    ///
    /// Panics if the chips at the table after payout differ from the chips at
    /// the start of the hand.
    fn settle(
        &mut self,
        hands: BTreeMap<usize, Hand>,
        showdown: Vec<ShowdownEntry>,
        uncontested: bool,
    ) -> Result<(), GameError> {
        let button = self.table.button().ok_or(GameError::NoHandInProgress)?;
        let pots = build_pots(self.table.seats());
        let payouts = distribute(&pots, &hands, button, self.table.size());
        for p in &payouts {
            if let Some(seat) = self.table.seat_mut(p.seat) {
                seat.add_chips(p.amount);
            }
        }
        for seat in self.table.seats_mut() {
            seat.finish_hand();
        }
        let total: u32 = self.table.seats().map(Seat::stack).sum();
        assert_eq!(
            total, self.chips_in_play,
            "chip conservation violated in hand {}",
            self.hand_no
        );

        let result = HandResult {
            hand_no: self.hand_no,
            board: self.table.board().to_vec(),
            pots,
            payouts,
            showdown,
            uncontested,
        };
        if let Some(record) = self.record.as_mut() {
            record.board = result.board.clone();
            record.payouts = result.payouts.clone();
            record.showdown = result.showdown.clone();
        }
        info!(
            hand_no = self.hand_no,
            winners = ?result.winners(),
            pot = result.pots.total(),
            uncontested,
            "hand finished"
        );
        self.round = None;
        self.phase = Phase::Finished;
        self.last_result = Some(result);
        Ok(())
    }

    /// Betting context for `seat`, while a hand is being bet.
    pub fn action_context(&self, seat: usize) -> Option<ActionContext> {
        let round = self.live_round()?;
        let s = self.table.seat(seat)?;
        Some(ActionContext {
            stack: s.stack(),
            round_contribution: s.round_contribution(),
            highest_bet: round.highest_bet(),
            min_raise_increment: round.min_raise_increment(),
            big_blind: self.table.config().big_blind,
            may_raise: round.may_raise(seat),
            opponents_can_respond: self.table.seats().any(|o| o.id() != seat && o.can_act()),
        })
    }

    /// Legal action kinds for `seat`; empty unless it is that seat's turn.
    pub fn legal_actions(&self, seat: usize) -> BTreeSet<ActionKind> {
        if self.current_actor() != Some(seat) {
            return BTreeSet::new();
        }
        self.action_context(seat)
            .map(|ctx| legal_actions(&ctx))
            .unwrap_or_default()
    }

    pub fn to_call(&self, seat: usize) -> u32 {
        self.action_context(seat)
            .map_or(0, |ctx| ctx.to_call().min(ctx.stack))
    }

    /// Smallest raise-to total `seat` may choose now, if it may raise at all.
    pub fn min_raise_to(&self, seat: usize) -> Option<u32> {
        let ctx = self.action_context(seat)?;
        let kinds = self.legal_actions(seat);
        if kinds.contains(&ActionKind::Raise) {
            Some(ctx.min_raise_to().min(ctx.all_in_to()))
        } else if kinds.contains(&ActionKind::Bet) {
            Some(ctx.big_blind.min(ctx.stack))
        } else {
            None
        }
    }

    /// Pots as they stand, derived from hand contributions.
    pub fn pots(&self) -> Pots {
        build_pots(self.table.seats())
    }

    /// Full view with every dealt hole card visible.
    pub fn snapshot(&self) -> HandSnapshot {
        self.build_snapshot(|_| true)
    }

    /// View for one seat: its own hole cards, plus hands shown down in the
    /// finished hand.
    pub fn snapshot_for(&self, viewer: usize) -> HandSnapshot {
        let shown: Vec<usize> = match (&self.last_result, self.phase) {
            (Some(result), Phase::Finished) => result.showdown.iter().map(|e| e.seat).collect(),
            _ => Vec::new(),
        };
        self.build_snapshot(|id| id == viewer || shown.contains(&id))
    }

    fn build_snapshot(&self, reveal: impl Fn(usize) -> bool) -> HandSnapshot {
        let round = self.live_round();
        let current_actor = self.current_actor();
        let pots = match (&self.last_result, self.phase) {
            (Some(result), Phase::Finished) => result.pots.clone(),
            _ => self.pots(),
        };
        let seats = self
            .table
            .seats()
            .map(|s| SeatView {
                id: s.id(),
                name: s.name().to_string(),
                stack: s.stack(),
                status: s.status(),
                round_contribution: s.round_contribution(),
                hand_contribution: s.hand_contribution(),
                hole_cards: s.hole_cards().filter(|_| reveal(s.id())),
            })
            .collect();
        let config = self.table.config();
        HandSnapshot {
            hand_no: self.hand_no,
            phase: self.phase,
            street: round.map(BettingRound::street),
            button: self.table.button(),
            small_blind: config.small_blind,
            big_blind: config.big_blind,
            board: self.table.board().to_vec(),
            pots,
            current_actor,
            highest_bet: round.map_or(0, BettingRound::highest_bet),
            min_raise_to: current_actor.and_then(|s| self.min_raise_to(s)),
            seats,
        }
    }
}
