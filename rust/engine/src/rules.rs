use std::collections::BTreeSet;

use crate::errors::GameError;
use crate::player::{ActionKind, PlayerAction as A};

/// Everything the legality check needs to know about the acting seat and street.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionContext {
    /// Chips still behind
    pub stack: u32,
    /// Chips already committed this street
    pub round_contribution: u32,
    /// Highest street total any seat has reached
    pub highest_bet: u32,
    /// Smallest legal raise size on top of `highest_bet`
    pub min_raise_increment: u32,
    pub big_blind: u32,
    /// False once a short all-in raise left this seat with call-or-fold only
    pub may_raise: bool,
    /// Whether any other seat could still act on a bet or raise
    pub opponents_can_respond: bool,
}

impl ActionContext {
    pub fn to_call(&self) -> u32 {
        self.highest_bet.saturating_sub(self.round_contribution)
    }

    pub fn min_raise_to(&self) -> u32 {
        self.highest_bet + self.min_raise_increment
    }

    /// Street total this seat reaches by going all-in.
    pub fn all_in_to(&self) -> u32 {
        self.round_contribution + self.stack
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips to move; less than the amount owed means a short all-in call
    Call(u32),
    /// Opening bet; chips to move
    Bet(u32),
    /// New street total. `full` is false for an all-in raise below the minimum,
    /// which does not reopen the betting.
    Raise { to: u32, full: bool },
}

impl ValidatedAction {
    /// Chips this action moves from the stack into the pot.
    pub fn chips(&self, round_contribution: u32) -> u32 {
        match *self {
            ValidatedAction::Fold | ValidatedAction::Check => 0,
            ValidatedAction::Call(n) | ValidatedAction::Bet(n) => n,
            ValidatedAction::Raise { to, .. } => to - round_contribution,
        }
    }
}

/// Validates a player action against the current betting context.
///
/// Converts a [`crate::player::PlayerAction`] into a [`ValidatedAction`],
/// enforcing no-limit betting rules: minimum bets and raises, all-in
/// exceptions, and the short all-in rule that keeps the betting closed for
/// seats that already acted. Calls are clamped to the stack; explicit bet
/// and raise amounts are not.
///
/// # Errors
///
/// - [`GameError::IllegalAction`] - check facing a bet, bet over an existing
///   bet, raise with nothing to raise, under-bet, under-raise, raise after
///   the action was not reopened, or betting when nobody could respond
/// - [`GameError::InsufficientStack`] - bet or raise larger than the stack
///
/// # Examples
///
/// ```
/// use holdem_engine::rules::{validate_action, ActionContext, ValidatedAction};
/// use holdem_engine::player::PlayerAction;
///
/// let ctx = ActionContext {
///     stack: 80,
///     round_contribution: 0,
///     highest_bet: 100,
///     min_raise_increment: 100,
///     big_blind: 20,
///     may_raise: true,
///     opponents_can_respond: true,
/// };
/// // Short call goes all-in for what is left
/// assert_eq!(validate_action(&ctx, PlayerAction::Call), Ok(ValidatedAction::Call(80)));
/// assert!(validate_action(&ctx, PlayerAction::Check).is_err());
/// ```
pub fn validate_action(ctx: &ActionContext, action: A) -> Result<ValidatedAction, GameError> {
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if ctx.to_call() == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::illegal(format!(
                    "cannot check facing a bet of {}",
                    ctx.to_call()
                )))
            }
        }
        A::Call => {
            if ctx.to_call() == 0 {
                Err(GameError::illegal("nothing to call"))
            } else {
                Ok(ValidatedAction::Call(ctx.to_call().min(ctx.stack)))
            }
        }
        A::Bet(amount) => {
            if ctx.highest_bet > 0 {
                return Err(GameError::illegal("a bet is already open; raise instead"));
            }
            if !ctx.opponents_can_respond {
                return Err(GameError::illegal("no opponent can respond to a bet"));
            }
            if amount == 0 {
                return Err(GameError::illegal("bet must be positive"));
            }
            if amount > ctx.stack {
                return Err(GameError::InsufficientStack {
                    requested: amount,
                    available: ctx.stack,
                });
            }
            if amount < ctx.big_blind && amount != ctx.stack {
                return Err(GameError::illegal(format!(
                    "bet of {} is below the minimum of {}",
                    amount, ctx.big_blind
                )));
            }
            Ok(ValidatedAction::Bet(amount))
        }
        A::Raise(to) => {
            if ctx.highest_bet == 0 {
                return Err(GameError::illegal("nothing to raise; bet instead"));
            }
            if !ctx.may_raise {
                return Err(GameError::illegal(
                    "betting was not reopened by the short all-in; call or fold",
                ));
            }
            if !ctx.opponents_can_respond {
                return Err(GameError::illegal("no opponent can respond to a raise"));
            }
            if to <= ctx.highest_bet {
                return Err(GameError::illegal(format!(
                    "raise to {} does not exceed the current bet of {}",
                    to, ctx.highest_bet
                )));
            }
            if to > ctx.all_in_to() {
                return Err(GameError::InsufficientStack {
                    requested: to - ctx.round_contribution,
                    available: ctx.stack,
                });
            }
            let full = to >= ctx.min_raise_to();
            if !full && to != ctx.all_in_to() {
                return Err(GameError::illegal(format!(
                    "raise to {} is below the minimum of {}",
                    to,
                    ctx.min_raise_to()
                )));
            }
            Ok(ValidatedAction::Raise { to, full })
        }
        A::AllIn => {
            if ctx.stack == 0 {
                return Err(GameError::illegal("no chips left"));
            }
            if ctx.highest_bet == 0 {
                validate_action(ctx, A::Bet(ctx.stack))
            } else if ctx.stack <= ctx.to_call() {
                validate_action(ctx, A::Call)
            } else {
                validate_action(ctx, A::Raise(ctx.all_in_to()))
            }
        }
    }
}

/// The action kinds `validate_action` would accept right now, each tried at
/// its smallest legal size.
pub fn legal_actions(ctx: &ActionContext) -> BTreeSet<ActionKind> {
    let candidates = [
        A::Fold,
        A::Check,
        A::Call,
        A::Bet(ctx.big_blind.min(ctx.stack)),
        A::Raise(ctx.min_raise_to().min(ctx.all_in_to())),
        A::AllIn,
    ];
    candidates
        .into_iter()
        .filter(|a| validate_action(ctx, *a).is_ok())
        .map(|a| a.kind())
        .collect()
}
