//! # holdem-ai: Bot Strategies for Hold'em
//!
//! Strategies decide from a read-only [`HandSnapshot`], normally the one
//! returned by `Engine::snapshot_for(seat)`, so they only see their own hole
//! cards. The engine validates whatever they return.
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::create_strategy;
//! use holdem_engine::engine::Engine;
//! use holdem_engine::table::TableConfig;
//!
//! let bot = create_strategy("baseline", 42).expect("known strategy");
//! let config = TableConfig { seats: 3, seed: Some(42), ..TableConfig::default() };
//! let mut engine = Engine::with_players(config, 3).unwrap();
//! engine.start_hand().unwrap();
//!
//! while let Some(seat) = engine.current_actor() {
//!     let action = bot.decide(&engine.snapshot_for(seat), seat);
//!     engine.apply_action(seat, action).unwrap();
//! }
//! ```
//!
//! ## Strategies
//!
//! - `"baseline"` - rule-based play from hand strength and pot odds
//! - `"station"` - checks when free, otherwise calls
//! - `"random"` - uniform over legal action kinds, seeded

use holdem_engine::game::HandSnapshot;
use holdem_engine::player::PlayerAction;

pub mod baseline;
pub mod simple;

pub use baseline::BaselineStrategy;
pub use simple::{CallingStation, RandomStrategy};

/// A bot that picks an action for the seat whose turn it is.
///
/// # Example Implementation
///
/// ```rust
/// use holdem_ai::Strategy;
/// use holdem_engine::game::HandSnapshot;
/// use holdem_engine::player::PlayerAction;
///
/// struct AlwaysFold;
///
/// impl Strategy for AlwaysFold {
///     fn decide(&self, _view: &HandSnapshot, _seat: usize) -> PlayerAction {
///         PlayerAction::Fold
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysFold"
///     }
/// }
/// ```
pub trait Strategy: Send + Sync {
    /// Chooses an action for `seat` given what that seat can see.
    fn decide(&self, view: &HandSnapshot, seat: usize) -> PlayerAction;

    fn name(&self) -> &str;
}

/// Names accepted by [`create_strategy`].
pub const STRATEGY_NAMES: [&str; 3] = ["baseline", "station", "random"];

/// Builds a strategy by name; `None` for an unknown name. `seed` drives the
/// random bot and is ignored by the deterministic ones.
///
/// ```rust
/// use holdem_ai::create_strategy;
///
/// assert_eq!(create_strategy("baseline", 0).unwrap().name(), "Baseline");
/// assert!(create_strategy("telepath", 0).is_none());
/// ```
pub fn create_strategy(name: &str, seed: u64) -> Option<Box<dyn Strategy>> {
    match name {
        "baseline" => Some(Box::new(BaselineStrategy::new())),
        "station" | "calling-station" => Some(Box::new(CallingStation)),
        "random" => Some(Box::new(RandomStrategy::new(seed))),
        _ => None,
    }
}
