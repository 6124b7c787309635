//! # holdem-engine: Single-Table Hold'em Core
//!
//! A deterministic no-limit Texas Hold'em engine for one table of 2 to 9
//! seats. Covers the betting state machine, main and side pots, and hand
//! evaluation, with seeded RNG so any hand can be replayed.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and parsing
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`table`] - Table config, seats and button rotation
//! - [`engine`] - Hand orchestration from blinds to payout
//! - [`betting`] - Per-street turn queue, bet level and raise reopening
//! - [`rules`] - Action validation and legal action sets
//! - [`pot`] - Contribution ledger, side pots and distribution
//! - [`hand`] - Best-five-of-seven hand evaluation
//! - [`game`] - Phases, streets, snapshots and hand results
//! - [`player`] - Seats, statuses and player actions
//! - [`logger`] - HandRecord serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::hand::{evaluate, Category};
//!
//! let cards = parse_cards("Ah Kh Qh Jh 10h 2c 3d").unwrap();
//! let hand = evaluate(&cards).unwrap();
//! assert_eq!(hand.category, Category::RoyalFlush);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use holdem_engine::engine::Engine;
//! use holdem_engine::table::TableConfig;
//!
//! let config = TableConfig { seats: 6, seed: Some(42), ..TableConfig::default() };
//! let mut a = Engine::with_players(config.clone(), 6).unwrap();
//! let mut b = Engine::with_players(config, 6).unwrap();
//! a.start_hand().unwrap();
//! b.start_hand().unwrap();
//! assert_eq!(a.snapshot(), b.snapshot());
//! ```

pub mod betting;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod rules;
pub mod table;
