//! Pot ledger: contributions in, layered main/side pots out, chips back to winners.
//!
//! Contributions live on the seats themselves (`round_contribution`,
//! `hand_contribution`); pot structure is always derived from them, so the
//! tiers can never disagree with what was actually committed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::hand::Hand;
use crate::player::Seat;

/// One layer of the pot. The lowest tier is the main pot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotTier {
    pub amount: u32,
    /// Hand contribution a seat needs to be eligible for this tier.
    pub threshold: u32,
    /// Non-folded seats whose hand contribution reaches `threshold`, by seat id.
    pub eligible: Vec<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pots {
    tiers: Vec<PotTier>,
}

impl Pots {
    pub fn tiers(&self) -> &[PotTier] {
        &self.tiers
    }

    pub fn main(&self) -> Option<&PotTier> {
        self.tiers.first()
    }

    pub fn main_amount(&self) -> u32 {
        self.main().map_or(0, |t| t.amount)
    }

    pub fn sides(&self) -> &[PotTier] {
        self.tiers.get(1..).unwrap_or(&[])
    }

    pub fn total(&self) -> u32 {
        self.tiers.iter().map(|t| t.amount).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Chips paid from one tier to one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub seat: usize,
    pub tier: usize,
    pub amount: u32,
}

/// Moves `amount` from the seat's stack into its round and hand contributions.
pub fn record_contribution(seat: &mut Seat, amount: u32) -> Result<(), GameError> {
    seat.commit(amount)?;
    tracing::trace!(seat = seat.id(), amount, total = seat.hand_contribution(), "contribution");
    Ok(())
}

/// Closes a street: round contributions go back to zero, hand contributions stay.
pub fn settle_street<'a>(seats: impl IntoIterator<Item = &'a mut Seat>) {
    for seat in seats {
        seat.clear_round();
    }
}

/// Layers every seat's hand contribution into a main pot and side pots.
///
/// Thresholds are the distinct contributions of seats still in the hand.
/// Folded chips count toward every tier they reach but never make their seat
/// eligible. Folded chips above the highest live threshold join the top tier.
pub fn build_pots<'a>(seats: impl IntoIterator<Item = &'a Seat>) -> Pots {
    let entries: Vec<(usize, u32, bool)> = seats
        .into_iter()
        .filter(|s| s.hand_contribution() > 0)
        .map(|s| (s.id(), s.hand_contribution(), s.is_in_hand()))
        .collect();

    let mut thresholds: Vec<u32> = entries
        .iter()
        .filter(|(_, _, live)| *live)
        .map(|(_, c, _)| *c)
        .collect();
    thresholds.sort_unstable();
    thresholds.dedup();

    let mut tiers = Vec::with_capacity(thresholds.len());
    let mut prev = 0u32;
    for &t in &thresholds {
        let amount = entries
            .iter()
            .map(|(_, c, _)| (*c).min(t) - (*c).min(prev))
            .sum();
        let eligible = entries
            .iter()
            .filter(|(_, c, live)| *live && *c >= t)
            .map(|(id, _, _)| *id)
            .collect();
        tiers.push(PotTier {
            amount,
            threshold: t,
            eligible,
        });
        prev = t;
    }

    let excess: u32 = entries.iter().map(|(_, c, _)| c.saturating_sub(prev)).sum();
    if excess > 0 {
        match tiers.last_mut() {
            Some(top) => top.amount += excess,
            None => tiers.push(PotTier {
                amount: excess,
                threshold: prev,
                eligible: Vec::new(),
            }),
        }
    }

    Pots { tiers }
}

/// Clockwise distance from the button; the seat left of the button is 0.
pub fn seats_after_button(button: usize, seat: usize, table_size: usize) -> usize {
    (seat + table_size - button - 1) % table_size
}

/// Pays out every tier independently.
///
/// A tier with one eligible seat goes to it without looking at hands.
/// Otherwise the best hand among eligible seats wins; ties split by integer
/// division and the odd chips go to the tied winner nearest clockwise from
/// the button.
///
/// # Panics
///
/// Panics if a non-empty tier has no eligible seat; chips would otherwise be lost.
pub fn distribute(
    pots: &Pots,
    hands: &BTreeMap<usize, Hand>,
    button: usize,
    table_size: usize,
) -> Vec<Payout> {
    let mut payouts = Vec::new();
    for (tier_idx, tier) in pots.tiers.iter().enumerate() {
        if tier.amount == 0 {
            continue;
        }
        assert!(
            !tier.eligible.is_empty(),
            "pot tier {} holds {} chips but has no eligible seat",
            tier_idx,
            tier.amount
        );

        let winners: Vec<usize> = if tier.eligible.len() == 1 {
            tier.eligible.clone()
        } else {
            let best = tier.eligible.iter().filter_map(|s| hands.get(s)).max();
            match best {
                Some(best) => tier
                    .eligible
                    .iter()
                    .copied()
                    .filter(|s| hands.get(s) == Some(best))
                    .collect(),
                None => tier.eligible.clone(),
            }
        };

        let n = winners.len() as u32;
        let share = tier.amount / n;
        let remainder = tier.amount % n;
        let odd_chip_seat = winners
            .iter()
            .copied()
            .min_by_key(|&s| seats_after_button(button, s, table_size));

        for &seat in &winners {
            let extra = if Some(seat) == odd_chip_seat { remainder } else { 0 };
            payouts.push(Payout {
                seat,
                tier: tier_idx,
                amount: share + extra,
            });
        }
    }
    payouts
}

/// Sums payouts per seat.
pub fn totals_by_seat(payouts: &[Payout]) -> BTreeMap<usize, u32> {
    let mut totals = BTreeMap::new();
    for p in payouts {
        *totals.entry(p.seat).or_insert(0) += p.amount;
    }
    totals
}
