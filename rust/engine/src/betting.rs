use std::collections::{BTreeSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::game::Street;

/// Betting state for one street.
///
/// The seat to act is always the head of the `to_act` queue; the street is
/// closed once the queue is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BettingRound {
    street: Street,
    highest_bet: u32,
    min_raise_increment: u32,
    last_aggressor: Option<usize>,
    to_act: VecDeque<usize>,
    /// Seats that already closed action at the last full bet level and were
    /// only reached again by a short all-in raise.
    raise_locked: BTreeSet<usize>,
}

impl BettingRound {
    pub fn new(
        street: Street,
        highest_bet: u32,
        min_raise_increment: u32,
        last_aggressor: Option<usize>,
        to_act: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            street,
            highest_bet,
            min_raise_increment,
            last_aggressor,
            to_act: to_act.into_iter().collect(),
            raise_locked: BTreeSet::new(),
        }
    }

    pub fn street(&self) -> Street {
        self.street
    }
    pub fn highest_bet(&self) -> u32 {
        self.highest_bet
    }
    pub fn min_raise_increment(&self) -> u32 {
        self.min_raise_increment
    }
    pub fn last_aggressor(&self) -> Option<usize> {
        self.last_aggressor
    }

    pub fn current_actor(&self) -> Option<usize> {
        self.to_act.front().copied()
    }

    /// Seats still owed an action, in turn order.
    pub fn pending(&self) -> impl Iterator<Item = usize> + '_ {
        self.to_act.iter().copied()
    }

    pub fn may_raise(&self, seat: usize) -> bool {
        !self.raise_locked.contains(&seat)
    }

    pub fn is_closed(&self) -> bool {
        self.to_act.is_empty()
    }

    /// The current actor folded, checked or called.
    pub(crate) fn mark_acted(&mut self) {
        self.to_act.pop_front();
    }

    /// Drops queued seats that no longer have anything to act on.
    pub(crate) fn retain_pending(&mut self, keep: impl FnMut(&usize) -> bool) {
        self.to_act.retain(keep);
    }

    /// The current actor bet or raised to `new_highest`.
    ///
    /// `responders` are the other seats still able to act, clockwise from the
    /// aggressor. A full raise (`new_increment` is `Some`) reopens the action
    /// for all of them. A short all-in raise keeps the increment; seats that
    /// had already acted at the old level may only call or fold, while seats
    /// still owed an action at that level may raise again.
    pub(crate) fn mark_aggression(
        &mut self,
        new_highest: u32,
        new_increment: Option<u32>,
        responders: Vec<usize>,
    ) {
        let aggressor = self.to_act.pop_front();
        match new_increment {
            Some(inc) => {
                self.min_raise_increment = inc;
                self.raise_locked.clear();
                self.last_aggressor = aggressor;
            }
            None => {
                for &seat in &responders {
                    if self.to_act.contains(&seat) {
                        self.raise_locked.remove(&seat);
                    } else {
                        self.raise_locked.insert(seat);
                    }
                }
            }
        }
        self.highest_bet = new_highest;
        self.to_act = responders.into();
    }
}
