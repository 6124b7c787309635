use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::GameError;

/// Hand categories from weakest to strongest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    /// Ace-high straight flush. Only ever compares above other straight flushes.
    RoyalFlush = 9,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

/// An evaluated five-card hand.
///
/// Ordering looks at `category` first and then `tiebreak` lexicographically,
/// so two hands that differ only by suits compare equal (a split pot).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hand {
    pub category: Category,
    /// The five scoring cards: category-defining cards first, then kickers, high to low.
    pub cards: [Card; 5],
    /// Comparison values high to low; slots a category does not use are zero.
    pub tiebreak: [u8; 5],
}

impl Hand {
    /// Value of the highest defining card. A wheel straight reports 5.
    pub fn high_value(&self) -> u8 {
        self.tiebreak[0]
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.tiebreak.cmp(&other.tiebreak))
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Hand {}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.category.name())?;
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}

/// Best five-card hand out of 5 to 7 cards.
///
/// Every 5-card subset is classified with [`evaluate_exactly_five`] and the
/// maximum is returned. Duplicate cards are rejected.
pub fn evaluate(cards: &[Card]) -> Result<Hand, GameError> {
    let n = cards.len();
    if !(5..=7).contains(&n) {
        return Err(GameError::InvalidCardCount(n));
    }
    for (i, c) in cards.iter().enumerate() {
        if cards[i + 1..].contains(c) {
            return Err(GameError::InvalidCard(format!("duplicate card {}", c)));
        }
    }

    let mut best: Option<Hand> = None;
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        let hand =
                            evaluate_exactly_five(&[cards[a], cards[b], cards[c], cards[d], cards[e]]);
                        if best.as_ref().is_none_or(|cur| hand > *cur) {
                            best = Some(hand);
                        }
                    }
                }
            }
        }
    }
    best.ok_or(GameError::InvalidCardCount(n))
}

/// Classifies exactly five cards. Works on a sorted copy; the input is untouched.
pub fn evaluate_exactly_five(cards: &[Card; 5]) -> Hand {
    let mut sorted = *cards;
    sorted.sort_unstable_by(|a, b| b.rank.cmp(&a.rank).then(b.suit.cmp(&a.suit)));

    let is_flush = sorted.iter().all(|c| c.suit == sorted[0].suit);
    let straight = straight_high(&sorted);
    let groups = rank_groups(&sorted);

    if let Some(high) = straight {
        let category = match (is_flush, high) {
            (true, 14) => Category::RoyalFlush,
            (true, _) => Category::StraightFlush,
            (false, _) => Category::Straight,
        };
        return straight_hand(category, sorted, high);
    }

    let category = match (groups[0].0, groups.get(1).map(|g| g.0)) {
        (4, _) => Category::FourOfAKind,
        (3, Some(2)) => Category::FullHouse,
        _ if is_flush => Category::Flush,
        (3, _) => Category::ThreeOfAKind,
        (2, Some(2)) => Category::TwoPair,
        (2, _) => Category::OnePair,
        _ => Category::HighCard,
    };

    // Order scoring cards by group size, then rank.
    let count_of = |r: Rank| groups.iter().find(|g| g.1 == r.value()).map_or(0, |g| g.0);
    let mut scoring = sorted;
    scoring.sort_by(|a, b| {
        count_of(b.rank)
            .cmp(&count_of(a.rank))
            .then(b.rank.cmp(&a.rank))
            .then(b.suit.cmp(&a.suit))
    });

    let mut tiebreak = [0u8; 5];
    for (slot, g) in tiebreak.iter_mut().zip(groups.iter()) {
        *slot = g.1;
    }

    Hand {
        category,
        cards: scoring,
        tiebreak,
    }
}

fn straight_hand(category: Category, sorted: [Card; 5], high: u8) -> Hand {
    if high == 5 {
        // Wheel: the ace plays low and goes last.
        let cards = [sorted[1], sorted[2], sorted[3], sorted[4], sorted[0]];
        return Hand {
            category,
            cards,
            tiebreak: [5, 4, 3, 2, 1],
        };
    }
    let mut tiebreak = [0u8; 5];
    for (slot, c) in tiebreak.iter_mut().zip(sorted.iter()) {
        *slot = c.rank.value();
    }
    Hand {
        category,
        cards: sorted,
        tiebreak,
    }
}

/// `sorted` is descending by rank. Returns the straight's top card value, 5 for the wheel.
fn straight_high(sorted: &[Card; 5]) -> Option<u8> {
    let v: [u8; 5] = std::array::from_fn(|i| sorted[i].rank.value());
    let distinct = v.windows(2).all(|w| w[0] > w[1]);
    if !distinct {
        return None;
    }
    if v[0] - v[4] == 4 {
        return Some(v[0]);
    }
    if v == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}

/// (count, rank value) pairs sorted by count desc, then rank desc.
fn rank_groups(sorted: &[Card; 5]) -> Vec<(u8, u8)> {
    let mut groups: Vec<(u8, u8)> = Vec::with_capacity(5);
    for c in sorted {
        let r = c.rank.value();
        match groups.iter_mut().find(|g| g.1 == r) {
            Some(g) => g.0 += 1,
            None => groups.push((1, r)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));
    groups
}
