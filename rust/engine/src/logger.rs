use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cards::Card;
use crate::game::{ShowdownEntry, Street};
use crate::player::PlayerAction;
use crate::pot::Payout;

/// Records a single seat action during a hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: usize,
    /// The betting street when this action occurred
    pub street: Street,
    pub action: PlayerAction,
}

/// Blind actually posted at the start of a hand (may be short).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BlindRecord {
    pub seat: usize,
    pub amount: u32,
}

/// Complete record of a hand: blinds, actions, board and outcome.
/// Serialized to JSONL format for hand history storage and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN), assigned by the logger
    #[serde(default)]
    pub hand_id: Option<String>,
    pub hand_no: u64,
    /// RNG seed of the engine (enables deterministic replay)
    pub seed: u64,
    pub button: usize,
    pub small_blind: u32,
    pub big_blind: u32,
    /// Blinds as posted, short when a stack could not cover them
    pub blinds: Vec<BlindRecord>,
    /// Starting stacks by seat
    pub stacks: Vec<(usize, u32)>,
    /// Chronological list of all seat actions
    pub actions: Vec<ActionRecord>,
    pub board: Vec<Card>,
    #[serde(default)]
    pub payouts: Vec<Payout>,
    #[serde(default)]
    pub showdown: Vec<ShowdownEntry>,
    /// Timestamp when the hand was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl HandRecord {
    pub fn winners(&self) -> Vec<usize> {
        let mut seats: Vec<usize> = self.payouts.iter().map(|p| p.seat).collect();
        seats.sort_unstable();
        seats.dedup();
        seats
    }
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends hand records to a JSONL file, one record per line.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger that numbers records for a fixed date and writes nowhere.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    /// Writes one record, filling in the id and timestamp when missing.
    /// Returns the id the record was written under.
    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<String> {
        let mut rec = record.clone();
        let id = match rec.hand_id.take() {
            Some(id) => id,
            None => self.next_id(),
        };
        rec.hand_id = Some(id.clone());
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        tracing::debug!(hand_id = %id, "hand record written");
        Ok(id)
    }
}

/// Reads back every record from a JSONL hand history.
pub fn read_records<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<HandRecord>> {
    let content = std::fs::read_to_string(path)?;
    content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).map_err(std::io::Error::other))
        .collect()
}
