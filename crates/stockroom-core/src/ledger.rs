//! # Transaction Ledger
//!
//! An append-only, bounded, ordered sequence recording every mutating
//! inventory operation with a timestamp.
//!
//! ## Invariants
//! - Append-only: entries are never mutated or removed
//! - Ordered by append sequence (monotonic by timestamp in
//!   single-threaded use)
//! - Bounded by an explicit, configurable capacity
//!
//! A full ledger refuses further appends; the session layer checks
//! [`TransactionLog::has_room`] BEFORE mutating the store, so a refused
//! log entry never leaves an unlogged mutation behind.
//!
//! Note that sales never reach this ledger at all: only Add, Delete,
//! and Update are recorded (see DESIGN.md).

use crate::error::CoreError;
use crate::types::Transaction;
use crate::DEFAULT_HISTORY_CAPACITY;

/// The append-only transaction log.
#[derive(Debug, Clone)]
pub struct TransactionLog {
    entries: Vec<Transaction>,
    capacity: usize,
}

impl TransactionLog {
    /// Creates an empty log with the default capacity.
    pub fn new() -> Self {
        TransactionLog::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Creates an empty log with an explicit capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        TransactionLog {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Maximum number of entries this log accepts.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of recorded entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the log holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks whether at least one more entry fits.
    #[inline]
    pub fn has_room(&self) -> bool {
        self.entries.len() < self.capacity
    }

    /// The full ordered (by append sequence) list of entries.
    #[inline]
    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    /// Appends a transaction record.
    ///
    /// ## Errors
    /// [`CoreError::HistoryFull`] when at capacity; the entry is
    /// dropped and the log is unchanged.
    pub fn append(&mut self, transaction: Transaction) -> Result<(), CoreError> {
        if !self.has_room() {
            return Err(CoreError::HistoryFull {
                capacity: self.capacity,
            });
        }

        self.entries.push(transaction);
        Ok(())
    }
}

impl Default for TransactionLog {
    fn default() -> Self {
        TransactionLog::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{Product, TransactionKind};

    fn record(kind: TransactionKind, id: u32) -> Transaction {
        let product = Product::new(id, "Bolt", Money::from_cents(50), 100);
        Transaction::record(kind, product, 100)
    }

    #[test]
    fn test_append_preserves_sequence_order() {
        let mut log = TransactionLog::new();
        log.append(record(TransactionKind::Add, 1)).unwrap();
        log.append(record(TransactionKind::Update, 1)).unwrap();
        log.append(record(TransactionKind::Delete, 1)).unwrap();

        let kinds: Vec<TransactionKind> = log.entries().iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TransactionKind::Add,
                TransactionKind::Update,
                TransactionKind::Delete,
            ]
        );
    }

    #[test]
    fn test_timestamps_are_monotonic_by_append() {
        let mut log = TransactionLog::new();
        log.append(record(TransactionKind::Add, 1)).unwrap();
        log.append(record(TransactionKind::Delete, 1)).unwrap();

        let entries = log.entries();
        assert!(entries[0].timestamp <= entries[1].timestamp);
    }

    #[test]
    fn test_append_refused_when_full() {
        let mut log = TransactionLog::with_capacity(1);
        log.append(record(TransactionKind::Add, 1)).unwrap();

        let err = log.append(record(TransactionKind::Add, 2)).unwrap_err();
        assert_eq!(err, CoreError::HistoryFull { capacity: 1 });
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_has_room_tracks_capacity() {
        let mut log = TransactionLog::with_capacity(2);
        assert!(log.has_room());

        log.append(record(TransactionKind::Add, 1)).unwrap();
        assert!(log.has_room());

        log.append(record(TransactionKind::Add, 2)).unwrap();
        assert!(!log.has_room());
    }
}
