//! Shared primitive types used across the entire admin core.

/// The numeric primary key assigned to every stored record.
pub type RecordId = u64;

/// A loyalty-point quantity (balances, prices in points, bonuses).
pub type Points = i64;
