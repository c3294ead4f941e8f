//! Generic in-memory CRUD table.
//!
//! RULE: Only Table mutates a record sequence.
//! Store operations delegate here — they never index into rows directly.
//!
//! The contract, shared by every entity:
//!   - ids are assigned as max(existing) + 1, or 1 on an empty sequence
//!   - updates overlay only the patch's set fields
//!   - get/update/delete on a missing id report absence, never an error
//!   - list returns a copy in insertion order

use crate::types::RecordId;

/// Key accessor every stored record implements.
pub trait Keyed {
    fn id(&self) -> RecordId;

    /// Overwrite the primary key. Called only by [`Table::create`];
    /// whatever key a draft carries is discarded.
    fn set_id(&mut self, id: RecordId);
}

/// A partial update. Unset fields leave the record unchanged.
pub trait Patch<T> {
    fn apply(&self, row: &mut T);
}

/// One ordered record sequence, keyed by the record's primary-key field.
#[derive(Debug, Clone, Default)]
pub struct Table<T> {
    rows: Vec<T>,
}

impl<T: Keyed + Clone> Table<T> {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn from_rows(rows: Vec<T>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<T> {
        self.rows
    }

    /// Copy of the full sequence, insertion order. Never fails.
    pub fn list(&self) -> Vec<T> {
        self.rows.clone()
    }

    /// First record whose key equals `id`. Absence, not an error.
    pub fn get(&self, id: RecordId) -> Option<T> {
        self.rows.iter().find(|row| row.id() == id).cloned()
    }

    /// The id the next created record will receive.
    pub fn next_id(&self) -> RecordId {
        self.rows.iter().map(Keyed::id).max().map_or(1, |max| max + 1)
    }

    /// Append `draft` under a freshly assigned id and return the stored
    /// record. The draft's own key field is ignored.
    pub fn create(&mut self, mut draft: T) -> T {
        draft.set_id(self.next_id());
        self.rows.push(draft.clone());
        draft
    }

    /// Overlay the patch's set fields onto the record with key `id` and
    /// return the merged record, or `None` when no record matches.
    pub fn update<P: Patch<T>>(&mut self, id: RecordId, patch: &P) -> Option<T> {
        let row = self.rows.iter_mut().find(|row| row.id() == id)?;
        patch.apply(row);
        Some(row.clone())
    }

    /// Remove the first record with key `id`. Returns whether a record
    /// was actually removed.
    pub fn delete(&mut self, id: RecordId) -> bool {
        match self.rows.iter().position(|row| row.id() == id) {
            Some(index) => {
                self.rows.remove(index);
                true
            }
            None => false,
        }
    }

    /// All records satisfying `pred`, insertion order. The seam behind
    /// every foreign-key relationship query.
    pub fn filter_by<F: Fn(&T) -> bool>(&self, pred: F) -> Vec<T> {
        self.rows.iter().filter(|row| pred(row)).cloned().collect()
    }
}
