//! In-memory record stores.
pub mod buffer;

use self::buffer::Buffer;

/// Lifecycle interface a record type plugs into its store: which field
/// is the unique key, and where a new record should be placed.
pub trait Record {
    /// Field used for uniqueness and, for ordered records, placement.
    type Key: PartialEq + ?Sized;

    fn key(&self) -> &Self::Key;

    /// Slot index where a new record should be constructed, given the
    /// records already in the store. The default appends; ordered
    /// record types override this to keep their invariant.
    fn placement(existing: &[Self], new: &Self) -> usize
    where
        Self: Sized,
    {
        let _ = new;
        existing.len()
    }
}

/// A set-by-key collection over a single contiguous [`Buffer`].
///
/// Keys are unique. Lookups are linear scans; the collections this
/// serves are sized for manual data entry, not bulk stores. Any
/// `insert` or `remove_*` may move records within the buffer, so
/// references obtained earlier must not be held across a mutation —
/// the borrow checker enforces what was a silent hazard in pointer
/// terms.
pub struct RecordStore<T> {
    buf: Buffer<T>,
}

impl<T: Record> RecordStore<T> {
    pub fn new() -> Self {
        RecordStore { buf: Buffer::new() }
    }

    /// Get-or-create. If a record with the same key is already present
    /// it is returned unchanged and `record` is dropped; this is NOT an
    /// upsert, and edit flows depend on that. Otherwise the record is
    /// constructed at the slot its `placement` chooses.
    pub fn insert(&mut self, record: T) -> &T {
        if let Some(at) = self.index_of(record.key()) {
            return &self.buf.as_slice()[at];
        }
        let at = T::placement(self.buf.as_slice(), &record).min(self.buf.len());
        self.buf.insert_at(at, record);
        &self.buf.as_slice()[at]
    }

    /// Linear scan by exact key equality.
    pub fn find_by_key(&self, key: &T::Key) -> Option<&T> {
        let at = self.index_of(key)?;
        self.buf.get(at)
    }

    /// Mutable lookup for in-place edits. Callers must not change the
    /// key field through the returned reference.
    pub fn find_by_key_mut(&mut self, key: &T::Key) -> Option<&mut T> {
        let at = self.index_of(key)?;
        self.buf.get_mut(at)
    }

    pub fn remove_at(&mut self, at: usize) -> bool {
        self.buf.remove_at(at)
    }

    pub fn remove_by_key(&mut self, key: &T::Key) -> bool {
        match self.index_of(key) {
            Some(at) => self.buf.remove_at(at),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn get(&self, at: usize) -> Option<&T> {
        self.buf.get(at)
    }

    pub fn first(&self) -> Option<&T> {
        self.buf.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.buf.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.buf.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    fn index_of(&self, key: &T::Key) -> Option<usize> {
        self.buf.iter().position(|r| r.key() == key)
    }
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
