use crate::csv::{field, CsvRecord};
use crate::store::Record;

/// A library book. `uid` is the ISBN and the unique key; the book
/// store keeps records in ascending `uid` order at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub uid: u64,
    pub authors: String,
    pub title: String,
    pub available_amount: u32,
    pub total_amount: u32,
}

impl Record for Book {
    type Key = u64;

    fn key(&self) -> &u64 {
        &self.uid
    }

    /// Ascending-uid insertion index.
    ///
    /// Duplicate uids never reach placement (the store's get-or-create
    /// short-circuits first), but the comparisons stay inclusive so the
    /// result is still well-defined if they ever did.
    fn placement(existing: &[Self], new: &Self) -> usize {
        let (Some(first), Some(last)) = (existing.first(), existing.last()) else {
            return 0;
        };
        if new.uid <= first.uid {
            return 0;
        }
        if new.uid >= last.uid {
            return existing.len();
        }
        // Scan backward for the first slot whose uid does not exceed
        // the new one; the record lands right after it.
        for at in (0..existing.len()).rev() {
            if existing[at].uid <= new.uid {
                return at + 1;
            }
        }
        0
    }
}

impl CsvRecord for Book {
    const MIN_FIELDS: usize = 5;

    fn from_row(row: &[String]) -> Self {
        Book {
            uid: field(row, 0).parse().unwrap_or_default(),
            authors: field(row, 1).to_string(),
            title: field(row, 2).to_string(),
            available_amount: field(row, 3).parse().unwrap_or_default(),
            total_amount: field(row, 4).parse().unwrap_or_default(),
        }
    }

    fn to_line(&self) -> String {
        format!(
            "{};{};{};{};{}\n",
            self.uid, self.authors, self.title, self.available_amount, self.total_amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;

    fn book(uid: u64, title: &str) -> Book {
        Book {
            uid,
            authors: "A. Author".to_string(),
            title: title.to_string(),
            available_amount: 1,
            total_amount: 1,
        }
    }

    fn uids(store: &RecordStore<Book>) -> Vec<u64> {
        store.iter().map(|b| b.uid).collect()
    }

    #[test]
    fn test_inserts_keep_ascending_order() {
        let mut store = RecordStore::new();
        for uid in [5, 3, 8, 1] {
            store.insert(book(uid, "t"));
        }
        assert_eq!(uids(&store), vec![1, 3, 5, 8]);
    }

    #[test]
    fn test_order_holds_after_every_insert() {
        let mut store = RecordStore::new();
        for uid in [42, 7, 19, 100, 1, 55, 20, 6] {
            store.insert(book(uid, "t"));
            let current = uids(&store);
            for pair in current.windows(2) {
                assert!(pair[0] <= pair[1], "order broken: {:?}", current);
            }
        }
        assert_eq!(store.len(), 8);
    }

    #[test]
    fn test_duplicate_uid_keeps_the_first_record() {
        let mut store = RecordStore::new();
        store.insert(book(5, "A"));
        let kept = store.insert(book(5, "B"));

        assert_eq!(kept.title, "A");
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_key(&5).map(|b| b.title.as_str()), Some("A"));
    }

    #[test]
    fn test_remove_keeps_order_of_the_rest() {
        let mut store = RecordStore::new();
        for uid in [5, 3, 8, 1] {
            store.insert(book(uid, "t"));
        }

        assert!(store.remove_by_key(&5));
        assert_eq!(uids(&store), vec![1, 3, 8]);
        assert!(store.find_by_key(&5).is_none());
    }

    #[test]
    fn test_row_round_trip() {
        let rows = crate::csv::parse("10;Knuth;TAOCP;2;3\n");
        let store: RecordStore<Book> = RecordStore::load_from_rows(&rows);

        assert_eq!(store.len(), 1);
        let loaded = store.find_by_key(&10).map(|b| b.to_line());
        assert_eq!(loaded.as_deref(), Some("10;Knuth;TAOCP;2;3\n"));
    }

    #[test]
    fn test_short_row_is_skipped() {
        let rows = crate::csv::parse("10;Knuth;TAOCP;2\n11;Okasaki;PFDS;1;1\n");
        let store: RecordStore<Book> = RecordStore::load_from_rows(&rows);

        assert_eq!(store.len(), 1);
        assert!(store.find_by_key(&10).is_none());
        assert!(store.find_by_key(&11).is_some());
    }

    #[test]
    fn test_garbage_uid_reads_as_zero() {
        let rows = crate::csv::parse("not-a-number;X;Y;0;0\n");
        let store: RecordStore<Book> = RecordStore::load_from_rows(&rows);
        assert!(store.find_by_key(&0).is_some());
    }
}
