use crate::csv::{field, CsvRecord};
use crate::store::Record;

/// A student, keyed by record book number. Stored in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub record_book_uid: String,
    pub surname: String,
    pub name: String,
    pub patronymic: String,
    pub faculty: String,
    pub speciality: String,
}

impl Record for Student {
    type Key = str;

    fn key(&self) -> &str {
        &self.record_book_uid
    }
}

impl CsvRecord for Student {
    const MIN_FIELDS: usize = 6;

    fn from_row(row: &[String]) -> Self {
        Student {
            record_book_uid: field(row, 0).to_string(),
            surname: field(row, 1).to_string(),
            name: field(row, 2).to_string(),
            patronymic: field(row, 3).to_string(),
            faculty: field(row, 4).to_string(),
            speciality: field(row, 5).to_string(),
        }
    }

    fn to_line(&self) -> String {
        format!(
            "{};{};{};{};{};{}\n",
            self.record_book_uid,
            self.surname,
            self.name,
            self.patronymic,
            self.faculty,
            self.speciality
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;

    fn student(uid: &str, surname: &str) -> Student {
        Student {
            record_book_uid: uid.to_string(),
            surname: surname.to_string(),
            name: "Ivan".to_string(),
            patronymic: "Ivanovich".to_string(),
            faculty: "CS".to_string(),
            speciality: "SE".to_string(),
        }
    }

    #[test]
    fn test_inserts_keep_arrival_order() {
        let mut store = RecordStore::new();
        store.insert(student("200", "B"));
        store.insert(student("100", "A"));

        let uids: Vec<&str> = store.iter().map(|s| s.record_book_uid.as_str()).collect();
        assert_eq!(uids, vec!["200", "100"]);
    }

    #[test]
    fn test_short_row_is_skipped() {
        // Three fields where six are required: the row must not load.
        let rows = crate::csv::parse("300;Petrov;Petr\n");
        let store: RecordStore<Student> = RecordStore::load_from_rows(&rows);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_row_round_trip() {
        let line = "300;Petrov;Petr;Petrovich;Math;Applied Math\n";
        let store: RecordStore<Student> = RecordStore::load_from_rows(&crate::csv::parse(line));

        assert_eq!(store.len(), 1);
        assert_eq!(store.save_to_lines(), line);
    }

    #[test]
    fn test_edit_does_not_disturb_the_key() {
        let mut store = RecordStore::new();
        store.insert(student("300", "Petrov"));

        if let Some(s) = store.find_by_key_mut("300") {
            s.surname = "Sidorov".to_string();
        }

        assert_eq!(
            store.find_by_key("300").map(|s| s.surname.as_str()),
            Some("Sidorov")
        );
        assert_eq!(store.len(), 1);
    }
}
