use crate::csv::{field, CsvRecord};
use crate::store::Record;

/// An application account, keyed by name. The two flags gate which
/// menus the user may enter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub password: String,
    pub can_view_edit_students: bool,
    pub can_view_edit_books: bool,
}

impl Record for User {
    type Key = str;

    fn key(&self) -> &str {
        &self.name
    }
}

impl CsvRecord for User {
    // Three fields satisfy the load; the books flag sits at index 3 and
    // is read regardless, defaulting to off when the field is absent.
    const MIN_FIELDS: usize = 3;

    fn from_row(row: &[String]) -> Self {
        User {
            name: field(row, 0).to_string(),
            password: field(row, 1).to_string(),
            can_view_edit_students: field(row, 2) == "1",
            can_view_edit_books: field(row, 3) == "1",
        }
    }

    fn to_line(&self) -> String {
        format!(
            "{};{};{};{}\n",
            self.name,
            self.password,
            u8::from(self.can_view_edit_students),
            u8::from(self.can_view_edit_books)
        )
    }
}
