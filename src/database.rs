use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::csv::{self, CsvRecord};
use crate::err;
use crate::errors;
use crate::records::{Book, Student, User};
use crate::store::RecordStore;

pub const BOOKS_FILE: &str = "books.csv";
pub const STUDENTS_FILE: &str = "students.csv";
pub const USERS_FILE: &str = "users.csv";

/// The three record collections and the directory they persist in.
pub struct Database {
    pub path: PathBuf,
    pub books: RecordStore<Book>,
    pub students: RecordStore<Student>,
    pub users: RecordStore<User>,
}

impl Database {
    /// Open the database held in `path`. Every collection loads from
    /// its own file; a missing file is an error for the caller to
    /// report, not something to create silently.
    pub fn open(path: &Path) -> Result<Database, errors::Error> {
        let books = load_file(path, BOOKS_FILE)?;
        let students = load_file(path, STUDENTS_FILE)?;
        let users = load_file(path, USERS_FILE)?;

        info!(path = %path.display(), "Opened database.");
        Ok(Database {
            path: path.to_path_buf(),
            books,
            students,
            users,
        })
    }

    pub fn save_books(&self) -> Result<(), errors::Error> {
        self.save_file(BOOKS_FILE, self.books.save_to_lines())
    }

    pub fn save_students(&self) -> Result<(), errors::Error> {
        self.save_file(STUDENTS_FILE, self.students.save_to_lines())
    }

    pub fn save_users(&self) -> Result<(), errors::Error> {
        self.save_file(USERS_FILE, self.users.save_to_lines())
    }

    fn save_file(&self, file: &str, lines: String) -> Result<(), errors::Error> {
        fs::write(self.path.join(file), lines)?;
        info!(file, "Saved data file.");
        Ok(())
    }
}

fn load_file<T: CsvRecord>(path: &Path, file: &str) -> Result<RecordStore<T>, errors::Error> {
    let file_path = path.join(file);
    if !file_path.exists() {
        return Err(err!(Db, "Data file '{}' not found", file_path.display()));
    }

    let text = fs::read_to_string(&file_path)?;
    let store = RecordStore::load_from_rows(&csv::parse(&text));
    info!(file, records = store.len(), "Loaded data file.");
    Ok(store)
}
