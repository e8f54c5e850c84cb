//! The role-gated text menu.
use once_cell::sync::Lazy;
use tracing::warn;

use crate::console;
use crate::database::Database;
use crate::echo;
use crate::echo_lines;
use crate::err;
use crate::error;
use crate::errors;
use crate::records::{Book, Student};
use crate::session::Session;

static BOOK_COLUMNS: Lazy<Vec<String>> = Lazy::new(|| {
    ["ISBN", "Title", "Authors", "Available", "Total"]
        .iter()
        .map(|s| s.to_string())
        .collect()
});

/// Dispatch to the menus the session's permissions allow. A user with
/// both permissions gets the category menu; with one, that category
/// directly; with none, the application refuses to run.
pub fn start(db: &mut Database, session: &Session) -> Result<(), errors::Error> {
    if session.can_edit_books && session.can_edit_students {
        menu_categories(db)
    } else if session.can_edit_books {
        menu_books(db)
    } else if session.can_edit_students {
        menu_students(db)
    } else {
        Err(err!(
            Auth,
            "User '{}' has no permission to run the application",
            session.user
        ))
    }
}

fn menu_categories(db: &mut Database) -> Result<(), errors::Error> {
    loop {
        echo!("Choose a category:\n1. Books\n2. Students\n\n0. Quit\n");
        match console::read_input("Your choice: ")?.trim() {
            "1" => menu_books(db)?,
            "2" => menu_students(db)?,
            "0" => return Ok(()),
            _ => {}
        }
    }
}

fn menu_books(db: &mut Database) -> Result<(), errors::Error> {
    loop {
        echo!(
            "Choose an action:\n1. Add a book\n2. Remove a book\n3. View book details\n4. View all books\n5. Save changes\n\n0. Close\n"
        );
        match console::read_input("Your choice: ")?.trim() {
            "1" => books_add(db)?,
            "2" => books_remove(db)?,
            "3" => books_view_one(db)?,
            "4" => books_view_all(db),
            "5" => books_save(db),
            "0" => return Ok(()),
            _ => {}
        }
    }
}

fn read_uid(prompt: &str) -> Result<u64, errors::Error> {
    Ok(console::read_input(prompt)?.trim().parse().unwrap_or_default())
}

fn books_add(db: &mut Database) -> Result<(), errors::Error> {
    let uid = loop {
        let uid = read_uid("Enter the ISBN number: ")?;
        if uid == 0 || db.books.find_by_key(&uid).is_some() {
            error!("Invalid ISBN number, or such a book already exists.\n");
            continue;
        }
        break uid;
    };

    let title = console::read_input("Enter the book title: ")?;
    let authors = console::read_input("Enter the book authors: ")?;
    let available_amount = console::read_input("Enter the number of available copies: ")?
        .trim()
        .parse()
        .unwrap_or_default();
    let total_amount = console::read_input("Enter the total number of copies: ")?
        .trim()
        .parse()
        .unwrap_or_default();

    db.books.insert(Book {
        uid,
        authors,
        title,
        available_amount,
        total_amount,
    });
    echo!("Book added.\n");
    Ok(())
}

fn books_remove(db: &mut Database) -> Result<(), errors::Error> {
    loop {
        let uid = read_uid("Enter the ISBN number: ")?;
        if uid == 0 || !db.books.remove_by_key(&uid) {
            error!("Invalid ISBN number, or no such book exists.\n");
            continue;
        }
        echo!("Book removed.\n");
        return Ok(());
    }
}

fn books_view_one(db: &Database) -> Result<(), errors::Error> {
    if db.books.is_empty() {
        echo!("No books.\n");
        return Ok(());
    }

    loop {
        let uid = read_uid("Enter the ISBN number: ")?;
        let book = match db.books.find_by_key(&uid) {
            Some(b) if uid != 0 => b,
            _ => {
                error!("Invalid ISBN number, or no such book exists.\n");
                continue;
            }
        };

        echo!(
            "\nISBN: {}\nTitle: {}\nAuthors: {}\nAvailable: {}\nTotal: {}\n\n",
            book.uid,
            book.title,
            book.authors,
            book.available_amount,
            book.total_amount
        );
        return Ok(());
    }
}

fn books_view_all(db: &Database) {
    if db.books.is_empty() {
        echo!("No books.\n");
        return;
    }

    let rows: Vec<Vec<String>> = db
        .books
        .iter()
        .map(|b| {
            vec![
                b.uid.to_string(),
                b.title.clone(),
                b.authors.clone(),
                b.available_amount.to_string(),
                b.total_amount.to_string(),
            ]
        })
        .collect();
    echo_lines!("{}", console::echo_table(&BOOK_COLUMNS, &rows));
}

fn books_save(db: &Database) {
    match db.save_books() {
        Ok(_) => echo!("Books saved successfully.\n"),
        Err(e) => {
            warn!("Failed to save books. {}", e);
            error!("Failed to save the book list.\n");
        }
    }
}

fn menu_students(db: &mut Database) -> Result<(), errors::Error> {
    loop {
        echo!(
            "Choose an action:\n1. Add a student\n2. Remove a student\n3. Edit a student\n4. View student details\n5. Save changes\n\n0. Close\n"
        );
        match console::read_input("Your choice: ")?.trim() {
            "1" => students_add(db)?,
            "2" => students_remove(db)?,
            "3" => students_edit(db)?,
            "4" => students_view_one(db)?,
            "5" => students_save(db),
            "0" => return Ok(()),
            _ => {}
        }
    }
}

fn students_add(db: &mut Database) -> Result<(), errors::Error> {
    let record_book_uid = loop {
        let uid = console::read_input("Enter the record book number: ")?;
        if db.students.find_by_key(&uid).is_some() {
            error!("A student with this record book number already exists.\n");
            continue;
        }
        break uid;
    };

    let student = Student {
        record_book_uid,
        surname: console::read_input("Enter the student's surname: ")?,
        name: console::read_input("Enter the student's name: ")?,
        patronymic: console::read_input("Enter the student's patronymic: ")?,
        faculty: console::read_input("Enter the student's faculty: ")?,
        speciality: console::read_input("Enter the student's speciality: ")?,
    };
    db.students.insert(student);
    echo!("Student added.\n");
    Ok(())
}

fn students_remove(db: &mut Database) -> Result<(), errors::Error> {
    loop {
        let uid = console::read_input("Enter the record book number: ")?;
        if !db.students.remove_by_key(&uid) {
            error!("No student with this record book number exists.\n");
            continue;
        }
        echo!("Student removed.\n");
        return Ok(());
    }
}

fn students_edit(db: &mut Database) -> Result<(), errors::Error> {
    let uid = loop {
        let uid = console::read_input("Enter the record book number: ")?;
        if db.students.find_by_key(&uid).is_none() {
            error!("No student with this record book number exists.\n");
            continue;
        }
        break uid;
    };

    echo!(
        "Choose the value to edit:\n1. Surname\n2. Name\n3. Patronymic\n4. Faculty\n5. Speciality\n\n0. Back\n"
    );
    let choice = console::read_input("Your choice: ")?;
    let selected = choice.trim();
    if !matches!(selected, "1" | "2" | "3" | "4" | "5") {
        if selected != "0" {
            error!("You picked an item that does not exist.\n");
        }
        return Ok(());
    }

    let new_value = console::read_input("Enter the new value: ")?;
    if let Some(student) = db.students.find_by_key_mut(&uid) {
        match selected {
            "1" => student.surname = new_value,
            "2" => student.name = new_value,
            "3" => student.patronymic = new_value,
            "4" => student.faculty = new_value,
            "5" => student.speciality = new_value,
            _ => {}
        }
    }
    Ok(())
}

fn students_view_one(db: &Database) -> Result<(), errors::Error> {
    loop {
        let uid = console::read_input("Enter the record book number: ")?;
        let student = match db.students.find_by_key(&uid) {
            Some(s) => s,
            None => {
                error!("No student with this record book number exists.\n");
                continue;
            }
        };

        echo!(
            "\nRecord book number: {}\nSurname: {}\nName: {}\nPatronymic: {}\nFaculty: {}\nSpeciality: {}\n\n",
            student.record_book_uid,
            student.surname,
            student.name,
            student.patronymic,
            student.faculty,
            student.speciality
        );
        return Ok(());
    }
}

fn students_save(db: &Database) {
    match db.save_students() {
        Ok(_) => echo!("Students saved successfully.\n"),
        Err(e) => {
            warn!("Failed to save students. {}", e);
            error!("Failed to save the student list.\n");
        }
    }
}
