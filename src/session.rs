use tracing::info;
use uuid::Uuid;

use crate::database::Database;
use crate::err;
use crate::errors;

/// An authenticated console session.
///
/// The permission flags are copied out of the user store at login:
/// store mutations move records around, so the session must not hold a
/// reference into the store.
pub struct Session {
    pub id: Uuid,
    pub user: String,
    pub can_edit_books: bool,
    pub can_edit_students: bool,
}

impl Session {
    /// Check credentials against the user store and open a session.
    /// The name must match exactly, and so must the password.
    pub fn authenticate(db: &Database, name: &str, password: &str) -> Result<Self, errors::Error> {
        let user = db
            .users
            .find_by_key(name)
            .filter(|u| u.password == password)
            .ok_or_else(|| err!(Auth, "User not found or wrong password"))?;

        let session = Session {
            id: Uuid::new_v4(),
            user: user.name.clone(),
            can_edit_books: user.can_view_edit_books,
            can_edit_students: user.can_view_edit_students,
        };
        info!(
            session_id = %session.id,
            user = %session.user,
            "Opened session."
        );
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::User;
    use crate::store::RecordStore;
    use std::path::PathBuf;

    fn database_with_user(name: &str, password: &str) -> Database {
        let mut db = Database {
            path: PathBuf::new(),
            books: RecordStore::new(),
            students: RecordStore::new(),
            users: RecordStore::new(),
        };
        db.users.insert(User {
            name: name.to_string(),
            password: password.to_string(),
            can_view_edit_students: true,
            can_view_edit_books: false,
        });
        db
    }

    #[test]
    fn test_authenticate_with_valid_credentials() {
        let db = database_with_user("admin", "secret");
        let session = Session::authenticate(&db, "admin", "secret").unwrap();
        assert_eq!(session.user, "admin");
        assert!(session.can_edit_students);
        assert!(!session.can_edit_books);
    }

    #[test]
    fn test_authenticate_rejects_wrong_password() {
        let db = database_with_user("admin", "secret");
        assert!(Session::authenticate(&db, "admin", "guess").is_err());
    }

    #[test]
    fn test_authenticate_rejects_unknown_user() {
        let db = database_with_user("admin", "secret");
        assert!(Session::authenticate(&db, "nobody", "secret").is_err());
    }
}
