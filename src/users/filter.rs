use sqlx::query_builder::Separated;
use sqlx::Sqlite;

/// Equality constraint on one of the permitted user columns.
///
/// Lookups accept any combination of these; fields outside the set are
/// unrepresentable.
#[derive(Debug, Clone)]
pub enum UserFilter {
    Id(i64),
    Email(String),
    PasswordHash(String),
    FirstName(String),
    LastName(String),
}

impl UserFilter {
    /// Append `column = ?` for this constraint to a WHERE clause under
    /// construction.
    pub(crate) fn push(&self, clause: &mut Separated<'_, '_, Sqlite, &'static str>) {
        match self {
            UserFilter::Id(id) => {
                clause.push("id = ").push_bind_unseparated(*id);
            }
            UserFilter::Email(email) => {
                clause.push("email = ").push_bind_unseparated(email.clone());
            }
            UserFilter::PasswordHash(digest) => {
                clause
                    .push("password_hash = ")
                    .push_bind_unseparated(digest.clone());
            }
            UserFilter::FirstName(first) => {
                clause
                    .push("first_name = ")
                    .push_bind_unseparated(first.clone());
            }
            UserFilter::LastName(last) => {
                clause
                    .push("last_name = ")
                    .push_bind_unseparated(last.clone());
            }
        }
    }
}

/// Assignment to one of the updatable user columns.
///
/// Identity is assigned by storage and stays immutable, so it has no
/// variant here. `None` writes NULL for the nullable columns.
#[derive(Debug, Clone)]
pub enum UserUpdate {
    Email(String),
    PasswordHash(Option<String>),
    FirstName(Option<String>),
    LastName(Option<String>),
}

impl UserUpdate {
    /// Append `column = ?` for this assignment to a SET clause under
    /// construction.
    pub(crate) fn push(&self, assignments: &mut Separated<'_, '_, Sqlite, &'static str>) {
        match self {
            UserUpdate::Email(email) => {
                assignments.push("email = ").push_bind_unseparated(email.clone());
            }
            UserUpdate::PasswordHash(digest) => {
                assignments
                    .push("password_hash = ")
                    .push_bind_unseparated(digest.clone());
            }
            UserUpdate::FirstName(first) => {
                assignments
                    .push("first_name = ")
                    .push_bind_unseparated(first.clone());
            }
            UserUpdate::LastName(last) => {
                assignments
                    .push("last_name = ")
                    .push_bind_unseparated(last.clone());
            }
        }
    }
}
