//! Classification of PostgreSQL constraint violations.

/// Name of the unique constraint on `links.code`.
pub const LINKS_CODE_CONSTRAINT: &str = "links_code_key";

pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(LINKS_CODE_CONSTRAINT))
}

pub fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_foreign_key_violation())
}
