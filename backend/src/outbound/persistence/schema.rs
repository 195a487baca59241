//! Diesel table definitions for the customer store.
//!
//! These must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Individual customers.
    ///
    /// `email` carries the only uniqueness constraint and never leaves the
    /// persistence layer.
    individuals (id) {
        /// Primary key assigned by the database.
        id -> Int8,
        /// Display name.
        name -> Text,
        /// Contact address, unique across individuals.
        email -> Varchar,
    }
}

diesel::table! {
    /// Corporate customers.
    corporates (id) {
        /// Primary key assigned by the database.
        id -> Int8,
        /// Display name.
        name -> Text,
    }
}
