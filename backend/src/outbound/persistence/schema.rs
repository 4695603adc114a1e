//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the embedded migrations exactly. The
//! `diesel print-schema` command can regenerate them from a live database.

diesel::table! {
    /// Contact records.
    ///
    /// `id` is a `SERIAL` primary key and `email` carries a unique constraint.
    contacts (id) {
        /// Primary key assigned by the `contacts_id_seq` sequence.
        id -> Int4,
        /// Given name.
        #[max_length = 80]
        first_name -> Varchar,
        /// Family name.
        #[max_length = 80]
        last_name -> Varchar,
        /// Unique email address.
        #[max_length = 120]
        email -> Varchar,
    }
}
