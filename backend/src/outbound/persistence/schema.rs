//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered user accounts.
    ///
    /// `email` carries the `users_email_key` unique constraint.
    users (id) {
        /// Serial primary key.
        id -> Int4,
        /// Unique registration address.
        email -> Varchar,
        /// Password as supplied at registration.
        password -> Varchar,
        /// Extra registration fields as a JSON object.
        attributes -> Jsonb,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}
