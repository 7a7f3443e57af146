//! SQLite schema for the deck database.
//!
//! A single flat table. Cards are stored as a JSON array in `cards`, and
//! `created_at` holds an RFC 3339 UTC timestamp.

/// SQL to create the database schema.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS decks (
    id              INTEGER PRIMARY KEY,
    name            TEXT NOT NULL,
    cards           TEXT NOT NULL,
    created_at      TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
"#;

/// Pragmas applied to file-backed databases.
pub const FILE_PRAGMAS: &str = "PRAGMA journal_mode=WAL;";
