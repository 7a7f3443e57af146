//! The SQLite-backed deck store.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, Utc};
use memorize::{Deck, Flashcard, NewDeck};
use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::schema::{FILE_PRAGMAS, SCHEMA};

const SELECT_DECKS: &str = "SELECT id, name, cards, created_at FROM decks";

// Timestamps without an offset are read as UTC. The first form is SQLite's
// CURRENT_TIMESTAMP, the second an ISO 8601 local time.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Persistent store of named flashcard decks.
///
/// Thread-safe via internal `Mutex<Connection>`. Each call is its own
/// statement; nothing spans calls.
///
/// # Example
///
/// ```
/// use memorize::{Flashcard, NewDeck};
/// use memorize_store::DeckStore;
///
/// # fn main() -> memorize_store::Result<()> {
/// let store = DeckStore::open_in_memory()?;
/// let deck = store.save(&NewDeck::new(
///     "Bio 101",
///     vec![Flashcard::new("What is osmosis?", "Osmosis is diffusion of water.")],
/// ))?;
///
/// assert_eq!(store.list()?[0].id, deck.id);
/// assert!(store.delete(deck.id)?);
/// assert!(store.list()?.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DeckStore {
    conn: Mutex<Connection>,
}

impl DeckStore {
    /// Open (or create) the database at `path`.
    ///
    /// Missing parent directories are created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(FILE_PRAGMAS)?;
        debug!(path = %path.display(), "Opened deck database");
        Self::init(conn)
    }

    /// Open an in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| Error::Poisoned)
    }

    /// All decks, newest first.
    ///
    /// Decks saved within the same instant are ordered by id, highest first.
    /// Ordering uses the decoded timestamps, so rows written in any accepted
    /// timestamp format interleave correctly.
    pub fn list(&self) -> Result<Vec<Deck>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(SELECT_DECKS)?;

        let mut decks = stmt
            .query_map([], StoredDeck::from_row)?
            .map(|row| row.map_err(Error::from).and_then(StoredDeck::decode))
            .collect::<Result<Vec<_>>>()?;

        decks.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(decks)
    }

    /// Look up a deck by id.
    pub fn get(&self, id: i64) -> Result<Option<Deck>> {
        let conn = self.conn()?;
        let stored = conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_DECKS),
                params![id],
                StoredDeck::from_row,
            )
            .optional()?;

        stored.map(StoredDeck::decode).transpose()
    }

    /// Save a new deck and return it with its assigned id and timestamp.
    ///
    /// Fails with [`Error::Validation`] when the name or the card list is
    /// empty.
    pub fn save(&self, deck: &NewDeck) -> Result<Deck> {
        if deck.name.is_empty() {
            return Err(Error::Validation("deck name is required".to_string()));
        }
        if deck.cards.is_empty() {
            return Err(Error::Validation(
                "deck must contain at least one card".to_string(),
            ));
        }

        let cards = serde_json::to_string(&deck.cards)?;
        let created_at = Utc::now().trunc_subsecs(6);

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO decks (name, cards, created_at) VALUES (?1, ?2, ?3)",
            params![deck.name, cards, format_timestamp(&created_at)],
        )?;
        let id = conn.last_insert_rowid();

        info!(id, name = %deck.name, cards = deck.cards.len(), "Deck saved");

        Ok(Deck {
            id,
            name: deck.name.clone(),
            cards: deck.cards.clone(),
            created_at,
        })
    }

    /// Delete a deck by id.
    ///
    /// Returns whether a deck was removed; a missing id is not an error.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let removed = self
            .conn()?
            .execute("DELETE FROM decks WHERE id = ?1", params![id])?;

        if removed > 0 {
            info!(id, "Deck deleted");
        } else {
            debug!(id, "No deck to delete");
        }
        Ok(removed > 0)
    }
}

/// A row as stored, before the cards and timestamp are decoded.
struct StoredDeck {
    id: i64,
    name: String,
    cards: String,
    created_at: String,
}

impl StoredDeck {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            cards: row.get(2)?,
            created_at: row.get(3)?,
        })
    }

    fn decode(self) -> Result<Deck> {
        let cards: Vec<Flashcard> = serde_json::from_str(&self.cards)?;
        let created_at =
            parse_timestamp(&self.created_at).ok_or_else(|| Error::Timestamp {
                id: self.id,
                value: self.created_at.clone(),
            })?;

        Ok(Deck {
            id: self.id,
            name: self.name,
            cards,
            created_at,
        })
    }
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}
