//! SQLite persistence for consumers.
//!
//! The database holds three tables: `consumer`, `beverage` and
//! `consumption`. Only `consumer` is read and written; the other two are
//! created so the file layout stays stable for tools that read it.
//!
//! A [`Store`] owns its connection and closes it when dropped. Callers that
//! should not hold a connection open for long go through [`DatabaseFile`],
//! which opens a fresh `Store` for each unit of work.

use crate::Result;
use chrono::{Local, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS consumer (
    id INTEGER PRIMARY KEY,
    nick_name TEXT,
    creation_timestamp TIMESTAMP
);

CREATE TABLE IF NOT EXISTS beverage (
    id INTEGER PRIMARY KEY,
    producer TEXT NOT NULL,
    name TEXT NOT NULL,
    size REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS consumption (
    id INTEGER PRIMARY KEY,
    timestamp TIMESTAMP,
    beverage_id INTEGER,
    consumer_id INTEGER,
    FOREIGN KEY(beverage_id) REFERENCES beverage(id),
    FOREIGN KEY(consumer_id) REFERENCES consumer(id)
);
";

/// A persisted drinker
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Consumer {
    pub id: i64,
    pub nick_name: String,
    pub created_at: NaiveDateTime,
}

/// Outcome of looking a consumer up by nickname
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Identification {
    /// An existing row matched the nickname
    Found(Consumer),
    /// No row matched, so a new one was inserted
    Created(Consumer),
}

impl Identification {
    pub fn consumer(&self) -> &Consumer {
        match self {
            Identification::Found(consumer) | Identification::Created(consumer) => consumer,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Identification::Created(_))
    }
}

/// Something that can resolve a nickname to a consumer, creating it if needed
pub trait ConsumerDirectory {
    fn identify(&mut self, nick_name: &str) -> Result<Identification>;
}

/// Open SQLite connection with the consumer operations
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) the database file at `path`
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        tracing::debug!("Opened database {:?}", path);
        Ok(Self { conn })
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Create all tables that do not exist yet. Safe to run on every start.
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        tracing::debug!("Database schema is in place");
        Ok(())
    }

    /// Look up a consumer by exact nickname, inserting a new row if none exists
    pub fn find_or_create_consumer(&self, nick_name: &str) -> Result<Identification> {
        if let Some(consumer) = self.find_consumer(nick_name)? {
            tracing::info!(
                "Found user {} with id {} created on {}",
                consumer.nick_name,
                consumer.id,
                consumer.created_at
            );
            return Ok(Identification::Found(consumer));
        }

        tracing::info!(
            "User data not found for user {}. Creating new user.",
            nick_name
        );

        let created_at = Local::now().naive_local();
        self.conn.execute(
            "INSERT INTO consumer (nick_name, creation_timestamp) VALUES (?1, ?2)",
            params![nick_name, created_at],
        )?;

        Ok(Identification::Created(Consumer {
            id: self.conn.last_insert_rowid(),
            nick_name: nick_name.to_string(),
            created_at,
        }))
    }

    /// Look up a consumer by exact nickname
    pub fn find_consumer(&self, nick_name: &str) -> Result<Option<Consumer>> {
        let consumer = self
            .conn
            .query_row(
                "SELECT id, nick_name, creation_timestamp FROM consumer
                 WHERE nick_name = ?1 ORDER BY id LIMIT 1",
                params![nick_name],
                |row| {
                    Ok(Consumer {
                        id: row.get(0)?,
                        nick_name: row.get(1)?,
                        created_at: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(consumer)
    }

    pub fn consumer_count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM consumer", [], |row| row.get(0))?;
        Ok(count)
    }
}

impl ConsumerDirectory for Store {
    fn identify(&mut self, nick_name: &str) -> Result<Identification> {
        self.find_or_create_consumer(nick_name)
    }
}

/// Location of a database file; opens a short-lived [`Store`] on demand
#[derive(Clone, Debug)]
pub struct DatabaseFile {
    path: PathBuf,
}

impl DatabaseFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn open(&self) -> Result<Store> {
        Store::open(&self.path)
    }

    /// Open the file, create missing tables and close it again
    pub fn ensure_schema(&self) -> Result<()> {
        self.open()?.ensure_schema()
    }
}

impl ConsumerDirectory for DatabaseFile {
    fn identify(&mut self, nick_name: &str) -> Result<Identification> {
        self.open()?.find_or_create_consumer(nick_name)
    }
}
