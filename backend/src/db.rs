//! SQLite access.
//!
//! Connections are opened per request (the write volume of a single-admin
//! site does not justify a pool). The schema is created once at startup with
//! `execute_batch`; every table is an independent collection with no
//! cross-table transactions. Timestamps are stored as RFC 3339 TEXT.

use chrono::{DateTime, Utc};
use log::warn;
use rusqlite::Connection;

use crate::config::Config;
use crate::error::ApiError;

pub fn open(cfg: &Config) -> Result<Connection, ApiError> {
    Connection::open(&cfg.database_path).map_err(ApiError::from)
}

pub fn init(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            date TEXT NOT NULL,
            time TEXT NOT NULL DEFAULT '',
            location TEXT NOT NULL DEFAULT '',
            attendees INTEGER NOT NULL DEFAULT 0,
            type TEXT NOT NULL DEFAULT '',
            status TEXT NOT NULL DEFAULT '',
            image TEXT NOT NULL DEFAULT '',
            image_url TEXT NOT NULL DEFAULT '',
            registration_link TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS blogs (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            content TEXT NOT NULL DEFAULT '',
            author TEXT NOT NULL DEFAULT 'Anonymous',
            image TEXT NOT NULL DEFAULT '',
            date TEXT NOT NULL,
            post_time TEXT NOT NULL,
            read_time TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS alumni (
            id TEXT PRIMARY KEY,
            fullname TEXT NOT NULL,
            batch TEXT NOT NULL DEFAULT '',
            department TEXT NOT NULL DEFAULT '',
            current_position TEXT NOT NULL DEFAULT '',
            company TEXT NOT NULL DEFAULT '',
            bio TEXT NOT NULL DEFAULT '',
            email TEXT NOT NULL DEFAULT '',
            phone TEXT NOT NULL DEFAULT '',
            linkedin TEXT NOT NULL DEFAULT '',
            facebook TEXT NOT NULL DEFAULT '',
            avatar_url TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS projects (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            category TEXT NOT NULL DEFAULT '',
            status TEXT NOT NULL DEFAULT '',
            stars INTEGER NOT NULL DEFAULT 0,
            team TEXT NOT NULL DEFAULT '',
            technologies TEXT NOT NULL DEFAULT '[]',
            team_members TEXT NOT NULL DEFAULT '[]',
            image TEXT NOT NULL DEFAULT '',
            content TEXT NOT NULL DEFAULT '',
            github_url TEXT NOT NULL DEFAULT '',
            demo_url TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS messages (
            id TEXT PRIMARY KEY,
            full_name TEXT NOT NULL DEFAULT '',
            email TEXT NOT NULL DEFAULT '',
            subject TEXT NOT NULL DEFAULT '',
            message TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS event_registrations (
            id TEXT PRIMARY KEY,
            event_id TEXT NOT NULL,
            event_title TEXT NOT NULL DEFAULT '',
            full_name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT NOT NULL DEFAULT '',
            student_id TEXT NOT NULL DEFAULT '',
            department TEXT NOT NULL DEFAULT '',
            batch TEXT NOT NULL DEFAULT '',
            section TEXT NOT NULL DEFAULT '',
            message TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            email TEXT UNIQUE NOT NULL,
            password_hash TEXT NOT NULL,
            name TEXT NOT NULL DEFAULT 'Admin',
            role TEXT NOT NULL DEFAULT 'admin'
        );

        CREATE TABLE IF NOT EXISTS sessions (
            token TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            email TEXT NOT NULL,
            created_at TEXT NOT NULL,
            expires_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_registrations_event
            ON event_registrations(event_id);
        "#,
    )
}

/// Serializes a timestamp for a TEXT column.
pub fn ts(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Parses a TEXT timestamp, degrading to the epoch on rows written by hand.
pub fn parse_ts(raw: &str) -> DateTime<Utc> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(err) => {
            warn!("unparseable timestamp {raw:?} in database: {err}");
            DateTime::<Utc>::UNIX_EPOCH
        }
    }
}

#[cfg(test)]
pub fn open_in_memory() -> Connection {
    let conn = Connection::open_in_memory().expect("in-memory database");
    init(&conn).expect("schema");
    conn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_creates_all_tables() {
        let conn = open_in_memory();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN
                 ('events','blogs','alumni','projects','messages','event_registrations','users','sessions')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 8);
    }

    #[test]
    fn init_is_idempotent() {
        let conn = open_in_memory();
        init(&conn).unwrap();
    }

    #[test]
    fn timestamps_round_trip() {
        let now = Utc::now();
        assert_eq!(parse_ts(&ts(&now)), now);
        assert_eq!(parse_ts("not a date"), DateTime::<Utc>::UNIX_EPOCH);
    }
}
