//! Admin authentication: salted password hashes and cookie-backed sessions.
//!
//! Passwords are stored as `salt$hash` where `hash` is the base64 SHA-256
//! digest of `salt + password`. Sessions are server-side rows keyed by a
//! random uuid token; the browser only ever holds the token in an HttpOnly
//! cookie, so no signing secret is involved. Expired rows are purged the
//! first time they are seen.

use actix_web::cookie::time::Duration as CookieDuration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::HttpRequest;
use base64::engine::general_purpose;
use base64::Engine as _;
use chrono::{Duration, Utc};
use log::info;
use rusqlite::{params, Connection, OptionalExtension};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use common::requests::AdminUser;

use crate::db;
use crate::error::ApiError;

pub const SESSION_COOKIE: &str = "sid";
const SESSION_TTL_HOURS: i64 = 24;

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    general_purpose::STANDARD.encode(hasher.finalize())
}

/// Hashes a plaintext password under a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    format!("{salt}${}", digest(&salt, password))
}

/// Constant shape check first, then digest comparison.
pub fn verify_password(stored: &str, password: &str) -> bool {
    match stored.split_once('$') {
        Some((salt, hash)) => digest(salt, password) == hash,
        None => false,
    }
}

/// Creates the admin user from the environment seed when it does not exist.
pub fn seed_admin(conn: &Connection, email: &str, password: &str) -> Result<(), ApiError> {
    let existing: Option<String> = conn
        .query_row(
            "SELECT id FROM users WHERE email = ?1",
            params![email],
            |row| row.get(0),
        )
        .optional()?;
    if existing.is_none() {
        conn.execute(
            "INSERT INTO users (id, email, password_hash, name, role) VALUES (?1, ?2, ?3, 'Admin', 'admin')",
            params![Uuid::new_v4().to_string(), email, hash_password(password)],
        )?;
        info!("seeded admin user: {email}");
    }
    Ok(())
}

/// Looks up a user by email, returning `(id, email, password_hash)`.
pub fn find_user(conn: &Connection, email: &str) -> Result<Option<(String, String, String)>, ApiError> {
    conn.query_row(
        "SELECT id, email, password_hash FROM users WHERE email = ?1",
        params![email],
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
    )
    .optional()
    .map_err(ApiError::from)
}

/// Opens a session for the user and returns the token to be set as a cookie.
pub fn create_session(conn: &Connection, user_id: &str, email: &str) -> Result<String, ApiError> {
    let token = Uuid::new_v4().to_string();
    let now = Utc::now();
    let expires = now + Duration::hours(SESSION_TTL_HOURS);
    conn.execute(
        "INSERT INTO sessions (token, user_id, email, created_at, expires_at) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![token, user_id, email, db::ts(&now), db::ts(&expires)],
    )?;
    Ok(token)
}

/// Resolves the session cookie on a request into the admin principal.
///
/// Expired sessions are deleted on sight and treated as absent.
pub fn admin_from_request(conn: &Connection, req: &HttpRequest) -> Option<AdminUser> {
    let token = req.cookie(SESSION_COOKIE)?.value().to_string();
    let row: Option<(String, String, String)> = conn
        .query_row(
            "SELECT user_id, email, expires_at FROM sessions WHERE token = ?1",
            params![token],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .optional()
        .ok()
        .flatten();
    let (user_id, email, expires_at) = row?;
    if db::parse_ts(&expires_at) <= Utc::now() {
        let _ = conn.execute("DELETE FROM sessions WHERE token = ?1", params![token]);
        return None;
    }
    Some(AdminUser { id: user_id, email })
}

/// Destroys the session referenced by the request cookie, if any.
pub fn destroy_session(conn: &Connection, req: &HttpRequest) {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        let _ = conn.execute(
            "DELETE FROM sessions WHERE token = ?1",
            params![cookie.value()],
        );
    }
}

pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(CookieDuration::hours(SESSION_TTL_HOURS))
        .finish()
}

pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(CookieDuration::ZERO)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_round_trip() {
        let stored = hash_password("hunter2");
        assert!(verify_password(&stored, "hunter2"));
        assert!(!verify_password(&stored, "hunter3"));
        assert!(!verify_password("garbage-without-separator", "hunter2"));
    }

    #[test]
    fn salts_differ_between_hashes() {
        assert_ne!(hash_password("same"), hash_password("same"));
    }

    #[test]
    fn seed_admin_is_idempotent() {
        let conn = db::open_in_memory();
        seed_admin(&conn, "admin@example.org", "pw").unwrap();
        seed_admin(&conn, "admin@example.org", "other").unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);

        let (_, _, hash) = find_user(&conn, "admin@example.org").unwrap().unwrap();
        assert!(verify_password(&hash, "pw"), "second seed must not overwrite");
    }

    #[test]
    fn session_create_and_lookup() {
        let conn = db::open_in_memory();
        let token = create_session(&conn, "u1", "admin@example.org").unwrap();
        let (user_id, email): (String, String) = conn
            .query_row(
                "SELECT user_id, email FROM sessions WHERE token = ?1",
                params![token],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!(user_id, "u1");
        assert_eq!(email, "admin@example.org");
    }
}
