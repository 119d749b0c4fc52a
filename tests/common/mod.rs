//! Shared test helpers.
#![allow(dead_code)]

use chrono::NaiveDate;
use nomadtrack::domain::entities::country::Country;
use nomadtrack::domain::entities::visit::Visit;
use nomadtrack::infrastructure::memory::store::InMemoryStore;
use nomadtrack::NomadTrack;
use rusqlite::{params, Connection};
use std::sync::Arc;
use uuid::Uuid;

pub const FR: i64 = 1;
pub const GB: i64 = 2;
pub const DE: i64 = 3;
pub const AE: i64 = 4;

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

pub fn countries() -> Vec<Country> {
    vec![
        Country::new(FR, "France", "FR", true).with_official_state_name("the French Republic"),
        Country::new(GB, "United Kingdom", "GB", false),
        Country::new(DE, "Germany", "DE", true),
        Country::new(AE, "United Arab Emirates", "AE", false),
    ]
}

pub fn visit(id: i64, user: Uuid, country_id: i64, start: NaiveDate, end: Option<NaiveDate>) -> Visit {
    Visit::new(id, user, country_id, start, end).unwrap()
}

pub fn setup(visits: Vec<Visit>) -> NomadTrack {
    let store = Arc::new(InMemoryStore::new().with_countries(countries()).unwrap().with_visits(visits));
    NomadTrack::with_stores(store.clone(), store)
}

/// Creates the tables the visits service writes, as SQLModel lays them out.
pub fn create_schema(conn: &Connection) {
    conn.execute_batch(
        "
        CREATE TABLE user (
            id INTEGER PRIMARY KEY,
            id_uuid CHAR(32) NOT NULL UNIQUE,
            username VARCHAR NOT NULL,
            email VARCHAR NOT NULL,
            full_name VARCHAR NOT NULL,
            disabled BOOLEAN NOT NULL DEFAULT 0,
            admin BOOLEAN NOT NULL DEFAULT 0,
            hashed_password VARCHAR NOT NULL
        );
        CREATE TABLE country (
            id INTEGER PRIMARY KEY,
            name VARCHAR NOT NULL UNIQUE,
            official_state_name VARCHAR,
            code VARCHAR NOT NULL UNIQUE,
            schengen BOOLEAN NOT NULL DEFAULT 0
        );
        CREATE TABLE visit (
            id INTEGER PRIMARY KEY,
            start DATE NOT NULL,
            \"end\" DATE,
            still_visiting BOOLEAN NOT NULL DEFAULT 0,
            user_id INTEGER REFERENCES user(id),
            country_id INTEGER REFERENCES country(id)
        );
        ",
    )
    .unwrap();
}

pub fn insert_user(conn: &Connection, id: i64, id_uuid: &str, username: &str) {
    conn.execute(
        "INSERT INTO user (id, id_uuid, username, email, full_name, hashed_password)
         VALUES (?1, ?2, ?3, ?4, ?3, 'x')",
        params![id, id_uuid, username, format!("{username}@example.com")],
    )
    .unwrap();
}

pub fn insert_country(conn: &Connection, country: &Country) {
    conn.execute(
        "INSERT INTO country (id, name, official_state_name, code, schengen) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            country.id,
            country.name,
            country.official_state_name,
            country.code,
            country.schengen as i64
        ],
    )
    .unwrap();
}

pub fn insert_visit(conn: &Connection, id: i64, user_row: i64, country_id: i64, start: &str, end: Option<&str>) {
    conn.execute(
        "INSERT INTO visit (id, start, \"end\", still_visiting, user_id, country_id) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![id, start, end, end.is_none() as i64, user_row, country_id],
    )
    .unwrap();
}
