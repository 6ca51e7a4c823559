// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketbook::models::{Theme, Transaction};
use pocketbook::store;
use rusqlite::{Connection, params};

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    store::init_schema(&conn).unwrap();
    conn
}

fn sample() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "t1".into(),
            description: "Salary".into(),
            amount: "3200.00".parse().unwrap(),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            category: "salary".into(),
        },
        Transaction {
            id: "t2".into(),
            description: "Groceries".into(),
            amount: "-154.70".parse().unwrap(),
            date: NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(),
            category: "food".into(),
        },
        Transaction {
            id: "t3".into(),
            description: "Bus pass".into(),
            amount: "-60".parse().unwrap(),
            date: NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(),
            category: "transport".into(),
        },
    ]
}

#[test]
fn round_trip_preserves_order_and_fields() {
    let conn = setup();
    let txns = sample();
    store::save_transactions(&conn, &txns).unwrap();
    assert_eq!(store::load_transactions(&conn), txns);
}

#[test]
fn save_overwrites_prior_state() {
    let conn = setup();
    store::save_transactions(&conn, &sample()).unwrap();
    store::save_transactions(&conn, &sample()[..1]).unwrap();
    assert_eq!(store::load_transactions(&conn).len(), 1);
}

#[test]
fn missing_entry_loads_empty() {
    let conn = setup();
    assert!(store::load_transactions(&conn).is_empty());
}

#[test]
fn corrupt_entry_loads_empty() {
    let conn = setup();
    conn.execute(
        "INSERT INTO kv(key, value) VALUES(?1, 'not valid json {')",
        params![store::TRANSACTIONS_KEY],
    )
    .unwrap();
    assert!(store::load_transactions(&conn).is_empty());
}

#[test]
fn theme_defaults_to_dark() {
    let conn = setup();
    assert_eq!(store::load_theme(&conn), Theme::Dark);

    // Unrecognized stored values also fall back to dark.
    conn.execute(
        "INSERT INTO kv(key, value) VALUES(?1, 'purple')",
        params![store::THEME_KEY],
    )
    .unwrap();
    assert_eq!(store::load_theme(&conn), Theme::Dark);
}

#[test]
fn theme_round_trip() {
    let conn = setup();
    store::save_theme(&conn, Theme::Light).unwrap();
    assert_eq!(store::load_theme(&conn), Theme::Light);
    store::save_theme(&conn, Theme::Dark).unwrap();
    assert_eq!(store::load_theme(&conn), Theme::Dark);
}

#[test]
fn reopen_from_disk_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pocketbook.sqlite");

    let txns = sample();
    {
        let conn = store::open_at(&path).unwrap();
        store::save_transactions(&conn, &txns).unwrap();
        store::save_theme(&conn, Theme::Light).unwrap();
    }
    let conn = store::open_at(&path).unwrap();
    assert_eq!(store::load_transactions(&conn), txns);
    assert_eq!(store::load_theme(&conn), Theme::Light);
}
