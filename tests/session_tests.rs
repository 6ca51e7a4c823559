// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketbook::models::{Direction, Theme, TimeFilter, TransactionInput};
use pocketbook::session::{Action, Reaction, Session};
use pocketbook::store;
use rusqlite::Connection;
use rust_decimal::Decimal;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn session() -> Session {
    let conn = Connection::open_in_memory().unwrap();
    store::init_schema(&conn).unwrap();
    Session::start(conn, today())
}

fn input(desc: &str, amount: &str, direction: Direction, category: &str) -> TransactionInput {
    TransactionInput {
        description: desc.into(),
        amount: amount.into(),
        date: Some(today()),
        direction,
        category: category.into(),
    }
}

#[test]
fn create_signs_amount_from_direction() {
    let mut s = session();
    // The typed sign is discarded; only the magnitude counts.
    s.dispatch(
        Action::Submit(input("Salary", "-1200", Direction::Income, "salary")),
        today(),
    )
    .unwrap();
    s.dispatch(
        Action::Submit(input("Groceries", "50", Direction::Expense, "food")),
        today(),
    )
    .unwrap();
    s.dispatch(
        Action::Submit(input("Cinema", "-12", Direction::Expense, "leisure")),
        today(),
    )
    .unwrap();

    assert_eq!(s.transactions[0].amount, Decimal::from(1200));
    assert_eq!(s.transactions[1].amount, Decimal::from(-50));
    assert_eq!(s.transactions[2].amount, Decimal::from(-12));
}

#[test]
fn created_ids_are_unique() {
    let mut s = session();
    for _ in 0..5 {
        s.dispatch(
            Action::Submit(input("Coffee", "5", Direction::Expense, "food")),
            today(),
        )
        .unwrap();
    }
    let mut ids: Vec<String> = s.transactions.iter().map(|t| t.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

#[test]
fn submit_rejects_invalid_forms_with_one_message() {
    let mut s = session();
    let cases = vec![
        input("   ", "10", Direction::Income, "salary"),
        input("Lunch", "abc", Direction::Expense, "food"),
        input("Lunch", "0", Direction::Expense, "food"),
        TransactionInput {
            date: None,
            ..input("Lunch", "10", Direction::Expense, "food")
        },
    ];
    for case in cases {
        let reaction = s.dispatch(Action::Submit(case), today()).unwrap();
        assert_eq!(
            reaction,
            Reaction::FormError("Please fill in all fields with valid values.".into())
        );
    }
    assert!(s.transactions.is_empty());
}

#[test]
fn edit_replaces_all_fields_except_id() {
    let mut s = session();
    s.dispatch(
        Action::Submit(input("Groceries", "50", Direction::Expense, "food")),
        today(),
    )
    .unwrap();
    let id = s.transactions[0].id.clone();

    let reaction = s.dispatch(Action::StartEdit(id.clone()), today()).unwrap();
    match reaction {
        Reaction::Editing(prefill) => assert_eq!(prefill.description, "Groceries"),
        other => panic!("expected edit prefill, got {:?}", other),
    }

    let mut replacement = input("Dividends", "75.50", Direction::Income, "investments");
    replacement.date = NaiveDate::from_ymd_opt(2024, 3, 1);
    s.dispatch(Action::Submit(replacement), today()).unwrap();

    assert_eq!(s.transactions.len(), 1);
    let t = &s.transactions[0];
    assert_eq!(t.id, id);
    assert_eq!(t.description, "Dividends");
    assert_eq!(t.amount, "75.50".parse::<Decimal>().unwrap());
    assert_eq!(t.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert_eq!(t.category, "investments");
    assert_eq!(s.editing, None);
}

#[test]
fn edit_mode_survives_validation_failure() {
    let mut s = session();
    s.dispatch(
        Action::Submit(input("Groceries", "50", Direction::Expense, "food")),
        today(),
    )
    .unwrap();
    let id = s.transactions[0].id.clone();

    s.dispatch(Action::StartEdit(id.clone()), today()).unwrap();
    let reaction = s
        .dispatch(
            Action::Submit(input("", "50", Direction::Expense, "food")),
            today(),
        )
        .unwrap();
    assert!(matches!(reaction, Reaction::FormError(_)));
    // The form stays open in edit mode and nothing changed.
    assert_eq!(s.editing, Some(id));
    assert_eq!(s.transactions[0].description, "Groceries");
}

#[test]
fn start_edit_of_unknown_id_never_opens_the_form() {
    let mut s = session();
    let reaction = s
        .dispatch(Action::StartEdit("missing".into()), today())
        .unwrap();
    assert_eq!(reaction, Reaction::Ignored);
    assert_eq!(s.editing, None);
}

#[test]
fn cancel_leaves_edit_mode() {
    let mut s = session();
    s.dispatch(
        Action::Submit(input("Groceries", "50", Direction::Expense, "food")),
        today(),
    )
    .unwrap();
    let id = s.transactions[0].id.clone();
    s.dispatch(Action::StartEdit(id), today()).unwrap();
    s.dispatch(Action::CancelForm, today()).unwrap();
    assert_eq!(s.editing, None);
}

#[test]
fn delete_requires_confirmation_and_tolerates_unknown_ids() {
    let mut s = session();
    s.dispatch(
        Action::Submit(input("Groceries", "50", Direction::Expense, "food")),
        today(),
    )
    .unwrap();
    let id = s.transactions[0].id.clone();

    let reaction = s
        .dispatch(
            Action::Delete {
                id: id.clone(),
                confirmed: false,
            },
            today(),
        )
        .unwrap();
    assert_eq!(reaction, Reaction::Ignored);
    assert_eq!(s.transactions.len(), 1);

    s.dispatch(
        Action::Delete {
            id: "missing".into(),
            confirmed: true,
        },
        today(),
    )
    .unwrap();
    assert_eq!(s.transactions.len(), 1);

    s.dispatch(
        Action::Delete {
            id,
            confirmed: true,
        },
        today(),
    )
    .unwrap();
    assert!(s.transactions.is_empty());
}

#[test]
fn clear_all_requires_confirmation() {
    let mut s = session();
    s.dispatch(
        Action::Submit(input("Salary", "1000", Direction::Income, "salary")),
        today(),
    )
    .unwrap();

    s.dispatch(Action::ClearAll { confirmed: false }, today())
        .unwrap();
    assert_eq!(s.transactions.len(), 1);

    s.dispatch(Action::ClearAll { confirmed: true }, today())
        .unwrap();
    assert!(s.transactions.is_empty());
    assert!(s.view().filtered.is_empty());
}

#[test]
fn snapshot_recompute_is_idempotent() {
    let mut s = session();
    s.dispatch(
        Action::Submit(input("Salary", "1000", Direction::Income, "salary")),
        today(),
    )
    .unwrap();
    s.dispatch(
        Action::Submit(input("Groceries", "50", Direction::Expense, "food")),
        today(),
    )
    .unwrap();

    s.dispatch(Action::SetFilter(TimeFilter::All), today()).unwrap();
    let first = s.view().clone();
    s.dispatch(Action::SetFilter(TimeFilter::All), today()).unwrap();
    assert_eq!(*s.view(), first);
}

#[test]
fn flow_chart_ignores_the_list_filter() {
    let mut s = session();
    s.dispatch(
        Action::Submit(input("Salary", "1000", Direction::Income, "salary")),
        today(),
    )
    .unwrap();
    s.dispatch(Action::SetSearch("zzz".into()), today()).unwrap();

    assert!(s.view().filtered.is_empty());
    let flow_income: Decimal = s.view().flow.iter().map(|p| p.income).sum();
    assert_eq!(flow_income, Decimal::from(1000));
}

#[test]
fn dispatch_persists_after_every_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pocketbook.sqlite");

    {
        let conn = store::open_at(&path).unwrap();
        let mut s = Session::start(conn, today());
        s.dispatch(
            Action::Submit(input("Salary", "1000", Direction::Income, "salary")),
            today(),
        )
        .unwrap();
        s.dispatch(Action::ToggleTheme, today()).unwrap();
        assert_eq!(s.theme, Theme::Light);
    }

    let conn = store::open_at(&path).unwrap();
    let reloaded = store::load_transactions(&conn);
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].amount, Decimal::from(1000));
    assert_eq!(store::load_theme(&conn), Theme::Light);
}
