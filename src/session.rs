// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;
use uuid::Uuid;

use crate::aggregate::{self, CategorySlice, FlowPoint, Totals};
use crate::models::{Theme, TimeFilter, Transaction, TransactionInput};
use crate::store;

/// Everything the rendering surfaces consume, derived in one pass from
/// the collection and the session view state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub filtered: Vec<Transaction>,
    pub totals: Totals,
    pub breakdown: Vec<CategorySlice>,
    pub flow: Vec<FlowPoint>,
}

/// One user action, one transition. No ambient state outside the
/// session; rendering technology never appears here.
#[derive(Debug, Clone)]
pub enum Action {
    StartEdit(String),
    CancelForm,
    Submit(TransactionInput),
    Delete { id: String, confirmed: bool },
    ClearAll { confirmed: bool },
    SetFilter(TimeFilter),
    SetSearch(String),
    ToggleTheme,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Reaction {
    /// Derived views recomputed and the collection persisted.
    Refreshed,
    /// Edit mode entered; carries the entry's values as form prefill.
    Editing(Transaction),
    /// The one inline validation message; mode and collection unchanged.
    FormError(String),
    Ignored,
}

pub struct Session {
    conn: Connection,
    pub transactions: Vec<Transaction>,
    pub editing: Option<String>,
    pub filter: TimeFilter,
    pub search: String,
    pub theme: Theme,
    view: Snapshot,
}

impl Session {
    /// Loads persisted state; absent or corrupt entries start empty
    /// (transactions) or dark (theme).
    pub fn start(conn: Connection, today: NaiveDate) -> Session {
        let transactions = store::load_transactions(&conn);
        let theme = store::load_theme(&conn);
        let mut session = Session {
            conn,
            transactions,
            editing: None,
            filter: TimeFilter::Month,
            search: String::new(),
            theme,
            view: Snapshot {
                filtered: Vec::new(),
                totals: aggregate::totals(&[]),
                breakdown: Vec::new(),
                flow: Vec::new(),
            },
        };
        session.view = session.derive(today);
        session
    }

    pub fn view(&self) -> &Snapshot {
        &self.view
    }

    fn derive(&self, today: NaiveDate) -> Snapshot {
        let filtered =
            aggregate::filtered_view(&self.transactions, self.filter, &self.search, today);
        Snapshot {
            totals: aggregate::totals(&filtered),
            breakdown: aggregate::category_breakdown(&filtered),
            // The flow chart tracks the full collection, not the filter.
            flow: aggregate::flow_series(&self.transactions, today),
            filtered,
        }
    }

    // The refresh contract: recompute every derived view, then persist
    // the whole collection, before the next action runs.
    fn refresh(&mut self, today: NaiveDate) -> Result<()> {
        self.view = self.derive(today);
        store::save_transactions(&self.conn, &self.transactions)
    }

    pub fn dispatch(&mut self, action: Action, today: NaiveDate) -> Result<Reaction> {
        match action {
            Action::StartEdit(id) => {
                let Some(txn) = self.transactions.iter().find(|t| t.id == id) else {
                    // Vanished id: the edit form never opens.
                    return Ok(Reaction::Ignored);
                };
                let prefill = txn.clone();
                self.editing = Some(id);
                Ok(Reaction::Editing(prefill))
            }
            Action::CancelForm => {
                self.editing = None;
                Ok(Reaction::Ignored)
            }
            Action::Submit(input) => {
                let values = match input.validate() {
                    Ok(v) => v,
                    // Form stays open, edit mode and collection untouched.
                    Err(err) => return Ok(Reaction::FormError(err.to_string())),
                };
                match self.editing.take() {
                    Some(id) => {
                        // Replace every field except the id; a vanished
                        // id is a silent no-op.
                        if let Some(txn) = self.transactions.iter_mut().find(|t| t.id == id) {
                            txn.description = values.description;
                            txn.amount = values.amount;
                            txn.date = values.date;
                            txn.category = values.category;
                        }
                    }
                    None => {
                        self.transactions.push(Transaction {
                            id: Uuid::new_v4().to_string(),
                            description: values.description,
                            amount: values.amount,
                            date: values.date,
                            category: values.category,
                        });
                    }
                }
                self.refresh(today)?;
                Ok(Reaction::Refreshed)
            }
            Action::Delete { id, confirmed } => {
                if !confirmed {
                    return Ok(Reaction::Ignored);
                }
                self.transactions.retain(|t| t.id != id);
                self.refresh(today)?;
                Ok(Reaction::Refreshed)
            }
            Action::ClearAll { confirmed } => {
                if !confirmed {
                    return Ok(Reaction::Ignored);
                }
                self.transactions.clear();
                self.refresh(today)?;
                Ok(Reaction::Refreshed)
            }
            Action::SetFilter(filter) => {
                self.filter = filter;
                self.refresh(today)?;
                Ok(Reaction::Refreshed)
            }
            Action::SetSearch(search) => {
                self.search = search;
                self.refresh(today)?;
                Ok(Reaction::Refreshed)
            }
            Action::ToggleTheme => {
                // Chart colors follow the theme; transaction data does not.
                self.theme = self.theme.toggled();
                store::save_theme(&self.conn, self.theme)?;
                self.refresh(today)?;
                Ok(Reaction::Refreshed)
            }
        }
    }
}
