//! Ledger engine
//!
//! The ledger owns the running balance and the append-only transaction log.
//! It is loaded once from a [`LedgerStore`] and persists its full state after
//! every successful mutation.
//!
//! Invariants:
//! - `balance` equals the `balance_after` of the last transaction, or zero
//! - each `balance_after` is the previous one plus (income) or minus
//!   (expense) the transaction amount
//! - the balance never goes below zero
//!
//! A mutation is acknowledged only after the store accepted the new state.
//! If the save fails, the appended transaction is removed and the previous
//! balance restored before the `StoreWrite` error is returned, so memory and
//! disk never disagree.

mod replay;
mod totals;

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Transaction, TransactionKind};
use crate::storage::{LedgerData, LedgerStore};

use self::totals::Totals;

/// Income/expense ledger bound to its persistent store
#[derive(Debug)]
pub struct Ledger<S: LedgerStore> {
    store: S,
    balance: Money,
    transactions: Vec<Transaction>,
    audit: Option<AuditLogger>,
}

impl<S: LedgerStore> Ledger<S> {
    /// Load the ledger from `store`
    ///
    /// A store with nothing in it yields an empty ledger. Stored state that
    /// cannot be read, parsed, or replayed fails with `StoreCorrupt`.
    pub fn load(store: S) -> TrackerResult<Self> {
        let data = match store.load()? {
            Some(data) => {
                replay::verify(&data)?;
                debug!(
                    location = %store.location(),
                    transactions = data.transactions.len(),
                    balance = %data.balance,
                    "loaded ledger"
                );
                data
            }
            None => {
                debug!(location = %store.location(), "no stored ledger, starting empty");
                LedgerData::default()
            }
        };

        Ok(Self {
            store,
            balance: data.balance,
            transactions: data.transactions,
            audit: None,
        })
    }

    /// Record accepted and rejected mutations in `logger`
    pub fn with_audit_logger(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Record income and persist
    pub fn add_income(
        &mut self,
        amount: Money,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> TrackerResult<Transaction> {
        self.record(
            TransactionKind::Income,
            amount,
            description.into(),
            category.into(),
        )
    }

    /// Record an expense and persist
    ///
    /// Fails with `InsufficientFunds`, leaving the ledger untouched, when
    /// `amount` exceeds the current balance.
    pub fn add_expense(
        &mut self,
        amount: Money,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> TrackerResult<Transaction> {
        self.record(
            TransactionKind::Expense,
            amount,
            description.into(),
            category.into(),
        )
    }

    fn record(
        &mut self,
        kind: TransactionKind,
        amount: Money,
        description: String,
        category: String,
    ) -> TrackerResult<Transaction> {
        match self.apply(kind, amount, &description, &category) {
            Ok(txn) => {
                info!(
                    kind = %kind,
                    amount = %amount,
                    category = %category,
                    balance = %self.balance,
                    "recorded transaction"
                );
                self.audit(&AuditEntry::recorded(&txn));
                Ok(txn)
            }
            Err(err) => {
                warn!(kind = %kind, amount = %amount, error = %err, "rejected transaction");
                self.audit_rejection(kind, amount, description, category, &err);
                Err(err)
            }
        }
    }

    fn apply(
        &mut self,
        kind: TransactionKind,
        amount: Money,
        description: &str,
        category: &str,
    ) -> TrackerResult<Transaction> {
        if !amount.is_positive() {
            return Err(TrackerError::InvalidAmount(format!(
                "{} must be greater than zero",
                amount
            )));
        }

        if kind == TransactionKind::Expense && amount > self.balance {
            return Err(TrackerError::insufficient_funds(amount, self.balance));
        }

        let new_balance = kind.apply(self.balance, amount).ok_or_else(|| {
            TrackerError::InvalidAmount(format!("{} would overflow the balance", amount))
        })?;

        Totals::of(&self.transactions)
            .and_then(|mut totals| totals.add(kind, amount, category))
            .ok_or_else(|| {
                TrackerError::InvalidAmount(format!(
                    "{} would overflow the totals for category '{}'",
                    amount, category
                ))
            })?;

        let txn = Transaction::record(
            kind,
            amount,
            description.to_string(),
            category.to_string(),
            new_balance,
        );

        let previous_balance = self.balance;
        self.transactions.push(txn.clone());
        self.balance = new_balance;

        if let Err(err) = self.save() {
            self.transactions.pop();
            self.balance = previous_balance;
            warn!(error = %err, "store write failed, mutation rolled back");
            return Err(err);
        }

        Ok(txn)
    }

    /// Audit a request that was refused
    ///
    /// Callers that reject input before it reaches the ledger (an amount
    /// that does not parse, say) use this so the refusal is still logged.
    pub fn audit_rejection(
        &self,
        kind: TransactionKind,
        amount: Money,
        description: impl Into<String>,
        category: impl Into<String>,
        err: &TrackerError,
    ) {
        self.audit(&AuditEntry::rejected(
            kind,
            amount,
            description,
            category,
            err.to_string(),
        ));
    }

    fn audit(&self, entry: &AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(err) = logger.log(entry) {
                warn!(path = %logger.path().display(), error = %err, "failed to write audit entry");
            }
        }
    }

    /// Persist the full state, overwriting whatever the store held
    pub fn save(&self) -> TrackerResult<()> {
        let data = LedgerData::new(self.balance, self.transactions.clone());
        self.store.save(&data)
    }

    /// All transactions, oldest first
    pub fn snapshot(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Sum of raw amounts per category
    ///
    /// Income and expense amounts are added together without sign, so a
    /// category with 100 income and 30 expense totals 130.
    /// Mutations that would overflow a total are refused, so the sums
    /// here stay in range; they saturate rather than wrap regardless.
    pub fn category_totals(&self) -> BTreeMap<String, Money> {
        let mut totals: BTreeMap<String, Money> = BTreeMap::new();
        for txn in &self.transactions {
            let total = totals.entry(txn.category().to_string()).or_default();
            *total = total.saturating_add(txn.amount());
        }
        totals
    }

    pub fn current_balance(&self) -> Money {
        self.balance
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give up the ledger and return its store
    pub fn into_store(self) -> S {
        self.store
    }
}
