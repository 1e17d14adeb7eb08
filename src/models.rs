// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::errors::LedgerError;

/// Adds amounts, pinning at `Decimal::MAX`/`Decimal::MIN` instead of overflowing.
pub fn saturating_sum(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// A single income (positive amount) or expense (negative amount).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Option<i64>,
    pub timestamp: NaiveDateTime,
    pub amount: Decimal,
    pub note: String,
    pub category: String,
}

impl Transaction {
    pub fn new(
        timestamp: NaiveDateTime,
        amount: Decimal,
        note: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            timestamp,
            amount,
            note: note.into(),
            category: category.into(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_expense(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Category label with the empty string folded into the fallback category.
    pub fn category_label(&self) -> &str {
        if self.category.is_empty() {
            config::FALLBACK_CATEGORY
        } else {
            &self.category
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePeriod {
    Week,
    Month,
    Year,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 3] = [TimePeriod::Week, TimePeriod::Month, TimePeriod::Year];

    /// Length of the trailing window in calendar days.
    pub fn days(self) -> u64 {
        match self {
            TimePeriod::Week => config::WEEK_WINDOW_DAYS,
            TimePeriod::Month => config::MONTH_WINDOW_DAYS,
            TimePeriod::Year => config::YEAR_WINDOW_DAYS,
        }
    }

    /// Number of chart buckets emitted for this period.
    pub fn bucket_count(self) -> u32 {
        match self {
            TimePeriod::Week => config::WEEK_BUCKETS,
            TimePeriod::Month => config::MONTH_BUCKETS,
            TimePeriod::Year => config::YEAR_BUCKETS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimePeriod::Week => "week",
            TimePeriod::Month => "month",
            TimePeriod::Year => "year",
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimePeriod {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" => Ok(TimePeriod::Week),
            "month" => Ok(TimePeriod::Month),
            "year" => Ok(TimePeriod::Year),
            _ => Err(LedgerError::UnknownPeriod(s.to_string())),
        }
    }
}

/// Which side of the ledger a category breakdown looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowDirection {
    Income,
    Expense,
}

impl FlowDirection {
    /// Zero amounts belong to neither direction.
    pub fn includes(self, amount: Decimal) -> bool {
        match self {
            FlowDirection::Income => amount > Decimal::ZERO,
            FlowDirection::Expense => amount < Decimal::ZERO,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FlowDirection::Income => "income",
            FlowDirection::Expense => "expense",
        }
    }
}

impl fmt::Display for FlowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowDirection {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(FlowDirection::Income),
            "expense" | "expenses" => Ok(FlowDirection::Expense),
            _ => Err(LedgerError::UnknownDirection(s.to_string())),
        }
    }
}

/// One chart bucket. `net` and the flags are derived from the two totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub label: String,
    pub income: Decimal,
    pub expense: Decimal,
}

impl TimeSeriesPoint {
    pub fn net(&self) -> Decimal {
        self.income - self.expense
    }

    pub fn is_profit(&self) -> bool {
        self.net() > Decimal::ZERO
    }

    pub fn is_loss(&self) -> bool {
        self.net() < Decimal::ZERO
    }

    pub fn is_break_even(&self) -> bool {
        self.net().is_zero()
    }

    pub fn has_activity(&self) -> bool {
        self.income > Decimal::ZERO || self.expense > Decimal::ZERO
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub category: String,
    pub amount: Decimal,
    pub color_index: usize,
    pub percentage_of_total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategorySummary {
    pub total_amount: Decimal,
    pub category_count: usize,
}

/// Transactions sharing one calendar date, newest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub transactions: Vec<Transaction>,
}

impl DayGroup {
    pub fn income(&self) -> Decimal {
        saturating_sum(
            self.transactions
                .iter()
                .filter(|t| t.is_income())
                .map(|t| t.amount),
        )
    }

    pub fn expense(&self) -> Decimal {
        saturating_sum(
            self.transactions
                .iter()
                .filter(|t| t.is_expense())
                .map(|t| t.amount.abs()),
        )
    }

    pub fn net(&self) -> Decimal {
        saturating_sum(self.transactions.iter().map(|t| t.amount))
    }
}

/// Value shown in a dashboard summary row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum SummaryValue {
    Currency(Decimal),
    Count(usize),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub title: String,
    pub value: SummaryValue,
}
