// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::Transaction;

// (hours before reference, amount in cents, note, category)
const SAMPLES: &[(i64, i64, &str, &str)] = &[
    (1, -450, "Morning latte", "☕ Coffee"),
    (5, 250_000, "Monthly salary", "💼 Salary"),
    (26, -4_567, "Weekly groceries", "🛒 Groceries"),
    (50, -1_280, "Metro card top-up", "🚌 Transport"),
    (75, -2_399, "Pizza night", "🍕 Dining"),
    (98, 42_000, "Logo design gig", "💻 Freelance"),
    (130, -1_599, "Streaming plan", "📺 Subscriptions"),
    (170, -3_850, "Farmers market", "🛒 Groceries"),
    (240, -120_000, "Rent", "🏠 Housing"),
    (340, -6_000, "Electricity bill", "💡 Utilities"),
    (500, -8_999, "Running shoes", "🛍️ Shopping"),
    (620, 15_000, "Sold old bike", ""),
    (1_500, 250_000, "Monthly salary", "💼 Salary"),
    (2_300, -120_000, "Rent", "🏠 Housing"),
];

/// Demo transactions spread over the last few months before `reference`.
pub fn sample_transactions(reference: NaiveDateTime) -> Vec<Transaction> {
    SAMPLES
        .iter()
        .map(|&(hours, cents, note, category)| {
            Transaction::new(
                reference - Duration::hours(hours),
                Decimal::new(cents, 2),
                note,
                category,
            )
        })
        .collect()
}
