// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation over an already materialized list of transactions.
//!
//! Nothing in here touches the store, the clock or any formatter: callers pass
//! a stable snapshot and an explicit reference time, and get fresh values back.

pub mod category;
pub mod time_series;
pub mod window;

pub use category::{generate as category_slices, summary_stats, top_slices};
pub use time_series::generate as time_series;
pub use window::filter as window_filter;
