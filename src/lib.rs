//! Leave Accrual Engine
//!
//! This crate computes how many annual leave days an employee has earned as of
//! a given date, under either the hire-date standard (anchored to the
//! employee's personal anniversary) or the fiscal-year standard (anchored to
//! the calendar year). It also derives leave balances from leave requests and
//! exposes both over a small HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
