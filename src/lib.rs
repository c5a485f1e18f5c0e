//! Attendance Engine for Fingerprint-Terminal Exports
//!
//! This crate ingests biometric-terminal spreadsheet exports, merges them into
//! a per-employee attendance history, classifies each day as present, late,
//! absent, holiday, or weekend, and serves the classified data over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod merge;
pub mod models;
pub mod store;
