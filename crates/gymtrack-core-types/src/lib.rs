//! Core types shared across Gym Tracker facilities
//!
//! This crate holds the canonical schema constants used by both the error
//! facility and the structured logging macros, so every crate that logs an
//! operation emits the same field keys and event names.

pub mod schema;
