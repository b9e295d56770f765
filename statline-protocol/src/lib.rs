//! Serial stats line protocol
//!
//! This crate defines the text protocol between the host-side metrics
//! sender and the Statline display. The protocol is deliberately dumb:
//! one newline-terminated line of comma-separated fields per update.
//!
//! # Protocol Overview
//!
//! ```text
//! Deck (default):
//! ┌─────┬──────────┬─────┬──────┬──────────────────┬─────────┐
//! │ CPU │ MEM FREE │ RAM │ DISK │ TIME             │ DAY     │
//! │ 12.5│ 8192.0   │ 73.4│ 41.0 │ 2025-01-07 14:05 │ Tuesday │
//! └─────┴──────────┴─────┴──────┴──────────────────┴─────────┘
//!
//! Classic:
//! CPU , - , MEM TOTAL , RAM , DISK , TIME , CPU TEMP
//! ```
//!
//! Lines are at most [`MAX_LINE_LEN`] bytes. Anything longer is dropped
//! up to the next newline. A line with too few separators is rejected
//! as a whole; no snapshot is ever partially updated.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

pub mod line;
pub mod parser;
pub mod snapshot;

pub use line::{Line, LineAssembler, LineError, LINE_TERMINATOR, MAX_LINE_LEN};
pub use parser::{parse, percent, FieldName, LineFormat, ParseError, SEPARATOR};
pub use snapshot::{Field, Snapshot, FIELD_LEN};
