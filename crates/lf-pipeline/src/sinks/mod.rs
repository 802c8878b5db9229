//! Persistence sinks for the load stage.
//!
//! Each sub-module writes the full record set to one destination; the load
//! stage decides which of them run and how their failures are isolated.

pub mod csv_file;
pub mod postgres;
pub mod spreadsheet;
