//! Persistent log sinks: the JSONL transcript and per-day CSV tables.

pub mod csv_table;
pub mod jsonl_transcript;
