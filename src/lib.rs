//! Den Den Ink - quick notes from the command line
//!
//! Stores short general and programming notes with tags in a local SQLite
//! file and answers recent, by-tag, search, and statistics queries.

pub mod config;
pub mod git;
pub mod input;
pub mod metadata;
pub mod stats;
pub mod storage;
