//! Karaoke song listings.
//!
//! Scans a tree of UltraStar song descriptors, optionally joins the high
//! scores kept in the UltraStar database, and prints a sorted, filtered and
//! formatted listing to PDF.

pub mod config;
pub mod error;
pub mod library;
pub mod render;
pub mod runtime;
pub mod scores;

pub use error::{Error, Result};
