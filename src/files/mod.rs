//! Sandboxed file serving
//!
//! This module maps request paths into the serve root, gates files by content
//! type, renders directory listings and tracks per-file hit counts.

pub mod handler;
pub mod hits;
pub mod listing;
pub mod mime;
pub mod resolve;
