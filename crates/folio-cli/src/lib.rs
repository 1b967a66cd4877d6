//! Folio - a terminal book reader
//!
//! The TUI surface: styled text area, scrollable panel, themes, and the
//! reader application shell.

pub mod tui;
