//! Terminal User Interface for Folio

pub mod app;
pub mod components;
pub mod state;
pub mod themes;

// Re-exports
pub use app::App;
