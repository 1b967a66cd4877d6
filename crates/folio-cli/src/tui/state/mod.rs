//! UI state components

mod scroll;

pub use scroll::ScrollView;
