//! UI components for the Folio TUI
//!
//! The styled text area, the scrollable panel that owns it, and the
//! scrollbar renderer.

pub mod scrollbars;
pub mod text_area;
pub mod text_panel;

pub use scrollbars::render_scrollbar;
pub use text_area::{Pos, StyledTextArea, Tag, TagRange};
pub use text_panel::ScrollableTextPanel;
