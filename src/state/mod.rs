//! Application state module

mod forms;
mod notifications;
mod panel_state;
mod style;

pub use forms::*;
pub use notifications::*;
pub use panel_state::*;
pub use style::*;
