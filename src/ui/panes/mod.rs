//! TUI pane rendering modules
//!
//! Stateless render functions, one per screen region:
//!
//! - [`stack`]: the numbered stack listing
//! - [`prompt`]: the pending input buffer after the `> ` marker
//! - [`status`]: status bar with the last action's outcome and keybindings
//! - [`help`]: the full-screen operator legend

pub mod help;
pub mod prompt;
pub mod stack;
pub mod status;

// Re-export render functions for convenience
pub use help::render_help;
pub use prompt::render_prompt;
pub use stack::render_stack_pane;
pub use status::render_status_bar;
