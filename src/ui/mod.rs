//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: session state and the read-dispatch-render loop
//! - **[`panes`]**: stateless render functions for each screen region (stack,
//!   prompt, status bar, help)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Calculator`] and a clipboard sink, then call [`App::run`] with a terminal
//! and an [`InputSource`].
//!
//! [`Calculator`]: crate::calculator::Calculator
//! [`InputSource`]: crate::input::InputSource
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
