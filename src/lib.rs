//! Task bar model for a desktop-shell panel.
//!
//! Enumerates application windows across virtual workspaces and turns them
//! into an ordered list of [`model::RenderEntry`] values for a panel renderer
//! to materialize. Clicks and hovers on the rendered entries route back
//! through [`actor::Taskbar`] into activation requests against the host
//! shell's window management interface.

pub mod actor;
pub mod common;
pub mod model;
pub mod sys;

pub use actor::taskbar::{Event, Renderer, Taskbar};
pub use common::config::TaskbarSettings;
pub use model::window_list::{RenderEntry, WindowList, WindowVisual};
pub use sys::shell::{ShellCommands, ShellQueries, WindowId, WindowInfo};
