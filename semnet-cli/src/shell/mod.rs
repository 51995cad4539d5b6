//! Interaction shell: validated command objects run against an owned [`GraphStore`].
//!
//! Re-exports [`Command`], [`Notification`], [`Level`] and [`Shell`].
//!
//! [`GraphStore`]: semnet::GraphStore

mod command;
mod notification;
mod session;

pub use command::Command;
pub use notification::{Level, Notification};
pub use session::Shell;
