//! Session queries, sign-out, and session-change notification.

mod errors;
mod facade;
mod types;

pub use errors::SessionError;
pub use facade::SessionFacade;
pub use types::{ListenerId, SessionEvent, SessionListener};
