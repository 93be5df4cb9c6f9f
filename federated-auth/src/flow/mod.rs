//! Sign-in flow orchestration: request construction, the flow state
//! machine, and normalization of backend results.

mod classify;
mod controller;
mod request;
mod types;

pub use controller::SignInFlowController;
pub use request::build_provider_request;
pub use types::{FlowState, ProviderRequest, SignInFailureKind, SignInOutcome};
