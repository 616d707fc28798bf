//! Session lifecycle: the per-client session cache, login-flow selection, and the invoker that
//! re-authenticates once when a call comes back not authorized.

mod invoker;
mod login;
mod session;

pub use invoker::{AuthorizedActionInvoker, MAX_ATTEMPTS};
pub use login::LoginStrategySelector;
pub use session::SessionCache;
