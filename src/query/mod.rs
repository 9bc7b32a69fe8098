//! Condition-based explicit waits.
//!
//! [`Waiter`] blocks the calling thread, re-evaluating one condition at the configured
//! poll interval until it holds or the [`TimeoutTier`](crate::TimeoutTier) elapses.

pub mod conditions;
mod poller;
mod waiter;

pub use conditions::{ConditionKind, Target, Targets};
pub use poller::{ElementPoller, ElementPollerTicker};
pub use waiter::{DriverWaitable, Waiter};
