pub mod data;
pub mod domain;
pub mod infra;
pub mod state;

use std::future::Future;
use tokio::runtime::Runtime;

lazy_static::lazy_static! {
    static ref RUNTIME: Runtime = Runtime::new().expect("Failed to create Tokio runtime");
}

/// Run a future to completion on the shared runtime.
///
/// The data layer itself is synchronous; the suggestion client is the only
/// operation that suspends, and synchronous callers drive it through here.
pub fn block_on<F: Future>(future: F) -> F::Output {
    RUNTIME.block_on(future)
}
