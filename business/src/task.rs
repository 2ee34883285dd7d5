//! Platform-abstracted task spawning.
//!
//! - On **native**: tasks run on the ambient Tokio runtime (`tokio::spawn`).
//! - On **WASM**: tasks run on the JS event loop (`wasm_bindgen_futures::spawn_local`).
//!
//! Results never come back through the returned handle; spawned work reports
//! through a `flume` channel that the UI thread drains.

use std::future::Future;

use crate::AuthError;

/// `Send` natively; no bound on wasm32, where client futures may hold JS values.
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSend: Send {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Send> MaybeSend for T {}

#[cfg(target_arch = "wasm32")]
pub trait MaybeSend {}
#[cfg(target_arch = "wasm32")]
impl<T> MaybeSend for T {}

/// Fails when there is nowhere to run a task, i.e. no Tokio runtime has been entered.
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_runtime() -> Result<(), AuthError> {
    tokio::runtime::Handle::try_current()
        .map(drop)
        .map_err(|err| AuthError::configuration(format!("no async runtime: {err}")))
}

#[cfg(target_arch = "wasm32")]
pub fn ensure_runtime() -> Result<(), AuthError> {
    Ok(())
}

/// Callers check [`ensure_runtime`] first; `tokio::spawn` panics without one.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + MaybeSend + 'static,
{
    // Fire and forget; completion is observed through the event channel.
    drop(tokio::spawn(future));
}

#[cfg(target_arch = "wasm32")]
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + MaybeSend + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}
