use std::future::Future;

/// Run a future in the background.
///
/// On native this needs an entered tokio runtime; without one the task is
/// dropped and an error is logged.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            drop(handle.spawn(future));
        }
        Err(err) => log::error!("cannot spawn task outside a tokio runtime: {err}"),
    }
}

/// Run a future in the background on the browser's event loop.
#[cfg(target_arch = "wasm32")]
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}
