//! Small state plumbing shared by the points admin crates.
//!
//! A [`Store`] owns the latest value of one piece of UI state. Background tasks
//! hold an [`Updater`] and deliver new values over a `flume` channel; the UI
//! thread applies them with [`Store::sync`] once per frame. Tasks are started
//! with [`spawn`], which picks tokio on native and `spawn_local` on wasm.

mod store;
mod task;

pub use store::{RepaintHook, Store, Updater};
pub use task::spawn;
