use std::fmt;
use std::sync::Arc;

use flume::{Receiver, Sender};

/// Callback used to wake the UI when a background task delivers a value.
pub type RepaintHook = Arc<dyn Fn() + Send + Sync>;

/// Latest-value store for a single piece of state.
///
/// Values sent through an [`Updater`] are queued until [`Store::sync`] is
/// called. When several values are queued, they are applied in arrival order,
/// so the last one to arrive is what remains visible.
pub struct Store<T> {
    value: T,
    revision: u64,
    in_flight: usize,
    send: Sender<T>,
    recv: Receiver<T>,
    repaint: Option<RepaintHook>,
}

impl<T> Store<T> {
    pub fn new(value: T) -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            value,
            revision: 0,
            in_flight: 0,
            send,
            recv,
            repaint: None,
        }
    }

    /// Install a hook that every [`Updater`] created afterwards calls after
    /// delivering a value.
    pub fn set_repaint(&mut self, hook: RepaintHook) {
        self.repaint = Some(hook);
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Number of delivered values applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether a task obtained through [`Store::begin`] has not delivered yet.
    pub fn is_pending(&self) -> bool {
        self.in_flight > 0
    }

    /// Updater that is not counted as an in-flight task.
    pub fn updater(&self) -> Updater<T> {
        Updater {
            send: self.send.clone(),
            repaint: self.repaint.clone(),
        }
    }

    /// Updater for a task that will deliver exactly one value.
    ///
    /// The store reports [`Store::is_pending`] until that value is synced.
    pub fn begin(&mut self) -> Updater<T> {
        self.in_flight += 1;
        self.updater()
    }

    /// Apply every delivered value. Returns how many were applied.
    pub fn sync(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(value) = self.recv.try_recv() {
            self.value = value;
            self.revision += 1;
            self.in_flight = self.in_flight.saturating_sub(1);
            applied += 1;
        }
        applied
    }
}

impl<T: Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("value", &self.value)
            .field("revision", &self.revision)
            .field("in_flight", &self.in_flight)
            .field("queued", &self.recv.len())
            .finish()
    }
}

/// Sending half of a [`Store`]; cheap to clone and `Send` for any `T: Send`.
pub struct Updater<T> {
    send: Sender<T>,
    repaint: Option<RepaintHook>,
}

impl<T> Clone for Updater<T> {
    fn clone(&self) -> Self {
        Self {
            send: self.send.clone(),
            repaint: self.repaint.clone(),
        }
    }
}

impl<T> fmt::Debug for Updater<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Updater")
            .field("repaint", &self.repaint.is_some())
            .finish()
    }
}

impl<T> Updater<T> {
    pub fn set(&self, value: T) {
        if self.send.send(value).is_err() {
            log::warn!("store dropped before its update was delivered");
            return;
        }
        if let Some(repaint) = &self.repaint {
            repaint();
        }
    }
}
