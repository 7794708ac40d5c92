//! Component-local stores for the three rendered lists.
//!
//! Each list owns one [`ListStore`]. A refresh spawns the fetch and delivers
//! the outcome through the store's updater; the UI applies it on the next
//! [`ListStore::sync`]. Refreshes are never cancelled, so when two overlap the
//! one that resolves last is what stays on screen.

use std::fmt;
use std::future::Future;

use points_admin_states::{RepaintHook, Store, spawn};

use crate::api::ApiResult;

/// Which list a refresh targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Users,
    PointConfigs,
    PointsLog,
}

impl ListKind {
    pub const ALL: [Self; 3] = [Self::Users, Self::PointConfigs, Self::PointsLog];

    pub fn label(self) -> &'static str {
        match self {
            Self::Users => "users list",
            Self::PointConfigs => "points config list",
            Self::PointsLog => "points log",
        }
    }
}

/// Outcome of the most recent refresh of a list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListResult<T> {
    /// Nothing has been fetched yet.
    Idle,
    Loaded(Vec<T>),
    Error(String),
}

impl<T> Default for ListResult<T> {
    fn default() -> Self {
        Self::Idle
    }
}

pub struct ListStore<T> {
    kind: ListKind,
    store: Store<ListResult<T>>,
}

impl<T: Send + 'static> ListStore<T> {
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            store: Store::new(ListResult::Idle),
        }
    }

    pub fn set_repaint(&mut self, hook: RepaintHook) {
        self.store.set_repaint(hook);
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Run `fetch` in the background and replace the list with its outcome.
    ///
    /// The previous contents stay visible until the outcome is synced.
    pub fn refresh<F>(&mut self, fetch: F)
    where
        F: Future<Output = ApiResult<Vec<T>>> + Send + 'static,
    {
        let kind = self.kind;
        let updater = self.store.begin();
        spawn(async move {
            let result = match fetch.await {
                Ok(items) => {
                    log::debug!("{} loaded {} items", kind.label(), items.len());
                    ListResult::Loaded(items)
                }
                Err(err) => {
                    log::warn!("{} failed to load: {err}", kind.label());
                    ListResult::Error(err.to_string())
                }
            };
            updater.set(result);
        });
    }

    /// Apply delivered outcomes. Returns how many were applied.
    pub fn sync(&mut self) -> usize {
        self.store.sync()
    }

    pub fn result(&self) -> &ListResult<T> {
        self.store.get()
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_pending()
    }

    /// Number of refresh outcomes applied so far.
    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    pub fn items(&self) -> Option<&[T]> {
        match self.store.get() {
            ListResult::Loaded(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self.store.get() {
            ListResult::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ListStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListStore")
            .field("kind", &self.kind)
            .field("store", &self.store)
            .finish()
    }
}
