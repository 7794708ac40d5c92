//! Business layer of the points admin panel.
//!
//! Everything the panel does lives here so the UI crate only paints:
//! - [`api`]: typed client for the five `/api` endpoints
//! - [`forms`]: the configuration and grant forms and their submit flow
//! - [`lists`]: one store per rendered list
//! - [`render`]: row view models (text, sign, tone, timestamps)
//! - [`notify`]: transient toasts
//! - [`panel`]: [`AdminPanel`], which wires the above together

pub mod api;
mod config;
pub mod forms;
pub mod http;
pub mod lists;
pub mod models;
pub mod notify;
pub mod panel;
pub mod render;

pub use api::{ApiError, ApiResult, PointsApi};
pub use config::{BusinessConfig, ConfigError, DEFAULT_TOAST_MS, MAX_TOAST_MS};
pub use forms::{FormController, FormKind, GrantPointsForm, PointsConfigForm, SubmitOutcome};
pub use lists::{ListKind, ListResult, ListStore};
pub use models::{PointConfig, PointsLogEntry, PointsLogQuery, Timestamp, User};
pub use notify::{Notification, NotificationCenter, NotificationKind};
pub use panel::AdminPanel;
pub use render::{LogItem, PointConfigRow, Rendered, Tone, UserRow};
