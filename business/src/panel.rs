//! The admin panel as a whole: API client, forms, the three list stores and
//! the notification center, wired together.
//!
//! The UI owns one [`AdminPanel`], calls [`AdminPanel::sync`] at the start of
//! every frame, and reads the render helpers to paint.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};
use points_admin_states::RepaintHook;
use ustr::Ustr;

use crate::BusinessConfig;
use crate::api::PointsApi;
use crate::forms::FormController;
use crate::lists::{ListKind, ListStore};
use crate::models::{PointConfig, PointsLogEntry, PointsLogQuery, User};
use crate::notify::{NotificationCenter, NotificationKind};
use crate::render::{
    LogItem, PointConfigRow, Rendered, UserRow, render_point_configs, render_points_log,
    render_users,
};

#[derive(Debug)]
pub struct AdminPanel {
    api: PointsApi,
    pub forms: FormController,
    users: ListStore<User>,
    point_configs: ListStore<PointConfig>,
    points_log: ListStore<PointsLogEntry>,
    log_query: PointsLogQuery,
    notifications: NotificationCenter,
}

impl AdminPanel {
    pub fn new(config: &BusinessConfig) -> Self {
        Self::with_api(config, PointsApi::new(config))
    }

    pub fn with_api(config: &BusinessConfig, api: PointsApi) -> Self {
        Self {
            api,
            forms: FormController::new(),
            users: ListStore::new(ListKind::Users),
            point_configs: ListStore::new(ListKind::PointConfigs),
            points_log: ListStore::new(ListKind::PointsLog),
            log_query: PointsLogQuery::default(),
            notifications: NotificationCenter::from_config(config),
        }
    }

    /// Wake the UI whenever a background request completes.
    pub fn set_repaint(&mut self, hook: RepaintHook) {
        self.forms.set_repaint(hook.clone());
        self.users.set_repaint(hook.clone());
        self.point_configs.set_repaint(hook.clone());
        self.points_log.set_repaint(hook);
    }

    /// Initial load: every list fetches once.
    pub fn load_all(&mut self) {
        for kind in ListKind::ALL {
            self.refresh(kind);
        }
    }

    pub fn refresh(&mut self, kind: ListKind) {
        let api = self.api.clone();
        match kind {
            ListKind::Users => self.users.refresh(async move { api.list_users().await }),
            ListKind::PointConfigs => self
                .point_configs
                .refresh(async move { api.list_point_configs().await }),
            ListKind::PointsLog => {
                let query = self.log_query.clone();
                self.points_log
                    .refresh(async move { api.list_points_log(&query).await });
            }
        }
    }

    /// Filters applied to subsequent points log refreshes.
    pub fn set_log_query(&mut self, query: PointsLogQuery) {
        self.log_query = query;
    }

    pub fn submit_points_config(&mut self) {
        self.forms.submit_points_config(&self.api);
    }

    pub fn submit_points_grant(&mut self) {
        self.forms.submit_points_grant(&self.api);
    }

    /// Row action on the users table.
    pub fn fill_grant_form(&mut self, username: Ustr) {
        self.forms.grant.fill_username(username);
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind, now: DateTime<Utc>) {
        self.notifications.notify(message, kind, now);
    }

    /// Apply everything delivered since the last frame and expire toasts.
    ///
    /// Returns true when anything visible changed.
    pub fn sync(&mut self, now: DateTime<Utc>) -> bool {
        let mut changed = false;

        for outcome in self.forms.sync() {
            changed = true;
            match outcome.result {
                Ok(()) => {
                    self.notifications.notify(
                        outcome.form.success_message(),
                        NotificationKind::Success,
                        now,
                    );
                    for kind in outcome.form.dependent_lists() {
                        self.refresh(*kind);
                    }
                }
                Err(err) => {
                    log::warn!("{:?} submission failed: {err}", outcome.form);
                    self.notifications
                        .notify(err.to_string(), NotificationKind::Error, now);
                }
            }
        }

        changed |= self.users.sync() > 0;
        changed |= self.point_configs.sync() > 0;
        changed |= self.points_log.sync() > 0;
        changed |= self.notifications.prune(now) > 0;
        changed
    }

    /// Whether any submission or list load is still outstanding.
    pub fn has_pending_requests(&self) -> bool {
        self.forms.any_submitting() || ListKind::ALL.into_iter().any(|kind| self.is_loading(kind))
    }

    pub fn users(&self) -> &ListStore<User> {
        &self.users
    }

    pub fn point_configs(&self) -> &ListStore<PointConfig> {
        &self.point_configs
    }

    pub fn points_log(&self) -> &ListStore<PointsLogEntry> {
        &self.points_log
    }

    pub fn is_loading(&self, kind: ListKind) -> bool {
        match kind {
            ListKind::Users => self.users.is_loading(),
            ListKind::PointConfigs => self.point_configs.is_loading(),
            ListKind::PointsLog => self.points_log.is_loading(),
        }
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn users_view<Tz>(&self, tz: &Tz) -> Rendered<UserRow>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        render_users(self.users.result(), tz)
    }

    pub fn point_configs_view(&self) -> Rendered<PointConfigRow> {
        render_point_configs(self.point_configs.result())
    }

    pub fn points_log_view<Tz>(&self, tz: &Tz) -> Rendered<LogItem>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        render_points_log(self.points_log.result(), tz)
    }
}
