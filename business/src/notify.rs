//! Transient toasts.
//!
//! Every toast lives for a fixed duration from the moment it was shown.
//! Toasts stack without coordination; an optional cap drops the oldest one
//! when a new toast would exceed it.

use chrono::{DateTime, Duration, Utc};

use crate::BusinessConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    next_id: u64,
    duration: Duration,
    cap: Option<usize>,
}

impl NotificationCenter {
    pub fn new(duration: Duration, cap: Option<usize>) -> Self {
        Self {
            items: Vec::new(),
            next_id: 0,
            duration,
            cap,
        }
    }

    pub fn from_config(config: &BusinessConfig) -> Self {
        Self::new(config.toast_duration, config.max_toasts)
    }

    /// Show `message` starting at `now`. Returns the toast's id.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now: DateTime<Utc>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        if let Some(cap) = self.cap
            && self.items.len() >= cap
        {
            let overflow = self.items.len() + 1 - cap;
            self.items.drain(..overflow);
        }

        self.items.push(Notification {
            id,
            message: message.into(),
            kind,
            expires_at: now
                .checked_add_signed(self.duration)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        });
        id
    }

    /// Remove every toast whose time is up. Returns how many were removed.
    pub fn prune(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.expires_at > now);
        before - self.items.len()
    }

    /// Toasts on screen, oldest first.
    pub fn visible(&self) -> &[Notification] {
        &self.items
    }

    /// When the next toast disappears, so the UI can schedule a repaint.
    pub fn next_expiry(&self) -> Option<DateTime<Utc>> {
        self.items.iter().map(|item| item.expires_at).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_toast_expires_after_three_seconds() {
        let mut center = NotificationCenter::from_config(&BusinessConfig::new(""));
        center.notify("配置保存成功", NotificationKind::Success, t0());

        assert_eq!(center.prune(t0() + Duration::milliseconds(2_999)), 0);
        assert_eq!(center.visible().len(), 1);

        assert_eq!(center.prune(t0() + Duration::seconds(3)), 1);
        assert!(center.visible().is_empty());
    }

    #[test]
    fn test_overlapping_toasts_stack_and_expire_independently() {
        let mut center = NotificationCenter::new(Duration::seconds(3), None);
        center.notify("first", NotificationKind::Success, t0());
        center.notify("second", NotificationKind::Error, t0() + Duration::seconds(2));

        assert_eq!(center.visible().len(), 2);
        assert_eq!(center.next_expiry(), Some(t0() + Duration::seconds(3)));

        center.prune(t0() + Duration::seconds(3));
        let remaining: Vec<_> = center.visible().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(remaining, ["second"]);
    }

    #[test]
    fn test_cap_drops_oldest() {
        let mut center = NotificationCenter::new(Duration::seconds(3), Some(2));
        for message in ["a", "b", "c"] {
            center.notify(message, NotificationKind::Error, t0());
        }

        let shown: Vec<_> = center.visible().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(shown, ["b", "c"]);
    }

    #[test]
    fn test_unbounded_duration_saturates_expiry() {
        let mut center = NotificationCenter::new(Duration::milliseconds(i64::MAX), None);
        center.notify("x", NotificationKind::Success, Utc::now());

        assert_eq!(center.next_expiry(), Some(DateTime::<Utc>::MAX_UTC));
        assert_eq!(center.prune(Utc::now()), 0);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut center = NotificationCenter::new(Duration::seconds(3), Some(1));
        let first = center.notify("a", NotificationKind::Success, t0());
        let second = center.notify("b", NotificationKind::Success, t0());
        assert_ne!(first, second);
    }
}
