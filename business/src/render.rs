//! Row view models for the three lists.
//!
//! The UI paints whatever these produce, so everything user-visible about a
//! row (text, sign, tone, timestamp format, failure placeholder) is decided
//! here and can be tested without a frame.

use std::fmt::Display;

use chrono::TimeZone;

use crate::lists::ListResult;
use crate::models::{PointConfig, PointsLogEntry, Timestamp, User};

/// Prefix of the single placeholder shown when a list fails to load.
pub const LOAD_FAILED_PREFIX: &str = "加载失败：";

/// Label of the per-row action on the users table.
pub const GRANT_ACTION_LABEL: &str = "积分操作";

pub const USERS_HEADERS: [&str; 5] = ["用户名", "登录方式", "注册时间", "积分", "操作"];
pub const POINT_CONFIGS_HEADERS: [&str; 3] = ["文件路径", "积分", "描述"];

/// Shown for timestamps the backend sent in an unreadable form.
pub const INVALID_DATE: &str = "Invalid Date";

/// Visual weight of a value: credits and successes versus debits and failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
}

/// What a list container shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered<R> {
    Rows(Vec<R>),
    /// Exactly one placeholder, already prefixed with [`LOAD_FAILED_PREFIX`].
    Failed(String),
}

impl<R> Rendered<R> {
    pub fn from_result<T>(result: &ListResult<T>, mut render_row: impl FnMut(&T) -> R) -> Self {
        match result {
            ListResult::Idle => Self::Rows(Vec::new()),
            ListResult::Loaded(items) => Self::Rows(items.iter().map(&mut render_row).collect()),
            ListResult::Error(message) => Self::Failed(load_failed(message)),
        }
    }

    pub fn rows(&self) -> &[R] {
        match self {
            Self::Rows(rows) => rows,
            Self::Failed(_) => &[],
        }
    }
}

pub fn load_failed(message: &str) -> String {
    format!("{LOAD_FAILED_PREFIX}{message}")
}

/// `+50分` / `-20分`. Zero counts as a credit.
pub fn format_points_delta(points: i64) -> (String, Tone) {
    if points >= 0 {
        (format!("+{points}分"), Tone::Success)
    } else {
        (format!("{points}分"), Tone::Failure)
    }
}

pub fn format_timestamp<Tz>(timestamp: &Timestamp, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match timestamp {
        Timestamp::At(at) => at.with_timezone(tz).format("%Y/%m/%d %H:%M:%S").to_string(),
        Timestamp::Invalid(_) => INVALID_DATE.to_owned(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub username: String,
    pub provider: String,
    pub created_at: String,
    pub points: String,
}

impl UserRow {
    pub fn new<Tz>(user: &User, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            username: user.username.clone(),
            provider: user.provider.clone(),
            created_at: format_timestamp(&user.created_at, tz),
            points: user.points.to_string(),
        }
    }

    pub fn cells(&self) -> [&str; 4] {
        [
            self.username.as_str(),
            self.provider.as_str(),
            self.created_at.as_str(),
            self.points.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointConfigRow {
    pub file_url: String,
    pub points: String,
    pub description: String,
}

impl PointConfigRow {
    pub fn new(config: &PointConfig) -> Self {
        Self {
            file_url: config.file_url.clone(),
            points: config.points.to_string(),
            description: if config.description.is_empty() {
                "-".to_owned()
            } else {
                config.description.clone()
            },
        }
    }

    pub fn cells(&self) -> [&str; 3] {
        [
            self.file_url.as_str(),
            self.points.as_str(),
            self.description.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogItem {
    pub user_id: String,
    /// The description, or the file path when there is none.
    pub summary: String,
    pub amount: String,
    pub tone: Tone,
    pub created_at: String,
}

impl LogItem {
    pub fn new<Tz>(entry: &PointsLogEntry, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let (amount, tone) = format_points_delta(entry.points);
        Self {
            user_id: entry.user_id.clone(),
            summary: if entry.description.is_empty() {
                entry.file_url.clone()
            } else {
                entry.description.clone()
            },
            amount,
            tone,
            created_at: format_timestamp(&entry.created_at, tz),
        }
    }
}

pub fn render_users<Tz>(result: &ListResult<User>, tz: &Tz) -> Rendered<UserRow>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    Rendered::from_result(result, |user| UserRow::new(user, tz))
}

pub fn render_point_configs(result: &ListResult<PointConfig>) -> Rendered<PointConfigRow> {
    Rendered::from_result(result, PointConfigRow::new)
}

pub fn render_points_log<Tz>(result: &ListResult<PointsLogEntry>, tz: &Tz) -> Rendered<LogItem>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    Rendered::from_result(result, |entry| LogItem::new(entry, tz))
}
