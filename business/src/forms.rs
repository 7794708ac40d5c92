//! The two operator forms and their submit flow.
//!
//! Submitting spawns the POST and returns immediately. The outcome comes back
//! through a channel and is applied by [`FormController::sync`] on the UI
//! thread: a success clears the originating form, a failure leaves it as typed.
//! Duplicate submits are not suppressed and nothing in flight is cancelled.

use flume::{Receiver, Sender};
use points_admin_states::{RepaintHook, spawn};
use ustr::Ustr;

use crate::api::{ApiResult, PointsApi};
use crate::lists::ListKind;
use crate::models::{ConfigurePointsRequest, GrantPointsRequest};

/// Parse a points field the way a browser's `parseInt` reads it.
///
/// Leading whitespace is skipped, a sign is allowed, then the longest run of
/// digits is taken and anything after it ignored (`"12abc"` is 12, `"1.5"` is
/// 1). A `0x` prefix switches to hexadecimal. `None` means "not a number":
/// there were no digits, or the value does not fit in an `i64`.
pub fn parse_points(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, unsigned),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = i64::from_str_radix(&digits[..end], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Which form a submission came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    PointsConfig,
    PointsGrant,
}

impl FormKind {
    /// Lists that must be reloaded after a successful submission.
    pub fn dependent_lists(self) -> &'static [ListKind] {
        match self {
            Self::PointsConfig => &[ListKind::PointConfigs],
            Self::PointsGrant => &[ListKind::Users, ListKind::PointsLog],
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::PointsConfig => "配置保存成功",
            Self::PointsGrant => "积分操作成功",
        }
    }
}

/// Points configuration form: file path, point value, optional description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointsConfigForm {
    pub file_url: String,
    pub points: String,
    pub description: String,
}

impl PointsConfigForm {
    pub fn to_request(&self) -> ConfigurePointsRequest {
        ConfigurePointsRequest {
            file_url: self.file_url.clone(),
            points: parse_points(&self.points),
            description: self.description.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Grant form: credit (positive) or debit (negative) a user's balance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrantPointsForm {
    pub username: String,
    pub points: String,
    pub description: String,
    focus_points: bool,
}

impl GrantPointsForm {
    pub fn to_request(&self) -> GrantPointsRequest {
        GrantPointsRequest {
            username: self.username.clone(),
            points: parse_points(&self.points),
            description: self.description.clone(),
        }
    }

    /// Pre-fill the username from a users-table row and ask for focus on the
    /// points field.
    pub fn fill_username(&mut self, username: Ustr) {
        self.username = username.to_string();
        self.focus_points = true;
    }

    /// Consume a pending focus request; the UI calls this once per frame.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_points)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Result of one submission, delivered back to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub form: FormKind,
    pub result: ApiResult<()>,
}

pub struct FormController {
    pub points_config: PointsConfigForm,
    pub grant: GrantPointsForm,
    config_in_flight: usize,
    grant_in_flight: usize,
    send: Sender<SubmitOutcome>,
    recv: Receiver<SubmitOutcome>,
    repaint: Option<RepaintHook>,
}

impl Default for FormController {
    fn default() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            points_config: PointsConfigForm::default(),
            grant: GrantPointsForm::default(),
            config_in_flight: 0,
            grant_in_flight: 0,
            send,
            recv,
            repaint: None,
        }
    }
}

impl std::fmt::Debug for FormController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormController")
            .field("points_config", &self.points_config)
            .field("grant", &self.grant)
            .field("config_in_flight", &self.config_in_flight)
            .field("grant_in_flight", &self.grant_in_flight)
            .finish()
    }
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_repaint(&mut self, hook: RepaintHook) {
        self.repaint = Some(hook);
    }

    /// Whether a submission of `form` has not come back yet.
    pub fn is_submitting(&self, form: FormKind) -> bool {
        match form {
            FormKind::PointsConfig => self.config_in_flight > 0,
            FormKind::PointsGrant => self.grant_in_flight > 0,
        }
    }

    pub fn any_submitting(&self) -> bool {
        self.config_in_flight > 0 || self.grant_in_flight > 0
    }

    fn in_flight_mut(&mut self, form: FormKind) -> &mut usize {
        match form {
            FormKind::PointsConfig => &mut self.config_in_flight,
            FormKind::PointsGrant => &mut self.grant_in_flight,
        }
    }

    /// POST the points configuration form as it stands.
    pub fn submit_points_config(&mut self, api: &PointsApi) {
        let body = self.points_config.to_request();
        if body.points.is_none() {
            log::warn!(
                "points {:?} is not a number; sending null",
                self.points_config.points
            );
        }

        let api = api.clone();
        self.dispatch(FormKind::PointsConfig, async move {
            api.configure_points(&body).await
        });
    }

    /// POST the grant form as it stands.
    pub fn submit_points_grant(&mut self, api: &PointsApi) {
        let body = self.grant.to_request();
        if body.points.is_none() {
            log::warn!(
                "points {:?} is not a number; sending null",
                self.grant.points
            );
        }

        let api = api.clone();
        self.dispatch(FormKind::PointsGrant, async move {
            api.grant_points(&body).await
        });
    }

    fn dispatch<F>(&mut self, form: FormKind, request: F)
    where
        F: std::future::Future<Output = ApiResult<()>> + Send + 'static,
    {
        *self.in_flight_mut(form) += 1;
        let send = self.send.clone();
        let repaint = self.repaint.clone();
        spawn(async move {
            let result = request.await;
            if send.send(SubmitOutcome { form, result }).is_err() {
                log::warn!("form controller dropped before {form:?} completed");
                return;
            }
            if let Some(repaint) = repaint {
                repaint();
            }
        });
    }

    /// Apply delivered outcomes: clear forms that succeeded.
    ///
    /// Returns the outcomes in arrival order so the caller can notify and
    /// refresh dependent lists.
    pub fn sync(&mut self) -> Vec<SubmitOutcome> {
        let outcomes: Vec<SubmitOutcome> = self.recv.try_iter().collect();
        for outcome in &outcomes {
            let in_flight = self.in_flight_mut(outcome.form);
            *in_flight = in_flight.saturating_sub(1);
            if outcome.result.is_ok() {
                match outcome.form {
                    FormKind::PointsConfig => self.points_config.reset(),
                    FormKind::PointsGrant => self.grant.reset(),
                }
            }
        }
        outcomes
    }
}
