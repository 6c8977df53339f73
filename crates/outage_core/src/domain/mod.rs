use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::AppError;
use crate::format::OutageFormatter;
use crate::placeholders::render_placeholders;

/// A scheduled service outage.
///
/// Notes:
/// - All timestamps are unix seconds. Unknown values remain `None`; they are never
///   defaulted to zero.
/// - `warntime <= starttime <= stoptime` is expected but not enforced here. Use
///   `validate::validate_outage` to surface violations as warnings.
/// - `title` is plain text, `description` may carry HTML. Both may contain the
///   `{{start}}`, `{{stop}}` and `{{duration}}` placeholders.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Outage {
    pub id: Option<i64>,
    pub starttime: Option<i64>,
    pub stoptime: Option<i64>,
    pub warntime: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub createdby: Option<i64>,
    pub modifiedby: Option<i64>,
    pub lastmodified: Option<i64>,
}

/// Resolve an optional reference time, rejecting non-positive timestamps.
fn reference_time(time: Option<i64>) -> Result<i64, AppError> {
    match time {
        None => Ok(OffsetDateTime::now_utc().unix_timestamp()),
        Some(t) if t > 0 => Ok(t),
        Some(t) => Err(AppError::invalid_time(t)),
    }
}

/// `from <= t < to`, false when either bound is unknown.
fn within(from: Option<i64>, to: Option<i64>, t: i64) -> bool {
    let (Some(from), Some(to)) = (from, to) else {
        return false;
    };
    from <= t && t < to
}

impl Outage {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the outage is in its warning period or ongoing: `warntime <= t < stoptime`.
    ///
    /// `time` defaults to now. An outage missing `warntime` or `stoptime` is never active.
    pub fn is_active(&self, time: Option<i64>) -> Result<bool, AppError> {
        let t = reference_time(time)?;
        Ok(within(self.warntime, self.stoptime, t))
    }

    /// True while the outage itself is in effect: `starttime <= t < stoptime`.
    pub fn is_ongoing(&self, time: Option<i64>) -> Result<bool, AppError> {
        let t = reference_time(time)?;
        Ok(within(self.starttime, self.stoptime, t))
    }

    /// True during `[warntime, starttime)`.
    pub fn is_in_warning_period(&self, time: Option<i64>) -> Result<bool, AppError> {
        let t = reference_time(time)?;
        Ok(within(self.warntime, self.starttime, t))
    }

    pub fn has_ended(&self, time: Option<i64>) -> Result<bool, AppError> {
        let t = reference_time(time)?;
        Ok(self.stoptime.is_some_and(|stop| stop <= t))
    }

    /// Planned length in seconds. May be negative when the window is misordered.
    ///
    /// `None` when either bound is unset or the difference does not fit in an `i64`.
    pub fn get_duration(&self) -> Option<i64> {
        self.stoptime?.checked_sub(self.starttime?)
    }

    /// Length of the warning period in seconds. May be negative when misordered.
    ///
    /// `None` when either bound is unset or the difference does not fit in an `i64`.
    pub fn get_warning_duration(&self) -> Option<i64> {
        self.starttime?.checked_sub(self.warntime?)
    }

    pub fn get_title(&self, formatter: &impl OutageFormatter) -> Option<String> {
        self.title
            .as_deref()
            .map(|text| render_placeholders(text, self, formatter))
    }

    pub fn get_description(&self, formatter: &impl OutageFormatter) -> Option<String> {
        self.description
            .as_deref()
            .map(|text| render_placeholders(text, self, formatter))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationWarning {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl ValidationWarning {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
