use serde::{Deserialize, Serialize};
use time::format_description::{self, OwnedFormatItem};
use time::{OffsetDateTime, UtcOffset};

use crate::error::AppError;

/// Renders the values substituted into outage text.
///
/// Injected wherever a title or description is rendered so callers decide locale,
/// timezone and wording.
pub trait OutageFormatter {
    fn format_timestamp(&self, timestamp: i64) -> String;
    fn format_duration(&self, seconds: i64) -> String;
}

pub const DEFAULT_DATETIME_FORMAT: &str =
    "[weekday repr:short], [day] [month repr:short] [year], [hour repr:12]:[minute] [period]";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FormatConfig {
    /// `time` format description used for `{{start}}` and `{{stop}}`.
    pub datetime_format: String,
    /// Fixed display offset from UTC.
    pub utc_offset_seconds: i32,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
            utc_offset_seconds: 0,
        }
    }
}

impl FormatConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, AppError> {
        serde_json::from_str(raw).map_err(|e| {
            AppError::new("OUTAGE_CONFIG_PARSE_FAILED", "Failed to parse format config")
                .with_details(e.to_string())
        })
    }
}

/// Default formatter backed by the `time` crate.
#[derive(Debug, Clone)]
pub struct TimeFormatter {
    items: OwnedFormatItem,
    offset: UtcOffset,
}

impl TimeFormatter {
    pub fn new(config: &FormatConfig) -> Result<Self, AppError> {
        let items = format_description::parse_owned::<1>(&config.datetime_format).map_err(|e| {
            AppError::new("OUTAGE_FORMAT_INVALID", "Invalid date-time display format")
                .with_details(format!("fmt={}; err={e}", config.datetime_format))
        })?;
        let offset = UtcOffset::from_whole_seconds(config.utc_offset_seconds).map_err(|e| {
            AppError::new("OUTAGE_OFFSET_INVALID", "Invalid display UTC offset")
                .with_details(format!("offset={}; err={e}", config.utc_offset_seconds))
        })?;
        Ok(Self { items, offset })
    }
}

impl OutageFormatter for TimeFormatter {
    fn format_timestamp(&self, timestamp: i64) -> String {
        let formatted = OffsetDateTime::from_unix_timestamp(timestamp)
            .map_err(|e| e.to_string())
            .and_then(|dt| {
                dt.to_offset(self.offset)
                    .format(&self.items)
                    .map_err(|e| e.to_string())
            });
        match formatted {
            Ok(s) => s,
            Err(err) => {
                tracing::warn!(target: "outage_core::format", timestamp, %err, "cannot format timestamp");
                timestamp.to_string()
            }
        }
    }

    fn format_duration(&self, seconds: i64) -> String {
        format_duration(seconds)
    }
}

/// Human-readable elapsed time, e.g. `1 hour 30 minutes`.
///
/// Zero components are dropped. Negative durations get a leading `-`.
pub fn format_duration(seconds: i64) -> String {
    if seconds == 0 {
        return "0 seconds".to_string();
    }

    let mut rest = seconds.unsigned_abs();
    let mut parts = Vec::new();
    for (unit_secs, singular, plural) in [
        (86_400, "day", "days"),
        (3_600, "hour", "hours"),
        (60, "minute", "minutes"),
        (1, "second", "seconds"),
    ] {
        let n = rest / unit_secs;
        rest %= unit_secs;
        if n > 0 {
            parts.push(format!("{n} {}", if n == 1 { singular } else { plural }));
        }
    }

    let joined = parts.join(" ");
    if seconds < 0 {
        format!("-{joined}")
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_components() {
        assert_eq!(format_duration(0), "0 seconds");
        assert_eq!(format_duration(1), "1 second");
        assert_eq!(format_duration(3600), "1 hour");
        assert_eq!(format_duration(5400), "1 hour 30 minutes");
        assert_eq!(format_duration(90_061), "1 day 1 hour 1 minute 1 second");
        assert_eq!(format_duration(-7200), "-2 hours");
    }

    #[test]
    fn duration_handles_extremes() {
        assert!(format_duration(i64::MIN).starts_with('-'));
    }
}
