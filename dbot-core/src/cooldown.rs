//! Cooldown specification attached to a handler: duration, unit and scope.

use std::fmt;
use thiserror::Error;

/// Identity axis a cooldown window is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    User,
    Channel,
    Guild,
    Unknown,
}

impl Scope {
    /// Case-insensitive parse; anything other than user/channel/guild is [`Scope::Unknown`].
    pub fn parse(scope: &str) -> Scope {
        match scope.trim().to_ascii_lowercase().as_str() {
            "user" => Scope::User,
            "channel" => Scope::Channel,
            "guild" => Scope::Guild,
            _ => Scope::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scope::User => "user",
            Scope::Channel => "channel",
            Scope::Guild => "guild",
            Scope::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit of a cooldown duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Unknown,
}

impl TimeUnit {
    /// Case-insensitive parse; anything other than seconds/minutes/hours/days is [`TimeUnit::Unknown`].
    pub fn parse(unit: &str) -> TimeUnit {
        match unit.trim().to_ascii_lowercase().as_str() {
            "seconds" => TimeUnit::Seconds,
            "minutes" => TimeUnit::Minutes,
            "hours" => TimeUnit::Hours,
            "days" => TimeUnit::Days,
            _ => TimeUnit::Unknown,
        }
    }

    /// Milliseconds in one unit. [`TimeUnit::Unknown`] is 0, so a misconfigured cooldown never limits.
    pub fn millis(self) -> i64 {
        match self {
            TimeUnit::Seconds => 1_000,
            TimeUnit::Minutes => 60_000,
            TimeUnit::Hours => 3_600_000,
            TimeUnit::Days => 86_400_000,
            TimeUnit::Unknown => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
            TimeUnit::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a cooldown spec was rejected when strict validation is enabled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CooldownSpecError {
    #[error("cooldown duration must be positive")]
    ZeroDuration,

    #[error("cooldown time unit is unknown")]
    UnknownUnit,

    #[error("cooldown scope is unknown")]
    UnknownScope,
}

/// Immutable rate-limit configuration of one handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownSpec {
    pub duration: u32,
    pub unit: TimeUnit,
    pub scope: Scope,
}

impl CooldownSpec {
    pub fn new(duration: u32, unit: TimeUnit, scope: Scope) -> Self {
        Self {
            duration,
            unit,
            scope,
        }
    }

    /// Length of one window in milliseconds.
    pub fn duration_ms(&self) -> i64 {
        i64::from(self.duration) * self.unit.millis()
    }

    /// e.g. `"5 seconds"`.
    pub fn time_string(&self) -> String {
        format!("{} {}", self.duration, self.unit)
    }

    /// e.g. `"user"`.
    pub fn scope_string(&self) -> String {
        self.scope.to_string()
    }

    /// Strict check used when misconfigured cooldowns should be rejected at registration instead of failing open.
    pub fn validate(&self) -> std::result::Result<(), CooldownSpecError> {
        if self.duration == 0 {
            return Err(CooldownSpecError::ZeroDuration);
        }
        if self.unit == TimeUnit::Unknown {
            return Err(CooldownSpecError::UnknownUnit);
        }
        if self.scope == Scope::Unknown {
            return Err(CooldownSpecError::UnknownScope);
        }
        Ok(())
    }
}
