//! # Cooldown engine
//!
//! Tracks active cooldown windows keyed by (scope, target id, handler name) and answers "is this
//! invocation limited". A window is established by the first unlimited invocation and replaced only
//! after it has expired; hits during a window never extend it.
//!
//! ## State
//!
//! One [`DashMap`] per scope: target id → (handler name → expiry in epoch milliseconds).
//! The check and the window update for a target happen under that target's shard lock, so two
//! concurrent invocations for the same target and handler can never both pass.
//! Entries are never removed; the number of targets is bounded by the platform population.

mod clock;

pub use clock::{Clock, ManualClock, SystemClock};

use dashmap::DashMap;
use dbot_core::{CooldownSpec, Scope};
use std::collections::HashMap;
use tracing::debug;

type Windows = DashMap<String, HashMap<String, i64>>;

/// Owned cooldown state. Construct once and share by `Arc`; tests build isolated instances.
pub struct CooldownEngine<C: Clock = SystemClock> {
    clock: C,
    user: Windows,
    channel: Windows,
    guild: Windows,
}

impl CooldownEngine<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for CooldownEngine<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> CooldownEngine<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            user: DashMap::new(),
            channel: DashMap::new(),
            guild: DashMap::new(),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn windows(&self, scope: Scope) -> Option<&Windows> {
        match scope {
            Scope::User => Some(&self.user),
            Scope::Channel => Some(&self.channel),
            Scope::Guild => Some(&self.guild),
            Scope::Unknown => None,
        }
    }

    /// Returns true if `target_id` is inside an active window for `handler_name`.
    ///
    /// Without a spec, or with an unknown scope, this is always false. Otherwise, when no live
    /// window exists, a new one ending at `now + spec.duration_ms()` is recorded and false is
    /// returned: this invocation is the one that opens the window. The scope comes from `spec`.
    pub fn is_on_cooldown(
        &self,
        target_id: &str,
        handler_name: &str,
        spec: Option<&CooldownSpec>,
    ) -> bool {
        let Some(spec) = spec else {
            return false;
        };
        let Some(windows) = self.windows(spec.scope) else {
            return false;
        };

        let now = self.clock.now_millis();
        let candidate_expiry = now + spec.duration_ms();

        let mut target = windows.entry(target_id.to_string()).or_default();
        let live_expiry = target
            .get(handler_name)
            .copied()
            .filter(|&expiry| expiry > now);
        if let Some(expiry) = live_expiry {
            debug!(
                scope = %spec.scope,
                target_id = %target_id,
                handler = %handler_name,
                remaining_ms = expiry - now,
                "cooldown active"
            );
            return true;
        }
        target.insert(handler_name.to_string(), candidate_expiry);
        false
    }

    /// Stored expiry (epoch ms) of the window for `target_id` and `handler_name`, or 0 when there is none.
    pub fn end_time(&self, scope: Scope, target_id: &str, handler_name: &str) -> i64 {
        self.windows(scope)
            .and_then(|windows| {
                windows
                    .get(target_id)
                    .and_then(|target| target.get(handler_name).copied())
            })
            .unwrap_or(0)
    }

    /// Number of distinct targets that ever opened a window in `scope`.
    pub fn tracked_targets(&self, scope: Scope) -> usize {
        self.windows(scope).map(DashMap::len).unwrap_or(0)
    }
}

/// Platform relative-timestamp markup for an epoch-ms instant, rendered client-side as e.g. "in 5 minutes".
pub fn relative_timestamp(epoch_ms: i64) -> String {
    format!("<t:{}:R>", epoch_ms.div_euclid(1000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_timestamp_truncates_to_seconds() {
        assert_eq!(relative_timestamp(1_700_000_000_999), "<t:1700000000:R>");
        assert_eq!(relative_timestamp(0), "<t:0:R>");
    }

    #[test]
    fn test_end_time_unknown_scope_is_zero() {
        let engine = CooldownEngine::new();
        assert_eq!(engine.end_time(Scope::Unknown, "U1", "ping"), 0);
        assert_eq!(engine.tracked_targets(Scope::Unknown), 0);
    }
}
