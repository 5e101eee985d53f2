//! Behavior modes
//!
//! The behavior mode controls how strictly casts are enforced. One mode is
//! shared by the whole process; engines may pin their own (see
//! [`crate::CoercionEngine::with_mode`]).
//!
//! Writers are expected to serialize mode changes themselves. The setter only
//! guarantees that it returns the value it replaced.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use typecast_diagnostics::{CoercionError, Result};

/// How strictly casts are enforced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BehaviorMode {
    /// Return every value unchanged without validation
    #[serde(rename = "noop")]
    NoOp,
    /// Validate without converting (reserved)
    CheckOnly,
    /// Convert without validating (reserved)
    CastOnly,
    /// Validate and convert
    #[default]
    CheckAndCast,
}

impl BehaviorMode {
    /// Every mode, in code order
    pub const ALL: [BehaviorMode; 4] = [
        BehaviorMode::NoOp,
        BehaviorMode::CheckOnly,
        BehaviorMode::CastOnly,
        BehaviorMode::CheckAndCast,
    ];

    /// Legacy host code of this mode
    pub const fn code(&self) -> u8 {
        match self {
            BehaviorMode::NoOp => 1,
            BehaviorMode::CheckOnly => 2,
            BehaviorMode::CastOnly => 3,
            BehaviorMode::CheckAndCast => 4,
        }
    }

    /// Mode for a legacy host code
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(BehaviorMode::NoOp),
            2 => Some(BehaviorMode::CheckOnly),
            3 => Some(BehaviorMode::CastOnly),
            4 => Some(BehaviorMode::CheckAndCast),
            _ => None,
        }
    }

    /// Canonical name, as accepted by [`FromStr`]
    pub const fn name(&self) -> &'static str {
        match self {
            BehaviorMode::NoOp => "noop",
            BehaviorMode::CheckOnly => "check-only",
            BehaviorMode::CastOnly => "cast-only",
            BehaviorMode::CheckAndCast => "check-and-cast",
        }
    }

    /// Check whether casts under this mode have defined semantics
    pub const fn is_implemented(&self) -> bool {
        matches!(self, BehaviorMode::NoOp | BehaviorMode::CheckAndCast)
    }
}

impl fmt::Display for BehaviorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BehaviorMode {
    type Err = CoercionError;

    fn from_str(s: &str) -> Result<Self> {
        let folded = s.trim().to_ascii_lowercase().replace('_', "-");
        match folded.as_str() {
            "noop" | "no-op" => Ok(BehaviorMode::NoOp),
            "check-only" | "checkonly" => Ok(BehaviorMode::CheckOnly),
            "cast-only" | "castonly" => Ok(BehaviorMode::CastOnly),
            "check-and-cast" | "checkandcast" => Ok(BehaviorMode::CheckAndCast),
            _ => Err(CoercionError::configuration(format!(
                "Unknown behavior mode: {}",
                s
            ))),
        }
    }
}

static BEHAVIOR: AtomicU8 = AtomicU8::new(BehaviorMode::CheckAndCast.code());

/// Read the process-wide behavior mode
///
/// Fails if a raw code outside the enumeration was stored through
/// [`set_behavior_code`].
pub fn behavior_mode() -> Result<BehaviorMode> {
    let code = BEHAVIOR.load(Ordering::SeqCst);
    BehaviorMode::from_code(code)
        .ok_or_else(|| CoercionError::configuration(format!("Unknown Type behavior: {}", code)))
}

/// Set the process-wide behavior mode, returning the previous raw code
fn swap_code(code: u8) -> u8 {
    BEHAVIOR.swap(code, Ordering::SeqCst)
}

/// Set the process-wide behavior mode and return the previous one
///
/// If the previous value was an invalid raw code, the default mode is
/// reported in its place, so restoring from the return value does not bring
/// the invalid code back. Use [`set_behavior_code`] or [`ModeGuard`] when the
/// exact previous state must be restored.
pub fn set_behavior_mode(mode: BehaviorMode) -> BehaviorMode {
    let previous = swap_code(mode.code());
    if mode != BehaviorMode::CheckAndCast {
        log::warn!("behavior mode switched to {}", mode);
    }
    BehaviorMode::from_code(previous).unwrap_or_default()
}

/// Store a raw legacy code without validation and return the previous code
///
/// An invalid code is accepted here and rejected by the next cast.
pub fn set_behavior_code(code: u8) -> u8 {
    if BehaviorMode::from_code(code).is_none() {
        log::warn!("behavior mode set to unknown code {}", code);
    }
    swap_code(code)
}

/// Restores the previous behavior mode when dropped
///
/// ```ignore
/// let _guard = ModeGuard::set(BehaviorMode::NoOp);
/// // casts in this scope return their input unchanged
/// ```
#[must_use = "the previous mode is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ModeGuard {
    previous: u8,
}

impl ModeGuard {
    /// Switch to `mode` until the guard goes out of scope
    pub fn set(mode: BehaviorMode) -> Self {
        let previous = swap_code(mode.code());
        log::debug!("behavior mode scoped to {}", mode);
        Self { previous }
    }

    /// The mode that will be restored, if it was a valid one
    pub fn previous(&self) -> Option<BehaviorMode> {
        BehaviorMode::from_code(self.previous)
    }
}

impl Drop for ModeGuard {
    fn drop(&mut self) {
        swap_code(self.previous);
    }
}
