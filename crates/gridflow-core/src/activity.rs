//! Activity kinds that can be placed from the palette.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Built-in name for the flow entry activity
pub const START: &str = "start";

/// Built-in name for the flow exit activity
pub const STOP: &str = "stop";

/// Built-in name for the message-sending activity
pub const SEND: &str = "send";

/// Built-in name for the message-receiving activity
pub const RECV: &str = "recv";

/// Built-in name for a generic work step
pub const ACTION: &str = "action";

/// Built-in name for a branching point
pub const DECISION: &str = "decision";

/// The kind of an activity node.
///
/// The set is closed: the palette offers exactly these kinds, and any other
/// name arriving from the transport layer is malformed input.
///
/// # Examples
///
/// ```
/// use gridflow_core::activity::ActivityKind;
///
/// let kind: ActivityKind = "recv".parse().unwrap();
/// assert_eq!(kind, ActivityKind::Recv);
/// assert_eq!(kind.to_string(), "recv");
/// assert!("teleport".parse::<ActivityKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ActivityKind {
    Start,
    Stop,
    Send,
    Recv,
    Action,
    Decision,
}

impl ActivityKind {
    /// Every kind, in palette order.
    pub const ALL: [ActivityKind; 6] = [
        ActivityKind::Start,
        ActivityKind::Stop,
        ActivityKind::Send,
        ActivityKind::Recv,
        ActivityKind::Action,
        ActivityKind::Decision,
    ];

    /// Returns the canonical lowercase name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            ActivityKind::Start => START,
            ActivityKind::Stop => STOP,
            ActivityKind::Send => SEND,
            ActivityKind::Recv => RECV,
            ActivityKind::Action => ACTION,
            ActivityKind::Decision => DECISION,
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name does not match any [`ActivityKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown activity kind `{0}`")]
pub struct UnknownActivityKind(pub String);

impl FromStr for ActivityKind {
    type Err = UnknownActivityKind;

    /// Parses a kind name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownActivityKind(s.to_string()))
    }
}

impl TryFrom<String> for ActivityKind {
    type Error = UnknownActivityKind;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}
