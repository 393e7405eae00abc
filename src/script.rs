// SPDX-License-Identifier: MPL-2.0
//! Line-oriented text form of the inbound gesture events.
//!
//! ```text
//! # zoom in and pan around
//! double-tap
//! drag 50 30
//! drag-end
//! pinch 7.2
//! pinch-end
//! zoom out
//! zoom reset
//! drawer
//! select 2
//! info
//! ```
//!
//! Blank lines and `#` comments are ignored.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::domain::page::PageId;
use crate::domain::viewport::ZoomDirection;
use crate::error::{Error, Result};
use crate::viewer::arbiter::GestureEvent;

/// Why a single event line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEventError {
    #[error("unknown event `{0}`")]
    UnknownEvent(String),

    #[error("`{event}` expects {expected}")]
    WrongArguments {
        event: &'static str,
        expected: &'static str,
    },

    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    #[error("unknown zoom action `{0}` (expected in, out or reset)")]
    UnknownZoomAction(String),
}

/// A parsed event with the 1-based line it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptStep {
    pub line: usize,
    pub event: GestureEvent,
}

fn parse_f32(raw: &str) -> std::result::Result<f32, ParseEventError> {
    raw.parse()
        .map_err(|_| ParseEventError::InvalidNumber(raw.to_string()))
}

impl FromStr for GestureEvent {
    type Err = ParseEventError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let Some((&name, args)) = tokens.split_first() else {
            return Err(ParseEventError::UnknownEvent(String::new()));
        };

        let event = match (name, args) {
            ("double-tap", []) => GestureEvent::DoubleTap,
            ("drag", [dx, dy]) => GestureEvent::DragChanged {
                dx: parse_f32(dx)?,
                dy: parse_f32(dy)?,
            },
            ("drag-end", []) => GestureEvent::DragEnded,
            ("pinch", [magnitude]) => GestureEvent::PinchChanged {
                magnitude: parse_f32(magnitude)?,
            },
            ("pinch-end", []) => GestureEvent::PinchEnded,
            ("zoom", ["in"]) => GestureEvent::ZoomButton(ZoomDirection::In),
            ("zoom", ["out"]) => GestureEvent::ZoomButton(ZoomDirection::Out),
            ("zoom", ["reset"]) => GestureEvent::ZoomResetButton,
            ("zoom", [other]) => return Err(ParseEventError::UnknownZoomAction((*other).to_string())),
            ("drawer", []) => GestureEvent::DrawerToggle,
            ("info", []) => GestureEvent::InfoPanelToggle,
            ("select", [id]) => {
                let id: u32 = id
                    .parse()
                    .map_err(|_| ParseEventError::InvalidNumber((*id).to_string()))?;
                GestureEvent::ThumbnailSelected(PageId::new(id))
            }
            ("double-tap" | "drag-end" | "pinch-end" | "drawer" | "info", _) => {
                return Err(ParseEventError::WrongArguments {
                    event: event_name(name),
                    expected: "no arguments",
                })
            }
            ("drag", _) => {
                return Err(ParseEventError::WrongArguments {
                    event: "drag",
                    expected: "<dx> <dy>",
                })
            }
            ("pinch", _) => {
                return Err(ParseEventError::WrongArguments {
                    event: "pinch",
                    expected: "<magnitude>",
                })
            }
            ("zoom", _) => {
                return Err(ParseEventError::WrongArguments {
                    event: "zoom",
                    expected: "in, out or reset",
                })
            }
            ("select", _) => {
                return Err(ParseEventError::WrongArguments {
                    event: "select",
                    expected: "<page-id>",
                })
            }
            (other, _) => return Err(ParseEventError::UnknownEvent(other.to_string())),
        };

        Ok(event)
    }
}

fn event_name(name: &str) -> &'static str {
    match name {
        "double-tap" => "double-tap",
        "drag-end" => "drag-end",
        "pinch-end" => "pinch-end",
        "info" => "info",
        _ => "drawer",
    }
}

impl fmt::Display for GestureEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureEvent::DoubleTap => write!(f, "double-tap"),
            GestureEvent::DragChanged { dx, dy } => write!(f, "drag {dx} {dy}"),
            GestureEvent::DragEnded => write!(f, "drag-end"),
            GestureEvent::PinchChanged { magnitude } => write!(f, "pinch {magnitude}"),
            GestureEvent::PinchEnded => write!(f, "pinch-end"),
            GestureEvent::ZoomButton(ZoomDirection::In) => write!(f, "zoom in"),
            GestureEvent::ZoomButton(ZoomDirection::Out) => write!(f, "zoom out"),
            GestureEvent::ZoomResetButton => write!(f, "zoom reset"),
            GestureEvent::DrawerToggle => write!(f, "drawer"),
            GestureEvent::ThumbnailSelected(id) => write!(f, "select {id}"),
            GestureEvent::InfoPanelToggle => write!(f, "info"),
        }
    }
}

/// Parses a whole script, skipping blank lines and comments.
///
/// # Errors
///
/// Returns [`Error::Script`] naming the first line that fails to parse.
pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>> {
    let mut steps = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let event = line.parse::<GestureEvent>().map_err(|err| Error::Script {
            line: index + 1,
            message: err.to_string(),
        })?;
        steps.push(ScriptStep {
            line: index + 1,
            event,
        });
    }
    Ok(steps)
}
