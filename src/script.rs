//! Line-oriented event scripts.
//!
//! A script is a recorded session, one step per line:
//!
//! ```text
//! # draw a pill, then split it
//! down 10 10
//! move 120 80
//! up 120 80
//! click 60 40
//! guides off
//! ```
//!
//! Coordinates are canvas-local unless the caller offsets them with a
//! [`CanvasOrigin`]. Blank lines and everything after `#` are ignored.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use crate::engine::{Action, EngineCore};
use crate::geom::{CanvasOrigin, Point};
use crate::input::PointerEvent;

/// Error returned when a script line cannot be parsed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: `{command}` takes {expected} argument(s), got {got}")]
    ArgCount { line: usize, command: String, expected: usize, got: usize },
    #[error("line {line}: invalid number `{value}`")]
    BadNumber { line: usize, value: String },
    #[error("line {line}: expected `on` or `off`, got `{value}`")]
    BadToggle { line: usize, value: String },
}

/// One parsed script line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Event(PointerEvent),
    Guides(bool),
}

/// Parse a whole script.
///
/// # Errors
///
/// Returns the first [`ScriptError`] encountered, tagged with its 1-based line.
pub fn parse(text: &str) -> Result<Vec<Step>, ScriptError> {
    let mut steps = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        if let Some(step) = parse_line(idx + 1, raw)? {
            steps.push(step);
        }
    }
    Ok(steps)
}

/// Parse a single line. Returns `Ok(None)` for blank and comment lines.
///
/// # Errors
///
/// Returns a [`ScriptError`] when the command or its arguments are malformed.
pub fn parse_line(line: usize, raw: &str) -> Result<Option<Step>, ScriptError> {
    let body = raw.split('#').next().unwrap_or_default();
    let mut words = body.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let step = match command {
        "down" => Step::Event(PointerEvent::Down(point_args(line, command, &args)?)),
        "move" => Step::Event(PointerEvent::Move(point_args(line, command, &args)?)),
        "up" => Step::Event(PointerEvent::Up(point_args(line, command, &args)?)),
        "click" => Step::Event(PointerEvent::Click(point_args(line, command, &args)?)),
        "guides" => {
            expect_args(line, command, &args, 1)?;
            match args[0] {
                "on" => Step::Guides(true),
                "off" => Step::Guides(false),
                other => return Err(ScriptError::BadToggle { line, value: other.to_owned() }),
            }
        }
        other => return Err(ScriptError::UnknownCommand { line, command: other.to_owned() }),
    };
    Ok(Some(step))
}

fn expect_args(line: usize, command: &str, args: &[&str], expected: usize) -> Result<(), ScriptError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ScriptError::ArgCount { line, command: command.to_owned(), expected, got: args.len() })
    }
}

fn point_args(line: usize, command: &str, args: &[&str]) -> Result<Point, ScriptError> {
    expect_args(line, command, args, 2)?;
    Ok(Point::new(number(line, args[0])?, number(line, args[1])?))
}

fn number(line: usize, text: &str) -> Result<f64, ScriptError> {
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ScriptError::BadNumber { line, value: text.to_owned() }),
    }
}

/// Feed parsed steps into `core`. Event coordinates are treated as client
/// coordinates and shifted by `origin`. Returns every action produced.
pub fn replay(core: &mut EngineCore, origin: CanvasOrigin, steps: &[Step]) -> Vec<Action> {
    let mut actions = Vec::new();
    for step in steps {
        match *step {
            Step::Event(event) => actions.extend(core.handle(localize(event, origin))),
            Step::Guides(show) => actions.push(core.set_show_guides(show)),
        }
    }
    tracing::debug!(steps = steps.len(), actions = actions.len(), pills = core.doc.len(), "replay finished");
    actions
}

fn localize(event: PointerEvent, origin: CanvasOrigin) -> PointerEvent {
    let pt = origin.to_local(event.point());
    match event {
        PointerEvent::Down(_) => PointerEvent::Down(pt),
        PointerEvent::Move(_) => PointerEvent::Move(pt),
        PointerEvent::Up(_) => PointerEvent::Up(pt),
        PointerEvent::Click(_) => PointerEvent::Click(pt),
    }
}
