//! Flattening and joining of dump values.
//!
//! Formatting happens in two passes:
//!
//! 1. [`flatten`] walks a [`DumpValue`] depth-first and produces a flat list of
//!    tokens. Groups become `(` ... `)` sentinel tokens, `Break` becomes one
//!    token holding a newline plus the current indentation, and
//!    `Indent`/`Dedent` adjust the depth counter without emitting anything.
//! 2. [`join`] concatenates the tokens, inserting a single space between two
//!    tokens unless the adjacency rule says otherwise.
//!
//! The depth counter is threaded through by mutable reference and shared by
//! the whole pass; it is not scoped to the group a marker appears in.

use crate::options::DumpOptions;
use crate::value::DumpValue;
use crate::{Cow, String, Vec, vec};

/// Token opening a group.
pub const OPEN: &str = "(";

/// Token closing a group.
pub const CLOSE: &str = ")";

enum Work<'a> {
    Value(&'a DumpValue),
    Close,
}

/// Flattens `value` into tokens, updating `depth` for every `Indent` and
/// `Dedent` encountered.
///
/// Uses an explicit work stack, so arbitrarily deep groups do not grow the
/// native call stack.
pub fn flatten<'a>(
    value: &'a DumpValue,
    depth: &mut isize,
    options: &DumpOptions,
) -> Vec<Cow<'a, str>> {
    tracing::trace!(depth = *depth, "Flattening dump value");

    let mut tokens = Vec::new();
    let mut stack = vec![Work::Value(value)];

    while let Some(work) = stack.pop() {
        let value = match work {
            Work::Close => {
                tokens.push(Cow::Borrowed(CLOSE));
                continue;
            }
            Work::Value(value) => value,
        };

        match value {
            DumpValue::Literal(text) => tokens.push(Cow::Borrowed(text.as_str())),
            DumpValue::Group(items) => {
                tokens.push(Cow::Borrowed(OPEN));
                stack.push(Work::Close);
                stack.extend(items.iter().rev().map(Work::Value));
            }
            DumpValue::Break => {
                let mut token = String::from("\n");
                token.push_str(&options.indent_string(*depth));
                tokens.push(Cow::Owned(token));
            }
            DumpValue::Indent => *depth = depth.saturating_add(1),
            DumpValue::Dedent => {
                *depth = depth.saturating_sub(1);
                if *depth < 0 {
                    tracing::debug!(depth = *depth, "Indentation depth went negative");
                }
            }
        }
    }

    tokens
}

/// Joins tokens into text.
///
/// A space goes between two adjacent tokens unless the token is `)`, the
/// previous token ends in whitespace or `(`, or the token itself contains
/// whitespace. Nothing is ever inserted before the first token.
pub fn join<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut result = String::new();
    let mut previous: Option<&str> = None;

    for token in tokens {
        let token = token.as_ref();
        if let Some(previous) = previous {
            if needs_separator(previous, token) {
                result.push(' ');
            }
        }
        result.push_str(token);
        previous = Some(token);
    }

    result
}

fn needs_separator(previous: &str, token: &str) -> bool {
    token != CLOSE
        && !previous.ends_with(char::is_whitespace)
        && !previous.ends_with(OPEN)
        && !token.contains(char::is_whitespace)
}

/// Flattens and joins `value` in one step.
pub fn format(value: &DumpValue, depth: &mut isize, options: &DumpOptions) -> String {
    join(&flatten(value, depth, options))
}
