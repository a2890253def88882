//! Method signature assembly from raw source lines.
//!
//! A small state machine: skip attribute and blank lines, join lines until a
//! body brace or statement terminator shows up, then split around the
//! outermost parentheses. There is no brace-depth tracking and no grammar;
//! anything that does not fit the shape is abandoned.

use crate::params::parse_parameters;
use crate::types::{map_async_return, map_type};
use std::fmt;

/// A translated method signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub name: String,
    /// Already-translated TypeScript parameter list.
    pub params: String,
    /// Already-translated TypeScript return type.
    pub return_type: String,
    pub is_async: bool,
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}): {};", self.name, self.params, self.return_type)
    }
}

/// Assemble the signature that starts at or after `start`.
///
/// Returns the signature (if one could be extracted) and the index of the
/// last consumed line. When the file ends mid-signature the index is
/// `lines.len()`.
pub fn assemble(lines: &[&str], start: usize) -> (Option<MethodSignature>, usize) {
    let mut i = start;
    while i < lines.len() && is_skippable(lines[i].trim()) {
        i += 1;
    }

    let mut text = String::new();
    loop {
        let Some(line) = lines.get(i) else {
            return (None, lines.len());
        };
        let line = line.trim();
        text.push(' ');
        text.push_str(line);
        if is_terminator(line) {
            break;
        }
        i += 1;
    }

    (parse_signature(&text), i)
}

fn is_skippable(line: &str) -> bool {
    line.is_empty() || line.starts_with('[')
}

fn is_terminator(line: &str) -> bool {
    line.contains('{') || line.ends_with(';')
}

/// Split joined signature text into name, return type and parameters.
fn parse_signature(text: &str) -> Option<MethodSignature> {
    let open = text.find('(')?;
    let close = text.rfind(')')?;
    if close < open {
        return None;
    }

    let prefix: Vec<&str> = text[..open].split_whitespace().collect();
    let [.., declared_type, name] = prefix.as_slice() else {
        return None;
    };
    let is_async = prefix.contains(&"async");

    let return_type = if is_async {
        map_async_return(declared_type)
    } else {
        map_type(declared_type).to_string()
    };

    Some(MethodSignature {
        name: (*name).to_string(),
        params: parse_parameters(text[open + 1..close].trim()),
        return_type,
        is_async,
    })
}
