//! Parameter list translation.
//!
//! Commas are split at the top level only: a generic argument list such as
//! `Dictionary<string, int>` is torn apart, and its halves map to `any`.

use crate::types::map_type;

/// Translate raw C# parameter text (between the parentheses) into a
/// TypeScript parameter list like `a: number, b: string`.
pub fn parse_parameters(raw: &str) -> String {
    raw.split(',')
        .filter_map(|entry| translate_parameter(entry.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `int count` → `count: number`. Entries without a space have no name and
/// are dropped.
fn translate_parameter(entry: &str) -> Option<String> {
    let (cs_type, name) = entry.rsplit_once(char::is_whitespace)?;
    let cs_type = cs_type.trim();
    let name = name.trim();

    // `params T[] xs` keeps T[] as written
    let cs_type = match cs_type.split_once(char::is_whitespace) {
        Some(("params", rest)) => rest.trim(),
        _ => cs_type,
    };

    Some(format!("{}: {}", name, map_type(cs_type)))
}
