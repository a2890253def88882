//! C# → TypeScript type vocabulary.
//!
//! Only primitives and their single-dimension arrays are known. Everything
//! else degrades to `any` so generation never fails on an exotic type.

/// Map a C# type name (optionally suffixed with `[]`) to its TypeScript name.
pub fn map_type(cs_type: &str) -> &'static str {
    let cs_type = cs_type.trim();
    let (element, is_array) = match cs_type.strip_suffix("[]") {
        Some(element) => (element.trim_end(), true),
        None => (cs_type, false),
    };

    match (element, is_array) {
        ("int", false) => "number",
        ("int", true) => "Int32Array",
        ("uint", false) => "number",
        ("uint", true) => "Uint32Array",
        ("short", false) => "number",
        ("short", true) => "Int16Array",
        ("ushort", false) => "number",
        ("ushort", true) => "Uint16Array",
        ("byte", false) => "number",
        ("byte", true) => "Uint8Array",
        ("float", false) => "number",
        ("float", true) => "Float32Array",
        ("double", false) => "number",
        ("double", true) => "Float64Array",
        ("long", false) => "bigint",
        ("long", true) => "BigInt64Array",
        ("ulong", false) => "bigint",
        ("ulong", true) => "BigUint64Array",
        ("string", false) => "string",
        ("string", true) => "string[]",
        ("bool", false) => "boolean",
        ("bool", true) => "boolean[]",
        ("void", _) => "void",
        _ => "any",
    }
}

/// Translate the declared return type of an `async` method.
///
/// `Task<T>` and `ValueTask<T>` become `Promise<T>` with `T` mapped; any
/// other shape (`Task`, `void`, ...) resolves to nothing.
pub fn map_async_return(cs_type: &str) -> String {
    let inner = cs_type
        .strip_prefix("Task<")
        .or_else(|| cs_type.strip_prefix("ValueTask<"))
        .and_then(|rest| rest.strip_suffix('>'));

    match inner {
        Some(inner) => format!("Promise<{}>", map_type(inner)),
        None => "Promise<void>".to_string(),
    }
}
