use regex::Regex;
use std::sync::LazyLock;

/// First argument of a `printf` call when it is a plain string literal.
static PRINTF_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"printf\s*\(\s*"([^"]+)""#).expect("printf literal pattern is valid")
});

/// Decode the escapes a printf literal may carry.
///
/// These are four whole-string substitutions applied in order, not a
/// single left-to-right scan: `\\n` in source therefore becomes a
/// backslash followed by a newline.
pub fn decode_escapes(literal: &str) -> String {
    literal
        .replace("\\n", "\n")
        .replace("\\t", "\t")
        .replace("\\\"", "\"")
        .replace("\\\\", "\\")
}

/// Concatenate every printf literal in source order, escapes decoded.
///
/// Format specifiers are left as written.
pub fn extract_output(source: &str) -> String {
    let mut output = String::new();
    for caps in PRINTF_LITERAL.captures_iter(source) {
        if let Some(literal) = caps.get(1) {
            output.push_str(&decode_escapes(literal.as_str()));
        }
    }
    output
}
