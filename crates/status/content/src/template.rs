//! `$[key]` placeholder substitution for flavour text.
//!
//! ```
//! let text = status_content::template::render("Hail, $[name]!", [("name", "Debug #0")]);
//! assert_eq!(text, "Hail, Debug #0!");
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use status_core::{Record, Value};

const OPEN: &str = "$[";
const CLOSE: char = ']';

/// Replaces every `$[key]` whose key is in `vars`.
///
/// Unknown placeholders and an unterminated `$[` are left as written.
/// Substituted values are not scanned again.
pub fn render<I, K, V>(template: &str, vars: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Display,
{
    let vars: HashMap<String, String> = vars
        .into_iter()
        .map(|(key, value)| (key.into(), value.to_string()))
        .collect();

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after = &rest[start + OPEN.len()..];
        let Some(end) = after.find(CLOSE) else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = &after[..end];
        match vars.get(key) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[start..start + OPEN.len() + end + 1]),
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    out
}

/// [`render`] with a character mapping; text values are inserted unquoted.
pub fn render_record(template: &str, record: &Record) -> String {
    render(
        template,
        record.iter().map(|(key, value)| {
            let text = match value {
                Value::Text(text) => text.clone(),
                other => other.to_string(),
            };
            (key.as_str(), text)
        }),
    )
}
