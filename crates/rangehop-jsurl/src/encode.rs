//! Deterministic encoder producing the compact text form.

use crate::value::Value;

/// Encodes a value as a single URL-safe text token.
///
/// Scalars are `~`-prefixed literals (`~null`, `~true`, `~-3`), strings are
/// `~'` followed by an escaped body, containers are `~(...)`. Array elements
/// carry their own leading `~`; object entries are `key~value` pairs joined
/// by `~`. Non-finite numbers encode as `~null`.
pub fn stringify(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("~null"),
        Value::Bool(b) => {
            out.push('~');
            out.push_str(if *b { "true" } else { "false" });
        }
        Value::Number(n) => {
            out.push('~');
            write_number(*n, out);
        }
        Value::String(s) => {
            out.push_str("~'");
            escape_into(s, out);
        }
        Value::Array(items) => {
            out.push_str("~(");
            for item in items {
                write_value(item, out);
            }
            out.push(')');
        }
        Value::Object(entries) => {
            out.push_str("~(");
            for (idx, (key, val)) in entries.iter().enumerate() {
                if idx > 0 {
                    out.push('~');
                }
                escape_into(key, out);
                write_value(val, out);
            }
            out.push(')');
        }
    }
}

fn write_number(n: f64, out: &mut String) {
    if !n.is_finite() {
        out.push_str("null");
    } else if n == n.trunc() && n.abs() < 1e15 {
        out.push_str(&format!("{}", n as i64));
    } else {
        out.push_str(&format!("{}", n));
    }
}

/// Escapes a string body or object key into `out`.
///
/// `'` maps to `!` and a literal `!` doubles to `!!`. A literal `%` becomes
/// `*25`. The structural characters `~`, `(` and `)` terminate tokens on the
/// decode side, so they are hex-escaped as well. Anything else outside
/// printable ASCII is emitted as `*HH` per UTF-16 code unit below 0x80 and
/// `**HHHH` at or above it (surrogate pairs for non-BMP code points).
pub(crate) fn escape_into(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '\'' => out.push('!'),
            '!' => out.push_str("!!"),
            '%' => out.push_str("*25"),
            '~' => out.push_str("*7e"),
            '(' => out.push_str("*28"),
            ')' => out.push_str("*29"),
            c if (' '..='~').contains(&c) => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    if *unit < 0x80 {
                        out.push_str(&format!("*{:02x}", unit));
                    } else {
                        out.push_str(&format!("**{:04x}", unit));
                    }
                }
            }
        }
    }
}
