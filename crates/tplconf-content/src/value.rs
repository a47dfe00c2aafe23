//! The in-memory configuration tree
//!
//! Both parsers produce a [`ConfigValue`]: scalars, ordered sequences, and
//! insertion-ordered mappings (`serde_json` with `preserve_order`).
//!
//! [`stringify`] renders a value the way placeholder substitution inserts
//! it into text. Containers use Python's `str()` notation, so a list binds
//! as `[1, 2, 3]` and a nested string as `'x'`.

pub use serde_json::Value as ConfigValue;

/// An insertion-ordered string-keyed mapping of values
pub type Mapping = serde_json::Map<String, ConfigValue>;

/// Render `value` as the text substituted for a placeholder.
///
/// Strings are inserted bare; every other value uses its repr.
pub fn stringify(value: &ConfigValue) -> String {
    match value {
        ConfigValue::String(s) => s.clone(),
        other => {
            let mut out = String::new();
            write_repr(other, &mut out);
            out
        }
    }
}

/// Short type name used in diagnostics and error messages.
pub fn kind_name(value: &ConfigValue) -> &'static str {
    match value {
        ConfigValue::Null => "null",
        ConfigValue::Bool(_) => "bool",
        ConfigValue::Number(n) if n.is_f64() => "float",
        ConfigValue::Number(_) => "int",
        ConfigValue::String(_) => "string",
        ConfigValue::Array(_) => "sequence",
        ConfigValue::Object(_) => "mapping",
    }
}

fn write_repr(value: &ConfigValue, out: &mut String) {
    match value {
        ConfigValue::Null => out.push_str("None"),
        ConfigValue::Bool(true) => out.push_str("True"),
        ConfigValue::Bool(false) => out.push_str("False"),
        ConfigValue::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => out.push_str(&float_repr(f)),
            _ => out.push_str(&n.to_string()),
        },
        ConfigValue::String(s) => write_str_repr(s, out),
        ConfigValue::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_repr(item, out);
            }
            out.push(']');
        }
        ConfigValue::Object(map) => {
            out.push('{');
            for (i, (k, v)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_str_repr(k, out);
                out.push_str(": ");
                write_repr(v, out);
            }
            out.push('}');
        }
    }
}

fn write_str_repr(s: &str, out: &mut String) {
    // Single quotes unless the text has a single quote and no double quote.
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    out.push(quote);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => write_escape(c, out),
            c => out.push(c),
        }
    }
    out.push(quote);
}

fn write_escape(c: char, out: &mut String) {
    let code = c as u32;
    let escaped = match code {
        0..=0xff => format!("\\x{code:02x}"),
        0x100..=0xffff => format!("\\u{code:04x}"),
        _ => format!("\\U{code:08x}"),
    };
    out.push_str(&escaped);
}

/// Printable in the `str.isprintable()` sense: not a control, format,
/// private-use or separator character (the ASCII space excepted).
/// Unassigned code points are not tracked and count as printable.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() {
        return false;
    }
    !matches!(
        c as u32,
        // Space separators
        0xa0 | 0x1680 | 0x2000..=0x200a | 0x202f | 0x205f | 0x3000
        // Line and paragraph separators
        | 0x2028 | 0x2029
        // Format characters
        | 0xad
        | 0x600..=0x605
        | 0x61c
        | 0x6dd
        | 0x70f
        | 0x890..=0x891
        | 0x8e2
        | 0x180e
        | 0x200b..=0x200f
        | 0x202a..=0x202e
        | 0x2060..=0x2064
        | 0x2066..=0x206f
        | 0xfeff
        | 0xfff9..=0xfffb
        | 0x110bd
        | 0x110cd
        | 0x13430..=0x1343f
        | 0x1bca0..=0x1bca3
        | 0x1d173..=0x1d17a
        | 0xe0001
        | 0xe0020..=0xe007f
        // Private use
        | 0xe000..=0xf8ff
        | 0xf0000..=0xffffd
        | 0x100000..=0x10fffd
        // Noncharacters
        | 0xfdd0..=0xfdef
        | 0xfffe..=0xffff
    )
}

fn float_repr(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let abs = f.abs();
    if abs != 0.0 && !(1e-4..1e16).contains(&abs) {
        let sci = format!("{f:e}");
        return match sci.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(d) => ('-', d),
                    None => ('+', exp),
                };
                format!("{mantissa}e{sign}{digits:0>2}")
            }
            None => sci,
        };
    }

    let plain = f.to_string();
    if plain.contains('.') {
        plain
    } else {
        format!("{plain}.0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!("plain"), "plain")]
    #[case(json!(10), "10")]
    #[case(json!(-3), "-3")]
    #[case(json!(1.0), "1.0")]
    #[case(json!(2.5), "2.5")]
    #[case(json!(1e20), "1e+20")]
    #[case(json!(0.00001), "1e-05")]
    #[case(json!(true), "True")]
    #[case(json!(false), "False")]
    #[case(json!(null), "None")]
    #[case(json!([1, 2, 3]), "[1, 2, 3]")]
    #[case(json!([]), "[]")]
    #[case(json!({}), "{}")]
    #[case(json!(["10", "20", ["x"]]), "['10', '20', ['x']]")]
    #[case(json!({"f": 40}), "{'f': 40}")]
    #[case(json!([{"ee": "{{e}}"}]), "[{'ee': '{{e}}'}]")]
    #[case(json!([null, true, 1.5]), "[None, True, 1.5]")]
    fn test_stringify(#[case] value: ConfigValue, #[case] expected: &str) {
        assert_eq!(stringify(&value), expected);
    }

    #[rstest]
    #[case("it's", r#"["it's"]"#)]
    #[case(r#"say "hi""#, r#"['say "hi"']"#)]
    #[case(r#"both ' and ""#, r#"['both \' and "']"#)]
    #[case("line\nbreak", r"['line\nbreak']")]
    #[case(r"back\slash", r"['back\\slash']")]
    fn test_nested_string_quoting(#[case] s: &str, #[case] expected: &str) {
        assert_eq!(stringify(&json!([s])), expected);
    }

    #[rstest]
    #[case("a\u{a0}b", r"['a\xa0b']")]
    #[case("\u{85}", r"['\x85']")]
    #[case("\u{7f}", r"['\x7f']")]
    #[case("\u{2028}", r"['\u2028']")]
    #[case("zero\u{200b}width", r"['zero\u200bwidth']")]
    #[case("\u{f0000}", r"['\U000f0000']")]
    #[case("caf\u{e9} \u{65e5}\u{672c}", "['caf\u{e9} \u{65e5}\u{672c}']")]
    fn test_nested_string_escapes_non_printable(#[case] s: &str, #[case] expected: &str) {
        assert_eq!(stringify(&json!([s])), expected);
    }

    #[test]
    fn test_top_level_string_is_not_escaped() {
        assert_eq!(stringify(&json!("a\u{a0}b")), "a\u{a0}b");
    }

    #[test]
    fn test_mapping_order_is_kept() {
        let value: ConfigValue = serde_json::from_str(r#"{"z": 1, "a": 2}"#).unwrap();
        assert_eq!(stringify(&value), "{'z': 1, 'a': 2}");
    }

    #[test]
    fn test_kind_name() {
        assert_eq!(kind_name(&json!(1)), "int");
        assert_eq!(kind_name(&json!(1.5)), "float");
        assert_eq!(kind_name(&json!({})), "mapping");
        assert_eq!(kind_name(&json!([])), "sequence");
    }
}
