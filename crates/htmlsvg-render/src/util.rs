// Shared markup helpers for the XHTML and SVG writers.

/// Appends `v` formatted like JavaScript's `Number#toString()` (`2`, `-7`, `0.5`, `1e21`).
///
/// Non-finite values become `0` and `-0` becomes `0`, so emitted attributes always parse as
/// numbers.
pub(crate) fn fmt_number_into(out: &mut String, v: f64, buf: &mut ryu_js::Buffer) {
    out.push_str(js_number_to_string(v, buf));
}

fn js_number_to_string(mut v: f64, buf: &mut ryu_js::Buffer) -> &str {
    if !v.is_finite() {
        return "0";
    }
    if v == -0.0 {
        v = 0.0;
    }
    buf.format_finite(v)
}

/// Escapes character data (`&`, `<`, `>`).
pub(crate) fn escape_text_into(out: &mut String, text: &str) {
    escape_into(out, text, false);
}

/// Escapes a double-quoted attribute value (`&`, `<`, `>`, `"`).
pub(crate) fn escape_attr_into(out: &mut String, text: &str) {
    escape_into(out, text, true);
}

fn escape_into(out: &mut String, text: &str, quotes: bool) {
    let bytes = text.as_bytes();
    let mut start = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        let esc = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' if quotes => "&quot;",
            _ => continue,
        };
        if start < i {
            out.push_str(&text[start..i]);
        }
        out.push_str(esc);
        start = i + 1;
    }
    if start < text.len() {
        out.push_str(&text[start..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt_number(v: f64) -> String {
        let mut out = String::new();
        let mut buf = ryu_js::Buffer::new();
        fmt_number_into(&mut out, v, &mut buf);
        out
    }

    #[test]
    fn fmt_number_matches_js_to_string() {
        assert_eq!(fmt_number(f64::NAN), "0");
        assert_eq!(fmt_number(f64::INFINITY), "0");
        assert_eq!(fmt_number(-0.0), "0");
        assert_eq!(fmt_number(0.0), "0");
        assert_eq!(fmt_number(123.0), "123");
        assert_eq!(fmt_number(-7.0), "-7");
        assert_eq!(fmt_number(2.5), "2.5");
        assert_eq!(fmt_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn escapes_only_markup_significant_characters() {
        let mut out = String::new();
        escape_text_into(&mut out, r#"a < b && "c" > d"#);
        assert_eq!(out, r#"a &lt; b &amp;&amp; "c" &gt; d"#);

        let mut out = String::new();
        escape_attr_into(&mut out, r#"say "hi" & <bye>"#);
        assert_eq!(out, "say &quot;hi&quot; &amp; &lt;bye&gt;");

        let mut out = String::new();
        escape_attr_into(&mut out, "data:image/png;base64,sOmeFAKeBasE64=");
        assert_eq!(out, "data:image/png;base64,sOmeFAKeBasE64=");
    }
}
