//! Small tokenizing helpers for line-oriented text formats.

fn is_quote(ch: char) -> bool {
    ch == '\'' || ch == '"'
}

/// Removes one pair of matching single or double quotes around `s`.
#[inline]
pub fn strip_surrounding_quotes(s: &str) -> &str {
    let b = s.as_bytes();
    if b.len() >= 2 {
        let first = b[0];
        let last = b[b.len() - 1];
        if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Splits on commas outside quotes and trims each field. Quotes are kept.
pub fn split_csv_preserving_quotes(line: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes: Option<char> = None;

    for ch in line.chars() {
        match in_quotes {
            Some(q) if ch == q => {
                in_quotes = None;
                cur.push(ch);
            }
            Some(_) => cur.push(ch),
            None if is_quote(ch) => {
                in_quotes = Some(ch);
                cur.push(ch);
            }
            None if ch == ',' => {
                out.push(cur.trim().to_string());
                cur.clear();
            }
            None => cur.push(ch),
        }
    }
    if !cur.trim().is_empty() || !out.is_empty() {
        out.push(cur.trim().to_string());
    }
    out
}

/// Splits off the first whitespace-delimited token, honouring quotes.
///
/// Returns the unquoted token and the trimmed remainder, or `None` when `s`
/// is blank or a quote is never closed.
pub fn split_leading_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    let first = s.chars().next()?;
    if is_quote(first) {
        let close = s[1..].find(first)? + 1;
        Some((&s[1..close], s[close + 1..].trim()))
    } else {
        let end = s.find(char::is_whitespace).unwrap_or(s.len());
        Some((&s[..end], s[end..].trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_surrounding_quotes("'a,b'"), "a,b");
        assert_eq!(strip_surrounding_quotes(r#""x""#), "x");
        assert_eq!(strip_surrounding_quotes("'mixed\""), "'mixed\"");
        assert_eq!(strip_surrounding_quotes("nq"), "nq");
    }

    #[test]
    fn test_split_keeps_commas_inside_quotes() {
        let p = split_csv_preserving_quotes(r#"'sunny, warm',hot , "a,b",no"#);
        assert_eq!(p, vec!["'sunny, warm'", "hot", "\"a,b\"", "no"]);
    }

    #[test]
    fn test_split_reports_empty_trailing_field() {
        assert_eq!(split_csv_preserving_quotes("a,b,"), vec!["a", "b", ""]);
        assert!(split_csv_preserving_quotes("   ").is_empty());
    }

    #[test]
    fn test_leading_token() {
        assert_eq!(split_leading_token("  play {yes, no}"), Some(("play", "{yes, no}")));
        assert_eq!(
            split_leading_token("'wind speed' {low,high}"),
            Some(("wind speed", "{low,high}"))
        );
        assert_eq!(split_leading_token("solo"), Some(("solo", "")));
        assert_eq!(split_leading_token("'open {a}"), None);
        assert_eq!(split_leading_token("   "), None);
    }
}
