//! Helpers that make arbitrary spreadsheet text safe to splice into DOT
//! source. Characters are substituted rather than escaped, so the output can
//! be placed inside an already quoted string or record label.

/// Maps one character to its replacement. Returns None for characters that
/// are dropped.
fn substitute(ch: char, whitespace: char) -> Option<char> {
    match ch {
        '"' => Some('\''),
        ':' => Some('-'),
        ',' | '{' | '}' | '[' | ']' => None,
        '\n' | '\r' | '\t' => Some(whitespace),
        '/' | '\\' | '|' | '<' | '>' => Some('_'),
        _ => Some(ch),
    }
}

/// Makes \p text usable inside a quoted label, including record labels.
/// Spaces are kept and line breaks become spaces.
pub fn sanitize_label(text: &str) -> String {
    text.chars().filter_map(|ch| substitute(ch, ' ')).collect()
}

/// Makes \p text usable as a DOT identifier (node name, port name, cluster
/// name). On top of the label rules, whitespace becomes an underscore and a
/// leading digit is guarded by an underscore.
pub fn sanitize(text: &str) -> String {
    let mut res: String = text
        .chars()
        .filter_map(|ch| substitute(ch, '_'))
        .map(|ch| if ch == ' ' { '_' } else { ch })
        .collect();

    if res.starts_with(|c: char| c.is_ascii_digit()) {
        res.insert(0, '_');
    }
    res
}
