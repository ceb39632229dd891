//! Comment stripping for JSON-with-Comments documents.
//!
//! Removes `// line` and `/* block */` comments so the result can be handed to a
//! strict JSON parser. Comment markers inside string literals are left alone.

/// Lexer state while scanning the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InString,
    /// Inside a string, directly after a backslash.
    Escaped,
}

/// Strips `//` and `/* */` comments from JSONC text.
///
/// A line comment is removed up to (not including) its terminating newline, so
/// line numbers in the output match the input. A block comment is removed
/// entirely, including any newlines it spans.
///
/// Stripping never fails. Unterminated strings and block comments are passed
/// through on a best-effort basis and left for the JSON parser to reject.
///
/// ```
/// use osm_maker_config::strip_comments;
///
/// let cleaned = strip_comments("{\"url\": \"http://x\" /* host */} // done");
/// assert_eq!(cleaned, "{\"url\": \"http://x\" } ");
/// ```
pub fn strip_comments(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut state = ScanState::Normal;

    while let Some(ch) = chars.next() {
        match (state, ch) {
            (ScanState::Escaped, _) => {
                result.push(ch);
                state = ScanState::InString;
            }
            (ScanState::Normal, '"') => {
                result.push(ch);
                state = ScanState::InString;
            }
            (ScanState::InString, '"') => {
                result.push(ch);
                state = ScanState::Normal;
            }
            (ScanState::InString, '\\') => {
                result.push(ch);
                state = ScanState::Escaped;
            }
            (ScanState::Normal, '/') => match chars.peek() {
                // The line ending itself is copied on the next iteration.
                Some('/') => skip_line_comment(&mut chars),
                Some('*') => {
                    chars.next(); // consume '*'
                    skip_block_comment(&mut chars);
                }
                _ => result.push(ch),
            },
            _ => result.push(ch),
        }
    }

    result
}

/// Consumes characters up to, not including, the `\n` or `\r\n` ending the
/// line.
fn skip_line_comment(chars: &mut std::iter::Peekable<std::str::Chars>) {
    loop {
        match chars.peek() {
            None | Some('\n') => return,
            Some('\r') => {
                let mut ahead = chars.clone();
                ahead.next();
                if ahead.peek() == Some(&'\n') {
                    return;
                }
            }
            Some(_) => {}
        }
        chars.next();
    }
}

/// Consumes characters through the closing `*/`, or to end of input if the
/// comment is never closed.
fn skip_block_comment(chars: &mut std::iter::Peekable<std::str::Chars>) {
    while let Some(ch) = chars.next() {
        if ch == '*' && chars.next_if_eq(&'/').is_some() {
            return;
        }
    }
}
