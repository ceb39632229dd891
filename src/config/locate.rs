//! Recovers the dotted key path at a parser-reported position.
//!
//! `serde_json` reports where decoding failed as a line and column but not which
//! field it was decoding. Re-scanning the text up to that position while tracking
//! open objects and arrays gives the path, e.g. `osmData.boundingBox.south`.

#[derive(Debug)]
enum Frame {
    Object { key: Option<String>, expecting_key: bool },
    Array { index: usize },
}

/// Returns the key path open at `line`/`column` (as reported by `serde_json`)
/// in `text`. Array elements appear as their index.
pub(crate) fn key_path_at(text: &str, line: usize, column: usize) -> String {
    let end = byte_offset(text, line, column);
    let mut stack: Vec<Frame> = Vec::new();
    let mut chars = text[..end].chars();

    while let Some(ch) = chars.next() {
        match ch {
            '{' => stack.push(Frame::Object {
                key: None,
                expecting_key: true,
            }),
            '[' => stack.push(Frame::Array { index: 0 }),
            '}' | ']' => {
                stack.pop();
            }
            ',' => match stack.last_mut() {
                Some(Frame::Object { key, expecting_key }) => {
                    *key = None;
                    *expecting_key = true;
                }
                Some(Frame::Array { index }) => *index += 1,
                None => {}
            },
            ':' => {
                if let Some(Frame::Object { expecting_key, .. }) = stack.last_mut() {
                    *expecting_key = false;
                }
            }
            '"' => {
                let literal = read_string(&mut chars);
                if let Some(Frame::Object {
                    key,
                    expecting_key: true,
                }) = stack.last_mut()
                {
                    *key = Some(literal);
                }
            }
            _ => {}
        }
    }

    let segments: Vec<String> = stack
        .iter()
        .filter_map(|frame| match frame {
            Frame::Object { key, .. } => key.clone(),
            Frame::Array { index } => Some(index.to_string()),
        })
        .collect();
    segments.join(".")
}

/// Converts a `serde_json` position into a byte offset, clamped to `text` and
/// rounded down to a char boundary.
///
/// `serde_json` counts `column` in bytes from the start of the line, pointing
/// just past the last byte it consumed.
fn byte_offset(text: &str, line: usize, column: usize) -> usize {
    let line_start = if line <= 1 {
        0
    } else {
        match text.match_indices('\n').nth(line - 2) {
            Some((idx, _)) => idx + 1,
            None => text.len(),
        }
    };

    let mut end = line_start.saturating_add(column).min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    end
}

/// Reads the rest of a string literal after its opening quote. Escapes are
/// kept as written except `\"` and `\\`.
fn read_string(chars: &mut std::str::Chars) -> String {
    let mut result = String::new();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => break,
            '\\' => match chars.next() {
                Some(escaped @ ('"' | '\\')) => result.push(escaped),
                Some(other) => {
                    result.push('\\');
                    result.push(other);
                }
                None => break,
            },
            _ => result.push(ch),
        }
    }
    result
}
