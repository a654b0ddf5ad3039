//! Splits the text of a `.strings` file into comment and content sections.
//!
//! The scanner is a small state machine driven by a single cursor with one
//! character of lookahead. It knows nothing about string literals: a `//`
//! or `/*` inside a quoted value opens a comment like anywhere else.
//!
//! Concatenating the `content` of every returned [`Section`] always yields
//! the scanned text again, byte for byte.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    LineComment,
    BlockComment,
}

/// A contiguous span of a `.strings` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    pub is_comment: bool,
    pub content: &'a str,
}

impl<'a> Section<'a> {
    fn comment(content: &'a str) -> Self {
        Section {
            is_comment: true,
            content,
        }
    }

    fn text(content: &'a str) -> Self {
        Section {
            is_comment: false,
            content,
        }
    }
}

/// Scans `text` into an ordered list of sections.
///
/// - `//` opens a comment that runs up to and including the next newline.
/// - `/*` opens a comment that runs up to and including the next `*/`.
/// - Everything else is content.
///
/// A comment still open at the end of the input is emitted as it is.
/// Empty input yields one empty content section.
///
/// # Example
/// ```rust
/// use xdst::scanner::scan_sections;
///
/// let sections = scan_sections("\"a\" = \"1\"; // note\n\"b\" = \"2\";");
/// assert_eq!(sections.len(), 3);
/// assert!(sections[1].is_comment);
/// assert_eq!(sections[1].content, "// note\n");
/// ```
pub fn scan_sections(text: &str) -> Vec<Section<'_>> {
    // Every boundary sits next to an ASCII byte, so slicing `text` is safe.
    let bytes = text.as_bytes();
    let mut sections = Vec::new();
    let mut state = ScanState::Normal;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match state {
            ScanState::Normal => {
                let opened = match (bytes[i], bytes.get(i + 1)) {
                    (b'/', Some(b'/')) => Some(ScanState::LineComment),
                    (b'/', Some(b'*')) => Some(ScanState::BlockComment),
                    _ => None,
                };
                match opened {
                    Some(next) => {
                        if i > start {
                            sections.push(Section::text(&text[start..i]));
                        }
                        start = i;
                        state = next;
                        i += 2;
                    }
                    None => i += 1,
                }
            }
            ScanState::LineComment => {
                i += 1;
                if bytes[i - 1] == b'\n' {
                    sections.push(Section::comment(&text[start..i]));
                    start = i;
                    state = ScanState::Normal;
                }
            }
            ScanState::BlockComment => {
                if bytes[i] == b'*' && bytes.get(i + 1) == Some(&b'/') {
                    i += 2;
                    sections.push(Section::comment(&text[start..i]));
                    start = i;
                    state = ScanState::Normal;
                } else {
                    i += 1;
                }
            }
        }
    }

    if start < bytes.len() || sections.is_empty() {
        sections.push(Section {
            is_comment: state != ScanState::Normal,
            content: &text[start..],
        });
    }

    sections
}
