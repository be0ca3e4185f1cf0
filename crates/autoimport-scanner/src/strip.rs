//! Lexical stripping
//!
//! Produces the scan surface: the source with comments and literal bodies
//! replaced by neutral placeholders so identifier matching never looks
//! inside them. Passes run in a fixed order, each over the previous
//! output:
//!
//! | pass | matches | replacement |
//! |---|---|---|
//! | block comments | `/*` + whitespace + ... + `*/` | removed |
//! | line comments | `//` + whitespace + rest of line | removed |
//! | interpolations | `${...}` on one line | `` ` + ... + ` `` |
//! | quoted strings | `"..."` / `'...'` on one line | `""` |
//! | template strings | `` `...` `` | ` `` ` |
//! | regex literals | `/.../flags` on one line | `new RegExp("")` |
//!
//! Comments without whitespace after the opener (`//foo`, `/*foo*/`) are
//! left alone, so URLs such as `http://x` survive the comment passes.
//!
//! All delimiters are ASCII, so slicing at their byte offsets always lands
//! on a char boundary.

use memchr::{memchr2, memmem};

const EMPTY_STRING: &str = "\"\"";
const EMPTY_TEMPLATE: &str = "``";
const EMPTY_REGEX: &str = "new RegExp(\"\")";
const REGEX_FLAGS: &[u8] = b"gimsuy";

/// Build the scan surface for `code`.
pub fn strip_comments_and_strings(code: &str) -> String {
    let surface = strip_block_comments(code);
    let surface = strip_line_comments(&surface);
    let surface = split_template_interpolations(&surface);
    let surface = blank_quoted_strings(&surface);
    let surface = blank_template_strings(&surface);
    blank_regex_literals(&surface)
}

/// Remove `/*<ws>...*/` comments.
pub fn strip_block_comments(src: &str) -> String {
    let bytes = src.as_bytes();
    let mut out = String::with_capacity(src.len());
    let mut copied = 0;
    let mut pos = 0;

    while let Some(offset) = memmem::find(&bytes[pos..], b"/*") {
        let start = pos + offset;
        let Some(ws_len) = whitespace_len_at(src, start + 2) else {
            pos = start + 1;
            continue;
        };
        let body = start + 2 + ws_len;
        let Some(close) = memmem::find(&bytes[body..], b"*/") else {
            // No terminator anywhere after this point.
            break;
        };
        out.push_str(&src[copied..start]);
        pos = body + close + 2;
        copied = pos;
    }

    out.push_str(&src[copied..]);
    out
}

/// Remove `//<ws>...` comments up to the end of the line.
///
/// The whitespace after `//` may itself be a newline, in which case the
/// following line is consumed as the comment body.
pub fn strip_line_comments(src: &str) -> String {
    let bytes = src.as_bytes();
    let mut out = String::with_capacity(src.len());
    let mut copied = 0;
    let mut pos = 0;

    while let Some(offset) = memmem::find(&bytes[pos..], b"//") {
        let start = pos + offset;
        let Some(ws_len) = whitespace_len_at(src, start + 2) else {
            pos = start + 1;
            continue;
        };
        let end = line_end(bytes, start + 2 + ws_len);
        out.push_str(&src[copied..start]);
        pos = end;
        copied = end;
    }

    out.push_str(&src[copied..]);
    out
}

/// Rewrite `${expr}` into `` ` + expr + ` `` so the enclosing backticks stay
/// balanced and `expr` stays visible to the scanner.
pub fn split_template_interpolations(src: &str) -> String {
    let bytes = src.as_bytes();
    let mut out = String::with_capacity(src.len());
    let mut copied = 0;
    let mut pos = 0;

    while let Some(offset) = memmem::find(&bytes[pos..], b"${") {
        let start = pos + offset;
        let inner = start + 2;
        let limit = line_end(bytes, inner);
        let Some(close) = memchr::memchr(b'}', &bytes[inner..limit]) else {
            pos = start + 1;
            continue;
        };
        out.push_str(&src[copied..start]);
        out.push_str("` + ");
        out.push_str(&src[inner..inner + close]);
        out.push_str(" + `");
        pos = inner + close + 1;
        copied = pos;
    }

    out.push_str(&src[copied..]);
    out
}

/// Replace single- and double-quoted strings with `""`.
pub fn blank_quoted_strings(src: &str) -> String {
    blank_delimited(src, |b| b == b'"' || b == b'\'', false, EMPTY_STRING)
}

/// Replace backtick strings with ` `` `.
pub fn blank_template_strings(src: &str) -> String {
    blank_delimited(src, |b| b == b'`', true, EMPTY_TEMPLATE)
}

fn blank_delimited(
    src: &str,
    is_quote: impl Fn(u8) -> bool,
    multiline: bool,
    replacement: &str,
) -> String {
    let bytes = src.as_bytes();
    let mut out = String::with_capacity(src.len());
    let mut copied = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        if !is_quote(bytes[pos]) {
            pos += 1;
            continue;
        }
        match find_quote_end(bytes, pos, multiline) {
            Some(end) => {
                out.push_str(&src[copied..pos]);
                out.push_str(replacement);
                pos = end + 1;
                copied = pos;
            }
            None => pos += 1,
        }
    }

    out.push_str(&src[copied..]);
    out
}

/// Find the closing quote for the quote at `start`.
///
/// Backslash-escaped quotes are skipped. If the body runs into a line
/// break (single-line strings) or the end of input before a plain closing
/// quote, the last escaped quote seen closes the string instead.
fn find_quote_end(bytes: &[u8], start: usize, multiline: bool) -> Option<usize> {
    let quote = bytes[start];
    let mut last_escaped = None;
    let mut pos = start + 1;

    while pos < bytes.len() {
        let b = bytes[pos];
        if b == quote {
            return Some(pos);
        }
        if b == b'\\' && bytes.get(pos + 1) == Some(&quote) {
            last_escaped = Some(pos + 1);
            pos += 2;
            continue;
        }
        // `\r` is allowed inside single-line strings, `\n` is not.
        if !multiline && (b == b'\n' || is_unicode_line_separator(bytes, pos)) {
            break;
        }
        pos += 1;
    }

    last_escaped
}

/// Replace `/pattern/flags` with `new RegExp("")`.
///
/// The closing slash must be on the same line, not preceded by a
/// backslash, and not inside a `[...]` class. Class state is read from the
/// whole input, so a `[` left open earlier in the file also suppresses a
/// close.
pub fn blank_regex_literals(src: &str) -> String {
    let bytes = src.as_bytes();
    let in_class = open_class_flags(bytes);
    let mut out = String::with_capacity(src.len());
    let mut copied = 0;
    let mut pos = 0;

    while let Some(offset) = memchr::memchr(b'/', &bytes[pos..]) {
        let start = pos + offset;
        let Some(close) = find_regex_close(bytes, &in_class, start) else {
            pos = start + 1;
            continue;
        };
        let mut end = close + 1;
        while end < bytes.len() && REGEX_FLAGS.contains(&bytes[end]) {
            end += 1;
        }
        out.push_str(&src[copied..start]);
        out.push_str(EMPTY_REGEX);
        pos = end;
        copied = end;
    }

    out.push_str(&src[copied..]);
    out
}

fn find_regex_close(bytes: &[u8], in_class: &[bool], start: usize) -> Option<usize> {
    let mut pos = start + 1;
    while pos < bytes.len() {
        let b = bytes[pos];
        if b == b'\n' || b == b'\r' || is_unicode_line_separator(bytes, pos) {
            return None;
        }
        if b == b'/' && bytes[pos - 1] != b'\\' && !in_class[pos] {
            return Some(pos);
        }
        pos += 1;
    }
    None
}

/// `flags[i]` is true when the nearest bracket before `i` is an unclosed `[`.
fn open_class_flags(bytes: &[u8]) -> Vec<bool> {
    let mut flags = Vec::with_capacity(bytes.len());
    let mut open = false;
    for &b in bytes {
        flags.push(open);
        match b {
            b'[' => open = true,
            b']' => open = false,
            _ => {}
        }
    }
    flags
}

/// Length in bytes of the whitespace char at `pos`, if there is one.
fn whitespace_len_at(src: &str, pos: usize) -> Option<usize> {
    let ch = src.get(pos..)?.chars().next()?;
    if ch.is_whitespace() || ch == '\u{feff}' {
        Some(ch.len_utf8())
    } else {
        None
    }
}

/// Offset of the first line terminator at or after `from`, or the input
/// length.
fn line_end(bytes: &[u8], from: usize) -> usize {
    let hit = memchr2(b'\n', b'\r', &bytes[from..]).map_or(bytes.len(), |offset| from + offset);
    first_unicode_separator(bytes, from, hit).unwrap_or(hit)
}

fn first_unicode_separator(bytes: &[u8], from: usize, to: usize) -> Option<usize> {
    memchr::memchr_iter(0xE2, &bytes[from..to])
        .map(|offset| from + offset)
        .find(|&pos| is_unicode_line_separator(bytes, pos))
}

/// U+2028 LINE SEPARATOR or U+2029 PARAGRAPH SEPARATOR starting at `pos`.
fn is_unicode_line_separator(bytes: &[u8], pos: usize) -> bool {
    bytes.len() > pos + 2
        && bytes[pos] == 0xE2
        && bytes[pos + 1] == 0x80
        && (bytes[pos + 2] == 0xA8 || bytes[pos + 2] == 0xA9)
}
