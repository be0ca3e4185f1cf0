//! Identifier scanning
//!
//! A candidate is a maximal run of identifier bytes (`[A-Za-z0-9_$]`) that
//!
//! - is not a member access: the run is not preceded by `.` whose own
//!   predecessor is an identifier byte, `/` or `)` (`a.b`, `f().b`), and
//! - is followed by something other than `{` (a run at the very end of the
//!   input does not count).
//!
//! This is a boundary heuristic, not a tokenizer. Numeric literals and
//! keywords come through as candidates too; they simply never resolve.

use crate::CandidateSet;

/// Collect distinct candidate names from a scan surface, in first-seen
/// order.
pub fn scan_identifiers(surface: &str) -> CandidateSet {
    let bytes = surface.as_bytes();
    let mut candidates = CandidateSet::default();
    let mut pos = 0;

    while pos < bytes.len() {
        if !is_identifier_byte(bytes[pos]) {
            pos += 1;
            continue;
        }

        let start = pos;
        while pos < bytes.len() && is_identifier_byte(bytes[pos]) {
            pos += 1;
        }

        if is_member_access(bytes, start) {
            continue;
        }
        if matches!(bytes.get(pos), Some(&next) if next != b'{') {
            candidates.insert(surface[start..pos].to_string());
        }
    }

    candidates
}

#[inline]
pub fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

fn is_member_access(bytes: &[u8], start: usize) -> bool {
    if start < 2 || bytes[start - 1] != b'.' {
        return false;
    }
    let before_dot = bytes[start - 2];
    is_identifier_byte(before_dot) || before_dot == b'/' || before_dot == b')'
}
