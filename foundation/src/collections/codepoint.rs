// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! ASCII-only classification and case mapping for codepoints, usable as
//! predicates with e.g. [`U32String::replace_by`](super::U32String::replace_by).
//!
//! Codepoints outside of ASCII are never classified as letters or digits, and
//! are returned unchanged by the case mappings.

pub const fn is_lower(ch: char) -> bool {
    matches!(ch, 'a'..='z')
}

pub const fn is_upper(ch: char) -> bool {
    matches!(ch, 'A'..='Z')
}

pub const fn is_digit(ch: char) -> bool {
    matches!(ch, '0'..='9')
}

/// Returns true for `0-9`, `a-f` and `A-F`.
pub const fn is_xdigit(ch: char) -> bool {
    matches!(ch, '0'..='9' | 'a'..='f' | 'A'..='F')
}

pub const fn is_alpha(ch: char) -> bool {
    is_lower(ch) || is_upper(ch)
}

pub const fn is_alnum(ch: char) -> bool {
    is_digit(ch) || is_alpha(ch)
}

pub const fn to_lower(ch: char) -> char {
    ch.to_ascii_lowercase()
}

pub const fn to_upper(ch: char) -> char {
    ch.to_ascii_uppercase()
}
