// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

mod raw;
mod search;

use alloc::vec::Vec;
use core::{
    cmp::Ordering,
    fmt::{Debug, Display, Write},
    iter::Copied,
    ops::{Add, AddAssign, Index, IndexMut},
    slice,
};

use tracing::debug;

use super::{codepoint, Array, Cursor};
use crate::ContainerError;

pub use raw::Raw;

/// The location of a substring found by [`U32String::find`] or
/// [`U32String::rfind`]: `first` points at the first codepoint of the match
/// and `last` one past its end.
///
/// When nothing is found, both cursors are the end cursor of the string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    pub first: Cursor,
    pub last: Cursor,
}

/// A growable string of 32-bit codepoints.
///
/// Has the same positional API as [`Array`] (it's an `Array<char>` inside),
/// with [`Cursor`]s following the same invalidation rules, plus substring
/// search, replacement and concatenation. Lengths and indices count
/// codepoints, not bytes.
///
/// Functions taking a substring accept anything that is `AsRef<[char]>`:
/// other [`U32String`]s, char arrays and slices, or [`Raw`] for
/// nul-terminated buffers.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct U32String {
    chars: Array<char>,
}

impl U32String {
    pub fn new() -> U32String {
        U32String::default()
    }

    /// Creates a string of `len` copies of `ch`.
    pub fn filled(len: usize, ch: char) -> U32String {
        U32String {
            chars: Array::filled(len, ch),
        }
    }

    pub fn from_chars(chars: &[char]) -> U32String {
        U32String {
            chars: Array::from(chars),
        }
    }

    /// Moves the codepoints out into a new string, leaving this one empty.
    pub fn take(&mut self) -> U32String {
        core::mem::take(self)
    }

    pub fn begin(&self) -> Cursor {
        self.chars.begin()
    }

    pub fn end(&self) -> Cursor {
        self.chars.end()
    }

    /// The length in codepoints.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.chars.capacity()
    }

    pub fn as_chars(&self) -> &[char] {
        self.chars.as_slice()
    }

    pub fn as_mut_chars(&mut self) -> &mut [char] {
        self.chars.as_mut_slice()
    }

    /// Returns a copy of the codepoints followed by a `'\0'` terminator, which
    /// can be read back with [`Raw::new`].
    pub fn to_raw(&self) -> Vec<char> {
        let mut raw = Vec::with_capacity(self.len() + 1);
        raw.extend_from_slice(self.as_chars());
        raw.push('\0');
        raw
    }

    pub fn chars(&self) -> Copied<slice::Iter<'_, char>> {
        self.chars.iter().copied()
    }

    pub fn add_first(&mut self, ch: char) {
        self.chars.add_first(ch);
    }

    /// Inserts the codepoints of `s` at the start of the string.
    pub fn add_first_str(&mut self, s: impl AsRef<[char]>) {
        self.chars.add_first_slice(s.as_ref());
    }

    pub fn add_last(&mut self, ch: char) {
        self.chars.add_last(ch);
    }

    /// Appends the codepoints of `s` to the end of the string.
    pub fn add_last_str(&mut self, s: impl AsRef<[char]>) {
        self.chars.add_last_slice(s.as_ref());
    }

    /// ### Panics
    ///
    /// Panics if `at` is not a valid cursor for this string.
    pub fn insert(&mut self, at: Cursor, ch: char) {
        self.chars.insert(at, ch);
    }

    /// ### Panics
    ///
    /// Panics if `at` is not a valid cursor for this string.
    pub fn insert_str(&mut self, at: Cursor, s: impl AsRef<[char]>) {
        self.chars.insert_slice(at, s.as_ref());
    }

    pub fn prepend(&mut self, other: &U32String) {
        self.chars.prepend(&other.chars);
    }

    /// Moves the codepoints of `other` to the start of this string, leaving
    /// `other` empty.
    pub fn prepend_from(&mut self, other: &mut U32String) {
        self.chars.prepend_from(&mut other.chars);
    }

    pub fn append(&mut self, other: &U32String) {
        self.chars.append(&other.chars);
    }

    /// Moves the codepoints of `other` to the end of this string, leaving
    /// `other` empty.
    pub fn append_from(&mut self, other: &mut U32String) {
        self.chars.append_from(&mut other.chars);
    }

    /// Removes every occurrence of `ch`. Returns the amount of removed
    /// codepoints.
    pub fn remove_char(&mut self, ch: char) -> usize {
        self.chars.remove(&ch)
    }

    /// Removes occurrences of `pattern` until there are none left, including
    /// ones formed by joining the text around a removed occurrence (removing
    /// `"ab"` from `"aabb"` leaves `""`). Returns the amount of removed
    /// occurrences. An empty pattern removes nothing.
    pub fn remove(&mut self, pattern: impl AsRef<[char]>) -> usize {
        let pattern = pattern.as_ref();
        if pattern.is_empty() || search::find(self.as_chars(), pattern).is_none() {
            return 0;
        }

        // Removing the leftmost occurrence until none are left is equivalent
        // to dropping the pattern whenever the output so far ends with it.
        let mut kept = Vec::with_capacity(self.len());
        let mut removed = 0;
        for &ch in self.as_chars() {
            kept.push(ch);
            if kept.ends_with(pattern) {
                kept.truncate(kept.len() - pattern.len());
                removed += 1;
            }
        }
        self.chars.with_vec(|chars| *chars = kept);
        removed
    }

    /// ### Panics
    ///
    /// Panics if `at` is not a valid cursor for this string, or if it's the
    /// end cursor.
    pub fn remove_at_cursor(&mut self, at: Cursor) -> char {
        self.chars.remove_at_cursor(at)
    }

    pub fn remove_first(&mut self) -> Option<char> {
        self.chars.remove_first()
    }

    pub fn remove_last(&mut self) -> Option<char> {
        self.chars.remove_last()
    }

    /// ### Panics
    ///
    /// Panics if either cursor is not valid for this string, or if `first` is
    /// after `last`.
    pub fn remove_range(&mut self, first: Cursor, last: Cursor) {
        self.chars.remove_range(first, last);
    }

    /// Removes the codepoint at `index`, if in bounds.
    pub fn remove_at(&mut self, index: usize) -> Option<char> {
        self.chars.remove_at(index)
    }

    /// Removes up to `count` codepoints starting from `index`, returning the
    /// amount actually removed.
    ///
    /// Fails with [`ContainerError::OutOfRange`] if `index` is past the end of
    /// the string. `index == len()` is allowed, and removes nothing.
    pub fn remove_span(&mut self, index: usize, count: usize) -> Result<usize, ContainerError> {
        let len = self.len();
        if index > len {
            return Err(ContainerError::out_of_range("U32String::remove_span", index, len));
        }
        let end = index.saturating_add(count).min(len);
        if index == end {
            return Ok(0);
        }
        self.chars
            .remove_range(self.chars.cursor_at(index), self.chars.cursor_at(end));
        Ok(end - index)
    }

    pub fn remove_by(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        self.chars.remove_by(|&ch| predicate(ch))
    }

    /// Empties the string, keeping the capacity.
    pub fn remove_all(&mut self) {
        self.chars.remove_all();
    }

    pub fn shrink_to_fit(&mut self) {
        self.chars.shrink_to_fit();
    }

    /// Returns a cursor to the first `ch`, or the end cursor.
    pub fn find_char(&self, ch: char) -> Cursor {
        self.chars.find(&ch)
    }

    /// Returns a cursor to the last `ch`, or the end cursor.
    pub fn rfind_char(&self, ch: char) -> Cursor {
        match self.as_chars().iter().rposition(|&c| c == ch) {
            Some(position) => self.chars.cursor_at(position),
            None => self.end(),
        }
    }

    /// Finds the first occurrence of `pattern`.
    pub fn find(&self, pattern: impl AsRef<[char]>) -> Match {
        let pattern = pattern.as_ref();
        self.match_at(search::find(self.as_chars(), pattern), pattern.len())
    }

    /// Finds the last occurrence of `pattern`.
    pub fn rfind(&self, pattern: impl AsRef<[char]>) -> Match {
        let pattern = pattern.as_ref();
        self.match_at(search::rfind(self.as_chars(), pattern), pattern.len())
    }

    fn match_at(&self, position: Option<usize>, len: usize) -> Match {
        match position {
            Some(position) => Match {
                first: self.chars.cursor_at(position),
                last: self.chars.cursor_at(position + len),
            },
            None => Match {
                first: self.end(),
                last: self.end(),
            },
        }
    }

    /// Returns a cursor to the codepoint at `index`, or the end cursor.
    pub fn find_at(&self, index: usize) -> Cursor {
        self.chars.find_at(index)
    }

    /// See [`Array::index_of`].
    pub fn index_of(&self, at: Cursor) -> usize {
        self.chars.index_of(at)
    }

    /// Returns the codepoint at `index`, failing with
    /// [`ContainerError::OutOfRange`] if out of bounds.
    pub fn at(&self, index: usize) -> Result<char, ContainerError> {
        let len = self.len();
        self.chars
            .get(index)
            .copied()
            .ok_or(ContainerError::out_of_range("U32String::at", index, len))
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut char, ContainerError> {
        let len = self.len();
        self.chars
            .get_mut(index)
            .ok_or(ContainerError::out_of_range("U32String::at_mut", index, len))
    }

    pub fn first(&self) -> Option<char> {
        self.chars.first().copied()
    }

    pub fn last(&self) -> Option<char> {
        self.chars.last().copied()
    }

    /// Resizes the string to `len` codepoints, padding with `'\0'`.
    pub fn resize(&mut self, len: usize) {
        self.chars.resize(len);
    }

    pub fn resize_with_value(&mut self, len: usize, ch: char) {
        self.chars.resize_with_value(len, ch);
    }

    /// See [`Array::reserve`].
    pub fn reserve(&mut self, capacity: usize) {
        self.chars.reserve(capacity);
    }

    pub fn swap(&mut self, other: &mut U32String) {
        self.chars.swap(&mut other.chars);
    }

    /// Replaces every `old` with `new`. Returns the amount of replaced
    /// codepoints.
    pub fn replace_char(&mut self, old: char, new: char) -> usize {
        self.replace_by(|ch| ch == old, new)
    }

    /// Replaces every non-overlapping occurrence of `old` with `new`, scanning
    /// once from left to right. Returns the amount of replaced occurrences.
    ///
    /// The inserted text is not searched again, so `new` may contain `old`:
    /// replacing `"ab"` with `"abc"` in `"ab"` results in `"abc"`. An empty
    /// `old` is rejected and nothing is replaced.
    pub fn replace(&mut self, old: impl AsRef<[char]>, new: impl AsRef<[char]>) -> usize {
        let (old, new) = (old.as_ref(), new.as_ref());
        if old.is_empty() {
            debug!("ignoring U32String::replace with an empty search pattern");
            return 0;
        }

        let source = self.as_chars();
        let mut replaced = 0;
        let mut result = Vec::new();
        let mut cursor = 0;
        while let Some(offset) = search::find(&source[cursor..], old) {
            if replaced == 0 {
                result.reserve(source.len());
            }
            result.extend_from_slice(&source[cursor..cursor + offset]);
            result.extend_from_slice(new);
            cursor += offset + old.len();
            replaced += 1;
        }
        if replaced == 0 {
            return 0;
        }
        result.extend_from_slice(&source[cursor..]);
        self.chars.with_vec(|chars| *chars = result);
        replaced
    }

    /// Replaces every codepoint `predicate` returns true for with `ch`.
    /// Returns the amount of replaced codepoints.
    pub fn replace_by(&mut self, mut predicate: impl FnMut(char) -> bool, ch: char) -> usize {
        let mut replaced = 0;
        for c in self.as_mut_chars() {
            if predicate(*c) {
                *c = ch;
                replaced += 1;
            }
        }
        replaced
    }

    /// Replaces every codepoint `predicate` returns true for with the
    /// codepoints of `replacement`. Returns the amount of replaced codepoints.
    pub fn replace_by_str(
        &mut self,
        mut predicate: impl FnMut(char) -> bool,
        replacement: impl AsRef<[char]>,
    ) -> usize {
        let replacement = replacement.as_ref();
        let mut replaced = 0;
        let mut result = Vec::with_capacity(self.len());
        for &ch in self.as_chars() {
            if predicate(ch) {
                result.extend_from_slice(replacement);
                replaced += 1;
            } else {
                result.push(ch);
            }
        }
        if replaced > 0 {
            self.chars.with_vec(|chars| *chars = result);
        }
        replaced
    }

    /// Creates a new string out of the results of calling `f` on each
    /// codepoint. This string is not modified.
    pub fn map(&self, mut f: impl FnMut(char) -> char) -> U32String {
        U32String {
            chars: self.chars.map(|&ch| f(ch)),
        }
    }

    /// Returns a copy with ASCII letters converted to lowercase.
    pub fn to_ascii_lowercase(&self) -> U32String {
        self.map(codepoint::to_lower)
    }

    /// Returns a copy with ASCII letters converted to uppercase.
    pub fn to_ascii_uppercase(&self) -> U32String {
        self.map(codepoint::to_upper)
    }
}

impl Display for U32String {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for ch in self.chars() {
            f.write_char(ch)?;
        }
        Ok(())
    }
}

impl Debug for U32String {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_char('"')?;
        for ch in self.chars() {
            for escaped in ch.escape_debug() {
                f.write_char(escaped)?;
            }
        }
        f.write_char('"')
    }
}

impl PartialOrd for U32String {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for U32String {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_chars().cmp(other.as_chars())
    }
}

impl PartialEq<char> for U32String {
    fn eq(&self, other: &char) -> bool {
        self.as_chars() == [*other]
    }
}

impl PartialEq<Raw<'_>> for U32String {
    fn eq(&self, other: &Raw<'_>) -> bool {
        self.as_chars() == other.as_chars()
    }
}

impl PartialEq<str> for U32String {
    fn eq(&self, other: &str) -> bool {
        self.chars().eq(other.chars())
    }
}

impl PartialEq<&str> for U32String {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<U32String> for str {
    fn eq(&self, other: &U32String) -> bool {
        *other == *self
    }
}

impl PartialEq<U32String> for &str {
    fn eq(&self, other: &U32String) -> bool {
        *other == **self
    }
}

impl Index<usize> for U32String {
    type Output = char;

    fn index(&self, index: usize) -> &char {
        &self.chars[index]
    }
}

impl IndexMut<usize> for U32String {
    fn index_mut(&mut self, index: usize) -> &mut char {
        &mut self.chars[index]
    }
}

impl AsRef<[char]> for U32String {
    fn as_ref(&self) -> &[char] {
        self.as_chars()
    }
}

impl From<&str> for U32String {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl From<Raw<'_>> for U32String {
    fn from(raw: Raw<'_>) -> Self {
        U32String::from_chars(raw.as_chars())
    }
}

impl From<Vec<char>> for U32String {
    fn from(chars: Vec<char>) -> Self {
        U32String {
            chars: Array::from(chars),
        }
    }
}

impl FromIterator<char> for U32String {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        U32String {
            chars: iter.into_iter().collect(),
        }
    }
}

impl Extend<char> for U32String {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.chars.extend(iter);
    }
}

impl<'a> IntoIterator for &'a U32String {
    type Item = char;
    type IntoIter = Copied<slice::Iter<'a, char>>;

    fn into_iter(self) -> Self::IntoIter {
        self.chars()
    }
}

impl AddAssign<&U32String> for U32String {
    fn add_assign(&mut self, rhs: &U32String) {
        self.append(rhs);
    }
}

impl AddAssign<char> for U32String {
    fn add_assign(&mut self, rhs: char) {
        self.add_last(rhs);
    }
}

impl AddAssign<Raw<'_>> for U32String {
    fn add_assign(&mut self, rhs: Raw<'_>) {
        self.add_last_str(rhs);
    }
}

impl AddAssign<&str> for U32String {
    fn add_assign(&mut self, rhs: &str) {
        self.extend(rhs.chars());
    }
}

/// Implements `+` in terms of `+=` for owned and borrowed left-hand sides.
macro_rules! impl_concat {
    ($($rhs:ty),+) => {
        $(
            impl Add<$rhs> for U32String {
                type Output = U32String;

                fn add(mut self, rhs: $rhs) -> U32String {
                    self += rhs;
                    self
                }
            }

            impl Add<$rhs> for &U32String {
                type Output = U32String;

                fn add(self, rhs: $rhs) -> U32String {
                    let mut result = self.clone();
                    result += rhs;
                    result
                }
            }
        )+
    };
}

impl_concat!(&U32String, char, Raw<'_>, &str);

#[cfg(test)]
mod tests {
    use alloc::{format, string::ToString, vec::Vec};

    use super::{Raw, U32String};
    use crate::{collections::codepoint, ContainerError, NPOS};

    fn s(text: &str) -> U32String {
        U32String::from(text)
    }

    #[test]
    fn construction_and_conversion() {
        assert!(U32String::new().is_empty());
        assert_eq!("xxx", U32String::filled(3, 'x'));
        assert_eq!("héllo", s("héllo"));
        assert_eq!(5, s("héllo").len(), "length should count codepoints");
        assert_eq!("ab", U32String::from(Raw::new(&['a', 'b', '\0', 'c'])));
        assert_eq!("ab", U32String::from(alloc::vec!['a', 'b']));
        assert_eq!("héllo", s("héllo").to_string());
        assert_eq!("\"a\\\"b\"", format!("{:?}", s("a\"b")));
    }

    #[test]
    fn to_raw_round_trips_through_raw() {
        let text = s("raw");
        let raw = text.to_raw();
        assert_eq!(Some(&'\0'), raw.last());
        assert_eq!(text, U32String::from(Raw::new(&raw)));
        assert_eq!(text, Raw::new(&raw));
    }

    #[test]
    fn positional_editing() {
        let mut text = s("c");
        text.add_first('b');
        text.add_first_str(['a']);
        text.add_last('d');
        text.add_last_str(&s("ef"));
        assert_eq!("abcdef", text);

        text.insert(text.find_char('d'), '-');
        text.insert_str(text.begin(), Raw::new(&['>', '\0']));
        assert_eq!(">abc-def", text);

        text.prepend(&s("["));
        text.append(&s("]"));
        assert_eq!("[>abc-def]", text);

        let mut front = s("<<");
        let mut back = s(">>");
        text.prepend_from(&mut front);
        text.append_from(&mut back);
        assert_eq!("<<[>abc-def]>>", text);
        assert!(front.is_empty() && back.is_empty());
    }

    #[test]
    fn removal_variants() {
        let mut text = s("a-b-c");
        assert_eq!(2, text.remove_char('-'));
        assert_eq!("abc", text);
        assert_eq!(Some('a'), text.remove_first());
        assert_eq!(Some('c'), text.remove_last());
        assert_eq!('b', text.remove_at_cursor(text.begin()));
        assert_eq!(None, text.remove_first());

        let mut text = s("0123456789");
        text.remove_range(text.find_at(2), text.find_at(5));
        assert_eq!("0156789", text);
        assert_eq!(Some('5'), text.remove_at(2));
        assert_eq!(None, text.remove_at(20));
        assert_eq!(Ok(2), text.remove_span(1, 2));
        assert_eq!("0789", text);
        assert_eq!(Ok(2), text.remove_span(2, 100));
        assert_eq!("07", text);
        assert_eq!(Ok(0), text.remove_span(2, 1));
        assert_eq!(
            Err(ContainerError::OutOfRange {
                operation: "U32String::remove_span",
                index: 3,
                len: 2,
            }),
            text.remove_span(3, 1)
        );

        let mut text = s("a1b2c3");
        assert_eq!(3, text.remove_by(codepoint::is_digit));
        assert_eq!("abc", text);

        let capacity = text.capacity();
        text.remove_all();
        assert!(text.is_empty());
        assert_eq!(capacity, text.capacity());
    }

    #[test]
    fn removing_a_substring_rescans_joined_text() {
        let mut text = s("aabb");
        assert_eq!(2, text.remove(s("ab")));
        assert!(text.is_empty());

        let mut text = s("one, two, three");
        assert_eq!(2, text.remove(Raw::new(&[',', ' ', '\0'])));
        assert_eq!("onetwothree", text);

        assert_eq!(0, text.remove(s("")));
        assert_eq!(0, text.remove(Raw::new(&['\0'])));
        assert_eq!(0, text.remove(s("zzz")));
        assert_eq!("onetwothree", text);
    }

    #[test]
    fn find_and_rfind() {
        let text = s("abcabc");
        assert_eq!(0, text.index_of(text.find_char('a')));
        assert_eq!(3, text.index_of(text.rfind_char('a')));
        assert_eq!(text.end(), text.find_char('z'));
        assert_eq!(text.end(), text.rfind_char('z'));

        let found = text.find(s("bc"));
        assert_eq!(1, text.index_of(found.first));
        assert_eq!(3, text.index_of(found.last));

        let found = text.rfind(Raw::new(&['b', 'c', '\0']));
        assert_eq!(4, text.index_of(found.first));
        assert_eq!(text.end(), found.last, "a match at the very end should end at the end cursor");

        let missing = text.find(['x', 'y']);
        assert_eq!(text.end(), missing.first);
        assert_eq!(text.end(), missing.last);
        let missing = text.rfind(s("abcabcabc"));
        assert_eq!(text.end(), missing.first);

        assert_eq!(NPOS, text.index_of(text.find_at(6)));
        assert_eq!(2, text.index_of(text.find_at(2)));
    }

    #[test]
    fn replace_is_a_single_left_to_right_pass() {
        let mut text = s("ab");
        assert_eq!(1, text.replace(s("ab"), s("abc")));
        assert_eq!("abc", text);

        let mut text = s("aaaa");
        assert_eq!(2, text.replace(s("aa"), s("a")));
        assert_eq!("aa", text);

        let mut text = s("the cat sat");
        assert_eq!(2, text.replace(Raw::new(&['a', 't', '\0']), Raw::new(&['o', 'g', '\0'])));
        assert_eq!("the cog sog", text);

        let mut text = s("remove me");
        assert_eq!(1, text.replace(s(" me"), s("")));
        assert_eq!("remove", text);
    }

    #[test]
    fn replace_rejects_empty_patterns() {
        let mut text = s("abc");
        assert_eq!(0, text.replace(s(""), s("x")));
        assert_eq!(0, text.replace(Raw::new(&['\0']), Raw::new(&['x', '\0'])));
        assert_eq!(0, text.replace(s("q"), s("x")));
        assert_eq!("abc", text);
    }

    #[test]
    fn replace_by_predicate() {
        let mut text = s("a1b22c");
        assert_eq!(2, text.replace_char('2', '#'));
        assert_eq!("a1b##c", text);
        assert_eq!(3, text.replace_by(codepoint::is_alpha, '_'));
        assert_eq!("_1_##_", text);

        let mut text = s("a b c");
        assert_eq!(2, text.replace_by_str(|ch| ch == ' ', s("  ")));
        assert_eq!("a  b  c", text);
        assert_eq!(0, text.replace_by_str(|ch| ch == 'z', s("!")));

        let mut text = s("x-y");
        assert_eq!(1, text.replace_by_str(|ch| ch == '-', Raw::new(&['\0'])));
        assert_eq!("xy", text);
    }

    #[test]
    fn map_and_case_mapping() {
        let text = s("Hello, World");
        assert_eq!("hello, world", text.to_ascii_lowercase());
        assert_eq!("HELLO, WORLD", text.to_ascii_uppercase());
        assert_eq!("Hello, World", text, "map should not touch the receiver");
        assert_eq!("H*ll*, W*rld", text.map(|ch| if "aeiou".contains(ch) { '*' } else { ch }));
    }

    #[test]
    fn concatenation() {
        let a = s("foo");
        let b = s("bar");
        assert_eq!("foobar", &a + &b);
        assert_eq!("foo!", &a + '!');
        assert_eq!("foo-raw", &a + Raw::new(&['-', 'r', 'a', 'w', '\0']));
        assert_eq!("foo baz", &a + " baz");
        assert_eq!("foo", a, "borrowed + should not modify the left side");

        let mut c = a.clone() + &b + '.';
        c += &s("x");
        c += 'y';
        c += Raw::new(&['z', '\0']);
        c += "é";
        assert_eq!("foobar.xyzé", c);
    }

    #[test]
    fn equality_and_ordering() {
        assert_eq!(s("x"), 'x');
        assert_ne!(s("xy"), 'x');
        assert_ne!(s(""), 'x');
        assert_eq!(s("abc"), Raw::new(&['a', 'b', 'c', '\0']));
        assert!(s("abc") == *"abc");
        assert!("abc" == s("abc"));
        assert!(s("abc") < s("abd"));
        assert!(s("ab") < s("abc"));
    }

    #[test]
    fn equal_strings_hash_equally() {
        use core::hash::{BuildHasher, Hash, Hasher};

        let hasher = hashbrown::DefaultHashBuilder::default();
        let hash = |text: &U32String| {
            let mut state = hasher.build_hasher();
            text.hash(&mut state);
            state.finish()
        };
        let mut built = s("ab");
        built.add_last('c');
        assert_eq!(hash(&s("abc")), hash(&built));
    }

    #[test]
    fn accessors() {
        let mut text = s("xyz");
        assert_eq!(Ok('y'), text.at(1));
        assert!(text.at(3).is_err());
        *text.at_mut(0).unwrap() = 'X';
        text[2] = 'Z';
        assert_eq!('X', text[0]);
        assert_eq!(Some('X'), text.first());
        assert_eq!(Some('Z'), text.last());
        assert_eq!(alloc::vec!['X', 'y', 'Z'], text.chars().collect::<Vec<_>>());

        text.resize(4);
        assert_eq!('\0', text[3]);
        text.resize_with_value(6, '!');
        assert_eq!("XyZ\0!!", text);
        text.reserve(64);
        assert!(text.capacity() >= 64);
        text.shrink_to_fit();
        assert!(text.capacity() >= text.len());
    }

    #[test]
    fn take_and_swap() {
        let mut a = s("left");
        let mut b = s("right");
        a.swap(&mut b);
        assert_eq!("right", a);
        assert_eq!("left", b);

        let moved = a.take();
        assert!(a.is_empty());
        assert_eq!("right", moved);
    }

    #[test]
    fn clones_are_independent() {
        let original = s("abc");
        let mut copy = original.clone();
        copy.replace_char('a', 'z');
        assert_eq!("abc", original);
        assert_eq!("zbc", copy);
    }
}
