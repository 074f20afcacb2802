// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Substring searches over codepoint slices. An empty needle matches at the
//! start (forward) or at the end (backward) of the haystack.

pub fn find(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

pub fn rfind(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() {
        return Some(haystack.len());
    }
    haystack
        .windows(needle.len())
        .rposition(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::{find, rfind};

    #[test]
    fn finds_first_and_last_occurrences() {
        let haystack = ['a', 'b', 'a', 'b', 'c'];
        assert_eq!(Some(0), find(&haystack, &['a', 'b']));
        assert_eq!(Some(2), rfind(&haystack, &['a', 'b']));
        assert_eq!(Some(4), find(&haystack, &['c']));
        assert_eq!(None, find(&haystack, &['c', 'a']));
        assert_eq!(None, rfind(&haystack, &['x']));
    }

    #[test]
    fn needles_longer_than_the_haystack_never_match() {
        assert_eq!(None, find(&['a'], &['a', 'a']));
        assert_eq!(None, rfind(&[], &['a']));
    }

    #[test]
    fn empty_needles_match_at_the_edges() {
        assert_eq!(Some(0), find(&['a', 'b'], &[]));
        assert_eq!(Some(2), rfind(&['a', 'b'], &[]));
    }
}
