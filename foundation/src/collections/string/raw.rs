// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

/// A nul-terminated codepoint sequence, borrowed from a buffer.
///
/// The length is the index of the first `'\0'` in the buffer. If the buffer
/// has no terminator, the whole buffer is used, so a missing terminator can't
/// cause reads past the end of the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Raw<'a> {
    chars: &'a [char],
}

impl<'a> Raw<'a> {
    /// Scans `buffer` for the terminator and borrows everything before it.
    pub fn new(buffer: &'a [char]) -> Raw<'a> {
        let len = buffer
            .iter()
            .position(|&ch| ch == '\0')
            .unwrap_or(buffer.len());
        Raw {
            chars: &buffer[..len],
        }
    }

    /// The codepoints before the terminator.
    pub fn as_chars(self) -> &'a [char] {
        self.chars
    }

    pub fn len(self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(self) -> bool {
        self.chars.is_empty()
    }
}

impl AsRef<[char]> for Raw<'_> {
    fn as_ref(&self) -> &[char] {
        self.chars
    }
}

#[cfg(test)]
mod tests {
    use super::Raw;

    #[test]
    fn length_stops_at_the_first_terminator() {
        let buffer = ['a', 'b', '\0', 'c', '\0'];
        assert_eq!(&['a', 'b'], Raw::new(&buffer).as_chars());
        assert!(Raw::new(&['\0', 'x']).is_empty());
    }

    #[test]
    fn unterminated_buffers_are_bounded_by_their_length() {
        assert_eq!(3, Raw::new(&['x', 'y', 'z']).len());
        assert!(Raw::new(&[]).is_empty());
    }
}
