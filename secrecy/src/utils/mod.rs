//! Utility functions shared across the scanner.

mod paths;

pub use paths::{collect_files, normalize_display_path, PathPatterns};

/// Iterator over the lines of a byte buffer, with 1-based line numbers.
///
/// Recognizes `\n`, `\r\n` and a bare `\r` as terminators, and does not
/// yield a trailing empty line for a terminated final line — the same
/// splitting the detectors' reference behavior is defined against.
pub fn lines(content: &[u8]) -> Lines<'_> {
    Lines {
        rest: content,
        lineno: 0,
    }
}

/// See [`lines`].
#[derive(Debug)]
pub struct Lines<'a> {
    rest: &'a [u8],
    lineno: usize,
}

impl<'a> Iterator for Lines<'a> {
    type Item = (usize, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        self.lineno += 1;

        let end = self
            .rest
            .iter()
            .position(|&b| b == b'\n' || b == b'\r')
            .unwrap_or(self.rest.len());
        let line = &self.rest[..end];

        let mut skip = end;
        if skip < self.rest.len() {
            if self.rest[skip] == b'\r' && self.rest.get(skip + 1) == Some(&b'\n') {
                skip += 2;
            } else {
                skip += 1;
            }
        }
        self.rest = &self.rest[skip..];

        Some((self.lineno, line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(content: &[u8]) -> Vec<(usize, &[u8])> {
        lines(content).collect()
    }

    #[test]
    fn splits_on_all_terminators() {
        assert_eq!(
            collect(b"a\nb\r\nc\rd"),
            vec![
                (1, b"a".as_slice()),
                (2, b"b".as_slice()),
                (3, b"c".as_slice()),
                (4, b"d".as_slice())
            ]
        );
    }

    #[test]
    fn no_phantom_trailing_line() {
        assert_eq!(collect(b"a\n"), vec![(1, b"a".as_slice())]);
        assert_eq!(collect(b""), Vec::<(usize, &[u8])>::new());
    }

    #[test]
    fn preserves_empty_interior_lines() {
        assert_eq!(
            collect(b"a\n\nb"),
            vec![
                (1, b"a".as_slice()),
                (2, b"".as_slice()),
                (3, b"b".as_slice())
            ]
        );
    }
}
