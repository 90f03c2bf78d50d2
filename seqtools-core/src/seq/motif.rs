use crate::error::SeqResult;

use fancy_regex::Regex;

/// A compiled motif pattern.
///
/// Look-around and backreferences are supported. Matching is case-sensitive:
/// upper-case both the pattern and the sequence to search case-insensitively.
#[derive(Clone, Debug)]
pub struct Motif {
    regex: Regex,
}

impl Motif {
    pub fn new(pattern: &str) -> SeqResult<Self> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Start offsets of every non-overlapping, leftmost match in `seq`.
    /// Call again to restart from the beginning.
    pub fn positions<'r, 'h>(&'r self, seq: &'h str) -> MotifPositions<'r, 'h> {
        MotifPositions {
            regex: &self.regex,
            hay: seq,
            ascii: seq.is_ascii(),
            search_from: 0,
            after_empty: false,
            done: false,
            byte_pos: 0,
            char_pos: 0,
        }
    }
}

/// Lazy iterator over motif start positions, in characters.
///
/// An empty match may start where the previous match ended, but two matches
/// never start at the same offset. Backtracking can exhaust its limit on
/// pathological patterns; that surfaces as one `Err` item, after which the
/// iterator is finished.
#[derive(Debug)]
pub struct MotifPositions<'r, 'h> {
    regex: &'r Regex,
    hay: &'h str,
    ascii: bool,
    search_from: usize,
    after_empty: bool,
    done: bool,
    byte_pos: usize,
    char_pos: usize,
}

impl MotifPositions<'_, '_> {
    fn next_match(&mut self) -> SeqResult<Option<(usize, usize)>> {
        let mut found = self.regex.find_from_pos(self.hay, self.search_from)?;
        if let Some(m) = &found {
            let repeat =
                self.after_empty && m.start() == self.search_from && m.end() == m.start();
            if repeat {
                // an empty match cannot follow an empty match at the same offset
                match next_boundary(self.hay, self.search_from) {
                    Some(pos) => {
                        self.search_from = pos;
                        found = self.regex.find_from_pos(self.hay, pos)?;
                    }
                    None => found = None,
                }
            }
        }
        Ok(found.map(|m| (m.start(), m.end())))
    }

    fn char_offset(&mut self, start: usize) -> usize {
        if self.ascii {
            return start;
        }
        // matches arrive in ascending order, so only the gap needs counting
        self.char_pos += self.hay[self.byte_pos..start].chars().count();
        self.byte_pos = start;
        self.char_pos
    }
}

impl Iterator for MotifPositions<'_, '_> {
    type Item = SeqResult<usize>;

    fn next(&mut self) -> Option<SeqResult<usize>> {
        if self.done {
            return None;
        }
        match self.next_match() {
            Ok(Some((start, end))) => {
                self.after_empty = start == end;
                self.search_from = end;
                Some(Ok(self.char_offset(start)))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[inline]
fn next_boundary(hay: &str, pos: usize) -> Option<usize> {
    hay[pos..].chars().next().map(|c| pos + c.len_utf8())
}

/// One-shot form of [`Motif::positions`].
pub fn motif_positions(seq: &str, pattern: &str) -> SeqResult<Vec<usize>> {
    let motif = Motif::new(pattern)?;
    motif.positions(seq).collect()
}
