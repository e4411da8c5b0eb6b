//! Rewindable rune cursor over one line.
//!
//! The input is decoded once into a rune buffer; every position is an index into
//! it, so rewinding an alternation branch is a plain assignment.

#[derive(Debug, Clone)]
pub struct Cursor {
    runes: Vec<char>,
    pos: usize,
    /// Position before the last successful `read`, cleared by `unread` and `seek`.
    prev: Option<usize>,
}

impl Cursor {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            runes: text.chars().collect(),
            pos: 0,
            prev: None,
        }
    }

    /// Consumes one rune; `None` at end of input (the position does not move).
    pub fn read(&mut self) -> Option<char> {
        let c = self.runes.get(self.pos).copied()?;
        self.prev = Some(self.pos);
        self.pos += 1;
        Some(c)
    }

    /// Undoes the last successful `read`. Returns false when there is nothing to undo.
    pub fn unread(&mut self) -> bool {
        match self.prev.take() {
            Some(pos) => {
                self.pos = pos;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    /// Looks `offset` runes ahead of the current position without consuming.
    #[must_use]
    pub fn peek_at(&self, offset: usize) -> Option<char> {
        self.runes.get(self.pos + offset).copied()
    }

    /// Consumes the next rune when it equals `c`.
    pub fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.read();
            true
        } else {
            false
        }
    }

    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Absolute seek, clamped to the end of input.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.runes.len());
        self.prev = None;
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.runes.len() - self.pos
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}
