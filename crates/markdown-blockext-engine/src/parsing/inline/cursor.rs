/// A cursor for byte-by-byte inline parsing with position tracking.
///
/// Operates over a string slice while tracking the absolute byte position
/// in the rope (via `base`).
#[derive(Clone)]
pub struct Cursor<'a> {
    pub s: &'a str,
    pub base: usize,
    /// Current local index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Absolute byte position (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances until `stop` or a byte in `forbidden` is found. Returns the
    /// byte it stopped on, `None` at end of input.
    pub fn skip_until(&mut self, stop: u8, forbidden: &[u8]) -> Option<u8> {
        while let Some(b) = self.peek() {
            if b == stop || forbidden.contains(&b) {
                return Some(b);
            }
            self.i += 1;
        }
        None
    }
}
