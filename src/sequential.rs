use crate::alphabet::Alphabet;

/// Breadth-first enumeration of every non-empty key up to `max_length`:
/// shortest keys first, alphabet order within a length.
///
/// The frontier is a single odometer of symbol indices, so memory stays at
/// `max_length` no matter how many keys are requested.
pub struct SequentialKeys {
    symbols: &'static [u8],
    max_length: usize,
    remaining: usize,
    digits: Vec<usize>,
    exhausted: bool,
}

impl SequentialKeys {
    pub fn new(alphabet: Alphabet, count: usize, max_length: usize) -> Self {
        Self {
            symbols: alphabet.symbols(),
            max_length,
            remaining: count,
            digits: Vec::with_capacity(max_length),
            exhausted: max_length == 0,
        }
    }

    // moves the odometer to the next key, growing it by one symbol when
    // every position has wrapped
    fn advance(&mut self) -> bool {
        if self.digits.is_empty() {
            self.digits.push(0);
            return true;
        }

        for pos in (0..self.digits.len()).rev() {
            self.digits[pos] += 1;
            if self.digits[pos] < self.symbols.len() {
                return true;
            }
            self.digits[pos] = 0;
        }

        if self.digits.len() == self.max_length {
            return false;
        }
        self.digits.push(0);
        true
    }
}

impl Iterator for SequentialKeys {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.remaining == 0 || self.exhausted {
            return None;
        }
        if !self.advance() {
            self.exhausted = true;
            return None;
        }
        self.remaining -= 1;

        Some(self.digits.iter().map(|&d| self.symbols[d] as char).collect())
    }
}
