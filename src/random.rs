use rand::Rng;

use crate::alphabet::Alphabet;

/// Independently sampled keys: a length uniform in `1..=max_length`, then
/// each symbol uniform over the alphabet. Duplicates are possible.
pub struct RandomKeys<R: Rng> {
    rng: R,
    symbols: &'static [u8],
    max_length: usize,
    remaining: usize,
}

impl<R: Rng> RandomKeys<R> {
    pub fn new(rng: R, alphabet: Alphabet, count: usize, max_length: usize) -> Self {
        Self {
            rng,
            symbols: alphabet.symbols(),
            max_length,
            remaining: count,
        }
    }
}

pub fn generate_key<R: Rng>(rng: &mut R, symbols: &[u8], max_length: usize) -> String {
    let len = rng.gen_range(1..=max_length);
    (0..len)
        .map(|_| symbols[rng.gen_range(0..symbols.len())] as char)
        .collect()
}

impl<R: Rng> Iterator for RandomKeys<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.remaining == 0 || self.max_length == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(generate_key(&mut self.rng, self.symbols, self.max_length))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.max_length == 0 {
            return (0, Some(0));
        }
        (self.remaining, Some(self.remaining))
    }
}
