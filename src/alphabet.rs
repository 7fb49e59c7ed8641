use clap::ValueEnum;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const ALPHANUMERIC: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Symbols keys are drawn from. Symbols are kept in ascii order so that
/// sequential keys come out lexicographically sorted within a length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Alphabet {
    #[default]
    Lowercase,
    Alphanumeric,
}

impl Alphabet {
    pub fn symbols(&self) -> &'static [u8] {
        match self {
            Alphabet::Lowercase => LOWERCASE,
            Alphabet::Alphanumeric => ALPHANUMERIC,
        }
    }

    /// Number of distinct non-empty keys of length at most `max_length`,
    /// saturating at `u128::MAX`.
    pub fn key_space(&self, max_length: usize) -> u128 {
        let radix = self.symbols().len() as u128;
        let mut total: u128 = 0;
        let mut level: u128 = 1;
        for _ in 0..max_length {
            level = level.saturating_mul(radix);
            total = total.saturating_add(level);
        }
        total
    }
}
