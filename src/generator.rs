use rand::Rng;

use crate::config::{Config, Strategy};
use crate::random::RandomKeys;
use crate::sequential::SequentialKeys;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: usize,
}

/// Key stream for either strategy.
pub enum Keys<R: Rng> {
    Sequential(SequentialKeys),
    Random(RandomKeys<R>),
}

impl<R: Rng> Keys<R> {
    pub fn new(config: &Config, rng: R) -> Self {
        match config.strategy {
            Strategy::Sequential => Keys::Sequential(SequentialKeys::new(
                config.alphabet,
                config.count,
                config.max_length,
            )),
            Strategy::Random => Keys::Random(RandomKeys::new(
                rng,
                config.alphabet,
                config.count,
                config.max_length,
            )),
        }
    }
}

impl<R: Rng> Iterator for Keys<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self {
            Keys::Sequential(keys) => keys.next(),
            Keys::Random(keys) => keys.next(),
        }
    }
}

/// Pairs each key with its position in generation order.
pub fn entries<I>(keys: I) -> impl Iterator<Item = Entry>
where
    I: IntoIterator<Item = String>,
{
    keys.into_iter()
        .enumerate()
        .map(|(value, key)| Entry { key, value })
}
