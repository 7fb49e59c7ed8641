use crate::alphabet::Alphabet;
use crate::error::{Error, Result};

pub const DEFAULT_COUNT: usize = 10;
pub const DEFAULT_MAX_LENGTH: usize = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    #[default]
    Sequential,
    Random,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub strategy: Strategy,
    pub alphabet: Alphabet,
    pub count: usize,
    pub max_length: usize,
    /// Written verbatim at the start of every emitted line.
    pub prefix: String,
    /// Skip the `get` pass.
    pub put_only: bool,
    /// Seed for the random strategy, OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            alphabet: Alphabet::default(),
            count: DEFAULT_COUNT,
            max_length: DEFAULT_MAX_LENGTH,
            prefix: String::new(),
            put_only: false,
            seed: None,
        }
    }
}

impl Config {
    pub fn validate(self) -> Result<Self> {
        if self.strategy == Strategy::Random && self.max_length == 0 && self.count > 0 {
            return Err(Error::InvalidArgument(
                "random keys need a max length of at least 1".to_string(),
            ));
        }
        if self.prefix.contains('\n') {
            return Err(Error::InvalidArgument(
                "line prefix must not contain a newline".to_string(),
            ));
        }
        Ok(self)
    }
}
