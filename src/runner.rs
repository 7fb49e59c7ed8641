use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{Config, Strategy};
use crate::emitter::Emitter;
use crate::error::Result;
use crate::generator::{entries, Entry, Keys};
use crate::stat::Stat;

pub struct Runner {
    config: Config,
    running: Arc<AtomicBool>,
}

impl Runner {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Ctrl+C stops generation and emission at the next entry; the run then
    /// ends quietly.
    pub fn install_interrupt_handler(&self) -> Result<()> {
        let running = Arc::clone(&self.running);
        ctrlc::set_handler(move || {
            running.store(false, Ordering::SeqCst);
        })?;
        Ok(())
    }

    #[cfg(test)]
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn run<W: Write>(&self, out: W) -> Result<Stat> {
        let started = Instant::now();
        log::debug!("generating with {:?}", self.config);

        let entries = self.generate();
        if !self.running.load(Ordering::SeqCst) {
            log::debug!("interrupted after generating {} entries", entries.len());
            return Ok(Stat::new());
        }

        let mut emitter = Emitter::new(out, self.config.prefix.as_str(), self.config.put_only);
        let stat = match emitter.emit(&entries, &self.running) {
            Ok(stat) => stat,
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                log::debug!("output closed by reader: {}", e);
                return Ok(Stat::new());
            }
            Err(e) => return Err(e.into()),
        };

        log::info!("{}", stat.calc_rate_and_output(started.elapsed()));
        Ok(stat)
    }

    // both passes walk the same entries, so they are materialised once
    fn generate(&self) -> Vec<Entry> {
        let cfg = &self.config;
        if cfg.strategy == Strategy::Sequential {
            let available = cfg.alphabet.key_space(cfg.max_length);
            if (cfg.count as u128) > available {
                log::warn!(
                    "only {} distinct keys of length <= {}, emitting fewer than {}",
                    available,
                    cfg.max_length,
                    cfg.count
                );
            }
        }

        let rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        entries(Keys::new(cfg, rng))
            .take_while(|_| self.running.load(Ordering::SeqCst))
            .collect()
    }
}
