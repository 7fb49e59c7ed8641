use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::generator::Entry;
use crate::stat::Stat;

/// Writes `put <key> <value>` for every entry, then `get <key>` for every
/// entry, in the same order.
pub struct Emitter<W: Write> {
    out: W,
    prefix: String,
    put_only: bool,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W, prefix: impl Into<String>, put_only: bool) -> Self {
        Self {
            out,
            prefix: prefix.into(),
            put_only,
        }
    }

    /// Emits both passes, stopping before the next line once `running` is
    /// cleared. Lines already written are kept.
    pub fn emit(&mut self, entries: &[Entry], running: &AtomicBool) -> io::Result<Stat> {
        let mut stat = Stat::new();

        for entry in entries {
            if !running.load(Ordering::SeqCst) {
                return self.finish(stat);
            }
            writeln!(self.out, "{}put {} {}", self.prefix, entry.key, entry.value)?;
            stat.inc_put(1);
        }

        if !self.put_only {
            for entry in entries {
                if !running.load(Ordering::SeqCst) {
                    return self.finish(stat);
                }
                writeln!(self.out, "{}get {}", self.prefix, entry.key)?;
                stat.inc_get(1);
            }
        }

        self.finish(stat)
    }

    fn finish(&mut self, stat: Stat) -> io::Result<Stat> {
        self.out.flush()?;
        Ok(stat)
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
