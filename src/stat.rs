use std::time::Duration;

/// Counts of the command lines written during one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stat {
    put: u64,
    get: u64,
}

impl Stat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inc_put(&mut self, num: u64) {
        self.put += num;
    }

    pub fn inc_get(&mut self, num: u64) {
        self.get += num;
    }

    #[cfg(test)]
    pub fn puts(&self) -> u64 {
        self.put
    }

    #[cfg(test)]
    pub fn gets(&self) -> u64 {
        self.get
    }

    pub fn calc_rate_and_output(&self, elapsed: Duration) -> String {
        let secs = elapsed.as_secs_f64();
        let lines = (self.put + self.get) as f64;
        let rate = if secs > 0.0 { lines / secs } else { 0.0 };

        format!(
            "emitted: [put={}, get={}] in {:.3}s ({:.0} lines/s)",
            self.put, self.get, secs, rate
        )
    }
}
