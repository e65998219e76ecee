use std::time::Instant;

/// Tracks a run for the one-line summary printed at exit.
pub struct RunRecord {
    started: Instant,
    gens: u64,
    alive: usize,
}

impl RunRecord {
    pub fn new(alive: usize) -> Self {
        Self {
            started: Instant::now(),
            gens: 0,
            alive,
        }
    }

    pub fn record(&mut self, alive: usize) {
        self.gens += 1;
        self.alive = alive;
    }

    pub fn summary(&self) -> String {
        format!(
            "simulated {} generations in {:.2}s, {} alive",
            self.gens,
            self.started.elapsed().as_secs_f64(),
            self.alive
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_tracks_generations_and_alive() {
        let mut stats = RunRecord::new(12);
        stats.record(9);
        stats.record(7);

        let summary = stats.summary();
        assert!(summary.starts_with("simulated 2 generations"));
        assert!(summary.ends_with("7 alive"));
    }
}
