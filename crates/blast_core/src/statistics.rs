use std::fmt::Display;
use std::time::{Duration, Instant};

/// Counters and timing for a single search or planner run.
#[derive(Debug, Default)]
pub struct SearchStats {
    /// Number of partial paths expanded during the search.
    pub nodes_expanded: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_expanded = 0;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }

    /// Wall clock duration in milliseconds; 0 until [`finish`](Self::finish)
    /// ran.
    pub fn millis(&self) -> f64 {
        self.duration
            .map(|duration| duration.as_secs_f64() * 1_000.0)
            .unwrap_or_default()
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} nodes expanded in {:?}",
            self.nodes_expanded, self.duration
        )
    }
}
