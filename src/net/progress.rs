//! 进度输出
//!
//! 每 `every` 次完成打印一行；`every == 0` 时静默。

use tracing::info;

use super::stats::SwitchStats;
use crate::sim::SimTime;

#[derive(Debug, Clone)]
pub struct Progress {
    every: u64,
    target: Option<u64>,
    emitted: u64,
}

impl Progress {
    pub fn new(every: u64, target: Option<u64>) -> Self {
        Self {
            every,
            target,
            emitted: 0,
        }
    }

    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// switch 0 每完成一个 packet 调用一次。
    pub fn on_completion(&mut self, now: SimTime, stats: &SwitchStats) {
        let done = stats.number_of_packets_processed;
        if self.every == 0 || done % self.every != 0 {
            return;
        }
        self.emitted += 1;
        match self.target {
            Some(target) if target > 0 => info!(
                now_secs = now.as_secs_f64(),
                processed = done,
                percent = 100.0 * done as f64 / target as f64,
                "⏳ 进度"
            ),
            _ => info!(now_secs = now.as_secs_f64(), processed = done, "⏳ 进度"),
        }
    }
}
