//! 错误类型
//!
//! 只有配置阶段的错误可恢复；运行期的不变量破坏直接 panic。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("switch {switch}: arrival rate must be positive, got {rate}")]
    NonPositiveArrivalRate { switch: usize, rate: f64 },

    #[error("switch {switch}: service time must be positive, got {ms} ms")]
    NonPositiveServiceTime { switch: usize, ms: f64 },

    #[error("routing probability must be within [0, 1], got {0}")]
    ProbabilityOutOfRange(f64),

    #[error("routing refers to unknown switch {index} (only {count} configured)")]
    UnknownSwitch { index: usize, count: usize },

    #[error("routing from switch {0} back into itself")]
    RoutingLoop(usize),

    #[error("at least one switch must be configured")]
    NoSwitches,

    #[error("neither run_length nor until_ms is set; the run would never stop")]
    NoStopCondition,

    #[error("run_length is the only stop condition but switch 0 never receives packets")]
    StopConditionUnreachable,

    #[error("delay threshold must be non-negative, got {0} ms")]
    NegativeThreshold(f64),

    #[error("read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse config: {0}")]
    Json(#[from] serde_json::Error),
}
