//! 仿真运行配置
//!
//! 每个交换机一条配置记录（到达率、服务时间），外加路由与停止条件。
//! 可以从 JSON 读入，缺省值对应三交换机链。

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::time::SimTime;
use crate::error::ConfigError;
use crate::topo::three_switch::{ThreeSwitchOpts, build_three_switch};

pub const DEFAULT_SEED: u64 = 400_050_636;
pub const DEFAULT_ARRIVAL_RATE: f64 = 150.0;
pub const DEFAULT_ARRIVAL_RATE_SWITCH_2_3: f64 = 50.0;
pub const DEFAULT_SERVICE_TIME_MS: f64 = 5.0;
pub const DEFAULT_SERVICE_TIME_SWITCH_2_3_MS: f64 = 5.0;
pub const DEFAULT_PROB1_2: f64 = 0.5;
pub const DEFAULT_DELAY_THRESHOLD_MS: f64 = 20.0;
pub const DEFAULT_RUN_LENGTH: u64 = 100_000;
pub const DEFAULT_PROGRESS_EVERY: u64 = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,
    pub switches: Vec<SwitchConfig>,
    #[serde(default)]
    pub routing: Option<SplitRoutingConfig>,
    #[serde(default = "default_threshold")]
    pub delay_threshold_ms: f64,
    /// switch 0 完成多少个 packet 后停止
    #[serde(default)]
    pub run_length: Option<u64>,
    /// 仿真时间上限（毫秒）
    #[serde(default)]
    pub until_ms: Option<u64>,
    /// 每多少次 switch 0 完成输出一次进度；0 关闭
    #[serde(default = "default_progress_every")]
    pub progress_every: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwitchConfig {
    #[serde(default)]
    pub name: Option<String>,
    /// 外生 Poisson 到达率（每秒）。None 表示该交换机没有自己的到达过程。
    #[serde(default)]
    pub arrival_rate_per_sec: Option<f64>,
    pub service_time_ms: f64,
}

/// switch `from` 每完成一个 packet，以概率 `prob_primary` 向 `primary`
/// 注入一个到达，否则注入 `secondary`。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SplitRoutingConfig {
    pub from: usize,
    pub primary: usize,
    pub secondary: usize,
    pub prob_primary: f64,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_threshold() -> f64 {
    DEFAULT_DELAY_THRESHOLD_MS
}

fn default_progress_every() -> u64 {
    DEFAULT_PROGRESS_EVERY
}

impl Default for SimConfig {
    fn default() -> Self {
        build_three_switch(&ThreeSwitchOpts::default())
    }
}

impl SimConfig {
    /// 从 JSON 文件读取并校验。
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let cfg: SimConfig = serde_json::from_str(&raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// 建立仿真前的参数检查：非正的到达率/服务时间、越界的路由都在这里拦下。
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.switches.is_empty() {
            return Err(ConfigError::NoSwitches);
        }
        for (i, sw) in self.switches.iter().enumerate() {
            if let Some(rate) = sw.arrival_rate_per_sec {
                if !(rate > 0.0 && rate.is_finite()) {
                    return Err(ConfigError::NonPositiveArrivalRate { switch: i, rate });
                }
            }
            if !(sw.service_time_ms > 0.0 && sw.service_time_ms.is_finite()) {
                return Err(ConfigError::NonPositiveServiceTime {
                    switch: i,
                    ms: sw.service_time_ms,
                });
            }
        }
        if let Some(r) = &self.routing {
            let count = self.switches.len();
            for index in [r.from, r.primary, r.secondary] {
                if index >= count {
                    return Err(ConfigError::UnknownSwitch { index, count });
                }
            }
            if r.primary == r.from || r.secondary == r.from {
                return Err(ConfigError::RoutingLoop(r.from));
            }
            if !(0.0..=1.0).contains(&r.prob_primary) {
                return Err(ConfigError::ProbabilityOutOfRange(r.prob_primary));
            }
        }
        if !(self.delay_threshold_ms >= 0.0) {
            return Err(ConfigError::NegativeThreshold(self.delay_threshold_ms));
        }
        if self.run_length.is_none() && self.until_ms.is_none() {
            return Err(ConfigError::NoStopCondition);
        }
        // run_length 只数 switch 0 的完成；switch 0 没有任何输入时只能靠 until_ms 停下
        let feeds_switch0 = self.switches[0].arrival_rate_per_sec.is_some()
            || self
                .routing
                .as_ref()
                .is_some_and(|r| r.primary == 0 || r.secondary == 0);
        if self.until_ms.is_none() && !feeds_switch0 {
            return Err(ConfigError::StopConditionUnreachable);
        }
        Ok(())
    }

    pub fn delay_threshold(&self) -> SimTime {
        SimTime::from_millis_f64(self.delay_threshold_ms)
    }

    /// 仿真时间上限；只设了 run_length 时为 `SimTime(u64::MAX)`。
    pub fn horizon(&self) -> SimTime {
        self.until_ms
            .map(SimTime::from_millis)
            .unwrap_or(SimTime(u64::MAX))
    }
}
