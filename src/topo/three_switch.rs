//! 三交换机链构建
//!
//! 拓扑结构：switch1 -(PROB1_2)-> switch2
//!                   \-(1-PROB1_2)-> switch3
//! switch2、switch3 另有各自独立的外生到达。

use crate::sim::{
    DEFAULT_ARRIVAL_RATE, DEFAULT_ARRIVAL_RATE_SWITCH_2_3, DEFAULT_DELAY_THRESHOLD_MS,
    DEFAULT_PROB1_2, DEFAULT_PROGRESS_EVERY, DEFAULT_RUN_LENGTH, DEFAULT_SEED,
    DEFAULT_SERVICE_TIME_MS, DEFAULT_SERVICE_TIME_SWITCH_2_3_MS, SimConfig, SplitRoutingConfig,
    SwitchConfig,
};

/// 三交换机链配置选项
#[derive(Debug, Clone, PartialEq)]
pub struct ThreeSwitchOpts {
    pub seed: u64,
    /// switch1 外生到达率（每秒）
    pub arrival_rate: f64,
    /// switch2/3 外生到达率；None 表示只接收 switch1 分流过来的 packet
    pub arrival_rate_switch_2: Option<f64>,
    pub arrival_rate_switch_3: Option<f64>,
    pub service_time_ms: f64,
    pub service_time_switch_2_3_ms: f64,
    /// None 关闭分流
    pub prob1_2: Option<f64>,
    pub delay_threshold_ms: f64,
    pub run_length: Option<u64>,
    pub until_ms: Option<u64>,
    pub progress_every: u64,
}

impl Default for ThreeSwitchOpts {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            arrival_rate: DEFAULT_ARRIVAL_RATE,
            arrival_rate_switch_2: Some(DEFAULT_ARRIVAL_RATE_SWITCH_2_3),
            arrival_rate_switch_3: Some(DEFAULT_ARRIVAL_RATE_SWITCH_2_3),
            service_time_ms: DEFAULT_SERVICE_TIME_MS,
            service_time_switch_2_3_ms: DEFAULT_SERVICE_TIME_SWITCH_2_3_MS,
            prob1_2: Some(DEFAULT_PROB1_2),
            delay_threshold_ms: DEFAULT_DELAY_THRESHOLD_MS,
            run_length: Some(DEFAULT_RUN_LENGTH),
            until_ms: None,
            progress_every: DEFAULT_PROGRESS_EVERY,
        }
    }
}

/// 构建三交换机链的运行配置（下标 0/1/2 对应 switch1/2/3）
pub fn build_three_switch(opts: &ThreeSwitchOpts) -> SimConfig {
    let switch = |name: &str, rate: Option<f64>, service_time_ms: f64| SwitchConfig {
        name: Some(name.to_string()),
        arrival_rate_per_sec: rate,
        service_time_ms,
    };
    SimConfig {
        seed: opts.seed,
        switches: vec![
            switch("switch1", Some(opts.arrival_rate), opts.service_time_ms),
            switch(
                "switch2",
                opts.arrival_rate_switch_2,
                opts.service_time_switch_2_3_ms,
            ),
            switch(
                "switch3",
                opts.arrival_rate_switch_3,
                opts.service_time_switch_2_3_ms,
            ),
        ],
        routing: opts.prob1_2.map(|prob_primary| SplitRoutingConfig {
            from: 0,
            primary: 1,
            secondary: 2,
            prob_primary,
        }),
        delay_threshold_ms: opts.delay_threshold_ms,
        run_length: opts.run_length,
        until_ms: opts.until_ms,
        progress_every: opts.progress_every,
    }
}
