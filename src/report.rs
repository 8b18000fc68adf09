//! 运行报告
//!
//! 从原始计数推导均值时延、超阈值比例、吞吐率，输出为 JSON 或 CSV。

use serde::{Deserialize, Serialize};

use crate::net::{Network, SwitchStats};
use crate::sim::SimTime;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchReport {
    pub index: usize,
    pub name: String,
    pub arrival_rate_per_sec: Option<f64>,
    pub service_time_ms: f64,
    pub stats: SwitchStats,
    /// 仿真结束时仍在链路或缓冲区中的 packet 数
    pub in_system: usize,
    pub mean_delay_ms: Option<f64>,
    pub fraction_above_threshold: Option<f64>,
    pub throughput_per_sec: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub seed: u64,
    pub now_secs: f64,
    pub delay_threshold_ms: f64,
    pub switches: Vec<SwitchReport>,
}

pub const CSV_HEADER: &str = "seed,switch,arrival_rate,service_time_ms,arrival_count,exogenous_arrivals,routed_arrivals,processed,above_threshold,max_buffer_len,mean_delay_ms,fraction_above_threshold,throughput_per_sec";

fn ratio(num: f64, den: u64) -> Option<f64> {
    (den > 0).then(|| num / den as f64)
}

impl RunReport {
    pub fn collect(seed: u64, now: SimTime, net: &Network) -> Self {
        let elapsed = now.as_secs_f64();
        let switches = net
            .switches()
            .iter()
            .map(|sw| {
                let st = &sw.stats;
                let processed = st.number_of_packets_processed;
                SwitchReport {
                    index: sw.id.0,
                    name: sw.name.clone(),
                    arrival_rate_per_sec: sw.arrival_rate_per_sec,
                    service_time_ms: sw.service_time.as_millis_f64(),
                    stats: st.clone(),
                    in_system: sw.in_system(),
                    mean_delay_ms: ratio(st.accumulated_delay.as_millis_f64(), processed),
                    fraction_above_threshold: ratio(st.number_above_threshold as f64, processed),
                    throughput_per_sec: (elapsed > 0.0).then(|| processed as f64 / elapsed),
                }
            })
            .collect();
        Self {
            seed,
            now_secs: elapsed,
            delay_threshold_ms: net.delay_threshold().as_millis_f64(),
            switches,
        }
    }

    /// 每个交换机一行，列顺序见 `CSV_HEADER`。
    pub fn csv_lines(&self) -> Vec<String> {
        let opt = |v: Option<f64>| v.map(|x| format!("{x:.6}")).unwrap_or_default();
        self.switches
            .iter()
            .map(|s| {
                format!(
                    "{},{},{},{},{},{},{},{},{},{},{},{},{}",
                    self.seed,
                    s.index + 1,
                    s.arrival_rate_per_sec.map(|r| r.to_string()).unwrap_or_default(),
                    s.service_time_ms,
                    s.stats.arrival_count,
                    s.stats.exogenous_arrivals,
                    s.stats.routed_arrivals,
                    s.stats.number_of_packets_processed,
                    s.stats.number_above_threshold,
                    s.stats.max_buffer_len,
                    opt(s.mean_delay_ms),
                    opt(s.fraction_above_threshold),
                    opt(s.throughput_per_sec),
                )
            })
            .collect()
    }
}
