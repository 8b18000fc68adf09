//! 统计信息
//!
//! 每个交换机一份原始计数；均值、比例等派生量由 `report` 计算。

use serde::{Deserialize, Serialize};

use crate::sim::SimTime;

/// 交换机统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchStats {
    /// 进入本交换机的 packet 数（外生 + 路由注入）
    pub arrival_count: u64,
    pub exogenous_arrivals: u64,
    pub routed_arrivals: u64,
    pub number_of_packets_processed: u64,
    /// 已完成 packet 的时延总和（纳秒，精确）
    pub accumulated_delay: SimTime,
    pub number_above_threshold: u64,
    /// 最近一次外生到达的时刻
    pub last_exogenous_arrival: Option<SimTime>,
    /// 缓冲区出现过的最大长度
    pub max_buffer_len: usize,
}
