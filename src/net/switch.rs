//! 交换机
//!
//! 一个交换机 = 一条链路（单服务台）+ 一个 FIFO 缓冲区 + 统计计数，
//! 外加它自己的到达率、服务时间和到达时钟随机流。

use super::id::SwitchId;
use super::link::Link;
use super::stats::SwitchStats;
use crate::queue::{FifoQueue, PacketQueue};
use crate::rng::Rng;
use crate::sim::{SimTime, SwitchConfig};

#[derive(Debug)]
pub struct Switch {
    pub id: SwitchId,
    pub name: String,
    /// 外生到达率（每秒）；None 表示只接收路由注入的 packet
    pub arrival_rate_per_sec: Option<f64>,
    pub service_time: SimTime,
    pub link: Link,
    pub buffer: Box<dyn PacketQueue>,
    pub stats: SwitchStats,
    pub(crate) arrival_rng: Rng,
}

impl Switch {
    pub fn new(id: SwitchId, cfg: &SwitchConfig, arrival_rng: Rng) -> Self {
        Self {
            id,
            name: cfg.name.clone().unwrap_or_else(|| id.to_string()),
            arrival_rate_per_sec: cfg.arrival_rate_per_sec,
            service_time: SimTime::from_millis_f64(cfg.service_time_ms),
            link: Link::new(),
            buffer: Box::new(FifoQueue::new()),
            stats: SwitchStats::default(),
            arrival_rng,
        }
    }

    /// 服务时间只取决于交换机本身（目前是固定值）。
    pub fn service_time_for(&self) -> SimTime {
        self.service_time
    }

    /// 下一次外生到达的间隔：均值 1/rate 的指数分布。
    pub(crate) fn draw_interarrival(&mut self) -> Option<SimTime> {
        let rate = self.arrival_rate_per_sec?;
        let secs = self.arrival_rng.exponential(1.0 / rate);
        Some(SimTime::from_secs_f64(secs))
    }

    /// 链路与缓冲区中尚未完成的 packet 数
    pub fn in_system(&self) -> usize {
        self.buffer.len() + usize::from(self.link.is_busy())
    }
}
