//! 数据包类型
//!
//! packet 只承载到达时刻与服务时长，本身没有行为。

use crate::sim::SimTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketStatus {
    Waiting,
    Transmitting,
}

/// 交换机中的一个 packet。所有权在缓冲区与链路之间移动，完成后即被丢弃。
#[derive(Debug)]
pub struct Packet {
    pub id: u64,
    pub arrive_time: SimTime,
    pub service_time: SimTime,
    pub status: PacketStatus,
}

impl Packet {
    pub fn new(id: u64, arrive_time: SimTime, service_time: SimTime) -> Self {
        Self {
            id,
            arrive_time,
            service_time,
            status: PacketStatus::Waiting,
        }
    }

    /// 在 `now` 完成时的时延
    pub fn delay_at(&self, now: SimTime) -> SimTime {
        debug_assert!(now >= self.arrive_time, "completion before arrival");
        now.saturating_sub(self.arrive_time)
    }
}
