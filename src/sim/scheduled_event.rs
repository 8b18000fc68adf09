//! 调度事件
//!
//! 事件队列中的条目，按 (时间, 序列号) 排序。

use super::event::Event;
use super::time::SimTime;
use std::cmp::Ordering;

/// 调度事件：执行时间 + 插入序列号 + 事件对象。
///
/// 同一时刻的事件按插入顺序执行。
pub struct ScheduledEvent {
    pub(crate) at: SimTime,
    pub(crate) seq: u64,
    pub(crate) ev: Box<dyn Event>,
}

impl ScheduledEvent {
    fn key(&self) -> (SimTime, u64) {
        (self.at, self.seq)
    }
}

// BinaryHeap 是 max-heap，这里反向比较得到最早事件优先。
impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ScheduledEvent {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ScheduledEvent {}
