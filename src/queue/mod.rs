//! 队列策略（Queue disciplines）
//!
//! 交换机缓冲区只需要 FIFO；其它策略（优先级等）需要时在此扩展。

use crate::net::Packet;

mod fifo;

pub use fifo::FifoQueue;

/// Packet 队列抽象
pub trait PacketQueue: std::fmt::Debug {
    /// 入队
    fn enqueue(&mut self, pkt: Packet);
    /// 出队：按队列策略返回下一个 packet
    fn dequeue(&mut self) -> Option<Packet>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
