//! FIFO 缓冲区
//!
//! 无容量上限：链路忙时到达的 packet 一律排队，按入队顺序服务。

use std::collections::VecDeque;

use crate::net::Packet;

use super::PacketQueue;

#[derive(Debug, Default)]
pub struct FifoQueue {
    q: VecDeque<Packet>,
}

impl FifoQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PacketQueue for FifoQueue {
    fn enqueue(&mut self, pkt: Packet) {
        self.q.push_back(pkt);
    }

    fn dequeue(&mut self) -> Option<Packet> {
        self.q.pop_front()
    }

    fn len(&self) -> usize {
        self.q.len()
    }
}
