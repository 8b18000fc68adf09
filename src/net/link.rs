//! 链路（单服务台）
//!
//! 链路忙当且仅当它持有一个正在发送的 packet。

use super::packet::{Packet, PacketStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Idle,
    Busy,
}

#[derive(Debug, Default)]
pub struct Link {
    occupant: Option<Packet>,
}

impl Link {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LinkState {
        if self.occupant.is_some() {
            LinkState::Busy
        } else {
            LinkState::Idle
        }
    }

    pub fn is_busy(&self) -> bool {
        self.state() == LinkState::Busy
    }

    /// 把 packet 放上链路并标记为发送中。链路已忙是调用方的逻辑错误。
    pub fn occupy(&mut self, mut pkt: Packet) {
        if let Some(cur) = &self.occupant {
            panic!(
                "link already busy with packet {} while occupying packet {}",
                cur.id, pkt.id
            );
        }
        pkt.status = PacketStatus::Transmitting;
        self.occupant = Some(pkt);
    }

    /// 取下当前 packet，链路变为空闲。
    pub fn vacate(&mut self) -> Option<Packet> {
        self.occupant.take()
    }

    pub fn occupant(&self) -> Option<&Packet> {
        self.occupant.as_ref()
    }
}
