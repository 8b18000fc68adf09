//! 交换机网络
//!
//! 到达生成、单服务台发送控制与完成后的分流都在这里：
//! - `generate_arrival`：创建 packet，计入到达，交给 `admit`，按需安排下一次外生到达；
//! - `admit`：链路忙则入缓冲区，否则立即开始发送；
//! - `complete_transmission`：统计时延，触发分流，再从缓冲区取下一个。

use super::end_transmission::EndTransmission;
use super::id::SwitchId;
use super::packet::Packet;
use super::packet_arrival::PacketArrival;
use super::progress::Progress;
use super::routing::SplitRouting;
use super::stats::SwitchStats;
use super::switch::Switch;
use crate::error::ConfigError;
use crate::rng::Rng;
use crate::sim::{SimConfig, SimTime, Simulator};
use tracing::{debug, info, trace};

/// 一次发送完成的结果。packet 本身在此之前已被丢弃。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub switch: SwitchId,
    pub packet_id: u64,
    pub delay: SimTime,
    pub routed_to: Option<SwitchId>,
}

/// 交换机网络
#[derive(Debug)]
pub struct Network {
    switches: Vec<Switch>,
    routing: Option<SplitRouting>,
    routing_rng: Rng,
    delay_threshold: SimTime,
    run_length: Option<u64>,
    progress: Progress,
    next_pkt_id: u64,
}

impl Network {
    /// 按配置构建网络。
    ///
    /// 随机流的派生顺序固定：先给每个交换机的到达时钟各派生一条，最后派生路由流。
    /// 因此是否启用路由不会影响任何交换机的外生到达序列。
    pub fn from_config(cfg: &SimConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let mut root = Rng::from_seed(cfg.seed);
        let switches = cfg
            .switches
            .iter()
            .enumerate()
            .map(|(i, sw)| Switch::new(SwitchId(i), sw, root.create_child()))
            .collect();
        let routing_rng = root.create_child();
        info!(
            seed = cfg.seed,
            switches = cfg.switches.len(),
            routing = cfg.routing.is_some(),
            "构建交换机网络"
        );
        Ok(Self {
            switches,
            routing: cfg.routing.as_ref().map(SplitRouting::from_config),
            routing_rng,
            delay_threshold: cfg.delay_threshold(),
            run_length: cfg.run_length,
            progress: Progress::new(cfg.progress_every, cfg.run_length),
            next_pkt_id: 0,
        })
    }

    pub fn switches(&self) -> &[Switch] {
        &self.switches
    }

    pub fn switch(&self, id: SwitchId) -> &Switch {
        self.switches
            .get(id.0)
            .unwrap_or_else(|| panic!("unknown switch index {}", id.0))
    }

    fn switch_mut(&mut self, id: SwitchId) -> &mut Switch {
        self.switches
            .get_mut(id.0)
            .unwrap_or_else(|| panic!("unknown switch index {}", id.0))
    }

    pub fn stats(&self, id: SwitchId) -> &SwitchStats {
        &self.switch(id).stats
    }

    /// 所有交换机统计的快照
    pub fn snapshot(&self) -> Vec<SwitchStats> {
        self.switches.iter().map(|s| s.stats.clone()).collect()
    }

    pub fn routing(&self) -> Option<&SplitRouting> {
        self.routing.as_ref()
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn delay_threshold(&self) -> SimTime {
        self.delay_threshold
    }

    /// switch 0 的完成数达到 run_length 时结束。
    pub fn is_done(&self) -> bool {
        match (self.run_length, self.switches.first()) {
            (Some(n), Some(sw)) => sw.stats.number_of_packets_processed >= n,
            _ => false,
        }
    }

    /// 为每个有外生到达过程的交换机安排第一次到达。
    pub fn start(&mut self, sim: &mut Simulator) {
        for i in 0..self.switches.len() {
            self.schedule_next_arrival(SwitchId(i), sim);
        }
    }

    fn schedule_next_arrival(&mut self, switch: SwitchId, sim: &mut Simulator) {
        let Some(gap) = self.switch_mut(switch).draw_interarrival() else {
            return;
        };
        let at = sim.now().saturating_add(gap);
        trace!(%switch, at = ?at, "安排下一次外生到达");
        sim.schedule(
            at,
            PacketArrival {
                switch,
                reschedule: true,
            },
        );
    }

    fn make_packet(&mut self, switch: SwitchId, now: SimTime) -> Packet {
        let id = self.next_pkt_id;
        self.next_pkt_id = self.next_pkt_id.wrapping_add(1);
        let service_time = self.switch(switch).service_time_for();
        Packet::new(id, now, service_time)
    }

    /// 一个新 packet 到达 `switch`。
    ///
    /// `reschedule` 为 true 表示这是交换机自己的 Poisson 到达，会安排下一次到达；
    /// 路由注入的到达传 false，不推动目标交换机的到达时钟。
    #[tracing::instrument(skip(self, sim), fields(switch = %switch))]
    pub fn generate_arrival(&mut self, switch: SwitchId, reschedule: bool, sim: &mut Simulator) {
        let now = sim.now();
        let pkt = self.make_packet(switch, now);
        debug!(pkt_id = pkt.id, now = ?now, "📦 packet 到达");

        let stats = &mut self.switch_mut(switch).stats;
        stats.arrival_count += 1;
        if reschedule {
            stats.exogenous_arrivals += 1;
            stats.last_exogenous_arrival = Some(now);
        } else {
            stats.routed_arrivals += 1;
        }

        self.admit(switch, pkt, sim);

        if reschedule {
            self.schedule_next_arrival(switch, sim);
        }
    }

    /// 链路忙则排队，否则立即发送。
    pub fn admit(&mut self, switch: SwitchId, pkt: Packet, sim: &mut Simulator) {
        let sw = self.switch_mut(switch);
        if sw.link.is_busy() {
            trace!(%switch, pkt_id = pkt.id, queued = sw.buffer.len(), "链路忙，进入缓冲区");
            sw.buffer.enqueue(pkt);
            sw.stats.max_buffer_len = sw.stats.max_buffer_len.max(sw.buffer.len());
        } else {
            self.start_transmission(switch, pkt, sim);
        }
    }

    /// 把 packet 放上链路，并在 `now + service_time` 安排发送结束事件。
    pub fn start_transmission(&mut self, switch: SwitchId, pkt: Packet, sim: &mut Simulator) {
        let done_at = sim.now().saturating_add(pkt.service_time);
        trace!(%switch, pkt_id = pkt.id, done_at = ?done_at, "开始发送");
        self.switch_mut(switch).link.occupy(pkt);
        sim.schedule(done_at, EndTransmission { switch });
    }

    /// 发送结束：统计时延，丢弃 packet，按需分流，然后立即服务缓冲区队首。
    #[tracing::instrument(skip(self, sim), fields(switch = %switch))]
    pub fn complete_transmission(&mut self, switch: SwitchId, sim: &mut Simulator) -> Completion {
        let now = sim.now();
        let threshold = self.delay_threshold;

        let sw = self.switch_mut(switch);
        let pkt = sw
            .link
            .vacate()
            .unwrap_or_else(|| panic!("{switch}: transmission ended on an idle link"));
        let delay = pkt.delay_at(now);
        sw.stats.number_of_packets_processed += 1;
        sw.stats.accumulated_delay = sw.stats.accumulated_delay.saturating_add(delay);
        if delay > threshold {
            sw.stats.number_above_threshold += 1;
        }
        let packet_id = pkt.id;
        drop(pkt);
        debug!(pkt_id = packet_id, delay = ?delay, "✅ 发送完成");

        if switch == SwitchId(0) {
            let stats = &self.switches[0].stats;
            self.progress.on_completion(now, stats);
        }

        let routed_to = self
            .routing
            .as_ref()
            .filter(|r| r.applies_to(switch))
            .map(|r| r.choose(&mut self.routing_rng));
        if let Some(target) = routed_to {
            trace!(from = %switch, to = %target, "分流注入");
            self.generate_arrival(target, false, sim);
        }

        if let Some(next) = self.switch_mut(switch).buffer.dequeue() {
            self.start_transmission(switch, next, sim);
        }

        Completion {
            switch,
            packet_id,
            delay,
            routed_to,
        }
    }
}
