//! 仿真器
//!
//! 事件驱动仿真器：维护当前时间与按时间排序的事件队列，逐个派发事件。

use super::event::Event;
use super::scheduled_event::ScheduledEvent;
use super::time::SimTime;
use super::world::World;
use std::collections::BinaryHeap;
use tracing::{debug, info, trace};

/// 事件驱动仿真器：维护当前时间与事件队列。
#[derive(Default)]
pub struct Simulator {
    now: SimTime,
    next_seq: u64,
    executed: u64,
    q: BinaryHeap<ScheduledEvent>,
}

impl Simulator {
    /// 获取当前仿真时间
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// 已执行的事件总数
    pub fn executed(&self) -> u64 {
        self.executed
    }

    /// 队列中尚未执行的事件数
    pub fn pending(&self) -> usize {
        self.q.len()
    }

    /// 调度事件在指定时间执行。
    ///
    /// 不允许调度到过去：`at < now` 视为调用方的逻辑错误。
    pub fn schedule<E: Event>(&mut self, at: SimTime, ev: E) {
        assert!(
            at >= self.now,
            "cannot schedule {} in the past: at={:?} now={:?}",
            ev.description(),
            at,
            self.now
        );
        let seq = self.next_seq;
        trace!(now = ?self.now, at = ?at, seq, event = ev.description(), "调度事件");

        self.next_seq = self.next_seq.wrapping_add(1);
        self.q.push(ScheduledEvent {
            at,
            seq,
            ev: Box::new(ev),
        });
    }

    /// 执行队首事件；队列为空时返回 false。
    fn step(&mut self, world: &mut dyn World) -> bool {
        let Some(item) = self.q.pop() else {
            return false;
        };
        self.now = item.at;
        self.executed += 1;
        debug!(
            event_num = self.executed,
            now = ?self.now,
            seq = item.seq,
            event = item.ev.description(),
            remaining_queue = self.q.len(),
            "执行事件"
        );
        item.ev.execute(self, world);
        world.on_tick(self);
        true
    }

    /// 运行直到事件队列为空、世界报告结束，或到达 `until`。
    ///
    /// 因队列耗尽或越过 `until` 而返回时，时间推进到 `until`。
    pub fn run_until(&mut self, until: SimTime, world: &mut dyn World) {
        while let Some(top) = self.q.peek() {
            if top.at > until || world.is_done() {
                break;
            }
            self.step(world);
        }
        if !world.is_done() {
            self.now = self.now.max(until);
        }
    }

    /// 运行直到事件队列为空或世界报告结束。
    #[tracing::instrument(skip(self, world))]
    pub fn run(&mut self, world: &mut dyn World) {
        info!("▶️  开始运行仿真");
        debug!(now = ?self.now, queue_size = self.q.len(), "初始状态");

        let start = self.executed;
        while !world.is_done() && self.step(world) {}

        info!(
            total_events = self.executed - start,
            final_time = ?self.now,
            "✅ 仿真完成"
        );
    }
}
