//! 到达事件

use super::id::SwitchId;
use super::net_world::NetWorld;
use crate::sim::{Event, Simulator, World};

/// 事件：`switch` 发生一次到达。
///
/// 外生到达时钟只调度 `reschedule: true`。分流注入在 `complete_transmission`
/// 里直接调用 `generate_arrival`，不经过事件；`reschedule: false` 用于在
/// 指定时刻手动注入单个 packet，不会启动该交换机的到达时钟。
#[derive(Debug)]
pub struct PacketArrival {
    pub switch: SwitchId,
    pub reschedule: bool,
}

impl Event for PacketArrival {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let PacketArrival { switch, reschedule } = *self;
        let w = world
            .as_any_mut()
            .downcast_mut::<NetWorld>()
            .expect("world must be NetWorld");
        w.net.generate_arrival(switch, reschedule, sim);
    }

    fn description(&self) -> &'static str {
        if self.reschedule {
            "packet arrival"
        } else {
            "packet arrival (no reschedule)"
        }
    }
}
