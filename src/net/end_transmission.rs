//! 发送结束事件

use super::id::SwitchId;
use super::net_world::NetWorld;
use crate::sim::{Event, Simulator, World};

/// 事件：`switch` 链路上的 packet 发送完毕。
#[derive(Debug)]
pub struct EndTransmission {
    pub switch: SwitchId,
}

impl Event for EndTransmission {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let EndTransmission { switch } = *self;
        let w = world
            .as_any_mut()
            .downcast_mut::<NetWorld>()
            .expect("world must be NetWorld");
        w.net.complete_transmission(switch, sim);
    }

    fn description(&self) -> &'static str {
        "packet xmt end"
    }
}
