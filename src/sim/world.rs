//! 世界 trait
//!
//! 定义仿真世界接口。

use super::simulator::Simulator;
use std::any::Any;

/// 仿真世界：由业务层实现（例如交换机网络/统计等）。
pub trait World: Any {
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn on_tick(&mut self, _sim: &mut Simulator) {}
    /// 每个事件执行完后检查；返回 true 时仿真器停止派发后续事件。
    fn is_done(&self) -> bool {
        false
    }
}
