//! 事件 trait
//!
//! 定义仿真事件接口。

use super::simulator::Simulator;
use super::world::World;

/// 事件：可被调度执行。使用 `self: Box<Self>` 以便事件把附带的数据（例如交换机编号）移交给处理函数。
pub trait Event: Send + 'static {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World);

    /// 事件描述，仅用于日志。
    fn description(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
