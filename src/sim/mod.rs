//! 仿真核心模块
//!
//! 此模块包含事件驱动仿真的核心组件：仿真时间、事件、世界、仿真器与运行配置。

// 子模块声明
mod config;
mod event;
mod scheduled_event;
mod simulator;
mod time;
mod world;

// 重新导出公共接口
pub use config::{
    DEFAULT_ARRIVAL_RATE, DEFAULT_ARRIVAL_RATE_SWITCH_2_3, DEFAULT_DELAY_THRESHOLD_MS,
    DEFAULT_PROB1_2, DEFAULT_PROGRESS_EVERY, DEFAULT_RUN_LENGTH, DEFAULT_SEED,
    DEFAULT_SERVICE_TIME_MS, DEFAULT_SERVICE_TIME_SWITCH_2_3_MS, SimConfig, SplitRoutingConfig,
    SwitchConfig,
};
pub use event::Event;
pub use scheduled_event::ScheduledEvent;
pub use simulator::Simulator;
pub use time::SimTime;
pub use world::World;
