//! 单次运行
//!
//! 按配置建网络、安排首批到达、跑到停止条件，返回仿真器与世界。

use tracing::info;

use crate::error::ConfigError;
use crate::net::NetWorld;
use crate::report::RunReport;
use crate::sim::{SimConfig, Simulator};

pub fn simulate(cfg: &SimConfig) -> Result<(Simulator, NetWorld), ConfigError> {
    let mut sim = Simulator::default();
    let mut world = NetWorld::from_config(cfg)?;
    world.net.start(&mut sim);

    match cfg.until_ms {
        Some(_) => sim.run_until(cfg.horizon(), &mut world),
        None => sim.run(&mut world),
    }
    info!(
        seed = cfg.seed,
        now_secs = sim.now().as_secs_f64(),
        events = sim.executed(),
        "运行结束"
    );
    Ok((sim, world))
}

/// 跑一次并汇总成报告。
pub fn run(cfg: &SimConfig) -> Result<RunReport, ConfigError> {
    let (sim, world) = simulate(cfg)?;
    Ok(RunReport::collect(cfg.seed, sim.now(), &world.net))
}
