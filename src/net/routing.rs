//! 完成后分流
//!
//! `from` 交换机每完成一个 packet，就做一次 Bernoulli 试验，
//! 把一个新的到达注入 `primary` 或 `secondary`。

use super::id::SwitchId;
use crate::rng::Rng;
use crate::sim::SplitRoutingConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct SplitRouting {
    pub from: SwitchId,
    pub primary: SwitchId,
    pub secondary: SwitchId,
    prob_primary: f64,
}

impl SplitRouting {
    pub fn new(from: SwitchId, primary: SwitchId, secondary: SwitchId, prob_primary: f64) -> Self {
        Self {
            from,
            primary,
            secondary,
            prob_primary,
        }
    }

    pub fn from_config(cfg: &SplitRoutingConfig) -> Self {
        Self::new(
            SwitchId(cfg.from),
            SwitchId(cfg.primary),
            SwitchId(cfg.secondary),
            cfg.prob_primary,
        )
    }

    pub fn prob_primary(&self) -> f64 {
        self.prob_primary
    }

    /// 一次 `[0, 100)` 抽样是否走 primary：`draw < prob_primary * 100`。
    /// 非整百分比按实数比较，例如 0.294 接受 0..=29 共 30 个取值。
    pub fn admits(&self, draw: u32) -> bool {
        f64::from(draw) < self.prob_primary * 100.0
    }

    /// 只有 `from` 的完成会触发分流。
    pub fn applies_to(&self, switch: SwitchId) -> bool {
        self.from == switch
    }

    pub fn choose(&self, rng: &mut Rng) -> SwitchId {
        if self.admits(rng.uniform_int(0, 100)) {
            self.primary
        } else {
            self.secondary
        }
    }
}
