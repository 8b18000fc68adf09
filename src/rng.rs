//! 随机变量源
//!
//! 可复现的伪随机流：同一个种子给出完全相同的变量序列。
//! 每个交换机的到达时钟、路由决策各用一条独立子流，互不干扰。

use rand::SeedableRng;
use rand_distr::{Distribution, Exp, Uniform};
use rand_xoshiro::Xoshiro256PlusPlus;

#[derive(Debug, Clone)]
pub struct Rng {
    rng: Xoshiro256PlusPlus,
}

impl Rng {
    #[must_use]
    pub fn from_seed(seed: u64) -> Rng {
        Rng {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    /// 派生一条独立子流。父流前进固定的步数，因此派生顺序决定子流内容。
    #[must_use]
    pub fn create_child(&mut self) -> Rng {
        let mut jumped = self.rng.clone();
        jumped.jump();
        self.rng.long_jump();
        Rng { rng: jumped }
    }

    /// 均值为 `mean` 的指数分布变量。`mean` 必须为正。
    pub fn exponential(&mut self, mean: f64) -> f64 {
        match Exp::new(1.0 / mean) {
            Ok(exp) => exp.sample(&mut self.rng),
            Err(_) => panic!("exponential mean must be positive, got {mean}"),
        }
    }

    /// `[lo, hi)` 上的均匀整数。
    pub fn uniform_int(&mut self, lo: u32, hi: u32) -> u32 {
        assert!(lo < hi, "empty range [{lo}, {hi})");
        Uniform::new(lo, hi).sample(&mut self.rng)
    }
}
