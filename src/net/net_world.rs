//! 网络世界实现
//!
//! 持有交换机网络，并把 run_length 停止条件暴露给仿真器。

use super::network::Network;
use crate::error::ConfigError;
use crate::sim::{SimConfig, World};
use std::any::Any;

#[derive(Debug)]
pub struct NetWorld {
    pub net: Network,
}

impl NetWorld {
    pub fn new(net: Network) -> Self {
        Self { net }
    }

    pub fn from_config(cfg: &SimConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(Network::from_config(cfg)?))
    }
}

impl World for NetWorld {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn is_done(&self) -> bool {
        self.net.is_done()
    }
}
