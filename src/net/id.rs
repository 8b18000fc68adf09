//! 标识符类型
//!
//! 交换机按配置中的下标编号（0, 1, 2, ...）。

use std::fmt;

/// 交换机标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SwitchId(pub usize);

impl fmt::Display for SwitchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 对外按 1 起编号，与 switch1/switch2/switch3 的命名一致
        write!(f, "switch{}", self.0 + 1)
    }
}
