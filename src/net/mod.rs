//! 交换机网络模块
//!
//! 数据包、链路、缓冲区统计、分流策略，以及驱动它们的到达/发送结束事件。

// 子模块声明
mod end_transmission;
mod id;
mod link;
mod net_world;
mod network;
mod packet;
mod packet_arrival;
mod progress;
mod routing;
mod stats;
mod switch;

// 重新导出公共接口
pub use end_transmission::EndTransmission;
pub use id::SwitchId;
pub use link::{Link, LinkState};
pub use net_world::NetWorld;
pub use network::{Completion, Network};
pub use packet::{Packet, PacketStatus};
pub use packet_arrival::PacketArrival;
pub use progress::Progress;
pub use routing::SplitRouting;
pub use stats::SwitchStats;
pub use switch::Switch;
