//! 拓扑构建

pub mod three_switch;
