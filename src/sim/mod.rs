//! 仿真核心模块
//!
//! 此模块包含事件驱动仿真的核心组件：仿真时间、事件与事件时间线。

mod event;
mod time;
mod timeline;

pub use event::{Event, EventKind};
pub use time::{MINUTES_PER_DAY, MINUTES_PER_HOUR, SimTime};
pub use timeline::Timeline;
