#![deny(clippy::expect_used, clippy::unwrap_used)]

//! The root of the real-time connection core library.
//! 实时连接核心库的根。
//!
//! `tether` keeps a persistent bidirectional messaging channel alive between
//! a mobile client and a backend messaging service: it owns the connection
//! state machine, buffers outbound messages across outages, remembers
//! channel memberships so they survive reconnects, and fans transport events
//! out to typed subscribers.
//!
//! `tether` 在移动客户端与后端消息服务之间维持一条持久的双向消息通道：
//! 它持有连接状态机，在断线期间缓冲出站消息，记住频道成员关系使其在
//! 重连后得以保留，并将传输事件分发给类型化的订阅者。

pub mod auth;
pub mod bus;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;
pub mod wire;

mod membership;
mod queue;

#[cfg(test)]
mod testing;
