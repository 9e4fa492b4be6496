//! 对底层双向消息传输的抽象。
//! Traits for abstracting over the underlying bidirectional message transport.
//!
//! The transport is deliberately dumb: it opens, emits named events, reports
//! incoming events, and closes with a reason. All reconnection, queueing, and
//! ordering logic lives above it, so any library-provided retry machinery
//! must be disabled in the implementation.
//!
//! 传输被有意设计得很“笨”：它只负责打开、发送命名事件、上报传入事件、
//! 以及带原因地关闭。所有重连、排队与排序逻辑都在其上层，
//! 因此实现中必须禁用库自带的重试机制。

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::mpsc;

/// Why the transport closed.
/// 传输关闭的原因。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseReason {
    /// Deliberately closed by this client. Terminal for the connection
    /// cycle; no automatic reconnect.
    /// 由本客户端主动关闭。对本轮连接而言是终态，不会自动重连。
    Client,
    /// Closed by the server or the network, with the transport's reason
    /// string (server restart, network loss, ...).
    /// 由服务器或网络关闭，附带传输给出的原因字符串（服务器重启、断网等）。
    Remote(String),
}

/// An event surfaced by an open transport.
/// 打开的传输上报的事件。
#[derive(Debug, Clone)]
pub enum TransportEvent {
    /// A named event arrived from the server.
    /// 从服务器到达的命名事件。
    Message {
        /// The event name.
        /// 事件名。
        event: String,
        /// The raw JSON payload.
        /// 原始JSON载荷。
        payload: Bytes,
    },
    /// The transport closed.
    /// 传输已关闭。
    Closed {
        /// Why it closed.
        /// 关闭原因。
        reason: CloseReason,
    },
}

/// An open bidirectional typed-message channel.
///
/// 一个打开的双向类型化消息通道。
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Emits a named event with an encoded payload.
    /// 发送一个带已编码载荷的命名事件。
    async fn emit(&self, event: &str, payload: Bytes) -> Result<()>;

    /// Returns whether the underlying link is currently open.
    /// 返回底层链路当前是否打开。
    fn is_open(&self) -> bool;

    /// Closes the link. May wait for a server acknowledgment; callers bound
    /// this with a grace timeout.
    /// 关闭链路。可能会等待服务器确认；调用方会用宽限超时来约束它。
    async fn close(&self) -> Result<()>;
}

/// Opens authenticated transports.
///
/// This is the seam between the connection core and a concrete transport
/// library; tests provide scripted implementations.
///
/// 打开经过认证的传输。
///
/// 这是连接核心与具体传输库之间的接缝；测试会提供脚本化的实现。
#[async_trait]
pub trait Connector: Send + Sync + 'static {
    /// The transport type this connector opens.
    /// 此连接器打开的传输类型。
    type Transport: Transport;

    /// Performs the handshake with the given bearer token and returns the
    /// open transport together with the receiver of its events.
    /// 使用给定的 bearer 令牌执行握手，返回打开的传输及其事件接收端。
    async fn connect(
        &self,
        token: &str,
    ) -> Result<(Self::Transport, mpsc::Receiver<TransportEvent>)>;
}
