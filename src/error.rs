//! 定义了库中所有可能的错误类型。
//! Defines all possible error types in the library.

use thiserror::Error;

/// The primary error type for the connection core.
/// 连接核心的主要错误类型。
#[derive(Debug, Error)]
pub enum Error {
    /// No bearer token is available from the token provider.
    /// 令牌提供者没有可用的 bearer 令牌。
    #[error("authentication token is missing")]
    TokenMissing,

    /// The bearer token is expired. The connect attempt is aborted before
    /// any transport activity.
    /// bearer 令牌已过期。连接尝试在任何传输活动之前被中止。
    #[error("authentication token is expired")]
    TokenExpired,

    /// The transport handshake did not complete within the configured
    /// connect timeout.
    /// 传输握手未在配置的连接超时内完成。
    #[error("connection attempt timed out")]
    ConnectTimeout,

    /// The operation requires an open transport and there is none.
    /// 操作需要一个打开的传输，但当前没有。
    #[error("not connected")]
    NotConnected,

    /// The message was queued for redelivery, but the caller's
    /// request/response exchange cannot complete while disconnected.
    /// 消息已排队等待补发，但断线期间调用方的请求/响应交换无法完成。
    #[error("disconnected; message queued for redelivery")]
    QueuedWhileDisconnected,

    /// No server acknowledgment arrived within the deadline.
    /// 截止时间内没有收到服务器确认。
    #[error("acknowledgment timed out")]
    AckTimeout,

    /// The underlying transport reported a failure.
    /// 底层传输报告了一个失败。
    #[error("transport error: {0}")]
    Transport(String),

    /// A wire payload could not be encoded or decoded.
    /// 线上载荷无法编码或解码。
    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// An internal channel for communication between tasks was closed
    /// unexpectedly.
    /// 用于任务间通信的内部通道意外关闭。
    #[error("internal channel is broken")]
    ChannelClosed,
}

/// A specialized `Result` type for this library.
/// 本库专用的 `Result` 类型。
pub type Result<T> = std::result::Result<T, Error>;
