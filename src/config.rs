//! 定义了连接核心的可配置参数。
//! Defines configurable parameters for the connection core.

use std::time::Duration;

/// A structure containing all configurable parameters for the client.
///
/// 包含客户端所有可配置参数的结构体。
#[derive(Debug, Clone)]
pub struct Config {
    /// Identity stamped onto every outbound envelope.
    /// 写入每个出站信封的客户端标识。
    pub client: ClientInfo,

    /// Connection lifecycle parameters.
    /// 连接生命周期相关参数。
    pub connection: ConnectionConfig,

    /// Reconnection backoff parameters.
    /// 重连退避相关参数。
    pub retry: RetryConfig,

    /// Outbound queue parameters.
    /// 出站队列相关参数。
    pub queue: QueueConfig,
}

/// Client identity reported to the backend in the wire envelope.
///
/// 通过线上信封上报给后端的客户端标识。
#[derive(Debug, Clone)]
pub struct ClientInfo {
    /// The platform string, e.g. `"ios"` or `"android"`.
    /// 平台字符串，例如 `"ios"` 或 `"android"`。
    pub platform: String,
    /// The application version string.
    /// 应用版本字符串。
    pub version: String,
}

/// Connection lifecycle parameters.
///
/// 连接生命周期相关参数。
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// The maximum time a transport handshake may take before the attempt
    /// is abandoned.
    /// 传输握手在尝试被放弃之前允许的最长时间。
    pub connect_timeout: Duration,
    /// Grace period for a deliberate close. The transport is forced shut
    /// once this elapses, whether or not the server acknowledged.
    /// 主动关闭的宽限期。超过此时间后无论服务器是否确认，传输都会被强制关闭。
    pub disconnect_grace: Duration,
    /// The interval between heartbeat pings while connected.
    /// 连接期间两次心跳 ping 之间的间隔。
    pub heartbeat_interval: Duration,
    /// How long an acknowledgment-carrying send waits for the server's ack
    /// before the caller is rejected.
    /// 携带确认的发送在调用方被拒绝之前等待服务器 ack 的时长。
    pub ack_timeout: Duration,
}

/// Reconnection backoff parameters.
///
/// 重连退避相关参数。
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Base delay for exponential backoff. Attempt `k` (1-based) waits
    /// `base_delay * 2^(k-1)`.
    /// 指数退避的基础延迟。第 `k` 次尝试（从1开始）等待 `base_delay * 2^(k-1)`。
    pub base_delay: Duration,
    /// The maximum number of reconnection attempts before the cycle gives
    /// up and the state settles at `Disconnected`.
    /// 放弃循环并使状态停留在 `Disconnected` 之前的最大重连尝试次数。
    pub max_attempts: u32,
}

/// Outbound queue parameters.
///
/// 出站队列相关参数。
#[derive(Debug, Clone)]
pub struct QueueConfig {
    /// The maximum number of queued envelopes. When full, the oldest entry
    /// is evicted to admit a new one.
    /// 排队信封的最大数量。队列满时淘汰最旧的条目以接纳新条目。
    pub capacity: usize,
    /// The pause between consecutive sends during a queue flush, to avoid
    /// flooding the server after a reconnect.
    /// 队列冲刷期间相邻两次发送之间的停顿，避免重连后冲击服务器。
    pub flush_gap: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client: ClientInfo::default(),
            connection: ConnectionConfig::default(),
            retry: RetryConfig::default(),
            queue: QueueConfig::default(),
        }
    }
}

impl Default for ClientInfo {
    fn default() -> Self {
        Self {
            platform: "unknown".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            disconnect_grace: Duration::from_secs(1),
            heartbeat_interval: Duration::from_secs(30),
            ack_timeout: Duration::from_secs(5),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            base_delay: Duration::from_millis(3000),
            max_attempts: 5,
        }
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            flush_gap: Duration::from_millis(100),
        }
    }
}
