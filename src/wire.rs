//! 定义了与后端兼容的线上消息格式。
//! Defines the wire message format compatible with the backend.
//!
//! Every outbound application message is wrapped in an [`Envelope`] before it
//! is queued or transmitted. The JSON field names are part of the backend
//! contract and must not change.
//!
//! 每条出站应用消息在排队或传输之前都会被包装进一个 [`Envelope`]。
//! JSON 字段名是后端契约的一部分，不得更改。

use crate::{config::ClientInfo, error::Result};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};

/// Well-known event names spoken between the client and the backend.
/// 客户端与后端之间使用的已知事件名。
pub mod event {
    /// Heartbeat probe, sent periodically while connected.
    /// 心跳探测，连接期间周期性发送。
    pub const PING: &str = "ping";
    /// Server acknowledgment frame. Carries the echoed correlation id.
    /// 服务器确认帧。携带回显的关联ID。
    pub const ACK: &str = "ack";
    /// Server's post-handshake hello.
    /// 服务器握手后的问候。
    pub const CONNECTION_ACK: &str = "connection_ack";
    /// A chat message inside a channel.
    /// 频道内的聊天消息。
    pub const CHAT_MESSAGE: &str = "chat_message";
    /// Peer started typing.
    /// 对端开始输入。
    pub const TYPING_START: &str = "typing_start";
    /// Peer stopped typing.
    /// 对端停止输入。
    pub const TYPING_END: &str = "typing_end";
    /// Presence/visibility update inside a channel.
    /// 频道内的在线状态更新。
    pub const PRESENCE_UPDATE: &str = "presence_update";
    /// Request to join a logical channel (conversation/workspace).
    /// 请求加入一个逻辑频道（会话/工作区）。
    pub const JOIN_CHANNEL: &str = "join_channel";
    /// Notification that the client is leaving a channel.
    /// 客户端离开频道的通知。
    pub const LEAVE_CHANNEL: &str = "leave_channel";
    /// Best-effort goodbye sent before a deliberate close.
    /// 主动关闭前尽力发送的告别。
    pub const CLIENT_DISCONNECTING: &str = "client_disconnecting";
    /// Replay of recent channel messages for late joiners.
    /// 为晚加入者重放的近期频道消息。
    pub const HISTORY: &str = "history";
}

/// The unit stored in the outbound queue and sent over the transport.
///
/// 存储在出站队列中并通过传输发送的单元。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// The named event this payload belongs to.
    /// 此载荷所属的命名事件。
    pub event: String,
    /// Opaque application data.
    /// 不透明的应用数据。
    pub data: Value,
    /// Creation time in milliseconds since the UNIX epoch.
    /// 创建时间，UNIX纪元以来的毫秒数。
    pub timestamp: u64,
    /// The platform string of the sending client.
    /// 发送客户端的平台字符串。
    pub client_platform: String,
    /// The application version of the sending client.
    /// 发送客户端的应用版本。
    pub client_version: String,
    /// Client-generated correlation id, present only on sends that expect a
    /// server acknowledgment. The base envelope shape is unchanged when
    /// absent.
    /// 客户端生成的关联ID，仅在期待服务器确认的发送中出现。
    /// 缺省时基础信封形状保持不变。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
}

impl Envelope {
    /// Wraps application data into a new envelope stamped with the client
    /// identity and the current time.
    ///
    /// 将应用数据包装进一个新信封，并盖上客户端标识与当前时间。
    pub fn new(event: &str, data: Value, client: &ClientInfo) -> Self {
        Self {
            event: event.to_string(),
            data,
            timestamp: now_millis(),
            client_platform: client.platform.clone(),
            client_version: client.version.clone(),
            correlation_id: None,
        }
    }

    /// Tags the envelope with a correlation id for acknowledgment matching.
    /// 为信封打上用于确认匹配的关联ID。
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Encodes the envelope into a JSON frame for the transport.
    /// 将信封编码为供传输使用的JSON帧。
    pub fn encode(&self) -> Result<Bytes> {
        Ok(Bytes::from(serde_json::to_vec(self)?))
    }

    /// Decodes an envelope from a JSON frame.
    /// 从JSON帧解码一个信封。
    pub fn decode(frame: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(frame)?)
    }
}

/// Milliseconds since the UNIX epoch.
/// UNIX纪元以来的毫秒数。
pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Generates a fresh client-side correlation id.
///
/// The id only needs to be unique among this client's in-flight requests,
/// so 64 random bits are plenty.
///
/// 生成一个新的客户端关联ID。
///
/// 该ID只需在本客户端的在途请求之间唯一，64个随机位绰绰有余。
pub(crate) fn correlation_id() -> String {
    format!("{:016x}", rand::random::<u64>())
}

/// Extracts the correlation id echoed inside an ack payload.
/// 提取ack载荷中回显的关联ID。
pub(crate) fn ack_correlation_id(data: &Value) -> Option<&str> {
    data.get("correlationId").and_then(Value::as_str)
}
