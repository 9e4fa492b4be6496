//! 发送给生命周期actor的命令。
//! Commands sent to the lifecycle actor.

use super::ConnectionState;
use crate::transport::TransportEvent;
use serde_json::Value;
use tokio::sync::oneshot;

/// Commands processed by the `ClientActor`.
///
/// This enum encapsulates every operation on the connection core: public
/// API calls from the handle, external connectivity signals, and events
/// relayed from the open transport.
///
/// 由 `ClientActor` 处理的命令。
///
/// 此枚举封装了连接核心上的所有操作：来自句柄的公共API调用、
/// 外部连通性信号、以及从打开的传输转发来的事件。
#[derive(Debug)]
pub(crate) enum ClientCommand {
    /// Open the connection. Idempotent while already connected.
    /// 打开连接。已连接时幂等。
    Connect {
        response_tx: oneshot::Sender<crate::error::Result<()>>,
    },
    /// Deliberately close the connection. No automatic reconnect follows.
    /// 主动关闭连接。之后不会自动重连。
    Disconnect {
        response_tx: oneshot::Sender<()>,
    },
    /// Tear everything down and stop the actor task.
    /// 拆除所有状态并停止actor任务。
    Shutdown {
        response_tx: oneshot::Sender<()>,
    },
    /// Fire-and-forget send.
    /// 即发即忘的发送。
    Emit {
        event: String,
        data: Value,
        queueable: bool,
        response_tx: oneshot::Sender<bool>,
    },
    /// Send expecting a server acknowledgment. The reply carries the waiter
    /// the handle parks on.
    /// 期待服务器确认的发送。回复中携带句柄用于等待的waiter。
    EmitWithAck {
        event: String,
        data: Value,
        response_tx: oneshot::Sender<crate::error::Result<AckWaiter>>,
    },
    /// The caller gave up waiting; drop the pending ack entry.
    /// 调用方放弃等待；丢弃挂起的确认条目。
    CancelAck { correlation_id: String },
    /// Join a logical channel, connecting first if necessary.
    /// 加入一个逻辑频道，必要时先建立连接。
    JoinChannel {
        id: String,
        response_tx: oneshot::Sender<bool>,
    },
    /// Leave a logical channel.
    /// 离开一个逻辑频道。
    LeaveChannel {
        id: String,
        response_tx: oneshot::Sender<bool>,
    },
    /// Connectivity report from the network-state observer.
    /// 来自网络状态观察者的连通性报告。
    NetworkChanged { connected: bool },
    /// Foreground/background report from the app-lifecycle observer.
    /// 来自应用生命周期观察者的前后台报告。
    AppStateChanged { foreground: bool },
    /// Query the current connection state.
    /// 查询当前连接状态。
    State {
        response_tx: oneshot::Sender<ConnectionState>,
    },
    /// Query diagnostic counters.
    /// 查询诊断计数器。
    Stats {
        response_tx: oneshot::Sender<ClientStats>,
    },
    /// An event relayed from a transport. Events whose generation does not
    /// match the actor's current transport are stale and discarded.
    /// 从传输转发来的事件。generation与actor当前传输不匹配的事件已过期，
    /// 会被丢弃。
    Transport {
        generation: u64,
        event: TransportEvent,
    },
}

/// Handed back to the caller of an acknowledgment-carrying send.
/// 交还给携带确认的发送调用方。
#[derive(Debug)]
pub(crate) struct AckWaiter {
    /// The correlation id embedded in the outbound envelope.
    /// 嵌入出站信封的关联ID。
    pub(crate) correlation_id: String,
    /// Resolved with the ack payload when the server answers.
    /// 服务器应答时以确认载荷完成。
    pub(crate) rx: oneshot::Receiver<Value>,
}

/// Diagnostic counters exposed by the actor.
/// actor暴露的诊断计数器。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientStats {
    /// The connection state at the time of the query.
    /// 查询时的连接状态。
    pub state: ConnectionState,
    /// Envelopes currently waiting in the outbound queue.
    /// 当前在出站队列中等待的信封数。
    pub queued: usize,
    /// Envelopes evicted from the queue since creation.
    /// 创建以来从队列中淘汰的信封总数。
    pub evicted: u64,
    /// Channels the client currently considers itself joined to.
    /// 客户端当前认为自己已加入的频道数。
    pub joined_channels: usize,
    /// Reconnect attempts consumed in the current cycle.
    /// 当前循环已消耗的重连尝试次数。
    pub reconnect_attempts: u32,
}
