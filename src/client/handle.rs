//! 面向应用的连接核心API。
//! The application-facing API of the connection core.

use super::{
    ConnectionState,
    command::{ClientCommand, ClientStats},
};
use crate::{
    auth::TokenProvider,
    bus::{EventBus, Subscription, Topic},
    client::actor::ClientActor,
    config::Config,
    error::{Error, Result},
    transport::Connector,
};
use serde_json::Value;
use std::{marker::PhantomData, sync::Arc, time::Duration};
use tokio::sync::{mpsc, oneshot};
use tracing::info;

/// A handle to the connection core actor.
///
/// The handle is cheap to clone; all clones talk to the same actor task.
/// Dropping every handle tears the actor down, but applications that want a
/// deterministic teardown should call [`shutdown`](Self::shutdown).
///
/// 连接核心actor的句柄。
///
/// 句柄克隆开销很低；所有克隆与同一个actor任务通信。
/// 丢弃全部句柄会拆除actor，但希望确定性拆除的应用应调用
/// [`shutdown`](Self::shutdown)。
pub struct RealtimeClient<C: Connector> {
    command_tx: mpsc::Sender<ClientCommand>,
    bus: EventBus,
    ack_timeout: Duration,
    _marker: PhantomData<C>,
}

impl<C: Connector> Clone for RealtimeClient<C> {
    fn clone(&self) -> Self {
        Self {
            command_tx: self.command_tx.clone(),
            bus: self.bus.clone(),
            ack_timeout: self.ack_timeout,
            _marker: PhantomData,
        }
    }
}

impl<C: Connector> RealtimeClient<C> {
    /// Creates the connection core and spawns its actor task.
    ///
    /// The client starts `Disconnected`; call [`connect`](Self::connect) to
    /// open the transport.
    ///
    /// 创建连接核心并派生其actor任务。
    ///
    /// 客户端以 `Disconnected` 状态启动；调用 [`connect`](Self::connect)
    /// 以打开传输。
    pub fn spawn(config: Config, connector: C, auth: Arc<dyn TokenProvider>) -> Self {
        let (command_tx, command_rx) = mpsc::channel(128);
        let bus = EventBus::new();
        let ack_timeout = config.connection.ack_timeout;

        let actor = ClientActor::new(
            Arc::new(config),
            connector,
            auth,
            bus.clone(),
            command_rx,
            command_tx.clone(),
        );
        tokio::spawn(actor.run());
        info!("Connection core actor spawned");

        Self {
            command_tx,
            bus,
            ack_timeout,
            _marker: PhantomData,
        }
    }

    /// Opens the connection. Idempotent while already connected.
    /// 打开连接。已连接时幂等。
    pub async fn connect(&self) -> Result<()> {
        let (response_tx, response_rx) = oneshot::channel();
        self.send(ClientCommand::Connect { response_tx }).await?;
        response_rx.await.map_err(|_| Error::ChannelClosed)?
    }

    /// Deliberately closes the connection. No automatic reconnect follows.
    /// 主动关闭连接。之后不会自动重连。
    pub async fn disconnect(&self) -> Result<()> {
        let (response_tx, response_rx) = oneshot::channel();
        self.send(ClientCommand::Disconnect { response_tx }).await?;
        response_rx.await.map_err(|_| Error::ChannelClosed)
    }

    /// Tears the core down and stops the actor task.
    /// 拆除核心并停止actor任务。
    pub async fn shutdown(&self) -> Result<()> {
        let (response_tx, response_rx) = oneshot::channel();
        self.send(ClientCommand::Shutdown { response_tx }).await?;
        response_rx.await.map_err(|_| Error::ChannelClosed)
    }

    /// The current connection state.
    /// 当前的连接状态。
    pub async fn state(&self) -> Result<ConnectionState> {
        let (response_tx, response_rx) = oneshot::channel();
        self.send(ClientCommand::State { response_tx }).await?;
        response_rx.await.map_err(|_| Error::ChannelClosed)
    }

    /// Diagnostic counters (queue depth, evictions, memberships, attempts).
    /// 诊断计数器（队列深度、淘汰数、成员数、尝试次数）。
    pub async fn stats(&self) -> Result<ClientStats> {
        let (response_tx, response_rx) = oneshot::channel();
        self.send(ClientCommand::Stats { response_tx }).await?;
        response_rx.await.map_err(|_| Error::ChannelClosed)
    }

    /// Fire-and-forget send.
    ///
    /// Returns `true` when the message was transmitted or queued, `false`
    /// when it was dropped (disconnected and not queueable).
    ///
    /// 即发即忘的发送。
    ///
    /// 消息被发送或排队时返回 `true`；被丢弃（断线且不可排队）时返回
    /// `false`。
    pub async fn emit(&self, event: &str, data: Value, queueable: bool) -> Result<bool> {
        let (response_tx, response_rx) = oneshot::channel();
        self.send(ClientCommand::Emit {
            event: event.to_string(),
            data,
            queueable,
            response_tx,
        })
        .await?;
        response_rx.await.map_err(|_| Error::ChannelClosed)
    }

    /// Request/response send with the configured default ack timeout.
    /// 使用配置的默认确认超时的请求/响应发送。
    pub async fn emit_with_ack(&self, event: &str, data: Value) -> Result<Value> {
        self.emit_with_ack_timeout(event, data, self.ack_timeout)
            .await
    }

    /// Request/response send with an explicit ack timeout.
    ///
    /// While disconnected the message is queued for redelivery and the call
    /// fails immediately; it never blocks waiting for a reconnect.
    ///
    /// 使用显式确认超时的请求/响应发送。
    ///
    /// 断线时消息会排队等待补发且调用立即失败；绝不阻塞等待重连。
    pub async fn emit_with_ack_timeout(
        &self,
        event: &str,
        data: Value,
        timeout: Duration,
    ) -> Result<Value> {
        let (response_tx, response_rx) = oneshot::channel();
        self.send(ClientCommand::EmitWithAck {
            event: event.to_string(),
            data,
            response_tx,
        })
        .await?;
        let waiter = response_rx.await.map_err(|_| Error::ChannelClosed)??;

        match tokio::time::timeout(timeout, waiter.rx).await {
            Ok(Ok(ack)) => Ok(ack),
            // The connection dropped before the server answered.
            // 服务器应答之前连接已断开。
            Ok(Err(_)) => Err(Error::NotConnected),
            Err(_) => {
                // Best-effort cleanup of the pending entry; the actor also
                // drops it on any disconnect.
                // 尽力清理挂起条目；actor在任何断开时也会丢弃它。
                let _ = self.command_tx.try_send(ClientCommand::CancelAck {
                    correlation_id: waiter.correlation_id,
                });
                Err(Error::AckTimeout)
            }
        }
    }

    /// Joins a logical channel, connecting first if necessary.
    /// 加入一个逻辑频道，必要时先建立连接。
    pub async fn join_channel(&self, id: &str) -> Result<bool> {
        let (response_tx, response_rx) = oneshot::channel();
        self.send(ClientCommand::JoinChannel {
            id: id.to_string(),
            response_tx,
        })
        .await?;
        response_rx.await.map_err(|_| Error::ChannelClosed)
    }

    /// Leaves a logical channel. Purely local while disconnected.
    /// 离开一个逻辑频道。断线时纯本地操作。
    pub async fn leave_channel(&self, id: &str) -> Result<bool> {
        let (response_tx, response_rx) = oneshot::channel();
        self.send(ClientCommand::LeaveChannel {
            id: id.to_string(),
            response_tx,
        })
        .await?;
        response_rx.await.map_err(|_| Error::ChannelClosed)
    }

    /// Feeds a connectivity change from the network-state observer.
    /// 馈入来自网络状态观察者的连通性变化。
    pub async fn network_changed(&self, connected: bool) -> Result<()> {
        self.send(ClientCommand::NetworkChanged { connected }).await
    }

    /// Feeds a foreground/background change from the app-lifecycle observer.
    /// 馈入来自应用生命周期观察者的前后台变化。
    pub async fn app_state_changed(&self, foreground: bool) -> Result<()> {
        self.send(ClientCommand::AppStateChanged { foreground })
            .await
    }

    /// Subscribes to connection state changes.
    /// 订阅连接状态变化。
    pub fn on_connection_state_change(&self) -> Subscription {
        self.bus.subscribe(Topic::State)
    }

    /// Subscribes to application-level messages received from the server.
    /// 订阅从服务器接收的应用级消息。
    pub fn on_message_received(&self) -> Subscription {
        self.bus.subscribe(Topic::Message)
    }

    /// Subscribes to normalized typing-indicator updates.
    /// 订阅归一化后的输入指示更新。
    pub fn on_typing_indicator(&self) -> Subscription {
        self.bus.subscribe(Topic::Typing)
    }

    async fn send(&self, command: ClientCommand) -> Result<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| Error::ChannelClosed)
    }
}
