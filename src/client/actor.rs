//! 拥有传输与全部连接状态的生命周期actor。
//! The lifecycle actor that owns the transport and all connection state.
//!
//! The actor runs in a dedicated task and processes commands from the public
//! [`RealtimeClient`](super::handle::RealtimeClient) handle, ticks from its
//! own heartbeat and backoff deadlines, and events relayed from the open
//! transport. Commands are handled to completion, one at a time, which is
//! what serializes state transitions.
//!
//! 此actor在专用任务中运行，处理来自公共句柄的命令、自身心跳与退避截止时间
//! 的触发、以及从打开的传输转发来的事件。命令被逐个处理到完成，
//! 这正是状态转换得以串行化的原因。

use super::{
    ConnectionState,
    command::{AckWaiter, ClientCommand, ClientStats},
};
use crate::{
    auth::TokenProvider,
    bus::{BusEvent, EventBus, InboundMessage, TypingUpdate},
    config::Config,
    error::{Error, Result},
    membership::ChannelMembership,
    queue::OutboundQueue,
    transport::{CloseReason, Connector, Transport, TransportEvent},
    wire::{self, Envelope, event},
};
use bytes::Bytes;
use serde_json::{Value, json};
use std::{collections::HashMap, sync::Arc, time::Duration};
use tokio::{
    sync::{mpsc, oneshot},
    time::{self, Instant},
};
use tracing::{debug, error, info, warn};

/// Delay before reconnect attempt `attempt + 1` (0-based counter).
/// 第 `attempt + 1` 次重连尝试（计数从0开始）之前的延迟。
fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    base.saturating_mul(2u32.saturating_pow(attempt))
}

/// The actor owning the transport handle, the outbound queue, the channel
/// membership set, and the pending-acknowledgment table.
///
/// 拥有传输句柄、出站队列、频道成员集合与挂起确认表的actor。
pub(crate) struct ClientActor<C: Connector> {
    config: Arc<Config>,
    auth: Arc<dyn TokenProvider>,
    connector: C,
    bus: EventBus,

    state: ConnectionState,
    transport: Option<C::Transport>,
    /// Bumped every time the transport handle is torn down. Relayed events
    /// carrying an older generation belong to a superseded transport.
    /// 每次拆除传输句柄时递增。携带旧generation的转发事件属于已被取代的传输。
    generation: u64,

    queue: OutboundQueue,
    membership: ChannelMembership,
    pending_acks: HashMap<String, oneshot::Sender<Value>>,

    /// Reconnect attempts consumed in the current cycle.
    /// 当前循环已消耗的重连尝试次数。
    attempts: u32,
    /// When the next backoff-scheduled attempt is due, if any.
    /// 下一次按退避计划的尝试到期时间（如果有）。
    reconnect_at: Option<Instant>,
    /// When the next heartbeat fires. Re-armed after every tick.
    /// 下一次心跳触发的时间。每次触发后重新设定。
    heartbeat_at: Instant,

    command_rx: mpsc::Receiver<ClientCommand>,
    /// Held weak so the actor does not keep its own command channel alive:
    /// once every handle is gone, `recv()` returns `None` and the actor
    /// tears itself down.
    /// 以弱引用持有，使actor不会维持自己的命令通道：
    /// 所有句柄消失后 `recv()` 返回 `None`，actor随之自行拆除。
    command_tx: mpsc::WeakSender<ClientCommand>,
}

impl<C: Connector> ClientActor<C> {
    pub(crate) fn new(
        config: Arc<Config>,
        connector: C,
        auth: Arc<dyn TokenProvider>,
        bus: EventBus,
        command_rx: mpsc::Receiver<ClientCommand>,
        command_tx: mpsc::Sender<ClientCommand>,
    ) -> Self {
        let heartbeat_at = Instant::now() + config.connection.heartbeat_interval;
        let queue = OutboundQueue::new(config.queue.capacity);
        Self {
            config,
            auth,
            connector,
            bus,
            state: ConnectionState::Disconnected,
            transport: None,
            generation: 0,
            queue,
            membership: ChannelMembership::default(),
            pending_acks: HashMap::new(),
            attempts: 0,
            reconnect_at: None,
            heartbeat_at,
            command_rx,
            command_tx: command_tx.downgrade(),
        }
    }

    /// Runs the actor's main event loop until shutdown.
    ///
    /// 运行actor的主事件循环直到关闭。
    pub(crate) async fn run(mut self) {
        loop {
            // Deadlines are copied out before the select so the timer arms
            // do not hold borrows across the handlers.
            // 截止时间在select之前拷出，使定时器分支不会跨处理函数持有借用。
            let heartbeat_at = self.heartbeat_at;
            let reconnect_at = self.reconnect_at;

            tokio::select! {
                maybe_command = self.command_rx.recv() => {
                    match maybe_command {
                        Some(ClientCommand::Shutdown { response_tx }) => {
                            info!("Shutting down connection core");
                            self.disconnect().await;
                            let _ = response_tx.send(());
                            break;
                        }
                        Some(command) => self.handle_command(command).await,
                        // All handles are gone; tear down and stop.
                        // 所有句柄都已消失；拆除并停止。
                        None => {
                            self.disconnect().await;
                            break;
                        }
                    }
                }
                _ = time::sleep_until(heartbeat_at) => {
                    self.on_heartbeat().await;
                }
                _ = time::sleep_until(reconnect_at.unwrap_or_else(far_future)),
                    if reconnect_at.is_some() =>
                {
                    self.reconnect_at = None;
                    self.attempt_cycle().await;
                }
            }
        }
    }

    /// Handles a single command to completion.
    ///
    /// 将单个命令处理到完成。
    async fn handle_command(&mut self, command: ClientCommand) {
        match command {
            ClientCommand::Connect { response_tx } => {
                let result = self.connect().await;
                let _ = response_tx.send(result);
            }
            ClientCommand::Disconnect { response_tx } => {
                self.disconnect().await;
                let _ = response_tx.send(());
            }
            ClientCommand::Shutdown { .. } => {
                // Handled in the run loop so it can break out.
                // 在run循环中处理，以便跳出循环。
            }
            ClientCommand::Emit {
                event,
                data,
                queueable,
                response_tx,
            } => {
                let accepted = self.emit(&event, data, queueable).await;
                let _ = response_tx.send(accepted);
            }
            ClientCommand::EmitWithAck {
                event,
                data,
                response_tx,
            } => {
                let result = self.emit_with_ack(&event, data).await;
                let _ = response_tx.send(result);
            }
            ClientCommand::CancelAck { correlation_id } => {
                if self.pending_acks.remove(&correlation_id).is_some() {
                    debug!(correlation_id = %correlation_id, "Dropped timed-out ack waiter");
                }
            }
            ClientCommand::JoinChannel { id, response_tx } => {
                let joined = self.join_channel(&id).await;
                let _ = response_tx.send(joined);
            }
            ClientCommand::LeaveChannel { id, response_tx } => {
                let left = self.leave_channel(&id).await;
                let _ = response_tx.send(left);
            }
            ClientCommand::NetworkChanged { connected } => {
                if connected {
                    self.on_revive_signal("network restored").await;
                } else {
                    debug!("Network reported offline");
                }
            }
            ClientCommand::AppStateChanged { foreground } => {
                if foreground {
                    self.on_revive_signal("app foregrounded").await;
                } else {
                    debug!("App moved to background");
                }
            }
            ClientCommand::State { response_tx } => {
                let _ = response_tx.send(self.state);
            }
            ClientCommand::Stats { response_tx } => {
                let _ = response_tx.send(ClientStats {
                    state: self.state,
                    queued: self.queue.len(),
                    evicted: self.queue.evicted(),
                    joined_channels: self.membership.len(),
                    reconnect_attempts: self.attempts,
                });
            }
            ClientCommand::Transport { generation, event } => {
                self.on_transport_event(generation, event).await;
            }
        }
    }

    // ---- lifecycle -------------------------------------------------------

    /// Explicit connect. Idempotent while already connected; resets the
    /// attempt counter and therefore restarts an exhausted cycle.
    ///
    /// 显式连接。已连接时幂等；会重置尝试计数，从而重启已耗尽的循环。
    async fn connect(&mut self) -> Result<()> {
        if self.state == ConnectionState::Connected {
            debug!("connect() while already connected is a no-op");
            return Ok(());
        }
        self.attempts = 0;
        self.reconnect_at = None;
        match self.try_connect().await {
            Ok(()) => Ok(()),
            Err(e) => {
                self.set_state(ConnectionState::Disconnected);
                Err(e)
            }
        }
    }

    /// One full connection attempt: token check, handshake, then the
    /// post-connect replay sequence (rejoin before flush).
    ///
    /// 一次完整的连接尝试：令牌检查、握手、以及连接后的重放序列
    /// （先重新加入频道，再冲刷队列）。
    async fn try_connect(&mut self) -> Result<()> {
        // The token is checked synchronously before any transport activity;
        // an expired token must not touch the network.
        // 令牌在任何传输活动之前同步检查；过期令牌不得接触网络。
        let token = self.auth.token().ok_or(Error::TokenMissing)?;
        if self.auth.is_expired(&token) {
            return Err(Error::TokenExpired);
        }

        self.teardown_transport().await;
        self.set_state(ConnectionState::Connecting);

        let handshake = self.connector.connect(&token);
        let (transport, events) =
            match time::timeout(self.config.connection.connect_timeout, handshake).await {
                Ok(Ok(pair)) => pair,
                Ok(Err(e)) => return Err(e),
                Err(_) => return Err(Error::ConnectTimeout),
            };

        self.transport = Some(transport);
        self.spawn_relay(events);
        self.attempts = 0;
        self.reconnect_at = None;
        self.heartbeat_at = Instant::now() + self.config.connection.heartbeat_interval;
        self.set_state(ConnectionState::Connected);
        info!("Transport connected");

        // Rejoin before flush, so queued messages land in the right rooms.
        // 先重新加入再冲刷，确保排队消息落入正确的房间。
        self.replay_memberships().await;
        self.flush_queue().await;
        Ok(())
    }

    /// Deliberate close: best-effort goodbye, then a grace-bounded transport
    /// close. Always ends `Disconnected` with the heartbeat disarmed.
    ///
    /// 主动关闭：尽力发送告别，然后在宽限时间内关闭传输。
    /// 始终以 `Disconnected` 结束，心跳随之解除。
    async fn disconnect(&mut self) {
        self.attempts = 0;
        self.reconnect_at = None;
        if let Some(transport) = self.transport.take() {
            self.generation += 1;
            let goodbye = Envelope::new(event::CLIENT_DISCONNECTING, json!({}), &self.config.client);
            let grace = self.config.connection.disconnect_grace;
            let closing = async {
                if let Ok(frame) = goodbye.encode() {
                    let _ = transport.emit(event::CLIENT_DISCONNECTING, frame).await;
                }
                let _ = transport.close().await;
            };
            if time::timeout(grace, closing).await.is_err() {
                warn!("Transport close exceeded the grace period; forcing shutdown");
            }
        }
        self.fail_pending_acks();
        self.set_state(ConnectionState::Disconnected);
    }

    /// One attempt of the reconnect cycle, scheduling the next one on
    /// failure until the attempt cap is reached.
    ///
    /// 重连循环中的一次尝试，失败时调度下一次，直到达到尝试上限。
    async fn attempt_cycle(&mut self) {
        match self.try_connect().await {
            Ok(()) => {}
            Err(e @ (Error::TokenMissing | Error::TokenExpired)) => {
                // Auth problems are not retried by this layer.
                // 认证问题不由本层重试。
                error!(error = %e, "Cannot reconnect without a valid token");
                self.reconnect_at = None;
                self.set_state(ConnectionState::Disconnected);
            }
            Err(e) => {
                warn!(error = %e, attempt = self.attempts, "Reconnect attempt failed");
                self.set_state(ConnectionState::Reconnecting);
                self.schedule_retry();
            }
        }
    }

    /// Schedules the next backoff-delayed attempt, or gives up once the cap
    /// is reached. Exhaustion is observable as a lasting `Disconnected`
    /// state, not as an error.
    ///
    /// 调度下一次按退避延迟的尝试，达到上限后放弃。
    /// 耗尽表现为持续的 `Disconnected` 状态，而不是错误。
    fn schedule_retry(&mut self) {
        if self.attempts >= self.config.retry.max_attempts {
            warn!(
                attempts = self.attempts,
                "Reconnect attempts exhausted; staying disconnected until an external trigger"
            );
            self.reconnect_at = None;
            self.set_state(ConnectionState::Disconnected);
            return;
        }
        let delay = backoff_delay(self.config.retry.base_delay, self.attempts);
        self.attempts += 1;
        info!(attempt = self.attempts, delay_ms = delay.as_millis() as u64, "Scheduling reconnect");
        self.reconnect_at = Some(Instant::now() + delay);
    }

    /// Connectivity-restored / app-foregrounded signal: restart the cycle
    /// immediately unless already connected.
    ///
    /// 连通性恢复/应用回到前台的信号：除非已连接，否则立即重启循环。
    async fn on_revive_signal(&mut self, source: &str) {
        if self.state == ConnectionState::Connected {
            return;
        }
        info!(source, "External signal while not connected; reconnecting now");
        self.attempts = 0;
        self.reconnect_at = None;
        self.attempt_cycle().await;
    }

    /// Periodic heartbeat: ping the server, or start a reconnect cycle if
    /// the transport turns out to be dead.
    ///
    /// 周期性心跳：向服务器发送ping；若发现传输已死，则启动重连循环。
    async fn on_heartbeat(&mut self) {
        self.heartbeat_at = Instant::now() + self.config.connection.heartbeat_interval;
        if self.state != ConnectionState::Connected {
            return;
        }

        let open = self.transport.as_ref().is_some_and(|t| t.is_open());
        if !open {
            warn!("Heartbeat found the transport closed; reconnecting immediately");
            self.discard_transport();
            self.set_state(ConnectionState::Reconnecting);
            self.attempt_cycle().await;
            return;
        }

        // Pings bypass the outbound queue: an unsendable ping is a reconnect
        // trigger, not a message worth preserving.
        // ping绕过出站队列：发不出去的ping是重连触发器，不是值得保留的消息。
        let ping = Envelope::new(event::PING, json!({}), &self.config.client);
        if let Err(e) = self.transmit(&ping).await {
            warn!(error = %e, "Heartbeat ping failed; reconnecting immediately");
            self.discard_transport();
            self.set_state(ConnectionState::Reconnecting);
            self.attempt_cycle().await;
        }
    }

    // ---- send primitives -------------------------------------------------

    /// Fire-and-forget emit. Queued counts as accepted; a dropped
    /// non-queueable message does not.
    ///
    /// 即发即忘的发送。已排队视为已接受；被丢弃的不可排队消息则不算。
    async fn emit(&mut self, event_name: &str, data: Value, queueable: bool) -> bool {
        let envelope = Envelope::new(event_name, data, &self.config.client);
        if self.state == ConnectionState::Connected {
            match self.transmit(&envelope).await {
                Ok(()) => return true,
                Err(e) => {
                    warn!(event = event_name, error = %e, "Direct emit failed");
                    // Fall through to the disconnected handling below.
                    // 落入下方的断线处理。
                }
            }
        }
        if queueable {
            self.queue.enqueue(envelope);
            debug!(event = event_name, queued = self.queue.len(), "Message queued");
            true
        } else {
            debug!(event = event_name, "Dropping non-queueable message while disconnected");
            false
        }
    }

    /// Acknowledgment-carrying emit. While disconnected the envelope is
    /// queued unconditionally and the caller is rejected immediately; it
    /// must not block waiting for a reconnect.
    ///
    /// 携带确认的发送。断线时信封无条件排队，调用方立即被拒绝；
    /// 它不得阻塞等待重连。
    async fn emit_with_ack(&mut self, event_name: &str, data: Value) -> Result<AckWaiter> {
        let correlation_id = wire::correlation_id();
        let envelope = Envelope::new(event_name, data, &self.config.client)
            .with_correlation_id(correlation_id.clone());

        if self.state != ConnectionState::Connected {
            self.queue.enqueue(envelope);
            return Err(Error::QueuedWhileDisconnected);
        }

        match self.transmit(&envelope).await {
            Ok(()) => {
                let (tx, rx) = oneshot::channel();
                self.pending_acks.insert(correlation_id.clone(), tx);
                Ok(AckWaiter { correlation_id, rx })
            }
            Err(e) => {
                warn!(event = event_name, error = %e, "Ack-carrying emit failed; queueing");
                self.queue.enqueue(envelope);
                Err(Error::QueuedWhileDisconnected)
            }
        }
    }

    /// Joins a channel, connecting first if necessary. A failed connect
    /// propagates as a failed join.
    ///
    /// 加入频道，必要时先建立连接。连接失败会传播为加入失败。
    async fn join_channel(&mut self, id: &str) -> bool {
        if self.state != ConnectionState::Connected {
            if let Err(e) = self.connect().await {
                warn!(channel = id, error = %e, "Join failed: could not connect");
                return false;
            }
        }
        let request = Envelope::new(
            event::JOIN_CHANNEL,
            json!({ "channelId": id }),
            &self.config.client,
        );
        match self.transmit(&request).await {
            Ok(()) => {
                self.membership.insert(id);
                info!(channel = id, "Joined channel");
                true
            }
            Err(e) => {
                warn!(channel = id, error = %e, "Join request failed");
                false
            }
        }
    }

    /// Leaves a channel. While disconnected this is purely local: the
    /// server already dropped the room when the transport went away.
    ///
    /// 离开频道。断线时这纯粹是本地操作：传输断开时服务器已经清掉了房间。
    async fn leave_channel(&mut self, id: &str) -> bool {
        if self.state != ConnectionState::Connected {
            self.membership.remove(id);
            debug!(channel = id, "Left channel locally while disconnected");
            return true;
        }
        let notice = Envelope::new(
            event::LEAVE_CHANNEL,
            json!({ "channelId": id }),
            &self.config.client,
        );
        match self.transmit(&notice).await {
            Ok(()) => {
                self.membership.remove(id);
                info!(channel = id, "Left channel");
                true
            }
            Err(e) => {
                warn!(channel = id, error = %e, "Leave notification failed");
                false
            }
        }
    }

    /// Re-issues join requests for every remembered channel.
    /// 为每个记住的频道重新发出加入请求。
    async fn replay_memberships(&mut self) {
        let channels: Vec<String> = self.membership.iter().map(str::to_string).collect();
        if channels.is_empty() {
            return;
        }
        info!(count = channels.len(), "Rejoining channels");
        for id in channels {
            let request = Envelope::new(
                event::JOIN_CHANNEL,
                json!({ "channelId": id }),
                &self.config.client,
            );
            if let Err(e) = self.transmit(&request).await {
                // The membership entry stays; the next reconnect retries it.
                // 成员条目保留；下次重连时重试。
                warn!(channel = %id, error = %e, "Channel rejoin failed");
            }
        }
    }

    /// Transmits the snapshot of the queue in FIFO order, pacing sends and
    /// re-enqueueing failures at the tail.
    ///
    /// 按FIFO顺序发送队列快照，控制发送节奏，失败的消息重新排到尾部。
    async fn flush_queue(&mut self) {
        if self.state != ConnectionState::Connected || self.queue.is_empty() {
            return;
        }
        let snapshot = self.queue.take_snapshot();
        let total = snapshot.len();
        info!(count = total, "Flushing outbound queue");
        for (index, message) in snapshot.into_iter().enumerate() {
            debug!(
                event = %message.envelope.event,
                waited_ms = message.enqueued_at.elapsed().as_millis() as u64,
                "Flushing queued message"
            );
            if let Err(e) = self.transmit(&message.envelope).await {
                warn!(
                    event = %message.envelope.event,
                    error = %e,
                    "Flush transmission failed; re-enqueueing at the tail"
                );
                self.queue.enqueue(message.envelope);
            }
            if index + 1 < total {
                time::sleep(self.config.queue.flush_gap).await;
            }
        }
    }

    /// Encodes and sends one envelope over the current transport.
    /// 编码并通过当前传输发送一个信封。
    async fn transmit(&self, envelope: &Envelope) -> Result<()> {
        let transport = self.transport.as_ref().ok_or(Error::NotConnected)?;
        let frame = envelope.encode()?;
        transport.emit(&envelope.event, frame).await
    }

    // ---- transport events ------------------------------------------------

    async fn on_transport_event(&mut self, generation: u64, event: TransportEvent) {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "Dropping event from a superseded transport"
            );
            return;
        }
        match event {
            TransportEvent::Message { event, payload } => self.on_message(&event, payload),
            TransportEvent::Closed { reason } => self.on_transport_closed(reason).await,
        }
    }

    /// Routes one incoming named event: ack matching, typing normalization,
    /// or plain delivery to subscribers.
    ///
    /// 路由一个传入的命名事件：确认匹配、输入指示归一化、
    /// 或直接投递给订阅者。
    fn on_message(&mut self, event_name: &str, payload: Bytes) {
        let data: Value = match serde_json::from_slice(&payload) {
            Ok(value) => value,
            Err(e) => {
                warn!(event = event_name, error = %e, "Discarding undecodable payload");
                return;
            }
        };

        match event_name {
            event::ACK => match wire::ack_correlation_id(&data) {
                Some(id) => {
                    if let Some(waiter) = self.pending_acks.remove(id) {
                        let _ = waiter.send(data.clone());
                    } else {
                        debug!(correlation_id = id, "Ack for an unknown or timed-out request");
                    }
                }
                None => warn!("Ack frame without a correlation id"),
            },
            event::TYPING_START | event::TYPING_END => {
                self.bus.publish(BusEvent::Typing(TypingUpdate {
                    data,
                    is_typing: event_name == event::TYPING_START,
                }));
            }
            _ => {
                self.bus.publish(BusEvent::MessageReceived(InboundMessage {
                    event: event_name.to_string(),
                    data,
                }));
            }
        }
    }

    /// Routes a transport close: deliberate closes are terminal, everything
    /// else starts the reconnect cycle.
    ///
    /// 路由传输关闭：主动关闭是终态，其他情况启动重连循环。
    async fn on_transport_closed(&mut self, reason: CloseReason) {
        self.discard_transport();
        match reason {
            CloseReason::Client => {
                info!("Transport closed by this client");
                self.set_state(ConnectionState::Disconnected);
            }
            CloseReason::Remote(reason) => {
                warn!(reason = %reason, "Transport closed remotely; starting reconnect cycle");
                self.set_state(ConnectionState::Reconnecting);
                self.schedule_retry();
            }
        }
    }

    // ---- internals -------------------------------------------------------

    /// Forwards transport events into the command channel, tagged with the
    /// generation of the transport they belong to.
    ///
    /// 将传输事件转发进命令通道，并打上其所属传输的generation标签。
    fn spawn_relay(&self, mut events: mpsc::Receiver<TransportEvent>) {
        let command_tx = self.command_tx.clone();
        let generation = self.generation;
        tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                // Upgraded per event so an idle relay does not keep the
                // actor's command channel open.
                // 每个事件单独升级，空闲的转发任务不会维持actor的命令通道。
                let Some(tx) = command_tx.upgrade() else { break };
                if tx
                    .send(ClientCommand::Transport { generation, event })
                    .await
                    .is_err()
                {
                    break;
                }
            }
        });
    }

    /// Closes and forgets the current transport, bounded by the grace
    /// timeout.
    /// 关闭并遗忘当前传输，受宽限超时约束。
    async fn teardown_transport(&mut self) {
        if let Some(transport) = self.transport.take() {
            self.generation += 1;
            let grace = self.config.connection.disconnect_grace;
            if time::timeout(grace, transport.close()).await.is_err() {
                warn!("Stale transport close exceeded the grace period");
            }
        }
        self.fail_pending_acks();
    }

    /// Forgets a transport that is already dead; there is nothing to close.
    /// 遗忘一个已经死亡的传输；没有可关闭的东西。
    fn discard_transport(&mut self) {
        if self.transport.take().is_some() {
            self.generation += 1;
        }
        self.fail_pending_acks();
    }

    /// Drops every pending ack waiter; their callers observe the loss of
    /// the connection instead of waiting out the full deadline.
    ///
    /// 丢弃所有挂起的确认waiter；其调用方将观察到连接丢失，
    /// 而不是等满整个截止时间。
    fn fail_pending_acks(&mut self) {
        if !self.pending_acks.is_empty() {
            debug!(count = self.pending_acks.len(), "Failing pending acks");
            self.pending_acks.clear();
        }
    }

    fn set_state(&mut self, next: ConnectionState) {
        if self.state == next {
            return;
        }
        debug!(from = %self.state, to = %next, "Connection state changed");
        self.state = next;
        self.bus.publish(BusEvent::StateChanged(next));
    }
}

fn far_future() -> Instant {
    Instant::now() + Duration::from_secs(86_400)
}
