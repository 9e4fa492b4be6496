//! 将传输层事件与应用监听者解耦的类型化发布/订阅总线。
//! The typed publish/subscribe bus decoupling transport events from
//! application listeners.
//!
//! Events are a tagged enum rather than string-keyed callbacks, so the
//! payload shape of every event kind is enforced by the compiler. Each
//! subscriber owns an unbounded receiver; dropping the [`Subscription`]
//! removes exactly that subscriber and no other.
//!
//! 事件是带标签的枚举而非以字符串为键的回调，因此每种事件的载荷形状都由
//! 编译器保证。每个订阅者拥有一个无界接收端；丢弃 [`Subscription`]
//! 只会移除该订阅者本身。

use crate::client::ConnectionState;
use dashmap::DashMap;
use serde_json::Value;
use std::sync::{
    Arc, Weak,
    atomic::{AtomicU64, Ordering},
};
use tokio::sync::mpsc;

/// A message delivered to application subscribers.
/// 投递给应用订阅者的消息。
#[derive(Debug, Clone)]
pub enum BusEvent {
    /// The connection state changed.
    /// 连接状态发生了变化。
    StateChanged(ConnectionState),
    /// An application-level message arrived from the server.
    /// 从服务器到达的应用级消息。
    MessageReceived(InboundMessage),
    /// A normalized typing indicator update.
    /// 归一化后的输入指示更新。
    Typing(TypingUpdate),
}

/// An application-level message received from the server.
/// 从服务器接收到的应用级消息。
#[derive(Debug, Clone)]
pub struct InboundMessage {
    /// The wire event name.
    /// 线上事件名。
    pub event: String,
    /// The decoded JSON payload.
    /// 解码后的JSON载荷。
    pub data: Value,
}

/// The single callback shape for typing indicators.
///
/// The wire speaks two distinct events (`typing_start`/`typing_end`); the
/// core folds them into this one shape.
///
/// 输入指示的统一回调形状。
///
/// 线上使用两个不同的事件（`typing_start`/`typing_end`）；
/// 核心将它们折叠为这一种形状。
#[derive(Debug, Clone)]
pub struct TypingUpdate {
    /// The original event payload (channel id, user id, ...).
    /// 原始事件载荷（频道ID、用户ID等）。
    pub data: Value,
    /// Whether the peer is currently typing.
    /// 对端当前是否在输入。
    pub is_typing: bool,
}

/// The topic an event is published on.
/// 事件发布所在的主题。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Topic {
    State,
    Message,
    Typing,
}

impl BusEvent {
    fn topic(&self) -> Topic {
        match self {
            BusEvent::StateChanged(_) => Topic::State,
            BusEvent::MessageReceived(_) => Topic::Message,
            BusEvent::Typing(_) => Topic::Typing,
        }
    }
}

struct Subscriber {
    id: u64,
    tx: mpsc::UnboundedSender<BusEvent>,
}

struct BusInner {
    topics: DashMap<Topic, Vec<Subscriber>>,
    next_id: AtomicU64,
}

/// The shared event bus. Cheap to clone.
/// 共享的事件总线。克隆开销很低。
#[derive(Clone)]
pub(crate) struct EventBus {
    inner: Arc<BusInner>,
}

impl EventBus {
    pub(crate) fn new() -> Self {
        Self {
            inner: Arc::new(BusInner {
                topics: DashMap::new(),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Delivers an event to every live subscriber of its topic.
    ///
    /// Subscribers whose receiving side is gone are pruned on the way.
    ///
    /// 将事件投递给其主题下所有存活的订阅者。
    /// 接收端已消失的订阅者会顺带被清除。
    pub(crate) fn publish(&self, event: BusEvent) {
        if let Some(mut subscribers) = self.inner.topics.get_mut(&event.topic()) {
            subscribers.retain(|s| s.tx.send(event.clone()).is_ok());
        }
    }

    /// Registers a new subscriber on the given topic.
    /// 在给定主题上注册一个新的订阅者。
    pub(crate) fn subscribe(&self, topic: Topic) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::unbounded_channel();
        self.inner
            .topics
            .entry(topic)
            .or_default()
            .push(Subscriber { id, tx });
        Subscription {
            topic,
            id,
            rx,
            bus: Arc::downgrade(&self.inner),
        }
    }
}

/// A live subscription to one bus topic.
///
/// Dropping the subscription unsubscribes exactly this listener.
///
/// 对一个总线主题的有效订阅。
///
/// 丢弃该订阅只会注销这一个监听者。
pub struct Subscription {
    topic: Topic,
    id: u64,
    rx: mpsc::UnboundedReceiver<BusEvent>,
    bus: Weak<BusInner>,
}

impl Subscription {
    /// Waits for the next event on this subscription.
    ///
    /// Returns `None` once the bus is gone and all buffered events have
    /// been drained.
    ///
    /// 等待此订阅上的下一个事件。
    /// 当总线消失且缓冲事件耗尽后返回 `None`。
    pub async fn recv(&mut self) -> Option<BusEvent> {
        self.rx.recv().await
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.bus.upgrade() {
            if let Some(mut subscribers) = inner.topics.get_mut(&self.topic) {
                subscribers.retain(|s| s.id != self.id);
            }
        }
    }
}
