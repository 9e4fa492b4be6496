//! 缓冲无法立即投递的消息的有界出站队列。
//! The bounded outbound queue buffering messages that cannot be delivered
//! immediately.

use crate::wire::Envelope;
use std::collections::VecDeque;
use tokio::time::Instant;
use tracing::debug;

/// A message waiting for connectivity.
/// 等待连接恢复的消息。
#[derive(Debug, Clone)]
pub(crate) struct QueuedMessage {
    /// The full wire envelope, ready to transmit.
    /// 完整的线上信封，随时可发送。
    pub(crate) envelope: Envelope,
    /// When the message entered the queue.
    /// 消息入队的时间。
    pub(crate) enqueued_at: Instant,
}

/// A bounded FIFO with a drop-oldest overflow policy.
///
/// Overflow is not an error condition: the eviction is silent, but counted
/// so diagnostics can observe it.
///
/// 采用“丢弃最旧”溢出策略的有界FIFO。
///
/// 溢出不是错误状况：淘汰是静默的，但会计数以便诊断观察。
#[derive(Debug)]
pub(crate) struct OutboundQueue {
    entries: VecDeque<QueuedMessage>,
    capacity: usize,
    evicted: u64,
}

impl OutboundQueue {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(64)),
            capacity,
            evicted: 0,
        }
    }

    /// Appends an envelope at the tail, evicting from the head first when
    /// the queue is full.
    /// 在尾部追加一个信封；队列已满时先从头部淘汰。
    pub(crate) fn enqueue(&mut self, envelope: Envelope) {
        while self.entries.len() >= self.capacity {
            if let Some(dropped) = self.entries.pop_front() {
                self.evicted += 1;
                debug!(
                    event = %dropped.envelope.event,
                    evicted_total = self.evicted,
                    "Outbound queue full, evicting oldest entry"
                );
            } else {
                break;
            }
        }
        self.entries.push_back(QueuedMessage {
            envelope,
            enqueued_at: Instant::now(),
        });
    }

    /// Removes and returns the whole current content, in FIFO order.
    ///
    /// Flushes operate on this snapshot; messages enqueued while the flush
    /// is in progress wait for the next cycle.
    ///
    /// 取出并返回当前全部内容，按FIFO顺序。
    ///
    /// 冲刷基于该快照进行；冲刷期间入队的消息等待下一个周期。
    pub(crate) fn take_snapshot(&mut self) -> Vec<QueuedMessage> {
        self.entries.drain(..).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of entries evicted since creation.
    /// 创建以来被淘汰的条目总数。
    pub(crate) fn evicted(&self) -> u64 {
        self.evicted
    }
}
