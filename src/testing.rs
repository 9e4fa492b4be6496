//! 测试辅助工具模块
//! Test utilities module

#![cfg(test)]

use crate::{
    auth::TokenProvider,
    error::{Error, Result},
    transport::{CloseReason, Connector, Transport, TransportEvent},
};
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::{
    Arc, Once,
    atomic::{AtomicBool, AtomicU32, Ordering},
};
use tokio::{
    sync::{Mutex, mpsc},
    time::Instant,
};

/// Helper to initialize tracing for tests.
pub(crate) fn init_tracing() {
    static TRACING_INIT: Once = Once::new();
    TRACING_INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .init();
    });
}

/// A token provider whose token and expiry are controlled by the test.
pub(crate) struct StaticTokens {
    token: Option<String>,
    expired: AtomicBool,
}

impl StaticTokens {
    pub(crate) fn valid() -> Arc<Self> {
        Arc::new(Self {
            token: Some("test-token".to_string()),
            expired: AtomicBool::new(false),
        })
    }

    pub(crate) fn expired() -> Arc<Self> {
        let tokens = Self::valid();
        tokens.expired.store(true, Ordering::SeqCst);
        tokens
    }

    pub(crate) fn missing() -> Arc<Self> {
        Arc::new(Self {
            token: None,
            expired: AtomicBool::new(false),
        })
    }
}

impl TokenProvider for StaticTokens {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }

    fn is_expired(&self, _token: &str) -> bool {
        self.expired.load(Ordering::SeqCst)
    }
}

/// A failure rule shared between the connector and the transports it opens:
/// sends whose payload contains the marker fail until the budget runs out.
#[derive(Debug, Default)]
pub(crate) struct FailRule {
    marker: Mutex<Option<String>>,
    budget: AtomicU32,
}

impl FailRule {
    pub(crate) async fn fail_payloads_containing(&self, marker: &str, times: u32) {
        *self.marker.lock().await = Some(marker.to_string());
        self.budget.store(times, Ordering::SeqCst);
    }

    async fn applies_to(&self, payload: &[u8]) -> bool {
        let guard = self.marker.lock().await;
        let Some(marker) = guard.as_deref() else {
            return false;
        };
        if !payload
            .windows(marker.len().max(1))
            .any(|w| w == marker.as_bytes())
        {
            return false;
        }
        // Consume one unit of the failure budget.
        loop {
            let budget = self.budget.load(Ordering::SeqCst);
            if budget == 0 {
                return false;
            }
            if self
                .budget
                .compare_exchange(budget, budget - 1, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                return true;
            }
        }
    }
}

/// A mock transport recording everything emitted through it.
///
/// All state is shared, so the test keeps a clone for inspection while the
/// actor owns the original.
#[derive(Debug, Clone)]
pub(crate) struct MockTransport {
    open: Arc<AtomicBool>,
    sent: Arc<Mutex<Vec<(String, Bytes)>>>,
    fail_rule: Arc<FailRule>,
}

impl MockTransport {
    fn new(fail_rule: Arc<FailRule>) -> Self {
        Self {
            open: Arc::new(AtomicBool::new(true)),
            sent: Arc::new(Mutex::new(Vec::new())),
            fail_rule,
        }
    }

    pub(crate) async fn sent(&self) -> Vec<(String, Bytes)> {
        self.sent.lock().await.clone()
    }

    pub(crate) async fn sent_events(&self) -> Vec<String> {
        self.sent
            .lock()
            .await
            .iter()
            .map(|(event, _)| event.clone())
            .collect()
    }

    pub(crate) fn set_open(&self, open: bool) {
        self.open.store(open, Ordering::SeqCst);
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn emit(&self, event: &str, payload: Bytes) -> Result<()> {
        if !self.open.load(Ordering::SeqCst) {
            return Err(Error::NotConnected);
        }
        if self.fail_rule.applies_to(&payload).await {
            return Err(Error::Transport("injected send failure".to_string()));
        }
        self.sent.lock().await.push((event.to_string(), payload));
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    async fn close(&self) -> Result<()> {
        self.open.store(false, Ordering::SeqCst);
        Ok(())
    }
}

/// One opened connection: the transport the actor talks through and the
/// sender the test injects server events with.
pub(crate) struct MockSession {
    pub(crate) transport: MockTransport,
    pub(crate) event_tx: mpsc::Sender<TransportEvent>,
}

impl MockSession {
    /// Simulates the server (or the network) dropping the link.
    pub(crate) async fn close_remotely(&self, reason: &str) {
        self.transport.set_open(false);
        let _ = self
            .event_tx
            .send(TransportEvent::Closed {
                reason: CloseReason::Remote(reason.to_string()),
            })
            .await;
    }

    /// Injects an incoming named event, as if sent by the server.
    pub(crate) async fn push_message(&self, event: &str, payload: serde_json::Value) {
        let bytes = Bytes::from(payload.to_string());
        let _ = self
            .event_tx
            .send(TransportEvent::Message {
                event: event.to_string(),
                payload: bytes,
            })
            .await;
    }
}

/// A scriptable connector: counts and timestamps handshakes, can fail the
/// next N attempts, and keeps a handle to every session it opened.
pub(crate) struct MockConnector {
    handshakes: Arc<AtomicU32>,
    fail_next: Arc<AtomicU32>,
    connect_delay: std::time::Duration,
    attempt_times: Arc<Mutex<Vec<Instant>>>,
    sessions: Arc<Mutex<Vec<MockSession>>>,
    fail_rule: Arc<FailRule>,
}

impl MockConnector {
    pub(crate) fn new() -> Self {
        Self {
            handshakes: Arc::new(AtomicU32::new(0)),
            fail_next: Arc::new(AtomicU32::new(0)),
            connect_delay: std::time::Duration::ZERO,
            attempt_times: Arc::new(Mutex::new(Vec::new())),
            sessions: Arc::new(Mutex::new(Vec::new())),
            fail_rule: Arc::new(FailRule::default()),
        }
    }

    /// A connector whose handshake takes the given (virtual) time.
    pub(crate) fn with_connect_delay(delay: std::time::Duration) -> Self {
        let mut connector = Self::new();
        connector.connect_delay = delay;
        connector
    }

    /// Shares all scripting state with `self`; the actor consumes one clone
    /// while the test drives the other.
    pub(crate) fn inspector(&self) -> Self {
        Self {
            handshakes: self.handshakes.clone(),
            fail_next: self.fail_next.clone(),
            connect_delay: self.connect_delay,
            attempt_times: self.attempt_times.clone(),
            sessions: self.sessions.clone(),
            fail_rule: self.fail_rule.clone(),
        }
    }

    pub(crate) fn handshakes(&self) -> u32 {
        self.handshakes.load(Ordering::SeqCst)
    }

    pub(crate) fn fail_next_connects(&self, count: u32) {
        self.fail_next.store(count, Ordering::SeqCst);
    }

    pub(crate) async fn attempt_times(&self) -> Vec<Instant> {
        self.attempt_times.lock().await.clone()
    }

    pub(crate) async fn session(&self, index: usize) -> MockSession {
        let sessions = self.sessions.lock().await;
        let session = &sessions[index];
        MockSession {
            transport: session.transport.clone(),
            event_tx: session.event_tx.clone(),
        }
    }

    pub(crate) async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub(crate) fn fail_rule(&self) -> Arc<FailRule> {
        self.fail_rule.clone()
    }
}

#[async_trait]
impl Connector for MockConnector {
    type Transport = MockTransport;

    async fn connect(
        &self,
        _token: &str,
    ) -> Result<(MockTransport, mpsc::Receiver<TransportEvent>)> {
        self.handshakes.fetch_add(1, Ordering::SeqCst);
        self.attempt_times.lock().await.push(Instant::now());

        if self.connect_delay > std::time::Duration::ZERO {
            tokio::time::sleep(self.connect_delay).await;
        }

        loop {
            let remaining = self.fail_next.load(Ordering::SeqCst);
            if remaining == 0 {
                break;
            }
            if self
                .fail_next
                .compare_exchange(remaining, remaining - 1, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                return Err(Error::Transport("injected handshake failure".to_string()));
            }
        }

        let transport = MockTransport::new(self.fail_rule.clone());
        let (event_tx, event_rx) = mpsc::channel(128);
        self.sessions.lock().await.push(MockSession {
            transport: transport.clone(),
            event_tx,
        });
        Ok((transport, event_rx))
    }
}
