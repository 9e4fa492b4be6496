//! tests/common/harness.rs
//!
//! A scripted in-memory backend implementing the public transport traits,
//! so the integration tests can drive the connection core end to end
//! without a network.

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;
use std::sync::{
    Arc, Once,
    atomic::{AtomicBool, AtomicU32, Ordering},
};
use tether::{
    auth::TokenProvider,
    client::RealtimeClient,
    config::Config,
    error::{Error, Result},
    transport::{CloseReason, Connector, Transport, TransportEvent},
};
use tokio::sync::{Mutex, mpsc};

/// Initializes tracing for tests, ensuring it's only done once.
pub fn init_tracing() {
    static TRACING_INIT: Once = Once::new();
    TRACING_INIT.call_once(|| {
        let filter =
            std::env::var("RUST_LOG").unwrap_or_else(|_| "tether=debug,session=info".to_string());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}

/// A token provider that always hands out a fresh, valid token.
pub struct AlwaysValidTokens;

impl TokenProvider for AlwaysValidTokens {
    fn token(&self) -> Option<String> {
        Some("integration-token".to_string())
    }

    fn is_expired(&self, _token: &str) -> bool {
        false
    }
}

/// The in-memory link the client talks through.
#[derive(Debug, Clone)]
pub struct FakeLink {
    open: Arc<AtomicBool>,
    sent: Arc<Mutex<Vec<(String, Bytes)>>>,
}

impl FakeLink {
    pub async fn sent_events(&self) -> Vec<String> {
        self.sent
            .lock()
            .await
            .iter()
            .map(|(event, _)| event.clone())
            .collect()
    }

    pub async fn sent_payloads(&self, event: &str) -> Vec<Value> {
        self.sent
            .lock()
            .await
            .iter()
            .filter(|(e, _)| e == event)
            .map(|(_, frame)| serde_json::from_slice(frame).unwrap())
            .collect()
    }
}

#[async_trait]
impl Transport for FakeLink {
    async fn emit(&self, event: &str, payload: Bytes) -> Result<()> {
        if !self.open.load(Ordering::SeqCst) {
            return Err(Error::NotConnected);
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

/// One accepted connection, as seen from the fake backend's side.
pub struct BackendSession {
    pub link: FakeLink,
    event_tx: mpsc::Sender<TransportEvent>,
}

impl BackendSession {
    /// Pushes a named event to the client, as the server would.
    pub async fn send_to_client(&self, event: &str, payload: Value) {
        let _ = self
            .event_tx
            .send(TransportEvent::Message {
                event: event.to_string(),
                payload: Bytes::from(payload.to_string()),
            })
            .await;
    }

    /// Kills the link from the server side (e.g. a restart).
    pub async fn drop_link(&self, reason: &str) {
        self.link.open.store(false, Ordering::SeqCst);
        let _ = self
            .event_tx
            .send(TransportEvent::Closed {
                reason: CloseReason::Remote(reason.to_string()),
            })
            .await;
    }
}

/// A fake backend accepting every handshake and remembering each session.
///
/// Cheap to clone; all clones share the same scripting state via the inner
/// `Arc`s, so the actor can consume one clone while the test drives another.
#[derive(Clone)]
pub struct FakeBackend {
    accepted: Arc<AtomicU32>,
    sessions: Arc<Mutex<Vec<BackendSession>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            accepted: Arc::new(AtomicU32::new(0)),
            sessions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn accepted(&self) -> u32 {
        self.accepted.load(Ordering::SeqCst)
    }

    pub async fn session(&self, index: usize) -> BackendSession {
        let sessions = self.sessions.lock().await;
        let session = &sessions[index];
        BackendSession {
            link: session.link.clone(),
            event_tx: session.event_tx.clone(),
        }
    }
}

#[async_trait]
impl Connector for FakeBackend {
    type Transport = FakeLink;

    async fn connect(&self, _token: &str) -> Result<(FakeLink, mpsc::Receiver<TransportEvent>)> {
        self.accepted.fetch_add(1, Ordering::SeqCst);
        let link = FakeLink {
            open: Arc::new(AtomicBool::new(true)),
            sent: Arc::new(Mutex::new(Vec::new())),
        };
        let (event_tx, event_rx) = mpsc::channel(128);
        self.sessions.lock().await.push(BackendSession {
            link: link.clone(),
            event_tx,
        });
        Ok((link, event_rx))
    }
}

/// Spawns a client wired to a fresh fake backend.
pub fn connected_pair() -> (RealtimeClient<FakeBackend>, FakeBackend) {
    init_tracing();
    let backend = FakeBackend::new();
    let client = RealtimeClient::spawn(
        Config::default(),
        backend.clone(),
        Arc::new(AlwaysValidTokens),
    );
    (client, backend)
}
