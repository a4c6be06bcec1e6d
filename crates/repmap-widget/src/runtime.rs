//! Async driver for the reducer.
//!
//! One task owns the [`WidgetState`] and consumes a single event stream.
//! Effects run as spawned tasks and report back through the same stream, so
//! every state change happens in arrival order on one task.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use repmap_core::{Catalog, SignupRecord};
use tokio::sync::{mpsc, watch};
use tracing::debug;

use crate::error::{WidgetError, WidgetResult};
use crate::event::{Effect, Event};
use crate::widget::WidgetState;

/// Where the widget's data, maps and signups come from.
#[async_trait]
pub trait Backend: Send + Sync + 'static {
    /// Both catalog documents. Either failing fails the whole load.
    async fn fetch_catalog(&self) -> WidgetResult<Catalog>;

    async fn fetch_map(&self, path: &str) -> WidgetResult<String>;

    /// Returns the server's success message, if it sent one.
    async fn submit(&self, record: &SignupRecord) -> WidgetResult<Option<String>>;
}

/// Perform one effect and turn its outcome into the completion event.
pub async fn perform<B: Backend + ?Sized>(backend: &B, effect: Effect) -> Event {
    match effect {
        Effect::FetchData => match backend.fetch_catalog().await {
            Ok(catalog) => Event::DataLoaded { catalog },
            Err(e) => Event::DataFailed {
                error: e.to_string(),
            },
        },
        Effect::FetchMap { abbr, path } => match backend.fetch_map(&path).await {
            Ok(markup) => Event::MapLoaded { abbr, markup },
            Err(e) => Event::MapFailed {
                abbr,
                error: e.to_string(),
            },
        },
        Effect::PostSignup { record } => match backend.submit(&record).await {
            Ok(message) => Event::SubmitSucceeded { message },
            Err(e) => Event::SubmitFailed {
                error: e.to_string(),
            },
        },
    }
}

enum Envelope {
    /// Sent through a [`WidgetHandle`].
    Input(Event),
    /// Sent by a finished effect.
    Completion(Event),
}

/// Published after every event.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Number of handle events applied so far.
    pub inputs: u64,
    pub state: WidgetState,
}

pub struct Runtime<B: Backend> {
    backend: Arc<B>,
    state: WidgetState,
    inputs: u64,
    events: mpsc::UnboundedReceiver<Envelope>,
    completions: mpsc::WeakUnboundedSender<Envelope>,
    snapshots: watch::Sender<Snapshot>,
}

impl<B: Backend> Runtime<B> {
    pub fn new(backend: B) -> (Self, WidgetHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (snapshots, snapshot_rx) = watch::channel(Snapshot::default());
        let runtime = Self {
            backend: Arc::new(backend),
            state: WidgetState::new(),
            inputs: 0,
            events: rx,
            completions: tx.downgrade(),
            snapshots,
        };
        let handle = WidgetHandle {
            events: tx,
            sent: Arc::new(AtomicU64::new(0)),
            snapshots: snapshot_rx,
        };
        (runtime, handle)
    }

    /// Apply events until every handle is dropped and no effect is still
    /// running. Returns the final state.
    pub async fn run(mut self) -> WidgetState {
        while let Some(envelope) = self.events.recv().await {
            let event = match envelope {
                Envelope::Input(event) => {
                    self.inputs += 1;
                    event
                }
                Envelope::Completion(event) => event,
            };
            for effect in self.state.update(event) {
                self.spawn(effect);
            }
            self.snapshots.send_replace(Snapshot {
                inputs: self.inputs,
                state: self.state.clone(),
            });
        }
        debug!("widget runtime stopped");
        self.state
    }

    fn spawn(&self, effect: Effect) {
        // Nobody is left to observe the result.
        let Some(tx) = self.completions.upgrade() else {
            return;
        };
        let backend = Arc::clone(&self.backend);
        tokio::spawn(async move {
            let event = perform(backend.as_ref(), effect).await;
            let _ = tx.send(Envelope::Completion(event));
        });
    }
}

/// Sends events to a running [`Runtime`] and observes its state.
#[derive(Clone)]
pub struct WidgetHandle {
    events: mpsc::UnboundedSender<Envelope>,
    sent: Arc<AtomicU64>,
    snapshots: watch::Receiver<Snapshot>,
}

impl WidgetHandle {
    pub fn send(&self, event: Event) -> WidgetResult<()> {
        self.events
            .send(Envelope::Input(event))
            .map_err(|_| WidgetError::Closed)?;
        self.sent.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    /// The latest published state.
    pub fn state(&self) -> WidgetState {
        self.snapshots.borrow().state.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }

    /// Wait until every event sent so far has been applied and `predicate`
    /// holds for the resulting state.
    pub async fn wait_for<F>(&mut self, mut predicate: F) -> WidgetResult<WidgetState>
    where
        F: FnMut(&WidgetState) -> bool,
    {
        let sent = self.sent.load(Ordering::SeqCst);
        let snapshot = self
            .snapshots
            .wait_for(|s| s.inputs >= sent && predicate(&s.state))
            .await
            .map_err(|_| WidgetError::Closed)?;
        Ok(snapshot.state.clone())
    }

    /// Wait until nothing is loading or submitting.
    pub async fn settle(&mut self) -> WidgetResult<WidgetState> {
        self.wait_for(WidgetState::is_settled).await
    }
}
