use std::ops::Deref;

use log::{debug, error};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::snapshot::ParameterSnapshot;
use crate::store::ParameterStore;

/// A complete replacement snapshot delivered by the runtime
/// reconfiguration mechanism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconfigureEvent {
    pub version: u32,
    pub params: ParameterSnapshot,
}

impl ReconfigureEvent {
    pub fn new(params: ParameterSnapshot, version: u32) -> Self {
        Self { version, params }
    }

    pub fn from_yaml(text: &str) -> crate::Result<Self> {
        let event: Self = serde_yml::from_str(text)?;
        Ok(Self {
            version: event.version,
            params: event.params.normalized(),
        })
    }
}

#[derive(Debug)]
pub enum ReconfigureMessage {
    Event(ReconfigureEvent),
    Exit,
}

/// Applies reconfiguration events to a store from a background task, in
/// the order they were sent.
#[derive(Debug)]
pub struct ReconfigureListener {
    task_handle: Option<JoinHandle<()>>,
    tx: UnboundedSender<ReconfigureMessage>,
}

impl ReconfigureListener {
    /// Must be called from within a tokio runtime.
    pub fn spawn<S>(store: S) -> Self
    where
        S: Deref<Target = ParameterStore> + Send + 'static,
    {
        let (tx, rx) = unbounded_channel::<ReconfigureMessage>();
        let task_handle = tokio::spawn(listen_loop(store, rx));

        Self {
            task_handle: Some(task_handle),
            tx,
        }
    }

    pub fn sender(&self) -> UnboundedSender<ReconfigureMessage> {
        self.tx.clone()
    }

    pub fn send(&self, event: ReconfigureEvent) {
        if self.tx.send(ReconfigureMessage::Event(event)).is_err() {
            error!("[Params] Reconfiguration listener is no longer running; event dropped");
        }
    }

    pub fn reconfigure(&self, update: ParameterSnapshot, version: u32) {
        self.send(ReconfigureEvent::new(update, version));
    }

    /// Stops the listener after every event already sent has been applied.
    pub async fn exit(&mut self) {
        // Send fails only if the task already stopped, which is fine here.
        let _ = self.tx.send(ReconfigureMessage::Exit);

        if let Some(task_handle) = self.task_handle.take() {
            if let Err(err) = task_handle.await {
                error!("[Params] Reconfiguration listener failed: {}", err);
            }
        }
    }
}

impl Drop for ReconfigureListener {
    fn drop(&mut self) {
        if self.task_handle.is_some() {
            error!("ReconfigureListener dropped while still running; call exit() first");
        }
    }
}

async fn listen_loop<S>(store: S, mut rx: UnboundedReceiver<ReconfigureMessage>)
where
    S: Deref<Target = ParameterStore>,
{
    while let Some(msg) = rx.recv().await {
        match msg {
            ReconfigureMessage::Event(event) => {
                store.reconfigure(event.params, event.version);
            }
            ReconfigureMessage::Exit => break,
        }
    }

    debug!("[Params] Reconfiguration listener stopped");
}
