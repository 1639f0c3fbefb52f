// SPDX-License-Identifier: GPL-3.0-only

//! Camera screen controller
//!
//! [`CameraController`] is the single owner of the [`Session`]. Intents,
//! hardware events, environment events, timer firings and async completions
//! all arrive as [`Message`]s on one queue and are applied by
//! [`CameraController::update`] one at a time. The presentation layer only
//! sees [`Snapshot`]s.

pub mod camera_selector;
pub mod focus;
mod handlers;
pub mod layout;
pub mod parameters;
pub mod state;
pub mod timers;
mod update;
pub mod zoom;

pub use state::{
    AppState, CaptureMode, CaptureOutcome, CaptureState, EnvironmentEvent, Message,
    RecordingPhase, Session, Snapshot,
};

use crate::backends::camera::CameraHardware;
use crate::config::Config;
use futures::stream::{BoxStream, StreamExt};
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use timers::Timers;
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Outcome channel capacity
const OUTCOME_CAPACITY: usize = 32;

/// Cloneable handle for posting messages from outside the controller
#[derive(Debug, Clone)]
pub struct ControllerHandle {
    sender: mpsc::UnboundedSender<Message>,
}

impl ControllerHandle {
    /// Queue a message; returns `false` if the controller is gone
    pub fn dispatch(&self, message: Message) -> bool {
        self.sender.send(message).is_ok()
    }
}

pub struct CameraController {
    session: Session,
    config: Config,
    hardware: Arc<dyn CameraHardware>,
    sender: mpsc::UnboundedSender<Message>,
    receiver: mpsc::UnboundedReceiver<Message>,
    snapshot_tx: watch::Sender<Snapshot>,
    outcome_tx: broadcast::Sender<CaptureOutcome>,
    timers: Timers,
    /// Cleared on teardown; spawned work checks it before posting results
    active: Arc<AtomicBool>,
    subscriptions: Vec<JoinHandle<()>>,
}

impl CameraController {
    pub fn new(hardware: Arc<dyn CameraHardware>, config: Config) -> Self {
        let session = Session::new(config.zoom_profile(), config.aspect_ratio);
        let (sender, receiver) = mpsc::unbounded_channel();
        let (snapshot_tx, _) = watch::channel(session.snapshot());
        let (outcome_tx, _) = broadcast::channel(OUTCOME_CAPACITY);

        Self {
            session,
            config,
            hardware,
            sender,
            receiver,
            snapshot_tx,
            outcome_tx,
            timers: Timers::new(),
            active: Arc::new(AtomicBool::new(false)),
            subscriptions: Vec::new(),
        }
    }

    /// Register event subscriptions and begin accepting messages
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, environment: BoxStream<'static, EnvironmentEvent>) {
        if self.is_active() {
            warn!("Controller already started");
            return;
        }
        info!("Starting camera controller");
        self.active.store(true, Ordering::Release);

        if let Some(max_zoom) = self.session.zoom.profile().max_zoom {
            self.hardware.set_max_zoom(max_zoom);
        }

        let hardware_events = self.forward(self.hardware.hardware_events(), Message::Hardware);
        let environment = self.forward(environment, Message::Environment);
        self.subscriptions.extend([hardware_events, environment]);

        self.recompute_viewport();
        self.publish();
    }

    /// Stop recording, cancel timers and release subscriptions
    ///
    /// No queued or in-flight work mutates the session afterwards.
    pub fn teardown(&mut self) {
        if !self.is_active() {
            return;
        }
        info!("Tearing down camera controller");

        if self.session.capture.is_recording() {
            self.hardware.stop_recording();
        }

        self.active.store(false, Ordering::Release);
        self.timers.cancel_all();
        for subscription in self.subscriptions.drain(..) {
            subscription.abort();
        }
        while self.receiver.try_recv().is_ok() {}
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub fn handle(&self) -> ControllerHandle {
        ControllerHandle {
            sender: self.sender.clone(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    /// Receive a new snapshot after every applied message
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Receive photo and video outcomes
    pub fn outcomes(&self) -> broadcast::Receiver<CaptureOutcome> {
        self.outcome_tx.subscribe()
    }

    /// Names of timers still pending
    pub fn pending_timers(&self) -> Vec<&'static str> {
        self.timers.pending()
    }

    /// Apply a message immediately
    pub fn dispatch(&mut self, message: Message) {
        self.update(message);
    }

    /// Apply every message already queued
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(message) = self.receiver.try_recv() {
            self.update(message);
            applied += 1;
        }
        applied
    }

    /// Wait for and apply the next queued message
    pub async fn step(&mut self) -> bool {
        match self.receiver.recv().await {
            Some(message) => {
                self.update(message);
                true
            }
            None => false,
        }
    }

    /// Apply messages as they arrive for `duration`
    pub async fn run_for(&mut self, duration: Duration) {
        let deadline = tokio::time::Instant::now() + duration;
        loop {
            tokio::select! {
                biased;
                message = self.receiver.recv() => match message {
                    Some(message) => self.update(message),
                    None => break,
                },
                _ = tokio::time::sleep_until(deadline) => break,
            }
        }
    }

    // ===== Internal plumbing =====

    /// Run `future` on a task and post its mapped output back, if still active
    pub(crate) fn perform<F, T, M>(&self, future: F, map: M)
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
        M: FnOnce(T) -> Message + Send + 'static,
    {
        let sender = self.sender.clone();
        let active = Arc::clone(&self.active);
        tokio::spawn(async move {
            let output = future.await;
            if !active.load(Ordering::Acquire) {
                debug!("Controller torn down, dropping async result");
                return;
            }
            let _ = sender.send(map(output));
        });
    }

    fn forward<T, F>(&self, mut stream: BoxStream<'static, T>, wrap: F) -> JoinHandle<()>
    where
        T: Send + 'static,
        F: Fn(T) -> Message + Send + 'static,
    {
        let sender = self.sender.clone();
        let active = Arc::clone(&self.active);
        tokio::spawn(async move {
            while let Some(item) = stream.next().await {
                if !active.load(Ordering::Acquire) || sender.send(wrap(item)).is_err() {
                    break;
                }
            }
        })
    }

    pub(crate) fn publish(&self) {
        self.snapshot_tx.send_replace(self.session.snapshot());
    }

    pub(crate) fn emit(&self, outcome: CaptureOutcome) {
        // No receivers is fine
        let _ = self.outcome_tx.send(outcome);
    }
}

impl Drop for CameraController {
    fn drop(&mut self) {
        self.teardown();
    }
}
