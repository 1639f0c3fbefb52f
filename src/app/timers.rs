// SPDX-License-Identifier: GPL-3.0-only

//! Cancellable scheduled transitions
//!
//! Each timer slot owns at most one pending tokio task. Firing posts a
//! [`Message`] carrying the slot's generation token; the controller applies it
//! only if the token is still current. Cancelling or rescheduling bumps the
//! generation, so a firing that was already queued is ignored.

use super::state::Message;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::trace;

/// Generation token identifying one scheduling of a timer slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Debug)]
pub struct ScheduledTransition {
    name: &'static str,
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl ScheduledTransition {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            generation: 0,
            handle: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether a firing is still expected
    pub fn is_pending(&self) -> bool {
        self.handle.is_some()
    }

    /// Fire `make(token)` once after `delay`, replacing any pending firing
    pub fn schedule<F>(&mut self, delay: Duration, sender: &UnboundedSender<Message>, make: F)
    where
        F: FnOnce(TimerToken) -> Message + Send + 'static,
    {
        let token = self.rearm();
        let sender = sender.clone();
        trace!(timer = self.name, ?delay, "Scheduling transition");
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = sender.send(make(token));
        }));
    }

    /// Fire `make(token)` every `period` until cancelled, replacing any pending firing
    pub fn schedule_periodic<F>(
        &mut self,
        period: Duration,
        sender: &UnboundedSender<Message>,
        make: F,
    ) where
        F: Fn(TimerToken) -> Message + Send + 'static,
    {
        let token = self.rearm();
        let sender = sender.clone();
        trace!(timer = self.name, ?period, "Scheduling periodic transition");
        self.handle = Some(tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(start, period);
            loop {
                interval.tick().await;
                if sender.send(make(token)).is_err() {
                    break;
                }
            }
        }));
    }

    /// Drop any pending firing; a firing already queued becomes stale
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            trace!(timer = self.name, "Cancelling transition");
            handle.abort();
        }
        self.generation = self.generation.wrapping_add(1);
    }

    /// Accept a one-shot firing
    ///
    /// Returns `false` for stale tokens. A current token clears the slot.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if token.0 != self.generation || self.handle.is_none() {
            trace!(timer = self.name, "Ignoring stale firing");
            return false;
        }
        self.handle = None;
        true
    }

    /// Accept a periodic tick without clearing the slot
    pub fn tick(&self, token: TimerToken) -> bool {
        token.0 == self.generation && self.handle.is_some()
    }

    fn rearm(&mut self) -> TimerToken {
        self.cancel();
        TimerToken(self.generation)
    }
}

impl Drop for ScheduledTransition {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Every timer the controller owns
#[derive(Debug)]
pub struct Timers {
    /// Lens reconfiguration settle delay
    pub settle: ScheduledTransition,
    /// Post-recording cooldown delay
    pub cooldown: ScheduledTransition,
    /// Focus indicator expiry
    pub focus_indicator: ScheduledTransition,
    /// Orientation debounce
    pub orientation: ScheduledTransition,
    /// Recording elapsed-seconds counter
    pub elapsed: ScheduledTransition,
}

impl Timers {
    pub fn new() -> Self {
        Self {
            settle: ScheduledTransition::new("settle"),
            cooldown: ScheduledTransition::new("cooldown"),
            focus_indicator: ScheduledTransition::new("focus_indicator"),
            orientation: ScheduledTransition::new("orientation"),
            elapsed: ScheduledTransition::new("elapsed"),
        }
    }

    pub fn cancel_all(&mut self) {
        self.settle.cancel();
        self.cooldown.cancel();
        self.focus_indicator.cancel();
        self.orientation.cancel();
        self.elapsed.cancel();
    }

    /// Names of the slots still expecting a firing
    pub fn pending(&self) -> Vec<&'static str> {
        [
            &self.settle,
            &self.cooldown,
            &self.focus_indicator,
            &self.orientation,
            &self.elapsed,
        ]
        .into_iter()
        .filter(|t| t.is_pending())
        .map(ScheduledTransition::name)
        .collect()
    }
}

impl Default for Timers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_one_shot_fires_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut slot = ScheduledTransition::new("test");
        slot.schedule(Duration::from_millis(100), &tx, Message::SettleElapsed);

        let Some(Message::SettleElapsed(token)) = rx.recv().await else {
            panic!("expected a settle firing");
        };
        assert!(slot.fire(token));
        assert!(!slot.fire(token));
        assert!(!slot.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_makes_queued_firing_stale() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut slot = ScheduledTransition::new("test");
        slot.schedule(Duration::from_millis(10), &tx, Message::CooldownElapsed);
        tokio::time::sleep(Duration::from_millis(20)).await;
        slot.cancel();

        let Some(Message::CooldownElapsed(token)) = rx.recv().await else {
            panic!("expected a queued firing");
        };
        assert!(!slot.fire(token));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_supersedes() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut slot = ScheduledTransition::new("test");
        slot.schedule(Duration::from_millis(50), &tx, Message::FocusIndicatorExpired);
        slot.schedule(Duration::from_millis(80), &tx, Message::FocusIndicatorExpired);

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(rx.try_recv().is_err());

        let Some(Message::FocusIndicatorExpired(token)) = rx.recv().await else {
            panic!("expected the rescheduled firing");
        };
        assert!(slot.fire(token));
    }

    #[tokio::test(start_paused = true)]
    async fn test_periodic_ticks_until_cancelled() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut slot = ScheduledTransition::new("test");
        slot.schedule_periodic(Duration::from_secs(1), &tx, Message::ElapsedTick);

        tokio::time::sleep(Duration::from_millis(3500)).await;
        let mut ticks = 0;
        while let Ok(Message::ElapsedTick(token)) = rx.try_recv() {
            assert!(slot.tick(token));
            ticks += 1;
        }
        assert_eq!(ticks, 3);

        slot.cancel();
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }
}
