//! Event scheduler - the background loop that starts events and plays
//! autopilot players.
//!
//! Each tick snapshots the players under the shared lock. Every `active`
//! player gets one trigger roll; on a hit an event is selected (one exclusive
//! lock per player, skipped if the player is no longer `active` by then) and
//! the notification is sent after the lock is released.
//! Every `autopilot` player then takes one autopilot step. Per-player failures
//! are logged and never stop the tick.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use vidaloka_domain::{Player, PlayerStatus};

use crate::error::GameError;
use crate::infrastructure::dice::Dice;
use crate::infrastructure::ports::MessageSender;
use crate::stores::GameStore;
use crate::use_cases::autopilot::{AutopilotStep, RunAutopilot};
use crate::use_cases::event::SelectEvent;
use crate::use_cases::format_event_notification;

/// Shortest accepted tick interval.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Scheduler knobs, taken from `EngineConfig` and `GameRules`.
#[derive(Debug, Clone)]
pub struct SchedulerSettings {
    pub interval: Duration,
    /// Per-player trigger chance in percent
    pub probability: i32,
    /// `from` address on outgoing notifications
    pub from_address: String,
}

/// Counters for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub active: usize,
    pub triggered: usize,
    pub notified: usize,
    pub autopilot: usize,
    pub autopilot_steps: usize,
    pub failures: usize,
}

enum Notification {
    Sent,
    Skipped,
    Failed,
}

struct Running {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

pub struct EventScheduler {
    worker: Arc<SchedulerWorker>,
    interval: Duration,
    running: Mutex<Option<Running>>,
}

struct SchedulerWorker {
    store: Arc<GameStore>,
    select: Arc<SelectEvent>,
    autopilot: Arc<RunAutopilot>,
    sender: Arc<dyn MessageSender>,
    dice: Dice,
    probability: i32,
    from_address: String,
}

impl EventScheduler {
    pub fn new(
        store: Arc<GameStore>,
        select: Arc<SelectEvent>,
        autopilot: Arc<RunAutopilot>,
        sender: Arc<dyn MessageSender>,
        dice: Dice,
        settings: SchedulerSettings,
    ) -> Self {
        Self {
            worker: Arc::new(SchedulerWorker {
                store,
                select,
                autopilot,
                sender,
                dice,
                probability: settings.probability,
                from_address: settings.from_address,
            }),
            interval: settings.interval.max(MIN_INTERVAL),
            running: Mutex::new(None),
        }
    }

    /// Spawn the tick loop. Returns `false` if it was already running.
    ///
    /// The first tick fires one full interval after start.
    pub async fn start(&self) -> bool {
        let mut running = self.running.lock().await;
        if running.is_some() {
            return false;
        }

        let cancel = CancellationToken::new();
        let worker = self.worker.clone();
        let token = cancel.clone();
        let interval = self.interval;
        let handle = tokio::spawn(async move { worker.run(interval, token).await });

        *running = Some(Running { cancel, handle });
        tracing::info!(
            interval_ms = interval.as_millis() as u64,
            probability = self.worker.probability,
            "Event scheduler started"
        );
        true
    }

    /// Stop the tick loop and wait for it to exit. Returns `false` if it was
    /// not running.
    ///
    /// A tick in progress is allowed to finish; none fires after this returns.
    pub async fn stop(&self) -> bool {
        // Held until the loop has exited so a concurrent `start` waits for it.
        let mut guard = self.running.lock().await;
        let Some(running) = guard.take() else {
            return false;
        };
        running.cancel.cancel();
        if let Err(e) = running.handle.await {
            tracing::warn!(error = %e, "Event scheduler task ended abnormally");
        }
        drop(guard);
        tracing::info!("Event scheduler stopped");
        true
    }

    pub async fn is_running(&self) -> bool {
        self.running.lock().await.is_some()
    }

    /// Run one tick now, outside the timer.
    pub async fn tick(&self) -> TickReport {
        self.worker.tick().await
    }
}

impl SchedulerWorker {
    async fn run(&self, period: Duration, cancel: CancellationToken) {
        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    self.tick().await;
                }
            }
        }
        tracing::debug!("Event scheduler loop exited");
    }

    async fn tick(&self) -> TickReport {
        let mut report = TickReport::default();

        let active = self.store.players_with_status(PlayerStatus::Active).await;
        report.active = active.len();
        for player in &active {
            if !self.dice.percent(self.probability) {
                continue;
            }
            report.triggered += 1;
            match self.notify(player).await {
                Notification::Sent => report.notified += 1,
                Notification::Skipped => {}
                Notification::Failed => report.failures += 1,
            }
        }

        let autopilot = self.store.players_with_status(PlayerStatus::Autopilot).await;
        report.autopilot = autopilot.len();
        for player in &autopilot {
            match self.autopilot.execute(player.id()).await {
                Ok(AutopilotStep::Idle) => {}
                Ok(_) => report.autopilot_steps += 1,
                Err(e) => {
                    report.failures += 1;
                    tracing::warn!(
                        player_id = %player.id(),
                        error = %e,
                        "Autopilot step failed"
                    );
                }
            }
        }

        tracing::info!(
            active = report.active,
            triggered = report.triggered,
            notified = report.notified,
            autopilot = report.autopilot,
            autopilot_steps = report.autopilot_steps,
            failures = report.failures,
            "Scheduler tick"
        );
        report
    }

    /// Select an event for the player and send it.
    async fn notify(&self, player: &Player) -> Notification {
        let event = match self.select.execute_if_active(player.id()).await {
            Ok(event) => event,
            Err(
                e @ (GameError::NoEligibleEvents(_)
                | GameError::NoCharacter(_)
                | GameError::InvalidStatus(_)),
            ) => {
                tracing::debug!(player_id = %player.id(), reason = %e, "No event started");
                return Notification::Skipped;
            }
            Err(e) => {
                tracing::warn!(
                    player_id = %player.id(),
                    error = %e,
                    "Event selection failed"
                );
                return Notification::Failed;
            }
        };

        let text = format_event_notification(&event);
        match self
            .sender
            .send(&self.from_address, player.id().as_str(), &text)
            .await
        {
            Ok(message_id) => {
                tracing::debug!(
                    player_id = %player.id(),
                    event_id = %event.id,
                    message_id = %message_id,
                    "Event notification sent"
                );
                Notification::Sent
            }
            Err(e) => {
                tracing::warn!(
                    player_id = %player.id(),
                    event_id = %event.id,
                    error = %e,
                    "Event notification failed"
                );
                Notification::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MessagingError, MockMessageSender};
    use crate::test_fixtures::{assigned_player, sample_time, RecordingSender, TestGame};
    use async_trait::async_trait;
    use vidaloka_domain::{EventId, PlayerId};

    /// Puts `bia` to sleep while the message to `ana` is in flight.
    struct SleepOnSend {
        store: Arc<GameStore>,
        recipients: std::sync::Mutex<Vec<String>>,
    }

    #[async_trait]
    impl MessageSender for SleepOnSend {
        async fn send(
            &self,
            _from: &str,
            to: &str,
            _text: &str,
        ) -> Result<String, MessagingError> {
            if to == "ana" {
                self.store
                    .update_player(&PlayerId::new("bia"), |player, _| {
                        player.set_status(PlayerStatus::Sleeping, sample_time());
                        Ok(())
                    })
                    .await
                    .unwrap();
            }
            self.recipients.lock().unwrap().push(to.to_string());
            Ok(format!("msg-{to}"))
        }
    }

    fn scheduler(
        game: &TestGame,
        sender: Arc<RecordingSender>,
        probability: i32,
        interval: Duration,
    ) -> EventScheduler {
        EventScheduler::new(
            game.store.clone(),
            game.use_cases.event.select.clone(),
            game.use_cases.autopilot.run.clone(),
            sender,
            Dice::new(game.random.clone()),
            SchedulerSettings {
                interval,
                probability,
                from_address: "vidaloka-bot".to_string(),
            },
        )
    }

    fn with_status(id: &str, status: PlayerStatus) -> Player {
        let mut player = assigned_player(id, "hacker");
        player.set_status(status, sample_time());
        player
    }

    #[tokio::test]
    async fn tick_notifies_triggered_active_players() {
        // an exhausted script rolls 1 every time: always triggers
        let game = TestGame::new([]);
        game.add_player(assigned_player("ana", "hacker")).await;
        game.add_player(with_status("zeca", PlayerStatus::Sleeping))
            .await;
        let sender = Arc::new(RecordingSender::new());

        let report = scheduler(&game, sender.clone(), 100, Duration::from_secs(60))
            .tick()
            .await;

        assert_eq!(report.active, 1);
        assert_eq!(report.notified, 1);
        assert_eq!(report.failures, 0);

        let sent = sender.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from, "vidaloka-bot");
        assert_eq!(sent[0].to, "ana");
        let blitz = game
            .store
            .read(|state| state.catalog.event(&EventId::new("blitz")).cloned())
            .await
            .unwrap();
        assert_eq!(sent[0].text, format_event_notification(&blitz));
        assert_eq!(
            game.player("ana").await.pending_event(),
            Some(&EventId::new("blitz"))
        );
    }

    #[tokio::test]
    async fn sends_from_configured_address_to_player_id() {
        let game = TestGame::new([]);
        game.add_player(assigned_player("5521900000001", "hacker"))
            .await;
        let mut sender = MockMessageSender::new();
        sender
            .expect_send()
            .withf(|from, to, text| {
                from.to_string() == "vidaloka-bot"
                    && to.to_string() == "5521900000001"
                    && text.starts_with("Police blitz")
            })
            .times(1)
            .returning(|_, _, _| Ok("msg-1".to_string()));

        let scheduler = EventScheduler::new(
            game.store.clone(),
            game.use_cases.event.select.clone(),
            game.use_cases.autopilot.run.clone(),
            Arc::new(sender),
            Dice::new(game.random.clone()),
            SchedulerSettings {
                interval: Duration::from_secs(60),
                probability: 100,
                from_address: "vidaloka-bot".to_string(),
            },
        );

        assert_eq!(scheduler.tick().await.notified, 1);
    }

    #[tokio::test]
    async fn zero_probability_never_triggers() {
        let game = TestGame::new([]);
        game.add_player(assigned_player("ana", "hacker")).await;
        let sender = Arc::new(RecordingSender::new());

        let report = scheduler(&game, sender.clone(), 0, Duration::from_secs(60))
            .tick()
            .await;

        assert_eq!(report.triggered, 0);
        assert!(sender.sent().is_empty());
        assert!(game.player("ana").await.pending_event().is_none());
    }

    #[tokio::test]
    async fn one_failing_player_does_not_block_the_rest() {
        let game = TestGame::new([]);
        game.add_player(assigned_player("ana", "hacker")).await;
        game.add_player(assigned_player("bia", "hacker")).await;
        game.add_player(Player::new(PlayerId::new("cris"), "Cris", sample_time()))
            .await;
        let sender = Arc::new(RecordingSender::new());
        sender.reject_recipient("ana");

        let report = scheduler(&game, sender.clone(), 100, Duration::from_secs(60))
            .tick()
            .await;

        // cris has no character: skipped quietly
        assert_eq!(report.triggered, 3);
        assert_eq!(report.notified, 1);
        assert_eq!(report.failures, 1);
        assert_eq!(sender.sent()[0].to, "bia");
        // the event was committed before the send failed
        assert!(game.player("ana").await.pending_event().is_some());
    }

    #[tokio::test]
    async fn player_who_left_active_mid_tick_gets_no_event() {
        let game = TestGame::new([]);
        game.add_player(assigned_player("ana", "hacker")).await;
        game.add_player(assigned_player("bia", "hacker")).await;
        let sender = Arc::new(SleepOnSend {
            store: game.store.clone(),
            recipients: std::sync::Mutex::new(Vec::new()),
        });

        let report = EventScheduler::new(
            game.store.clone(),
            game.use_cases.event.select.clone(),
            game.use_cases.autopilot.run.clone(),
            sender.clone(),
            Dice::new(game.random.clone()),
            SchedulerSettings {
                interval: Duration::from_secs(60),
                probability: 100,
                from_address: "vidaloka-bot".to_string(),
            },
        )
        .tick()
        .await;

        assert_eq!(report.active, 2);
        assert_eq!(report.notified, 1);
        assert_eq!(report.failures, 0);
        assert_eq!(*sender.recipients.lock().unwrap(), vec!["ana".to_string()]);
        let bia = game.player("bia").await;
        assert_eq!(bia.status(), PlayerStatus::Sleeping);
        assert!(bia.pending_event().is_none());
    }

    #[tokio::test]
    async fn tick_drives_autopilot_players() {
        let game = TestGame::new([]);
        game.add_player(with_status("ana", PlayerStatus::Autopilot))
            .await;
        let sender = Arc::new(RecordingSender::new());

        let report = scheduler(&game, sender.clone(), 100, Duration::from_secs(60))
            .tick()
            .await;

        assert_eq!(report.autopilot, 1);
        assert_eq!(report.autopilot_steps, 1);
        assert!(sender.sent().is_empty());
        let ana = game.player("ana").await;
        assert_eq!(ana.decisions().len(), 1);
        assert_eq!(ana.decisions()[0].choice, "trabalhar");
    }

    #[tokio::test]
    async fn start_and_stop_are_idempotent() {
        let game = TestGame::new([]);
        let scheduler = scheduler(
            &game,
            Arc::new(RecordingSender::new()),
            100,
            Duration::from_secs(60),
        );

        assert!(!scheduler.stop().await);
        assert!(scheduler.start().await);
        assert!(!scheduler.start().await);
        assert!(scheduler.is_running().await);
        assert!(scheduler.stop().await);
        assert!(!scheduler.stop().await);
        assert!(!scheduler.is_running().await);
    }

    #[tokio::test]
    async fn start_racing_stop_leaves_one_loop() {
        let game = TestGame::new([]);
        let scheduler = scheduler(
            &game,
            Arc::new(RecordingSender::new()),
            100,
            Duration::from_secs(60),
        );
        scheduler.start().await;

        let (stopped, started) = tokio::join!(scheduler.stop(), scheduler.start());

        assert!(stopped);
        assert_eq!(scheduler.is_running().await, started);
        if started {
            assert!(scheduler.stop().await);
        }
        assert!(!scheduler.is_running().await);
    }

    #[tokio::test]
    async fn no_ticks_after_stop_returns() {
        let game = TestGame::new([]);
        game.add_player(assigned_player("ana", "hacker")).await;
        let sender = Arc::new(RecordingSender::new());
        let scheduler = scheduler(&game, sender.clone(), 100, Duration::from_millis(10));

        scheduler.start().await;
        tokio::time::sleep(Duration::from_millis(80)).await;
        scheduler.stop().await;

        let sent_at_stop = sender.sent().len();
        assert!(sent_at_stop > 0);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(sender.sent().len(), sent_at_stop);
    }
}
