//! Test fixtures and hand-written fakes for the engine's ports.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{TestGame, sample_catalog};
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let game = TestGame::new([11]);
//!     game.add_player(assigned_player("ana", "hacker")).await;
//!     // ... test logic
//! }
//! ```

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;
use vidaloka_domain::{
    Action, Attribute, AttributeSet, Catalog, Character, CharacterId, Deltas, Event, EventKind,
    EventOption, Location, Outcome, Player, PlayerId, SubZone, Zone,
};

use crate::infrastructure::clock::FixedClock;
use crate::infrastructure::dice::Dice;
use crate::infrastructure::ports::{
    ClockPort, GameState, MessageSender, MessagingError, PersistenceError, RandomPort, StatePort,
};
use crate::infrastructure::settings::GameRules;
use crate::stores::GameStore;
use crate::use_cases::UseCases;

// =============================================================================
// Content
// =============================================================================

pub fn sample_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Small catalog covering every content feature.
///
/// - `hacker`: proficiency 4, resilience 3, favorites `trabalhar`/`hackear`, starts at centro/lapa
/// - `artista`: charisma 8, favorite `tocar`, no starting location
/// - `surfista`: starts at zona_sul/copacabana
/// - `centro/lapa` doubles rewards; `centro/delegacia` offers only `trabalhar`
/// - every event has a minimum, so a player with all-zero counters has none eligible
pub fn sample_catalog() -> Catalog {
    let characters = vec![
        Character::new("hacker", "Nerd Hacker", AttributeSet::new(2, 4, 6, 5, 3))
            .with_category("nerd_hacker")
            .with_favorite("trabalhar")
            .with_favorite("hackear")
            .with_starting_location("centro", "lapa"),
        Character::new("artista", "Artista", AttributeSet::new(8, 3, 5, 6, 4)).with_favorite("tocar"),
        Character::new("surfista", "Surfista", AttributeSet::new(5, 2, 4, 6, 9))
            .with_favorite("surfar")
            .with_starting_location("zona_sul", "copacabana"),
    ];

    let actions = vec![
        Action::new(
            "trabalhar",
            "Work",
            Attribute::Proficiency,
            Outcome::new("You put in a shift", Deltas::new(10, 50, 2, 5)),
        ),
        Action::new(
            "hackear",
            "Hack",
            Attribute::Proficiency,
            Outcome::new("You broke in", Deltas::new(15, 80, 1, 10)),
        ),
        Action::new(
            "tocar",
            "Play music",
            Attribute::Charisma,
            Outcome::new("The crowd cheered", Deltas::new(5, 30, 5, 0)),
        ),
        Action::new(
            "surfar",
            "Surf",
            Attribute::Resilience,
            Outcome::new("Good waves", Deltas::new(3, 0, 1, -10)),
        ),
    ];

    let zones = vec![
        Zone::new("centro", "Centro")
            .with_sub_zone(
                SubZone::new("lapa", "Lapa")
                    .with_reward_multiplier(100)
                    .with_action("trabalhar")
                    .with_action("hackear")
                    .with_action("tocar"),
            )
            .with_sub_zone(SubZone::new("delegacia", "Delegacia").with_action("trabalhar")),
        Zone::new("zona_sul", "Zona Sul").with_sub_zone(
            SubZone::new("copacabana", "Copacabana")
                .with_reward_multiplier(20)
                .with_action("surfar")
                .with_action("tocar"),
        ),
    ];

    let events = vec![
        Event::new("blitz", "Police blitz")
            .with_minimums(0, 50, 0)
            .with_required_zone("centro")
            .with_option(
                EventOption::new("run", "Run for it", Attribute::Resilience, 14).with_outcomes(
                    Outcome::new("You got away", Deltas::new(5, 0, 0, 0)),
                    Outcome::new("They caught you", Deltas::new(0, -20, 0, 10))
                        .with_location("centro", "delegacia"),
                ),
            )
            .with_option(
                EventOption::new("talk", "Talk your way out", Attribute::Charisma, 10).with_outcomes(
                    Outcome::new("They let you go", Deltas::new(2, 0, 1, 0)),
                    Outcome::new("You paid a fine", Deltas::new(0, -50, 0, 5)),
                ),
            ),
        Event::new("rich_party", "Party at the penthouse")
            .with_kind(EventKind::Mission)
            .with_minimums(0, 1000, 0)
            .with_option(
                EventOption::new("network", "Work the room", Attribute::Network, 12).with_outcomes(
                    Outcome::new("New contacts", Deltas::new(5, 0, 10, 0))
                        .with_next_event("rich_party_2"),
                    Outcome::new("Nobody noticed you", Deltas::new(0, 0, 0, 5)),
                ),
            )
            .with_option(
                EventOption::new("leave", "Leave early", Attribute::Morality, 5).with_outcomes(
                    Outcome::new("Early night", Deltas::default()),
                    Outcome::new("Missed the cab", Deltas::new(0, -10, 0, 0)),
                ),
            ),
        Event::new("beach_day", "Sunny day")
            .with_kind(EventKind::Random)
            .with_minimums(1, 0, 0)
            .with_required_zone("zona_sul")
            .with_option(EventOption::new("swim", "Swim", Attribute::Resilience, 8))
            .with_option(EventOption::new("sell", "Sell drinks", Attribute::Proficiency, 10))
            .with_option(EventOption::new("nap", "Nap", Attribute::Morality, 2)),
    ];

    match Catalog::from_parts(characters, actions, zones, events) {
        Ok(catalog) => catalog,
        Err(e) => panic!("sample catalog is invalid: {e}"),
    }
}

/// A registered player with 100 currency who already plays `character`,
/// placed at the character's start (centro/lapa when it has none).
pub fn assigned_player(id: &str, character: &str) -> Player {
    let catalog = sample_catalog();
    let start = catalog
        .character(&CharacterId::new(character))
        .and_then(|c| c.starting_location())
        .map(|(zone, sub_zone)| Location::new(zone.clone(), sub_zone.clone()))
        .unwrap_or_else(|| Location::new("centro", "lapa"));

    let mut player =
        Player::new(PlayerId::new(id), id.to_uppercase(), sample_time()).with_counters(0, 100, 0);
    if let Err(e) = player.assign_character(CharacterId::new(character), start, sample_time()) {
        panic!("fixture player could not be assigned: {e}");
    }
    player
}

// =============================================================================
// Fakes
// =============================================================================

/// In-memory `StatePort` with a switch to make saves fail.
#[derive(Default)]
pub struct InMemoryStatePort {
    saved: Mutex<Option<GameState>>,
    fail_saves: AtomicBool,
    saves: AtomicUsize,
}

impl InMemoryStatePort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn last_saved(&self) -> Option<GameState> {
        self.saved.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl StatePort for InMemoryStatePort {
    async fn save(&self, state: &GameState) -> Result<(), PersistenceError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(PersistenceError::io("write", "simulated failure"));
        }
        *self.saved.lock().unwrap_or_else(|e| e.into_inner()) = Some(state.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn load(&self) -> Result<Option<GameState>, PersistenceError> {
        Ok(self.last_saved())
    }
}

/// Replays a fixed sequence of rolls, then keeps returning `min`.
///
/// Scripted values are clamped into the requested range.
pub struct ScriptedRandom {
    rolls: Mutex<VecDeque<i32>>,
}

impl ScriptedRandom {
    pub fn new(rolls: impl IntoIterator<Item = i32>) -> Self {
        Self {
            rolls: Mutex::new(rolls.into_iter().collect()),
        }
    }

    pub fn push(&self, roll: i32) {
        self.rolls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(roll);
    }

    pub fn remaining(&self) -> usize {
        self.rolls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl RandomPort for ScriptedRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        let next = self
            .rolls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();
        next.map(|r| r.clamp(min, max)).unwrap_or(min)
    }

    fn gen_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// A message captured by `RecordingSender`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub from: String,
    pub to: String,
    pub text: String,
}

/// `MessageSender` that records every message; can be told to reject one
/// recipient.
#[derive(Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<SentMessage>>,
    reject: Mutex<Option<String>>,
}

impl RecordingSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject_recipient(&self, to: &str) {
        *self.reject.lock().unwrap_or_else(|e| e.into_inner()) = Some(to.to_string());
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl MessageSender for RecordingSender {
    async fn send(&self, from: &str, to: &str, text: &str) -> Result<String, MessagingError> {
        let rejected = self.reject.lock().unwrap_or_else(|e| e.into_inner()).clone();
        if rejected.as_deref() == Some(to) {
            return Err(MessagingError::SendFailed {
                to: to.to_string(),
                message: "rejected".to_string(),
            });
        }
        let mut sent = self.sent.lock().unwrap_or_else(|e| e.into_inner());
        sent.push(SentMessage {
            from: from.to_string(),
            to: to.to_string(),
            text: text.to_string(),
        });
        Ok(format!("msg-{}", sent.len()))
    }
}

// =============================================================================
// Assembled engine
// =============================================================================

/// Store plus use cases wired to fakes: fixed clock, scripted rolls,
/// in-memory persistence.
pub struct TestGame {
    pub store: Arc<GameStore>,
    pub use_cases: UseCases,
    pub persistence: Arc<InMemoryStatePort>,
    pub random: Arc<ScriptedRandom>,
    pub rules: GameRules,
}

impl TestGame {
    pub fn new(rolls: impl IntoIterator<Item = i32>) -> Self {
        Self::with_catalog(sample_catalog(), rolls)
    }

    pub fn with_catalog(catalog: Catalog, rolls: impl IntoIterator<Item = i32>) -> Self {
        let persistence = Arc::new(InMemoryStatePort::new());
        let random = Arc::new(ScriptedRandom::new(rolls));
        let clock: Arc<dyn ClockPort> = Arc::new(FixedClock(sample_time()));
        let rules = GameRules::default();
        let store = Arc::new(GameStore::new(GameState::new(catalog), persistence.clone()));
        let use_cases = UseCases::new(
            store.clone(),
            clock,
            Dice::new(random.clone()),
            rules.clone(),
        );
        Self {
            store,
            use_cases,
            persistence,
            random,
            rules,
        }
    }

    /// Insert a player directly, bypassing registration.
    pub async fn add_player(&self, player: Player) {
        if let Err(e) = self.store.insert_player(player).await {
            panic!("fixture player could not be inserted: {e}");
        }
    }

    pub async fn player(&self, id: &str) -> Player {
        match self.store.get_player(&PlayerId::new(id)).await {
            Ok(player) => player,
            Err(e) => panic!("fixture player missing: {e}"),
        }
    }
}
