//! Register player use case.

use std::sync::Arc;

use vidaloka_domain::{Player, PlayerId};

use crate::error::GameError;
use crate::infrastructure::ports::ClockPort;
use crate::infrastructure::settings::GameRules;
use crate::stores::GameStore;

/// Creates a player with the configured starting counters.
pub struct RegisterPlayer {
    store: Arc<GameStore>,
    clock: Arc<dyn ClockPort>,
    rules: GameRules,
}

impl RegisterPlayer {
    pub fn new(store: Arc<GameStore>, clock: Arc<dyn ClockPort>, rules: GameRules) -> Self {
        Self {
            store,
            clock,
            rules,
        }
    }

    /// Register `player_id`. A second registration of the same id fails with
    /// `AlreadyRegistered` and leaves the first record untouched.
    pub async fn execute(&self, player_id: PlayerId, name: &str) -> Result<Player, GameError> {
        let player = Player::new(player_id, name.trim(), self.clock.now()).with_counters(
            self.rules.starting_experience,
            self.rules.starting_currency,
            self.rules.starting_influence,
        );
        let player = self.store.insert_player(player).await?;
        tracing::info!(player_id = %player.id(), name = %player.name(), "Player registered");
        Ok(player)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::test_fixtures::TestGame;
    use vidaloka_domain::{PlayerId, PlayerStatus};

    #[tokio::test]
    async fn registers_with_starting_counters() {
        let game = TestGame::new([]);

        let player = game
            .use_cases
            .player
            .register
            .execute(PlayerId::new("5521900000001"), " Ana ")
            .await
            .unwrap();

        assert_eq!(player.name(), "Ana");
        assert_eq!(player.currency(), game.rules.starting_currency);
        assert_eq!(player.status(), PlayerStatus::Active);
        assert!(player.character_id().is_none());
        assert_eq!(game.persistence.save_count(), 1);
    }

    #[tokio::test]
    async fn duplicate_registration_keeps_first_record() {
        let game = TestGame::new([]);
        let register = &game.use_cases.player.register;
        let id = PlayerId::new("5521900000001");

        register.execute(id.clone(), "Ana").await.unwrap();
        let err = register.execute(id.clone(), "Impostor").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert_eq!(game.player("5521900000001").await.name(), "Ana");
        assert_eq!(game.persistence.save_count(), 1);
    }
}
