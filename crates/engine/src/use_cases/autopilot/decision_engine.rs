//! Decision engine.
//!
//! Picks what an unattended character would plausibly do. Action choice leans
//! on the character's favorites; option choice is a noisy greedy score.

use vidaloka_domain::{Action, Character, Event, EventOption};

use crate::infrastructure::dice::Dice;

/// Chance of choosing among favorites when any are on offer.
pub const FAVORITE_PICK_PERCENT: i32 = 60;

/// Noise added to each option score, `1..=OPTION_NOISE_SIDES`.
const OPTION_NOISE_SIDES: i32 = 10;

#[derive(Clone)]
pub struct DecisionEngine {
    dice: Dice,
}

impl DecisionEngine {
    pub fn new(dice: Dice) -> Self {
        Self { dice }
    }

    /// Choose one of `available`, or `None` when nothing is on offer.
    ///
    /// No roll is spent on the favorites check when none of the favorites
    /// are available.
    pub fn choose_action<'a>(
        &self,
        character: &Character,
        available: &[&'a Action],
    ) -> Option<&'a Action> {
        let favorites: Vec<&'a Action> = available
            .iter()
            .copied()
            .filter(|action| character.is_favorite(&action.id))
            .collect();

        let pool: &[&'a Action] =
            if !favorites.is_empty() && self.dice.percent(FAVORITE_PICK_PERCENT) {
                &favorites
            } else {
                available
            };
        self.dice.pick_index(pool.len()).map(|i| pool[i])
    }

    /// Choose the option with the strictly highest
    /// `2 * attribute - difficulty + d10`; the earliest option wins ties.
    pub fn choose_option<'a>(
        &self,
        character: &Character,
        event: &'a Event,
    ) -> Option<&'a EventOption> {
        let mut best: Option<(i32, &'a EventOption)> = None;
        for option in &event.options {
            let score = self.score(character, option);
            tracing::trace!(
                event_id = %event.id,
                option_id = %option.id,
                score,
                "Scored option"
            );
            match best {
                Some((top, _)) if score <= top => {}
                _ => best = Some((score, option)),
            }
        }
        best.map(|(_, option)| option)
    }

    fn score(&self, character: &Character, option: &EventOption) -> i32 {
        let attribute = character.attribute(option.required_attribute);
        2 * attribute - option.difficulty_level + self.dice.roll(OPTION_NOISE_SIDES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::test_fixtures::{sample_catalog, ScriptedRandom};
    use vidaloka_domain::{ActionId, Catalog, CharacterId, EventId, OptionId, SubZoneId, ZoneId};

    fn engine_with(rolls: impl IntoIterator<Item = i32>) -> (DecisionEngine, Arc<ScriptedRandom>) {
        let random = Arc::new(ScriptedRandom::new(rolls));
        (DecisionEngine::new(Dice::new(random.clone())), random)
    }

    fn offered<'a>(catalog: &'a Catalog, zone: &str, sub_zone: &str) -> Vec<&'a Action> {
        let sub_zone = catalog
            .sub_zone(&ZoneId::new(zone), &SubZoneId::new(sub_zone))
            .unwrap();
        catalog.actions_at(sub_zone).collect()
    }

    fn character<'a>(catalog: &'a Catalog, id: &str) -> &'a Character {
        catalog.character(&CharacterId::new(id)).unwrap()
    }

    #[test]
    fn favorites_pool_within_chance() {
        let catalog = sample_catalog();
        let available = offered(&catalog, "centro", "lapa");
        let (engine, _) = engine_with([60, 2]);

        let action = engine
            .choose_action(character(&catalog, "hacker"), &available)
            .unwrap();

        assert_eq!(action.id, ActionId::new("hackear"));
    }

    #[test]
    fn full_pool_above_chance() {
        let catalog = sample_catalog();
        let available = offered(&catalog, "centro", "lapa");
        let (engine, _) = engine_with([61, 3]);

        let action = engine
            .choose_action(character(&catalog, "hacker"), &available)
            .unwrap();

        assert_eq!(action.id, ActionId::new("tocar"));
    }

    #[test]
    fn single_favorite_needs_no_pick_roll() {
        let catalog = sample_catalog();
        let available = offered(&catalog, "zona_sul", "copacabana");
        let (engine, random) = engine_with([10]);

        let action = engine
            .choose_action(character(&catalog, "artista"), &available)
            .unwrap();

        assert_eq!(action.id, ActionId::new("tocar"));
        assert_eq!(random.remaining(), 0);
    }

    #[test]
    fn no_favorite_on_offer_skips_chance_roll() {
        let catalog = sample_catalog();
        let available = offered(&catalog, "centro", "lapa");
        let (engine, random) = engine_with([2]);

        let action = engine
            .choose_action(character(&catalog, "surfista"), &available)
            .unwrap();

        assert_eq!(action.id, ActionId::new("hackear"));
        assert_eq!(random.remaining(), 0);
    }

    #[test]
    fn nothing_on_offer() {
        let catalog = sample_catalog();
        let (engine, _) = engine_with([]);

        assert!(engine
            .choose_action(character(&catalog, "hacker"), &[])
            .is_none());
    }

    #[test]
    fn highest_score_wins() {
        let catalog = sample_catalog();
        let blitz = catalog.event(&EventId::new("blitz")).unwrap();
        let hacker = character(&catalog, "hacker");

        // run: 2*3 - 14 + 10 = 2, talk: 2*2 - 10 + 1 = -5
        let (engine, _) = engine_with([10, 1]);
        assert_eq!(
            engine.choose_option(hacker, blitz).unwrap().id,
            OptionId::new("run")
        );

        // run: -7, talk: -5
        let (engine, _) = engine_with([1, 1]);
        assert_eq!(
            engine.choose_option(hacker, blitz).unwrap().id,
            OptionId::new("talk")
        );
    }

    #[test]
    fn ties_go_to_first_option() {
        let catalog = sample_catalog();
        let blitz = catalog.event(&EventId::new("blitz")).unwrap();

        // run: -8 + 3, talk: -6 + 1
        let (engine, _) = engine_with([3, 1]);
        let option = engine
            .choose_option(character(&catalog, "hacker"), blitz)
            .unwrap();

        assert_eq!(option.id, OptionId::new("run"));
    }
}
