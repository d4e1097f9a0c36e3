//! Game and draw collection management.
//!
//! `MegaSena` owns the persisted collections and is the sole source of
//! truth; winners, groupings, and match annotations are recomputed from it
//! on every read. Collections are copy-on-write: every mutation publishes a
//! fresh `Arc` snapshot, so a reader (or an offloaded until-winner search)
//! holding the previous snapshot keeps seeing consistent state.

use std::sync::Arc;

use parking_lot::RwLock;
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::draw::generate_draw_numbers;
use crate::domain::matching::{find_winners, match_count, Winner};
use crate::domain::numbers::validate_numbers;
use crate::domain::sampler::{exclusion_set, sample_numbers};
use crate::domain::search::{search_until_winner, AbortFlag, SearchOptions};
use crate::domain::types::{DrawMode, DrawResult, Game, RandomMode, SearchStats};
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::store::{JsonFileStore, KvStore, GAMES_KEY, LAST_DRAW_KEY};

/// Games of one player, in registration order.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerGroup {
    pub player_name: String,
    pub games: Vec<Game>,
}

/// The collection manager.
pub struct MegaSena {
    store: Arc<dyn KvStore>,
    games: RwLock<Arc<Vec<Game>>>,
    last_draw: RwLock<Option<Arc<DrawResult>>>,
}

impl MegaSena {
    /// Load state from the store.
    ///
    /// A missing key means a fresh install; an unreadable or corrupt
    /// document falls back to the same defaults and is logged, never
    /// propagated.
    pub fn load(store: Arc<dyn KvStore>) -> Self {
        let games: Vec<Game> = read_or_default(store.as_ref(), GAMES_KEY);
        let last_draw: Option<DrawResult> = read_or_default(store.as_ref(), LAST_DRAW_KEY);
        Self {
            store,
            games: RwLock::new(Arc::new(games)),
            last_draw: RwLock::new(last_draw.map(Arc::new)),
        }
    }

    /// Load state from a `JsonFileStore` rooted at the configured data
    /// directory (see `config::data_dir`).
    pub fn load_from_data_dir() -> Result<Self, DomainError> {
        let store = JsonFileStore::open(crate::config::data_dir())?;
        Ok(Self::load(Arc::new(store)))
    }

    /// Current game collection snapshot.
    pub fn games(&self) -> Arc<Vec<Game>> {
        Arc::clone(&self.games.read())
    }

    /// Most recent draw, if any.
    pub fn last_draw(&self) -> Option<Arc<DrawResult>> {
        self.last_draw.read().clone()
    }

    /// Register one game with explicit numbers.
    pub fn add_game(&self, player_name: &str, numbers: Vec<u8>) -> Result<Game, DomainError> {
        validate_numbers(&numbers)?;
        let game = Game::new(player_name, numbers);
        let mut next = self.games().as_ref().clone();
        next.push(game.clone());
        self.publish_games(next);
        info!(player = player_name, "game registered");
        Ok(game)
    }

    /// Generate `count` random games for one player.
    pub fn add_random_games(&self, player_name: &str, count: usize, mode: RandomMode) -> Vec<Game> {
        let mut rng = rand::rng();
        self.add_random_games_with(&mut rng, player_name, count, mode)
    }

    /// [`Self::add_random_games`] with an explicit RNG (seeded in tests).
    ///
    /// Batch-local avoidance: each generated game joins the "existing" set
    /// seen by the exclusion logic for later games in the same batch.
    pub fn add_random_games_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        player_name: &str,
        count: usize,
        mode: RandomMode,
    ) -> Vec<Game> {
        let mut next = self.games().as_ref().clone();
        let mut created = Vec::with_capacity(count);

        for _ in 0..count {
            let exclude = exclusion_set(mode, &next);
            let outcome = sample_numbers(rng, &exclude);
            if outcome.exclusion_relaxed {
                warn!(
                    player = player_name,
                    "exclusion constraint infeasible; game drawn from the full range"
                );
            }
            let game = Game::new(player_name, outcome.numbers);
            next.push(game.clone());
            created.push(game);
        }

        self.publish_games(next);
        info!(player = player_name, count, "random games registered");
        created
    }

    /// Remove one game; removing an unknown id is a no-op.
    pub fn remove_game(&self, id: Uuid) {
        let mut next = self.games().as_ref().clone();
        next.retain(|g| g.id != id);
        self.publish_games(next);
    }

    /// Drop the whole collection. Idempotent.
    pub fn clear_games(&self) {
        self.publish_games(Vec::new());
    }

    /// Run a draw under `mode`; the result replaces the previous last draw
    /// wholesale.
    pub fn perform_draw(&self, mode: DrawMode) -> DrawResult {
        let mut rng = rand::rng();
        self.perform_draw_with(&mut rng, mode, &AbortFlag::new(), |_| {})
    }

    /// [`Self::perform_draw`] with an explicit RNG, abort flag, and progress
    /// hook, for seeded tests and offloaded until-winner runs.
    pub fn perform_draw_with<R, F>(
        &self,
        rng: &mut R,
        mode: DrawMode,
        abort: &AbortFlag,
        progress: F,
    ) -> DrawResult
    where
        R: Rng + ?Sized,
        F: FnMut(u32),
    {
        let games = self.games();
        let draw = match mode {
            DrawMode::UntilWinner => {
                let outcome =
                    search_until_winner(rng, &games, &SearchOptions::default(), abort, progress);
                DrawResult::new(
                    outcome.numbers,
                    Some(SearchStats {
                        attempts: outcome.attempts,
                        time_ms: outcome.time_ms,
                        all_attempts: outcome.all_attempts,
                    }),
                )
            }
            DrawMode::Random | DrawMode::FromGames => {
                DrawResult::new(generate_draw_numbers(rng, mode, &games), None)
            }
        };
        self.publish_draw(draw.clone());
        draw
    }

    /// Store a manually entered draw after validation; numbers are sorted.
    pub fn set_manual_draw(&self, numbers: Vec<u8>) -> Result<DrawResult, DomainError> {
        validate_numbers(&numbers)?;
        let draw = DrawResult::new(numbers, None);
        self.publish_draw(draw.clone());
        Ok(draw)
    }

    /// Winners of the last draw; empty when no draw has been made.
    /// Recomputed on every call.
    pub fn winners(&self) -> Vec<Winner> {
        match self.last_draw() {
            Some(draw) => find_winners(&self.games(), &draw.numbers),
            None => Vec::new(),
        }
    }

    /// Games annotated with their match count against the last draw.
    pub fn games_with_matches(&self) -> Vec<Game> {
        let games = self.games();
        match self.last_draw() {
            Some(draw) => games
                .iter()
                .map(|g| Game {
                    matches: Some(match_count(&g.numbers, &draw.numbers)),
                    ..g.clone()
                })
                .collect(),
            None => games.as_ref().clone(),
        }
    }

    /// Games grouped by player, in first-appearance order, match-annotated
    /// when a last draw exists.
    pub fn games_by_player(&self) -> Vec<PlayerGroup> {
        let mut groups: Vec<PlayerGroup> = Vec::new();
        for game in self.games_with_matches() {
            match groups.iter_mut().find(|g| g.player_name == game.player_name) {
                Some(group) => group.games.push(game),
                None => groups.push(PlayerGroup {
                    player_name: game.player_name.clone(),
                    games: vec![game],
                }),
            }
        }
        groups
    }

    fn publish_games(&self, next: Vec<Game>) {
        let next = Arc::new(next);
        if let Err(e) = persist(self.store.as_ref(), GAMES_KEY, next.as_ref()) {
            error!(%e, "failed to persist games; in-memory state stays authoritative");
        }
        *self.games.write() = next;
    }

    fn publish_draw(&self, draw: DrawResult) {
        let draw = Arc::new(draw);
        if let Err(e) = persist(self.store.as_ref(), LAST_DRAW_KEY, draw.as_ref()) {
            error!(%e, "failed to persist last draw; in-memory state stays authoritative");
        }
        *self.last_draw.write() = Some(draw);
    }
}

fn read_or_default<T: DeserializeOwned + Default>(store: &dyn KvStore, key: &str) -> T {
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                error!(key, %e, "corrupt store document; starting from defaults");
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(e) => {
            error!(key, %e, "store read failed; starting from defaults");
            T::default()
        }
    }
}

fn persist<T: Serialize>(store: &dyn KvStore, key: &str, value: &T) -> Result<(), DomainError> {
    let raw = serde_json::to_string(value)
        .map_err(|e| DomainError::infra(InfraErrorKind::Serialization, e.to_string()))?;
    store.put(key, &raw)
}
