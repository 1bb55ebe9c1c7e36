//! The board engine.
//!
//! `BoardEngine` is the single owner of a game session: the validated
//! configuration, the RNG and the current `GameState`. Views read the
//! state after every call; clicks and restarts come back in through
//! `toggle_around` and `restart`.
//!
//! ## Modes
//!
//! - In progress: `toggle_around` flips lights, `has_won` is recomputed
//! - Won: toggles are refused with `AlreadyWon`, `restart` starts over

use log::{debug, info};

use crate::core::{BoardConfig, Coord, Flipped, GameRng, GameState, Grid, Phase};
use crate::error::{LightsOutError, Result};

/// What a successful toggle did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Cells flipped, pressed cell first.
    pub flipped: Flipped,
    /// Whether this toggle solved the board.
    pub won: bool,
}

/// Owns the state of one Lights Out session.
#[derive(Clone, Debug)]
pub struct BoardEngine {
    config: BoardConfig,
    rng: GameRng,
    state: GameState,
    games_played: u32,
}

impl BoardEngine {
    /// Start a session with an entropy-seeded RNG.
    pub fn new(config: BoardConfig) -> Result<Self> {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Start a reproducible session.
    pub fn with_seed(config: BoardConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, GameRng::new(seed))
    }

    fn with_rng(config: BoardConfig, mut rng: GameRng) -> Result<Self> {
        config.validate()?;
        let state = Self::initialize(&config, &mut rng);
        info!(
            "new {}x{} board (seed {}, chance {}), {} lit",
            config.n_rows,
            config.n_cols,
            rng.seed(),
            config.chance_light_starts_on,
            state.grid().lit_count()
        );
        Ok(Self {
            config,
            rng,
            state,
            games_played: 1,
        })
    }

    /// Draw a fresh board for `config`.
    ///
    /// Each cell is lit independently with `config.chance_light_starts_on`.
    /// With a chance of 0 the board starts (and is) won.
    pub fn initialize(config: &BoardConfig, rng: &mut GameRng) -> GameState {
        GameState::new(Grid::random(
            config.n_rows,
            config.n_cols,
            config.chance_light_starts_on,
            rng,
        ))
    }

    /// Flip the light at `coord` and its orthogonal neighbors.
    ///
    /// Fails with `AlreadyWon` once the board is solved and with
    /// `OutOfBounds` when `coord` is not on the board; neither touches
    /// the state.
    pub fn toggle_around(&mut self, coord: Coord) -> Result<ToggleOutcome> {
        if self.state.has_won() {
            return Err(LightsOutError::AlreadyWon);
        }

        let flipped = self.state.toggle_around(coord)?;
        let won = self.state.has_won();
        debug!(
            "toggled around {coord}: {} cells flipped, {} lit",
            flipped.len(),
            self.state.grid().lit_count()
        );
        if won {
            info!("board solved in game {}", self.games_played);
        }

        Ok(ToggleOutcome { flipped, won })
    }

    /// Throw the current board away and draw a new one.
    ///
    /// The RNG stream continues, so the new board is independent of the
    /// old one.
    pub fn restart(&mut self) -> &GameState {
        self.state = Self::initialize(&self.config, &mut self.rng);
        self.games_played += 1;
        info!(
            "restarted, game {} with {} lit",
            self.games_played,
            self.state.grid().lit_count()
        );
        &self.state
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Seed of the session RNG, for replaying a game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Number of boards drawn so far, the first one included.
    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games_played
    }
}
