//! Runs a batch of independent matches over one shared catalog.

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::board::Board;
use crate::bots::Strategy;
use crate::core::{GameRng, Token};
use crate::error::MatchError;
use crate::geometry::Catalog;

use super::config::SampleConfig;
use super::playout::{play_match, MatchRecord};
use super::stats::SampleStats;

/// Plays `config.games` matches and aggregates the outcomes.
///
/// Every game gets its own board; boards only share the read-only catalog,
/// so games can run on any thread in any order.
pub struct Sampler {
    catalog: Arc<Catalog>,
    config: SampleConfig,
    white: Box<dyn Strategy>,
    black: Box<dyn Strategy>,
}

impl Sampler {
    pub fn new(catalog: Arc<Catalog>, config: SampleConfig) -> Self {
        let white = config.white.build();
        let black = config.black.build();
        Self {
            catalog,
            config,
            white,
            black,
        }
    }

    /// Play game number `index` on `board`.
    pub fn play_game(&self, board: &mut Board, index: u64) -> Result<MatchRecord, MatchError> {
        let mut rng = GameRng::new(self.config.seed).for_game(index);
        let record = play_match(board, self.white.as_ref(), self.black.as_ref(), &mut rng)?;
        debug!(game = index, outcome = ?record.outcome, moves = record.length(), "game finished");
        Ok(record)
    }

    /// Play every game and return the aggregate.
    ///
    /// Sequential and parallel runs of the same config give identical stats.
    pub fn run(&self) -> Result<SampleStats, MatchError> {
        let started = Instant::now();
        let games = self.config.games;

        let stats = if self.config.parallel {
            (0..games)
                .into_par_iter()
                .map_init(
                    || Board::new(Arc::clone(&self.catalog)),
                    |board, index| self.play_game(board, index).map(|r| SampleStats::from_record(&r)),
                )
                .try_reduce(SampleStats::new, |a, b| Ok(a.merge(b)))?
        } else {
            let mut board = Board::new(Arc::clone(&self.catalog));
            let mut stats = SampleStats::new();
            for index in 0..games {
                stats.record(&self.play_game(&mut board, index)?);
            }
            stats
        };

        info!(
            games = stats.games,
            white = self.white.name(),
            black = self.black.name(),
            white_wins = stats.wins[Token::White],
            black_wins = stats.wins[Token::Black],
            draws = stats.draws,
            mean_length = stats.mean_length(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "sample finished"
        );
        Ok(stats)
    }
}
