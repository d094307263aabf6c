//! Aggregated results of a sample of matches.

use serde::{Deserialize, Serialize};

use crate::core::{Token, TokenMap};

use super::playout::{MatchRecord, Outcome};

/// Win/draw tallies and game lengths over many matches.
///
/// `merge` is associative and commutative, so partial results from worker
/// threads can be combined in any order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleStats {
    /// Matches recorded.
    pub games: u64,

    /// Wins per token.
    pub wins: TokenMap<u64>,

    /// Matches that filled the cube without a winner.
    pub draws: u64,

    /// Tokens placed over all matches.
    pub total_moves: u64,

    /// Shortest match, in tokens placed.
    pub shortest: Option<u64>,

    /// Longest match, in tokens placed.
    pub longest: Option<u64>,
}

impl SampleStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stats of a single match.
    #[must_use]
    pub fn from_record(record: &MatchRecord) -> Self {
        let mut stats = Self::new();
        stats.record(record);
        stats
    }

    /// Add one finished match.
    pub fn record(&mut self, record: &MatchRecord) {
        let length = record.length() as u64;
        self.games += 1;
        match record.outcome {
            Outcome::Win(token) => self.wins[token] += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.total_moves += length;
        self.shortest = Some(self.shortest.map_or(length, |s| s.min(length)));
        self.longest = Some(self.longest.map_or(length, |l| l.max(length)));
    }

    /// Combine two partial results.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.games += other.games;
        for (token, &wins) in other.wins.iter() {
            self.wins[token] += wins;
        }
        self.draws += other.draws;
        self.total_moves += other.total_moves;
        self.shortest = match (self.shortest, other.shortest) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.longest = match (self.longest, other.longest) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        self
    }

    /// Average match length in tokens placed.
    #[must_use]
    pub fn mean_length(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.games as f64
        }
    }

    /// Fraction of matches won by `token`.
    #[must_use]
    pub fn win_rate(&self, token: Token) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins[token] as f64 / self.games as f64
        }
    }
}

impl std::fmt::Display for SampleStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: {} white wins, {} black wins, {} draws; mean length {:.1}",
            self.games,
            self.wins[Token::White],
            self.wins[Token::Black],
            self.draws,
            self.mean_length()
        )
    }
}

#[cfg(test)]
mod tests {
    use smallvec::SmallVec;

    use crate::geometry::Column;

    use super::*;

    fn record(outcome: Outcome, length: usize) -> MatchRecord {
        MatchRecord {
            outcome,
            moves: vec![Column::ORIGIN; length],
            winning_lines: SmallVec::new(),
        }
    }

    #[test]
    fn test_stats_default() {
        let stats = SampleStats::new();
        assert_eq!(stats.games, 0);
        assert_eq!(stats.mean_length(), 0.0);
        assert_eq!(stats.win_rate(Token::White), 0.0);
        assert_eq!(stats.shortest, None);
    }

    #[test]
    fn test_record() {
        let mut stats = SampleStats::new();
        stats.record(&record(Outcome::Win(Token::White), 7));
        stats.record(&record(Outcome::Win(Token::Black), 20));
        stats.record(&record(Outcome::Draw, 64));
        stats.record(&record(Outcome::Win(Token::White), 9));

        assert_eq!(stats.games, 4);
        assert_eq!(stats.wins[Token::White], 2);
        assert_eq!(stats.wins[Token::Black], 1);
        assert_eq!(stats.draws, 1);
        assert_eq!(stats.total_moves, 100);
        assert_eq!(stats.shortest, Some(7));
        assert_eq!(stats.longest, Some(64));
        assert_eq!(stats.mean_length(), 25.0);
        assert_eq!(stats.win_rate(Token::White), 0.5);
    }

    #[test]
    fn test_merge_matches_sequential_record() {
        let records = [
            record(Outcome::Win(Token::Black), 12),
            record(Outcome::Draw, 64),
            record(Outcome::Win(Token::White), 31),
        ];

        let mut sequential = SampleStats::new();
        for r in &records {
            sequential.record(r);
        }

        let merged = records
            .iter()
            .rev()
            .map(SampleStats::from_record)
            .fold(SampleStats::new(), SampleStats::merge);

        assert_eq!(sequential, merged);
    }

    #[test]
    fn test_merge_with_empty() {
        let stats = SampleStats::from_record(&record(Outcome::Draw, 64));
        assert_eq!(stats.clone().merge(SampleStats::new()), stats);
        assert_eq!(SampleStats::new().merge(stats.clone()), stats);
    }

    #[test]
    fn test_display() {
        let stats = SampleStats::from_record(&record(Outcome::Win(Token::White), 7));
        assert_eq!(stats.to_string(), "1 games: 1 white wins, 0 black wins, 0 draws; mean length 7.0");
    }

    #[test]
    fn test_stats_serialization() {
        let stats = SampleStats::from_record(&record(Outcome::Win(Token::Black), 10));
        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SampleStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, deserialized);
    }
}
