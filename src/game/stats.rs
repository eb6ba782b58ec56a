//! Session statistics

use super::state::MAX_GUESSES;

/// Win/loss record for the current session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Wins indexed by number of guesses (index 0 unused)
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl Statistics {
    /// Record a finished game
    pub fn record_game(&mut self, won: bool, guesses: usize) {
        self.total_games += 1;

        if won {
            self.games_won += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
            if let Some(count) = self.guess_distribution.get_mut(guesses) {
                *count += 1;
            }
        } else {
            self.current_streak = 0;
        }
    }

    /// Percentage of games won (0-100)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats() {
        let stats = Statistics::default();
        assert_eq!(stats.total_games, 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn record_wins_and_losses() {
        let mut stats = Statistics::default();
        stats.record_game(true, 3);
        stats.record_game(true, 4);
        stats.record_game(false, 6);
        stats.record_game(true, 3);

        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.guess_distribution[3], 2);
        assert_eq!(stats.guess_distribution[4], 1);
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
    }
}
