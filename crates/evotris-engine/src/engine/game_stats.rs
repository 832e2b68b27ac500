/// Running statistics of a single game.
#[derive(Debug, Clone, Default)]
pub struct GameStats {
    pieces_placed: usize,
    total_cleared_lines: usize,
    line_cleared_counter: [usize; 5],
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pieces_placed: 0,
            total_cleared_lines: 0,
            line_cleared_counter: [0; 5],
        }
    }

    /// Returns the number of pieces placed so far.
    #[must_use]
    pub const fn pieces_placed(&self) -> usize {
        self.pieces_placed
    }

    /// Returns the total number of cleared lines.
    #[must_use]
    pub const fn total_cleared_lines(&self) -> usize {
        self.total_cleared_lines
    }

    /// Returns how many drops cleared 0, 1, 2, 3, and 4 lines.
    #[must_use]
    pub const fn line_cleared_counter(&self) -> &[usize; 5] {
        &self.line_cleared_counter
    }

    /// Returns the game score: one point per placed piece plus one point
    /// per cleared line.
    #[must_use]
    pub const fn score(&self) -> usize {
        self.pieces_placed + self.total_cleared_lines
    }

    /// Records a completed drop and the lines it cleared.
    pub const fn record_drop(&mut self, cleared_lines: usize) {
        self.pieces_placed += 1;
        self.total_cleared_lines += cleared_lines;
        if cleared_lines < self.line_cleared_counter.len() {
            self.line_cleared_counter[cleared_lines] += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_drop_accumulates() {
        let mut stats = GameStats::new();
        stats.record_drop(0);
        stats.record_drop(2);
        stats.record_drop(0);
        stats.record_drop(4);

        assert_eq!(stats.pieces_placed(), 4);
        assert_eq!(stats.total_cleared_lines(), 6);
        assert_eq!(stats.line_cleared_counter(), &[2, 0, 1, 0, 1]);
    }

    #[test]
    fn test_score_counts_pieces_and_lines() {
        let mut stats = GameStats::new();
        assert_eq!(stats.score(), 0);
        stats.record_drop(1);
        stats.record_drop(0);
        assert_eq!(stats.score(), 3);
    }
}
