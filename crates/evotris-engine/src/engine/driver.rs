use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Field, GameStats, ParseGameSeedError, Tetromino};

/// Seed for a deterministic game.
///
/// This is a 128-bit (16-byte) seed used to initialize the random number
/// generator that draws the tetromino sequence. Using the same seed produces
/// the same sequence of draws, enabling:
///
/// - Reproducible training runs
/// - Fair fitness comparisons on a shared tetromino sequence
/// - Deterministic testing
///
/// Seeds serialize as 32-character hex strings and parse back from the same
/// format.
///
/// # Example
///
/// ```
/// use evotris_engine::{GameDriver, GameSeed};
/// use rand::Rng as _;
///
/// // Generate a random seed
/// let seed: GameSeed = rand::rng().random();
///
/// // Two drivers with the same seed draw the same tetromino sequence
/// let driver1 = GameDriver::with_seed(seed);
/// let driver2 = GameDriver::with_seed(seed);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GameSeed([u8; 16]);

impl GameSeed {
    /// Returns a random number generator initialized with this seed.
    #[must_use]
    pub fn rng(self) -> Pcg32 {
        Pcg32::from_seed(self.0)
    }
}

impl fmt::Display for GameSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num = u128::from_be_bytes(self.0);
        write!(f, "{num:032x}")
    }
}

impl FromStr for GameSeed {
    type Err = ParseGameSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseGameSeedError);
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParseGameSeedError)?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for GameSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GameSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(|err| {
            serde::de::Error::custom(format!("{err}: {hex_str:?}"))
        })
    }
}

/// Allows generating random `GameSeed` values using the standard random distribution.
///
/// This implementation enables idiomatic seed generation with `rng.random()`.
impl Distribution<GameSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> GameSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        GameSeed(seed)
    }
}

/// A placement policy consulted once per turn.
///
/// The strategy sees the current board, the freshly drawn tetromino, and the
/// held tetromino if one exists, and answers with a [`TurnDecision`]. It must
/// not mutate the board; the driver applies the decision itself.
pub trait PlacementStrategy {
    /// Decides the move for one turn.
    fn plan_turn(&self, field: &Field, drawn: Tetromino, held: Option<Tetromino>) -> TurnDecision;
}

/// The move a [`PlacementStrategy`] chose for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TurnDecision {
    /// Drop the drawn tetromino, in the given orientation, at the given
    /// column.
    PlaceDrawn { tetromino: Tetromino, column: usize },
    /// Store the drawn tetromino in the hold slot and drop the previously
    /// held one, in the given orientation, at the given column.
    PlaceHeld { tetromino: Tetromino, column: usize },
    /// No placement fits anywhere; the game is over.
    NoValidMove,
}

/// Drives whole games of the placement loop.
///
/// Each turn the driver draws a uniformly random tetromino, asks a
/// [`PlacementStrategy`] for a decision, and applies it to the board while
/// [`GameStats`] accumulates the results. The hold slot stores one tetromino;
/// it starts empty and is only ever filled by a strategy trading the drawn
/// tetromino for the held one.
#[derive(Debug, Clone)]
pub struct GameDriver {
    field: Field,
    held: Option<Tetromino>,
    rng: Pcg32,
    stats: GameStats,
}

impl Default for GameDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDriver {
    /// Creates a driver with an empty board, an empty hold slot, and a random
    /// seed.
    ///
    /// For a deterministic tetromino sequence, use [`Self::with_seed`]
    /// instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for a deterministic
    /// tetromino sequence.
    #[must_use]
    pub fn with_seed(seed: GameSeed) -> Self {
        Self::from_parts(Field::new(), None, seed)
    }

    /// Creates a driver over a prepared board and hold slot.
    #[must_use]
    pub fn from_parts(field: Field, held: Option<Tetromino>, seed: GameSeed) -> Self {
        Self {
            field,
            held,
            rng: seed.rng(),
            stats: GameStats::new(),
        }
    }

    /// Returns the current board.
    #[must_use]
    pub const fn field(&self) -> &Field {
        &self.field
    }

    /// Returns the held tetromino, if any.
    #[must_use]
    pub const fn held(&self) -> Option<Tetromino> {
        self.held
    }

    /// Returns the statistics accumulated so far.
    #[must_use]
    pub const fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Plays a single turn: draws a tetromino, consults the strategy, and
    /// applies its decision.
    ///
    /// A drop the board rejects still consumes the turn and is recorded as a
    /// placement that cleared nothing.
    ///
    /// # Returns
    ///
    /// `false` when the strategy reports no valid move, ending the game;
    /// `true` otherwise.
    ///
    /// # Panics
    ///
    /// Panics if the strategy asks to place a held tetromino while the hold
    /// slot is empty or holds a tetromino of a different type.
    pub fn play_turn<S: PlacementStrategy + ?Sized>(&mut self, strategy: &S) -> bool {
        let drawn = Tetromino::new(self.rng.random());
        let (tetromino, column) = match strategy.plan_turn(&self.field, drawn, self.held) {
            TurnDecision::PlaceDrawn { tetromino, column } => (tetromino, column),
            TurnDecision::PlaceHeld { tetromino, column } => {
                let swapped = self.held.replace(drawn);
                assert!(
                    swapped.is_some_and(|held| held.kind() == tetromino.kind()),
                    "hold decision does not match the held tetromino"
                );
                (tetromino, column)
            }
            TurnDecision::NoValidMove => return false,
        };
        let cleared = self.field.drop_piece(tetromino, column).unwrap_or_default();
        self.stats.record_drop(cleared);
        true
    }

    /// Plays turns until the strategy runs out of moves or `turn_limit`
    /// pieces have been placed, and returns the final statistics.
    pub fn play<S: PlacementStrategy + ?Sized>(
        &mut self,
        strategy: &S,
        turn_limit: usize,
    ) -> &GameStats {
        while self.stats.pieces_placed() < turn_limit && self.play_turn(strategy) {}
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::VecDeque};

    use super::*;
    use crate::TetrominoKind;

    fn seed_from_bytes(bytes: [u8; 16]) -> GameSeed {
        GameSeed(bytes)
    }

    /// Answers with pre-scripted decisions and gives up once they run out.
    struct ScriptedStrategy {
        decisions: RefCell<VecDeque<TurnDecision>>,
    }

    impl ScriptedStrategy {
        fn new(decisions: impl IntoIterator<Item = TurnDecision>) -> Self {
            Self {
                decisions: RefCell::new(decisions.into_iter().collect()),
            }
        }
    }

    impl PlacementStrategy for ScriptedStrategy {
        fn plan_turn(
            &self,
            _field: &Field,
            _drawn: Tetromino,
            _held: Option<Tetromino>,
        ) -> TurnDecision {
            self.decisions
                .borrow_mut()
                .pop_front()
                .unwrap_or(TurnDecision::NoValidMove)
        }
    }

    /// Always drops the drawn tetromino as-is at column 0.
    struct FirstColumn;

    impl PlacementStrategy for FirstColumn {
        fn plan_turn(
            &self,
            _field: &Field,
            drawn: Tetromino,
            _held: Option<Tetromino>,
        ) -> TurnDecision {
            TurnDecision::PlaceDrawn {
                tetromino: drawn,
                column: 0,
            }
        }
    }

    mod game_seed_serialization {
        use super::*;

        #[test]
        fn test_roundtrip_random_seed() {
            let seed: GameSeed = rand::rng().random();
            let serialized = serde_json::to_string(&seed).unwrap();
            let deserialized: GameSeed = serde_json::from_str(&serialized).unwrap();
            assert_eq!(seed.0, deserialized.0);
        }

        #[test]
        fn test_format_is_32_char_hex_string() {
            let seed: GameSeed = rand::rng().random();
            let serialized = serde_json::to_string(&seed).unwrap();

            let hex_str = serialized.trim_matches('"');
            assert_eq!(hex_str.len(), 32);
            assert!(hex_str.chars().all(|c| c.is_ascii_hexdigit()));
        }

        #[test]
        fn test_known_value_all_zeros() {
            let seed = seed_from_bytes([0u8; 16]);
            let serialized = serde_json::to_string(&seed).unwrap();

            assert_eq!(serialized, "\"00000000000000000000000000000000\"");

            let deserialized: GameSeed = serde_json::from_str(&serialized).unwrap();
            assert_eq!(deserialized.0, [0u8; 16]);
        }

        #[test]
        fn test_known_value_sequential_bytes() {
            // Big-endian ordering: the first byte appears first in the hex
            // string.
            let seed = seed_from_bytes([
                0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54,
                0x32, 0x10,
            ]);
            let serialized = serde_json::to_string(&seed).unwrap();

            assert_eq!(serialized, "\"0123456789abcdeffedcba9876543210\"");

            let deserialized: GameSeed = serde_json::from_str(&serialized).unwrap();
            assert_eq!(deserialized.0, seed.0);
        }

        #[test]
        fn test_display_matches_serialized_form() {
            let seed = seed_from_bytes([
                0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54,
                0x32, 0x10,
            ]);
            assert_eq!(seed.to_string(), "0123456789abcdeffedcba9876543210");

            let parsed: GameSeed = seed.to_string().parse().unwrap();
            assert_eq!(parsed.0, seed.0);
        }

        #[test]
        fn test_deserialize_uppercase_hex() {
            let json = "\"0123456789ABCDEFFEDCBA9876543210\"";
            let deserialized: GameSeed = serde_json::from_str(json).unwrap();

            assert_eq!(
                deserialized.0,
                [
                    0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76,
                    0x54, 0x32, 0x10
                ]
            );
        }

        #[test]
        fn test_error_invalid_hex_characters() {
            let json = "\"ghijklmnopqrstuvwxyzghijklmnopqr\""; // 32 chars but not hex
            let result: Result<GameSeed, _> = serde_json::from_str(json);

            assert!(result.is_err());
            let err_msg = result.unwrap_err().to_string();
            assert!(err_msg.contains("invalid seed"));
        }

        #[test]
        fn test_error_wrong_length() {
            for json in [
                "\"0123456789abcdef0123456789abcde\"",   // 31 chars
                "\"0123456789abcdef0123456789abcdef0\"", // 33 chars
                "\"\"",
            ] {
                let result: Result<GameSeed, _> = serde_json::from_str(json);

                assert!(result.is_err());
                let err_msg = result.unwrap_err().to_string();
                assert!(err_msg.contains("invalid seed"));
            }
        }

        #[test]
        fn test_deterministic_draw_sequence() {
            let seed = seed_from_bytes([
                0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66,
                0x77, 0x88,
            ]);

            let mut rng1 = seed.rng();
            let mut rng2 = seed.rng();

            for _ in 0..20 {
                let kind1: TetrominoKind = rng1.random();
                let kind2: TetrominoKind = rng2.random();
                assert_eq!(kind1, kind2);
            }
        }
    }

    #[test]
    fn test_place_drawn_lands_on_the_floor() {
        let mut driver = GameDriver::with_seed(seed_from_bytes([1; 16]));
        let strategy = ScriptedStrategy::new([TurnDecision::PlaceDrawn {
            tetromino: Tetromino::new(TetrominoKind::I),
            column: 0,
        }]);

        assert!(driver.play_turn(&strategy));
        assert_eq!(driver.stats().pieces_placed(), 1);
        assert_eq!(
            driver.field().column_heights(),
            [1, 1, 1, 1, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_no_valid_move_ends_the_game() {
        let mut driver = GameDriver::with_seed(seed_from_bytes([2; 16]));
        let strategy = ScriptedStrategy::new([]);

        assert!(!driver.play_turn(&strategy));
        assert_eq!(driver.stats().pieces_placed(), 0);
        assert_eq!(driver.field(), &Field::new());
    }

    #[test]
    fn test_place_held_swaps_in_the_drawn_tetromino() {
        let seed = seed_from_bytes([3; 16]);
        let held = Tetromino::new(TetrominoKind::J);
        let mut driver = GameDriver::from_parts(Field::new(), Some(held), seed);
        let strategy = ScriptedStrategy::new([TurnDecision::PlaceHeld {
            tetromino: held,
            column: 0,
        }]);

        assert!(driver.play_turn(&strategy));
        assert_eq!(driver.stats().pieces_placed(), 1);

        // The first draw of this seed went into the hold slot.
        let drawn_kind: TetrominoKind = seed.rng().random();
        assert_eq!(driver.held().map(|held| held.kind()), Some(drawn_kind));
    }

    #[test]
    #[should_panic(expected = "hold decision")]
    fn test_place_held_requires_a_held_tetromino() {
        let mut driver = GameDriver::with_seed(seed_from_bytes([4; 16]));
        let strategy = ScriptedStrategy::new([TurnDecision::PlaceHeld {
            tetromino: Tetromino::new(TetrominoKind::T),
            column: 0,
        }]);

        driver.play_turn(&strategy);
    }

    #[test]
    fn test_rejected_drop_still_consumes_the_turn() {
        let mut driver = GameDriver::with_seed(seed_from_bytes([5; 16]));
        // A horizontal I cannot start at column 7.
        let strategy = ScriptedStrategy::new([TurnDecision::PlaceDrawn {
            tetromino: Tetromino::new(TetrominoKind::I),
            column: 7,
        }]);

        assert!(driver.play_turn(&strategy));
        assert_eq!(driver.stats().pieces_placed(), 1);
        assert_eq!(driver.stats().total_cleared_lines(), 0);
        assert_eq!(driver.field(), &Field::new());
    }

    #[test]
    fn test_play_stops_at_the_turn_limit() {
        let mut driver = GameDriver::with_seed(seed_from_bytes([6; 16]));
        let stats = driver.play(&FirstColumn, 5);
        assert_eq!(stats.pieces_placed(), 5);
    }

    #[test]
    fn test_play_stops_when_the_script_runs_out() {
        let mut driver = GameDriver::with_seed(seed_from_bytes([7; 16]));
        let o = Tetromino::new(TetrominoKind::O);
        let strategy = ScriptedStrategy::new([
            TurnDecision::PlaceDrawn {
                tetromino: o,
                column: 0,
            },
            TurnDecision::PlaceDrawn {
                tetromino: o,
                column: 2,
            },
        ]);

        let stats = driver.play(&strategy, 100);
        assert_eq!(stats.pieces_placed(), 2);
    }

    #[test]
    fn test_same_seed_reproduces_the_game() {
        let seed = seed_from_bytes([8; 16]);
        let mut driver1 = GameDriver::with_seed(seed);
        let mut driver2 = GameDriver::with_seed(seed);

        driver1.play(&FirstColumn, 30);
        driver2.play(&FirstColumn, 30);

        assert_eq!(driver1.field(), driver2.field());
        assert_eq!(
            driver1.stats().total_cleared_lines(),
            driver2.stats().total_cleared_lines()
        );
    }
}
