use std::path::PathBuf;

use evotris_engine::{Field, GameDriver, GameSeed, GameStats};
use evotris_evaluator::strategy::HeuristicStrategy;
use evotris_stats::descriptive::DescriptiveStats;
use rand::Rng as _;

use crate::model::ai_model::AiModel;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Trained model file to play with
    model: PathBuf,
    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: usize,
    /// Turn cap per game
    #[arg(long, default_value_t = 1000)]
    turn_limit: usize,
    /// Master seed as 32 hex characters (random when omitted)
    #[arg(long)]
    seed: Option<GameSeed>,
    /// Print the final board of every game
    #[arg(long)]
    show_board: bool,
}

#[expect(clippy::cast_precision_loss)]
pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        model,
        games,
        turn_limit,
        seed,
        show_board,
    } = arg;
    anyhow::ensure!(*games > 0, "at least one game is required");

    let model = AiModel::open(model)?;
    let strategy = HeuristicStrategy::new(model.genes);
    let master_seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = master_seed.rng();

    println!("Model: {}", model.name);
    println!("Master seed: {master_seed}");

    let mut scores = Vec::with_capacity(*games);
    for game in 0..*games {
        let mut driver = GameDriver::with_seed(rng.random());
        driver.play(&strategy, *turn_limit);

        let stats = driver.stats();
        print_game(game, stats);
        if *show_board {
            print!("{}", render_field(driver.field()));
        }
        scores.push(stats.score() as f32);
    }

    if *games > 1 {
        let stats = DescriptiveStats::new(scores).unwrap();
        println!("Score over {games} games:");
        println!("  Min:    {:.1}", stats.min);
        println!("  Median: {:.1}", stats.median);
        println!("  Mean:   {:.1}", stats.mean);
        println!("  Max:    {:.1}", stats.max);
    }

    Ok(())
}

fn print_game(game: usize, stats: &GameStats) {
    println!("Game {game}:");
    println!("  Pieces placed: {}", stats.pieces_placed());
    println!("  Lines cleared: {}", stats.total_cleared_lines());
    let [_, single, double, triple, tetris] = stats.line_cleared_counter();
    println!("    Single: {single}  Double: {double}  Triple: {triple}  Tetris: {tetris}");
    println!("  Score: {}", stats.score());
}

/// Renders the board between column-index rulers, one character per cell.
fn render_field(field: &Field) -> String {
    use std::fmt::Write as _;

    let header = (0..Field::WIDTH)
        .map(|column| column.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let mut out = String::new();
    writeln!(out, "   |{header}|").unwrap();
    for (y, row) in field.rows().enumerate() {
        let cells = row
            .iter()
            .map(|cell| cell.as_char().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{y:2} |{cells}|").unwrap();
    }
    writeln!(out, "   |{header}|").unwrap();
    out
}
