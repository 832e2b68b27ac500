use clap::{Parser, Subcommand};

use self::{play::PlayArg, show_model::ShowModelArg, train::TrainArg};

mod play;
mod show_model;
mod train;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Train feature weights with the evolutionary search
    Train(#[clap(flatten)] TrainArg),
    /// Replay games with a trained model
    Play(#[clap(flatten)] PlayArg),
    /// Print the weights stored in a trained model
    ShowModel(#[clap(flatten)] ShowModelArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Train(arg) => train::run(&arg)?,
        Mode::Play(arg) => play::run(&arg)?,
        Mode::ShowModel(arg) => show_model::run(&arg)?,
    }
    Ok(())
}
