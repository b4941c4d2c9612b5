//! Play one narrated demo game between three built-in strategies.

use anyhow::Result;
use clap::Parser;
use paddock::{
    BuyAll, BuyNothing, Cautious, GameOutcome, NarratedSink, PlayerColor, PlayerSpec,
    SessionBuilder, MAX_ROUNDS,
};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(about = "Play one narrated horse-racing game")]
struct Args {
    /// Seed for dice and turn order.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let roster = [
        ("Ada", PlayerColor::Red),
        ("Bruno", PlayerColor::Yellow),
        ("Clara", PlayerColor::Blue),
    ];
    let sink = NarratedSink::with_colors(
        roster
            .iter()
            .map(|&(name, color)| (name.to_owned(), color)),
    );

    let mut session = SessionBuilder::new()
        .player(PlayerSpec::new("Ada", Arc::new(BuyAll)).with_color(PlayerColor::Red))
        .player(
            PlayerSpec::new("Bruno", Arc::new(Cautious::new(15_000)))
                .with_color(PlayerColor::Yellow),
        )
        .player(PlayerSpec::new("Clara", Arc::new(BuyNothing)).with_color(PlayerColor::Blue))
        .sink(Box::new(sink))
        .build(args.seed);

    match session.play() {
        GameOutcome::Ranking(rank) => {
            log::info!("Rank:");
            for (index, name) in rank.iter().enumerate() {
                log::info!("{}. {name}", index + 1);
            }
        }
        GameOutcome::Tie => {
            log::info!("no winner within {MAX_ROUNDS} rounds, the game is a tie");
        }
    }
    Ok(())
}
