//! Run a full tournament over the built-in strategy field and write the
//! stats report for plotting.

use anyhow::Result;
use clap::Parser;
use paddock::tournament::write_report_to_path;
use paddock::{
    BuyAll, BuyNothing, Cautious, NoCheapHorses, Strategy, Tournament, TournamentConfig,
};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(about = "Run a strategy tournament and write win statistics")]
struct Args {
    /// Players seated per game.
    #[arg(long, default_value_t = 3)]
    players_per_game: usize,

    /// Games played per strategy combination.
    #[arg(long, default_value_t = 10)]
    set_length: usize,

    /// Base seed; the whole tournament is reproducible from it.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Where to write the stats report.
    #[arg(long, default_value = "stats.txt")]
    output: PathBuf,
}

fn standard_field() -> Vec<(&'static str, Arc<dyn Strategy>)> {
    let mut field: Vec<(&'static str, Arc<dyn Strategy>)> = vec![
        ("BuyNothing", Arc::new(BuyNothing)),
        ("BuyAll", Arc::new(BuyAll)),
        ("NoCheapHorses", Arc::new(NoCheapHorses)),
    ];
    for threshold in [500, 1_000, 2_000, 3_000, 4_000, 5_000, 10_000, 15_000, 20_000] {
        let name: &'static str = match threshold {
            500 => "Cautious500",
            1_000 => "Cautious1000",
            2_000 => "Cautious2000",
            3_000 => "Cautious3000",
            4_000 => "Cautious4000",
            5_000 => "Cautious5000",
            10_000 => "Cautious10000",
            15_000 => "Cautious15000",
            _ => "Cautious20000",
        };
        field.push((name, Arc::new(Cautious::new(threshold))));
    }
    field
}

fn main() -> Result<()> {
    let args = Args::parse();
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let config = TournamentConfig::new()
        .with_players_per_game(args.players_per_game)
        .with_games_per_matchup(args.set_length)
        .with_seed(args.seed);

    let mut tournament = Tournament::new(config);
    for (name, strategy) in standard_field() {
        tournament = tournament.entry(name, strategy);
    }

    let standings = tournament.run();

    log::info!(
        "the rank for {} games ({} match-ups, {} ties):",
        standings.total_games(),
        standings.matchups,
        standings.ties
    );
    for (name, wins, games) in standings.sorted() {
        log::info!("{name}: {wins} wins in {games} games");
    }

    write_report_to_path(&standings, &args.output)?;
    log::info!("report written to {}", args.output.display());
    Ok(())
}
