//! Guess Binary
//!
//! Plays a session of Mastermind or Wheel of Fortune in the terminal and
//! prints the session's high scores and average.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_guess::console::Console;
use rust_guess::{
    play_session, GameError, GameResult, GameRng, GameVariant, PhrasePool, PhraseReveal,
    PlayerId, RoundConfig, RoundEngine, SequenceConfig, SequenceMatch, SessionReport,
    DEFAULT_GUESS_BUDGET,
};

#[derive(Parser)]
#[command(author, version, about = "Turn-based guessing games", long_about = None)]
struct Cli {
    #[command(subcommand)]
    game: Game,

    /// Seed for reproducible secrets (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Name recorded with every score
    #[arg(long, global = true, default_value = PlayerId::DEFAULT_NAME)]
    player: String,

    /// Guesses per round
    #[arg(long, global = true, default_value_t = DEFAULT_GUESS_BUDGET)]
    budget: u32,

    /// Length of the high score list
    #[arg(long, global = true, default_value_t = 2)]
    top: usize,

    /// Print the session summary as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log round transitions
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Game {
    #[command(about = "Guess a hidden sequence of colours", alias = "mm")]
    Mastermind {
        /// Colours per code
        #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=6))]
        length: u8,
    },
    #[command(about = "Guess a hidden phrase letter by letter", alias = "wof")]
    Wheel {
        /// File with one phrase per line
        #[arg(long, default_value = "phrases.txt")]
        phrases: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn run(cli: &Cli) -> GameResult<()> {
    let rng = cli.seed.map(GameRng::new).unwrap_or_else(GameRng::from_entropy);
    let config = RoundConfig::new()
        .with_guess_budget(cli.budget)
        .with_player(cli.player.as_str());

    let report = match &cli.game {
        Game::Mastermind { length } => {
            let variant = SequenceMatch::new(
                SequenceConfig::new().with_code_length(usize::from(*length)),
                rng.for_context("sequence"),
            );
            session(variant, config)?
        }
        Game::Wheel { phrases } => {
            let pool = PhrasePool::from_path(phrases)?;
            let variant = PhraseReveal::new(pool, rng.for_context("phrase"));
            session(variant, config)?
        }
    };

    print_report(cli, &report)
}

fn session<V>(variant: V, config: RoundConfig) -> GameResult<SessionReport>
where
    V: GameVariant,
    Console<std::io::StdinLock<'static>, std::io::Stdout>: rust_guess::GuessSource<V>,
{
    let mut engine = RoundEngine::new(variant, config)?;
    let mut console = Console::stdio();
    let mut observer = Console::new(std::io::empty(), std::io::stdout());
    play_session(&mut engine, &mut console, &mut observer)
}

fn print_report(cli: &Cli, report: &SessionReport) -> GameResult<()> {
    let ledger = &report.ledger;

    if cli.json {
        let summary = ledger.summary().ok();
        let json = serde_json::json!({
            "end": report.end,
            "summary": summary,
            "top": ledger.top_n(cli.top),
        });
        println!("{}", json);
        return Ok(());
    }

    println!("\nHigh game list for {} games:", cli.top);
    for (rank, record) in ledger.top_n(cli.top).iter().enumerate() {
        println!("{:>3}. {}", rank + 1, record);
    }

    match ledger.summary() {
        Ok(summary) => println!("\nAverage of games: {:.2} ({})", summary.mean, summary),
        Err(GameError::EmptyInput { .. }) => println!("\nNo games played."),
        Err(e) => return Err(e),
    }
    Ok(())
}
