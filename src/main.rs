use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use connect_four::ai::{Agent, MinimaxAgent, RandomAgent};
use connect_four::config::AppConfig;
use connect_four::game::{GameOutcome, GameState, Player, COLS};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a minimax engine")]
struct Cli {
    /// Who plays Red (moves first): human, minimax, or random
    #[arg(long, default_value = "human")]
    red: String,

    /// Who plays Yellow: human, minimax, or random
    #[arg(long, default_value = "minimax")]
    yellow: String,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Override the open-line weight of the evaluator
    #[arg(long)]
    possible_weight: Option<f64>,

    /// Override the threat weight of the evaluator
    #[arg(long)]
    threat_weight: Option<f64>,

    /// Log search diagnostics
    #[arg(long, short)]
    verbose: bool,
}

/// A side of the board: either prompted on stdin or driven by an agent.
enum Seat {
    Human,
    Engine(Box<dyn Agent>),
}

fn make_seat(kind: &str, config: &AppConfig) -> Result<Seat> {
    match kind {
        "human" => Ok(Seat::Human),
        "minimax" => Ok(Seat::Engine(Box::new(MinimaxAgent::with_weights(
            config.search.depth,
            config.heuristic.possible_weight,
            config.heuristic.threat_weight,
        )))),
        "random" => Ok(Seat::Engine(Box::new(RandomAgent::new()))),
        other => bail!(
            "unknown player kind '{}' (expected 'human', 'minimax', or 'random')",
            other
        ),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    simple_logger::init_with_level(level).context("initializing logger")?;

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides, then re-check the result
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(weight) = cli.possible_weight {
        config.heuristic.possible_weight = weight;
    }
    if let Some(weight) = cli.threat_weight {
        config.heuristic.threat_weight = weight;
    }
    config.validate().context("validating configuration")?;

    let mut red = make_seat(&cli.red, &config)?;
    let mut yellow = make_seat(&cli.yellow, &config)?;

    run_game(&mut red, &mut yellow)
}

fn run_game(red: &mut Seat, yellow: &mut Seat) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut state = GameState::initial();

    println!("{}", state.board());
    while !state.is_terminal() {
        let side = state.current_player();
        let seat = match side {
            Player::Red => &mut *red,
            Player::Yellow => &mut *yellow,
        };

        let col = match seat {
            Seat::Human => prompt_column(&mut input, &state)?,
            Seat::Engine(agent) => {
                let Some(col) = agent.select_column(&state) else {
                    bail!("{} has no move to play", agent.name());
                };
                println!("{} ({}) plays column {}", side.name(), agent.name(), col + 1);
                col
            }
        };

        state
            .apply_move_mut(col)
            .map_err(|err| anyhow::anyhow!("move to column {} rejected: {err:?}", col + 1))?;
        println!("{}", state.board());
    }

    match state.outcome() {
        Some(GameOutcome::Winner(side)) => println!("{} wins!", side.name()),
        Some(GameOutcome::Draw) => println!("It's a draw!"),
        None => unreachable!("loop exits only on a decided game"),
    }

    Ok(())
}

/// Ask for a 1-based column until the input parses and the column is open.
fn prompt_column(input: &mut impl BufRead, state: &GameState) -> Result<usize> {
    loop {
        print!(
            "{}, choose a column (1-{}): ",
            state.current_player().name(),
            COLS
        );
        io::stdout().flush().context("flushing prompt")?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("reading input")?;
        if read == 0 {
            bail!("input closed before the game finished");
        }

        let col = match line.trim().parse::<usize>() {
            Ok(n) if (1..=COLS).contains(&n) => n - 1,
            _ => {
                println!("Enter a number from 1 to {COLS}");
                continue;
            }
        };
        if state.board().is_column_full(col) {
            println!("Column {} is full, pick another", col + 1);
            continue;
        }
        return Ok(col);
    }
}
