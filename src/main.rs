use std::io::{stdin, stdout, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::builder::TypedValueParser;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use rand::rngs::SmallRng;
use rand::{thread_rng, SeedableRng};

use engine48::config::{check_win_value, Config, DEFAULT_SIZE, DEFAULT_WIN_VALUE};
use engine48::engine::{Direction, Game, Score, Status, Tile};
use engine48::error;

/// Play 2048 on the command line, one move per line of input.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Width and height of the board.
    #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = clap::value_parser!(u16).range(2..=16).map(usize::from))]
    size: usize,

    /// Tile value that wins the game, a power of two of at least 4.
    #[arg(long, default_value_t = DEFAULT_WIN_VALUE, value_parser = parse_win_value)]
    win_value: Tile,

    /// Chance, in tenths, that a new tile is a 4.
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=10))]
    four_weight: u8,

    /// Seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// File that log records are written to.
    #[arg(long, default_value = "./engine48.log")]
    log_file: PathBuf,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            size: self.size,
            win_value: self.win_value,
            four_weight: self.four_weight,
        }
    }
}

fn parse_win_value(s: &str) -> error::Result<Tile> {
    let value = s
        .parse::<Tile>()
        .map_err(|e| error::Error::InvalidConfig(format!("win value {:?}: {}", s, e)))?;
    check_win_value(value)
}

enum UserInput {
    Direction(Direction),
    Quit,
}

fn parse_input(line: &str) -> Option<UserInput> {
    match line.trim() {
        "quit" | "q" => Some(UserInput::Quit),
        other => match other.parse::<Direction>() {
            Ok(d) => Some(UserInput::Direction(d)),
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        },
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = cli.config();
    let game = match cli.seed {
        Some(seed) => Game::new(&config, SmallRng::seed_from_u64(seed))?,
        None => Game::new(&config, thread_rng())?,
    };

    let score = play(game, stdin().lock(), stdout().lock())?;
    log::info!("final score {}", score);
    Ok(())
}

fn init_logging(cli: &Cli) -> error::Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message,
            ))
        })
        .level(cli.verbose.log_level_filter())
        .chain(fern::log_file(&cli.log_file)?)
        .apply()?;
    Ok(())
}

/// Run the game loop until the game ends, the player quits or input runs out, and return the
/// final score.
fn play<R: BufRead, W: Write>(
    mut game: Game,
    mut input: R,
    mut output: W,
) -> error::Result<Score> {
    let mut line = String::new();
    loop {
        writeln!(output)?;
        write!(output, "{}", game.grid())?;
        writeln!(output)?;
        writeln!(output, "    Score: {}", game.score())?;
        writeln!(output)?;

        match game.status() {
            Status::Lost => {
                writeln!(output, "There are no more possible moves!")?;
                break;
            }
            Status::Won => {
                writeln!(output, "You Won!")?;
                break;
            }
            Status::InProgress => (),
        }

        write!(output, ">> ")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match parse_input(&line) {
            Some(UserInput::Direction(d)) => {
                game.step(d);
            }
            Some(UserInput::Quit) => break,
            None => {
                writeln!(output)?;
                writeln!(
                    output,
                    "Enter one of the following directions: 'up', 'down', 'left', 'right'."
                )?;
            }
        }
    }
    Ok(game.release())
}
