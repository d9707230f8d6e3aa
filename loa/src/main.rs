mod display;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use loa_agents::{evaluate, search_to_depth, Agent, MachineAgent, RandomAgent, DEPTH};
use loa_core::{perft, perft_divide, positions, Board, Piece};
use log::info;
use std::io;
use std::time::Instant;

/// Lines of Action engine.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a position in the board dump format
    Dump {
        /// Position text; the standard opening if omitted
        #[arg(long)]
        position: Option<String>,
    },
    /// Evaluate a position from one side's perspective
    Eval {
        #[arg(long)]
        position: Option<String>,
        /// Side to score for ("black"/"b" or "white"/"w"); defaults to the side to move
        #[arg(long)]
        side: Option<String>,
    },
    /// Search a position for the side to move
    Search {
        #[arg(long)]
        position: Option<String>,
        #[arg(long, default_value_t = DEPTH)]
        depth: u8,
    },
    /// Count legal move sequences to a fixed depth
    Perft {
        depth: u8,
        #[arg(long)]
        position: Option<String>,
    },
    /// Play a game between two agents
    Play {
        #[arg(long, value_enum, default_value_t = PlayerKind::Machine)]
        black: PlayerKind,
        #[arg(long, value_enum, default_value_t = PlayerKind::Random)]
        white: PlayerKind,
        /// Seed for random players
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many moves without a winner
        #[arg(long, default_value_t = 500)]
        max_moves: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PlayerKind {
    Machine,
    Random,
}

impl PlayerKind {
    fn agent(self, seed: Option<u64>) -> Box<dyn Agent> {
        match (self, seed) {
            (PlayerKind::Machine, _) => Box::new(MachineAgent::new()),
            (PlayerKind::Random, Some(seed)) => Box::new(RandomAgent::seeded(seed)),
            (PlayerKind::Random, None) => Box::new(RandomAgent::new()),
        }
    }
}

fn load(position: Option<&str>) -> Result<Board> {
    let text = position.unwrap_or(positions::STANDARD);
    Board::from_position(text).with_context(|| format!("invalid position {text:?}"))
}

fn run_perft(depth: u8, position: Option<&str>) -> Result<()> {
    let mut board = load(position)?;
    println!("Running perft({})...", depth);
    println!("Position: {}", board.to_position());

    let start = Instant::now();
    let nodes = if depth <= 2 {
        // Show move breakdown for shallow depths
        let results = perft_divide(&mut board, depth);
        for (mv, count) in &results {
            println!("{}: {}", mv, count);
        }
        results.iter().map(|(_, count)| count).sum()
    } else {
        perft(&mut board, depth)
    };
    let elapsed = start.elapsed();

    println!("\nNodes: {}", nodes);
    println!("Time: {:.2}s", elapsed.as_secs_f64());
    println!("NPS: {:.0}", nodes as f64 / elapsed.as_secs_f64());
    Ok(())
}

fn run_search(position: Option<&str>, depth: u8) -> Result<()> {
    let board = load(position)?;
    if board.game_over() {
        bail!("the game is already over");
    }

    println!("Position: {}", board.to_position());
    println!("Searching to depth {}...", depth);

    let start = Instant::now();
    let result = search_to_depth(&board, board.turn(), depth);
    let elapsed = start.elapsed();

    match result.best_move {
        Some(best_move) => {
            println!("\nBest move: {}", best_move);
            println!("Score: {}", result.score);
        }
        None => println!("\nNo move better than a loss"),
    }
    println!("Depth: {}", result.depth);
    println!("Nodes: {}", result.nodes);
    println!("Time: {:.2}s", elapsed.as_secs_f64());
    Ok(())
}

fn play(
    black: PlayerKind,
    white: PlayerKind,
    seed: Option<u64>,
    max_moves: usize,
) -> Result<()> {
    let mut board = Board::new();
    let mut black = black.agent(seed);
    // Offset so two random players with one seed do not mirror each other.
    let mut white = white.agent(seed.map(|s| s.wrapping_add(1)));
    let mut stdout = io::stdout();

    info!("{} (black) vs {} (white)", black.name(), white.name());
    display::draw_board(&mut stdout, &board)?;

    while !board.game_over() && board.moves_made() < max_moves {
        let agent = match board.turn() {
            Piece::Black => &mut black,
            _ => &mut white,
        };
        let Some(mv) = agent.best_move(&board) else {
            println!("{} has no legal move.", board.turn());
            break;
        };
        if !board.is_legal(mv) {
            bail!("{} chose illegal move {}", agent.name(), mv);
        }

        board.make_move(mv);
        display::draw_board(&mut stdout, &board)?;
    }

    match board.winner() {
        Some(side) => println!("{} wins.", capitalize(side.full_name())),
        None => println!("No winner after {} moves.", board.moves_made()),
    }
    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Dump { position } => {
            let board = load(position.as_deref())?;
            println!("{}", board);
            println!("{}", board.to_position());
        }
        Command::Eval { position, side } => {
            let board = load(position.as_deref())?;
            let side = match side {
                Some(name) => Piece::from_player_name(&name)?,
                None => board.turn(),
            };
            display::draw_board(&mut io::stdout(), &board)?;
            println!("Evaluation: {:.6}", evaluate(&board, side));
            println!("(from {}'s perspective)", side);
        }
        Command::Search { position, depth } => run_search(position.as_deref(), depth)?,
        Command::Perft { depth, position } => run_perft(depth, position.as_deref())?,
        Command::Play {
            black,
            white,
            seed,
            max_moves,
        } => play(black, white, seed, max_moves)?,
    }
    Ok(())
}
