use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use othello_core::engine::config::EngineConfig;
use othello_core::logic::game::{GameState, GameStatus};
use othello_core::task::run_isolated;
use othello_core::{Board, Color, Difficulty, SearchRequest, Strategy};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Headless Othello engine driver
#[derive(Parser)]
#[command(name = "othello")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Engine tuning file (JSON, numeric fields scale the defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play engine-vs-engine games between two difficulty presets
    Play {
        #[arg(long, value_enum, default_value_t = Level::Normal)]
        black: Level,
        #[arg(long, value_enum, default_value_t = Level::Hard)]
        white: Level,
        #[arg(long, default_value_t = 1)]
        games: u32,
    },
    /// Ask the engine for one move and print the result as JSON
    BestMove {
        /// Eight ranks separated by '/', one of B, W or - per cell
        #[arg(long)]
        board: String,
        #[arg(long, value_enum)]
        color: Side,
        #[arg(long, value_enum, default_value_t = Kind::AlphaBeta)]
        strategy: Kind,
        #[arg(long, default_value_t = 4, allow_negative_numbers = true)]
        depth: i32,
        #[arg(long, default_value_t = 200, allow_negative_numbers = true)]
        trials: i32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Level {
    Easy,
    Normal,
    Hard,
    Expert,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => Self::Easy,
            Level::Normal => Self::Normal,
            Level::Hard => Self::Hard,
            Level::Expert => Self::Expert,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    Black,
    White,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Self::Black,
            Side::White => Self::White,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Random,
    AlphaBeta,
    MonteCarlo,
}

impl Kind {
    const fn strategy(self, depth: i32, trials: i32) -> Strategy {
        match self {
            Self::Random => Strategy::Random,
            Self::AlphaBeta => Strategy::AlphaBeta { depth },
            Self::MonteCarlo => Strategy::MonteCarlo { trials },
        }
    }
}

#[tokio::main]
pub async fn run() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Arc::new(load_config(cli.config.as_deref())?);

    match cli.command {
        Commands::Play {
            black,
            white,
            games,
        } => play_match(&config, black.into(), white.into(), games).await,
        Commands::BestMove {
            board,
            color,
            strategy,
            depth,
            trials,
        } => {
            let request = SearchRequest {
                board: Board::from_notation(&board).context("invalid --board")?,
                color: color.into(),
                strategy: strategy.strategy(depth, trials),
            };
            let result = run_isolated(request, config).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = EngineConfig::load_from_json(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    log::info!("loaded engine config from {}", path.display());
    Ok(config)
}

async fn play_game(
    config: &Arc<EngineConfig>,
    black: Strategy,
    white: Strategy,
) -> Result<GameState> {
    let mut game = GameState::new();
    while !game.is_over() {
        if game.must_pass() {
            log::debug!("{} passes", game.turn);
            game.pass()?;
            continue;
        }

        let strategy = match game.turn {
            Color::Black => black,
            Color::White => white,
        };
        let request = SearchRequest {
            board: game.board,
            color: game.turn,
            strategy,
        };
        let result = run_isolated(request, config.clone()).await?;
        match result.mv {
            Some(mv) => {
                log::debug!(
                    "turn {}: {} plays {mv} ({} nodes, {} playouts, {}ms)",
                    game.turn_count,
                    game.turn,
                    result.stats.nodes,
                    result.stats.playouts,
                    result.stats.time_ms
                );
                game.play(mv)?;
            }
            None => game.pass()?,
        }
    }
    Ok(game)
}

async fn play_match(
    config: &Arc<EngineConfig>,
    black: Difficulty,
    white: Difficulty,
    games: u32,
) -> Result<()> {
    let black_strategy = config.strategy_for(black);
    let white_strategy = config.strategy_for(white);
    log::info!(
        "{black:?} ({}) as black vs {white:?} ({}) as white, {games} game(s)",
        black_strategy.name(),
        white_strategy.name()
    );

    let (mut black_wins, mut white_wins, mut draws) = (0u32, 0u32, 0u32);
    for game_no in 1..=games {
        let game = play_game(config, black_strategy, white_strategy).await?;
        let winner = match game.status {
            GameStatus::Finished { winner } => winner,
            GameStatus::Playing => None,
        };
        match winner {
            Some(Color::Black) => black_wins += 1,
            Some(Color::White) => white_wins += 1,
            None => draws += 1,
        }
        log::info!(
            "game {game_no}: {} (black {}, white {}, {} plies)",
            winner.map_or_else(|| "draw".to_string(), |c| format!("{c} wins")),
            game.board.disk_count(Color::Black),
            game.board.disk_count(Color::White),
            game.history.len()
        );
        log::debug!("final position:\n{}", game.board);
    }

    println!("black {black_wins}, white {white_wins}, draws {draws}");
    Ok(())
}
