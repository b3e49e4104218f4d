use clap::{Parser, Subcommand};
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::cli::{greet, print_player_view, LineInput};
use seabattle::{
    init_logging, AiPlayer, Game, GameConfig, GamePhase, HumanPlayer, Side, DEFAULT_BOARD_SIZE,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Let the computer play both sides and print the result.
    Auto {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play {
        size: DEFAULT_BOARD_SIZE,
        seed: None,
    });

    match command {
        Commands::Play { size, seed } => {
            init_logging(LevelFilter::Warn);
            let config = GameConfig::new(size)?;
            let rng = make_rng(seed);
            let human = HumanPlayer::new(LineInput::stdio());
            let ai = AiPlayer::new().announcing(Box::new(std::io::stdout()));
            let mut game = Game::new(config, Box::new(human), Box::new(ai), rng)?;

            greet();
            game.setup()?;
            loop {
                print_player_view(game.board(Side::Human), game.board(Side::Ai));
                match game.active() {
                    Side::Human => println!("User moving!"),
                    Side::Ai => println!("AI moving!"),
                }
                if let GamePhase::Finished(winner) = game.step()? {
                    print_player_view(game.board(Side::Human), game.board(Side::Ai));
                    match winner {
                        Side::Human => println!("User win!"),
                        Side::Ai => println!("AI win!"),
                    }
                    break;
                }
            }
        }
        Commands::Auto { size, seed } => {
            init_logging(LevelFilter::Info);
            let config = GameConfig::new(size)?;
            let rng = make_rng(seed);
            let mut game = Game::new(
                config,
                Box::new(AiPlayer::seated(Side::Human)),
                Box::new(AiPlayer::seated(Side::Ai)),
                rng,
            )?;
            let winner = game.run()?;
            print_player_view(game.board(Side::Human), game.board(Side::Ai));
            println!(
                "{:?} wins after {} moves ({} turn changes)",
                winner,
                game.moves(),
                game.turn()
            );
        }
    }
    Ok(())
}
