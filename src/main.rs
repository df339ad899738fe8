use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use timeline_challenge::render::{render_outcome, render_resolution, render_session};
use timeline_challenge::runtime::{self, Command, Update};
use timeline_challenge::{init_logging, Catalog, GameRng, SessionConfig, SessionController};

#[derive(Parser)]
#[command(author, version, about = "Place historical events in chronological order", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible deals (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 3, help = "Lives at the start of each game")]
    lives: u32,
    #[arg(long, default_value_t = 1000, help = "How long each verdict is shown, in milliseconds")]
    feedback_ms: u64,
    #[arg(long, help = "JSON file with a custom event deck")]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = SessionConfig::new()
        .with_starting_lives(cli.lives)
        .with_feedback_delay(Duration::from_millis(cli.feedback_ms));
    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin(),
    };
    let rng = match cli.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let controller = SessionController::new(catalog, config, rng)?;
    let seed = controller.shuffler().seed();
    info!(seed, events = controller.catalog().len(), "dealing");
    println!("Seed: {} (pass --seed {} to replay this deal)", seed, seed);
    let (mut handle, driver) = runtime::spawn(controller);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let command = match line.trim() {
                    "q" | "quit" => break,
                    "n" | "new" => Command::NewGame,
                    "" => continue,
                    input => match input.parse::<usize>() {
                        Ok(position) => Command::Place(position),
                        Err(_) => {
                            println!("Enter a slot number, n for a new game, or q to quit.");
                            continue;
                        }
                    },
                };
                handle.send(command).await?;
            }
            update = handle.recv() => {
                let Some(update) = update else {
                    break;
                };
                show(&update);
            }
        }
    }

    // Closing the command channel stops the driver
    drop(handle);
    driver.await?;
    Ok(())
}

fn show(update: &Update) {
    match update {
        Update::Started(session) => print!("\n{}", render_session(session)),
        Update::Placed { outcome, session } => println!("{}", render_outcome(*outcome, session)),
        Update::Rejected(err) => println!("Can't place there: {}", err),
        Update::Resolved { resolution, session } => {
            if let Some(line) = render_resolution(resolution) {
                println!("{}", line);
            }
            print!("\n{}", render_session(session));
        }
    }
}
