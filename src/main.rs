//! Wordle - CLI
//!
//! Play Wordle in the terminal, either full-screen (TUI) or line by line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_game::{
    commands::run_simple,
    core::Word,
    game::{AcceptAll, Dictionary, Game, GameError, WordList},
    interactive::{App, run_tui},
    output::{Palette, print_game_summary},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, embedded lists) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Accept any five-letter guess instead of checking the dictionary
    #[arg(long, global = true)]
    accept_any: bool,

    /// Play against this secret word instead of a random one
    #[arg(long, global = true)]
    secret: Option<String>,

    /// Seed for choosing the secret word
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Use an orange/blue palette instead of green/yellow
    #[arg(long, global = true)]
    colorblind: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Full-screen terminal game (default)
    Play,

    /// Line-by-line game without TUI
    Simple,
}

/// Load the word list selected by the -w flag
fn load_wordlist(wordlist: &str) -> Result<WordList> {
    match wordlist {
        "all" => Ok(WordList::embedded()),
        path => WordList::from_file(path)
            .with_context(|| format!("failed to read word list from {path}")),
    }
}

fn new_game<'a>(
    cli: &Cli,
    words: &WordList,
    dictionary: &'a dyn Dictionary,
) -> Result<Game<&'a dyn Dictionary>> {
    if let Some(secret) = &cli.secret {
        let secret = Word::new(secret.as_str()).map_err(GameError::from)?;
        return Ok(Game::try_with_secret(secret, dictionary)?);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    Ok(Game::new(words, dictionary, &mut rng)?)
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;
    log::info!(
        "{} common words, {} dictionary words",
        words.common_len(),
        words.dictionary_len()
    );

    let dictionary: &dyn Dictionary = if cli.accept_any { &AcceptAll } else { &words };
    let palette = Palette::new(cli.colorblind);
    let mut game = new_game(&cli, &words, dictionary).context("could not start a game")?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let app = run_tui(App::new(game, palette))?;
            print_game_summary(&app.game, &app.palette);
        }
        Commands::Simple => {
            run_simple(&mut game, &palette)?;
            print_game_summary(&game, &palette);
        }
    }

    Ok(())
}
