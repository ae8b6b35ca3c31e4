use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::error;
use serde::Serialize;

use vocabclu::game::{read_word_list, GeneratorSettings, PuzzleSession};
use vocabclu::model::{Difficulty, VocabError};

/// Generates vocabulary puzzles from a word list.
#[derive(Parser)]
#[command(name = "vocabclu", version, about)]
struct Cli {
    #[command(subcommand)]
    puzzle: PuzzleCommand,

    /// Settings file (JSON); defaults apply when it is missing
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Seed for reproducible output (SEED in the environment also works)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print the result as JSON instead of a text preview
    #[arg(long, global = true)]
    json: bool,

    /// Show solutions in the text preview
    #[arg(long, global = true)]
    solution: bool,
}

#[derive(Subcommand)]
enum PuzzleCommand {
    /// Lay the words out as a crossword
    Crossword { word_file: PathBuf },
    /// Build a letter-reveal deduction chain
    Dga {
        word_file: PathBuf,
        /// Largest number of words to use
        #[arg(long)]
        count: Option<usize>,
    },
    /// Build four 3x3 boards of attribute constraints
    TicTacWord {
        word_file: PathBuf,
        #[arg(long)]
        difficulty: Option<Difficulty>,
    },
}

fn print_result<T: Serialize>(result: &T, json: bool, preview: String) -> Result<(), VocabError> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        print!("{}", preview);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<bool, VocabError> {
    let mut settings = match &cli.settings {
        Some(path) => GeneratorSettings::load(path),
        None => GeneratorSettings::default(),
    };
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    let show_solution = cli.solution || GeneratorSettings::is_debug_mode();

    match cli.puzzle {
        PuzzleCommand::Crossword { word_file } => {
            let list = read_word_list(&word_file)?;
            let mut session = PuzzleSession::new(settings);
            let result = session.generate_crossword(&list.words, &list.clues);
            print_result(&result, cli.json, result.render(show_solution))?;
            Ok(result.failure.is_none())
        }
        PuzzleCommand::Dga { word_file, count } => {
            if let Some(count) = count {
                settings.dga_clue_count = count;
            }
            let list = read_word_list(&word_file)?;
            let mut session = PuzzleSession::new(settings);
            let result = session.generate_dga(&list.words, &list.clues);
            print_result(&result, cli.json, result.to_string())?;
            Ok(result.success)
        }
        PuzzleCommand::TicTacWord {
            word_file,
            difficulty,
        } => {
            let list = read_word_list(&word_file)?;
            let mut session = PuzzleSession::new(settings);
            let result = session.generate_tic_tac_word(&list.words, &list.clues, difficulty);
            let preview = if show_solution {
                result
                    .grids
                    .iter()
                    .map(|board| board.render(true))
                    .collect::<Vec<_>>()
                    .join("\n")
            } else {
                result.to_string()
            };
            print_result(&result, cli.json, preview)?;
            Ok(result.success)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            error!(target: "vocabclu", "{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
