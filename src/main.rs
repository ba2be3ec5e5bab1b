use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use env_logger::Env;
use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use pubquiz::libpubquiz::error::Error;
use pubquiz::libpubquiz::quiz::Quiz;
use pubquiz::libpubquiz::templates::{slide_fragments, TemplateSet};

#[derive(Parser, Debug)]
#[command(name = "pubquiz")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Make a pub quiz from a YAML or JSON file.
    Make {
        #[arg(value_name = "FILE")]
        quiz: PathBuf,
        #[arg(value_enum, default_value = "all")]
        output: Output,
        /// Where the .tex files go. Outside the current directory, relative
        /// picture and input paths are written as absolute paths.
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output_dir: PathBuf,
        /// Directory with replacements for the built-in LaTeX headers.
        #[arg(short, long, value_name = "DIR")]
        templates: Option<PathBuf>,
        /// Shuffle the questions within each round.
        #[arg(long)]
        shuffle: bool,
        #[arg(long, requires = "shuffle")]
        seed: Option<u64>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq)]
enum Output {
    QuestionSheets,
    AnswerSheets,
    Slides,
    All,
}

impl Output {
    fn expand(self) -> Vec<Output> {
        match self {
            Output::All => vec![Output::QuestionSheets, Output::AnswerSheets, Output::Slides],
            single => vec![single],
        }
    }

    fn file_name(self) -> &'static str {
        match self {
            Output::QuestionSheets => "question_sheets.tex",
            Output::AnswerSheets => "answer_sheets.tex",
            Output::Slides => "slides.tex",
            Output::All => unreachable!("`All` is expanded before writing"),
        }
    }
}

struct MakeOptions<'a> {
    output: Output,
    output_dir: &'a Path,
    templates: Option<&'a Path>,
    shuffle: bool,
    seed: Option<u64>,
}

fn make(quiz_path: &Path, options: &MakeOptions) -> Result<Vec<PathBuf>, Error> {
    let mut quiz = Quiz::from_path(quiz_path)?;
    if options.shuffle {
        match options.seed {
            Some(seed) => quiz.shuffle_rounds_questions_with(&mut StdRng::seed_from_u64(seed)),
            None => quiz.shuffle_rounds_questions(),
        }
    }

    let templates = match options.templates {
        Some(dir) => TemplateSet::load(dir)?,
        None => TemplateSet::builtin(),
    };

    fs::create_dir_all(options.output_dir)?;
    let here = env::current_dir()?;
    if fs::canonicalize(options.output_dir)? != fs::canonicalize(&here)? {
        info!("[Output] Writing outside {:?}, using absolute paths for pictures and inputs", here);
        quiz.anchor_paths(&here);
    }

    let mut written = Vec::new();
    for output in options.output.expand() {
        let text = match output {
            Output::QuestionSheets => quiz.render_sheets(&templates, false)?,
            Output::AnswerSheets => quiz.render_sheets(&templates, true)?,
            Output::Slides => {
                for (name, path) in slide_fragments(options.output_dir) {
                    templates.ensure_fragment(name, &path)?;
                }
                quiz.render_slides(&templates)
            }
            Output::All => unreachable!("`All` is expanded before writing"),
        };
        let path = options.output_dir.join(output.file_name());
        fs::write(&path, text)?;
        debug!("[Output] {:?} done", output);
        written.push(path);
    }
    Ok(written)
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level)).init();

    match args.command {
        Commands::Make {
            quiz,
            output,
            output_dir,
            templates,
            shuffle,
            seed,
        } => {
            info!(
                "{}",
                format!("Making {:?} from {:?} into {:?}", output, quiz, output_dir).cyan()
            );
            let options = MakeOptions {
                output,
                output_dir: &output_dir,
                templates: templates.as_deref(),
                shuffle,
                seed,
            };
            match make(&quiz, &options) {
                Ok(written) => {
                    for path in written {
                        println!("{}", format!("Wrote {}", path.display()).green());
                    }
                    Ok(())
                }
                Err(err) => {
                    error!("{}", format!("Could not make the quiz: {}", err).red());
                    Err(err)
                }
            }
        }
    }
}
