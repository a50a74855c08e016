//! Pegasos Sentiment Inspector - compare a trained linear classifier with keyword counting
//!
//! Single-process, synchronous CLI application.
//! Loads a Pegasos model bundle once and scores reviews typed into a terminal form.

use anyhow::Context;
use clap::Parser;
use pegasos_sentiment::classifier::{KeywordBaseline, Model};
use pegasos_sentiment::cli::display::Display;
use pegasos_sentiment::cli::gallery::Gallery;
use pegasos_sentiment::cli::input::{FormAction, InputHandler};
use pegasos_sentiment::cli::report::Comparison;
use pegasos_sentiment::config::AppConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pegasos-sentiment")]
#[command(about = "Inspect a Pegasos sentiment model against a keyword baseline")]
struct Args {
    /// Path to the model bundle (JSON or bincode)
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fail instead of running with a degraded model
    #[arg(long)]
    strict: bool,

    /// Analyze this review and exit
    #[arg(short, long, conflicts_with = "example")]
    text: Option<String>,

    /// Analyze gallery example N (1-based) and exit
    #[arg(short, long)]
    example: Option<usize>,

    /// Print the report as JSON (one-shot mode only)
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_model(config: &AppConfig) -> anyhow::Result<Model> {
    if config.strict {
        Model::load(&config.model_path)
            .with_context(|| format!("Failed to load model from {:?}", config.model_path))
    } else {
        Ok(Model::load_or_degraded(&config.model_path))
    }
}

/// Score one review and print the report
fn run_once(text: &str, model: &Model, baseline: &KeywordBaseline, json: bool) -> anyhow::Result<()> {
    let comparison = Comparison::run(text, model, baseline);
    if json {
        println!("{}", comparison.to_json()?);
    } else {
        println!("{}", comparison.render());
    }
    Ok(())
}

fn redraw(
    display: &Display,
    model: &Model,
    gallery: &Gallery,
    review: &str,
    last: Option<&Comparison>,
) -> std::io::Result<()> {
    display.clear()?;
    display.show_header(model)?;
    display.show_gallery(gallery)?;
    display.show_input(review)?;
    if let Some(comparison) = last {
        display.show_comparison(comparison)?;
    }
    display.show_help()
}

/// Interactive review form
fn run_form(model: &Model, baseline: &KeywordBaseline, mut gallery: Gallery) -> anyhow::Result<()> {
    let display = Display::new();
    let input = InputHandler::new();
    InputHandler::enable_raw_mode()?;

    let mut review = String::new();
    let mut last: Option<Comparison> = None;
    let mut dirty = true;

    'form: loop {
        if dirty {
            redraw(&display, model, &gallery, &review, last.as_ref())?;
            dirty = false;
        }

        let Some(key) = input.read_key()? else {
            continue;
        };
        let Some(action) = InputHandler::action(&key) else {
            continue;
        };

        match action {
            FormAction::Exit => break 'form,
            FormAction::Insert(c) => review.push(c),
            FormAction::Backspace => {
                review.pop();
            }
            FormAction::Clear => review.clear(),
            FormAction::NextExample => {
                if let Some(example) = gallery.next_example() {
                    review = example.to_string();
                }
            }
            FormAction::RandomExample => {
                if let Some(example) = gallery.random_example() {
                    review = example.to_string();
                }
            }
            FormAction::Submit => {
                if !review.trim().is_empty() {
                    last = Some(Comparison::run(&review, model, baseline));
                }
            }
        }
        dirty = true;
    }

    InputHandler::disable_raw_mode()?;
    display.shutdown()?;
    println!();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    }
    .with_overrides(args.model.clone(), args.strict);

    tracing::info!("Loading Pegasos model from {:?}", config.model_path);
    let model = load_model(&config)?;
    let baseline = KeywordBaseline::default();
    let gallery = Gallery::new(config.examples.clone());

    if let Some(text) = &args.text {
        return run_once(text, &model, &baseline, args.json);
    }
    if let Some(number) = args.example {
        let text = gallery.get(number).with_context(|| {
            format!("No example {} (gallery has {})", number, gallery.len())
        })?;
        return run_once(text, &model, &baseline, args.json);
    }

    run_form(&model, &baseline, gallery)
}
