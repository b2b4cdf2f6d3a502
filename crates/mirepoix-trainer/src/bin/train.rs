use std::path::PathBuf;

use clap::Parser;

use mirepoix_trainer::{CrfTagger, TrainOptions, train_from_csv};

/// Train an ingredient-line CRF model from a labeled CSV dataset.
#[derive(Parser)]
#[command(name = "train", version, about)]
struct Args {
    /// Labeled dataset CSV (input,name,qty,range_end,unit,comment)
    dataset: PathBuf,

    /// Output model file; defaults to the first free model{i}.crfsuite
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fraction of lines held out for evaluation
    #[arg(long, default_value_t = 0.0)]
    test_prop: f64,

    /// L2 regularization coefficient
    #[arg(long)]
    c2: Option<f64>,

    /// Seed for the holdout split
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Show the trainer's progress output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let options = TrainOptions {
        output: args.output,
        test_prop: args.test_prop,
        c2: args.c2,
        verbose: args.verbose,
        seed: args.seed,
    };

    match train_from_csv(&CrfTagger, &args.dataset, &options) {
        Ok(report) => {
            println!(
                "Model successfully trained and saved as: {}",
                report.model.path().display()
            );
            if let Some(accuracy) = report.token_accuracy {
                println!(
                    "Holdout token accuracy: {:.2}% over {} lines",
                    accuracy * 100.0,
                    report.test_lines
                );
            }
        }
        Err(e) => {
            eprintln!("Training failed: {e:#}");
            std::process::exit(1);
        }
    }
}
