use std::{
    io::{self, Write},
    path::PathBuf,
    process,
};

use anyhow::Result;
use clap::Parser;
use log::info;

use post_bayes::{report, FieldNames, NaiveBayesClassifier, PostReader, WordCounter};

/// Trains a naive Bayes classifier on one CSV file of posts and reports how
/// well it predicts the labels of another.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// CSV file of labeled training posts
    train_file: PathBuf,

    /// CSV file of labeled test posts
    test_file: PathBuf,

    /// Print training rows, class priors and per-word parameters
    #[arg(long)]
    debug: bool,

    /// Column holding each post's label
    #[arg(long, default_value = "tag")]
    label_field: String,

    /// Column holding each post's text
    #[arg(long, default_value = "content")]
    content_field: String,
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(err) = run(&args) {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let fields = FieldNames {
        label: args.label_field.clone(),
        content: args.content_field.clone(),
    };

    // Open both files up front so a bad test path fails before training.
    let train_reader = PostReader::from_path(&args.train_file, &fields)?;
    let test_reader = PostReader::from_path(&args.test_file, &fields)?;

    let training = train_reader.read_all()?;
    let mut counter = WordCounter::new();
    counter.extend(&training);
    info!(
        "read {} training posts from {}",
        training.len(),
        args.train_file.display()
    );

    let classifier = NaiveBayesClassifier::new(&counter)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_training(&mut out, &classifier, &training, args.debug)?;

    let test = test_reader.read_all()?;
    let evaluation = classifier.evaluate(test)?;
    report::write_evaluation(&mut out, &evaluation)?;
    out.flush()?;

    Ok(())
}
