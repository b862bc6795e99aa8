use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use tempfile::TempDir;

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn run(train: &Path, test: &Path, flags: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_post_bayes"))
        .arg(train)
        .arg(test)
        .args(flags)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn missing_test_file_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let train = write_csv(&dir, "train.csv", "tag,content\nspam,buy now\n");
    let missing = dir.path().join("nope.csv");

    let output = run(&train, &missing, &[]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.starts_with("Error: Error opening file:"), "{}", err);
    assert!(err.contains("nope.csv"), "{}", err);
    assert!(stdout(&output).is_empty());
}

#[test]
fn empty_training_file_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let train = write_csv(&dir, "train.csv", "tag,content\n");
    let test = write_csv(&dir, "test.csv", "tag,content\nspam,buy\n");

    let output = run(&train, &test, &[]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("classifier was trained on zero posts"), "{}", err);
}

#[test]
fn plain_run_prints_predictions_and_performance() {
    let dir = TempDir::new().unwrap();
    let train = write_csv(
        &dir,
        "train.csv",
        "tag,content\nspam,buy now buy\nham,hello friend\n",
    );
    let test = write_csv(&dir, "test.csv", "tag,content\nspam,buy\nspam,hello\n");

    let output = run(&train, &test, &[]);

    assert!(output.status.success(), "{}", stderr(&output));
    let expected = "\
trained on 2 examples

test data:
  correct = spam, predicted = spam, log-probability score = -0.693
  content = buy

  correct = spam, predicted = ham, log-probability score = -0.693
  content = hello

performance: 1 / 2 posts predicted correctly
";
    assert_eq!(stdout(&output), expected);
}

#[test]
fn debug_run_prints_parameters() {
    let dir = TempDir::new().unwrap();
    let train = write_csv(
        &dir,
        "train.csv",
        "tag,content\nspam,buy now buy\nham,hello friend\n",
    );
    let test = write_csv(&dir, "test.csv", "tag,content\nspam,buy\n");

    let output = run(&train, &test, &["--debug"]);

    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.starts_with("training data:\n  label = spam, content = buy now buy\n"));
    assert!(out.contains("vocabulary size = 4\n"));
    assert!(out.contains("classes:\n  ham, 1 examples, log-prior = -0.693\n"));
    assert!(out.contains("classifier parameters:\n  ham:friend, count = 1, log-likelihood = 0\n"));
    assert!(out.ends_with("performance: 1 / 1 posts predicted correctly\n"));
}

#[test]
fn custom_field_names_select_columns() {
    let dir = TempDir::new().unwrap();
    let train = write_csv(&dir, "train.csv", "text,kind\nbuy now,spam\nhello,ham\n");
    let test = write_csv(&dir, "test.csv", "text,kind\nhello there,ham\n");

    let output = run(
        &train,
        &test,
        &["--label-field", "kind", "--content-field", "text"],
    );

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).ends_with("performance: 1 / 1 posts predicted correctly\n"));

    let output = run(&train, &test, &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("has no `tag` column"));
}
