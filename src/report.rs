//! Plain-text report of a training and test run.
//!
//! Numbers are printed with three significant digits, trailing zeros
//! dropped, switching to scientific notation outside `1e-4..1e3`.

use std::io::{self, Write};

use crate::bayes::{Evaluation, NaiveBayesClassifier};
use crate::records::Post;

/// Formats `value` with `precision` significant digits in `%g` style.
pub fn format_general(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn strip_trailing_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

fn g3(value: f64) -> String {
    format_general(value, 3)
}

/// `trained on ...` header, preceded in debug mode by the training rows and
/// followed by the vocabulary size and class priors.
pub fn write_training<W: Write>(
    out: &mut W,
    classifier: &NaiveBayesClassifier,
    training: &[Post],
    debug: bool,
) -> io::Result<()> {
    let counter = classifier.counter();

    if debug {
        writeln!(out, "training data:")?;
        for post in training {
            writeln!(out, "  label = {}, content = {}", post.label, post.content)?;
        }
    }

    writeln!(out, "trained on {} examples", counter.total_posts())?;
    if debug {
        writeln!(out, "vocabulary size = {}", counter.vocabulary_size())?;
    }
    writeln!(out)?;

    if debug {
        writeln!(out, "classes:")?;
        for class in classifier.class_summaries() {
            writeln!(
                out,
                "  {}, {} examples, log-prior = {}",
                class.label,
                class.count,
                g3(class.log_prior)
            )?;
        }

        writeln!(out, "classifier parameters:")?;
        for parameter in classifier.parameters() {
            writeln!(
                out,
                "  {}:{}, count = {}, log-likelihood = {}",
                parameter.label,
                parameter.word,
                parameter.count,
                g3(parameter.log_likelihood)
            )?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Per-post predictions and the final `performance` line.
pub fn write_evaluation<W: Write>(out: &mut W, evaluation: &Evaluation) -> io::Result<()> {
    writeln!(out, "test data:")?;
    for outcome in evaluation.outcomes() {
        writeln!(
            out,
            "  correct = {}, predicted = {}, log-probability score = {}",
            outcome.expected,
            outcome.predicted,
            g3(outcome.score)
        )?;
        writeln!(out, "  content = {}", outcome.content)?;
        writeln!(out)?;
    }

    writeln!(
        out,
        "performance: {} / {} posts predicted correctly",
        evaluation.correct(),
        evaluation.total()
    )
}
