use std::collections::BTreeSet;

use log::{debug, info};

use crate::counter::WordCounter;
use crate::error::{ClassifierError, Result};
use crate::records::Post;
use crate::words::unique_words;

/// The winning label for one post and its log-probability score.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub score: f64,
}

/// Per-label diagnostics: number of posts and the log-prior.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSummary<'a> {
    pub label: &'a str,
    pub count: u32,
    pub log_prior: f64,
}

/// Log-likelihood of a word under a label it co-occurred with in training.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter<'a> {
    pub label: &'a str,
    pub word: &'a str,
    pub count: u32,
    pub log_likelihood: f64,
}

/// One classified test post.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub expected: String,
    pub predicted: String,
    pub score: f64,
    pub content: String,
}

impl Outcome {
    pub fn is_correct(&self) -> bool {
        self.expected == self.predicted
    }
}

/// Results of classifying a whole test set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    outcomes: Vec<Outcome>,
}

impl Evaluation {
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn correct(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.is_correct()).count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Fraction of posts predicted correctly, or `None` for an empty test set.
    pub fn accuracy(&self) -> Option<f64> {
        if self.outcomes.is_empty() {
            None
        } else {
            Some(self.correct() as f64 / self.outcomes.len() as f64)
        }
    }
}

/// Multinomial naive Bayes scorer over a finished [`WordCounter`].
///
/// A label's score for a set of words is its log-prior plus one term per
/// word:
///
/// 1. `ln(joint / label_count)` if the word appeared with this label,
/// 2. otherwise `ln(word_doc_count / total_posts)` if the word was seen at all,
/// 3. otherwise `ln(1 / total_posts)`.
pub struct NaiveBayesClassifier<'a> {
    counter: &'a WordCounter,
    total_posts: f64,
}

impl<'a> NaiveBayesClassifier<'a> {
    pub fn new(counter: &'a WordCounter) -> Result<Self> {
        if counter.is_empty() {
            return Err(ClassifierError::EmptyTrainingSet);
        }

        info!(
            "classifier ready: {} posts, {} labels, vocabulary size {}",
            counter.total_posts(),
            counter.labels().len(),
            counter.vocabulary_size()
        );

        Ok(NaiveBayesClassifier {
            counter,
            total_posts: counter.total_posts() as f64,
        })
    }

    pub fn counter(&self) -> &'a WordCounter {
        self.counter
    }

    /// `ln(label_count / total_posts)`.
    pub fn log_prior(&self, label: &str) -> Result<f64> {
        let label_count = self.label_count(label)?;
        Ok((label_count / self.total_posts).ln())
    }

    /// Log-probability score of `words` under `label`.
    pub fn score(&self, label: &str, words: &BTreeSet<String>) -> Result<f64> {
        let label_count = self.label_count(label)?;
        let log_prior = (label_count / self.total_posts).ln();

        Ok(words.iter().fold(log_prior, |acc, word| {
            acc + self.word_term(label, label_count, word)
        }))
    }

    fn word_term(&self, label: &str, label_count: f64, word: &str) -> f64 {
        if let Some(joint) = self.counter.joint_count(label, word) {
            (joint as f64 / label_count).ln()
        } else if let Some(docs) = self.counter.word_doc_count(word) {
            (docs as f64 / self.total_posts).ln()
        } else {
            (1.0 / self.total_posts).ln()
        }
    }

    fn label_count(&self, label: &str) -> Result<f64> {
        self.counter
            .label_count(label)
            .map(|count| count as f64)
            .ok_or_else(|| ClassifierError::UnknownLabel(label.to_string()))
    }

    /// Scores every label and returns the best one.
    ///
    /// Labels are visited in ascending order and only a strictly greater
    /// score replaces the current best, so ties go to the smallest label.
    pub fn classify(&self, words: &BTreeSet<String>) -> Result<Prediction> {
        let mut best: Option<(&str, f64)> = None;
        for label in self.counter.labels() {
            let score = self.score(label, words)?;
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((label, score)),
            }
        }

        best.map(|(label, score)| Prediction {
            label: label.to_string(),
            score,
        })
        .ok_or(ClassifierError::EmptyTrainingSet)
    }

    /// Convenience for raw content: tokenizes, then classifies.
    pub fn classify_content(&self, content: &str) -> Result<Prediction> {
        self.classify(&unique_words(content))
    }

    /// Count and log-prior of every label, sorted by label.
    pub fn class_summaries(&self) -> Vec<ClassSummary<'a>> {
        let counter = self.counter;
        counter
            .labels()
            .into_iter()
            .filter_map(|label| {
                let count = counter.label_count(label)?;
                Some(ClassSummary {
                    label,
                    count,
                    log_prior: (count as f64 / self.total_posts).ln(),
                })
            })
            .collect()
    }

    /// Log-likelihood of every co-occurring (label, word) pair, sorted by label then word.
    pub fn parameters(&self) -> Vec<Parameter<'a>> {
        let counter = self.counter;
        counter
            .joint_counts()
            .into_iter()
            .filter_map(|(label, word, count)| {
                let label_count = counter.label_count(label)? as f64;
                Some(Parameter {
                    label,
                    word,
                    count,
                    log_likelihood: (count as f64 / label_count).ln(),
                })
            })
            .collect()
    }

    /// Classifies each post on its own and tallies correct predictions.
    pub fn evaluate<I>(&self, posts: I) -> Result<Evaluation>
    where
        I: IntoIterator<Item = Post>,
    {
        let mut evaluation = Evaluation::default();
        for post in posts {
            let prediction = self.classify_content(&post.content)?;
            debug!(
                "expected {:?}, predicted {:?} (score {})",
                post.label, prediction.label, prediction.score
            );

            evaluation.outcomes.push(Outcome {
                expected: post.label,
                predicted: prediction.label,
                score: prediction.score,
                content: post.content,
            });
        }

        info!(
            "{} / {} posts predicted correctly",
            evaluation.correct(),
            evaluation.total()
        );
        Ok(evaluation)
    }
}
