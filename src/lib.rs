//! Multinomial naive Bayes classification of short labeled text posts.

pub mod bayes;
pub mod counter;
pub mod error;
pub mod records;
pub mod report;
pub mod words;

pub use bayes::{Evaluation, NaiveBayesClassifier, Prediction};
pub use counter::WordCounter;
pub use error::ClassifierError;
pub use records::{FieldNames, Post, PostReader};
