use std::collections::HashMap;

use log::trace;

use crate::records::Post;
use crate::words::unique_words;

/// Per-name counts with each distinct name mapped to a dense id.
#[derive(Debug, Default, Clone)]
struct Tally {
    ids: HashMap<String, usize>,
    names: Vec<String>,
    counts: Vec<u32>,
}

impl Tally {
    /// Adds one to `name`'s count. Returns its id and whether it was new.
    fn bump(&mut self, name: &str) -> (usize, bool) {
        if let Some(&id) = self.ids.get(name) {
            self.counts[id] += 1;
            return (id, false);
        }

        let id = self.names.len();
        self.ids.insert(name.to_string(), id);
        self.names.push(name.to_string());
        self.counts.push(1);
        (id, true)
    }

    fn id(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    fn count(&self, name: &str) -> Option<u32> {
        self.id(name).map(|id| self.counts[id])
    }

    fn name(&self, id: usize) -> &str {
        &self.names[id]
    }

    fn sorted(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self
            .names
            .iter()
            .map(String::as_str)
            .zip(self.counts.iter().copied())
            .collect();
        entries.sort_unstable();
        entries
    }
}

/// Frequency tables accumulated over labeled training posts.
///
/// Every count only ever grows. Once training is done the counter is handed
/// by reference to a [`NaiveBayesClassifier`](crate::bayes::NaiveBayesClassifier),
/// which only reads it.
///
/// Labels and words get ids in order of first appearance; the joint table is
/// keyed on the `(label id, word id)` pair so lookups never allocate.
#[derive(Debug, Default, Clone)]
pub struct WordCounter {
    total_posts: u32,
    vocabulary_size: u32,
    labels: Tally,
    words: Tally,
    joint_counts: HashMap<(usize, usize), u32>,
}

impl WordCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one training post. Only the distinct words of `content` matter.
    pub fn ingest(&mut self, label: &str, content: &str) {
        self.total_posts += 1;
        let (label_id, _) = self.labels.bump(label);

        for word in unique_words(content) {
            let (word_id, is_new) = self.words.bump(&word);
            if is_new {
                self.vocabulary_size += 1;
            }

            *self.joint_counts.entry((label_id, word_id)).or_insert(0) += 1;
        }

        trace!("ingested post #{} with label {:?}", self.total_posts, label);
    }

    pub fn ingest_post(&mut self, post: &Post) {
        self.ingest(&post.label, &post.content);
    }

    pub fn total_posts(&self) -> u32 {
        self.total_posts
    }

    pub fn vocabulary_size(&self) -> u32 {
        self.vocabulary_size
    }

    pub fn is_empty(&self) -> bool {
        self.total_posts == 0
    }

    /// Number of training posts carrying `label`.
    pub fn label_count(&self, label: &str) -> Option<u32> {
        self.labels.count(label)
    }

    /// Number of training posts, over all labels, containing `word`.
    pub fn word_doc_count(&self, word: &str) -> Option<u32> {
        self.words.count(word)
    }

    /// Number of training posts with `label` containing `word`.
    pub fn joint_count(&self, label: &str, word: &str) -> Option<u32> {
        let key = (self.labels.id(label)?, self.words.id(word)?);
        self.joint_counts.get(&key).copied()
    }

    /// All known labels, sorted ascending.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.labels.names.iter().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }

    /// Every nonzero joint count as `(label, word, count)`, sorted by label then word.
    pub fn joint_counts(&self) -> Vec<(&str, &str, u32)> {
        let mut joints: Vec<(&str, &str, u32)> = self
            .joint_counts
            .iter()
            .map(|(&(label_id, word_id), &count)| {
                (self.labels.name(label_id), self.words.name(word_id), count)
            })
            .collect();
        joints.sort_unstable_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        joints
    }
}

// Ids depend on ingestion order, so equality compares the tables by name.
impl PartialEq for WordCounter {
    fn eq(&self, other: &Self) -> bool {
        self.total_posts == other.total_posts
            && self.vocabulary_size == other.vocabulary_size
            && self.labels.sorted() == other.labels.sorted()
            && self.words.sorted() == other.words.sorted()
            && self.joint_counts() == other.joint_counts()
    }
}

impl Eq for WordCounter {}

impl<'a> Extend<&'a Post> for WordCounter {
    fn extend<I: IntoIterator<Item = &'a Post>>(&mut self, posts: I) {
        for post in posts {
            self.ingest_post(post);
        }
    }
}
