use std::{fs::File, io, path::Path};

use anyhow::{Context, Result};
use csv::{Reader, ReaderBuilder, StringRecord};

/// One labeled row of a training or test file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub label: String,
    pub content: String,
}

impl Post {
    pub fn new(label: impl Into<String>, content: impl Into<String>) -> Self {
        Post {
            label: label.into(),
            content: content.into(),
        }
    }
}

/// Names of the CSV columns holding the label and the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    pub label: String,
    pub content: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        FieldNames {
            label: "tag".to_string(),
            content: "content".to_string(),
        }
    }
}

/// Streams [`Post`]s out of a CSV file with a header row.
pub struct PostReader<R> {
    reader: Reader<R>,
    record: StringRecord,
    label_index: usize,
    content_index: usize,
    source: String,
}

impl PostReader<File> {
    pub fn from_path<P: AsRef<Path>>(path: P, fields: &FieldNames) -> Result<Self> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let reader = Self::builder()
            .from_path(path)
            .with_context(|| format!("Error opening file: {}", source))?;
        Self::with_source(reader, fields, source)
    }
}

impl<R: io::Read> PostReader<R> {
    pub fn from_reader(rdr: R, fields: &FieldNames) -> Result<Self> {
        Self::with_source(Self::builder().from_reader(rdr), fields, "<reader>".to_string())
    }

    // Rows of any width get through csv so a short row is reported against
    // the column it lacks.
    fn builder() -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder.flexible(true);
        builder
    }

    fn with_source(mut reader: Reader<R>, fields: &FieldNames, source: String) -> Result<Self> {
        let headers = reader
            .headers()
            .with_context(|| format!("could not read csv header of {}", source))?;
        let column = |name: &str| {
            headers
                .iter()
                .position(|header| header == name)
                .with_context(|| format!("{} has no `{}` column", source, name))
        };
        let label_index = column(&fields.label)?;
        let content_index = column(&fields.content)?;

        Ok(PostReader {
            reader,
            record: StringRecord::new(),
            label_index,
            content_index,
            source,
        })
    }

    /// Reads every remaining row.
    pub fn read_all(self) -> Result<Vec<Post>> {
        self.collect()
    }
}

impl<R: io::Read> Iterator for PostReader<R> {
    type Item = Result<Post>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(err) => {
                return Some(
                    Err(err).with_context(|| format!("malformed csv record in {}", self.source)),
                )
            }
        }

        let line = self.record.position().map_or(0, |pos| pos.line());
        let label = self.record.get(self.label_index);
        let content = self.record.get(self.content_index);
        Some(match (label, content) {
            (Some(label), Some(content)) => Ok(Post::new(label, content)),
            _ => Err(anyhow::anyhow!(
                "{} line {}: csv record missing label or content entry.",
                self.source,
                line
            )),
        })
    }
}
