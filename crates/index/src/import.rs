//! Build a vector store from GloVe-style text.
//!
//! Each line is `word f1 f2 ... fN`. The word is everything before the last
//! `dimension` fields, so the handful of multi-part keys in the large GloVe
//! dumps survive (joined by single spaces). Keys are stored with their
//! original case; the lowercase fallback happens at lookup time.

use crate::backend::VectorSink;
use crate::codec::encode_vector;
use crate::StoreError;
use std::io::BufRead;

/// Counters reported after an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportStats {
    /// Lines read, blank ones included.
    pub lines: usize,
    /// Entries written to the sink.
    pub imported: usize,
    pub skipped_blank: usize,
}

/// Parse one non-blank line into `(word, components)`.
pub fn parse_line(
    line: &str,
    line_no: usize,
    dimension: usize,
) -> Result<(String, Vec<f32>), StoreError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() <= dimension {
        return Err(StoreError::Parse {
            line: line_no,
            reason: format!(
                "expected a word and {dimension} components, found {} fields",
                fields.len()
            ),
        });
    }

    let split = fields.len() - dimension;
    let word = fields[..split].join(" ");
    let values = fields[split..]
        .iter()
        .map(|field| {
            field.parse::<f32>().map_err(|e| StoreError::Parse {
                line: line_no,
                reason: format!("invalid component {field:?}: {e}"),
            })
        })
        .collect::<Result<Vec<f32>, StoreError>>()?;

    Ok((word, values))
}

/// Stream `reader` into `sink` in batches of `batch_size` entries.
pub fn import_glove<R: BufRead>(
    reader: R,
    sink: &dyn VectorSink,
    dimension: usize,
    batch_size: usize,
) -> Result<ImportStats, StoreError> {
    let batch_size = batch_size.max(1);
    let mut stats = ImportStats::default();
    let mut batch = Vec::with_capacity(batch_size);

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        stats.lines += 1;
        if line.trim().is_empty() {
            stats.skipped_blank += 1;
            continue;
        }

        let (word, values) = parse_line(&line, idx + 1, dimension)?;
        batch.push((word.into_bytes(), encode_vector(&values)?));

        if batch.len() >= batch_size {
            stats.imported += batch.len();
            sink.batch_put(std::mem::take(&mut batch))?;
            tracing::debug!(imported = stats.imported, "import batch committed");
        }
    }

    if !batch.is_empty() {
        stats.imported += batch.len();
        sink.batch_put(batch)?;
    }

    tracing::info!(
        lines = stats.lines,
        imported = stats.imported,
        "vector import finished"
    );
    Ok(stats)
}
