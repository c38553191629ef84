use std::path::Path;

use coreset_model::RawRecord;

use crate::error::{IngestError, Result};
use crate::read_source_text;

/// Read alternating question/answer lines.
///
/// Both lines are trimmed. A file with an odd number of lines is an error:
/// the last question would have no answer.
pub fn read_txt_pairs(path: &Path) -> Result<Vec<RawRecord>> {
    let text = read_source_text(path)?;
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() % 2 != 0 {
        return Err(IngestError::OddLineCount {
            path: path.to_path_buf(),
            lines: lines.len(),
        });
    }
    Ok(lines
        .chunks_exact(2)
        .map(|pair| {
            RawRecord::from_pairs([("question", pair[0].trim()), ("answer", pair[1].trim())])
        })
        .collect())
}
