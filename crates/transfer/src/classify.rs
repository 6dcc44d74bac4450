//! Size-limit partitioning of fetched files.

use crate::types::FetchedFile;

/// Partition of a fetch result under the upload size limit.
///
/// Every input file lands in exactly one of the two lists, both
/// preserving the fetcher's enumeration order.
#[derive(Debug, Default)]
pub struct FileClassification {
    pub eligible: Vec<FetchedFile>,
    pub oversized: Vec<FetchedFile>,
}

impl FileClassification {
    pub fn is_empty(&self) -> bool {
        self.eligible.is_empty() && self.oversized.is_empty()
    }
}

/// Split `files` at `max_size`. The boundary is exclusive: a file of
/// exactly `max_size` bytes is still eligible.
pub fn classify(files: Vec<FetchedFile>, max_size: u64) -> FileClassification {
    let mut result = FileClassification::default();
    for file in files {
        if file.size > max_size {
            result.oversized.push(file);
        } else {
            result.eligible.push(file);
        }
    }
    result
}
