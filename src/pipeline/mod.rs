// Batch pipelines over a loaded corpus.

pub mod scan;
