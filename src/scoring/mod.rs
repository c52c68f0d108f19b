// Scoring: similarity between a post and the reference lexicon.

pub mod similarity;
