// Resume ↔ job-description analysis.
// Pipeline: normalize → vectorize → cosine score, and normalize → keyword diff.
// Everything below `handlers` is pure and synchronous; handlers own all I/O.

pub mod analyzer;
pub mod handlers;
pub mod keywords;
pub mod normalize;
pub mod report;
pub mod similarity;
pub mod vectorizer;
