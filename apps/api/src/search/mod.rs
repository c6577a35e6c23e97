// Search Engine: inverted index, filters, relevance, sorting, highlighting,
// autocomplete, result statistics and saved searches.
// The engine is built once per corpus and is read-only afterwards.

pub mod engine;
pub mod filters;
pub mod handlers;
pub mod highlight;
pub mod index;
pub mod reference;
pub mod relevance;
pub mod saved;
pub mod stats;
pub mod suggestions;
