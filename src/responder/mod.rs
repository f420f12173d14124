pub mod language;
pub mod rules;
mod topics;

pub use language::Language;
pub use rules::{Reply, Topic};

/// Classify raw message text and pick the localized reply.
///
/// Only lowercasing is applied before matching; punctuation, diacritics and
/// whitespace are left untouched.
pub fn respond(text: &str) -> Reply {
    let normalized = text.to_lowercase();
    let lang = language::detect(&normalized);
    rules::select_response(&normalized, lang)
}
