/// Reply language picked for a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Tagalog,
    Bisaya,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::English => write!(f, "english"),
            Language::Tagalog => write!(f, "tagalog"),
            Language::Bisaya => write!(f, "bisaya"),
        }
    }
}

// Topic words like "training" and "cost" sit in both lists so that any
// topical question leans toward a localized reply.
const BISAYA_KEYWORDS: &[&str] = &[
    "kumusta",
    "musta",
    "kamusta",
    "unsa",
    "asa",
    "kanus-a",
    "ngano",
    "kinsa",
    "kinsay",
    "kinsa ang",
    "unsaon",
    "pila",
    "asa ka",
    "programa",
    "kurso",
    "trabaho",
    "trabahoan",
    "kinahanglan",
    "thesis",
    "partnership",
    "event",
    "training",
    "cost",
    "academic",
    "develop",
];

const TAGALOG_KEYWORDS: &[&str] = &[
    "kumusta",
    "kamusta",
    "ano",
    "saan",
    "kailan",
    "bakit",
    "sino",
    "sino ang",
    "paano",
    "ilan",
    "saan ka",
    "programa",
    "kurso",
    "trabaho",
    "trabahoan",
    "kailangan",
    "thesis",
    "partnership",
    "event",
    "training",
    "cost",
    "academic",
    "develop",
    "mga",
    "ang",
    "ng",
    "sa",
    "ay",
];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

pub fn is_bisaya(text: &str) -> bool {
    contains_any(text, BISAYA_KEYWORDS)
}

pub fn is_tagalog(text: &str) -> bool {
    contains_any(text, TAGALOG_KEYWORDS)
}

/// Pick the reply language for already-lowercased text.
///
/// Matching is plain substring containment, not whole words. Bisaya wins
/// when both keyword sets hit; English is used when neither does.
pub fn detect(text: &str) -> Language {
    if is_bisaya(text) {
        Language::Bisaya
    } else if is_tagalog(text) {
        Language::Tagalog
    } else {
        Language::English
    }
}
