use super::language::Language;
use super::topics::{FALLBACK, TOPIC_RULES};

/// The question category a rule answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Greeting,
    Programs,
    Partnerships,
    Events,
    Training,
    Costs,
    Academics,
    Careers,
    Thesis,
    Dean,
    FullTimeInstructors,
    PartTimeInstructors,
    Instructors,
    Developers,
    Gratitude,
    Location,
    BstmCurriculum,
    Default,
}

/// Predicate over lowercased message text
#[derive(Debug)]
pub enum Trigger {
    /// Any keyword appears as a substring
    Any(&'static [&'static str]),
    /// Every group has at least one keyword present
    All(&'static [&'static [&'static str]]),
    /// Any nested trigger fires
    Either(&'static [Trigger]),
    Always,
}

impl Trigger {
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Trigger::Any(keywords) => keywords.iter().any(|k| text.contains(k)),
            Trigger::All(groups) => groups
                .iter()
                .all(|group| group.iter().any(|k| text.contains(k))),
            Trigger::Either(triggers) => triggers.iter().any(|t| t.matches(text)),
            Trigger::Always => true,
        }
    }
}

/// The three localized bodies of a rule
#[derive(Debug)]
pub struct Replies {
    pub english: &'static str,
    pub tagalog: &'static str,
    pub bisaya: &'static str,
}

impl Replies {
    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::English => self.english,
            Language::Tagalog => self.tagalog,
            Language::Bisaya => self.bisaya,
        }
    }
}

#[derive(Debug)]
pub struct TopicRule {
    pub topic: Topic,
    pub trigger: Trigger,
    pub replies: Replies,
}

/// A reply body chosen for one message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reply {
    pub topic: Topic,
    pub language: Language,
    pub text: &'static str,
}

/// All rules in evaluation order, ending with the fallback
pub fn rules() -> impl Iterator<Item = &'static TopicRule> {
    TOPIC_RULES.iter().chain(std::iter::once(&FALLBACK))
}

/// Walk the rule table and answer with the first rule whose trigger fires.
///
/// `text` must already be lowercased. The fallback rule always matches, so
/// every input gets a reply.
pub fn select_response(text: &str, lang: Language) -> Reply {
    let rule = rules()
        .find(|rule| rule.trigger.matches(text))
        .unwrap_or(&FALLBACK);

    Reply {
        topic: rule.topic,
        language: lang,
        text: rule.replies.get(lang),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic_of(text: &str) -> Topic {
        select_response(text, Language::English).topic
    }

    #[test]
    fn test_table_ends_with_fallback() {
        let last = rules().last().unwrap();
        assert_eq!(last.topic, Topic::Default);
        assert!(matches!(last.trigger, Trigger::Always));
    }

    #[test]
    fn test_canonical_order() {
        let order: Vec<Topic> = rules().map(|r| r.topic).collect();
        assert_eq!(
            order,
            vec![
                Topic::Greeting,
                Topic::Programs,
                Topic::Partnerships,
                Topic::Events,
                Topic::Training,
                Topic::Costs,
                Topic::Academics,
                Topic::Careers,
                Topic::Thesis,
                Topic::Dean,
                Topic::FullTimeInstructors,
                Topic::PartTimeInstructors,
                Topic::Instructors,
                Topic::Developers,
                Topic::Gratitude,
                Topic::Location,
                Topic::BstmCurriculum,
                Topic::Default,
            ]
        );
    }

    #[test]
    fn test_every_rule_has_all_languages() {
        for rule in rules() {
            assert!(!rule.replies.english.is_empty(), "{:?}", rule.topic);
            assert!(!rule.replies.tagalog.is_empty(), "{:?}", rule.topic);
            assert!(!rule.replies.bisaya.is_empty(), "{:?}", rule.topic);
        }
    }

    #[test]
    fn test_only_the_fallback_always_matches() {
        let always: Vec<Topic> = rules()
            .filter(|r| matches!(r.trigger, Trigger::Always))
            .map(|r| r.topic)
            .collect();
        assert_eq!(always, vec![Topic::Default]);
        assert!(FALLBACK.trigger.matches(""));
    }

    #[test]
    fn test_empty_text_hits_fallback() {
        let reply = select_response("", Language::English);
        assert_eq!(reply.topic, Topic::Default);
        assert!(!reply.text.is_empty());
    }

    #[test]
    fn test_unmatched_text_hits_fallback() {
        let reply = select_response("xyzabc123", Language::English);
        assert_eq!(reply.topic, Topic::Default);
        assert!(reply.text.starts_with("Thank you for your question!"));
    }

    #[test]
    fn test_programs_shadow_bstm_curriculum() {
        assert_eq!(topic_of("bstm curriculum"), Topic::Programs);
        assert_eq!(
            topic_of("tell me about the bstm course curriculum"),
            Topic::Programs
        );
    }

    #[test]
    fn test_bstm_curriculum_trigger_on_its_own() {
        let rule = rules()
            .find(|r| r.topic == Topic::BstmCurriculum)
            .unwrap();
        assert!(rule.trigger.matches("bstm curriculum"));
        assert!(rule.trigger.matches("bstm subject list"));
        assert!(!rule.trigger.matches("bstm"));
        assert!(!rule.trigger.matches("curriculum"));
    }

    #[test]
    fn test_full_alone_is_not_full_time() {
        assert_ne!(topic_of("full"), Topic::FullTimeInstructors);
        assert_eq!(topic_of("full"), Topic::Default);
    }

    #[test]
    fn test_full_time_instructor_variants() {
        assert_eq!(topic_of("full time instructor"), Topic::FullTimeInstructors);
        assert_eq!(topic_of("fulltime"), Topic::FullTimeInstructors);
        assert_eq!(topic_of("full-time"), Topic::FullTimeInstructors);
        assert_eq!(topic_of("instructor full"), Topic::FullTimeInstructors);
    }

    #[test]
    fn test_part_time_instructor_variants() {
        assert_eq!(topic_of("part time instructor"), Topic::PartTimeInstructors);
        assert_eq!(topic_of("parttime"), Topic::PartTimeInstructors);
        assert_eq!(topic_of("instructor part"), Topic::PartTimeInstructors);
        assert_eq!(topic_of("part"), Topic::Default);
    }

    #[test]
    fn test_generic_instructor() {
        assert_eq!(topic_of("instructor"), Topic::Instructors);
        assert_eq!(topic_of("faculty"), Topic::Instructors);
    }

    #[test]
    fn test_dean_before_developers() {
        // "who" alone is a developer question, but the dean rule comes first
        assert_eq!(topic_of("who"), Topic::Developers);
        assert_eq!(topic_of("who is the dean"), Topic::Dean);
    }

    #[test]
    fn test_greeting_catches_embedded_hi() {
        // "hi" is an unanchored substring of "this"
        assert_eq!(topic_of("is this the place"), Topic::Greeting);
    }

    #[test]
    fn test_simple_topics() {
        assert_eq!(topic_of("partner"), Topic::Partnerships);
        assert_eq!(topic_of("contest"), Topic::Events);
        assert_eq!(topic_of("ojt"), Topic::Training);
        assert_eq!(topic_of("price"), Topic::Costs);
        assert_eq!(topic_of("curriculum"), Topic::Academics);
        assert_eq!(topic_of("career"), Topic::Careers);
        assert_eq!(topic_of("research"), Topic::Thesis);
        assert_eq!(topic_of("salamat"), Topic::Gratitude);
        assert_eq!(topic_of("address"), Topic::Location);
    }

    #[test]
    fn test_reply_carries_language() {
        let reply = select_response("salamat", Language::Bisaya);
        assert_eq!(reply.language, Language::Bisaya);
        assert!(reply.text.starts_with("Walay sapayan!"));

        let reply = select_response("salamat", Language::Tagalog);
        assert!(reply.text.starts_with("Walang anuman!"));
    }

    #[test]
    fn test_selection_is_idempotent() {
        let a = select_response("what jobs can i get", Language::English);
        let b = select_response("what jobs can i get", Language::English);
        assert_eq!(a, b);
    }
}
