use std::sync::Arc;

use crate::text::normalizer::normalize;
use crate::text::sentences::{shared_tokenizer, SentenceTokenizer};

pub const TRIGGER_KEYWORDS: &[&str] = &[
    "requirement",
    "qualification",
    "must have",
    "need to",
    "should have",
    "skills",
    "experience",
    "looking for",
];

pub struct RequirementExtractor {
    tokenizer: Arc<dyn SentenceTokenizer>,
}

impl RequirementExtractor {
    pub fn new() -> Self {
        Self {
            tokenizer: shared_tokenizer(),
        }
    }

    pub fn with_tokenizer(tokenizer: Arc<dyn SentenceTokenizer>) -> Self {
        Self { tokenizer }
    }

    pub fn extract(&self, summary: Option<&str>) -> Option<String> {
        let text = normalize(summary?);

        let requirements: Vec<&str> = self
            .tokenizer
            .split(&text)
            .into_iter()
            .filter(|sentence| is_requirement(sentence))
            .collect();

        if requirements.is_empty() {
            None
        } else {
            Some(requirements.join(" "))
        }
    }
}

impl Default for RequirementExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn is_requirement(sentence: &str) -> bool {
    let lower = sentence.to_lowercase();
    TRIGGER_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

pub fn extract_requirements(summary: Option<&str>) -> Option<String> {
    RequirementExtractor::new().extract(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_only_requirement_sentences() {
        let summary = "Must have 5 years experience. We are a fun team.";
        assert_eq!(
            extract_requirements(Some(summary)),
            Some("must have 5 years experience.".to_string())
        );
    }

    #[test]
    fn test_absent_summary_yields_none() {
        assert_eq!(extract_requirements(None), None);
    }

    #[test]
    fn test_no_qualifying_sentence_yields_none_not_empty() {
        let summary = "We are a fun team. Free snacks every Friday!";
        assert_eq!(extract_requirements(Some(summary)), None);
    }

    #[test]
    fn test_preserves_sentence_order() {
        let summary = "<p>Looking for a backend developer.</p> Great office. \
                       <p>Strong SQL skills required.</p> Need to know Git.";
        assert_eq!(
            extract_requirements(Some(summary)),
            Some(
                "looking for a backend developer. strong sql skills required. need to know git."
                    .to_string()
            )
        );
    }

    #[test]
    fn test_keyword_match_is_substring_based() {
        // "qualifications" and "requirements" contain the singular triggers.
        let summary = "Qualifications include Docker. Requirements: Go.";
        assert_eq!(
            extract_requirements(Some(summary)),
            Some("qualifications include docker. requirements: go.".to_string())
        );
    }

    struct OneSentence;

    impl SentenceTokenizer for OneSentence {
        fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
            vec![text]
        }
    }

    #[test]
    fn test_injected_tokenizer_is_used() {
        let extractor = RequirementExtractor::with_tokenizer(Arc::new(OneSentence));
        let summary = "We are friendly. Must have Rust.";
        assert_eq!(
            extractor.extract(Some(summary)),
            Some("we are friendly. must have rust.".to_string())
        );
    }
}
