pub mod vocabulary;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::error::Result;
use crate::models::skill::SkillCategory;

pub use vocabulary::BUILTIN_SKILLS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: String,
    pub category: SkillCategory,
}

#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    entries: Vec<SkillEntry>,
    index: HashMap<String, usize>,
    // None for an empty vocabulary, which matches nothing.
    matcher: Option<Regex>,
}

static BUILTIN: Lazy<SkillVocabulary> = Lazy::new(|| {
    SkillVocabulary::from_entries(BUILTIN_SKILLS.iter().copied())
        .expect("built-in skill vocabulary compiles")
});

impl SkillVocabulary {
    pub fn builtin() -> &'static SkillVocabulary {
        &BUILTIN
    }

    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = (&'a str, SkillCategory)>,
    ) -> Result<Self> {
        let mut vocabulary_entries = Vec::new();
        let mut index = HashMap::new();

        for (name, category) in entries {
            let name = name.trim().to_lowercase();
            if name.is_empty() || index.contains_key(&name) {
                continue;
            }
            index.insert(name.clone(), vocabulary_entries.len());
            vocabulary_entries.push(SkillEntry { name, category });
        }

        let matcher = if vocabulary_entries.is_empty() {
            None
        } else {
            let alternation = vocabulary_entries
                .iter()
                .map(|entry| format!("({})", token_pattern(&entry.name)))
                .collect::<Vec<_>>()
                .join("|");

            Some(RegexBuilder::new(&alternation).case_insensitive(true).build()?)
        };

        Ok(Self {
            entries: vocabulary_entries,
            index,
            matcher,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SkillEntry] {
        &self.entries
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&name.to_lowercase())
    }

    pub fn get(&self, name: &str) -> Option<&SkillEntry> {
        self.index
            .get(&name.to_lowercase())
            .map(|&i| &self.entries[i])
    }

    /// Non-overlapping matches scanning left to right. At a given position the
    /// earliest-listed entry that matches wins.
    pub fn find_iter<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a SkillEntry> + 'a {
        self.matcher
            .iter()
            .flat_map(move |matcher| matcher.captures_iter(text))
            .filter_map(move |caps| {
                caps.iter()
                    .skip(1)
                    .position(|group| group.is_some())
                    .map(|i| &self.entries[i])
            })
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        SkillVocabulary::builtin().clone()
    }
}

/// Word boundaries are only asserted on sides that end in a word character,
/// so tokens such as "c++", "c#" and ".net" can still match.
fn token_pattern(token: &str) -> String {
    let escaped = regex::escape(token);
    let starts_word = token.chars().next().map_or(false, is_word_char);
    let ends_word = token.chars().last().map_or(false, is_word_char);

    format!(
        "{}{}{}",
        if starts_word { r"\b" } else { "" },
        escaped,
        if ends_word { r"\b" } else { "" }
    )
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
