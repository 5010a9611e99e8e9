use std::collections::HashMap;

use crate::models::skill::SkillCount;
use crate::taxonomy::SkillVocabulary;
use crate::text::normalize;

pub struct SkillAggregator {
    vocabulary: SkillVocabulary,
}

impl SkillAggregator {
    pub fn new() -> Self {
        Self {
            vocabulary: SkillVocabulary::default(),
        }
    }

    pub fn with_vocabulary(vocabulary: SkillVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    pub fn count_skills(&self, requirement_texts: &[Option<String>]) -> Vec<SkillCount> {
        let combined = requirement_texts
            .iter()
            .flatten()
            .map(|text| normalize(text))
            .collect::<Vec<_>>()
            .join(" ");

        let mut counts: Vec<SkillCount> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for entry in self.vocabulary.find_iter(&combined) {
            match positions.get(entry.name.as_str()) {
                Some(&i) => counts[i].count += 1,
                None => {
                    positions.insert(entry.name.as_str(), counts.len());
                    counts.push(SkillCount {
                        name: entry.name.clone(),
                        category: entry.category,
                        count: 1,
                    });
                }
            }
        }

        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }

    pub fn aggregate_skills(&self, requirement_texts: &[Option<String>]) -> Vec<String> {
        self.count_skills(requirement_texts)
            .into_iter()
            .map(|skill| skill.name)
            .collect()
    }
}

impl Default for SkillAggregator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn aggregate_skills(requirement_texts: &[Option<String>]) -> Vec<String> {
    SkillAggregator::new().aggregate_skills(requirement_texts)
}
