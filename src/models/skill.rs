use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Language,
    Framework,
    Library,
    Tool,
    Domain,
    Practice,
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkillCategory::Language => write!(f, "Language"),
            SkillCategory::Framework => write!(f, "Framework"),
            SkillCategory::Library => write!(f, "Library"),
            SkillCategory::Tool => write!(f, "Tool"),
            SkillCategory::Domain => write!(f, "Domain"),
            SkillCategory::Practice => write!(f, "Practice"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCount {
    pub name: String,
    pub category: SkillCategory,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillReport {
    pub job: String,
    pub location: String,
    pub postings_listed: usize,
    pub postings_analyzed: usize,
    pub postings_with_requirements: usize,
    /// Most mentioned first; ties keep first-encounter order.
    pub skills: Vec<SkillCount>,
    pub generated_at: DateTime<Utc>,
}

impl SkillReport {
    pub fn ranked_skills(&self) -> Vec<String> {
        self.skills.iter().map(|s| s.name.clone()).collect()
    }
}
