pub mod config;
pub mod error;
pub mod models;
pub mod text;
pub mod taxonomy;
pub mod analysis;
pub mod source;
pub mod linkedin;
pub mod web;

pub use config::{Config, PipelineConfig};
pub use error::{Error, Result};
pub use analysis::{aggregate_skills, SkillAggregator, SkillPipeline};
pub use linkedin::LinkedInClient;
pub use source::JobSource;
pub use taxonomy::SkillVocabulary;
pub use text::{extract_requirements, normalize, RequirementExtractor};
