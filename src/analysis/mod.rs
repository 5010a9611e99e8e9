pub mod pipeline;
pub mod skill_aggregator;

pub use pipeline::{validate_query, SkillPipeline};
pub use skill_aggregator::{aggregate_skills, SkillAggregator};
