use std::sync::Arc;
use chrono::Utc;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;

use crate::analysis::skill_aggregator::SkillAggregator;
use crate::config::PipelineConfig;
use crate::error::{Error, Result};
use crate::models::{Posting, SkillCount, SkillReport};
use crate::source::{JobSource, ListingPaginator};
use crate::text::RequirementExtractor;

pub struct SkillPipeline {
    source: Arc<dyn JobSource>,
    extractor: RequirementExtractor,
    aggregator: SkillAggregator,
    config: PipelineConfig,
}

impl SkillPipeline {
    pub fn new(source: impl JobSource + 'static, config: PipelineConfig) -> Self {
        Self::from_shared(Arc::new(source), config)
    }

    pub fn from_shared(source: Arc<dyn JobSource>, config: PipelineConfig) -> Self {
        Self {
            source,
            extractor: RequirementExtractor::new(),
            aggregator: SkillAggregator::new(),
            config,
        }
    }

    pub fn with_extractor(mut self, extractor: RequirementExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn with_aggregator(mut self, aggregator: SkillAggregator) -> Self {
        self.aggregator = aggregator;
        self
    }

    pub async fn analyze(&self, job: &str, location: &str) -> Result<SkillReport> {
        validate_query(job, location)?;

        // Step 1: Fetch posting ids; a failed listing fails the batch
        tracing::info!(
            "Fetching {} postings for '{}' in '{}'",
            self.source.name(),
            job,
            location
        );
        let paginator = ListingPaginator::new(
            self.source.as_ref(),
            self.config.listing_page_size,
            self.config.max_listing_pages,
        );
        let ids = paginator.fetch_ids(job, location).await?;
        tracing::info!("Found {} postings", ids.len());

        // Step 2: Fetch details, skipping postings that fail
        let postings = self.fetch_postings(&ids).await;
        tracing::info!("Fetched {} of {} postings", postings.len(), ids.len());

        // Step 3: Extract requirements per posting
        let requirements = self.extract_requirements(&postings);
        let with_requirements = requirements.iter().filter(|r| r.is_some()).count();

        // Step 4: Rank skills across the batch
        let skills = self.aggregator.count_skills(&requirements);
        tracing::info!(
            "Ranked {} skills from {} postings with requirements",
            skills.len(),
            with_requirements
        );

        Ok(SkillReport {
            job: job.to_string(),
            location: location.to_string(),
            postings_listed: ids.len(),
            postings_analyzed: postings.len(),
            postings_with_requirements: with_requirements,
            skills,
            generated_at: Utc::now(),
        })
    }

    pub fn rank_postings(&self, postings: &[Posting]) -> Vec<SkillCount> {
        let requirements = self.extract_requirements(postings);
        self.aggregator.count_skills(&requirements)
    }

    fn extract_requirements(&self, postings: &[Posting]) -> Vec<Option<String>> {
        postings
            .iter()
            .map(|posting| {
                let requirements = self.extractor.extract(posting.summary.as_deref());
                if requirements.is_none() {
                    tracing::debug!("No requirement sentences in posting {}", posting.id);
                }
                requirements
            })
            .collect()
    }

    async fn fetch_postings(&self, ids: &[String]) -> Vec<Posting> {
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency_limit.max(1)));

        let pb = if self.config.show_progress {
            let pb = ProgressBar::new(ids.len() as u64);
            if let Ok(style) = ProgressStyle::default_bar().template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} postings",
            ) {
                pb.set_style(style.progress_chars("#>-"));
            }
            pb
        } else {
            ProgressBar::hidden()
        };

        let detail_futures = ids.iter().map(|id| {
            let source = self.source.clone();
            let sem = semaphore.clone();
            let pb = pb.clone();

            async move {
                let _permit = sem.acquire().await.ok()?;

                let result = source.fetch_detail(id).await;
                pb.inc(1);

                match result {
                    Ok(posting) => {
                        warn_missing_fields(&posting);
                        Some(posting)
                    }
                    Err(e) => {
                        tracing::warn!("Skipping posting {}: {}", id, e);
                        None
                    }
                }
            }
        });

        // join_all keeps listing order regardless of completion order
        let results = join_all(detail_futures).await;
        pb.finish_with_message("Fetched all postings");

        results.into_iter().flatten().collect()
    }
}

pub fn validate_query(job: &str, location: &str) -> Result<()> {
    let mut missing = Vec::new();
    if job.trim().is_empty() {
        missing.push("job_name");
    }
    if location.trim().is_empty() {
        missing.push("location");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingParameters(missing))
    }
}

fn warn_missing_fields(posting: &Posting) {
    let missing: Vec<&str> = [
        ("title", posting.title.is_none()),
        ("company", posting.company.is_none()),
        ("summary", posting.summary.is_none()),
    ]
    .iter()
    .filter(|(_, absent)| *absent)
    .map(|(field, _)| *field)
    .collect();

    if !missing.is_empty() {
        tracing::warn!(
            "Posting {} is missing fields: {}",
            posting.id,
            missing.join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct StubSource {
        ids: Vec<String>,
        details: HashMap<String, Posting>,
        delays_ms: HashMap<String, u64>,
        fail_listing: bool,
        listing_calls: AtomicUsize,
        detail_calls: AtomicUsize,
    }

    impl StubSource {
        fn with_postings(postings: Vec<Posting>) -> Self {
            Self {
                ids: postings.iter().map(|p| p.id.clone()).collect(),
                details: postings.into_iter().map(|p| (p.id.clone(), p)).collect(),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl JobSource for StubSource {
        async fn fetch_listing(&self, _: &str, _: &str, offset: u32) -> Result<Vec<String>> {
            self.listing_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_listing {
                return Err(Error::ListingFetch(503));
            }
            if offset > 0 {
                return Ok(Vec::new());
            }
            Ok(self.ids.clone())
        }

        async fn fetch_detail(&self, posting_id: &str) -> Result<Posting> {
            self.detail_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(ms) = self.delays_ms.get(posting_id) {
                tokio::time::sleep(std::time::Duration::from_millis(*ms)).await;
            }
            self.details
                .get(posting_id)
                .cloned()
                .ok_or_else(|| Error::DetailFetch {
                    id: posting_id.to_string(),
                    status: 404,
                })
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    #[tokio::test]
    async fn test_single_posting_end_to_end() {
        let posting = Posting::new("1")
            .with_title("Engineer")
            .with_company("Acme")
            .with_summary("Must have experience with React and Node. We are friendly.");
        let pipeline =
            SkillPipeline::new(StubSource::with_postings(vec![posting]), PipelineConfig::default());

        let report = pipeline.analyze("engineer", "remote").await.unwrap();

        assert_eq!(report.ranked_skills(), vec!["react", "node"]);
        assert_eq!(report.postings_listed, 1);
        assert_eq!(report.postings_analyzed, 1);
        assert_eq!(report.postings_with_requirements, 1);
        assert_eq!(report.job, "engineer");
        assert_eq!(report.location, "remote");
    }

    #[tokio::test]
    async fn test_missing_location_never_fetches() {
        let source = Arc::new(StubSource::default());
        let pipeline = SkillPipeline::from_shared(source.clone(), PipelineConfig::default());

        let err = pipeline.analyze("engineer", "").await.unwrap_err();

        assert!(matches!(err, Error::MissingParameters(ref m) if m == &vec!["location"]));
        assert_eq!(source.listing_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_listing_failure_aborts_batch() {
        let source = Arc::new(StubSource {
            fail_listing: true,
            ..Default::default()
        });
        let pipeline = SkillPipeline::from_shared(source.clone(), PipelineConfig::default());

        let err = pipeline.analyze("engineer", "berlin").await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to fetch jobs list: 503");
        assert_eq!(source.detail_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failed_detail_is_skipped() {
        let mut source = StubSource::with_postings(vec![
            Posting::new("1").with_summary("Skills: python and docker."),
            Posting::new("3").with_summary("Experience with docker required."),
        ]);
        source.ids = vec!["1".to_string(), "2".to_string(), "3".to_string()];
        let pipeline = SkillPipeline::new(source, PipelineConfig::default());

        let report = pipeline.analyze("devops", "paris").await.unwrap();

        assert_eq!(report.postings_listed, 3);
        assert_eq!(report.postings_analyzed, 2);
        assert_eq!(report.ranked_skills(), vec!["docker", "python"]);
    }

    #[tokio::test]
    async fn test_posting_without_summary_contributes_nothing() {
        let source = StubSource::with_postings(vec![
            Posting::new("1").with_title("Data Engineer"),
            Posting::new("2").with_summary("Looking for sql and aws skills. Python is a plus."),
        ]);
        let pipeline = SkillPipeline::new(source, PipelineConfig::default());

        let report = pipeline.analyze("data engineer", "london").await.unwrap();

        assert_eq!(report.postings_analyzed, 2);
        assert_eq!(report.postings_with_requirements, 1);
        // "python" sits in a sentence without trigger keywords
        assert_eq!(report.ranked_skills(), vec!["sql", "aws"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_fetch_keeps_listing_order() {
        let skills = ["java", "kotlin", "swift", "flutter"];
        let postings: Vec<Posting> = skills
            .iter()
            .enumerate()
            .map(|(i, skill)| {
                Posting::new(i.to_string()).with_summary(format!("Experience with {}.", skill))
            })
            .collect();
        let mut source = StubSource::with_postings(postings);
        // Earlier postings finish last.
        source.delays_ms = (0..skills.len())
            .map(|i| (i.to_string(), (skills.len() - i) as u64 * 100))
            .collect();
        let config = PipelineConfig {
            concurrency_limit: 4,
            ..Default::default()
        };
        let pipeline = SkillPipeline::new(source, config);

        let report = pipeline.analyze("mobile", "remote").await.unwrap();

        assert_eq!(report.postings_analyzed, 4);
        assert_eq!(report.ranked_skills(), skills.to_vec());
        assert!(report.skills.iter().all(|s| s.count == 1));
    }

    #[test]
    fn test_rank_postings_without_fetching() {
        let pipeline = SkillPipeline::new(StubSource::default(), PipelineConfig::default());
        let postings = vec![
            Posting::new("a").with_summary("Requirements: go and git. Nice office."),
            Posting::new("b").with_summary("You should have git experience."),
            Posting::new("c"),
        ];

        let ranked: Vec<String> = pipeline
            .rank_postings(&postings)
            .into_iter()
            .map(|s| s.name)
            .collect();

        assert_eq!(ranked, vec!["git", "go"]);
    }

    #[test]
    fn test_validate_query_reports_all_missing() {
        let err = validate_query(" ", "").unwrap_err();
        assert!(matches!(err, Error::MissingParameters(ref m) if m == &vec!["job_name", "location"]));
        assert!(validate_query("rust developer", "zurich").is_ok());
    }
}
