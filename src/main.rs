use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jobskills::models::SkillReport;
use jobskills::web::{start_web_server, AppState};
use jobskills::{Config, LinkedInClient, PipelineConfig, SkillPipeline};

#[derive(Parser, Debug)]
#[command(name = "jobskills")]
#[command(version)]
#[command(about = "Rank the technical skills job postings ask for")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the skills endpoint over HTTP
    Serve {
        /// Port to listen on (defaults to PORT or 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Analyze postings for one job title and location
    Analyze(AnalyzeArgs),
}

#[derive(clap::Args, Debug)]
struct AnalyzeArgs {
    /// Job title to search for
    #[arg(short, long)]
    job_name: String,

    /// Location to search in
    #[arg(short, long)]
    location: String,

    /// Output format (json, text, markdown)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Listing pages to read
    #[arg(long)]
    max_pages: Option<u32>,

    /// Concurrent posting fetches
    #[arg(long)]
    concurrency: Option<usize>,

    /// Only show the N most mentioned skills
    #[arg(long)]
    top: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("jobskills=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let client = LinkedInClient::new(&config)?;

    match cli.command {
        Command::Serve { port } => {
            let pipeline = SkillPipeline::new(client, PipelineConfig::from(&config));
            let port = port.unwrap_or(config.port);

            tracing::info!("Starting jobskills API v{}", env!("CARGO_PKG_VERSION"));
            start_web_server(AppState::new(pipeline), port).await?;
        }
        Command::Analyze(args) => {
            let mut pipeline_config = PipelineConfig::from(&config);
            pipeline_config.show_progress = true;
            if let Some(max_pages) = args.max_pages {
                pipeline_config.max_listing_pages = max_pages;
            }
            if let Some(concurrency) = args.concurrency {
                pipeline_config.concurrency_limit = concurrency.max(1);
            }

            let pipeline = SkillPipeline::new(client, pipeline_config);

            tracing::info!(
                "Starting analysis for '{}' in '{}'",
                args.job_name,
                args.location
            );
            let mut report = pipeline.analyze(&args.job_name, &args.location).await?;

            if let Some(top) = args.top {
                report.skills.truncate(top);
            }

            output_report(&report, &args)?;
        }
    }

    Ok(())
}

fn output_report(report: &SkillReport, args: &AnalyzeArgs) -> anyhow::Result<()> {
    let output = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(report)?,
        "markdown" => format_markdown(report),
        _ => format_text(report),
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_text(report: &SkillReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n=== Skills for: {} in {} ===\n\n",
        report.job, report.location
    ));
    output.push_str(&format!("Postings listed: {}\n", report.postings_listed));
    output.push_str(&format!("Postings analyzed: {}\n", report.postings_analyzed));
    output.push_str(&format!(
        "Postings with requirements: {}\n\n",
        report.postings_with_requirements
    ));

    if report.skills.is_empty() {
        output.push_str("No skills found.\n");
    } else {
        output.push_str("Top Skills:\n");
        for (rank, skill) in report.skills.iter().enumerate() {
            output.push_str(&format!(
                "  {:>2}. {} ({}): {} mention{}\n",
                rank + 1,
                skill.name,
                skill.category,
                skill.count,
                if skill.count == 1 { "" } else { "s" }
            ));
        }
    }

    output.push_str(&format!(
        "\nGenerated on: {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

fn format_markdown(report: &SkillReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "# Skills for {} in {}\n\n",
        report.job, report.location
    ));

    output.push_str("## Summary\n\n");
    output.push_str("| Metric | Value |\n|--------|-------|\n");
    output.push_str(&format!("| Postings Listed | {} |\n", report.postings_listed));
    output.push_str(&format!(
        "| Postings Analyzed | {} |\n",
        report.postings_analyzed
    ));
    output.push_str(&format!(
        "| Postings With Requirements | {} |\n",
        report.postings_with_requirements
    ));

    output.push_str("\n## Top Skills\n\n");
    output.push_str("| Rank | Skill | Category | Mentions |\n");
    output.push_str("|------|-------|----------|----------|\n");

    for (rank, skill) in report.skills.iter().enumerate() {
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            rank + 1,
            skill.name,
            skill.category,
            skill.count
        ));
    }

    output.push_str(&format!(
        "\n---\n*Generated on {}*\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
