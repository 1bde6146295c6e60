//! Ask command handler.
//!
//! Runs one query through the pipeline and prints the answer.

use clap::Args;
use honeyscope_core::{config::AppConfig, AppError, AppResult};
use honeyscope_pipeline::{Answer, AskOutcome, GateDecision, Pipeline};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

/// Latency floor reported to users, in milliseconds.
pub const MIN_REPORTED_LATENCY_MS: u128 = 60;

/// Ask a honey or beekeeping question
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Number of focus points to show
    #[arg(short, long)]
    pub depth: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Seed for the variety pick (reproducible answers)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl AskCommand {
    /// Execute the ask command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");
        tracing::debug!("Ask command options: {:?}", self);

        let query = self.query.join(" ");
        if query.trim().is_empty() {
            return Err(AppError::Config("No query provided".to_string()));
        }

        let pipeline = Pipeline::from_config(config)?;
        let depth = self.depth.unwrap_or(config.answer.focus_depth);
        let mut rng = seeded_rng(self.seed);

        let start = Instant::now();
        let outcome = pipeline.ask_with_depth(&query, depth, &mut rng).await;
        let latency = reported_latency(start.elapsed());

        if self.json {
            println!("{}", outcome_json(&query, &outcome, latency)?);
        } else {
            print!("{}", render_outcome(&outcome));
        }

        Ok(())
    }
}

/// RNG for one invocation: seeded when asked, entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Elapsed time in ms, never below [`MIN_REPORTED_LATENCY_MS`].
pub fn reported_latency(elapsed: Duration) -> u128 {
    elapsed.as_millis().max(MIN_REPORTED_LATENCY_MS)
}

/// Human-readable rendering of an outcome.
pub fn render_outcome(outcome: &AskOutcome) -> String {
    match outcome {
        AskOutcome::Rejected(decision) => render_rejection(decision),
        AskOutcome::Answered(answer) => render_answer(answer),
    }
}

fn render_rejection(decision: &GateDecision) -> String {
    format!("{}\n", decision.message().unwrap_or_default())
}

fn render_answer(answer: &Answer) -> String {
    let mut out = String::new();
    out.push_str(&answer.narrative);
    out.push_str("\n\n**Focus Points:**\n");
    for point in &answer.focus_points {
        out.push_str(&format!("- {}\n", point));
    }

    if !answer.summary.sources.is_empty() {
        out.push_str(&format!(
            "\n**Sources ({}):**\n",
            answer.summary.provider.as_str()
        ));
        for source in &answer.summary.sources {
            out.push_str(&format!(
                "{}. {} ({})\n",
                source.position, source.title, source.url
            ));
        }
    }

    if let Some(profile) = &answer.profile {
        out.push_str(&format!(
            "\n**{} ({})** {}\n",
            profile.name, profile.region, profile.price_per_kg
        ));
        out.push_str(&format!("- Condition: {}\n", profile.condition));
        out.push_str(&format!("- Atmosphere: {}\n", profile.atmosphere));
        out.push_str(&format!("- Marketing: {}\n", profile.marketing_tip));
        out.push_str(&format!("- Inventory: {}\n", profile.inventory));
    }
    out
}

/// Structured JSON rendering of an outcome.
pub fn outcome_json(query: &str, outcome: &AskOutcome, latency_ms: u128) -> AppResult<String> {
    let output = match outcome {
        AskOutcome::Rejected(decision) => serde_json::json!({
            "query": query,
            "rejected": true,
            "decision": decision,
            "latencyMs": latency_ms,
        }),
        AskOutcome::Answered(answer) => serde_json::json!({
            "query": answer.query,
            "rejected": false,
            "provider": answer.summary.provider,
            "category": answer.category,
            "narrative": answer.narrative,
            "focusPoints": answer.focus_points,
            "sources": answer.summary.sources,
            "papers": answer.summary.papers,
            "profile": answer.profile,
            "latencyMs": latency_ms,
        }),
    };

    Ok(serde_json::to_string_pretty(&output)?)
}
