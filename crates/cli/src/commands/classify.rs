//! Classify command handler.
//!
//! Shows the relevance verdict and gate decision without retrieving anything.

use clap::Args;
use honeyscope_core::AppResult;
use honeyscope_pipeline::{GateDecision, RelevanceClassifier};

/// Check whether a query is in scope
#[derive(Args, Debug)]
pub struct ClassifyCommand {
    /// The query to classify
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ClassifyCommand {
    pub async fn execute(&self) -> AppResult<()> {
        tracing::info!("Executing classify command");

        let query = self.query.join(" ");
        let classifier = RelevanceClassifier::default();
        let decision = classifier.gate(&query);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&decision)?);
        } else {
            print!("{}", render_decision(&decision));
        }

        Ok(())
    }
}

fn render_decision(decision: &GateDecision) -> String {
    let verdict = decision.verdict();
    let status = match decision {
        GateDecision::Accept { .. } => "accepted",
        GateDecision::SoftReject { .. } => "soft-rejected",
        GateDecision::HardReject { .. } => "rejected",
    };

    let mut out = format!(
        "Decision:   {}\nRelated:    {}\nConfidence: {:.2}\nReason:     {}\n",
        status, verdict.is_related, verdict.confidence, verdict.reason
    );
    if let Some(message) = decision.message() {
        out.push_str(&format!("\n{}\n", message));
    }
    out
}
