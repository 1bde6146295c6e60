//! Papers command handler.
//!
//! Without a query, prints the default paper shelf. With one, runs the
//! quota-balanced selection against the research corpus.

use clap::Args;
use honeyscope_core::{config::AppConfig, AppResult};
use honeyscope_pipeline::authority::SourceKind;
use honeyscope_pipeline::{
    Corpus, PaperOrigin, PaperSelection, PaperSelector, SourceDocument, SourceRanker,
};

/// Number of papers on the default shelf.
pub const SHELF_SIZE: usize = 3;

/// List research papers
#[derive(Args, Debug)]
pub struct PapersCommand {
    /// Optional research query
    pub query: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl PapersCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing papers command");

        let corpus = Corpus::shared();
        let query = self.query.join(" ");

        let selection = if query.trim().is_empty() {
            PaperSelection {
                origin: PaperOrigin::Corpus,
                documents: corpus.paper_shelf(SHELF_SIZE),
            }
        } else {
            let fallback = SourceRanker::new(config.answer.source_cap).rank(&query, &corpus.sources);
            PaperSelector::new(corpus, config.answer.paper_limit).select(&query, &fallback)
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&selection)?);
        } else {
            print!("{}", render_selection(&selection));
        }

        Ok(())
    }
}

fn render_selection(selection: &PaperSelection) -> String {
    if selection.origin == PaperOrigin::NotRequested {
        return "No research intent in the query. Try words like \"paper\", \"study\" or \"report\".\n"
            .to_string();
    }

    selection
        .documents
        .iter()
        .enumerate()
        .map(|(idx, doc)| render_paper(idx + 1, doc, selection.origin))
        .collect()
}

fn render_paper(number: usize, doc: &SourceDocument, origin: PaperOrigin) -> String {
    let label = match origin {
        PaperOrigin::Corpus => SourceKind::of(doc).label(),
        _ => "Web Source",
    };
    format!(
        "{}. {}\n   {} ({})\n   {}\n\n",
        number, doc.title, label, doc.hostname, doc.url
    )
}
