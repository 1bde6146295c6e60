//! Chat command handler.
//!
//! Interactive session over stdin. The query history lives only in this
//! process; the pipeline never sees it.

use super::ask::{reported_latency, render_outcome, seeded_rng};
use clap::Args;
use futures::stream::{self, StreamExt};
use honeyscope_core::{config::AppConfig, AppResult};
use honeyscope_pipeline::{AskOutcome, Pipeline};
use std::collections::VecDeque;
use std::io::Write;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Number of queries kept in the session history.
pub const HISTORY_LIMIT: usize = 20;

/// Start an interactive session
#[derive(Args, Debug)]
pub struct ChatCommand {
    /// Number of focus points to show
    #[arg(short, long)]
    pub depth: Option<usize>,

    /// Seed for the variety pick (reproducible answers)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Most recent queries, newest first.
#[derive(Debug, Default)]
pub struct History {
    entries: VecDeque<String>,
}

impl History {
    pub fn push(&mut self, query: &str) {
        self.entries.push_front(query.to_string());
        self.entries.truncate(HISTORY_LIMIT);
    }

    /// Remember the query of an answered outcome. Rejections are not kept.
    pub fn record(&mut self, outcome: &AskOutcome) {
        if let AskOutcome::Answered(answer) = outcome {
            self.push(&answer.query);
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One line of user input, interpreted.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    ShowHistory,
    Blank,
    Query(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    match line.trim() {
        "" => Input::Blank,
        ":quit" | ":q" | ":exit" => Input::Quit,
        ":history" => Input::ShowHistory,
        query => Input::Query(query),
    }
}

impl ChatCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing chat command");

        let pipeline = Pipeline::from_config(config)?;
        let depth = self.depth.unwrap_or(config.answer.focus_depth);
        let mut rng = seeded_rng(self.seed);
        let mut history = History::default();

        println!("Ask about honey or beekeeping. Type :history to list recent queries, :quit to leave.");
        prompt()?;

        let reader = BufReader::new(tokio::io::stdin()).lines();
        let mut lines = Box::pin(stream::unfold(reader, |mut reader| async move {
            match reader.next_line().await {
                Ok(Some(line)) => Some((Ok(line), reader)),
                Ok(None) => None,
                Err(e) => Some((Err(e), reader)),
            }
        }));

        while let Some(line) = lines.next().await {
            let line = line?;
            match parse_input(&line) {
                Input::Quit => break,
                Input::Blank => {}
                Input::ShowHistory => {
                    if history.is_empty() {
                        println!("(no queries yet)");
                    }
                    for (idx, query) in history.entries().enumerate() {
                        println!("{:>2}. {}", idx + 1, query);
                    }
                }
                Input::Query(query) => {
                    let start = Instant::now();
                    let outcome = pipeline.ask_with_depth(query, depth, &mut rng).await;
                    history.record(&outcome);
                    print!("{}", render_outcome(&outcome));
                    println!("({} ms)", reported_latency(start.elapsed()));
                }
            }
            prompt()?;
        }

        tracing::debug!("Chat session ended after {} queries", history.len());
        Ok(())
    }
}

fn prompt() -> AppResult<()> {
    print!("\n> ");
    std::io::stdout().flush()?;
    Ok(())
}
