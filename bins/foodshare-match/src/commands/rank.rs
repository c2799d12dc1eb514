//! Rank command - order listings by relevance to a query

use crate::input::read_json;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use chrono::Utc;
use foodshare_search::{
    prepare_query, RankedResult, RankingConfig, RelevanceRanker, SearchUserContext, SearchableItem,
};
use foodshare_telemetry::{metrics, Timer};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct RankOutput<'a> {
    query: &'a str,
    corrected_query: &'a str,
    results: &'a [RankedResult],
}

/// Run the rank command
pub fn run(
    query: &str,
    items_path: &Path,
    context_path: Option<&Path>,
    limit: Option<usize>,
    config: &RankingConfig,
    format: OutputFormat,
) -> Result<()> {
    let items: Vec<SearchableItem> = read_json(items_path, "items")?;
    let context = match context_path {
        Some(path) => read_json(path, "search context")?,
        None => SearchUserContext::anonymous(Utc::now()),
    };

    let analysis = prepare_query(query);
    tracing::info!(
        items = items.len(),
        terms = analysis.parsed.search_terms.len(),
        "Ranking items"
    );

    let timer = Timer::start("rank_ms");
    let mut results = RelevanceRanker::new(config.clone()).rank(&analysis.parsed, &items, &context);
    let elapsed = timer.stop();
    metrics().increment_by("items_ranked", items.len() as u64);

    if let Some(limit) = limit {
        results.truncate(limit);
    }
    tracing::info!(
        returned = results.len(),
        duration_ms = elapsed.as_millis() as u64,
        "Ranking finished"
    );

    match format {
        OutputFormat::Json => output::print_json(&RankOutput {
            query,
            corrected_query: &analysis.spelling.corrected_query,
            results: &results,
        }),
        OutputFormat::Text => {
            print_results(&analysis.spelling.corrected_query, &results);
            Ok(())
        }
    }
}

fn print_results(corrected_query: &str, results: &[RankedResult]) {
    output::header(&format!("Results for \"{corrected_query}\""));

    if results.is_empty() {
        println!("  {}", "No items".dimmed());
        return;
    }

    for (position, result) in results.iter().enumerate() {
        println!(
            "{:>3}. {:>7} {} {}",
            position + 1,
            format!("{:.3}", result.total).cyan(),
            result.item.title.bold(),
            format!("({})", result.item.id).dimmed()
        );
        if !result.matched_terms.is_empty() {
            println!("          matched: {}", output::list(&result.matched_terms));
        }
    }

    println!();
    println!("{}", output::format_count(results.len(), "result", "results"));
}
