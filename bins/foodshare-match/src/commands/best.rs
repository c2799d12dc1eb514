//! Match command - recommend the best candidates for a searcher

use crate::input::read_json;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use foodshare_matching::{
    find_best_matches, CriteriaPreset, MatchCandidate, MatchEntry, MatchingContext, ScoringPolicy,
};
use foodshare_telemetry::{metrics, Timer};
use owo_colors::OwoColorize;
use std::path::Path;

/// Run the match command
pub fn run(
    candidates_path: &Path,
    context_path: &Path,
    preset: CriteriaPreset,
    max_results: usize,
    policy: &ScoringPolicy,
    format: OutputFormat,
) -> Result<()> {
    let candidates: Vec<MatchCandidate> = read_json(candidates_path, "candidates")?;
    let context: MatchingContext = read_json(context_path, "matching context")?;

    tracing::info!(candidates = candidates.len(), %preset, "Scoring candidates");

    let timer = Timer::start("match_ms");
    let entries = find_best_matches(&candidates, &context, preset, max_results, policy);
    let elapsed = timer.stop();
    metrics().increment_by("candidates_scored", candidates.len() as u64);

    tracing::info!(
        returned = entries.len(),
        duration_ms = elapsed.as_millis() as u64,
        "Matching finished"
    );

    match format {
        OutputFormat::Json => output::print_json(&entries),
        OutputFormat::Text => {
            print_entries(preset, &entries);
            Ok(())
        }
    }
}

fn print_entries(preset: CriteriaPreset, entries: &[MatchEntry]) {
    output::header(&format!("Best matches ({preset})"));

    if entries.is_empty() {
        println!("  {}", "No candidate passed the minimum score".dimmed());
        return;
    }

    for (position, entry) in entries.iter().enumerate() {
        let marker = if entry.score.passes_threshold {
            "✓".green().to_string()
        } else {
            "·".dimmed().to_string()
        };
        println!(
            "{:>3}. {} {:>3}% {} {}",
            position + 1,
            marker,
            entry.score.percentage_score,
            entry.candidate_id.bold(),
            format!("{:.2} km", entry.distance_km).dimmed()
        );
    }

    println!();
    println!("{}", output::format_count(entries.len(), "match", "matches"));
}
