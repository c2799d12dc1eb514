//! Parse command - show how a query is understood

use crate::output::{self, OutputFormat};
use anyhow::Result;
use foodshare_search::{parse_query, prepare_query, ParsedQuery, QueryAnalysis};
use owo_colors::OwoColorize;

/// Run the parse command
pub fn run(query: &str, no_correct: bool, format: OutputFormat) -> Result<()> {
    if no_correct {
        let parsed = parse_query(query);
        tracing::debug!(tokens = parsed.tokens.len(), "Parsed query without correction");
        return match format {
            OutputFormat::Json => output::print_json(&parsed),
            OutputFormat::Text => {
                print_parsed(&parsed);
                Ok(())
            }
        };
    }

    let analysis = prepare_query(query);
    tracing::debug!(
        tokens = analysis.parsed.tokens.len(),
        corrections = analysis.spelling.corrections.len(),
        "Prepared query"
    );

    match format {
        OutputFormat::Json => output::print_json(&analysis),
        OutputFormat::Text => {
            print_analysis(&analysis);
            Ok(())
        }
    }
}

fn print_analysis(analysis: &QueryAnalysis) {
    print_parsed(&analysis.parsed);

    if analysis.spelling.has_corrections {
        println!();
        println!("{}", "Corrections".bold());
        for correction in &analysis.spelling.corrections {
            println!(
                "  {} {} {}",
                correction.original.red(),
                "→".dimmed(),
                correction.corrected.green()
            );
        }
    }
}

fn print_parsed(parsed: &ParsedQuery) {
    output::header("Parsed query");
    output::field("Normalized", &parsed.normalized_text);
    output::field("Tokens", output::list(&parsed.tokens));
    output::field("Search terms", output::list(&parsed.search_terms));
    output::field("Categories", output::list(&parsed.categories));
    output::field("Dietary filters", output::list(&parsed.dietary_filters));
    output::field(
        "Location intent",
        parsed
            .location_intent
            .map_or_else(|| "-".to_string(), |intent| intent.to_string()),
    );
    output::field(
        "Time intent",
        parsed
            .time_intent
            .map_or_else(|| "-".to_string(), |intent| intent.to_string()),
    );
}
