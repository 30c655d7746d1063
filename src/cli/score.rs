//! Score command - full pipeline against a forge URL

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use repograde::acquire::GitCloneSource;
use repograde::config::GraderConfig;
use repograde::pipeline::{Grader, ScoreResponse};
use repograde::scoring::ScoreCard;
use std::sync::Arc;
use std::time::Duration;

pub fn run(url: &str, json: bool, seed: Option<u64>) -> Result<()> {
    let config = GraderConfig::load()?;
    let client = config.build_client()?;
    let backend = client.backend().display_name();
    let model = client.model().to_string();

    let grader = Grader::new(
        Arc::new(client),
        Arc::new(GitCloneSource::new(config.forge.clone_mirror.clone())),
        config.forge.host.clone(),
    );
    // Fail on a bad URL before starting the spinner
    grader.locate(Some(url))?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(create_spinner_style());
    spinner.set_message(format!("Grading {} with {} ({})...", url, backend, model));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = grader.grade_with_rng(Some(url), &mut super::make_rng(seed));
    spinner.finish_and_clear();
    let card = result.with_context(|| format!("Failed to grade {}", url))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ScoreResponse::from(card))?);
    } else {
        print_card(url, &card);
    }
    Ok(())
}

fn create_spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn print_card(url: &str, card: &ScoreCard) {
    let record = &card.record;
    let overall = format!("{:.1}", record.overall_score);
    let overall = match record.overall_score {
        s if s >= 8.0 => style(overall).green().bold(),
        s if s >= 5.0 => style(overall).yellow().bold(),
        _ => style(overall).red().bold(),
    };

    println!("\n{} {}", style("Repository:").bold(), style(url).cyan());
    println!("{} {} / 10", style("Score:").bold(), overall);
    println!("{}\n", style(&card.comment).italic());

    let width = record.categories.keys().map(String::len).max().unwrap_or(0);
    for (name, category) in &record.categories {
        println!(
            "  {:<width$}  {:>3}  {}",
            name,
            category.score,
            style(&category.reason).dim(),
            width = width
        );
    }

    if !record.advice.is_empty() {
        println!("\n{}", style("Advice").bold().underlined());
        println!("{}", record.advice);
    }
}
