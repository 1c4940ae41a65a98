//! Post Wizard - Interactive bounty creation
//!
//! Walks a requester through posting a bounty, with optional AI refinement
//! of the data requirements.

use anyhow::Result;
use console::style;
use data_bounty::types::BountyDraft;
use dialoguer::{theme::ColorfulTheme, Confirm, Editor, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::client::MarketClient;

pub const CATEGORIES: &[&str] = &[
    "E-commerce",
    "Real Estate",
    "Finance",
    "Social Media",
    "Academic",
    "Machine Learning",
];

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn check_budget(input: f64, min_reward: f64) -> Result<(), String> {
    if !input.is_finite() || input < min_reward {
        return Err(format!("Budget must be at least ${}", min_reward));
    }
    Ok(())
}

pub async fn run_post_wizard(client: &MarketClient) -> Result<()> {
    let user = client.whoami().await?;
    let min_reward = client.config().await?.min_reward;
    crate::print_banner();
    println!("{}", style("  Post New Data Bounty").cyan().bold());
    println!(
        "  {}",
        style(format!("Posting as {} ({})", user.name, user.role)).dim()
    );
    println!();

    let theme = ColorfulTheme::default();

    // Step 1: Title and category
    println!("  {}", style("Step 1: Basics").bold());
    let title: String = Input::with_theme(&theme)
        .with_prompt("  Bounty title")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                return Err("Title cannot be empty");
            }
            Ok(())
        })
        .interact_text()?;

    let category_index = Select::with_theme(&theme)
        .with_prompt("  Category")
        .items(CATEGORIES)
        .default(0)
        .interact()?;
    let category = CATEGORIES[category_index].to_string();

    // Step 2: Budget
    println!();
    println!("  {}", style("Step 2: Budget").bold());
    let reward: f64 = Input::with_theme(&theme)
        .with_prompt(format!("  Total budget ($, min {})", min_reward))
        .validate_with(move |input: &f64| check_budget(*input, min_reward))
        .interact_text()?;

    // Step 3: Requirements
    println!();
    println!("  {}", style("Step 3: Detailed Data Requirements").bold());
    let mut description: String = Input::with_theme(&theme)
        .with_prompt("  Requirements")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                return Err("Requirements cannot be empty");
            }
            Ok(())
        })
        .interact_text()?;

    let refine = Confirm::with_theme(&theme)
        .with_prompt("  Auto-refine the requirements with AI?")
        .default(false)
        .interact()?;
    if refine {
        let pb = spinner("Refining...");
        let refined = client.refine(&description).await;
        pb.finish_and_clear();
        match refined {
            Ok(text) if text != description => {
                println!();
                println!("{}", text);
                println!();
                let keep = Confirm::with_theme(&theme)
                    .with_prompt("  Use the refined requirements?")
                    .default(true)
                    .interact()?;
                if keep {
                    description = match Editor::new().edit(&text)? {
                        Some(edited) if !edited.trim().is_empty() => edited,
                        _ => text,
                    };
                }
            }
            Ok(_) => println!("  {} Refinement unavailable, keeping your text", style("⚠").yellow()),
            Err(e) => println!("  {} Refinement failed: {}", style("⚠").yellow(), e),
        }
    }

    let tags: String = Input::with_theme(&theme)
        .with_prompt("  Tags (comma separated)")
        .allow_empty(true)
        .interact_text()?;

    // Step 4: Review and confirm
    println!();
    println!("  {}", style("Review Bounty").bold());
    println!("  {}", style("─".repeat(40)).dim());
    println!("  Title:     {}", style(&title).cyan());
    println!("  Category:  {}", category);
    println!("  Reward:    ${:.2}", reward);
    println!("  Tags:      {}", tags);
    println!();

    let confirmed = Confirm::with_theme(&theme)
        .with_prompt("  Post this bounty?")
        .default(true)
        .interact()?;
    if !confirmed {
        println!();
        println!("  {} Posting cancelled", style("✗").red());
        return Ok(());
    }

    let pb = spinner("Posting bounty...");
    let result = client
        .create_bounty(&BountyDraft {
            title,
            description,
            category,
            reward,
            tags,
        })
        .await;
    pb.finish_and_clear();

    let bounty = result?;
    println!(
        "  {} Posted {} ({})",
        style("✓").green(),
        style(&bounty.title).cyan(),
        style(&bounty.id).dim()
    );
    Ok(())
}
