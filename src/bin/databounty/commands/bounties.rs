//! Bounty commands - list, show, close, strategy

use crate::client::MarketClient;
use crate::style::*;
use anyhow::Result;
use data_bounty::types::{format_size, FileKind};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub async fn list(client: &MarketClient, category: Option<&str>) -> Result<()> {
    print_header("Data Bounties");

    let bounties = client.list_bounties(category).await?;
    if bounties.is_empty() {
        print_info("No bounties found.");
        return Ok(());
    }

    for bounty in &bounties {
        println!();
        println!(
            "{}  {}  {}",
            style_bold(&bounty.title),
            style_green(&format!("${:.2}", bounty.reward)),
            bounty_status(bounty.status)
        );
        println!(
            "  {}  {}  {} submission(s)",
            style_dim(&bounty.id),
            style_cyan(&bounty.category),
            bounty.submissions_count
        );
        if !bounty.tags.is_empty() {
            println!("  {}", style_dim(&format!("#{}", bounty.tags.join(" #"))));
        }
    }

    println!();
    println!("Total bounties: {}", bounties.len());
    Ok(())
}

pub async fn show(client: &MarketClient, id: &str) -> Result<()> {
    let bounty = client.get_bounty(id).await?;

    print_header(&bounty.title);
    println!(
        "Posted {} • {} • {}",
        bounty.created_at.format("%Y-%m-%d"),
        style_cyan(&bounty.category),
        bounty_status(bounty.status)
    );
    println!("Reward: {}", style_green(&format!("${:.2}", bounty.reward)));
    println!();
    println!("{}", bounty.description);

    let submissions = client.bounty_submissions(id).await?;
    println!();
    println!("{}", style_bold(&format!("Submissions ({})", submissions.len())));
    if submissions.is_empty() {
        print_info("No submissions yet.");
        return Ok(());
    }

    for sub in &submissions {
        let icon = match sub.file_kind() {
            FileKind::Image => "🖼",
            FileKind::Archive => "📦",
            FileKind::Document => "📄",
        };
        let batch = if sub.is_batch() {
            style_cyan(" [BATCH]")
        } else {
            String::new()
        };
        println!();
        println!("{} {}{}", icon, style_bold(&sub.file_name), batch);
        println!(
            "  {} • by {} • {} file(s), {} • {}",
            style_dim(&sub.id),
            style_cyan(&sub.hunter_name),
            sub.file_count(),
            format_size(sub.file_size),
            submission_status(sub.status)
        );
        for file in &sub.additional_files {
            println!(
                "    + {} ({})",
                file.name,
                style_dim(&format_size(file.size))
            );
        }
        if let Some(amount) = sub.payout_amount {
            println!("  Paid: {}", style_green(&format!("${:.2}", amount)));
        }
        if let Some(comment) = &sub.comment {
            println!("  Note: {}", style_dim(comment));
        }
    }

    Ok(())
}

pub async fn complete(client: &MarketClient, id: &str) -> Result<()> {
    let bounty = client.complete_bounty(id).await?;
    print_success(&format!("Bounty \"{}\" marked as completed", bounty.title));
    Ok(())
}

pub async fn cancel(client: &MarketClient, id: &str) -> Result<()> {
    let bounty = client.cancel_bounty(id).await?;
    print_success(&format!("Bounty \"{}\" cancelled", bounty.title));
    Ok(())
}

pub async fn strategy(client: &MarketClient, id: &str) -> Result<()> {
    let bounty = client.get_bounty(id).await?;

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message("Asking for strategies...");
    pb.enable_steady_tick(Duration::from_millis(80));

    let text = client.strategy(&bounty.title, &bounty.description).await;
    pb.finish_and_clear();

    print_header(&format!("Strategies for {}", bounty.title));
    println!("{}", text?);
    Ok(())
}
