//! Dashboard command - activity overview

use crate::client::MarketClient;
use crate::style::*;
use anyhow::Result;
use data_bounty::types::{format_size, Bounty, Role, Submission};

pub async fn run(client: &MarketClient) -> Result<()> {
    let summary = client.dashboard().await?;
    let user = &summary.user;

    print_header(&format!("Welcome, {}", user.name));
    println!();
    println!("Available Balance:  {}", style_bold(&money(user.balance)));

    match user.role {
        Role::Requester => {
            println!("Active Bounties:    {}", summary.activity_count);
            println!("Total Spent:        {}", money(summary.total_settled));
            println!();

            if summary.bounties.is_empty() {
                print_info("You have not posted any bounties yet.");
                return Ok(());
            }

            println!(
                "{:<32}  {:<40}  {:>10}  {:>11}  Status",
                "ID", "Title", "Reward", "Submissions"
            );
            println!("{}", "─".repeat(112));
            for bounty in &summary.bounties {
                println!("{}", bounty_row(bounty));
            }
        }
        Role::Hunter => {
            println!("Submissions:        {}", summary.activity_count);
            println!("Total Earned:       {}", money(summary.total_settled));
            println!();

            if summary.submissions.is_empty() {
                print_info("No submissions yet. Browse bounties with `databounty bounties`.");
                return Ok(());
            }

            println!(
                "{:<32}  {:<32}  {:>10}  {:<10}  {:>10}  Date",
                "ID", "File", "Size", "Status", "Payout"
            );
            println!("{}", "─".repeat(114));
            for sub in &summary.submissions {
                println!("{}", submission_row(sub));
            }
        }
    }

    Ok(())
}

/// Ids are printed in full so they can be passed to `show`, `payout` and friends
fn bounty_row(bounty: &Bounty) -> String {
    let submissions = if bounty.submissions_count > 0 {
        style_yellow(&format!("{:>11}", bounty.submissions_count))
    } else {
        format!("{:>11}", 0)
    };
    format!(
        "{:<32}  {:<40}  {:>10}  {}  {}",
        bounty.id,
        bounty.title.chars().take(40).collect::<String>(),
        format!("${:.2}", bounty.reward),
        submissions,
        bounty_status(bounty.status)
    )
}

fn submission_row(sub: &Submission) -> String {
    let payout = sub
        .payout_amount
        .map(|a| format!("${:.2}", a))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{:<32}  {:<32}  {:>10}  {:<10}  {:>10}  {}",
        sub.id,
        sub.file_name.chars().take(32).collect::<String>(),
        format_size(sub.file_size),
        submission_status(sub.status),
        payout,
        sub.timestamp.format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use data_bounty::types::{BountyStatus, SubmissionStatus};

    const LONG_ID: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn test_rows_keep_full_ids() {
        let bounty = Bounty {
            id: LONG_ID.to_string(),
            title: "Scrape X".to_string(),
            description: "desc".to_string(),
            category: "Finance".to_string(),
            reward: 100.0,
            requester_id: "u1".to_string(),
            created_at: Utc::now(),
            status: BountyStatus::Active,
            submissions_count: 2,
            tags: vec![],
        };
        assert!(bounty_row(&bounty).starts_with(LONG_ID));

        let sub = Submission {
            id: LONG_ID.to_string(),
            bounty_id: "b1".to_string(),
            hunter_id: "u2".to_string(),
            hunter_name: "ScrapeMaster99".to_string(),
            file_name: "data.csv".to_string(),
            file_size: 2048,
            file_type: "text/csv".to_string(),
            timestamp: Utc::now(),
            status: SubmissionStatus::Pending,
            payout_amount: None,
            comment: None,
            additional_files: vec![],
        };
        assert!(submission_row(&sub).starts_with(LONG_ID));
    }
}
