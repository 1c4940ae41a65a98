//! Review commands - payout and reject

use crate::client::MarketClient;
use crate::style::*;
use anyhow::Result;
use data_bounty::types::PayoutKind;

pub async fn payout(
    client: &MarketClient,
    submission: &str,
    kind: PayoutKind,
    amount: Option<f64>,
) -> Result<()> {
    if kind == PayoutKind::Partial && amount.is_none() {
        anyhow::bail!("A partial payout needs --amount");
    }
    if kind == PayoutKind::Full && amount.is_some() {
        print_warning("Ignoring --amount: a full payout always pays the bounty reward");
    }

    let receipt = client.payout(submission, kind, amount).await?;
    print_success(&receipt.message);
    println!("Remaining balance: {}", money(receipt.requester_balance));
    if receipt.requester_balance < 0.0 {
        print_warning("Your balance is negative");
    }
    Ok(())
}

pub async fn reject(client: &MarketClient, submission: &str, comment: Option<&str>) -> Result<()> {
    let sub = client.reject(submission, comment).await?;
    print_success(&format!(
        "Rejected {} from {}",
        sub.file_name, sub.hunter_name
    ));
    Ok(())
}
