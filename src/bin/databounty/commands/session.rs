//! Session commands - login, logout, whoami

use crate::client::MarketClient;
use crate::style::*;
use anyhow::Result;
use data_bounty::types::Role;

pub async fn login(client: &MarketClient, role: Role) -> Result<()> {
    let user = client.login(role).await?;
    print_success(&format!("Logged in as {} ({})", style_cyan(&user.name), role));
    println!("Available balance: {}", money(user.balance));
    println!();
    match role {
        Role::Requester => println!("Next: {} to post a bounty", style_bold("databounty post")),
        Role::Hunter => println!("Next: {} to find a bounty", style_bold("databounty bounties")),
    }
    Ok(())
}

pub async fn logout(client: &MarketClient) -> Result<()> {
    if client.logout().await? {
        print_success("Logged out");
    } else {
        print_info("Nobody was logged in.");
    }
    Ok(())
}

pub async fn whoami(client: &MarketClient) -> Result<()> {
    let user = client.whoami().await?;
    println!("{} ({}, {})", style_bold(&user.name), user.role, user.id);
    println!("Balance: {}", money(user.balance));
    Ok(())
}
