//! Demo marketplace contents

use chrono::Utc;

use crate::storage::MarketStorage;
use crate::types::{Bounty, BountyStatus, Role, User};

pub fn demo_users() -> Vec<User> {
    vec![
        User {
            id: "u1".to_string(),
            name: "DataCorp Solutions".to_string(),
            role: Role::Requester,
            balance: 2500.00,
        },
        User {
            id: "u2".to_string(),
            name: "ScrapeMaster99".to_string(),
            role: Role::Hunter,
            balance: 145.50,
        },
    ]
}

pub fn demo_bounties() -> Vec<Bounty> {
    let tags = |list: &[&str]| -> Vec<String> { list.iter().map(|t| t.to_string()).collect() };
    vec![
        Bounty {
            id: "b1".to_string(),
            title: "E-commerce Price Data - Electronics".to_string(),
            description: "Scrape pricing data for top 100 laptops on Amazon and BestBuy. Need product name, current price, SKU, and availability status.".to_string(),
            category: "E-commerce".to_string(),
            reward: 250.0,
            requester_id: "u1".to_string(),
            created_at: Utc::now(),
            status: BountyStatus::Active,
            submissions_count: 0,
            tags: tags(&["scraping", "amazon", "electronics"]),
        },
        Bounty {
            id: "b2".to_string(),
            title: "Real Estate Listings - Miami".to_string(),
            description: "Collect images and metadata for all active listings in Downtown Miami. Format: ZIP of images + JSON for metadata.".to_string(),
            category: "Real Estate".to_string(),
            reward: 500.0,
            requester_id: "u1".to_string(),
            created_at: Utc::now(),
            status: BountyStatus::Active,
            submissions_count: 0,
            tags: tags(&["images", "real-estate", "geodata"]),
        },
    ]
}

/// Load the demo bounties, keeping `b1` first
pub fn seed_storage(storage: &MarketStorage) {
    storage.transaction(|state| {
        for bounty in demo_bounties().into_iter().rev() {
            state.insert_bounty(bounty);
        }
    });
}
