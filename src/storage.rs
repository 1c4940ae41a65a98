//! In-memory storage for bounties and submissions
//!
//! Both collections are kept newest-first behind a single lock so that an
//! operation touching a bounty and its submissions sees and leaves a
//! consistent state. `submissions_count` is never stored; it is computed from
//! the submission list whenever a bounty leaves the store.

use parking_lot::Mutex;

use crate::types::{Bounty, Submission};

#[derive(Debug, Default)]
pub struct MarketState {
    bounties: Vec<Bounty>,
    submissions: Vec<Submission>,
}

/// Clamp a submission tally to the `u32` carried on `Bounty`
fn saturating_count(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

impl MarketState {
    pub fn count_for(&self, bounty_id: &str) -> u32 {
        saturating_count(
            self.submissions
                .iter()
                .filter(|s| s.bounty_id == bounty_id)
                .count(),
        )
    }

    fn view(&self, bounty: &Bounty) -> Bounty {
        let mut bounty = bounty.clone();
        bounty.submissions_count = self.count_for(&bounty.id);
        bounty
    }

    pub fn bounty(&self, id: &str) -> Option<Bounty> {
        self.bounties.iter().find(|b| b.id == id).map(|b| self.view(b))
    }

    pub fn bounty_mut(&mut self, id: &str) -> Option<&mut Bounty> {
        self.bounties.iter_mut().find(|b| b.id == id)
    }

    pub fn submission(&self, id: &str) -> Option<&Submission> {
        self.submissions.iter().find(|s| s.id == id)
    }

    pub fn submission_mut(&mut self, id: &str) -> Option<&mut Submission> {
        self.submissions.iter_mut().find(|s| s.id == id)
    }

    /// Prepend, newest first
    pub fn insert_bounty(&mut self, bounty: Bounty) {
        self.bounties.insert(0, bounty);
    }

    /// Prepend, newest first
    pub fn insert_submission(&mut self, submission: Submission) {
        self.submissions.insert(0, submission);
    }

    pub fn bounties(&self) -> Vec<Bounty> {
        self.bounties.iter().map(|b| self.view(b)).collect()
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }
}

#[derive(Debug, Default)]
pub struct MarketStorage {
    state: Mutex<MarketState>,
}

impl MarketStorage {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Run `f` with exclusive access to both stores
    pub fn transaction<R>(&self, f: impl FnOnce(&mut MarketState) -> R) -> R {
        let mut state = self.state.lock();
        f(&mut state)
    }

    pub fn get_bounty(&self, id: &str) -> Option<Bounty> {
        self.state.lock().bounty(id)
    }

    pub fn get_submission(&self, id: &str) -> Option<Submission> {
        self.state.lock().submission(id).cloned()
    }

    /// All bounties newest first, optionally restricted to one category
    pub fn list_bounties(&self, category: Option<&str>) -> Vec<Bounty> {
        let state = self.state.lock();
        state
            .bounties
            .iter()
            .filter(|b| category.map_or(true, |c| b.category.eq_ignore_ascii_case(c)))
            .map(|b| state.view(b))
            .collect()
    }

    pub fn get_bounties_by_requester(&self, requester_id: &str) -> Vec<Bounty> {
        let state = self.state.lock();
        state
            .bounties
            .iter()
            .filter(|b| b.requester_id == requester_id)
            .map(|b| state.view(b))
            .collect()
    }

    pub fn get_bounty_submissions(&self, bounty_id: &str) -> Vec<Submission> {
        self.state
            .lock()
            .submissions
            .iter()
            .filter(|s| s.bounty_id == bounty_id)
            .cloned()
            .collect()
    }

    pub fn get_hunter_submissions(&self, hunter_id: &str) -> Vec<Submission> {
        self.state
            .lock()
            .submissions
            .iter()
            .filter(|s| s.hunter_id == hunter_id)
            .cloned()
            .collect()
    }

    /// Sum of payouts made against bounties owned by `requester_id`
    pub fn get_total_spent(&self, requester_id: &str) -> f64 {
        let state = self.state.lock();
        state
            .submissions
            .iter()
            .filter(|s| {
                state
                    .bounties
                    .iter()
                    .any(|b| b.id == s.bounty_id && b.requester_id == requester_id)
            })
            .filter_map(|s| s.payout_amount)
            .sum()
    }

    /// Sum of payouts awarded to `hunter_id`
    pub fn get_total_earned(&self, hunter_id: &str) -> f64 {
        self.state
            .lock()
            .submissions
            .iter()
            .filter(|s| s.hunter_id == hunter_id)
            .filter_map(|s| s.payout_amount)
            .sum()
    }

    pub fn get_total_bounties(&self) -> usize {
        self.state.lock().bounties.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BountyStatus, SubmissionStatus};
    use chrono::Utc;

    fn bounty(id: &str, category: &str) -> Bounty {
        Bounty {
            id: id.to_string(),
            title: format!("Bounty {}", id),
            description: "desc".to_string(),
            category: category.to_string(),
            reward: 100.0,
            requester_id: "u1".to_string(),
            created_at: Utc::now(),
            status: BountyStatus::Active,
            submissions_count: 0,
            tags: vec![],
        }
    }

    fn submission(id: &str, bounty_id: &str) -> Submission {
        Submission {
            id: id.to_string(),
            bounty_id: bounty_id.to_string(),
            hunter_id: "u2".to_string(),
            hunter_name: "hunter".to_string(),
            file_name: "a.csv".to_string(),
            file_size: 1,
            file_type: "text/csv".to_string(),
            timestamp: Utc::now(),
            status: SubmissionStatus::Pending,
            payout_amount: None,
            comment: None,
            additional_files: vec![],
        }
    }

    #[test]
    fn test_newest_first() {
        let storage = MarketStorage::in_memory();
        storage.transaction(|s| {
            s.insert_bounty(bounty("b1", "Finance"));
            s.insert_bounty(bounty("b2", "Finance"));
        });
        let ids: Vec<_> = storage.list_bounties(None).into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["b2", "b1"]);
    }

    #[test]
    fn test_count_is_derived() {
        let storage = MarketStorage::in_memory();
        storage.transaction(|s| {
            let mut stale = bounty("b1", "Finance");
            stale.submissions_count = 7;
            s.insert_bounty(stale);
            s.insert_submission(submission("s1", "b1"));
            s.insert_submission(submission("s2", "b1"));
            s.insert_submission(submission("s3", "other"));
        });
        assert_eq!(storage.get_bounty("b1").unwrap().submissions_count, 2);
    }

    #[test]
    fn test_category_filter() {
        let storage = MarketStorage::in_memory();
        storage.transaction(|s| {
            s.insert_bounty(bounty("b1", "Finance"));
            s.insert_bounty(bounty("b2", "Real Estate"));
        });
        let found = storage.list_bounties(Some("real estate"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "b2");
    }

    #[test]
    fn test_totals() {
        let storage = MarketStorage::in_memory();
        storage.transaction(|s| {
            s.insert_bounty(bounty("b1", "Finance"));
            let mut paid = submission("s1", "b1");
            paid.status = SubmissionStatus::Partial;
            paid.payout_amount = Some(40.0);
            s.insert_submission(paid);
            s.insert_submission(submission("s2", "b1"));
        });
        assert_eq!(storage.get_total_spent("u1"), 40.0);
        assert_eq!(storage.get_total_earned("u2"), 40.0);
        assert_eq!(storage.get_total_spent("u2"), 0.0);
    }

    #[test]
    fn test_saturating_count() {
        assert_eq!(saturating_count(3), 3);
        assert_eq!(saturating_count(u32::MAX as usize), u32::MAX);
        assert_eq!(saturating_count(usize::MAX), u32::MAX);
    }
}
