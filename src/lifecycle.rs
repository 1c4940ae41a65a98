//! Bounty and submission lifecycle
//!
//! Every operation receives the acting user explicitly and runs its
//! read-validate-mutate sequence inside one storage transaction.
//!
//! Submission states: `pending` moves once to `accepted`, `partial` or
//! `rejected`. Bounty states: `active` moves once to `completed` or
//! `cancelled`.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{MarketError, MarketResult};
use crate::storage::MarketStorage;
use crate::types::{
    parse_tags, Bounty, BountyDraft, BountyStatus, DashboardSummary, PayoutKind, PayoutReceipt,
    Role, Submission, SubmissionFile, SubmissionReceipt, SubmissionStatus, User,
    DEFAULT_FILE_TYPE,
};

pub const DEFAULT_MIN_REWARD: f64 = 10.0;

fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

fn require_role(actor: &User, role: Role, action: &str) -> MarketResult<()> {
    if actor.role != role {
        return Err(MarketError::Unauthorized(format!(
            "only a {} can {}",
            role, action
        )));
    }
    Ok(())
}

fn require_owner(actor: &User, bounty: &Bounty) -> MarketResult<()> {
    if bounty.requester_id != actor.id {
        return Err(MarketError::Unauthorized(format!(
            "bounty {} belongs to another requester",
            bounty.id
        )));
    }
    Ok(())
}

pub struct Marketplace {
    storage: Arc<MarketStorage>,
    min_reward: f64,
}

impl Marketplace {
    pub fn new(storage: Arc<MarketStorage>, min_reward: f64) -> Self {
        Self {
            storage,
            min_reward,
        }
    }

    pub fn storage(&self) -> &Arc<MarketStorage> {
        &self.storage
    }

    pub fn min_reward(&self) -> f64 {
        self.min_reward
    }

    /// Post a new bounty owned by `owner`
    pub fn create_bounty(&self, owner: &User, draft: BountyDraft) -> MarketResult<Bounty> {
        require_role(owner, Role::Requester, "post bounties")?;

        let title = draft.title.trim();
        let description = draft.description.trim();
        let category = draft.category.trim();
        if title.is_empty() {
            return Err(MarketError::validation("title is required"));
        }
        if description.is_empty() {
            return Err(MarketError::validation("description is required"));
        }
        if category.is_empty() {
            return Err(MarketError::validation("category is required"));
        }
        if !draft.reward.is_finite() || draft.reward < self.min_reward {
            return Err(MarketError::Validation(format!(
                "reward must be at least {}",
                self.min_reward
            )));
        }

        let bounty = Bounty {
            id: new_id(),
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            reward: draft.reward,
            requester_id: owner.id.clone(),
            created_at: Utc::now(),
            status: BountyStatus::Active,
            submissions_count: 0,
            tags: parse_tags(&draft.tags),
        };

        self.storage
            .transaction(|state| state.insert_bounty(bounty.clone()));

        info!(
            "Requester {} posted bounty {} ({}) with reward {}",
            owner.id, bounty.id, bounty.title, bounty.reward
        );
        Ok(bounty)
    }

    /// Record an upload against a bounty. Only file metadata is kept.
    pub fn submit_files(
        &self,
        hunter: &User,
        bounty_id: &str,
        files: &[SubmissionFile],
    ) -> MarketResult<SubmissionReceipt> {
        require_role(hunter, Role::Hunter, "submit data")?;

        let (primary, rest) = files
            .split_first()
            .ok_or_else(|| MarketError::validation("at least one file is required"))?;

        let file_name = if rest.is_empty() {
            primary.name.clone()
        } else {
            format!("{} (+{} more)", primary.name, rest.len())
        };
        let file_size = SubmissionFile::total_size(files)
            .ok_or_else(|| MarketError::validation("total file size is too large"))?;
        let file_type = if primary.file_type.is_empty() {
            DEFAULT_FILE_TYPE.to_string()
        } else {
            primary.file_type.clone()
        };

        let submission = Submission {
            id: new_id(),
            bounty_id: bounty_id.to_string(),
            hunter_id: hunter.id.clone(),
            hunter_name: hunter.name.clone(),
            file_name,
            file_size,
            file_type,
            timestamp: Utc::now(),
            status: SubmissionStatus::Pending,
            payout_amount: None,
            comment: None,
            additional_files: rest.to_vec(),
        };

        self.storage.transaction(|state| -> MarketResult<()> {
            let bounty = state
                .bounty(bounty_id)
                .ok_or_else(|| MarketError::bounty_not_found(bounty_id))?;
            if !bounty.is_active() {
                return Err(MarketError::InvalidState(format!(
                    "bounty is {} and no longer accepts submissions",
                    bounty.status.as_str()
                )));
            }
            state.insert_submission(submission.clone());
            Ok(())
        })?;

        info!(
            "Hunter {} submitted {} file(s) to bounty {} as {}",
            hunter.id,
            files.len(),
            bounty_id,
            submission.id
        );

        Ok(SubmissionReceipt {
            message: format!(
                "{} file(s) submitted successfully! The requester will review your data shortly.",
                files.len()
            ),
            submission,
        })
    }

    /// Settle a pending submission, debiting the requester.
    ///
    /// A full payout always uses the bounty reward; a partial payout needs an
    /// explicit positive amount. The requester's balance is allowed to go
    /// negative. The hunter's balance is not credited.
    pub fn process_payout(
        &self,
        requester: &mut User,
        submission_id: &str,
        kind: PayoutKind,
        amount: Option<f64>,
    ) -> MarketResult<PayoutReceipt> {
        require_role(requester, Role::Requester, "process payouts")?;

        let submission = self.storage.transaction(|state| -> MarketResult<Submission> {
            let submission = state
                .submission(submission_id)
                .cloned()
                .ok_or_else(|| MarketError::submission_not_found(submission_id))?;
            let bounty = state
                .bounty(&submission.bounty_id)
                .ok_or_else(|| MarketError::bounty_not_found(&submission.bounty_id))?;
            require_owner(requester, &bounty)?;
            if submission.status != SubmissionStatus::Pending {
                return Err(MarketError::InvalidState(
                    "submission is not pending".to_string(),
                ));
            }

            let payout = match kind {
                PayoutKind::Full => bounty.reward,
                PayoutKind::Partial => {
                    let amount = amount.ok_or_else(|| {
                        MarketError::validation("partial payout requires an amount")
                    })?;
                    if !amount.is_finite() || amount <= 0.0 {
                        return Err(MarketError::validation(
                            "partial payout amount must be positive",
                        ));
                    }
                    amount
                }
            };

            // Nothing below can fail: both halves apply together.
            let entry = state
                .submission_mut(submission_id)
                .ok_or_else(|| MarketError::submission_not_found(submission_id))?;
            entry.status = match kind {
                PayoutKind::Full => SubmissionStatus::Accepted,
                PayoutKind::Partial => SubmissionStatus::Partial,
            };
            entry.payout_amount = Some(payout);
            requester.balance -= payout;

            Ok(entry.clone())
        })?;

        let amount = submission.payout_amount.unwrap_or_default();
        info!(
            "Requester {} paid {} for submission {} (balance now {})",
            requester.id, amount, submission.id, requester.balance
        );
        if requester.balance < 0.0 {
            debug!("Requester {} balance is negative", requester.id);
        }

        Ok(PayoutReceipt {
            message: format!(
                "Payout of ${} processed for {}",
                amount, submission.hunter_name
            ),
            hunter_name: submission.hunter_name.clone(),
            amount,
            requester_balance: requester.balance,
            submission,
        })
    }

    /// Decline a pending submission without paying it
    pub fn reject_submission(
        &self,
        requester: &User,
        submission_id: &str,
        comment: Option<String>,
    ) -> MarketResult<Submission> {
        require_role(requester, Role::Requester, "reject submissions")?;

        let submission = self.storage.transaction(|state| -> MarketResult<Submission> {
            let bounty_id = state
                .submission(submission_id)
                .map(|s| s.bounty_id.clone())
                .ok_or_else(|| MarketError::submission_not_found(submission_id))?;
            let bounty = state
                .bounty(&bounty_id)
                .ok_or_else(|| MarketError::bounty_not_found(&bounty_id))?;
            require_owner(requester, &bounty)?;

            let entry = state
                .submission_mut(submission_id)
                .ok_or_else(|| MarketError::submission_not_found(submission_id))?;
            if entry.status != SubmissionStatus::Pending {
                return Err(MarketError::InvalidState(
                    "submission is not pending".to_string(),
                ));
            }
            entry.status = SubmissionStatus::Rejected;
            entry.comment = comment.filter(|c| !c.trim().is_empty());
            Ok(entry.clone())
        })?;

        info!(
            "Requester {} rejected submission {}",
            requester.id, submission.id
        );
        Ok(submission)
    }

    pub fn complete_bounty(&self, requester: &User, bounty_id: &str) -> MarketResult<Bounty> {
        self.close_bounty(requester, bounty_id, BountyStatus::Completed)
    }

    pub fn cancel_bounty(&self, requester: &User, bounty_id: &str) -> MarketResult<Bounty> {
        self.close_bounty(requester, bounty_id, BountyStatus::Cancelled)
    }

    fn close_bounty(
        &self,
        requester: &User,
        bounty_id: &str,
        target: BountyStatus,
    ) -> MarketResult<Bounty> {
        require_role(requester, Role::Requester, "close bounties")?;

        let bounty = self.storage.transaction(|state| -> MarketResult<Bounty> {
            let current = state
                .bounty(bounty_id)
                .ok_or_else(|| MarketError::bounty_not_found(bounty_id))?;
            require_owner(requester, &current)?;
            if !current.is_active() {
                return Err(MarketError::InvalidState(format!(
                    "bounty is already {}",
                    current.status.as_str()
                )));
            }
            if let Some(entry) = state.bounty_mut(bounty_id) {
                entry.status = target;
            }
            state
                .bounty(bounty_id)
                .ok_or_else(|| MarketError::bounty_not_found(bounty_id))
        })?;

        info!(
            "Requester {} marked bounty {} as {}",
            requester.id,
            bounty.id,
            target.as_str()
        );
        Ok(bounty)
    }

    pub fn get_bounty(&self, bounty_id: &str) -> MarketResult<Bounty> {
        self.storage
            .get_bounty(bounty_id)
            .ok_or_else(|| MarketError::bounty_not_found(bounty_id))
    }

    pub fn list_bounties(&self, category: Option<&str>) -> Vec<Bounty> {
        self.storage.list_bounties(category)
    }

    pub fn bounty_submissions(&self, bounty_id: &str) -> MarketResult<Vec<Submission>> {
        self.get_bounty(bounty_id)?;
        Ok(self.storage.get_bounty_submissions(bounty_id))
    }

    pub fn dashboard(&self, actor: &User) -> DashboardSummary {
        match actor.role {
            Role::Requester => {
                let bounties = self.storage.get_bounties_by_requester(&actor.id);
                DashboardSummary {
                    user: actor.clone(),
                    activity_count: bounties.len(),
                    total_settled: self.storage.get_total_spent(&actor.id),
                    bounties,
                    submissions: vec![],
                }
            }
            Role::Hunter => {
                let submissions = self.storage.get_hunter_submissions(&actor.id);
                DashboardSummary {
                    user: actor.clone(),
                    activity_count: submissions.len(),
                    total_settled: self.storage.get_total_earned(&actor.id),
                    bounties: vec![],
                    submissions,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requester() -> User {
        User {
            id: "u1".to_string(),
            name: "DataCorp Solutions".to_string(),
            role: Role::Requester,
            balance: 2500.0,
        }
    }

    fn hunter() -> User {
        User {
            id: "u2".to_string(),
            name: "ScrapeMaster99".to_string(),
            role: Role::Hunter,
            balance: 145.5,
        }
    }

    fn market() -> Marketplace {
        Marketplace::new(Arc::new(MarketStorage::in_memory()), DEFAULT_MIN_REWARD)
    }

    fn draft(reward: f64, tags: &str) -> BountyDraft {
        BountyDraft {
            title: "Scrape X".to_string(),
            description: "desc".to_string(),
            category: "E-commerce".to_string(),
            reward,
            tags: tags.to_string(),
        }
    }

    fn png(name: &str, size: u64) -> SubmissionFile {
        SubmissionFile::new(name, size, "image/png")
    }

    #[test]
    fn test_create_bounty() {
        let market = market();
        let bounty = market.create_bounty(&requester(), draft(100.0, "a,b")).unwrap();
        assert_eq!(bounty.reward, 100.0);
        assert_eq!(bounty.tags, vec!["a", "b"]);
        assert_eq!(bounty.submissions_count, 0);
        assert_eq!(bounty.status, BountyStatus::Active);
        assert_eq!(bounty.requester_id, "u1");
    }

    #[test]
    fn test_create_bounty_is_newest_first() {
        let market = market();
        let first = market.create_bounty(&requester(), draft(100.0, "")).unwrap();
        let second = market.create_bounty(&requester(), draft(200.0, "")).unwrap();
        let ids: Vec<_> = market.list_bounties(None).into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[test]
    fn test_create_bounty_validation() {
        let market = market();
        let err = market.create_bounty(&requester(), draft(9.99, "")).unwrap_err();
        assert!(matches!(err, MarketError::Validation(_)));

        let mut empty_title = draft(100.0, "");
        empty_title.title = "   ".to_string();
        assert!(matches!(
            market.create_bounty(&requester(), empty_title),
            Err(MarketError::Validation(_))
        ));

        assert!(matches!(
            market.create_bounty(&requester(), draft(f64::NAN, "")),
            Err(MarketError::Validation(_))
        ));
        assert!(matches!(
            market.create_bounty(&hunter(), draft(100.0, "")),
            Err(MarketError::Unauthorized(_))
        ));
        assert_eq!(market.storage().get_total_bounties(), 0);
    }

    #[test]
    fn test_submit_files_multi() {
        let market = market();
        let bounty = market.create_bounty(&requester(), draft(100.0, "")).unwrap();
        let receipt = market
            .submit_files(&hunter(), &bounty.id, &[png("fileA", 10), png("fileB", 20)])
            .unwrap();

        let sub = receipt.submission;
        assert_eq!(sub.file_name, "fileA (+1 more)");
        assert_eq!(sub.file_size, 30);
        assert_eq!(sub.file_type, "image/png");
        assert_eq!(sub.additional_files, vec![png("fileB", 20)]);
        assert!(sub.is_batch());
        assert_eq!(sub.file_count(), 2);
        assert_eq!(sub.status, SubmissionStatus::Pending);
        assert!(sub.payout_amount.is_none());
        assert!(receipt.message.starts_with("2 file(s) submitted"));
        assert_eq!(market.get_bounty(&bounty.id).unwrap().submissions_count, 1);
    }

    #[test]
    fn test_submit_single_file_defaults_type() {
        let market = market();
        let bounty = market.create_bounty(&requester(), draft(100.0, "")).unwrap();
        let sub = market
            .submit_files(&hunter(), &bounty.id, &[SubmissionFile::new("dump.bin", 5, "")])
            .unwrap()
            .submission;
        assert_eq!(sub.file_name, "dump.bin");
        assert_eq!(sub.file_type, DEFAULT_FILE_TYPE);
        assert!(sub.additional_files.is_empty());
    }

    #[test]
    fn test_submit_files_errors() {
        let market = market();
        let bounty = market.create_bounty(&requester(), draft(100.0, "")).unwrap();
        assert!(matches!(
            market.submit_files(&hunter(), &bounty.id, &[]),
            Err(MarketError::Validation(_))
        ));
        assert!(matches!(
            market.submit_files(&hunter(), "missing", &[png("a", 1)]),
            Err(MarketError::NotFound { .. })
        ));
        assert!(matches!(
            market.submit_files(&requester(), &bounty.id, &[png("a", 1)]),
            Err(MarketError::Unauthorized(_))
        ));
        assert_eq!(market.get_bounty(&bounty.id).unwrap().submissions_count, 0);
    }

    #[test]
    fn test_submit_files_total_size_overflow() {
        let market = market();
        let bounty = market.create_bounty(&requester(), draft(100.0, "")).unwrap();
        let files = [png("a", u64::MAX), png("b", 1)];
        assert_eq!(
            market.submit_files(&hunter(), &bounty.id, &files).unwrap_err(),
            MarketError::validation("total file size is too large")
        );
        assert_eq!(market.get_bounty(&bounty.id).unwrap().submissions_count, 0);

        let receipt = market
            .submit_files(&hunter(), &bounty.id, &[png("a", u64::MAX - 1), png("b", 1)])
            .unwrap();
        assert_eq!(receipt.submission.file_size, u64::MAX);
    }

    #[test]
    fn test_count_matches_submissions_after_mixed_operations() {
        let market = market();
        let owner = requester();
        let a = market.create_bounty(&owner, draft(100.0, "")).unwrap();
        let b = market.create_bounty(&owner, draft(150.0, "")).unwrap();
        for (i, target) in [&a.id, &b.id, &a.id, &a.id].into_iter().enumerate() {
            market
                .submit_files(&hunter(), target, &[png(&format!("f{}", i), 1)])
                .unwrap();
        }
        market.create_bounty(&owner, draft(300.0, "")).unwrap();

        market.storage().transaction(|state| {
            for bounty in state.bounties() {
                let actual = state
                    .submissions()
                    .iter()
                    .filter(|s| s.bounty_id == bounty.id)
                    .count() as u32;
                assert_eq!(bounty.submissions_count, actual);
            }
        });
        assert_eq!(market.get_bounty(&a.id).unwrap().submissions_count, 3);
    }

    #[test]
    fn test_full_payout_uses_reward() {
        let market = market();
        let mut owner = requester();
        let bounty = market.create_bounty(&owner, draft(100.0, "")).unwrap();
        let sub = market
            .submit_files(&hunter(), &bounty.id, &[png("a", 1)])
            .unwrap()
            .submission;

        let receipt = market
            .process_payout(&mut owner, &sub.id, PayoutKind::Full, Some(5.0))
            .unwrap();
        assert_eq!(receipt.amount, 100.0);
        assert_eq!(receipt.submission.status, SubmissionStatus::Accepted);
        assert_eq!(receipt.submission.payout_amount, Some(100.0));
        assert_eq!(owner.balance, 2400.0);
        assert_eq!(receipt.requester_balance, 2400.0);
        assert_eq!(receipt.message, "Payout of $100 processed for ScrapeMaster99");
    }

    #[test]
    fn test_partial_then_full_is_rejected() {
        let market = market();
        let mut owner = requester();
        let bounty = market.create_bounty(&owner, draft(100.0, "")).unwrap();
        let sub = market
            .submit_files(&hunter(), &bounty.id, &[png("a", 1)])
            .unwrap()
            .submission;

        let receipt = market
            .process_payout(&mut owner, &sub.id, PayoutKind::Partial, Some(50.0))
            .unwrap();
        assert_eq!(receipt.submission.status, SubmissionStatus::Partial);
        assert_eq!(receipt.submission.payout_amount, Some(50.0));
        assert_eq!(owner.balance, 2450.0);

        let err = market
            .process_payout(&mut owner, &sub.id, PayoutKind::Full, None)
            .unwrap_err();
        assert_eq!(
            err,
            MarketError::InvalidState("submission is not pending".to_string())
        );
        assert_eq!(owner.balance, 2450.0);
        let stored = market.storage().get_submission(&sub.id).unwrap();
        assert_eq!(stored.payout_amount, Some(50.0));
    }

    #[test]
    fn test_partial_requires_amount() {
        let market = market();
        let mut owner = requester();
        let bounty = market.create_bounty(&owner, draft(100.0, "")).unwrap();
        let sub = market
            .submit_files(&hunter(), &bounty.id, &[png("a", 1)])
            .unwrap()
            .submission;

        assert!(matches!(
            market.process_payout(&mut owner, &sub.id, PayoutKind::Partial, None),
            Err(MarketError::Validation(_))
        ));
        assert!(matches!(
            market.process_payout(&mut owner, &sub.id, PayoutKind::Partial, Some(-1.0)),
            Err(MarketError::Validation(_))
        ));
        assert_eq!(owner.balance, 2500.0);
        let stored = market.storage().get_submission(&sub.id).unwrap();
        assert_eq!(stored.status, SubmissionStatus::Pending);
        assert!(stored.payout_amount.is_none());
    }

    #[test]
    fn test_balance_may_go_negative() {
        let market = market();
        let mut owner = requester();
        owner.balance = 30.0;
        let bounty = market.create_bounty(&owner, draft(100.0, "")).unwrap();
        let sub = market
            .submit_files(&hunter(), &bounty.id, &[png("a", 1)])
            .unwrap()
            .submission;
        market
            .process_payout(&mut owner, &sub.id, PayoutKind::Full, None)
            .unwrap();
        assert_eq!(owner.balance, -70.0);
    }

    #[test]
    fn test_payout_requires_owner_and_existing_submission() {
        let market = market();
        let owner = requester();
        let bounty = market.create_bounty(&owner, draft(100.0, "")).unwrap();
        let sub = market
            .submit_files(&hunter(), &bounty.id, &[png("a", 1)])
            .unwrap()
            .submission;

        let mut stranger = User {
            id: "u9".to_string(),
            ..requester()
        };
        assert!(matches!(
            market.process_payout(&mut stranger, &sub.id, PayoutKind::Full, None),
            Err(MarketError::Unauthorized(_))
        ));
        assert_eq!(stranger.balance, 2500.0);

        let mut owner = owner;
        assert!(matches!(
            market.process_payout(&mut owner, "missing", PayoutKind::Full, None),
            Err(MarketError::NotFound { .. })
        ));

        let mut as_hunter = hunter();
        assert!(matches!(
            market.process_payout(&mut as_hunter, &sub.id, PayoutKind::Full, None),
            Err(MarketError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_payout_amount_present_iff_paid() {
        let market = market();
        let mut owner = requester();
        let bounty = market.create_bounty(&owner, draft(100.0, "")).unwrap();
        let ids: Vec<_> = (0..4)
            .map(|i| {
                market
                    .submit_files(&hunter(), &bounty.id, &[png(&format!("f{}", i), 1)])
                    .unwrap()
                    .submission
                    .id
            })
            .collect();
        market
            .process_payout(&mut owner, &ids[0], PayoutKind::Full, None)
            .unwrap();
        market
            .process_payout(&mut owner, &ids[1], PayoutKind::Partial, Some(10.0))
            .unwrap();
        market
            .reject_submission(&owner, &ids[2], Some("blurry".to_string()))
            .unwrap();

        for sub in market.bounty_submissions(&bounty.id).unwrap() {
            assert_eq!(sub.payout_amount.is_some(), sub.status.is_paid());
        }
    }

    #[test]
    fn test_reject_keeps_balance_and_blocks_payout() {
        let market = market();
        let mut owner = requester();
        let bounty = market.create_bounty(&owner, draft(100.0, "")).unwrap();
        let sub = market
            .submit_files(&hunter(), &bounty.id, &[png("a", 1)])
            .unwrap()
            .submission;

        let rejected = market
            .reject_submission(&owner, &sub.id, Some("wrong format".to_string()))
            .unwrap();
        assert_eq!(rejected.status, SubmissionStatus::Rejected);
        assert_eq!(rejected.comment.as_deref(), Some("wrong format"));
        assert!(rejected.payout_amount.is_none());

        assert!(matches!(
            market.process_payout(&mut owner, &sub.id, PayoutKind::Full, None),
            Err(MarketError::InvalidState(_))
        ));
        assert!(matches!(
            market.reject_submission(&owner, &sub.id, None),
            Err(MarketError::InvalidState(_))
        ));
        assert_eq!(owner.balance, 2500.0);
    }

    #[test]
    fn test_closed_bounty_rejects_submissions() {
        let market = market();
        let owner = requester();
        let done = market.create_bounty(&owner, draft(100.0, "")).unwrap();
        let gone = market.create_bounty(&owner, draft(100.0, "")).unwrap();

        let done = market.complete_bounty(&owner, &done.id).unwrap();
        assert_eq!(done.status, BountyStatus::Completed);
        let gone = market.cancel_bounty(&owner, &gone.id).unwrap();
        assert_eq!(gone.status, BountyStatus::Cancelled);

        for id in [&done.id, &gone.id] {
            assert!(matches!(
                market.submit_files(&hunter(), id, &[png("a", 1)]),
                Err(MarketError::InvalidState(_))
            ));
        }
        assert!(matches!(
            market.cancel_bounty(&owner, &done.id),
            Err(MarketError::InvalidState(_))
        ));
    }

    #[test]
    fn test_dashboard_totals() {
        let market = market();
        let mut owner = requester();
        let bounty = market.create_bounty(&owner, draft(100.0, "")).unwrap();
        let sub = market
            .submit_files(&hunter(), &bounty.id, &[png("a", 1)])
            .unwrap()
            .submission;
        market
            .process_payout(&mut owner, &sub.id, PayoutKind::Partial, Some(25.0))
            .unwrap();

        let requester_view = market.dashboard(&owner);
        assert_eq!(requester_view.activity_count, 1);
        assert_eq!(requester_view.total_settled, 25.0);
        assert_eq!(requester_view.user.balance, 2475.0);

        let hunter_view = market.dashboard(&hunter());
        assert_eq!(hunter_view.activity_count, 1);
        assert_eq!(hunter_view.total_settled, 25.0);
        // Payouts are not credited to the hunter's balance.
        assert_eq!(hunter_view.user.balance, 145.5);
    }
}
