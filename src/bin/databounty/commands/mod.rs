pub mod bounties;
pub mod dashboard;
pub mod review;
pub mod session;
pub mod submit;
