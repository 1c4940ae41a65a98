//! Terminal styling utilities

use data_bounty::types::{BountyStatus, SubmissionStatus};

pub fn style_cyan(s: &str) -> String {
    format!("\x1b[36m{}\x1b[0m", s)
}

pub fn style_green(s: &str) -> String {
    format!("\x1b[32m{}\x1b[0m", s)
}

pub fn style_red(s: &str) -> String {
    format!("\x1b[31m{}\x1b[0m", s)
}

pub fn style_yellow(s: &str) -> String {
    format!("\x1b[33m{}\x1b[0m", s)
}

pub fn style_dim(s: &str) -> String {
    format!("\x1b[2m{}\x1b[0m", s)
}

pub fn style_bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn print_success(msg: &str) {
    println!("{} {}", style_green("✓"), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", style_red("✗"), msg);
}

pub fn print_warning(msg: &str) {
    println!("{} {}", style_yellow("⚠"), msg);
}

pub fn print_info(msg: &str) {
    println!("{} {}", style_cyan("ℹ"), msg);
}

pub fn print_header(title: &str) {
    println!();
    println!("{}", style_bold(title));
    println!("{}", "─".repeat(title.chars().count()));
}

/// Dollar amount with two decimals, red when negative
pub fn money(amount: f64) -> String {
    let text = format!("${:.2}", amount);
    if amount < 0.0 {
        style_red(&text)
    } else {
        text
    }
}

pub fn bounty_status(status: BountyStatus) -> String {
    match status {
        BountyStatus::Active => style_green(status.as_str()),
        BountyStatus::Completed => style_cyan(status.as_str()),
        BountyStatus::Cancelled => style_dim(status.as_str()),
    }
}

pub fn submission_status(status: SubmissionStatus) -> String {
    match status {
        SubmissionStatus::Pending => style_yellow(status.as_str()),
        SubmissionStatus::Accepted | SubmissionStatus::Partial => style_green(status.as_str()),
        SubmissionStatus::Rejected => style_red(status.as_str()),
    }
}
