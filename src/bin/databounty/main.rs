//! DataBounty CLI
//!
//! Command-line interface for the DataBounty marketplace server.

mod client;
mod commands;
mod style;
mod wizard;

use clap::{Parser, Subcommand, ValueEnum};
use data_bounty::types::{PayoutKind, Role};
use style::*;

const BANNER: &str = r#"
  ██████╗  █████╗ ████████╗ █████╗ ██████╗  ██████╗ ██╗   ██╗███╗   ██╗████████╗██╗   ██╗
  ██╔══██╗██╔══██╗╚══██╔══╝██╔══██╗██╔══██╗██╔═══██╗██║   ██║████╗  ██║╚══██╔══╝╚██╗ ██╔╝
  ██║  ██║███████║   ██║   ███████║██████╔╝██║   ██║██║   ██║██╔██╗ ██║   ██║    ╚████╔╝
  ██║  ██║██╔══██║   ██║   ██╔══██║██╔══██╗██║   ██║██║   ██║██║╚██╗██║   ██║     ╚██╔╝
  ██████╔╝██║  ██║   ██║   ██║  ██║██████╔╝╚██████╔╝╚██████╔╝██║ ╚████║   ██║      ██║
  ╚═════╝ ╚═╝  ╚═╝   ╚═╝   ╚═╝  ╚═╝╚═════╝  ╚═════╝  ╚═════╝ ╚═╝  ╚═══╝   ╚═╝      ╚═╝
"#;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "databounty")]
#[command(version)]
#[command(about = "DataBounty - Post data bounties, hunt datasets, get paid", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// DataBounty server URL
    #[arg(
        short,
        long,
        env = "DATABOUNTY_URL",
        default_value = "http://127.0.0.1:8080",
        global = true
    )]
    server: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Requester,
    Hunter,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Requester => Role::Requester,
            RoleArg::Hunter => Role::Hunter,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PayoutArg {
    Full,
    Partial,
}

impl From<PayoutArg> for PayoutKind {
    fn from(kind: PayoutArg) -> Self {
        match kind {
            PayoutArg::Full => PayoutKind::Full,
            PayoutArg::Partial => PayoutKind::Partial,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Log in as a requester or a hunter
    Login {
        #[arg(value_enum)]
        role: RoleArg,
    },

    /// End the current session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Activity overview for the logged-in user
    #[command(visible_alias = "d")]
    Dashboard,

    /// List open bounties
    #[command(visible_alias = "ls")]
    Bounties {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show one bounty and its submissions
    Show { bounty: String },

    /// Interactive wizard to post a new bounty
    #[command(visible_alias = "p")]
    Post,

    /// Submit files to a bounty (only name, size and type are sent)
    Submit {
        bounty: String,
        #[arg(required = true)]
        files: Vec<std::path::PathBuf>,
    },

    /// Pay a submission in full or in part
    Payout {
        submission: String,
        #[arg(value_enum)]
        kind: PayoutArg,
        /// Amount for a partial payout
        #[arg(short, long)]
        amount: Option<f64>,
    },

    /// Reject a submission without paying it
    Reject {
        submission: String,
        #[arg(short, long)]
        comment: Option<String>,
    },

    /// Mark a bounty as completed
    Complete { bounty: String },

    /// Cancel a bounty
    Cancel { bounty: String },

    /// Ask for scraping strategies for a bounty
    Strategy { bounty: String },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt().with_env_filter("info").init();
    }

    let client = client::MarketClient::new(&cli.server);

    let result = match cli.command {
        Commands::Login { role } => {
            print_banner();
            commands::session::login(&client, role.into()).await
        }
        Commands::Logout => commands::session::logout(&client).await,
        Commands::Whoami => commands::session::whoami(&client).await,
        Commands::Dashboard => commands::dashboard::run(&client).await,
        Commands::Bounties { category } => {
            commands::bounties::list(&client, category.as_deref()).await
        }
        Commands::Show { bounty } => commands::bounties::show(&client, &bounty).await,
        Commands::Post => wizard::run_post_wizard(&client).await,
        Commands::Submit { bounty, files } => {
            commands::submit::run(&client, &bounty, &files).await
        }
        Commands::Payout {
            submission,
            kind,
            amount,
        } => commands::review::payout(&client, &submission, kind.into(), amount).await,
        Commands::Reject {
            submission,
            comment,
        } => commands::review::reject(&client, &submission, comment.as_deref()).await,
        Commands::Complete { bounty } => commands::bounties::complete(&client, &bounty).await,
        Commands::Cancel { bounty } => commands::bounties::cancel(&client, &bounty).await,
        Commands::Strategy { bounty } => commands::bounties::strategy(&client, &bounty).await,
    };

    if let Err(e) = result {
        print_error(&format!("{}", e));
        std::process::exit(1);
    }
}

pub fn print_banner() {
    println!("{}", style_cyan(BANNER));
    println!(
        "  {} {}",
        style_dim("DataBounty"),
        style_dim(&format!("v{}", VERSION))
    );
    println!();
}
