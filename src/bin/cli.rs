//! Crowdfund CLI
//!
//! Command-line front-end for the crowdfunding ledger:
//! - List projects
//! - Show the account balance
//! - Create and support projects
//! - Generate a config file
//!
//! Signing happens on the node, which must manage the account
//! (`eth_accounts`), e.g. a local dev chain.

use clap::{Parser, Subcommand};
use crowdfund::config::{generate_default_config, LoggingConfig};
use crowdfund::{
    launch, Action, Config, Dapp, HttpTransport, NewProject, Notification, ProjectCard, RpcLedger,
    Surface,
};
use std::cell::RefCell;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "crowdfund")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse and fund projects on the crowdfunding ledger")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/crowdfund/config.toml or ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON-RPC endpoint, overrides the config file
    #[arg(long, global = true)]
    pub rpc_url: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all projects
    Projects,

    /// Show the token balance of the node's default account
    Balance,

    /// Create a project
    Create {
        /// Project name
        #[arg(short, long)]
        name: String,
        /// Project description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Funding goal in whole tokens (e.g. 5 or 12.5)
        #[arg(short, long)]
        goal: String,
    },

    /// Approve and fund a project
    Support {
        /// Project index as shown by `projects`
        index: u64,
        /// Amount in whole tokens
        amount: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Prints notifications to stderr and keeps the latest view state
struct TerminalSurface {
    json: bool,
    notification: RefCell<Notification>,
    balance: RefCell<Option<String>>,
    cards: RefCell<Vec<ProjectCard>>,
}

impl TerminalSurface {
    fn new(json: bool) -> Self {
        Self {
            json,
            notification: RefCell::new(Notification::Hidden),
            balance: RefCell::new(None),
            cards: RefCell::new(Vec::new()),
        }
    }

    fn print_projects(&self) -> anyhow::Result<()> {
        let cards = self.cards.borrow();
        if self.json {
            println!("{}", serde_json::to_string_pretty(&*cards)?);
            return Ok(());
        }

        if cards.is_empty() {
            println!("No projects yet.");
            println!();
            println!("Create the first one with:");
            println!("  crowdfund-cli create --name \"My project\" --goal 10");
            return Ok(());
        }

        println!(
            "{:<6} {:<24} {:>14} {:>10} {:>10}  {}",
            "Index", "Name", "Goal", "Progress", "Backers", "Creator"
        );
        println!("{}", "-".repeat(110));
        for card in cards.iter() {
            println!(
                "{:<6} {:<24} {:>14} {:>9}% {:>10}  {}",
                card.index,
                truncate(&card.name, 24),
                card.goal,
                card.progress_label,
                card.supporters,
                card.creator
            );
        }
        Ok(())
    }

    fn print_balance(&self) -> anyhow::Result<()> {
        let balance = self.balance.borrow().clone().unwrap_or_else(|| "-".to_string());
        if self.json {
            println!("{}", serde_json::json!({ "balance": balance }));
        } else {
            println!("Balance: {} cUSD", balance);
        }
        Ok(())
    }
}

impl Surface for TerminalSurface {
    fn notify(&self, text: &str) {
        self.notification.borrow_mut().notify(text);
        eprintln!("{}", text);
    }

    fn clear(&self) {
        self.notification.borrow_mut().clear();
    }

    fn show_balance(&self, balance: &str) {
        *self.balance.borrow_mut() = Some(balance.to_string());
    }

    fn show_projects(&self, cards: Vec<ProjectCard>) {
        *self.cards.borrow_mut() = cards;
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("crowdfund={}", logging.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Connect through the node and load balance + projects
async fn open(config: &Config, json: bool) -> anyhow::Result<Dapp<RpcLedger<HttpTransport>, TerminalSurface>> {
    tracing::info!("Connecting to {}", config.network.rpc_url);
    let transport = HttpTransport::new(config.network.rpc_url.clone(), config.network.request_timeout())?;
    let dapp = launch(Some(transport), config, TerminalSurface::new(json)).await?;

    // launch keeps the controller on read failures; a one-shot command cannot use it
    if let Some(text) = dapp.surface().notification.borrow().text() {
        anyhow::bail!("{}", text);
    }
    Ok(dapp)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.rpc_url {
        config.network.rpc_url = url;
    }
    init_logging(&config.logging);

    let json = cli.format == "json";
    match cli.command {
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
        Commands::Projects => {
            let dapp = open(&config, json).await?;
            dapp.surface().print_projects()?;
        }
        Commands::Balance => {
            let dapp = open(&config, json).await?;
            dapp.surface().print_balance()?;
        }
        Commands::Create {
            name,
            description,
            goal,
        } => {
            let dapp = open(&config, json).await?;
            dapp.dispatch(Action::CreateProject(NewProject {
                name,
                description,
                goal,
            }))
            .await?;
            dapp.surface().print_projects()?;
        }
        Commands::Support { index, amount } => {
            let dapp = open(&config, json).await?;
            dapp.dispatch(Action::SupportProject { index, amount }).await?;
            dapp.surface().print_projects()?;
            dapp.surface().print_balance()?;
        }
    }

    Ok(())
}
