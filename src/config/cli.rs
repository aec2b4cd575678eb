use crate::config::ClientConfig;
use crate::domain::model::OrderStatus;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "cafe-client")]
#[command(about = "Command-line client for the Tokyo Kafe ordering API")]
pub struct Cli {
    /// Path to TOML configuration file with a [client] table
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List active categories
    Categories,

    /// List menu items, optionally filtered
    Menu {
        #[arg(long)]
        category: Option<u64>,

        #[arg(long)]
        search: Option<String>,
    },

    /// Show a single menu item
    MenuItem { id: u64 },

    Promotions,

    /// List public reviews (or every review with --all)
    Reviews {
        #[arg(long)]
        all: bool,
    },

    Orders,

    Order { id: u64 },

    /// Change an order's status (pending, preparing, ready, served, cancelled)
    OrderStatus { id: u64, status: OrderStatus },

    Stats,

    Settings,

    /// Show text content blocks, optionally of one type
    Text {
        #[arg(long = "type")]
        content_type: Option<String>,
    },

    Info,

    /// Show the current session cart
    Cart,

    CartAdd {
        item: u64,

        #[arg(long, default_value = "1")]
        quantity: u32,

        #[arg(long)]
        notes: Option<String>,
    },

    CartUpdate {
        item: u64,

        #[arg(long)]
        quantity: Option<u32>,

        #[arg(long)]
        notes: Option<String>,
    },

    CartRemove { item: u64 },

    CartClear,

    /// Turn the session cart into an order for a table
    Checkout {
        table: u32,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    CreateCategory {
        name: String,

        #[arg(long)]
        uz: String,

        #[arg(long)]
        ru: String,

        #[arg(long)]
        icon: Option<String>,

        /// Image file uploaded as multipart
        #[arg(long)]
        image: Option<PathBuf>,
    },
}

impl Cli {
    /// 設定來源優先序：預設值 < 設定檔 < 環境變數 < 命令列
    pub fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                ClientConfig::from_file(path)?
            }
            None => ClientConfig::default(),
        }
        .with_env_overrides();

        if let Some(url) = &self.base_url {
            tracing::info!("🔧 Base URL overridden to: {}", url);
            config.base_url = url.clone();
        }

        Ok(config)
    }
}
