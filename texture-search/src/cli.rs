use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "texture-search",
    about = "Find free 4K textures from trusted CC0 libraries",
    version = env!("CARGO_PKG_VERSION"),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Search textures by free-text query")]
    Search {
        #[arg(required = true, help = "What to look for, e.g. 'mossy stone'")]
        query: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        service: ServiceArgs,
    },

    #[command(about = "Search one of the built-in categories")]
    Category {
        #[arg(help = "Category id (see `texture-search categories`)")]
        id: String,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        service: ServiceArgs,
    },

    #[command(about = "List built-in categories")]
    Categories,
}

#[derive(Args)]
pub struct OutputArgs {
    #[arg(long, help = "Print the final session state as JSON")]
    pub json: bool,

    #[arg(long, value_name = "ID", help = "Show the detail view of one result")]
    pub preview: Option<usize>,
}

#[derive(Args)]
pub struct ServiceArgs {
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true, help = "API key for the assistant service")]
    pub api_key: Option<String>,

    #[arg(long, env = "ANTHROPIC_BASE_URL", help = "Override the service base URL")]
    pub base_url: Option<String>,

    #[arg(long, env = "TEXTURE_SEARCH_MODEL", help = "Model used for both stages")]
    pub model: Option<String>,

    #[arg(long, value_name = "SECS", help = "Per-request timeout")]
    pub timeout: Option<u64>,
}
