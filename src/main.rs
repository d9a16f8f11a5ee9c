use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use storefront::api::CatalogClient;
use storefront::cart::read_cart_count;
use storefront::config::Config;
use storefront::logging::{init_tracing, LogTarget};
use storefront::markup::render_page;
use storefront::mvi::Reducer;
use storefront::page::{DispatchOutcome, PageIntent, Storefront, ViewReducer, ViewState};
use storefront::ui;
use storefront::view::DetailLinks;

#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Browse a product catalog from the terminal")]
struct Cli {
    /// Config file (default: <config_dir>/storefront/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Product API base URL
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Key-value store holding the cart
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive storefront (default)
    Browse,
    /// Fetch once and write the page as HTML
    Render(RenderArgs),
}

#[derive(Debug, Args)]
struct RenderArgs {
    /// Category slug to filter by
    #[arg(long)]
    category: Option<String>,

    /// Search text; takes priority over --category
    #[arg(long)]
    query: Option<String>,

    /// Number of "load more" steps to apply
    #[arg(long, default_value_t = 0)]
    more: u32,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RenderArgs {
    fn intents(&self) -> Vec<PageIntent> {
        let mut intents = Vec::new();
        if let Some(category) = &self.category {
            intents.push(PageIntent::SelectCategory {
                category: category.clone(),
            });
        }
        if let Some(query) = &self.query {
            intents.push(PageIntent::Search {
                input: query.clone(),
            });
        }
        for _ in 0..self.more {
            intents.push(PageIntent::LoadMore);
        }
        intents
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let command = cli.command.unwrap_or(Command::Browse);

    let target = match command {
        Command::Browse => LogTarget::File,
        Command::Render(_) => LogTarget::Stderr,
    };
    init_tracing(&config.logging, target).context("Failed to initialize logging")?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let client = CatalogClient::new(&config.api)?;
    let cart_count = read_cart_count(&config.storage.resolved_path(), &config.storage.cart_key);
    tracing::info!(cart_count, base_url = %config.api.base_url, "Starting storefront");
    let links = DetailLinks::new(config.page.detail_page.clone());

    match command {
        Command::Browse => {
            let page = Storefront::new(client, links, cart_count);
            ui::run(page, runtime.handle().clone())?;
        }
        Command::Render(args) => {
            runtime.block_on(render(args, client, links, cart_count))?;
        }
    }
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base) = &cli.api_base {
        config.api.base_url = base.clone();
    }
    if let Some(storage) = &cli.storage {
        config.storage.path = Some(storage.clone());
    }
    config.validate()?;
    Ok(config)
}

async fn render(
    args: RenderArgs,
    client: CatalogClient,
    links: DetailLinks,
    cart_count: usize,
) -> anyhow::Result<()> {
    let view = args
        .intents()
        .into_iter()
        .fold(ViewState::default(), ViewReducer::reduce);
    let page = Storefront::with_view(client, links, cart_count, view);
    if page.init().await == DispatchOutcome::Failed {
        tracing::warn!("Product request failed; rendering the error message");
    }

    let html = render_page(&page.snapshot());
    match &args.output {
        Some(path) => fs::write(path, html.as_str())
            .with_context(|| format!("Failed to write '{}'", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_str().as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
