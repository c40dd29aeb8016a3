use anyhow::{Context, Result};
use clap::Parser;

use feedpick::app::{self, App};
use feedpick::catalog::{self, FeedSource};
use feedpick::display;
use feedpick::feed::default_client;
use feedpick::opener;
use feedpick::util::validate_url;

#[derive(Parser, Debug)]
#[command(name = "feedpick", about = "Fetch a feed from the source catalog and print its entries")]
struct Args {
    /// Source to fetch: a catalog index or a (prefix of a) source name
    source: Option<String>,

    /// List the catalog sources and exit
    #[arg(long)]
    list: bool,

    /// Fetch an ad-hoc feed URL instead of a catalog source
    #[arg(long, value_name = "URL", conflicts_with = "source")]
    url: Option<String>,

    /// Fetch every catalog source and print a per-source summary
    #[arg(long, conflicts_with_all = ["source", "url", "open"])]
    all: bool,

    /// After printing, open entry N's link in the system browser
    #[arg(long, value_name = "N")]
    open: Option<usize>,

    /// Print entries as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

fn print_catalog(sources: &[FeedSource]) {
    for (index, source) in sources.iter().enumerate() {
        println!("{:>3}  {:<20}  {}", index, source.name, source.url);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let sources = catalog::builtin();

    if args.list {
        print_catalog(&sources);
        return Ok(());
    }

    let client = default_client().context("Failed to build HTTP client")?;

    if args.all {
        let summaries = app::refresh_all(&client, &sources).await;
        let mut failures = 0;
        for summary in &summaries {
            match &summary.result {
                Ok(count) => println!("{:<20}  {} entries", summary.name, count),
                Err(e) => {
                    failures += 1;
                    eprintln!("{:<20}  failed: {}", summary.name, e);
                }
            }
        }
        if failures > 0 {
            eprintln!("{} of {} sources failed", failures, summaries.len());
        }
        return Ok(());
    }

    let url = match (&args.url, &args.source) {
        (Some(url), _) => validate_url(url)
            .with_context(|| format!("Refusing to fetch '{}'", url))?
            .to_string(),
        (None, Some(selector)) => catalog::resolve(&sources, selector)?.url.clone(),
        (None, None) => {
            eprintln!("No source selected. Pick one by index or name:");
            eprintln!();
            print_catalog(&sources);
            eprintln!();
            eprintln!("  feedpick 4            # by index");
            eprintln!("  feedpick gigazine     # by name");
            eprintln!("  feedpick --url <URL>  # ad-hoc feed");
            std::process::exit(1);
        }
    };

    let mut app = App::new();
    let ticket = app.begin_load();
    let result = app::load_feed(&client, &url).await;

    // Keep the error for the exit path; App only logs it.
    let failed = result.as_ref().err().map(|e| e.to_string());
    app.apply(ticket, result);

    if let Some(message) = failed {
        anyhow::bail!("Feed load failed: {}", message);
    }

    if args.json {
        println!("{}", display::render_json(app.items())?);
    } else {
        for (index, item) in app.items().iter().enumerate() {
            println!("{}", display::render_item(index, item));
        }
        if app.items().is_empty() {
            eprintln!("Feed parsed but contained no entries");
        }
    }

    if let Some(index) = args.open {
        match app.items().get(index) {
            Some(item) => {
                opener::open_link(item.link.as_deref());
            }
            None => eprintln!(
                "No entry {} to open ({} entries)",
                index,
                app.items().len()
            ),
        }
    }

    Ok(())
}
