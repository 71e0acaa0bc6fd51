// src/main.rs

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use spacetraveling::{
    compose_detail_view, compose_listing_markdown, fetch_first_page, parse_slug_argument,
    AggregatedListing, CmsHttpClient, Command, CommandLineInput, ContentSource, ListingQuery,
    RenderFallbackController, SiteConfig, POSTS_DOCUMENT_TYPE,
};
use std::fs;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("spacetraveling.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::debug!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Aggregates up to `pages` listing pages and prints the listing view.
async fn run_listing(client: &CmsHttpClient, query: &ListingQuery, pages: u32) -> anyhow::Result<()> {
    let first = fetch_first_page(client, query).await?;
    let mut listing = AggregatedListing::from_first_page(first);

    // The "load more" trigger: one extend per remaining requested page,
    // stopping cleanly once the cursor is exhausted.
    for _ in 1..pages {
        if !listing.has_more() {
            break;
        }
        listing = listing.extend(client, query).await?;
    }

    print!("{}", compose_listing_markdown(&listing));
    Ok(())
}

/// Resolves one post through the fallback state machine and prints it.
async fn run_post(client: &CmsHttpClient, slug_arg: &str) -> anyhow::Result<()> {
    let slug = parse_slug_argument(slug_arg)?;
    let controller = RenderFallbackController::prerender(client, POSTS_DOCUMENT_TYPE).await?;
    let state = controller.resolve(&slug, client).await;
    println!("{}", compose_detail_view(&state));
    Ok(())
}

/// Prints the build-time path enumeration.
async fn run_paths(client: &CmsHttpClient) -> anyhow::Result<()> {
    let slugs = client.enumerate_all_identifiers(POSTS_DOCUMENT_TYPE).await?;
    for slug in slugs {
        println!("/post/{}", slug);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let input = CommandLineInput::parse();
    setup_logging(input.verbose)
        .map_err(|err| anyhow::anyhow!("{}", err))
        .context("failed to initialize logging")?;

    let config = SiteConfig::resolve(&input)?;
    let client = CmsHttpClient::new(&config)?;
    let query = ListingQuery {
        page_size: config.page_size,
        ..ListingQuery::default()
    };

    match input.command {
        Command::Listing { pages } => run_listing(&client, &query, pages).await,
        Command::Post { slug } => run_post(&client, &slug).await,
        Command::Paths => run_paths(&client).await,
    }
}
