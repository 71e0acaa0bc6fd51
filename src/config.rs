// src/config.rs
//! Command-line input and resolved site configuration.

use crate::constants::LISTING_PAGE_SIZE;
use crate::error::AppError;
use crate::types::{AccessToken, Slug, ValidationError};
use clap::{Parser, Subcommand};
use url::Url;

const ENDPOINT_ENV_VAR: &str = "PRISMIC_API_ENDPOINT";
const ACCESS_TOKEN_ENV_VAR: &str = "PRISMIC_ACCESS_TOKEN";

/// Parsed and validated command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Repository API endpoint (e.g. "https://repo.cdn.prismic.io/api/v2");
    /// falls back to PRISMIC_API_ENDPOINT
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Access token for private repositories; falls back to PRISMIC_ACCESS_TOKEN
    #[arg(long)]
    pub access_token: Option<String>,

    /// Listing page size
    #[arg(long, default_value_t = LISTING_PAGE_SIZE)]
    pub page_size: u32,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the post listing, extending it across repeated fetches
    Listing {
        /// How many pages to aggregate (stops early when no more exist)
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// Render a single post by its slug
    Post { slug: String },
    /// Print every known post identifier (the build-time enumeration)
    Paths,
}

/// Resolved site configuration — validated and ready to build a client.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub api_endpoint: Url,
    pub access_token: Option<AccessToken>,
    pub page_size: u32,
}

impl SiteConfig {
    /// Resolves configuration from arguments with environment fallback.
    pub fn resolve(input: &CommandLineInput) -> Result<Self, AppError> {
        let raw_endpoint = input
            .endpoint
            .clone()
            .or_else(|| std::env::var(ENDPOINT_ENV_VAR).ok())
            .ok_or_else(|| {
                AppError::MissingConfiguration(format!(
                    "no repository endpoint: pass --endpoint or set {}",
                    ENDPOINT_ENV_VAR
                ))
            })?;
        let api_endpoint = parse_endpoint(&raw_endpoint)?;

        let access_token = input
            .access_token
            .clone()
            .or_else(|| std::env::var(ACCESS_TOKEN_ENV_VAR).ok())
            .map(|raw| AccessToken::new(&raw))
            .transpose()?;

        Ok(Self {
            api_endpoint,
            access_token,
            page_size: input.page_size,
        })
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ValidationError> {
    let url = Url::parse(raw.trim()).map_err(|err| ValidationError::InvalidEndpoint {
        url: raw.to_string(),
        reason: err.to_string(),
    })?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ValidationError::InvalidEndpoint {
            url: raw.to_string(),
            reason: format!("unsupported scheme {:?}", url.scheme()),
        });
    }
    Ok(url)
}

/// Parses the slug argument of the `post` subcommand.
pub fn parse_slug_argument(raw: &str) -> Result<Slug, AppError> {
    Ok(Slug::parse(raw)?)
}
