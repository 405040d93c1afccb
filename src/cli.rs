//! Command-line interface definitions.
//!
//! Every option can also be supplied through an environment variable, which
//! is how the generator is configured when it runs from a scheduled CI job.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::poll::DEFAULT_REFRESH_INTERVAL;
use crate::publish::ChannelMeta;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a feed in the terminal and refresh it periodically
    Read(ReadArgs),
    /// Scrape an article listing and write it out as an RSS feed
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
pub struct ReadArgs {
    /// RSS or Atom feed to display
    #[arg(
        long,
        env = "FEED_URL",
        default_value = "https://makemagazinde.github.io/Desktop-RSS-Reader/feed.xml"
    )]
    pub url: String,

    /// Seconds between refreshes
    #[arg(long, env = "REFRESH_INTERVAL", default_value_t = DEFAULT_REFRESH_INTERVAL.as_secs())]
    pub refresh_secs: u64,

    /// Most entries kept from the feed
    #[arg(long, env = "MAX_ITEMS", default_value_t = 20)]
    pub max_items: usize,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Listing page to scrape
    #[arg(long, env = "SITE_URL", default_value = "https://www.heise.de/make/plus")]
    pub site_url: String,

    /// Where to write the feed
    #[arg(short, long, env = "OUTPUT_PATH", default_value = "feed.xml")]
    pub output: PathBuf,

    /// Public URL of the generated feed (adds a self link)
    #[arg(long, env = "FEED_SELF_URL", default_value = "")]
    pub feed_self_url: String,

    #[arg(long, env = "CHANNEL_TITLE", default_value = "Make Magazin: heise+ Artikel | heise online")]
    pub channel_title: String,

    #[arg(long, env = "CHANNEL_DESC", default_value = "Aktuelle heise+ Artikel vom Make Magazin")]
    pub channel_desc: String,

    #[arg(long, env = "CHANNEL_LINK", default_value = "https://www.heise.de/make/plus/")]
    pub channel_link: String,

    /// Channel logo; empty disables the image element
    #[arg(
        long,
        env = "CHANNEL_IMAGE_URL",
        default_value = "https://www.heise.de/make/icons/favicon.svg"
    )]
    pub channel_image_url: String,

    #[arg(long, env = "CHANNEL_LANGUAGE", default_value = "de")]
    pub channel_language: String,

    #[arg(
        long,
        env = "GENERATOR",
        default_value = "https://github.com/MakeMagazinDE/Desktop-RSS-Reader"
    )]
    pub generator: String,

    /// Most articles written to the feed
    #[arg(long, env = "MAX_ITEMS", default_value_t = 30)]
    pub max_items: usize,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

impl GenerateArgs {
    /// Channel metadata, with empty optional URLs treated as absent.
    pub fn channel_meta(&self) -> ChannelMeta {
        let non_empty = |s: &str| (!s.trim().is_empty()).then(|| s.trim().to_string());
        ChannelMeta {
            title: self.channel_title.clone(),
            description: self.channel_desc.clone(),
            link: self.channel_link.clone(),
            image_url: non_empty(&self.channel_image_url),
            generator: self.generator.clone(),
            language: self.channel_language.clone(),
            self_url: non_empty(&self.feed_self_url),
        }
    }
}
