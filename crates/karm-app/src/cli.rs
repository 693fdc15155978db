use clap::{Parser, Subcommand};

/// Karm — the ArogyaDrishti health assistant in your terminal.
#[derive(Parser, Debug)]
#[command(name = "karm", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Gemini model override (e.g. gemini-2.5-flash).
    #[arg(short, long)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List nearby public healthcare services as map-search links.
    Care {
        /// Latitude to center the search on.
        #[arg(long, requires = "lng")]
        lat: Option<f64>,
        /// Longitude to center the search on.
        #[arg(long, requires = "lat")]
        lng: Option<f64>,
    },
}

pub fn parse() -> Args {
    Args::parse()
}
