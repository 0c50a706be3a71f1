use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;

#[cfg(test)]
mod tests;

pub use args::{ChatArgs, LogArgs, SearchArgs, TranscriptArgs, WebArgs};

#[derive(Debug, Parser)]
#[command(name = "vaidya")]
#[command(about = "Remedy lookup client for a Vaidya knowledge backend", version)]
pub struct Cli {
    /// State directory holding the chat transcript and request log.
    #[arg(long, default_value = ".vaidya")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the disease and ingredient filter values the backend offers.
    Filters,
    /// Run a filtered search and print the composed result panels.
    Search(SearchArgs),
    /// Ask the assistant one question, continuing the stored conversation.
    Chat(ChatArgs),
    /// Show or clear the stored chat transcript.
    Transcript(TranscriptArgs),
    /// Show recent backend request-log entries.
    Log(LogArgs),
    /// Serve the local web surface.
    Web(WebArgs),
}
