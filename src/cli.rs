//! Command-line interface definition using clap.
//!
//! The CLI covers the offline part of the workflow: parse a chat export,
//! organize Friday playlists, and report what would be created. The
//! known-names file stands in for the registry fetches — feed it the
//! combined playlist names from the community site and the user's Spotify
//! account, one per line, in whatever spelling each uses.

use clap::Parser;

/// Turn a WhatsApp chat export into weekly Spotify playlist drafts.
#[derive(Parser, Debug, Clone)]
#[command(name = "trackpack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    trackpack chat.txt
    trackpack chat.txt --known-names existing.txt
    trackpack chat.txt -k existing.txt --tracks")]
pub struct Args {
    /// Path to the WhatsApp chat export (TXT)
    pub input: String,

    /// File with existing playlist names, one per line (the union of both
    /// registries; blank lines are ignored)
    #[arg(short = 'k', long, value_name = "FILE")]
    pub known_names: Option<String>,

    /// Print the track URIs of each planned playlist
    #[arg(short, long)]
    pub tracks: bool,
}
