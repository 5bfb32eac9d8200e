//! Command-line interface for tcover
//!
//! The `tcover` binary lives in `main.rs`; argument parsing and the
//! request it builds are kept here so they can be tested in isolation.

pub mod cli;

pub use cli::Cli;

use tcover::error::Result;
use tcover::CoverReport;

/// Renders the cover described by parsed arguments
pub fn run(cli: &Cli) -> Result<CoverReport> {
    let request = cli.request();
    log::debug!(
        "Request: {} title chars, subtitle: {}, output: {}",
        request.title().chars().count(),
        request.subtitle().is_some(),
        request.output().display()
    );
    tcover::create_title_cover(&request)
}
