pub mod markdown;
pub mod terminal;

use std::path::Path;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::report::view::ReportScreen;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to write report file: {0}")]
    FileWrite(#[from] std::io::Error),
}

/// Output the screen to terminal (default) or to a markdown file.
#[instrument(skip(screen))]
pub fn output(screen: &ReportScreen, output_path: Option<&Path>) -> Result<(), RenderError> {
    match output_path {
        None => {
            debug!("writing report to terminal");
            print!("{}", terminal::render(screen));
            Ok(())
        }
        Some(path) => {
            debug!(path = %path.display(), "writing report to file");
            std::fs::write(path, markdown::render(screen))?;
            Ok(())
        }
    }
}

/// Score without a trailing `.0` for whole numbers.
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        format!("{:.1}", score)
    }
}
