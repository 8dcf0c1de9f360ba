use crate::settings::RunSettings;
use clap::Args;
use std::path::PathBuf;

/// Command-line overrides for the run locations.
#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// The benchmark CSV file to analyze.
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// The directory that receives the generated documents.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl RunArgs {
    /// Layers these arguments on top of the loaded settings.
    pub fn apply(&self, settings: RunSettings) -> RunSettings {
        settings.with_overrides(self.input.clone(), self.output.clone())
    }
}
