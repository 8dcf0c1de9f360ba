use std::path::Path;

// Declare the modules that make up this crate.
#[cfg(feature = "clap")]
pub mod cli;
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
#[cfg(feature = "clap")]
pub use cli::RunArgs;
pub use error::ConfigError;
pub use settings::{ChartStyle, Config, RunConfig, RunSettings};

/// Base name of the optional configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_NAME: &str = "qanalyze";

/// Prefix of the environment variables that override file settings,
/// e.g. `QANALYZE_CHART__CANVAS_WIDTH=800`.
pub const ENV_PREFIX: &str = "QANALYZE";

/// Loads the application configuration.
///
/// Sources are layered from lowest to highest precedence: built-in defaults,
/// the TOML file (`path`, or an optional `qanalyze.toml` in the working
/// directory), then `QANALYZE_*` environment variables. The result is
/// validated before it is returned.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(?config, "Configuration loaded.");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn loads_values_from_explicit_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[run]\ninput_path = \"bench.csv\"\n\n[chart]\ncanvas_width = 800\nline_thickness = 1.5\n"
        )
        .unwrap();
        drop(file);

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.run.input_path, Some(PathBuf::from("bench.csv")));
        assert_eq!(config.run.output_directory, None);
        assert_eq!(config.chart.canvas_width, 800);
        // Unspecified keys keep their defaults.
        assert_eq!(config.chart.canvas_height, 400);
        assert_eq!(config.chart.line_thickness, 1.5);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = load_config(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn invalid_values_are_rejected_after_loading() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[chart]\ncanvas_height = 0\n").unwrap();

        let result = load_config(Some(&path));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
