use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::data::context::DataSources;
use crate::data::prepare::PrepareOptions;

/// Language of every label and narrative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Language {
    #[default]
    #[value(name = "en")]
    English,
    #[value(name = "id")]
    Indonesian,
}

/// Which arrangement of sections the dashboard shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    /// Metrics, hourly and seasonal charts, then both questions.
    #[default]
    Overview,
    /// Welcome text, metrics, the two analysis questions and a footer.
    Analysis,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "bikeshare-dashboard")]
#[command(about = "Interactive dashboard over the daily and hourly bike-sharing dataset")]
#[command(version)]
pub struct Cli {
    /// Directory holding the daily and hourly CSV files
    #[arg(short, long, env = "BIKESHARE_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Daily source file name, relative to the data directory
    #[arg(long, default_value = "day.csv")]
    pub daily_file: PathBuf,

    /// Hourly source file name, relative to the data directory
    #[arg(long, default_value = "hour.csv")]
    pub hourly_file: PathBuf,

    /// Display language
    #[arg(short, long, value_enum, default_value_t = Language::English)]
    pub language: Language,

    /// Dashboard layout
    #[arg(long, value_enum, default_value_t = Layout::Overview)]
    pub layout: Layout,

    /// Multiplier turning the raw humidity column into percent
    #[arg(long, default_value_t = 100.0)]
    pub humidity_scale: f64,
}

/// Resolved startup configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub sources: DataSources,
    pub language: Language,
    pub layout: Layout,
}

impl From<Cli> for DashboardConfig {
    fn from(cli: Cli) -> Self {
        Self {
            sources: DataSources {
                daily_path: cli.data_dir.join(&cli.daily_file),
                hourly_path: cli.data_dir.join(&cli.hourly_file),
                prepare: PrepareOptions {
                    humidity_scale: cli.humidity_scale,
                },
            },
            language: cli.language,
            layout: cli.layout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_data_dir() {
        let cli = Cli::try_parse_from(["bikeshare-dashboard"]).unwrap();
        let config = DashboardConfig::from(cli);
        assert_eq!(config.sources.daily_path, PathBuf::from("data/day.csv"));
        assert_eq!(config.sources.hourly_path, PathBuf::from("data/hour.csv"));
        assert_eq!(config.sources.prepare, PrepareOptions::default());
        assert_eq!(config.language, Language::English);
        assert_eq!(config.layout, Layout::Overview);
    }

    #[test]
    fn parses_language_and_layout() {
        let cli = Cli::try_parse_from([
            "bikeshare-dashboard",
            "--data-dir",
            "/srv/bikes",
            "--language",
            "id",
            "--layout",
            "analysis",
            "--humidity-scale",
            "1",
        ])
        .unwrap();
        let config = DashboardConfig::from(cli);
        assert_eq!(config.sources.daily_path, PathBuf::from("/srv/bikes/day.csv"));
        assert_eq!(config.language, Language::Indonesian);
        assert_eq!(config.layout, Layout::Analysis);
        assert_eq!(config.sources.prepare.humidity_scale, 1.0);
    }

    #[test]
    fn rejects_unknown_language() {
        assert!(Cli::try_parse_from(["bikeshare-dashboard", "--language", "fr"]).is_err());
    }
}
