use super::toml_config::TomlConfig;
use super::Settings;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "dog-breeds")]
#[command(about = "List the sub-breeds of one or more dog breeds")]
pub struct CliConfig {
    /// Breeds to resolve, forwarded to the service as typed
    #[arg(required = true)]
    pub breeds: Vec<String>,

    /// Breed-listing endpoint [default: https://dog.ceo/api/breed]
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout; the HTTP client default applies when unset
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print results as a JSON object keyed by breed
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn settings(&self) -> Result<Settings> {
        let file = self.config.as_ref().map(TomlConfig::from_file).transpose()?;

        Ok(Settings::merge(
            self.base_url.clone(),
            self.timeout_seconds,
            file,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_breeds_and_flags() {
        let cli = CliConfig::parse_from([
            "dog-breeds",
            "hound",
            "husky",
            "--timeout-seconds",
            "5",
            "--json",
        ]);

        assert_eq!(cli.breeds, vec!["hound", "husky"]);
        assert_eq!(cli.timeout_seconds, Some(5));
        assert!(cli.json);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_breed_is_required() {
        assert!(CliConfig::try_parse_from(["dog-breeds"]).is_err());
    }

    #[test]
    fn test_settings_from_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[service]\nbase_url = \"http://127.0.0.1:1/api/breed\"\ntimeout_seconds = 2"
        )
        .unwrap();

        let cli = CliConfig::parse_from([
            "dog-breeds".to_string(),
            "--config".to_string(),
            file.path().display().to_string(),
            "--timeout-seconds".to_string(),
            "9".to_string(),
            "hound".to_string(),
        ]);

        let settings = cli.settings().unwrap();
        assert_eq!(settings.base_url, "http://127.0.0.1:1/api/breed");
        assert_eq!(settings.timeout_seconds, Some(9));
    }
}
