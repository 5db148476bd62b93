use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use tracing::debug;
use weather_core::{Config, PresentationResult, QueryResult, present, provider_from_config};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather CLI")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure {
        /// API key; prompted for when omitted.
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Show current weather for a city.
    Show {
        /// City name; prompted for when omitted.
        city: Option<String>,

        /// API key to use instead of the stored one.
        #[arg(long, env = "API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },

    /// Print where the config file lives.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { api_key } => configure(api_key),
            Command::Show { city, api_key } => show(city, api_key).await,
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
                Ok(())
            }
        }
    }
}

fn configure(api_key: Option<String>) -> anyhow::Result<()> {
    let api_key = match api_key {
        Some(key) => key,
        None => Password::new("OpenWeather API key:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()
            .context("Failed to read API key")?,
    };

    let api_key = api_key.trim().to_string();
    if api_key.is_empty() {
        bail!("API key must not be empty");
    }

    let mut config = Config::load()?;
    config.set_api_key(api_key);
    config.save()?;

    println!("Saved API key to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: Option<String>, api_key: Option<String>) -> anyhow::Result<()> {
    let city = match city {
        Some(city) => city,
        None => Text::new("Enter City:").prompt().context("Failed to read city")?,
    };

    let config = Config::load()?;
    let provider = provider_from_config(config.provider_config(api_key.as_deref())?);
    debug!(?provider, "provider ready");

    match provider.query_city(&city).await {
        QueryResult::Success(report) => {
            println!("{}", render(&present(&report)));
            Ok(())
        }
        // Already a user-facing message; print it as-is.
        QueryResult::Failure(failure) => Err(failure.into()),
    }
}

fn render(result: &PresentationResult) -> String {
    let mut lines = vec![result.temperature_display.as_str()];
    if !result.glyph.is_empty() {
        lines.push(result.glyph.as_str());
    }
    lines.push(result.description_display.as_str());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_show_with_city() {
        let cli = Cli::try_parse_from(["weather", "show", "London", "--api-key", "KEY"])
            .expect("valid arguments");
        match cli.command {
            Command::Show { city, api_key } => {
                assert_eq!(city.as_deref(), Some("London"));
                assert_eq!(api_key.as_deref(), Some("KEY"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn api_key_is_read_from_env_file() {
        let dir = std::env::temp_dir().join(format!("weather-cli-dotenv-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let env_file = dir.join(".env");
        std::fs::write(&env_file, "API_KEY=FROM_DOTENV\n").unwrap();

        dotenvy::from_path_override(&env_file).expect(".env loads");
        let cli = Cli::try_parse_from(["weather", "show", "London"]).expect("valid arguments");

        match cli.command {
            Command::Show { api_key, .. } => assert_eq!(api_key.as_deref(), Some("FROM_DOTENV")),
            other => panic!("unexpected command {other:?}"),
        }

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn verbose_counts_after_subcommand() {
        let cli = Cli::try_parse_from(["weather", "config-path", "-vv"]).expect("valid arguments");
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn render_stacks_fields() {
        let shown = render(&PresentationResult {
            temperature_display: "59°F".into(),
            description_display: "Clear sky".into(),
            glyph: "☀️".into(),
        });
        assert_eq!(shown, "59°F\n☀️\nClear sky");
    }

    #[test]
    fn render_skips_missing_glyph() {
        let shown = render(&PresentationResult {
            temperature_display: "81°F".into(),
            description_display: "Odd".into(),
            glyph: String::new(),
        });
        assert_eq!(shown, "81°F\nOdd");
    }
}
