use clap::{Parser, ValueEnum};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when none is given.
const CWD_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Host to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum)]
    pub log_format: Option<LogFormat>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub theme: ThemeConfig,
    pub breakpoints: BreakpointConfig,
    pub shell: ShellConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub static_dir: String,
}

/// Layout constants shared by the app bar and the drawers, in CSS pixels.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ThemeConfig {
    pub bar_height: u32,
    pub drawer_width: u32,
    pub drawer_closed_width: u32,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct BreakpointConfig {
    /// Widths below this are narrow.
    pub small: u32,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct ShellConfig {
    pub placeholder_rows: u32,
    pub session_timeout_secs: u64,
    pub cleanup_interval_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct LogConfig {
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn as_str(self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Json => "json",
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args).map_err(|e| ConfigError::Message(e.to_string()))?;

        // Priority: CLI flag / CLI env var > CHATUS_ env > config file > defaults.
        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.static_dir", "static")?
            .set_default("theme.bar_height", 50)?
            .set_default("theme.drawer_width", 240)?
            .set_default("theme.drawer_closed_width", 70)?
            .set_default(
                "breakpoints.small",
                i64::from(crate::viewport::DEFAULT_SMALL_BREAKPOINT),
            )?
            .set_default("shell.placeholder_rows", 100)?
            .set_default("shell.session_timeout_secs", 30 * 60)?
            .set_default("shell.cleanup_interval_secs", 60)?
            .set_default("log.format", LogFormat::Pretty.as_str())?;

        if let Some(path) = &cli.config {
            builder = builder.add_source(File::from(PathBuf::from(path)));
        } else if Path::new(CWD_CONFIG_FILE).exists() {
            builder = builder.add_source(File::from(Path::new(CWD_CONFIG_FILE)));
        }

        // E.g. CHATUS_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("CHATUS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(format) = cli.log_format {
            builder = builder.set_override("log.format", format.as_str())?;
        }

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject layouts that cannot render.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.theme.bar_height == 0 {
            return Err(ConfigError::Message(
                "theme.bar_height must be greater than 0".to_string(),
            ));
        }
        if self.theme.drawer_width == 0 {
            return Err(ConfigError::Message(
                "theme.drawer_width must be greater than 0".to_string(),
            ));
        }
        if self.theme.drawer_closed_width > self.theme.drawer_width {
            return Err(ConfigError::Message(format!(
                "theme.drawer_closed_width ({}) exceeds theme.drawer_width ({})",
                self.theme.drawer_closed_width, self.theme.drawer_width
            )));
        }
        if self.breakpoints.small == 0 {
            return Err(ConfigError::Message(
                "breakpoints.small must be greater than 0".to_string(),
            ));
        }
        if self.shell.cleanup_interval_secs == 0 {
            return Err(ConfigError::Message(
                "shell.cleanup_interval_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
