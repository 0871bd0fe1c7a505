use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*, registry::Registry};
use vboxweb_client::{BasicAuth, ClientConfig};

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Manage VirtualBox machines through the VirtualBox web service
#[derive(Parser)]
#[command(name = "vboxctl", version, about, long_about = None)]
pub struct Args {
    /// Web service endpoint
    #[arg(long, env = "VBOXWEB_URL", default_value = "http://127.0.0.1:18083/")]
    pub url: String,

    /// User name for the web session logon
    #[arg(short, long, env = "VBOXWEB_USER", default_value = "")]
    pub user: String,

    /// Password for the web session logon
    #[arg(
        short = 'P',
        long,
        env = "VBOXWEB_PASSWORD",
        default_value = "",
        hide_env_values = true
    )]
    pub password: String,

    /// Also send the credentials as HTTP Basic authentication (for proxies)
    #[arg(long)]
    pub basic_auth: bool,

    /// Accept any TLS certificate
    #[arg(long)]
    pub insecure: bool,

    /// Give up on a request after this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbose logging (can be repeated for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the server version and API version
    Version,
    /// List registered machines with their id and state
    List,
    /// Show the configuration of one machine
    Info {
        /// Machine name or UUID
        machine: String,
    },
    /// Power a machine on and wait until it is up
    Start {
        /// Machine name or UUID
        machine: String,
        /// Frontend the machine runs in
        #[arg(long = "type", value_enum, default_value_t = Frontend::Headless)]
        frontend: Frontend,
    },
    /// Power a machine off and wait until it is down
    Stop {
        /// Machine name or UUID
        machine: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Frontend {
    Headless,
    Gui,
    Separate,
}

impl Frontend {
    /// The session type name `IMachine_launchVMProcess` expects.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Headless => "headless",
            Self::Gui => "gui",
            Self::Separate => "separate",
        }
    }
}

/// Sets up a panic hook so panics end up in the log.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!("A panic occurred: {panic_info}");
    }));
}

fn filter_for(verbose_level: u8) -> &'static str {
    match verbose_level {
        0 => "warn",
        1 => "info,ureq=warn",
        2 => "debug,ureq=info",
        _ => "trace",
    }
}

/// Initialize logging on stderr, or in `log_file` when given.
///
/// `RUST_LOG` overrides the level derived from `-v`.
pub fn init_logging(verbose_level: u8, log_file: Option<&Path>) -> anyhow::Result<()> {
    setup_panic_hook();

    // Bridge logs from the `log` crate (ureq, native-tls) to `tracing`
    LogTracer::init().ok();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for(verbose_level)));

    let file_layer = match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            let (nb_writer, guard) = tracing_appender::non_blocking(file);
            if LOG_GUARD.set(guard).is_err() {
                tracing::warn!("LOG_GUARD was already set");
            }
            Some(
                fmt::layer()
                    .with_writer(nb_writer)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_ansi(false)
                    .compact(),
            )
        }
        None => None,
    };

    let stderr_layer = log_file.is_none().then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact()
    });

    let subscriber = Registry::default()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer);

    tracing::subscriber::set_global_default(subscriber)?;
    tracing::debug!(verbose_level, "logging initialized");

    Ok(())
}

/// Create the client configuration from command line arguments
pub fn client_config(args: &Args) -> ClientConfig {
    let mut config = ClientConfig::builder()
        .url(args.url.clone())
        .skip_tls_verify(args.insecure)
        .build();

    if args.basic_auth {
        config.auth = Some(BasicAuth::new(&args.user, &args.password));
    }
    config.timeout = args.timeout.map(Duration::from_secs);

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_start_with_frontend() {
        let args = Args::try_parse_from([
            "vboxctl",
            "--url",
            "https://vbox.example.org:18083/",
            "-u",
            "admin",
            "--insecure",
            "start",
            "build-01",
            "--type",
            "gui",
        ])
        .unwrap();

        assert_eq!(args.url, "https://vbox.example.org:18083/");
        assert!(args.insecure);
        match args.command {
            Command::Start { machine, frontend } => {
                assert_eq!(machine, "build-01");
                assert_eq!(frontend.as_str(), "gui");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn start_defaults_to_headless() {
        let args = Args::try_parse_from(["vboxctl", "start", "build-01"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Start {
                frontend: Frontend::Headless,
                ..
            }
        ));
    }

    #[test]
    fn missing_subcommand_is_rejected() {
        assert!(Args::try_parse_from(["vboxctl", "--url", "http://x/"]).is_err());
    }

    #[test]
    fn client_config_maps_flags() {
        let args = Args::try_parse_from([
            "vboxctl",
            "--url",
            "http://127.0.0.1:18083/",
            "-u",
            "admin",
            "-P",
            "secret",
            "--basic-auth",
            "--timeout",
            "90",
            "list",
        ])
        .unwrap();
        let config = client_config(&args);

        assert_eq!(config.url, "http://127.0.0.1:18083/");
        assert!(!config.skip_tls_verify);
        assert_eq!(config.auth, Some(BasicAuth::new("admin", "secret")));
        assert_eq!(config.timeout, Some(Duration::from_secs(90)));
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(filter_for(0), "warn");
        assert_eq!(filter_for(2), "debug,ureq=info");
        assert_eq!(filter_for(7), "trace");
    }
}
