mod commands;
mod config;
mod session;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, instrument};
use vboxweb_client::{SoapClient, VboxPortType};

use config::{Args, Command, client_config, init_logging};
use session::with_session;

#[instrument(name = "main", level = "info", skip_all)]
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging. If it fails, we can't log, so just print and exit.
    if let Err(e) = init_logging(args.verbose, args.log_file.as_deref()) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run_app(&args) {
        error!("vboxctl failed: {e:?}");
        return Err(e);
    }

    Ok(())
}

fn run_app(args: &Args) -> anyhow::Result<()> {
    info!(url = %args.url, user = %args.user, "connecting to web service");

    let client = SoapClient::from_config(client_config(args))
        .with_context(|| format!("cannot use endpoint {}", args.url))?;
    let port = VboxPortType::new(client);

    with_session(&port, &args.user, &args.password, |session| {
        match &args.command {
            Command::Version => commands::version(session),
            Command::List => commands::list(session),
            Command::Info { machine } => commands::info(session, machine),
            Command::Start { machine, frontend } => commands::start(session, machine, *frontend),
            Command::Stop { machine } => commands::stop(session, machine),
        }
    })
}
