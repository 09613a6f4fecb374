use github_activity::cli::Cli;
use github_activity::config::{Config, ConfigLoader, InitResult};
use github_activity::core::{run_report, GitHubClient};
use github_activity::error::unexpected_message;
use github_activity::logging::init_logging;
use github_activity::ActivityError;
use std::io::{self, Write};
use std::panic;
use std::process;

fn main() {
    // The default hook would print a crash report; keep it in the debug log instead
    panic::set_hook(Box::new(|info| {
        tracing::debug!(%info, "panic");
    }));

    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    let message = match panic::catch_unwind(|| run(cli)) {
        Ok(Ok(())) => return,
        Ok(Err(e)) => {
            tracing::debug!(error = ?e, "run failed");
            e.to_string()
        }
        Err(payload) => unexpected_message(payload.as_ref()),
    };

    // stdout may already be gone; there is nowhere left to report that
    let _ = writeln!(io::stdout(), "\n{}\n", message);
    process::exit(1);
}

fn run(cli: Cli) -> Result<(), ActivityError> {
    let mut out = io::stdout().lock();

    // Handle configuration initialization
    if cli.init {
        let path = cli
            .config
            .clone()
            .unwrap_or_else(ConfigLoader::default_path);
        match Config::init_at(&path)? {
            InitResult::Created(path) => writeln!(out, "Created config at {}", path.display())?,
            InitResult::AlreadyExists(path) => {
                writeln!(out, "Config already exists at {}", path.display())?
            }
        }
        return Ok(());
    }

    let mut config = ConfigLoader::load(cli.config.as_deref())?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }

    if cli.print {
        return config.print(&mut out);
    }

    config.check()?;
    if cli.check {
        writeln!(out, "✓ Configuration valid")?;
        return Ok(());
    }

    let client = GitHubClient::new(&config);
    run_report(&client, cli.username.as_deref(), &mut out)?;
    out.flush()?;
    Ok(())
}
