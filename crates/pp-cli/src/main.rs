//! Plane projection CLI entry point

use pp_cli::{Args, CliError, USAGE};

fn main() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pp_cli=info,pp_host=info,pp_kernel=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("pp-cli error: {err}\n\n{USAGE}");
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = pp_cli::run(&args, &mut out) {
        tracing::error!("Job failed: {}", err);
        if matches!(err, CliError::Usage(_)) {
            eprintln!("{USAGE}");
        }
        eprintln!("pp-cli error: {err}");
        std::process::exit(1);
    }
}
