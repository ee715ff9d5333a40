//! Plane projection command-line driver
//!
//! Loads a RON job, runs the projection kernel (directly, or through the
//! opening command on an in-memory scene) and prints every segment endpoint.

pub mod args;
pub mod error;
pub mod job;
pub mod report;

pub use args::{Args, Command, SignSelection, USAGE};
pub use error::{CliError, CliResult};
pub use job::Job;
pub use report::PrintSink;

/// Run a parsed command, writing the report to `out`
pub fn run(args: &Args, out: &mut dyn std::io::Write) -> CliResult<()> {
    match &args.command {
        Command::Help => {
            out.write_all(USAGE.as_bytes())
                .map_err(|e| CliError::Io(e.to_string()))?;
            Ok(())
        }
        Command::Run { job, signs } => {
            let job = Job::load(job)?;
            tracing::info!(kind = job.kind(), "Loaded job");
            job.execute(*signs, out)
        }
    }
}
