//! Command-line argument parsing

use std::path::PathBuf;

use pp_kernel::ProjectionSign;

use crate::error::{CliError, CliResult};

pub const USAGE: &str = r#"pp-cli (plane projection)

USAGE:
  pp-cli <job.ron> [--sign plus|minus|both]
  pp-cli --help

JOBS:
  Curves(origin: (x, y, z), normal: (x, y, z), curves: [[(x, y, z), ...], ...])
  Openings(scene: (walls: [...], openings: [...], faces: [...], curves: [...], picked: Some(...)))

OPTIONS:
  --sign <which>   Conventions to print (default: both)
  -h, --help       Show this message

Set RUST_LOG to control log output (e.g. RUST_LOG=pp_host=debug).
"#;

/// Which conventions to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignSelection {
    /// Only [`ProjectionSign::Plus`]
    Plus,
    /// Only [`ProjectionSign::Minus`]
    Minus,
    /// Plus, then minus
    #[default]
    Both,
}

impl SignSelection {
    /// Conventions in printing order
    pub fn signs(self) -> &'static [ProjectionSign] {
        match self {
            SignSelection::Plus => &[ProjectionSign::Plus],
            SignSelection::Minus => &[ProjectionSign::Minus],
            SignSelection::Both => &ProjectionSign::ALL,
        }
    }

    /// Check if a convention is selected
    pub fn includes(self, sign: ProjectionSign) -> bool {
        self.signs().contains(&sign)
    }
}

impl std::str::FromStr for SignSelection {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plus" => Ok(SignSelection::Plus),
            "minus" => Ok(SignSelection::Minus),
            "both" => Ok(SignSelection::Both),
            other => Err(CliError::Usage(format!(
                "unknown sign '{other}', expected plus, minus or both"
            ))),
        }
    }
}

/// What to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print usage
    Help,
    /// Run a job file
    Run {
        /// Path to the RON job
        job: PathBuf,
        /// Conventions to print
        signs: SignSelection,
    },
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub command: Command,
}

impl Args {
    /// Parse arguments, excluding the program name
    pub fn parse<I, S>(args: I) -> CliResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut job = None;
        let mut signs = SignSelection::default();

        let mut iter = args.into_iter().map(Into::<String>::into);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-h" | "--help" => {
                    return Ok(Self {
                        command: Command::Help,
                    });
                }
                "--sign" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| CliError::Usage("--sign requires a value".into()))?;
                    signs = value.parse()?;
                }
                flag if flag.starts_with('-') => {
                    return Err(CliError::Usage(format!("unknown option '{flag}'")));
                }
                _ => {
                    if job.is_some() {
                        return Err(CliError::Usage(format!("unexpected argument '{arg}'")));
                    }
                    job = Some(PathBuf::from(&arg));
                }
            }
        }

        let job = job.ok_or_else(|| CliError::Usage("missing job file".into()))?;
        Ok(Self {
            command: Command::Run { job, signs },
        })
    }
}
