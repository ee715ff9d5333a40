//! Job files
//!
//! A job is a RON document naming either raw curves to project onto a plane
//! or an in-memory scene to run the opening command against.

use std::io::Write;
use std::path::Path;

use glam::DVec3;
use pp_host::{CommandOutcome, MemoryHost, ProjectOpeningsCommand, Scene};
use pp_kernel::{Plane, ProjectionSign, project_curves};
use serde::{Deserialize, Serialize};

use crate::args::SignSelection;
use crate::error::{CliError, CliResult};
use crate::report::{PrintSink, write_projected};

/// A projection job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Job {
    /// Project sampled curves onto a plane
    Curves {
        /// Plane origin
        origin: DVec3,
        /// Plane normal, normalised on load
        normal: DVec3,
        /// One sample sequence per curve
        curves: Vec<Vec<DVec3>>,
    },
    /// Run the opening command against a scene
    Openings {
        /// Host document
        scene: Scene,
        /// Command settings
        #[serde(default)]
        command: ProjectOpeningsCommand,
    },
}

impl Job {
    /// Load a job from a RON file
    pub fn load(path: impl AsRef<Path>) -> CliResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CliError::Io(e.to_string()))?;
        Self::parse(&content)
    }

    /// Parse a job from RON text
    pub fn parse(content: &str) -> CliResult<Self> {
        ron::from_str(content).map_err(|e| CliError::Deserialize(e.to_string()))
    }

    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Job::Curves { .. } => "curves",
            Job::Openings { .. } => "openings",
        }
    }

    /// Run the job, printing the selected endpoints to `out`
    pub fn execute(self, signs: SignSelection, out: &mut dyn Write) -> CliResult<()> {
        match self {
            Job::Curves {
                origin,
                normal,
                curves,
            } => {
                let plane = Plane::from_normal_and_origin(normal, origin)?;
                let projected = project_curves(&plane, &curves);
                tracing::info!(
                    curves = curves.len(),
                    plus = projected.segment_count(ProjectionSign::Plus),
                    minus = projected.segment_count(ProjectionSign::Minus),
                    "Projected curves"
                );
                write_projected(out, &projected, signs)
            }
            Job::Openings { scene, command } => {
                let host = MemoryHost::from(scene);
                let mut sink = PrintSink::new(out, signs);
                let result = command.execute(&host, &host, &mut sink);
                sink.finish()?;

                match result.outcome {
                    CommandOutcome::Succeeded => Ok(()),
                    CommandOutcome::Cancelled => {
                        tracing::warn!("Wall selection was cancelled, nothing projected");
                        Ok(())
                    }
                    CommandOutcome::Failed { message } => Err(CliError::CommandFailed(message)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES_JOB: &str = r#"Curves(
        origin: (0.0, 0.0, 0.0),
        normal: (0.0, 0.0, 2.0),
        curves: [
            [(1.0, 2.0, 3.0), (2.0, 2.0, 3.0)],
            [(5.0, 5.0, 5.0)],
        ],
    )"#;

    fn run(job: Job, signs: SignSelection) -> CliResult<String> {
        let mut out = Vec::new();
        job.execute(signs, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_curves_job() {
        let job = Job::parse(CURVES_JOB).unwrap();
        assert_eq!(job.kind(), "curves");

        let text = run(job, SignSelection::Both).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "plus 1.000000 2.000000 6.000000",
                "plus 2.000000 2.000000 6.000000",
                "minus 1.000000 2.000000 0.000000",
                "minus 2.000000 2.000000 0.000000",
            ]
        );
    }

    #[test]
    fn test_curves_job_rejects_zero_normal() {
        let job = Job::Curves {
            origin: DVec3::ZERO,
            normal: DVec3::ZERO,
            curves: Vec::new(),
        };
        assert!(matches!(
            run(job, SignSelection::Both),
            Err(CliError::Kernel(_))
        ));
    }

    #[test]
    fn test_openings_job_cancelled_is_ok() {
        let job = Job::Openings {
            scene: Scene::default(),
            command: ProjectOpeningsCommand::default(),
        };
        assert_eq!(run(job, SignSelection::Both).unwrap(), "");
    }

    #[test]
    fn test_openings_job_failure_is_error() {
        let text = r#"Openings(
            scene: (
                others: [("00000000-0000-0000-0000-000000000007")],
                picked: Some(("00000000-0000-0000-0000-000000000007")),
            ),
        )"#;
        let job = Job::parse(text).unwrap();
        assert!(matches!(
            run(job, SignSelection::Both),
            Err(CliError::CommandFailed(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.ron");
        std::fs::write(&path, CURVES_JOB).unwrap();

        let job = Job::load(&path).unwrap();
        assert!(matches!(job, Job::Curves { ref curves, .. } if curves.len() == 2));

        assert!(matches!(
            Job::load(dir.path().join("missing.ron")),
            Err(CliError::Io(_))
        ));
    }

    #[test]
    fn test_bundled_arc_window_job() {
        let job = Job::load(concat!(env!("CARGO_MANIFEST_DIR"), "/jobs/arc_window.ron")).unwrap();
        let text = run(job, SignSelection::Both).unwrap();

        let lines: Vec<Vec<&str>> = text.lines().map(|l| l.split(' ').collect()).collect();
        assert_eq!(lines.len(), 2 * 2 * 9);
        for line in &lines {
            let expected_y = if line[0] == "plus" { "4.000000" } else { "0.000000" };
            assert_eq!(line[2], expected_y, "{line:?}");
        }
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            Job::parse("Curves(origin: oops)"),
            Err(CliError::Deserialize(_))
        ));
    }
}
