//! Plain-text reporting of projected endpoints
//!
//! One line per endpoint: `[<opening>] <sign> <x> <y> <z>`.

use std::io::Write;

use glam::DVec3;
use pp_host::{ElementId, ReportSink};
use pp_kernel::{ProjectedCurves, ProjectionSign};

use crate::args::SignSelection;
use crate::error::{CliError, CliResult};

/// Format one endpoint line (without newline)
pub fn format_point(sign: ProjectionSign, point: DVec3) -> String {
    format!("{} {:.6} {:.6} {:.6}", sign, point.x, point.y, point.z)
}

/// Write every selected endpoint of `projected`, plus before minus
pub fn write_projected(
    out: &mut dyn Write,
    projected: &ProjectedCurves,
    signs: SignSelection,
) -> CliResult<()> {
    for &sign in signs.signs() {
        for point in projected.iter_endpoints(sign) {
            writeln!(out, "{}", format_point(sign, point))
                .map_err(|e| CliError::Io(e.to_string()))?;
        }
    }
    Ok(())
}

/// [`ReportSink`] that prints selected endpoints, prefixed with the opening
pub struct PrintSink<'a> {
    out: &'a mut dyn Write,
    signs: SignSelection,
    error: Option<std::io::Error>,
}

impl<'a> PrintSink<'a> {
    /// Create a sink writing to `out`
    pub fn new(out: &'a mut dyn Write, signs: SignSelection) -> Self {
        Self {
            out,
            signs,
            error: None,
        }
    }

    /// Surface the first write error, if any
    pub fn finish(self) -> CliResult<()> {
        match self.error {
            Some(e) => Err(CliError::Io(e.to_string())),
            None => Ok(()),
        }
    }
}

impl ReportSink for PrintSink<'_> {
    fn report(&mut self, opening: ElementId, sign: ProjectionSign, point: DVec3) {
        if self.error.is_some() || !self.signs.includes(sign) {
            return;
        }
        tracing::debug!(%opening, %sign, "Projected point: {}", point);
        if let Err(e) = writeln!(self.out, "{} {}", opening, format_point(sign, point)) {
            self.error = Some(e);
        }
    }
}
