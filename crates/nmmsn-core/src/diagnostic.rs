//! Diagnostics accumulated while constructing a name.
//!
//! Every line names the pipe that produced it, its status and a reason:
//!
//! ```text
//! Pipe: construct_nmmsn_spe_ori. Status: warning. Reason: Multiple species origins detected.
//! ```
//!
//! Lines are kept in the order they were recorded.

use std::fmt;

use nmmsn_model::{NamingError, NamingWarning};
use tracing::debug;

/// Stage of name construction that produced a diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pipe {
    /// Whole-record checks.
    Orchestrator,
    SpeciesOrigin,
    MedicinalPart,
    SpecialDescription,
    ProcessingMethod,
}

impl Pipe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pipe::Orchestrator => "construct_nmmsn",
            Pipe::SpeciesOrigin => "construct_nmmsn_spe_ori",
            Pipe::MedicinalPart => "construct_nmmsn_med_par",
            Pipe::SpecialDescription => "construct_nmmsn_spe_des",
            Pipe::ProcessingMethod => "construct_nmmsn_pro_met",
        }
    }
}

impl fmt::Display for Pipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Failed,
    Warning,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Failed => "failed",
            Status::Warning => "warning",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticLine {
    pub pipe: Pipe,
    pub status: Status,
    pub reason: String,
}

impl fmt::Display for DiagnosticLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pipe: {}. Status: {}. Reason: {}",
            self.pipe, self.status, self.reason
        )
    }
}

/// Ordered diagnostic lines. Displays as the lines joined by newlines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostic {
    lines: Vec<DiagnosticLine>,
}

impl Diagnostic {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, pipe: Pipe, warning: NamingWarning) {
        debug!(%pipe, %warning, "warning recorded");
        self.lines.push(DiagnosticLine {
            pipe,
            status: Status::Warning,
            reason: warning.message().to_string(),
        });
    }

    pub fn fail(&mut self, pipe: Pipe, error: &NamingError) {
        self.lines.push(DiagnosticLine {
            pipe,
            status: Status::Failed,
            reason: error.to_string(),
        });
    }

    /// Whether any line has the failed status.
    pub fn is_failed(&self) -> bool {
        self.lines.iter().any(|line| line.status == Status::Failed)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[DiagnosticLine] {
        &self.lines
    }

    pub fn warning_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| line.status == Status::Warning)
            .count()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_lines_in_order() {
        let mut diagnostic = Diagnostic::new();
        assert_eq!(diagnostic.to_string(), "");
        diagnostic.warn(Pipe::Orchestrator, NamingWarning::InvalidCategory);
        diagnostic.fail(Pipe::ProcessingMethod, &NamingError::NonBijectiveTerms);
        assert_eq!(
            diagnostic.to_string(),
            "Pipe: construct_nmmsn. Status: warning. Reason: Invalid NMM type.\n\
             Pipe: construct_nmmsn_pro_met. Status: failed. Reason: The mapping type is not one-to-one."
        );
        assert!(diagnostic.is_failed());
        assert_eq!(diagnostic.warning_count(), 1);
    }
}
