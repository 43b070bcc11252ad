//! Scripted study execution.
//!
//! A study plan names a project, a study case, the pre-built calculation
//! objects to execute, and optionally a result export. The plan is plain
//! YAML; running it is a linear sequence of calls through the
//! [`Session`](crate::session::Session) seam with no retries; the first
//! failure aborts and the caller restarts from the beginning.
//!
//! ```yaml
//! project: Test1
//! study_case: OC Intact
//! calculations: [load-flow, frequency-sweep]
//! export:
//!   result_object: Freq.Sweep.ElmRes
//!   target: C:\Results\sweep.csv
//!   format: csv
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PflaunchError, Result};
use crate::session::Session;

/// A calculation object kind of the active study case.
///
/// Variants map to the external object classes executed by the original
/// study scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Calculation {
    LoadFlow,
    HarmonicLoadFlow,
    FrequencySweep,
    InitialConditions,
    Simulation,
    ShortCircuit,
}

impl Calculation {
    /// External class name of the calculation object.
    pub fn object_class(&self) -> &'static str {
        match self {
            Calculation::LoadFlow => "ComLdf",
            Calculation::HarmonicLoadFlow => "ComHLdf",
            Calculation::FrequencySweep => "ComFsweep",
            Calculation::InitialConditions => "ComInc",
            Calculation::Simulation => "ComSim",
            Calculation::ShortCircuit => "ComShc",
        }
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.object_class())
    }
}

/// Result export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Text,
}

impl ExportFormat {
    /// The external exporter's `iopt_exp` code for this format.
    pub fn export_code(&self) -> u8 {
        match self {
            ExportFormat::Csv => 6,
            ExportFormat::Text => 4,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => f.write_str("csv"),
            ExportFormat::Text => f.write_str("text"),
        }
    }
}

/// Result export request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Name of the result object to export, e.g. `Freq.Sweep.ElmRes`.
    pub result_object: String,
    /// Output file path.
    pub target: PathBuf,
    /// Output format.
    pub format: ExportFormat,
}

/// A complete study plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPlan {
    /// Project to activate.
    pub project: String,
    /// Study case to activate within the project.
    pub study_case: String,
    /// Calculation objects to execute, in order.
    #[serde(default)]
    pub calculations: Vec<Calculation>,
    /// Optional result export, performed after all calculations.
    #[serde(default)]
    pub export: Option<ExportSettings>,
}

impl StudyPlan {
    /// Load a plan from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| PflaunchError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Run a study plan through a session.
pub fn run_plan(session: &mut dyn Session, plan: &StudyPlan) -> Result<()> {
    tracing::info!(
        "Running study plan: project '{}', case '{}'",
        plan.project,
        plan.study_case
    );

    session.activate_project(&plan.project)?;
    session.activate_study_case(&plan.study_case)?;

    for calc in &plan.calculations {
        tracing::debug!("Executing {}", calc.object_class());
        session.execute(*calc)?;
    }

    if let Some(export) = &plan.export {
        session.export_results(export)?;
        tracing::info!("Results exported to {}", export.target.display());
    }

    Ok(())
}
