//! Study command implementation.
//!
//! The `pflaunch study` command loads a study plan file and drives it
//! through the automation session: activate project and case, run each
//! calculation, export results.

use crate::cli::args::StudyArgs;
use crate::error::Result;
use crate::session::DryRunSession;
use crate::study::{run_plan, StudyPlan};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The study command implementation.
pub struct StudyCommand {
    args: StudyArgs,
}

impl StudyCommand {
    /// Create a new study command.
    pub fn new(args: StudyArgs) -> Self {
        Self { args }
    }

    fn print_plan(&self, ui: &mut dyn UserInterface, plan: &StudyPlan) {
        ui.message(&format!("Project:    {}", plan.project));
        ui.message(&format!("Study case: {}", plan.study_case));
        for calc in &plan.calculations {
            ui.message(&format!("  run {}", calc.object_class()));
        }
        if let Some(export) = &plan.export {
            ui.message(&format!(
                "  export {} to {} ({})",
                export.result_object,
                export.target.display(),
                export.format
            ));
        }
    }
}

impl Command for StudyCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let plan = StudyPlan::load(&self.args.plan)?;
        self.print_plan(ui, &plan);

        if self.args.dry_run {
            ui.success("Dry run complete, nothing was executed");
            return Ok(CommandResult::success());
        }

        let mut session = DryRunSession::new();
        let mut spinner = ui.start_spinner(&format!("Running study case '{}'", plan.study_case));
        match run_plan(&mut session, &plan) {
            Ok(()) => {
                spinner.finish_success("Study plan completed");
                Ok(CommandResult::success())
            }
            Err(e) => {
                spinner.finish_error("Study plan aborted");
                Err(e)
            }
        }
    }
}
