use std::path::Path;

use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::TICK_INTERVAL;
use crate::utils::string::pluralize;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Console progress reporting for the report pipeline
pub struct ProgressReporter {
    term: Term,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            current_bar: None,
        }
    }

    fn create_spinner(&mut self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .expect("Spinner template should be valid"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn graph_loaded(&self, name: &str, node_count: usize) {
        let _ = self.term.clear_line();
        eprintln!(
            "{} Loaded graph {} with {} {}",
            style("✓").green(),
            style(name).bold(),
            style(node_count).yellow(),
            pluralize("configuration", node_count)
        );
    }

    pub fn start_render(&mut self, program: &str) {
        let spinner = self.create_spinner(&format!("Rendering graph with '{program}'..."));
        self.current_bar = Some(spinner);
    }

    pub fn finish_render(&mut self) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
    }

    pub fn report_written(&self, report_path: &Path) {
        eprintln!(
            "{} Report written to {}",
            style("✓").green(),
            style(report_path.display()).bold()
        );
    }
}
