//! Progress spinner for registry lookups

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::Module;
use crate::error::Result;
use crate::resolver::ModuleResolver;

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Start a spinner on stderr, or `None` when it should stay hidden
fn create_progress_spinner(enabled: bool, message: String) -> Option<ProgressBar> {
    if !enabled {
        return None;
    }
    let style = ProgressStyle::default_spinner()
        .template("{spinner} {msg}...")
        .ok()?
        .tick_strings(TICKS);

    // Draws to stderr and stays hidden when stderr is not a terminal
    let pb = ProgressBar::new_spinner();
    pb.set_style(style);
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(80));
    Some(pb)
}

/// Shows a spinner while the wrapped resolver is waiting on the registry
pub struct SpinnerResolver<R> {
    inner: R,
    enabled: bool,
}

impl<R: ModuleResolver> SpinnerResolver<R> {
    pub fn new(inner: R, enabled: bool) -> Self {
        Self { inner, enabled }
    }
}

impl<R: ModuleResolver> ModuleResolver for SpinnerResolver<R> {
    fn resolve(&self, module_name: &str) -> Result<Module> {
        let pb = create_progress_spinner(self.enabled, format!("Resolving module '{module_name}'"));
        let result = self.inner.resolve(module_name);
        if let Some(pb) = pb {
            pb.finish_and_clear();
        }
        result
    }
}
