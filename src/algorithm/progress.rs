use anyhow::Result;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress bar over the cells claimed during one generation.
pub struct GenerationProgress {
    progress_bar: ProgressBar,
}

impl GenerationProgress {
    /// Creates a tracker for `total_cells`, drawn to stderr only when `visible`.
    pub fn new(total_cells: usize, visible: bool) -> Result<Self> {
        let target = if visible {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        let length = u64::try_from(total_cells)?;
        let pb = ProgressBar::with_draw_target(Some(length), target);
        pb.set_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} cells ({msg})")?
                .progress_chars("##-"),
        );

        Ok(Self { progress_bar: pb })
    }

    /// Names the pass currently running
    pub fn stage(&self, name: &'static str) {
        self.progress_bar.set_message(name);
    }

    /// Records newly claimed cells
    pub fn advance(&self, cells: usize) {
        self.progress_bar
            .inc(u64::try_from(cells).unwrap_or(u64::MAX));
    }

    /// Claimed cells so far
    #[cfg(test)]
    pub fn position(&self) -> u64 {
        self.progress_bar.position()
    }

    /// Finish and clear progress display
    pub fn finish(self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_progress_still_counts() {
        let progress = GenerationProgress::new(10, false).unwrap();
        progress.stage("rooms");
        progress.advance(4);
        progress.advance(6);
        assert_eq!(progress.position(), 10);
        progress.finish();
    }
}
