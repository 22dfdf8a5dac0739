use indicatif::*;

/// Terminal progress bar shared between worker threads.
pub struct ProgressReporter {
    pb: ProgressBar,
}

impl ProgressReporter {
    pub fn new(total_work: usize, title: &str) -> Self {
        let pb = ProgressBar::new(total_work as u64);
        let template = format!("{{spinner:.bold.green}} {}: ", title)
            + "[{wide_bar:.cyan}] {pos}/{len} ({elapsed_precise}|{eta_precise}) ";
        let style = ProgressStyle::with_template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▇▆▅▄▃▂▁  ");
        pb.set_style(style);
        pb.tick();
        ProgressReporter { pb }
    }

    /// Reporter that draws nothing, for `--quiet` runs.
    pub fn hidden(total_work: usize) -> Self {
        let pb = ProgressBar::hidden();
        pb.set_length(total_work as u64);
        ProgressReporter { pb }
    }

    pub fn update(&self, num: usize) {
        if num != 0 {
            self.pb.inc(num as u64);
        }
    }

    pub fn position(&self) -> usize {
        return self.pb.position() as usize;
    }

    pub fn done(&self) {
        self.pb.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_counts() {
        let reporter = ProgressReporter::hidden(10);
        reporter.update(3);
        reporter.update(0);
        reporter.update(4);
        assert_eq!(reporter.position(), 7);
        reporter.done();
    }
}
