use indicatif::{ProgressBar, ProgressStyle};
use std::{future::Future, io::IsTerminal, time::Duration};

/// Awaits `fut` while a spinner with `msg` ticks on stderr, then clears the line.
/// Nothing is drawn when stderr isn't a TTY.
pub async fn with_spinner<Fut, T>(msg: impl Into<String>, fut: Fut) -> T
where
    Fut: Future<Output = T>,
{
    let pb = std::io::stderr().is_terminal().then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.set_message(msg.into());
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    });

    // clear the spinner line on every exit path, including cancellation
    struct Guard(Option<ProgressBar>);
    impl Drop for Guard {
        fn drop(&mut self) {
            if let Some(pb) = self.0.take() {
                pb.finish_and_clear();
            }
        }
    }
    let _g = Guard(pb);

    fut.await
}
