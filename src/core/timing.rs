//! Core domain: run-clock display formatting.

/// Format a run time in milliseconds as "MM:SS:CC" (centiseconds).
///
/// Adds 9 ms before truncating to centiseconds. Leaderboard-equality
/// comparisons depend on the rendered string, so this offset must not
/// change: 12_201 ms renders as "00:12:21".
pub fn format_run_time(ms: u64) -> String {
    let ms = ms + 9;
    let minutes = ms / 60_000;
    let seconds = (ms / 1000) % 60;
    let centis = (ms / 10) % 100;
    format!("{:02}:{:02}:{:02}", minutes, seconds, centis)
}
