/// Time a statement, logging the elapsed milliseconds at debug level.
#[macro_export]
macro_rules! profile(
  ($title: expr, $stmt: stmt) => {{
    let t0 = std::time::Instant::now();
    $stmt;
    log::debug!("{} profile: {}ms", $title, t0.elapsed().as_millis());
  }}
);

/// Format a byte count for log output.
pub fn file_size(bytes: u64) -> String {
  use humansize::{FileSize, file_size_opts};
  bytes.file_size(file_size_opts::CONVENTIONAL)
    .unwrap_or_else(|_| format!("{} B", bytes))
}
