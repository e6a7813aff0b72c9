use std::io::{self, Write};
use std::time::Duration;

/// Prints `text` to stdout, one character every `delay_ms` when non-zero.
pub async fn typewriter(text: &str, delay_ms: u64) -> io::Result<()> {
    let mut stdout = io::stdout();
    if delay_ms == 0 {
        stdout.write_all(text.as_bytes())?;
        return stdout.flush();
    }
    let delay = Duration::from_millis(delay_ms);
    for c in text.chars() {
        write!(stdout, "{c}")?;
        stdout.flush()?;
        tokio::time::sleep(delay).await;
    }
    Ok(())
}
