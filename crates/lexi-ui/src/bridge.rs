use std::io::BufRead;
use std::thread;

use kanal::AsyncReceiver;

/// Reads stdin lines on a plain thread and hands them to async code
///
/// A blocked read never holds up runtime shutdown this way. The channel
/// closes once stdin reaches EOF or fails.
pub fn stdin_lines(capacity: usize) -> AsyncReceiver<String> {
    let (tx, rx) = kanal::bounded(capacity);

    let spawned = thread::Builder::new()
        .name("lexi-stdin".into())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::error!("[UI] Failed to read stdin: {}", e);
                        break;
                    }
                }
            }
            tracing::debug!("[UI] Stdin reader stopping");
        });

    if let Err(e) = spawned {
        tracing::error!("[UI] Failed to spawn stdin reader: {}", e);
    }

    rx.to_async()
}
