//! Confirmation prompt trait

use std::io::{BufRead, Write};
use std::sync::Mutex;

/// Accept token; compared case-insensitively against the whole trimmed answer.
pub const ACCEPT_TOKEN: &str = "y";

/// Yes/no gate in front of every DNS mutation.
///
/// Implementations:
/// - interactive CLI: `PromptConfirmer` (stdin / stderr)
/// - `--yes` and tests: `FixedConfirmer`
pub trait Confirmer: Send + Sync {
    /// Ask `prompt`; `true` only on an affirmative answer.
    fn confirm(&self, prompt: &str) -> bool;
}

/// Confirmer reading answers line by line from `reader` and writing prompts to `writer`.
pub struct PromptConfirmer<R, W> {
    io: Mutex<(R, W)>,
}

impl<R, W> PromptConfirmer<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    /// Create an interactive confirmer.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: Mutex::new((reader, writer)),
        }
    }
}

impl<R, W> Confirmer for PromptConfirmer<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn confirm(&self, prompt: &str) -> bool {
        let Ok(mut guard) = self.io.lock() else {
            log::error!("Confirmation prompt is unavailable (lock poisoned), treating as declined");
            return false;
        };
        let (reader, writer) = &mut *guard;

        if let Err(e) = write!(writer, "{prompt} [y/N] ").and_then(|()| writer.flush()) {
            log::warn!("Failed to write confirmation prompt: {e}");
        }

        let mut answer = String::new();
        match reader.read_line(&mut answer) {
            Ok(0) => {
                log::debug!("End of input at confirmation prompt, treating as declined");
                false
            }
            Ok(_) => answer.trim().eq_ignore_ascii_case(ACCEPT_TOKEN),
            Err(e) => {
                log::warn!("Failed to read confirmation answer: {e}");
                false
            }
        }
    }
}

/// Confirmer with a fixed answer (`--yes`, non-interactive runs, tests).
#[derive(Debug, Clone, Copy)]
pub struct FixedConfirmer(pub bool);

impl Confirmer for FixedConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        log::debug!("{prompt} -> {}", if self.0 { "yes" } else { "no" });
        self.0
    }
}
