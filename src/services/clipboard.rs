use anyhow::{Context, Result};

/// Trait for writing to the system clipboard - allows for mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Real implementation backed by the OS clipboard
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("Clipboard unavailable")?;
        clipboard
            .set_text(text.to_string())
            .context("Failed to write clipboard")?;
        Ok(())
    }
}

pub mod mock {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Records every write instead of touching the OS clipboard
    #[derive(Clone, Default)]
    pub struct RecordingClipboard {
        writes: Arc<Mutex<Vec<String>>>,
        failing: bool,
    }

    impl RecordingClipboard {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing() -> Self {
            Self {
                failing: true,
                ..Self::default()
            }
        }

        pub fn writes(&self) -> Vec<String> {
            self.writes.lock().clone()
        }
    }

    impl Clipboard for RecordingClipboard {
        fn write_text(&self, text: &str) -> Result<()> {
            if self.failing {
                anyhow::bail!("Clipboard unavailable");
            }
            self.writes.lock().push(text.to_string());
            Ok(())
        }
    }
}
