use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

/// A restartable one-shot timer. Starting it again cancels the pending run.
pub struct SingleShotTimer {
    runtime: Handle,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl SingleShotTimer {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            pending: Mutex::new(None),
        }
    }

    pub fn restart<F>(&self, delay: Duration, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let task = self.runtime.spawn(async move {
            sleep(delay).await;
            action();
        });
        if let Some(previous) = self.pending.lock().replace(task) {
            previous.abort();
        }
    }

    pub fn cancel(&self) {
        if let Some(previous) = self.pending.lock().take() {
            previous.abort();
        }
    }
}

impl Drop for SingleShotTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
