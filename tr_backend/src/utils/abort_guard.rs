/// Guard that aborts a task when dropped.
///
/// Held by a response body so that a client hanging up (axum dropping the
/// body) also tears down the task producing it.
pub struct AbortGuard {
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl AbortGuard {
    pub fn new(handle: tokio::task::JoinHandle<()>) -> Self {
        Self {
            handle: Some(handle),
        }
    }
}

impl Drop for AbortGuard {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
