use super::*;

/// Shared flag a host can raise from any thread to stop a running query.
#[derive(Clone, Debug, Default)]
pub(crate) struct Cancellation {
  cancelled: Arc<AtomicBool>,
  notify: Arc<Notify>,
}

impl Cancellation {
  pub(crate) fn cancel(&self) {
    self.cancelled.store(true, Ordering::SeqCst);
    self.notify.notify_waiters();
  }

  /// Resolves once `cancel` has been called.
  pub(crate) async fn cancelled(&self) {
    loop {
      // Registered before the flag check so a concurrent `cancel` can't slip
      // between the two.
      let notified = self.notify.notified();

      if self.is_cancelled() {
        return;
      }

      notified.await;
    }
  }

  pub(crate) fn is_cancelled(&self) -> bool {
    self.cancelled.load(Ordering::SeqCst)
  }
}
