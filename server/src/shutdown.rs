use tokio::sync::watch;

pub struct ShutdownTrigger {
    sender: watch::Sender<bool>,
}

/// Cloneable handle every long-running part of the server waits on.
#[derive(Clone)]
pub struct ShutdownSignal {
    receiver: watch::Receiver<bool>,
}

pub fn channel() -> (ShutdownTrigger, ShutdownSignal) {
    let (sender, receiver) = watch::channel(false);
    (ShutdownTrigger { sender }, ShutdownSignal { receiver })
}

impl ShutdownTrigger {
    pub fn fire(&self) {
        self.sender.send_replace(true);
    }
}

impl ShutdownSignal {
    pub fn is_requested(&self) -> bool {
        *self.receiver.borrow()
    }

    /// Resolves once shutdown is requested. A dropped trigger counts as a request.
    pub async fn wait(mut self) {
        let _ = self.receiver.wait_for(|stopped| *stopped).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_wait_resolves_after_fire() {
        let (trigger, signal) = channel();
        assert!(!signal.is_requested());

        let waiter = tokio::spawn(signal.clone().wait());
        trigger.fire();

        timeout(Duration::from_secs(1), waiter).await.unwrap().unwrap();
        assert!(signal.is_requested());
    }

    #[tokio::test]
    async fn test_wait_resolves_when_trigger_dropped() {
        let (trigger, signal) = channel();
        drop(trigger);
        timeout(Duration::from_secs(1), signal.wait()).await.unwrap();
    }

    #[tokio::test]
    async fn test_wait_pending_without_fire() {
        let (_trigger, signal) = channel();
        assert!(timeout(Duration::from_millis(20), signal.wait()).await.is_err());
    }
}
