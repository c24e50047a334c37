// src/crawl/tracker.rs
// =============================================================================
// Knows when a crawl is over.
//
// The set of tasks grows while we wait on it: every page spawns more pages.
// A task gets a TaskGuard from `register` BEFORE it is spawned, and the guard
// is released when the task's future is dropped. A parent registers all of its
// children before dropping its own guard, so the count can only reach zero
// once the whole tree has finished.
// =============================================================================

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

#[derive(Debug, Default)]
struct Inner {
    pending: AtomicUsize,
    idle: Notify,
}

#[derive(Debug, Clone, Default)]
pub struct TaskTracker {
    inner: Arc<Inner>,
}

/// Proof that one registered task is still running
#[derive(Debug)]
pub struct TaskGuard {
    inner: Arc<Inner>,
}

impl TaskTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self) -> TaskGuard {
        self.inner.pending.fetch_add(1, Ordering::SeqCst);
        TaskGuard {
            inner: Arc::clone(&self.inner),
        }
    }

    pub fn pending(&self) -> usize {
        self.inner.pending.load(Ordering::SeqCst)
    }

    /// Resolves once every registered task has released its guard
    pub async fn wait(&self) {
        loop {
            // Created before the check so a notify_waiters in between isn't lost
            let idle = self.inner.idle.notified();
            if self.pending() == 0 {
                return;
            }
            idle.await;
        }
    }
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        if self.inner.pending.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.inner.idle.notify_waiters();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_wait_returns_immediately_when_idle() {
        let tracker = TaskTracker::new();
        tracker.wait().await;
        assert_eq!(tracker.pending(), 0);
    }

    #[tokio::test]
    async fn test_pending_counts_guards() {
        let tracker = TaskTracker::new();
        let a = tracker.register();
        let b = tracker.register();
        assert_eq!(tracker.pending(), 2);
        drop(a);
        assert_eq!(tracker.pending(), 1);
        drop(b);
        assert_eq!(tracker.pending(), 0);
    }

    #[tokio::test]
    async fn test_wait_covers_children_registered_late() {
        let tracker = TaskTracker::new();
        let root = tracker.register();

        let spawner = tracker.clone();
        tokio::spawn(async move {
            let _root = root;
            tokio::time::sleep(Duration::from_millis(20)).await;

            // The child is registered while the root guard is still held
            let child = spawner.register();
            tokio::spawn(async move {
                let _child = child;
                tokio::time::sleep(Duration::from_millis(50)).await;
            });
        });

        tokio::time::timeout(Duration::from_secs(5), tracker.wait())
            .await
            .expect("tracker never became idle");
        assert_eq!(tracker.pending(), 0);
    }

    #[tokio::test]
    async fn test_panicking_task_still_completes() {
        let tracker = TaskTracker::new();
        let guard = tracker.register();
        let handle = tokio::spawn(async move {
            let _guard = guard;
            panic!("task blew up");
        });
        assert!(handle.await.is_err());

        tokio::time::timeout(Duration::from_secs(5), tracker.wait())
            .await
            .expect("tracker never became idle");
    }
}
