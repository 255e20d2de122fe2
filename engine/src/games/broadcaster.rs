use std::collections::BTreeMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use futures_util::future::{BoxFuture, FutureExt, join_all};

use crate::ObserverId;

pub type UpdateFn<T> = Arc<dyn Fn(T) -> BoxFuture<'static, Result<(), String>> + Send + Sync>;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BroadcastReport {
    pub invoked: usize,
    pub failures: Vec<(ObserverId, String)>,
}

impl BroadcastReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

struct Registry<T> {
    next_id: u64,
    observers: BTreeMap<ObserverId, UpdateFn<T>>,
}

/// Callbacks notified with a clone of `T` on every broadcast.
///
/// The lock is only held to copy the entry list, never while callbacks run, so
/// an observer may (un)register from inside its own callback. Such changes are
/// seen by the next broadcast.
pub struct ObserverRegistry<T> {
    inner: Mutex<Registry<T>>,
}

impl<T> Default for ObserverRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ObserverRegistry<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Registry {
                next_id: 0,
                observers: BTreeMap::new(),
            }),
        }
    }

    pub fn add<F, Fut>(&self, on_update: F) -> ObserverId
    where
        T: 'static,
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), String>> + Send + 'static,
    {
        let update_fn: UpdateFn<T> =
            Arc::new(move |value: T| -> BoxFuture<'static, Result<(), String>> {
                on_update(value).boxed()
            });

        let mut registry = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        registry.next_id += 1;
        let id = ObserverId::new(registry.next_id);
        registry.observers.insert(id, update_fn);
        id
    }

    pub fn remove(&self, id: ObserverId) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .observers
            .remove(&id)
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .observers
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entries(&self) -> Vec<(ObserverId, UpdateFn<T>)> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .observers
            .iter()
            .map(|(id, update_fn)| (*id, Arc::clone(update_fn)))
            .collect()
    }
}

impl<T: Clone + Send + 'static> ObserverRegistry<T> {
    /// Runs every registered callback on its own task and waits for all of them.
    /// Errors and panics are collected in the report, they never stop the others.
    pub async fn broadcast(&self, value: T) -> BroadcastReport {
        let entries = self.entries();
        if entries.is_empty() {
            return BroadcastReport::default();
        }

        let (ids, tasks): (Vec<_>, Vec<_>) = entries
            .into_iter()
            .map(|(id, update_fn)| (id, tokio::spawn(update_fn(value.clone()))))
            .unzip();

        let results = join_all(tasks).await;

        let mut report = BroadcastReport {
            invoked: ids.len(),
            failures: Vec::new(),
        };
        for (id, result) in ids.into_iter().zip(results) {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => report.failures.push((id, e)),
                Err(join_error) => report
                    .failures
                    .push((id, format!("observer task failed: {}", join_error))),
            }
        }
        report
    }
}
