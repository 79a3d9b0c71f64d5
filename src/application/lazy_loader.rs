//! Lazy resolution of LazyHeavy components.
//!
//! A component's descriptor must be visible in the registry before its
//! implementation resource is requested. Successful loads are memoized per
//! name; failures are not cached, so the next request retries.

use crate::domain::catalog::{ComponentStatus, Registry};
use crate::domain::errors::LoadError;
use crate::domain::ports::{LoadedModule, ModuleFetcher};
use crate::infrastructure::observability::Metrics;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    pub fn new(attempts: u32, delay: Duration) -> Self {
        Self {
            attempts: attempts.max(1),
            delay,
        }
    }
}

type Slot = Arc<OnceCell<Arc<LoadedModule>>>;

pub struct LazyResolver {
    registry: Arc<Registry>,
    fetcher: Arc<dyn ModuleFetcher>,
    retry: RetryPolicy,
    slots: Mutex<HashMap<String, Slot>>,
    metrics: Option<Metrics>,
}

impl LazyResolver {
    pub fn new(
        registry: Arc<Registry>,
        fetcher: Arc<dyn ModuleFetcher>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            registry,
            fetcher,
            retry,
            slots: Mutex::new(HashMap::new()),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Per-name cell. Each name loads independently of the others.
    fn slot(&self, key: &str) -> Slot {
        let mut slots = match self.slots.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::error!("LazyResolver: Lock poisoned, recovering");
                poisoned.into_inner()
            }
        };
        slots.entry(key.to_string()).or_default().clone()
    }

    /// Whether `name` already has a memoized successful load
    pub fn is_loaded(&self, name: &str) -> bool {
        let key = crate::domain::catalog::ComponentName::normalize(name);
        let slots = match self.slots.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        slots.get(&key).is_some_and(|slot| slot.initialized())
    }

    /// Resolve the implementation of a LazyHeavy component.
    ///
    /// Dropping the returned future before it completes leaves the name
    /// unloaded; other names and later callers are unaffected.
    pub async fn resolve(&self, name: &str) -> Result<Arc<LoadedModule>, LoadError> {
        let descriptor = self.registry.lookup(name).ok_or_else(|| LoadError::NotRegistered {
            name: name.to_string(),
        })?;

        if descriptor.status() != ComponentStatus::LazyHeavy {
            return Err(LoadError::NotLazy {
                name: descriptor.name().to_string(),
                status: descriptor.status(),
            });
        }

        let component = descriptor.name().clone();
        let slot = self.slot(component.key());

        if let Some(module) = slot.get() {
            debug!("LazyResolver: {} served from cache", component);
            return Ok(module.clone());
        }

        let result = slot
            .get_or_try_init(|| async {
                let mut last_error = String::new();
                for attempt in 1..=self.retry.attempts {
                    match self.fetcher.fetch(&component).await {
                        Ok(module) => {
                            info!(
                                "LazyResolver: loaded {} ({} bytes, attempt {})",
                                component,
                                module.size(),
                                attempt
                            );
                            return Ok(Arc::new(module));
                        }
                        Err(e) => {
                            warn!(
                                "LazyResolver: attempt {}/{} for {} failed: {}",
                                attempt, self.retry.attempts, component, e
                            );
                            last_error = e.to_string();
                            if attempt < self.retry.attempts {
                                tokio::time::sleep(self.retry.delay).await;
                            }
                        }
                    }
                }

                Err(LoadError::Fetch {
                    name: component.to_string(),
                    attempts: self.retry.attempts,
                    reason: last_error,
                })
            })
            .await
            .cloned();

        if let Some(metrics) = &self.metrics {
            let outcome = if result.is_ok() { "success" } else { "failure" };
            metrics.lazy_loads_total.with_label_values(&[outcome]).inc();
        }

        result
    }
}
