//! Live Filtering
//!
//! Debounced recomputation for async hosts (search-as-you-type). Criteria
//! changes flow through a `watch` channel, so a newer value always replaces
//! a pending one; a snapshot is only ever computed from the latest criteria
//! and generations strictly increase.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::CatalogConfig;
use crate::engine::{filter, Criteria};

/// Result of one filtering pass
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot<T, C> {
    /// 0 for the initial pass, then +1 per recomputation
    pub generation: u64,

    /// Criteria the items were computed from
    pub criteria: C,

    pub items: Vec<T>,
}

impl<T: Clone, C: Criteria<T>> Snapshot<T, C> {
    fn compute(generation: u64, items: &[T], criteria: C) -> Self {
        let items = filter(items, &criteria).into_iter().cloned().collect();
        Self { generation, criteria, items }
    }
}

/// Background filter loop over a fixed collection
pub struct LiveFilter<T, C> {
    criteria: watch::Sender<C>,
    results: watch::Receiver<Arc<Snapshot<T, C>>>,
    debounce: Duration,
    task: JoinHandle<()>,
}

impl<T, C> LiveFilter<T, C>
where
    T: Clone + Send + Sync + 'static,
    C: Criteria<T> + Clone + PartialEq + Send + Sync + 'static,
{
    /// Must be called from within a tokio runtime
    pub fn spawn(items: Arc<[T]>, initial: C, debounce: Duration) -> Self {
        let first = Snapshot::compute(0, &items, initial.clone());
        let (criteria_tx, criteria_rx) = watch::channel(initial);
        let (results_tx, results_rx) = watch::channel(Arc::new(first));

        let task = tokio::spawn(run(items, criteria_rx, results_tx, debounce));

        Self {
            criteria: criteria_tx,
            results: results_rx,
            debounce,
            task,
        }
    }

    /// Spawn with the configured search debounce
    pub fn from_config(items: Arc<[T]>, initial: C, config: &CatalogConfig) -> Self {
        Self::spawn(items, initial, config.search_debounce)
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Replace the criteria wholesale
    pub fn update(&self, criteria: C) {
        self.criteria.send_replace(criteria);
    }

    pub fn criteria(&self) -> C {
        self.criteria.borrow().clone()
    }

    /// Latest published snapshot, possibly for older criteria
    pub fn current(&self) -> Arc<Snapshot<T, C>> {
        self.results.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<Snapshot<T, C>>> {
        self.results.clone()
    }

    /// Wait for the snapshot matching the latest criteria
    pub async fn settled(&mut self) -> Arc<Snapshot<T, C>> {
        loop {
            let latest = self.criteria();
            let snapshot = self.results.borrow_and_update().clone();
            if snapshot.criteria == latest {
                return snapshot;
            }
            if self.results.changed().await.is_err() {
                return self.current();
            }
        }
    }
}

impl<T, C> Drop for LiveFilter<T, C> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run<T, C>(
    items: Arc<[T]>,
    mut criteria_rx: watch::Receiver<C>,
    results_tx: watch::Sender<Arc<Snapshot<T, C>>>,
    debounce: Duration,
) where
    T: Clone,
    C: Criteria<T> + Clone,
{
    let mut generation = 0;

    loop {
        if criteria_rx.changed().await.is_err() {
            return;
        }

        // Quiet period; any further change restarts it
        loop {
            tokio::select! {
                () = tokio::time::sleep(debounce) => break,
                changed = criteria_rx.changed() => {
                    if changed.is_err() {
                        return;
                    }
                    tracing::debug!(generation, "pending filter pass superseded");
                }
            }
        }

        let criteria = criteria_rx.borrow_and_update().clone();
        generation += 1;
        let snapshot = Snapshot::compute(generation, &items, criteria);
        tracing::debug!(generation, matched = snapshot.items.len(), "live filter snapshot published");

        if results_tx.send(Arc::new(snapshot)).is_err() {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{CategoryFilter, ProductCriteria};
    use crate::model::{EcoLabel, ProductCategory};
    use crate::store::CatalogStore;

    fn items() -> Arc<[crate::model::Product]> {
        CatalogStore::load().unwrap().products().into()
    }

    fn config(debounce_ms: &str) -> CatalogConfig {
        let debounce_ms = debounce_ms.to_string();
        CatalogConfig::from_lookup(move |key| {
            (key == "STOREFRONT_SEARCH_DEBOUNCE_MS").then(|| debounce_ms.clone())
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_initial_snapshot_is_unfiltered() {
        let live = LiveFilter::from_config(items(), ProductCriteria::new(), &CatalogConfig::default());
        let snapshot = live.current();
        assert_eq!(snapshot.generation, 0);
        assert_eq!(snapshot.items.len(), 8);
        assert_eq!(live.debounce(), CatalogConfig::default().search_debounce);
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let mut live = LiveFilter::from_config(items(), ProductCriteria::new(), &config("50"));
        assert_eq!(live.debounce(), Duration::from_millis(50));

        live.update(ProductCriteria::new().with_search_term("b"));
        live.update(ProductCriteria::new().with_search_term("ba"));
        let last = ProductCriteria::new().with_search_term("bamboo");
        live.update(last.clone());

        let snapshot = live.settled().await;
        assert_eq!(snapshot.criteria, last);
        assert_eq!(snapshot.generation, 1);
        let ids: Vec<u32> = snapshot.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 6]);
    }

    #[tokio::test]
    async fn test_generations_increase() {
        let mut live = LiveFilter::from_config(items(), ProductCriteria::new(), &config("5"));

        live.update(ProductCriteria::new().with_category(CategoryFilter::Only(ProductCategory::Kitchen)));
        let first = live.settled().await;

        live.update(ProductCriteria::new().toggle_label(EcoLabel::Organic));
        let second = live.settled().await;

        assert!(second.generation > first.generation);
        assert_eq!(first.items.len(), 2);
        assert_eq!(second.items.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 8]);
    }
}
