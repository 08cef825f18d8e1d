//! Per-view load state: one filtered projection of the order collection,
//! bound to the lifetime of the mount that requested it.

use iced::task::{self, Task};
use tracing::{debug, info, warn};

use crate::app::Message;
use crate::client::OrdersClient;
use crate::error::FetchError;
use crate::order::{Order, Partition};

/// Identity of one mount of a view. Responses are only applied when they
/// carry the token of the live mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mount(u64);

pub type FetchResult = Result<Vec<Order>, FetchError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Load {
    NotLoaded,
    Loading,
    Loaded(Vec<Order>),
    Failed(FetchError),
}

pub struct Projection {
    partition: Partition,
    load: Load,
    generation: u64,
    live: Option<Mount>,
    // aborts the in-flight request when replaced or dropped
    fetch: Option<task::Handle>,
}

impl Projection {
    pub fn new(partition: Partition) -> Self {
        Self {
            partition,
            load: Load::NotLoaded,
            generation: 0,
            live: None,
            fetch: None,
        }
    }

    pub fn load(&self) -> &Load {
        &self.load
    }

    pub fn live(&self) -> Option<Mount> {
        self.live
    }

    /// Orders to render. Empty unless loaded.
    pub fn orders(&self) -> &[Order] {
        match &self.load {
            Load::Loaded(orders) => orders,
            _ => &[],
        }
    }

    /// Starts a new mount and returns its token; any earlier mount is stale
    /// from here on.
    pub fn begin(&mut self) -> Mount {
        self.generation += 1;
        let mount = Mount(self.generation);
        self.live = Some(mount);
        self.load = Load::Loading;
        mount
    }

    /// Mounts the view and issues its single fetch.
    pub fn mount(
        &mut self,
        client: &OrdersClient,
        on_loaded: fn(Mount, FetchResult) -> Message,
    ) -> Task<Message> {
        let mount = self.begin();
        debug!(partition = %self.partition, endpoint = %client.endpoint(), ?mount, "mounting view");

        let (task, handle) =
            Task::perform(client.clone().fetch_all(), move |result| on_loaded(mount, result))
                .abortable();
        self.fetch = Some(handle.abort_on_drop());
        task
    }

    /// Retires the live mount. The in-flight request, if any, is aborted and
    /// a response that still slips through is discarded by `apply`.
    pub fn unmount(&mut self) {
        if let Some(handle) = self.fetch.take() {
            handle.abort();
        }
        self.live = None;
        self.load = Load::NotLoaded;
    }

    /// Applies a fetch result. Returns `false` when the result belongs to a
    /// retired mount and was dropped.
    pub fn apply(&mut self, mount: Mount, result: FetchResult) -> bool {
        if self.live != Some(mount) {
            debug!(partition = %self.partition, ?mount, live = ?self.live, "discarding stale response");
            return false;
        }
        self.fetch = None;

        self.load = match result {
            Ok(orders) => {
                let received = orders.len();
                let kept = self.partition.select(orders);
                info!(partition = %self.partition, received, kept = kept.len(), "orders loaded");
                Load::Loaded(kept)
            }
            Err(err) => {
                warn!(partition = %self.partition, error = %err, "failed to load orders");
                Load::Failed(err)
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::OrderId;

    fn order(id: &str, completed: bool) -> Order {
        Order {
            id: Some(OrderId::new(id)),
            name: format!("customer {id}"),
            address: format!("{id} Harbour Rd"),
            completed,
        }
    }

    fn collection(n: usize, k: usize) -> Vec<Order> {
        (0..n).map(|i| order(&i.to_string(), i < k)).collect()
    }

    #[test]
    fn starts_not_loaded_with_no_rows() {
        let projection = Projection::new(Partition::Pending);
        assert_eq!(projection.load(), &Load::NotLoaded);
        assert!(projection.orders().is_empty());
        assert_eq!(projection.live(), None);
    }

    #[test]
    fn row_counts_follow_the_completed_split() {
        for (n, k) in [(0, 0), (1, 0), (1, 1), (7, 3), (12, 12)] {
            let mut pending = Projection::new(Partition::Pending);
            let mut archived = Projection::new(Partition::Archived);

            let m = pending.begin();
            assert!(pending.apply(m, Ok(collection(n, k))));
            let m = archived.begin();
            assert!(archived.apply(m, Ok(collection(n, k))));

            assert_eq!(pending.orders().len(), n - k);
            assert_eq!(archived.orders().len(), k);
        }
    }

    #[test]
    fn empty_collection_is_loaded_not_placeholder() {
        let mut projection = Projection::new(Partition::Archived);
        let mount = projection.begin();
        projection.apply(mount, Ok(vec![]));

        assert_eq!(projection.load(), &Load::Loaded(vec![]));
        assert!(projection.orders().is_empty());
    }

    #[test]
    fn failure_is_kept_as_visible_state() {
        let mut projection = Projection::new(Partition::Pending);
        let mount = projection.begin();
        let err = FetchError::Transport("connection refused".into());

        assert!(projection.apply(mount, Err(err.clone())));
        assert_eq!(projection.load(), &Load::Failed(err));
        assert!(projection.orders().is_empty());
    }

    #[test]
    fn response_after_unmount_is_discarded() {
        let mut projection = Projection::new(Partition::Pending);
        let mount = projection.begin();
        projection.unmount();

        assert!(!projection.apply(mount, Ok(collection(3, 0))));
        assert_eq!(projection.load(), &Load::NotLoaded);
    }

    #[test]
    fn response_for_an_earlier_mount_is_discarded() {
        let mut projection = Projection::new(Partition::Pending);
        let first = projection.begin();
        let second = projection.begin();
        assert_ne!(first, second);

        assert!(!projection.apply(first, Ok(collection(4, 0))));
        assert_eq!(projection.load(), &Load::Loading);

        assert!(projection.apply(second, Ok(collection(2, 0))));
        assert_eq!(projection.orders().len(), 2);
    }

    #[test]
    fn refetching_unchanged_collection_is_idempotent() {
        let mut projection = Projection::new(Partition::Archived);

        let mount = projection.begin();
        projection.apply(mount, Ok(collection(5, 2)));
        let first = projection.load().clone();

        let mount = projection.begin();
        projection.apply(mount, Ok(collection(5, 2)));

        assert_eq!(projection.load(), &first);
    }
}
