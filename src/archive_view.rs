//! Completed orders. The "View Order" button is display-only.

use iced::{Element, Task};

use crate::app::Message;
use crate::client::OrdersClient;
use crate::order::Partition;
use crate::projection::{FetchResult, Load, Mount, Projection};
use crate::ui::{self, OrderRow, RowAction};

pub struct ArchiveView {
    projection: Projection,
}

impl ArchiveView {
    pub fn new() -> Self {
        Self {
            projection: Projection::new(Partition::Archived),
        }
    }

    pub fn mount(&mut self, client: &OrdersClient) -> Task<Message> {
        self.projection.mount(client, Message::ArchiveLoaded)
    }

    pub fn unmount(&mut self) {
        self.projection.unmount();
    }

    pub fn loaded(&mut self, mount: Mount, result: FetchResult) {
        self.projection.apply(mount, result);
    }

    pub fn live(&self) -> Option<Mount> {
        self.projection.live()
    }

    pub fn load(&self) -> &Load {
        self.projection.load()
    }

    pub fn rows(&self) -> Vec<OrderRow<'_>> {
        self.projection
            .orders()
            .iter()
            .map(|order| OrderRow {
                name: &order.name,
                address: &order.address,
                action: RowAction::ViewOrder,
            })
            .collect()
    }

    pub fn view(&self) -> Element<Message> {
        ui::order_table("Archive", self.projection.load(), self.rows())
    }
}
