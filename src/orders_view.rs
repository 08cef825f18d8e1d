//! Pending orders, each with a "Process" control leading to its detail route.
//! An order without an identifier gets the control, but it goes nowhere.

use iced::{Element, Task};

use crate::app::Message;
use crate::client::OrdersClient;
use crate::order::Partition;
use crate::projection::{FetchResult, Load, Mount, Projection};
use crate::route::Route;
use crate::ui::{self, OrderRow, RowAction};

pub struct OrderListView {
    projection: Projection,
}

impl OrderListView {
    pub fn new() -> Self {
        Self {
            projection: Projection::new(Partition::Pending),
        }
    }

    pub fn mount(&mut self, client: &OrdersClient) -> Task<Message> {
        self.projection.mount(client, Message::OrdersLoaded)
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
                action: RowAction::Process(order.id.clone().map(Route::OrderInfo)),
            })
            .collect()
    }

    pub fn view(&self) -> Element<Message> {
        ui::order_table("Orders", self.projection.load(), self.rows())
    }
}
