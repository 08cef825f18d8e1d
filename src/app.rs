use iced::{Element, Task, Theme};
use tracing::debug;

use crate::archive_view::ArchiveView;
use crate::client::OrdersClient;
use crate::orders_view::OrderListView;
use crate::projection::{FetchResult, Mount};
use crate::route::Route;

pub struct App {
    client: OrdersClient,
    pub route: Route,
    pub orders: OrderListView,
    pub archive: ArchiveView,
}

#[derive(Debug, Clone)]
pub enum Message {
    // navigation
    Navigate(Route),
    Reload,

    // fetch results
    OrdersLoaded(Mount, FetchResult),
    ArchiveLoaded(Mount, FetchResult),
}

impl App {
    pub fn new(client: OrdersClient) -> (Self, Task<Message>) {
        let mut app = Self {
            client,
            route: Route::Orders,
            orders: OrderListView::new(),
            archive: ArchiveView::new(),
        };
        let task = app.orders.mount(&app.client);
        (app, task)
    }

    pub fn title(&self) -> String {
        match &self.route {
            Route::Orders => "Order Desk - Orders".to_string(),
            Route::Archive => "Order Desk - Archive".to_string(),
            Route::OrderInfo(id) => format!("Order Desk - Order {id}"),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => self.navigate(route),
            Message::Reload => self.mount_current(),
            Message::OrdersLoaded(mount, result) => {
                self.orders.loaded(mount, result);
                Task::none()
            }
            Message::ArchiveLoaded(mount, result) => {
                self.archive.loaded(mount, result);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<Message> {
        crate::ui::view(self)
    }

    fn navigate(&mut self, route: Route) -> Task<Message> {
        if route == self.route {
            return Task::none();
        }
        debug!(from = %self.route, to = %route, "navigating");

        match self.route {
            Route::Orders => self.orders.unmount(),
            Route::Archive => self.archive.unmount(),
            Route::OrderInfo(_) => {}
        }
        self.route = route;
        self.mount_current()
    }

    fn mount_current(&mut self) -> Task<Message> {
        match self.route {
            Route::Orders => self.orders.mount(&self.client),
            Route::Archive => self.archive.mount(&self.client),
            Route::OrderInfo(_) => Task::none(),
        }
    }
}
