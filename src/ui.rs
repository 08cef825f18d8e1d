use iced::widget::{button, column, container, horizontal_rule, row, scrollable, text};
use iced::{Alignment, Element, Length};

use crate::app::{App, Message};
use crate::order::OrderId;
use crate::projection::Load;
use crate::route::Route;

/// One table row as displayed: Name, Address, Action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRow<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub action: RowAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    /// "Process": navigates to the order's detail route, if it has one.
    Process(Option<Route>),
    /// "View Order": shown, not wired to anything.
    ViewOrder,
}

pub fn view(app: &App) -> Element<Message> {
    let nav_bar = row![
        nav_button("Orders", Route::Orders, &app.route),
        nav_button("Archive", Route::Archive, &app.route),
    ]
    .spacing(5)
    .padding([10, 20]);

    let content = match &app.route {
        Route::Orders => app.orders.view(),
        Route::Archive => app.archive.view(),
        Route::OrderInfo(id) => order_info(id),
    };

    container(column![nav_bar, content].spacing(10))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn nav_button<'a>(label: &'a str, target: Route, current: &Route) -> Element<'a, Message> {
    let is_active = *current == target;
    button(text(label).size(if is_active { 16 } else { 14 }))
        .on_press(Message::Navigate(target))
        .into()
}

pub fn order_table<'a>(
    title: &'a str,
    load: &'a Load,
    rows: Vec<OrderRow<'a>>,
) -> Element<'a, Message> {
    let heading = row![
        text(title).size(24),
        button("Reload").on_press(Message::Reload),
    ]
    .spacing(20)
    .align_y(Alignment::Center);

    let header = row![
        text("Name").size(16).width(Length::FillPortion(2)),
        text("Address").size(16).width(Length::FillPortion(3)),
        text("Action").size(16).width(Length::FillPortion(1)),
    ]
    .spacing(10);

    let body = column(rows.into_iter().map(table_row)).spacing(6);

    column![
        heading,
        load_status(load),
        header,
        horizontal_rule(1),
        scrollable(body).height(Length::Fill),
    ]
    .spacing(10)
    .padding(20)
    .into()
}

fn table_row(order: OrderRow<'_>) -> Element<'_, Message> {
    let action: Element<Message> = match order.action {
        RowAction::Process(route) => button("Process")
            .style(button::primary)
            .on_press_maybe(route.map(Message::Navigate))
            .into(),
        RowAction::ViewOrder => button("View Order").style(button::success).into(),
    };

    row![
        text(order.name).size(14).width(Length::FillPortion(2)),
        text(order.address).size(14).width(Length::FillPortion(3)),
        container(action).width(Length::FillPortion(1)),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}

fn load_status(load: &Load) -> Element<'_, Message> {
    match load {
        Load::NotLoaded => text("Not loaded").size(12).into(),
        Load::Loading => text("Loading orders...").size(12).into(),
        Load::Loaded(orders) => text(format!("{} order(s)", orders.len())).size(12).into(),
        Load::Failed(err) => text(format!("Failed: {err}"))
            .size(14)
            .style(text::danger)
            .into(),
    }
}

fn order_info(id: &OrderId) -> Element<'_, Message> {
    column![
        text(format!("Order {id}")).size(24),
        text(Route::OrderInfo(id.clone()).path()).size(12),
        text("Processing for this order is not available in this client.").size(14),
        button("Back to orders").on_press(Message::Navigate(Route::Orders)),
    ]
    .spacing(20)
    .padding(20)
    .into()
}
