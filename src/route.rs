use std::fmt;

use crate::order::OrderId;

/// Client-side routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Orders,
    Archive,
    /// Detail/processing screen of one order.
    OrderInfo(OrderId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Orders => "/".to_string(),
            Route::Archive => "/archive".to_string(),
            Route::OrderInfo(id) => format!("/orderInfo/{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
