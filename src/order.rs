//! Order records as served by the backend, and the pending/archived split.

use serde::{Deserialize, Deserializer};
use std::fmt;
use tracing::warn;

/// Backend identifier of an order.
///
/// The backend is free to send either a string (`"65f0c2..."`) or an integer;
/// both are kept as text since the value is only ever echoed into a route.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for OrderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => OrderId(text),
            Raw::Number(number) => OrderId(number.to_string()),
        })
    }
}

/// A customer order. Owned by the backend, never modified here.
///
/// Only `completed` is required. A record without an identifier still
/// renders; it just has nowhere to link to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawOrder")]
pub struct Order {
    pub id: Option<OrderId>,
    pub name: String,
    pub address: String,
    pub completed: bool,
}

// Mongo-style backends send `_id`, sometimes alongside an `id` virtual.
#[derive(Deserialize)]
struct RawOrder {
    #[serde(rename = "_id", default)]
    mongo_id: Option<OrderId>,
    #[serde(default)]
    id: Option<OrderId>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    address: Option<String>,
    completed: bool,
}

impl From<RawOrder> for Order {
    fn from(raw: RawOrder) -> Self {
        Self {
            id: raw.mongo_id.or(raw.id),
            name: raw.name.unwrap_or_default(),
            address: raw.address.unwrap_or_default(),
            completed: raw.completed,
        }
    }
}

/// Decodes the order collection. The body must be a JSON array; elements
/// that are not orders are skipped with a warning so the rest still render.
pub fn decode_collection(body: &[u8]) -> Result<Vec<Order>, serde_json::Error> {
    let elements: Vec<serde_json::Value> = serde_json::from_slice(body)?;

    Ok(elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| match serde_json::from_value(element) {
            Ok(order) => Some(order),
            Err(err) => {
                warn!(index, error = %err, "skipping malformed order record");
                None
            }
        })
        .collect())
}

/// Which half of the order collection a view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    /// `completed == false`
    Pending,
    /// `completed == true`
    Archived,
}

impl Partition {
    pub fn of(order: &Order) -> Self {
        if order.completed {
            Partition::Archived
        } else {
            Partition::Pending
        }
    }

    pub fn admits(self, order: &Order) -> bool {
        Partition::of(order) == self
    }

    /// Keeps the orders of this partition, in the order the server sent them.
    pub fn select(self, orders: Vec<Order>) -> Vec<Order> {
        orders.into_iter().filter(|o| self.admits(o)).collect()
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partition::Pending => f.write_str("pending"),
            Partition::Archived => f.write_str("archived"),
        }
    }
}
