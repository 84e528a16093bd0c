//! Paging metadata shared by list responses

use serde::{Deserialize, Serialize};

/// Page cursor block returned alongside list data.
///
/// `next` and `prev` are zero when no further page exists in that direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PageMeta {
    pub next: i64,
    pub prev: i64,
    pub last: i64,
    pub count: i64,
}
