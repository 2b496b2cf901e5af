//! Request/query types (Deserialize)

use serde::Deserialize;

/// Query parameters for `/birds/grouped`.
///
/// `state` is deserialized as optional so the handler can answer a missing
/// parameter with the documented 400 body instead of axum's generic
/// rejection.
#[derive(Debug, Deserialize)]
pub struct GroupedBirdsQuery {
    pub state: Option<String>,
    pub district: Option<String>,
}
