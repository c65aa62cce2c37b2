//! Query builders for views and Mango `_find`.

mod mango;
mod view;

pub use mango::MangoQuery;
pub use view::{JSON_ENCODED_KEYS, ViewQuery};
