pub mod order_json;

pub use order_json::*;
