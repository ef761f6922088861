pub mod common;
pub mod health;
pub mod items;
pub mod summary;

pub use health::{health, ready, welcome};
pub use items::{buy_item, buy_item_with_quantity, buy_item_with_quantity_and_price, fast_buy_item};
pub use summary::show_summary;
