pub mod api_key;
pub mod ideal_stock_amount;
pub mod role;
pub mod schedule;
pub mod supply_line;
pub mod trade_item;
