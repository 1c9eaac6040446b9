pub mod accounts;
pub mod ui;
