pub mod menu;
pub mod views;
