pub mod inspector;
pub mod plugin;
pub mod ui;
