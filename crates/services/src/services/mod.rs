pub mod inventory;
pub mod memory;
