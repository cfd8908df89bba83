pub mod config;
pub mod item;
pub mod list;

pub use config::*;
pub use item::*;
pub use list::*;
