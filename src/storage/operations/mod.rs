// Storage operation traits and their local/memory implementations
pub mod list;
pub mod mv;
pub mod stat;

pub use list::Lister;
pub use mv::Mover;
pub use stat::Stater;
