pub mod app;
pub mod cart;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod product;
pub mod render;
pub mod reviews;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
