//! Shared presentational components

pub mod button;
pub mod footer;
pub mod text_field;

pub use button::{Button, ButtonType, ButtonVariant};
pub use footer::Footer;
pub use text_field::TextField;
