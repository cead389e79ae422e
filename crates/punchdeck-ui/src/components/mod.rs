//! Reusable card carousel components

mod card_face;
mod deck_status;
mod nav_button;
mod punch_token;

pub use card_face::*;
pub use deck_status::*;
pub use nav_button::*;
pub use punch_token::*;
