pub mod constants;
pub mod html;
pub mod layout;
pub mod render;
