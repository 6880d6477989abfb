pub mod keyboard;
pub mod text;
