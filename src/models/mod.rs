pub mod layout;
pub mod player;
pub mod roi;
pub mod text_box;
