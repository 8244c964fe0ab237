pub mod icons;
pub mod render;
pub mod status;

pub use render::render_board;
pub use status::{FetchStatus, LoadState};
