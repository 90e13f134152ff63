pub mod compute_basins;
pub mod dispatch;
pub mod generate_image;
pub mod render_frame;
