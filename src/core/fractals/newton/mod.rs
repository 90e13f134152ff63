pub mod basin;
pub mod colour_map;
pub mod colour_table;
pub mod derivative;
pub mod errors;
pub mod frame_config;
pub mod newton_step;
pub mod polynomial;
pub mod root_set;
