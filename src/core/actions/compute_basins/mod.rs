pub mod compute_basins;
