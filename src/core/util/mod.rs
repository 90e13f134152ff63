pub mod viewport_to_complex_coords;
