pub mod cli;
pub mod frame_driver;
pub mod ports;
pub mod viewport_controller;
