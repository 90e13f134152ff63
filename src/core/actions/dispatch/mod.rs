pub mod ports;
pub mod rayon_dispatcher;
pub mod serial_dispatcher;

pub use ports::phase_dispatcher::PhaseDispatcher;
pub use rayon_dispatcher::RayonDispatcher;
pub use serial_dispatcher::SerialDispatcher;
