pub mod phase_dispatcher;
