pub mod analytic;
pub mod factory;
pub mod kinds;
pub mod provider;
pub mod reverse_mode;
pub mod tape;

pub use factory::derivative_provider_factory;
pub use kinds::DerivativeKind;
pub use provider::{DerivativeProvider, DerivativeScratch};
