use crate::core::fractals::newton::derivative::{
    analytic::AnalyticDerivative, kinds::DerivativeKind, provider::DerivativeProvider,
    reverse_mode::ReverseModeDerivative,
};

#[must_use]
pub fn derivative_provider_factory(kind: DerivativeKind) -> Box<dyn DerivativeProvider> {
    match kind {
        DerivativeKind::Analytic => Box::new(AnalyticDerivative),
        DerivativeKind::ReverseMode => Box::new(ReverseModeDerivative),
    }
}
