#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DerivativeKind {
    #[default]
    Analytic,
    ReverseMode,
}

impl DerivativeKind {
    pub const ALL: &'static [Self] = &[Self::Analytic, Self::ReverseMode];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Analytic => "Analytic",
            Self::ReverseMode => "Reverse mode",
        }
    }
}

impl std::fmt::Display for DerivativeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
