//! Data types shared by the prompt builder.

/// How the generated Rust should treat the defects of the C original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslationMode {
    /// Plain translation.
    #[default]
    Standard,
    /// Ask the model to carry memory-safety errors over into the Rust code.
    PreserveErrors,
}

impl TranslationMode {
    pub fn from_keep_errors(keep_errors: bool) -> Self {
        if keep_errors {
            TranslationMode::PreserveErrors
        } else {
            TranslationMode::Standard
        }
    }

    pub fn keeps_errors(self) -> bool {
        self == TranslationMode::PreserveErrors
    }
}
