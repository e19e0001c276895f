// SPDX-License-Identifier: PMPL-1.0-or-later

//! Shared types for the translation pipeline

/// Formality register requested from the translation service.
///
/// DeepL only understands `more` and `less` on the wire; `Default`
/// means the parameter is omitted entirely and the service picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formality {
    Default,
    More,
    Less,
}

impl Formality {
    /// Wire value for the `formality` form parameter, or `None` when
    /// the parameter should not be sent at all.
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            Formality::Default => None,
            Formality::More => Some("more"),
            Formality::Less => Some("less"),
        }
    }
}

/// The seam between the line scanner and the translation backend.
///
/// Implementations must be infallible from the caller's point of view:
/// when the backend cannot produce a translation, `translate` returns
/// the input unchanged so a failed request degrades to a pass-through
/// instead of aborting the run.
pub trait Translator {
    fn translate(&self, text: &str) -> String;
}
