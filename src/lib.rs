// SPDX-License-Identifier: PMPL-1.0-or-later

//! rpy-deepl — batch translation filler for Ren'Py localization scripts.
//!
//! Ren'Py emits translation stubs as paired declarations:
//!
//! ```text
//! old "Some text"
//! new ""
//! ```
//!
//! This crate scans `.rpy` files for those pairs and fills each empty
//! `new` payload with a DeepL translation of the preceding `old` payload.
//! Non-empty `new` lines and everything else in the file are passed
//! through untouched.
//!
//! PIPELINE:
//! 1. **lang**: resolves a spelled-out language token to a DeepL code.
//! 2. **deepl**: one blocking POST per untranslated line, falling back
//!    to the original text when the API is unreachable.
//! 3. **script**: the old/new line-pair scan and in-place file rewrite.
//! 4. **batch**: walks one (or all) language directories under the
//!    translation base path and reports what was filled.

pub mod batch;
pub mod deepl;
pub mod lang;
pub mod script;
pub mod types;
