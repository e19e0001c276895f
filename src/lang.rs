// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language token resolution.
//!
//! The CLI accepts either a spelled-out language name ("german") or a
//! bare code ("de"). Spelled-out names are mapped through a fixed table
//! of DeepL target codes; anything else is uppercased and passed along
//! as-is, so new codes work without a table update.
//!
//! Reference: <https://developers.deepl.com/docs/resources/supported-languages>

/// Resolves a user-supplied language token to a DeepL target code.
///
/// Matching is case-insensitive. Unknown tokens are uppercased rather
/// than rejected: `"de"` becomes `"DE"`, `"xy"` becomes `"XY"` and the
/// API call is left to fail (and pass through) on its own.
///
/// # Examples
/// ```
/// assert_eq!(rpy_deepl::lang::resolve_target_lang("german"), "DE");
/// assert_eq!(rpy_deepl::lang::resolve_target_lang("xy"), "XY");
/// ```
pub fn resolve_target_lang(token: &str) -> String {
    let lowered = token.to_lowercase();
    let code = match lowered.as_str() {
        "bulgarian" => "BG",
        "chinese" => "ZH",
        "czech" => "CS",
        "danish" => "DA",
        "dutch" => "NL",
        "english" => "EN",
        "estonian" => "ET",
        "finnish" => "FI",
        "french" => "FR",
        "german" => "DE",
        "greek" => "EL",
        "hungarian" => "HU",
        "indonesian" => "ID",
        "italian" => "IT",
        "japanese" => "JA",
        "korean" => "KO",
        "latvian" => "LV",
        "lithuanian" => "LT",
        "norwegian" => "NB",
        "polish" => "PL",
        "portuguese" => "PT",
        "romanian" => "RO",
        "russian" => "RU",
        "slovak" => "SK",
        "slovenian" => "SL",
        "spanish" => "ES",
        "swedish" => "SV",
        "turkish" => "TR",
        "ukrainian" => "UK",
        _ => return lowered.to_uppercase(),
    };
    code.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spelled_out_names_resolve() {
        assert_eq!(resolve_target_lang("german"), "DE");
        assert_eq!(resolve_target_lang("spanish"), "ES");
        assert_eq!(resolve_target_lang("polish"), "PL");
        assert_eq!(resolve_target_lang("japanese"), "JA");
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(resolve_target_lang("German"), "DE");
        assert_eq!(resolve_target_lang("FRENCH"), "FR");
    }

    #[test]
    fn unknown_tokens_are_uppercased() {
        assert_eq!(resolve_target_lang("xy"), "XY");
        assert_eq!(resolve_target_lang("de"), "DE");
        assert_eq!(resolve_target_lang("pt-br"), "PT-BR");
    }
}
