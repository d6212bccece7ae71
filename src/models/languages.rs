// Supported language catalog (display name → ISO 639-1 code)
// Author: kelexine (https://github.com/kelexine)

use phf::phf_ordered_map;
use serde::Serialize;

/// Placeholder shown before the user picks a language.
pub const UNSET_LANGUAGE: &str = "Select Language";

/// Ordered as presented in the language pickers.
static LANGUAGES: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "English" => "en",
    "Spanish" => "es",
    "French" => "fr",
    "German" => "de",
    "Italian" => "it",
    "Portuguese" => "pt",
    "Russian" => "ru",
    "Japanese" => "ja",
    "Korean" => "ko",
    "Chinese (Simplified)" => "zh-CN",
    "Chinese (Traditional)" => "zh-TW",
    "Arabic" => "ar",
    "Hindi" => "hi",
    "Bengali" => "bn",
    "Turkish" => "tr",
    "Dutch" => "nl",
    "Polish" => "pl",
    "Swedish" => "sv",
    "Norwegian" => "no",
    "Danish" => "da",
    "Finnish" => "fi",
    "Greek" => "el",
    "Hebrew" => "he",
    "Thai" => "th",
    "Vietnamese" => "vi",
    "Indonesian" => "id",
    "Malay" => "ms",
    "Filipino" => "fil",
    "Czech" => "cs",
    "Slovak" => "sk",
    "Hungarian" => "hu",
    "Romanian" => "ro",
    "Ukrainian" => "uk",
    "Swahili" => "sw",
    "Tamil" => "ta",
    "Telugu" => "te",
    "Marathi" => "mr",
    "Gujarati" => "gu",
    "Kannada" => "kn",
    "Malayalam" => "ml",
    "Punjabi" => "pa",
    "Urdu" => "ur",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub name: &'static str,
    pub code: &'static str,
}

/// All supported languages in display order.
pub fn supported_languages() -> impl Iterator<Item = Language> {
    LANGUAGES
        .entries()
        .map(|(&name, &code)| Language { name, code })
}

/// Whether `name` is a catalog display name (case-sensitive).
pub fn is_supported(name: &str) -> bool {
    LANGUAGES.contains_key(name)
}

/// Picker options: the unset sentinel followed by every language name.
pub fn picker_options() -> Vec<&'static str> {
    std::iter::once(UNSET_LANGUAGE)
        .chain(LANGUAGES.keys().copied())
        .collect()
}
