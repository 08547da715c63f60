/*!
 * Language catalog offered by the translator form.
 *
 * The catalog maps human-readable names to the codes understood by the
 * translation provider. The first entry is the "Auto Detect" sentinel which
 * is only valid as a source language.
 */

use isolang::Language;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Display name of the auto-detect sentinel
pub const AUTO_DETECT_NAME: &str = "Auto Detect";

/// Code of the auto-detect sentinel
pub const AUTO_DETECT_CODE: &str = "auto";

/// Code used when a target display name cannot be resolved
pub const FALLBACK_TARGET_CODE: &str = "en";

/// A single catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Human-readable name shown in selectors
    pub display_name: &'static str,
    /// Provider language code
    pub code: &'static str,
}

impl LanguageEntry {
    const fn new(display_name: &'static str, code: &'static str) -> Self {
        Self { display_name, code }
    }

    /// Whether this entry is the auto-detect sentinel
    pub fn is_auto(&self) -> bool {
        self.code == AUTO_DETECT_CODE
    }
}

const ENTRIES: &[LanguageEntry] = &[
    LanguageEntry::new(AUTO_DETECT_NAME, AUTO_DETECT_CODE),
    LanguageEntry::new("Arabic", "ar"),
    LanguageEntry::new("Bengali", "bn"),
    LanguageEntry::new("Chinese (Simplified)", "zh-cn"),
    LanguageEntry::new("English", "en"),
    LanguageEntry::new("French", "fr"),
    LanguageEntry::new("German", "de"),
    LanguageEntry::new("Gujarati", "gu"),
    LanguageEntry::new("Hindi", "hi"),
    LanguageEntry::new("Italian", "it"),
    LanguageEntry::new("Japanese", "ja"),
    LanguageEntry::new("Kannada", "kn"),
    LanguageEntry::new("Korean", "ko"),
    LanguageEntry::new("Marathi", "mr"),
    LanguageEntry::new("Odia", "or"),
    LanguageEntry::new("Punjabi", "pa"),
    LanguageEntry::new("Russian", "ru"),
    LanguageEntry::new("Spanish", "es"),
    LanguageEntry::new("Tamil", "ta"),
    LanguageEntry::new("Telugu", "te"),
    LanguageEntry::new("Urdu", "ur"),
];

static BY_NAME: Lazy<HashMap<&'static str, &'static LanguageEntry>> =
    Lazy::new(|| ENTRIES.iter().map(|e| (e.display_name, e)).collect());

static BY_CODE: Lazy<HashMap<&'static str, &'static LanguageEntry>> =
    Lazy::new(|| ENTRIES.iter().map(|e| (e.code, e)).collect());

/// Static catalog of supported languages
pub struct LanguageCatalog;

impl LanguageCatalog {
    /// All entries in selector order
    pub fn entries() -> &'static [LanguageEntry] {
        ENTRIES
    }

    /// Resolve a display name to its code, falling back to "auto"
    pub fn resolve_code(display_name: &str) -> &'static str {
        BY_NAME
            .get(display_name)
            .map(|e| e.code)
            .unwrap_or(AUTO_DETECT_CODE)
    }

    /// Resolve a target display name to its code, falling back to "en"
    pub fn resolve_target_code(display_name: &str) -> &'static str {
        BY_NAME
            .get(display_name)
            .map(|e| e.code)
            .unwrap_or(FALLBACK_TARGET_CODE)
    }

    /// Resolve a code to a display name
    ///
    /// Codes outside the catalog fall back to their ISO 639 English name,
    /// and finally to the code itself.
    pub fn resolve_name(code: &str) -> String {
        let normalized = code.trim().to_lowercase();
        if let Some(entry) = BY_CODE.get(normalized.as_str()) {
            return entry.display_name.to_string();
        }

        // Region-qualified codes such as "pt-br" resolve through their base language
        let base = normalized.split('-').next().unwrap_or_default();
        let language = match base.len() {
            2 => Language::from_639_1(base),
            3 => Language::from_639_3(base),
            _ => None,
        };

        language
            .map(|l| l.to_name().to_string())
            .unwrap_or_else(|| code.to_string())
    }

    /// Ordered display names, optionally including the auto-detect sentinel
    pub fn list_display_names(include_auto: bool) -> Vec<&'static str> {
        ENTRIES
            .iter()
            .filter(|e| include_auto || !e.is_auto())
            .map(|e| e.display_name)
            .collect()
    }

    /// Whether the display name is a catalog key
    pub fn contains(display_name: &str) -> bool {
        BY_NAME.contains_key(display_name)
    }

    /// Case-insensitive lookup by display name or code
    pub fn find_by_name(query: &str) -> Option<&'static LanguageEntry> {
        let query = query.trim();
        ENTRIES.iter().find(|e| {
            e.display_name.eq_ignore_ascii_case(query) || e.code.eq_ignore_ascii_case(query)
        })
    }
}
