// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Translations;

const FALLBACK_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    fallback_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Translations::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                continue;
            };
            let Some(content) = Translations::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            // A malformed embedded file should not take the app down;
            // keys from it resolve to the MISSING marker instead.
            if let Ok(resource) = FluentResource::try_new(source) {
                let mut bundle = FluentBundle::new(vec![locale.clone()]);
                if bundle.add_resource(resource).is_ok() {
                    bundles.insert(locale.clone(), bundle);
                    available_locales.push(locale);
                }
            }
        }

        let fallback_locale: LanguageIdentifier = FALLBACK_LOCALE
            .parse()
            .unwrap_or_else(|_| LanguageIdentifier::default());
        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(|| fallback_locale.clone());

        Self {
            bundles,
            available_locales,
            current_locale,
            fallback_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        if let Some(value) = self.format(&self.current_locale, key) {
            return value;
        }
        if let Some(value) = self.format(&self.fallback_locale, key) {
            return value;
        }
        format!("MISSING: {}", key)
    }

    fn format(&self, locale: &LanguageIdentifier, key: &str) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let message = bundle.get_message(key)?;
        let pattern = message.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        errors.is_empty().then(|| value.to_string())
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. CLI argument
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Config file
    if let Some(lang_str) = &config.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}
