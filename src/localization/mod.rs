use fluent_bundle::{FluentBundle, FluentResource};
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

type Bundle = FluentBundle<FluentResource>;

const SUPPORTED_LANGS: [&str; 2] = ["en", "ru"];
const FALLBACK_LANG: &str = "en";

fn load_ftl_source(lang: &str) -> &'static str {
    match lang {
        "en" => include_str!("resources/en.ftl"),
        "ru" => include_str!("resources/ru.ftl"),
        _ => include_str!("resources/en.ftl"),
    }
}

fn parse_lang(lang_code: &str) -> LanguageIdentifier {
    lang_code
        .parse::<LanguageIdentifier>()
        .unwrap_or_else(|_| FALLBACK_LANG.parse().unwrap())
}

fn normalize_lang(mut code: String) -> String {
    code.make_ascii_lowercase();
    let sep = code.find(['-', '_']).unwrap_or(code.len());
    let short = &code[..sep];
    if SUPPORTED_LANGS.contains(&short) {
        short.to_string()
    } else {
        FALLBACK_LANG.to_string()
    }
}

fn detect_system_lang() -> String {
    let sys = sys_locale::get_locale().unwrap_or_default();
    normalize_lang(sys)
}

struct LocalizationManager {
    current: String,
    fallback: String,
    bundles: HashMap<String, Bundle>,
}

impl LocalizationManager {
    fn new() -> Self {
        let mut bundles: HashMap<String, Bundle> = HashMap::new();
        for &code in SUPPORTED_LANGS.iter() {
            let langid = parse_lang(code);
            let mut bundle: Bundle = FluentBundle::new(vec![langid]);
            let res = FluentResource::try_new(load_ftl_source(code).to_string())
                .expect("Failed to parse embedded FTL resource");
            bundle.add_resource(res).expect("Failed to add FTL to bundle");
            bundles.insert(code.to_string(), bundle);
        }
        Self {
            current: FALLBACK_LANG.to_string(),
            fallback: FALLBACK_LANG.to_string(),
            bundles,
        }
    }

    fn set_current(&mut self, code: &str) -> Result<(), LocalizationError> {
        let code = normalize_lang(code.to_string());
        if !self.bundles.contains_key(&code) {
            return Err(LocalizationError::UnsupportedLanguage(code));
        }
        self.current = code;
        Ok(())
    }

    fn set_auto(&mut self) {
        self.current = detect_system_lang();
    }

    fn format(&self, id: &str) -> String {
        for code in [self.current.as_str(), self.fallback.as_str()] {
            if let Some(b) = self.bundles.get(code) {
                if let Some(pat) = b.get_message(id).and_then(|msg| msg.value()) {
                    let mut errors = vec![];
                    return b.format_pattern(pat, None, &mut errors).to_string();
                }
            }
        }
        format!("[missing: {}]", id)
    }
}

thread_local! {
    static LOCALIZATION: RefCell<LocalizationManager> = RefCell::new(LocalizationManager::new());
}

#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Initialize the localization system. None = use the system locale.
pub fn initialize_localization(preferred_lang: Option<&str>) -> Result<(), LocalizationError> {
    LOCALIZATION.with(|cell| {
        let mut mgr = cell.borrow_mut();
        match preferred_lang {
            Some(code) => mgr.set_current(code),
            None => {
                mgr.set_auto();
                Ok(())
            }
        }
    })
}

/// Explicitly switch to a supported code like "en" or "ru".
pub fn set_current_language(lang_code: &str) -> Result<(), LocalizationError> {
    LOCALIZATION.with(|cell| cell.borrow_mut().set_current(lang_code))
}

/// Switch to the language of the system locale.
pub fn set_language_auto() {
    LOCALIZATION.with(|cell| cell.borrow_mut().set_auto());
}

/// Current language code ("en", "ru").
pub fn get_current_language() -> String {
    LOCALIZATION.with(|cell| cell.borrow().current.clone())
}

/// Translate a message id. Unknown ids come back as a visible marker
/// rather than an error so a missing key never takes the UI down.
pub fn translate(message_id: &str) -> String {
    LOCALIZATION.with(|cell| cell.borrow().format(message_id))
}
