use serde::Serialize;

/// Shown for every generation failure, whatever the selected language.
pub const GENERIC_ERROR: &str = "Error/Ошибка: Проверьте API Key или VPN.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Language {
    Russian,
    English,
    Ukrainian,
}

/// UI strings for one language.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Translations {
    pub title: &'static str,
    pub desc: &'static str,
    pub name_label: &'static str,
    pub topic_label: &'static str,
    pub topic_placeholder: &'static str,
    pub button: &'static str,
    pub loading: &'static str,
    pub image_loading: &'static str,
    pub success: &'static str,
    pub error_key: &'static str,
}

const RUSSIAN: Translations = Translations {
    title: "✨ Генератор сказок",
    desc: "Введи имя и тему, а ИИ придумает сказку и нарисует картинку!",
    name_label: "Как зовут ребенка?",
    topic_label: "О чем будет сказка?",
    topic_placeholder: "Например: про космос",
    button: "🚀 Придумать сказку!",
    loading: "🧙‍♂️ Сказочник сочиняет историю...",
    image_loading: "🎨 Художник рисует иллюстрацию...",
    success: "Сказка готова!",
    error_key: "Укажите API ключ в настройках слева!",
};

const ENGLISH: Translations = Translations {
    title: "✨ Magic Story Generator",
    desc: "Enter a name and topic, AI will create a story and a picture!",
    name_label: "Child's name?",
    topic_label: "What is the story about?",
    topic_placeholder: "E.g. space adventure",
    button: "🚀 Generate Story!",
    loading: "🧙‍♂️ The Storyteller is writing...",
    image_loading: "🎨 Drawing the illustration...",
    success: "Story is ready!",
    error_key: "Please enter API Key in settings!",
};

const UKRAINIAN: Translations = Translations {
    title: "✨ Генератор казок",
    desc: "Введи ім'я та тему, а ШІ вигадає казку та намалює малюнок!",
    name_label: "Як звати дитину?",
    topic_label: "Про що буде казка?",
    topic_placeholder: "Наприклад: про космос",
    button: "🚀 Придумати казку!",
    loading: "🧙‍♂️ Казкар складає історію...",
    image_loading: "🎨 Художник малює ілюстрацію...",
    success: "Казка готова!",
    error_key: "Вкажіть API ключ у налаштуваннях зліва!",
};

impl Language {
    /// Selector order; the first entry is the default.
    pub const ALL: [Language; 3] = [Language::Russian, Language::English, Language::Ukrainian];

    /// Selector label. This exact text is also what the story prompt names as
    /// the target language.
    pub fn label(self) -> &'static str {
        match self {
            Language::Russian => "Русский 🇷🇺",
            Language::English => "English 🇺🇸",
            Language::Ukrainian => "Українська 🇺🇦",
        }
    }

    pub fn strings(self) -> &'static Translations {
        match self {
            Language::Russian => &RUSSIAN,
            Language::English => &ENGLISH,
            Language::Ukrainian => &UKRAINIAN,
        }
    }

    pub fn from_label(label: &str) -> Option<Language> {
        Self::ALL.into_iter().find(|lang| lang.label() == label)
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::ALL[0]
    }
}

/// One row of the selector table as served to the page.
#[derive(Debug, Serialize)]
pub struct LanguageEntry {
    pub label: &'static str,
    pub strings: &'static Translations,
}

pub fn language_table() -> Vec<LanguageEntry> {
    Language::ALL
        .into_iter()
        .map(|lang| LanguageEntry { label: lang.label(), strings: lang.strings() })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn labels_resolve_back_to_their_language() {
        for lang in Language::ALL {
            assert_eq!(Language::from_label(lang.label()), Some(lang));
        }
    }

    #[test]
    fn unknown_or_partial_label_is_rejected() {
        assert_eq!(Language::from_label("English"), None);
        assert_eq!(Language::from_label("Deutsch 🇩🇪"), None);
        assert_eq!(Language::from_label(""), None);
    }

    #[test]
    fn russian_is_the_default() {
        assert_eq!(Language::default(), Language::Russian);
        assert_eq!(language_table()[0].label, "Русский 🇷🇺");
    }

    #[test]
    fn every_language_has_complete_strings() {
        for lang in Language::ALL {
            let t = lang.strings();
            for s in [
                t.title,
                t.desc,
                t.name_label,
                t.topic_label,
                t.topic_placeholder,
                t.button,
                t.loading,
                t.image_loading,
                t.success,
                t.error_key,
            ] {
                assert!(!s.is_empty(), "{:?} has an empty string", lang);
            }
        }
    }

    #[test]
    fn missing_key_message_is_localized() {
        assert_eq!(Language::English.strings().error_key, "Please enter API Key in settings!");
        assert_ne!(Language::Russian.strings().error_key, Language::Ukrainian.strings().error_key);
    }

    #[test]
    fn table_serializes_with_labels_and_strings() {
        let json = serde_json::to_value(language_table()).unwrap();
        assert_eq!(json[1]["label"], "English 🇺🇸");
        assert_eq!(json[1]["strings"]["success"], "Story is ready!");
        assert_eq!(json.as_array().unwrap().len(), 3);
    }
}
