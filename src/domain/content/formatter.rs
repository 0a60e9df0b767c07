//! Chat reformatting of structured description sections.
//!
//! Converts the markdown-like section into the display form the transport
//! renders: emoji-prefixed emphasized headers, bullet glyphs, and divider
//! lines. Formatting is best-effort; lines that match no marker pass
//! through unchanged, so the output of a pass is stable under re-formatting.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::foundation::Language;

const DIVIDER: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const DEFAULT_JOB_EMOJI: &str = "💼";
const DEFAULT_SECTION_EMOJI: &str = "▫️";

static BLANK_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("blank-run pattern is valid"));

/// Reformats one extracted section for chat display.
pub fn format_for_chat(section: &str, language: Language) -> String {
    let mut formatted: Vec<String> = Vec::new();

    for line in section.lines() {
        if let Some(title) = line.strip_prefix("# ") {
            let title = title.trim();
            formatted.push(format!("{} *{}*", job_emoji(language, title), title));
            formatted.push(String::new());
        } else if let Some(heading) = line.strip_prefix("## ") {
            let heading = heading.trim();
            formatted.push(format!("{} *{}*", section_emoji(language, heading), heading));
            formatted.push(String::new());
        } else if line.trim() == "---" {
            formatted.push(DIVIDER.to_string());
            formatted.push(String::new());
        } else if let Some(item) = line.strip_prefix("  - ") {
            formatted.push(format!("    ▪️ {}", item.trim()));
        } else if let Some(item) = line.strip_prefix("- ") {
            formatted.push(format!("• {}", item.trim()));
        } else if !line.trim().is_empty() {
            formatted.push(line.to_string());
        } else {
            formatted.push(String::new());
        }
    }

    let joined = formatted.join("\n");
    BLANK_RUNS.replace_all(&joined, "\n\n").trim().to_string()
}

/// Emoji shown before a job title, per language.
fn job_emoji(language: Language, title: &str) -> &'static str {
    match language {
        Language::Pl => match title {
            "Pracownik działu mięsnego w supermarkecie" => "🥩",
            "Pracownik w supermarkecie" => "🏪",
            "Kasjer do supermarketu" => "🛒",
            "Brygadzista na produkcję mięsną" => "👷‍♂️",
            "Pracownik produkcji" => "🏭",
            _ => DEFAULT_JOB_EMOJI,
        },
        Language::Ua => match title {
            "Працівник м'ясного відділу в супермаркеті" => "🥩",
            "Працівник супермаркету" => "🏪",
            "Касир до супермаркету" => "🛒",
            "Бригадир на м'ясному виробництві" => "👷‍♂️",
            "Працівник виробництва" => "🏭",
            _ => DEFAULT_JOB_EMOJI,
        },
        Language::Ru => match title {
            "Работник мясного отдела в супермаркете" => "🥩",
            "Работник супермаркета" => "🏪",
            "Кассир в супермаркет" => "🛒",
            "Бригадир на мясном производстве" => "👷‍♂️",
            "Работник производства" => "🏭",
            _ => DEFAULT_JOB_EMOJI,
        },
    }
}

/// Emoji shown before a second-level section heading, per language.
fn section_emoji(language: Language, heading: &str) -> &'static str {
    match (language, heading) {
        (Language::Pl, "Co dla nas jest ważne")
        | (Language::Ua, "Що для нас важливо")
        | (Language::Ru, "Что для нас важно") => "⚡",
        (Language::Pl, "Co możemy Ci zaoferować")
        | (Language::Pl, "Co możemy Tobie zaoferować")
        | (Language::Ua, "Що ми можемо Вам запропонувати")
        | (Language::Ru, "Что мы можем Вам предложить") => "💰",
        (Language::Pl, "Zapraszamy do udziału w rekrutacji")
        | (Language::Ua, "Запрошуємо до участі в рекрутації")
        | (Language::Ru, "Приглашаем к участию в рекрутинге") => "📝",
        (Language::Pl, "Obowiązki Brygadzisty")
        | (Language::Ua, "Обов'язки Бригадира")
        | (Language::Ru, "Обязанности Бригадира") => "📋",
        _ => DEFAULT_SECTION_EMOJI,
    }
}
