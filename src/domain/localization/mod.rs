//! Static localized content.
//!
//! All visitor-facing text lives here as a typed per-language lexicon,
//! resolved at compile time. Menu labels double as transition triggers: the
//! dialog engine compares inbound text against the *selected* language's
//! labels only, so wording from another language is unrecognized input.

use crate::domain::foundation::Language;

/// The trilingual prompt shown before a language is chosen.
pub const LANGUAGE_PROMPT: &str = "🌍 Wybierz język / Виберіть мову / Выберите язык";

/// Keyboard rows for the language-selection prompt: one row, three flags.
pub fn language_button_rows() -> Vec<Vec<String>> {
    vec![Language::ALL.iter().map(|l| l.flag_label().to_string()).collect()]
}

/// Every localized string the flow can emit, for one language.
///
/// Field names mirror the content keys used by the persisted flow; the
/// `jobs` list is the ordered job catalog, identical in meaning across
/// languages (entry *i* denotes the same job everywhere).
#[derive(Debug)]
pub struct Lexicon {
    pub welcome: &'static str,
    pub main_menu: &'static str,
    pub check_jobs: &'static str,
    pub contact_us: &'static str,
    pub fill_form: &'static str,
    pub contact_info: &'static str,
    pub job_offers: &'static str,
    pub thank_you: &'static str,
    pub error_occurred: &'static str,
    pub invalid_input: &'static str,
    pub invalid_phone: &'static str,
    pub invalid_name: &'static str,
    pub contact_details: &'static str,
    pub apply_for_job: &'static str,
    pub back: &'static str,
    pub cancel: &'static str,
    pub enter_name: &'static str,
    pub enter_country: &'static str,
    pub enter_phone: &'static str,
    pub enter_telegram_phone: &'static str,
    pub enter_accommodation: &'static str,
    pub enter_city: &'static str,
    pub enter_availability: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub jobs: &'static [&'static str],
}

/// Returns the lexicon for a language.
pub fn lexicon(language: Language) -> &'static Lexicon {
    match language {
        Language::Pl => &PL,
        Language::Ua => &UA,
        Language::Ru => &RU,
    }
}

static PL: Lexicon = Lexicon {
    welcome: "🇵🇱 Pomożemy znaleźć pracę w Polsce - szybko i wygodnie!",
    main_menu: "Menu główne",
    check_jobs: "Sprawdź oferty pracy",
    contact_us: "Skontaktuj się z nami",
    fill_form: "Wypełnij formularz",
    contact_info: "Kontakt",
    job_offers: "Dostępne oferty pracy:",
    thank_you: "✅ Dziękujemy! Skontaktujemy się z Tobą wkrótce.",
    error_occurred: "❌ Wystąpił błąd. Spróbuj ponownie lub skontaktuj się z nami.",
    invalid_input: "❌ Nieprawidłowe dane. Spróbuj ponownie.",
    invalid_phone: "❌ Nieprawidłowy numer telefonu. Wprowadź prawidłowy numer.",
    invalid_name: "❌ Nieprawidłowe imię/nazwisko. Używaj tylko liter.",
    contact_details: "📞 W razie pytań możesz się z nami skontaktować:\n\n\
📧 Email: rekrutacja@folga.com.pl\n\
📞 Telefon: +48 502 202 902\n\
🌐 Strona internetowa: folga.com.pl\n\n\
Jesteśmy dostępni od poniedziałku do piątku, 8:00-17:00",
    apply_for_job: "Aplikuj na to stanowisko",
    back: "Powrót",
    cancel: "Anuluj",
    enter_name: "Podaj swoje imię i nazwisko:",
    enter_country: "Podaj kraj pochodzenia:",
    enter_phone: "Podaj telefon kontaktowy:",
    enter_telegram_phone: "Podaj telefon kontaktowy Telegram:",
    enter_accommodation: "Czy potrzebujesz zakwaterowania? (Tak/Nie)",
    enter_city: "W którym mieście obecnie przebywasz?",
    enter_availability: "Od kiedy będziesz gotowy do nowej pracy?",
    yes: "Tak",
    no: "Nie",
    jobs: &[
        "Pracownik działu mięsnego w supermarkecie",
        "Pracownik w supermarkecie",
        "Kasjer do supermarketu",
        "Pracownik produkcji",
        "Brygadzista na produkcję mięsną",
    ],
};

static UA: Lexicon = Lexicon {
    welcome: "🇺🇦 Допоможемо знайти роботу в Польщі — швидко та зручно!",
    main_menu: "Головне меню",
    check_jobs: "Перевір вакансії",
    contact_us: "Зв'яжись з нами",
    fill_form: "Заповнити анкету",
    contact_info: "Контакт",
    job_offers: "Доступні вакансії:",
    thank_you: "✅ Дякуємо! Ми зв'яжемося з Вами найближчим часом.",
    error_occurred: "❌ Виникла помилка. Спробуйте ще раз або зв'яжіться з нами.",
    invalid_input: "❌ Неправильні дані. Спробуйте ще раз.",
    invalid_phone: "❌ Неправильний номер телефону. Введіть правильний номер.",
    invalid_name: "❌ Неправильне ім'я/прізвище. Використовуйте тільки літери.",
    contact_details: "📞 З питань можете з нами зв'язатися:\n\n\
📧 Email: rekrutacja@folga.com.pl\n\
📞 Телефон: +48 502 202 902\n\
🌐 Вебсайт: folga.com.pl\n\n\
Ми доступні з понеділка по п'ятницю, 8:00-17:00",
    apply_for_job: "Подати заяву на цю посаду",
    back: "Назад",
    cancel: "Скасувати",
    enter_name: "Введіть своє ім'я та прізвище:",
    enter_country: "Введіть країну походження:",
    enter_phone: "Введіть контактний номер телефону:",
    enter_telegram_phone: "Введіть контактний номер у Telegram:",
    enter_accommodation: "Чи потребуєш житло? (Так/Ні)",
    enter_city: "У якому місті зараз перебуваєш?",
    enter_availability: "Від коли плануєш почати працювати?",
    yes: "Так",
    no: "Ні",
    jobs: &[
        "Працівник м'ясного відділу в супермаркеті",
        "Працівник супермаркету",
        "Касир до супермаркету",
        "Працівник виробництва",
        "Бригадир на м'ясному виробництві",
    ],
};

static RU: Lexicon = Lexicon {
    welcome: "🇷🇺 Поможем вам найти работу в Польше — быстро и удобно!",
    main_menu: "Главное меню",
    check_jobs: "Проверь вакансии",
    contact_us: "Свяжись с нами",
    fill_form: "Заполнить анкету",
    contact_info: "Контакты",
    job_offers: "Доступные вакансии:",
    thank_you: "✅ Спасибо! Мы свяжемся с вами в ближайшее время.",
    error_occurred: "❌ Произошла ошибка. Попробуйте еще раз или свяжитесь с нами.",
    invalid_input: "❌ Неправильные данные. Попробуйте еще раз.",
    invalid_phone: "❌ Неправильный номер телефона. Введите правильный номер.",
    invalid_name: "❌ Неправильное имя/фамилия. Используйте только буквы.",
    contact_details: "📞 По вопросам можете с нами связаться:\n\n\
📧 Email: rekrutacja@folga.com.pl\n\
📞 Телефон: +48 502 202 902\n\
🌐 Сайт: folga.com.pl\n\n\
Мы доступны с понедельника по пятницу, 8:00-17:00",
    apply_for_job: "Подать заявку на эту должность",
    back: "Назад",
    cancel: "Отмена",
    enter_name: "Введите ваше имя и фамилию:",
    enter_country: "Введите страну происхождения:",
    enter_phone: "Введите контактный номер телефона:",
    enter_telegram_phone: "Введите контактный номер Telegram:",
    enter_accommodation: "Нуждаетесь в жилье? (Да/Нет)",
    enter_city: "В каком городе вы сейчас находитесь?",
    enter_availability: "От когда планируете начать работать?",
    yes: "Да",
    no: "Нет",
    jobs: &[
        "Работник мясного отдела в супермаркете",
        "Работник супермаркета",
        "Кассир в супермаркет",
        "Работник производства",
        "Бригадир на мясном производстве",
    ],
};
