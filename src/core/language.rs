//! Languages for `{MN}`, `{mn}`, `{WD}` and `{wd}`.
//!
//! Each language owns two fixed tables: weekdays Sunday-first and months
//! January-first.

use chrono::{Datelike, NaiveDate};

use crate::error::{PdateError, Result};

/// Output language selected with `-l`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
    French,
    Spanish,
    German,
    /// Swiss German.
    Swiss,
    Italian,
    Portuguese,
    Dutch,
    Russian,
    Chinese,
    Arabic,
    Hindi,
}

impl Language {
    /// All languages in help-text order.
    pub const ALL: &'static [Self] = &[
        Self::English,
        Self::French,
        Self::Spanish,
        Self::German,
        Self::Swiss,
        Self::Italian,
        Self::Portuguese,
        Self::Dutch,
        Self::Russian,
        Self::Chinese,
        Self::Arabic,
        Self::Hindi,
    ];

    /// Parse a language code as given to `-l`.
    ///
    /// # Errors
    ///
    /// Returns [`PdateError::UnknownLanguage`] for codes outside the table.
    pub fn from_code(code: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|language| language.code() == code)
            .ok_or_else(|| PdateError::UnknownLanguage(code.to_string()))
    }

    /// Two-letter code used on the command line.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::French => "fr",
            Self::Spanish => "es",
            Self::German => "de",
            Self::Swiss => "ch",
            Self::Italian => "it",
            Self::Portuguese => "pt",
            Self::Dutch => "nl",
            Self::Russian => "ru",
            Self::Chinese => "zh",
            Self::Arabic => "ar",
            Self::Hindi => "hi",
        }
    }

    /// Weekday names, Sunday first.
    #[must_use]
    pub const fn weekday_names(self) -> &'static [&'static str; 7] {
        match self {
            Self::English => &[
                "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
            ],
            Self::French => &[
                "Dimanche", "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi",
            ],
            Self::Spanish => &[
                "Domingo",
                "Lunes",
                "Martes",
                "Miércoles",
                "Jueves",
                "Viernes",
                "Sábado",
            ],
            Self::German => &[
                "Sonntag",
                "Montag",
                "Dienstag",
                "Mittwoch",
                "Donnerstag",
                "Freitag",
                "Samstag",
            ],
            Self::Swiss => &[
                "suntig", "mäntig", "zistig", "mittwuch", "donstig", "fritig", "samstig",
            ],
            Self::Italian => &[
                "Domenica",
                "Lunedì",
                "Martedì",
                "Mercoledì",
                "Giovedì",
                "Venerdì",
                "Sabato",
            ],
            Self::Portuguese => &[
                "Domingo",
                "Segunda-feira",
                "Terça-feira",
                "Quarta-feira",
                "Quinta-feira",
                "Sexta-feira",
                "Sábado",
            ],
            Self::Dutch => &[
                "Zondag",
                "Maandag",
                "Dinsdag",
                "Woensdag",
                "Donderdag",
                "Vrijdag",
                "Zaterdag",
            ],
            Self::Russian => &[
                "Воскресенье",
                "Понедельник",
                "Вторник",
                "Среда",
                "Четверг",
                "Пятница",
                "Суббота",
            ],
            Self::Chinese => &[
                "星期日", "星期一", "星期二", "星期三", "星期四", "星期五", "星期六",
            ],
            Self::Arabic => &[
                "الأحد",
                "الاثنين",
                "الثلاثاء",
                "الأربعاء",
                "الخميس",
                "الجمعة",
                "السبت",
            ],
            Self::Hindi => &[
                "रविवार",
                "सोमवार",
                "मंगलवार",
                "बुधवार",
                "गुरुवार",
                "शुक्रवार",
                "शनिवार",
            ],
        }
    }

    /// Month names, January first.
    #[must_use]
    pub const fn month_names(self) -> &'static [&'static str; 12] {
        match self {
            Self::English => &[
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            Self::French => &[
                "Janvier",
                "Février",
                "Mars",
                "Avril",
                "Mai",
                "Juin",
                "Juillet",
                "Août",
                "Septembre",
                "Octobre",
                "Novembre",
                "Décembre",
            ],
            Self::Spanish => &[
                "Enero",
                "Febrero",
                "Marzo",
                "Abril",
                "Mayo",
                "Junio",
                "Julio",
                "Agosto",
                "Septiembre",
                "Octubre",
                "Noviembre",
                "Diciembre",
            ],
            Self::German => &[
                "Januar",
                "Februar",
                "März",
                "April",
                "Mai",
                "Juni",
                "Juli",
                "August",
                "September",
                "Oktober",
                "November",
                "Dezember",
            ],
            Self::Swiss => &[
                "januar",
                "februar",
                "märz",
                "apriu",
                "mai",
                "juni",
                "july",
                "august",
                "september",
                "oktober",
                "november",
                "dezember",
            ],
            Self::Italian => &[
                "Gennaio",
                "Febbraio",
                "Marzo",
                "Aprile",
                "Maggio",
                "Giugno",
                "Luglio",
                "Agosto",
                "Settembre",
                "Ottobre",
                "Novembre",
                "Dicembre",
            ],
            Self::Portuguese => &[
                "Janeiro",
                "Fevereiro",
                "Março",
                "Abril",
                "Maio",
                "Junho",
                "Julho",
                "Agosto",
                "Setembro",
                "Outubro",
                "Novembro",
                "Dezembro",
            ],
            Self::Dutch => &[
                "Januari",
                "Februari",
                "Maart",
                "April",
                "Mei",
                "Juni",
                "Juli",
                "Augustus",
                "September",
                "Oktober",
                "November",
                "December",
            ],
            Self::Russian => &[
                "Январь",
                "Февраль",
                "Март",
                "Апрель",
                "Май",
                "Июнь",
                "Июль",
                "Август",
                "Сентябрь",
                "Октябрь",
                "Ноябрь",
                "Декабрь",
            ],
            Self::Chinese => &[
                "一月",
                "二月",
                "三月",
                "四月",
                "五月",
                "六月",
                "七月",
                "八月",
                "九月",
                "十月",
                "十一月",
                "十二月",
            ],
            Self::Arabic => &[
                "يناير",
                "فبراير",
                "مارس",
                "أبريل",
                "مايو",
                "يونيو",
                "يوليو",
                "أغسطس",
                "سبتمبر",
                "أكتوبر",
                "نوفمبر",
                "ديسمبر",
            ],
            Self::Hindi => &[
                "जनवरी",
                "फ़रवरी",
                "मार्च",
                "अप्रैल",
                "मई",
                "जून",
                "जुलाई",
                "अगस्त",
                "सितंबर",
                "अक्टूबर",
                "नवंबर",
                "दिसंबर",
            ],
        }
    }

    /// Whether names can be cut to three letters.
    ///
    /// Cyrillic, CJK, Arabic and Devanagari names have no three-letter form.
    #[must_use]
    pub const fn has_short_form(self) -> bool {
        matches!(
            self,
            Self::English
                | Self::French
                | Self::Spanish
                | Self::German
                | Self::Swiss
                | Self::Italian
                | Self::Portuguese
                | Self::Dutch
        )
    }

    /// Full weekday name of `date`.
    #[must_use]
    pub fn weekday_name(self, date: NaiveDate) -> &'static str {
        self.weekday_names()[date.weekday().num_days_from_sunday() as usize]
    }

    /// Full month name of `date`.
    #[must_use]
    pub fn month_name(self, date: NaiveDate) -> &'static str {
        self.month_names()[date.month0() as usize]
    }

    /// Abbreviate a name: first three characters, or the full name when the
    /// language has no short form.
    #[must_use]
    pub fn short_form(self, name: &str) -> &str {
        if !self.has_short_form() {
            return name;
        }
        match name.char_indices().nth(3) {
            Some((end, _)) => &name[..end],
            None => name,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn every_code_round_trips() {
        for &language in Language::ALL {
            assert_eq!(Language::from_code(language.code()).unwrap(), language);
        }
        assert_eq!(Language::ALL.len(), 12);
    }

    #[test]
    fn unknown_code_is_an_error() {
        assert!(matches!(
            Language::from_code("xx"),
            Err(PdateError::UnknownLanguage(code)) if code == "xx"
        ));
        assert!(Language::from_code("EN").is_err());
    }

    #[test]
    fn weekday_table_is_sunday_first() {
        // 2025-03-05 is a Wednesday; 2025-03-09 a Sunday.
        assert_eq!(Language::English.weekday_name(date(2025, 3, 5)), "Wednesday");
        assert_eq!(Language::German.weekday_name(date(2025, 3, 9)), "Sonntag");
        assert_eq!(Language::Chinese.weekday_name(date(2025, 3, 9)), "星期日");
    }

    #[test]
    fn month_table_is_january_first() {
        assert_eq!(Language::English.month_name(date(2025, 1, 1)), "January");
        assert_eq!(Language::French.month_name(date(2025, 12, 31)), "Décembre");
    }

    #[test]
    fn short_form_counts_characters_not_bytes() {
        assert_eq!(Language::German.short_form("März"), "Mär");
        assert_eq!(Language::Spanish.short_form("Sábado"), "Sáb");
        assert_eq!(Language::English.short_form("May"), "May");
    }

    #[test]
    fn scripts_without_short_form_keep_full_name() {
        assert_eq!(Language::Chinese.short_form("星期三"), "星期三");
        assert_eq!(Language::Russian.short_form("Среда"), "Среда");
        assert!(!Language::Hindi.has_short_form());
        assert!(!Language::Arabic.has_short_form());
    }
}
