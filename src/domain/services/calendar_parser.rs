//! Parser for OCR text of scanned yearly work calendars.
//!
//! The parser is total: malformed lines are skipped, and a document with
//! nothing recognizable yields an empty list for the reviewer.

use crate::domain::entities::{DayEntry, DayKind};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Month headers, matched against the start of the normalized line
const MONTHS: [(&str, u32); 13] = [
    ("enero", 1),
    ("febrero", 2),
    ("marzo", 3),
    ("abril", 4),
    ("mayo", 5),
    ("junio", 6),
    ("julio", 7),
    ("agosto", 8),
    ("septiembre", 9),
    ("setiembre", 9),
    ("octubre", 10),
    ("noviembre", 11),
    ("diciembre", 12),
];

/// Keyword classification, first match wins
const KIND_KEYWORDS: [(&str, DayKind, bool); 5] = [
    ("cierre", DayKind::CierreEmpresa, false),
    ("laborable", DayKind::LaborableExtra, true),
    ("ajuste", DayKind::Convenio, true),
    ("convenio", DayKind::Convenio, true),
    ("festivo", DayKind::FestivoLocal, false),
];

/// Parse a document, inferring the year or falling back to the current one
pub fn parse(raw_text: &str) -> Vec<DayEntry> {
    parse_with_default_year(raw_text, chrono::Local::now().year())
}

/// Parse a document, falling back to `default_year` when the text names none
pub fn parse_with_default_year(raw_text: &str, default_year: i32) -> Vec<DayEntry> {
    let year = infer_year(raw_text).unwrap_or(default_year);
    raw_text
        .lines()
        .fold(ParserState::new(year), ParserState::step)
        .finish()
}

/// First 4-digit number between 2000 and 2099 anywhere in the text
pub fn infer_year(raw_text: &str) -> Option<i32> {
    static YEAR_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = YEAR_REGEX.get_or_init(|| Regex::new(r"\b(20\d{2})\b").expect("Invalid year regex"));

    re.captures(raw_text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Line-by-line scanning state.
///
/// `current_month` stays active from a month header until the next one.
/// Entries are keyed by date so a later line for the same date replaces
/// the earlier one.
#[derive(Debug, Clone)]
pub struct ParserState {
    year: i32,
    current_month: Option<u32>,
    entries: BTreeMap<NaiveDate, DayEntry>,
}

impl ParserState {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            current_month: None,
            entries: BTreeMap::new(),
        }
    }

    pub fn current_month(&self) -> Option<u32> {
        self.current_month
    }

    /// Consume one line
    pub fn step(mut self, line: &str) -> Self {
        let normalized = normalize(line);

        // A header switches month; the same line may still carry a day
        if let Some(month) = month_header(&normalized) {
            self.current_month = Some(month);
        }

        let Some(month) = self.current_month else {
            return self;
        };

        let Some(day) = first_day_number(line) else {
            return self;
        };

        // 31 in a 30-day month, 29 Feb in a common year...
        let Some(date) = NaiveDate::from_ymd_opt(self.year, month, day) else {
            return self;
        };

        let (kind, is_laborable) = classify(&normalized);
        self.entries.insert(
            date,
            DayEntry::new(date, kind, describe(line), is_laborable),
        );
        self
    }

    /// Deduplicated entries, ascending by date
    pub fn finish(self) -> Vec<DayEntry> {
        self.entries.into_values().collect()
    }
}

/// Lower-case, fold accents and drop leading OCR noise (bullets, dashes...)
pub fn normalize(line: &str) -> String {
    line.trim_start_matches(|c: char| !c.is_alphanumeric())
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            other => other,
        })
        .collect()
}

/// Month number when the normalized line starts with a month name
pub fn month_header(normalized: &str) -> Option<u32> {
    MONTHS
        .iter()
        .find(|(name, _)| normalized.starts_with(name))
        .map(|(_, month)| *month)
}

/// First standalone integer of the line that is a valid day of month (1-31).
///
/// Digits glued to ASCII letters or other digits are not standalone, so
/// "2025", "150%" or "ES2" never yield a day.
pub fn first_day_number(line: &str) -> Option<u32> {
    let bytes = line.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }

        let standalone = (start == 0 || !bytes[start - 1].is_ascii_alphanumeric())
            && (i == bytes.len() || !bytes[i].is_ascii_alphanumeric());
        if !standalone {
            continue;
        }

        if let Ok(number) = line[start..i].parse::<u32>() {
            if (1..=31).contains(&number) {
                return Some(number);
            }
        }
    }

    None
}

/// Kind and laborable flag by keyword search over the normalized line
pub fn classify(normalized: &str) -> (DayKind, bool) {
    KIND_KEYWORDS
        .iter()
        .find(|(keyword, _, _)| normalized.contains(keyword))
        .map(|(_, kind, is_laborable)| (*kind, *is_laborable))
        .unwrap_or((DayKind::Convenio, true))
}

/// Line text without its leading weekday name and day number
pub fn describe(line: &str) -> Option<String> {
    static PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = PREFIX_REGEX.get_or_init(|| {
        Regex::new(
            r"(?i)^[\W_]*(?:(?:lunes|martes|mi[eé]rcoles|jueves|viernes|s[aá]bado|domingo)\b[\s,.:;-]*)?(?:\d{1,2}\b)?[\s,.:;-]*",
        )
        .expect("Invalid weekday prefix regex")
    });

    let trimmed = line.trim();
    let description = re.replace(trimmed, "");
    let description = description.trim();

    if description.is_empty() {
        None
    } else {
        Some(description.to_string())
    }
}
