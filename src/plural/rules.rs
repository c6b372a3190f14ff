//! Per-locale cardinality rules
//!
//! A rule maps a count to the index of the plural form to use. Rules are
//! registered per language code; a locale such as `ru_RU` or `pt-PT` is
//! matched exactly first, then by its language part.

use std::collections::HashMap;
use std::fmt;

/// Cardinality classification for one locale family
#[derive(Clone, Copy)]
pub struct PluralRule {
    forms: usize,
    index: fn(i64) -> usize,
}

impl PluralRule {
    /// Create a rule producing indexes in `0..forms`
    pub const fn new(forms: usize, index: fn(i64) -> usize) -> Self {
        Self { forms, index }
    }

    /// Number of plural categories the rule distinguishes
    pub fn forms(&self) -> usize {
        self.forms
    }

    /// Plural form index for `number`, never past the last category
    pub fn index(&self, number: i64) -> usize {
        (self.index)(number).min(self.forms.saturating_sub(1))
    }
}

impl fmt::Debug for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluralRule").field("forms", &self.forms).finish_non_exhaustive()
    }
}

/// English: `one`, `other`
pub const ENGLISH: PluralRule = PluralRule::new(2, |n| usize::from(n != 1));

/// Languages without plural inflection
pub const SINGLE: PluralRule = PluralRule::new(1, |_| 0);

/// French-style: zero and one share the singular
pub const FRENCH: PluralRule = PluralRule::new(2, |n| usize::from(!(n == 0 || n == 1)));

/// Russian, Ukrainian, Serbo-Croatian, Belarusian
pub const EAST_SLAVIC: PluralRule = PluralRule::new(3, |n| {
    let n = n.unsigned_abs();
    let (m10, m100) = (n % 10, n % 100);
    if m10 == 1 && m100 != 11 {
        0
    } else if (2..=4).contains(&m10) && !(10..20).contains(&m100) {
        1
    } else {
        2
    }
});

/// Czech, Slovak
pub const WEST_SLAVIC: PluralRule = PluralRule::new(3, |n| match n.unsigned_abs() {
    1 => 0,
    2..=4 => 1,
    _ => 2,
});

/// Irish
pub const IRISH: PluralRule = PluralRule::new(3, |n| match n.unsigned_abs() {
    1 => 0,
    2 => 1,
    _ => 2,
});

/// Lithuanian
pub const LITHUANIAN: PluralRule = PluralRule::new(3, |n| {
    let n = n.unsigned_abs();
    let (m10, m100) = (n % 10, n % 100);
    if m10 == 1 && m100 != 11 {
        0
    } else if m10 >= 2 && !(10..20).contains(&m100) {
        1
    } else {
        2
    }
});

/// Slovenian
pub const SLOVENIAN: PluralRule = PluralRule::new(4, |n| match n.unsigned_abs() % 100 {
    1 => 0,
    2 => 1,
    3 | 4 => 2,
    _ => 3,
});

/// Macedonian
pub const MACEDONIAN: PluralRule = PluralRule::new(2, |n| usize::from(n.unsigned_abs() % 10 != 1));

/// Maltese
pub const MALTESE: PluralRule = PluralRule::new(4, |n| {
    let n = n.unsigned_abs();
    let m100 = n % 100;
    if n == 1 {
        0
    } else if n == 0 || (2..=10).contains(&m100) {
        1
    } else if (11..=19).contains(&m100) {
        2
    } else {
        3
    }
});

/// Latvian
pub const LATVIAN: PluralRule = PluralRule::new(3, |n| {
    let n = n.unsigned_abs();
    if n == 0 {
        0
    } else if n % 10 == 1 && n % 100 != 11 {
        1
    } else {
        2
    }
});

/// Polish
pub const POLISH: PluralRule = PluralRule::new(3, |n| {
    let n = n.unsigned_abs();
    let (m10, m100) = (n % 10, n % 100);
    if n == 1 {
        0
    } else if (2..=4).contains(&m10) && !(12..=14).contains(&m100) {
        1
    } else {
        2
    }
});

/// Welsh
pub const WELSH: PluralRule = PluralRule::new(4, |n| match n.unsigned_abs() {
    1 => 0,
    2 => 1,
    8 | 11 => 2,
    _ => 3,
});

/// Romanian
pub const ROMANIAN: PluralRule = PluralRule::new(3, |n| {
    let n = n.unsigned_abs();
    if n == 1 {
        0
    } else if n == 0 || (1..20).contains(&(n % 100)) {
        1
    } else {
        2
    }
});

/// Arabic: zero, one, two, few, many, other
pub const ARABIC: PluralRule = PluralRule::new(6, |n| {
    let n = n.unsigned_abs();
    let m100 = n % 100;
    match n {
        0 => 0,
        1 => 1,
        2 => 2,
        _ if (3..=10).contains(&m100) => 3,
        _ if (11..=99).contains(&m100) => 4,
        _ => 5,
    }
});

const FAMILIES: &[(PluralRule, &[&str])] = &[
    (
        SINGLE,
        &["az", "bo", "dz", "id", "ja", "jv", "ka", "km", "kn", "ko", "ms", "th", "tr", "vi", "zh"],
    ),
    (
        ENGLISH,
        &[
            "af", "bg", "bn", "ca", "da", "de", "el", "en", "eo", "es", "et", "eu", "fa", "fi",
            "fo", "fur", "fy", "gl", "gu", "ha", "he", "hu", "is", "it", "ku", "lb", "ml", "mn",
            "mr", "nah", "nb", "ne", "nl", "nn", "no", "om", "or", "pa", "pap", "ps", "pt", "so",
            "sq", "sv", "sw", "ta", "te", "tk", "ur", "zu",
        ],
    ),
    (
        FRENCH,
        &["am", "bh", "fil", "fr", "gun", "hi", "hy", "ln", "mg", "nso", "ti", "wa", "pt_BR"],
    ),
    (EAST_SLAVIC, &["be", "bs", "hr", "ru", "sh", "sr", "uk"]),
    (WEST_SLAVIC, &["cs", "sk"]),
    (IRISH, &["ga"]),
    (LITHUANIAN, &["lt"]),
    (SLOVENIAN, &["sl"]),
    (MACEDONIAN, &["mk"]),
    (MALTESE, &["mt"]),
    (LATVIAN, &["lv"]),
    (POLISH, &["pl"]),
    (WELSH, &["cy"]),
    (ROMANIAN, &["ro"]),
    (ARABIC, &["ar"]),
];

/// Rule table keyed by locale or language code
#[derive(Debug, Clone)]
pub struct PluralRules {
    rules: HashMap<String, PluralRule>,
    default: PluralRule,
}

impl Default for PluralRules {
    fn default() -> Self {
        let rules = FAMILIES
            .iter()
            .flat_map(|(rule, locales)| {
                locales.iter().map(move |locale| (locale.to_string(), *rule))
            })
            .collect();

        Self {
            rules,
            default: ENGLISH,
        }
    }
}

impl PluralRules {
    /// Built-in rule table
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with no locale rules; every locale uses `default`
    pub fn empty(default: PluralRule) -> Self {
        Self {
            rules: HashMap::new(),
            default,
        }
    }

    /// Add or replace the rule for a locale or language code
    pub fn register(&mut self, locale: &str, rule: PluralRule) -> &mut Self {
        self.rules.insert(normalize(locale), rule);
        self
    }

    /// Rule used for unregistered locales
    pub fn set_default(&mut self, rule: PluralRule) {
        self.default = rule;
    }

    /// Rule applying to `locale`
    pub fn rule_for(&self, locale: &str) -> PluralRule {
        let normalized = normalize(locale);
        if let Some(rule) = self.rules.get(&normalized) {
            return *rule;
        }

        let language = normalized.split('_').next().unwrap_or_default();
        self.rules.get(language).copied().unwrap_or(self.default)
    }

    /// Plural form index for `number` in `locale`
    pub fn index(&self, locale: &str, number: i64) -> usize {
        self.rule_for(locale).index(number)
    }
}

/// `pt-BR` and `pt_BR` share a key; the region keeps its case
fn normalize(locale: &str) -> String {
    let mut parts = locale.splitn(2, ['-', '_']);
    let language = parts.next().unwrap_or_default().to_lowercase();
    match parts.next() {
        Some(region) => format!("{}_{}", language, region),
        None => language,
    }
}
