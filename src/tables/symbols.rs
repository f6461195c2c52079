//! Symbol-to-word tables.
//!
//! Keys are matched after NFKC normalization, so compatibility forms such as
//! fullwidth `＆` already arrive as their ASCII counterparts.

pub(super) const BASIC: &[(&str, &str)] = &[
    ("&", "and"),
    ("@", "at"),
    ("%", "percent"),
    ("+", "plus"),
    ("=", "equals"),
    ("$", "dollar"),
    ("€", "euro"),
    ("£", "pound"),
];

pub(super) const EXTENDED_ONLY: &[(&str, &str)] = &[
    ("¥", "yen"),
    ("₹", "rupee"),
    ("₽", "ruble"),
    ("₿", "bitcoin"),
    ("¢", "cent"),
    ("©", "copyright"),
    ("®", "registered"),
    ("°", "degrees"),
    ("±", "plus minus"),
    ("×", "times"),
    ("÷", "divided by"),
    ("≤", "less than or equal"),
    ("≥", "greater than or equal"),
    ("≠", "not equal"),
    ("≈", "approximately"),
    ("<", "less than"),
    (">", "greater than"),
    ("∞", "infinity"),
    ("√", "square root"),
    ("∑", "sum"),
    ("→", "to"),
    ("#", "hash"),
    ("*", "star"),
    ("~", "tilde"),
    ("§", "section"),
    ("¶", "paragraph"),
    ("‰", "per mille"),
];
