use crate::catalogue::Catalogue;

pub const COURSE_TITLE: &str = "Технология разработки программного обеспечения";
pub const INSTITUTE: &str = "Института 'Высшая ИТ-школа' Костромского Государственного Университета";

/// `true` for one or more ASCII digits and nothing else.
pub fn is_number(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Renders one line per entry, in declaration order.
///
/// `label` is placed between the emoji and the id, e.g. `🎓 Лекция 1: title - url`.
pub fn listing(catalogue: &Catalogue, emoji: &str, label: &str) -> String {
    catalogue
        .iter()
        .map(|entry| format!("{emoji} {label} {}: {} - {}", entry.id, entry.title, entry.url))
        .collect::<Vec<_>>()
        .join("\n")
}
