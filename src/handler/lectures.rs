use crate::{catalogue::Catalogue, handler::Response, util::text::listing};

// Fixed text, not derived from the catalogue size.
pub const NOT_FOUND: &str = "⚠️ Такой лекции нет. Попробуйте ввести номер от 1 до 8.";

pub fn list(lectures: &Catalogue) -> Response<'_> {
    Response::new_msg(format!(
        "Вот список доступных лекций:\n\n{}\n\nВведите номер лекции для получения ссылки.",
        listing(lectures, "🎓", "Лекция")
    ))
}

pub fn lookup<'a>(lectures: &'a Catalogue, id: &str) -> Response<'a> {
    match lectures.get(id) {
        Some(entry) => Response::new_msg(format!(
            "📖 Лекция {}: {} - {}",
            entry.id, entry.title, entry.url
        )),
        None => Response::new_msg(NOT_FOUND),
    }
}
