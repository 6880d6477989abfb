use crate::{catalogue::Catalogue, handler::Response, util::text::listing};

pub fn list(labs: &Catalogue) -> Response<'_> {
    Response::new_msg(format!(
        "Вот список лабораторных работ:\n\n{}",
        listing(labs, "🔬", "Лабораторная")
    ))
}
