use crate::model::level::Level;

/// A downloadable PDF textbook bundled with the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookRecord {
    pub title: &'static str,
    pub url: &'static str,
    pub size: &'static str,
    pub pages: &'static str,
    pub description: &'static str,
}

const A1_BOOKS: &[BookRecord] = &[BookRecord {
    title: "İstanbul A1 Ders Kitabı",
    url: "/A1.pdf",
    size: "~8 MB",
    pages: "104",
    description: "Libro oficial de texto para nivel A1",
}];

const A2_BOOKS: &[BookRecord] = &[BookRecord {
    title: "A2 Türkçe Kitabı",
    url: "/A2.pdf",
    size: "~10 MB",
    pages: "120",
    description: "Libro de texto para nivel A2",
}];

const B1_BOOKS: &[BookRecord] = &[BookRecord {
    title: "B1 Ders Kitabı",
    url: "/B1.pdf",
    size: "~12 MB",
    pages: "150",
    description: "Libro de texto para nivel B1",
}];

const B2_BOOKS: &[BookRecord] = &[BookRecord {
    title: "B2 Ders Kitabı",
    url: "/B2.pdf",
    size: "~14 MB",
    pages: "160",
    description: "Libro de texto para nivel B2",
}];

const C1_BOOKS: &[BookRecord] = &[BookRecord {
    title: "C1 Ders Kitabı",
    url: "/C1.pdf",
    size: "~15 MB",
    pages: "180",
    description: "Libro de texto para nivel C1",
}];

/// Static catalog lookup.
#[must_use]
pub fn books_for_level(level: Level) -> &'static [BookRecord] {
    match level {
        Level::A1 => A1_BOOKS,
        Level::A2 => A2_BOOKS,
        Level::B1 => B1_BOOKS,
        Level::B2 => B2_BOOKS,
        Level::C1 => C1_BOOKS,
    }
}
