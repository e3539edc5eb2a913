use aula_core::model::BookRecord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookCardVm {
    pub title: String,
    pub description: String,
    pub pages_label: String,
    pub size_label: String,
    pub url: String,
}

impl From<&BookRecord> for BookCardVm {
    fn from(book: &BookRecord) -> Self {
        Self {
            title: book.title.to_owned(),
            description: book.description.to_owned(),
            pages_label: format!("{} páginas", book.pages),
            size_label: book.size.to_owned(),
            url: book.url.to_owned(),
        }
    }
}

#[must_use]
pub fn map_book_cards(books: &[BookRecord]) -> Vec<BookCardVm> {
    books.iter().map(BookCardVm::from).collect()
}
