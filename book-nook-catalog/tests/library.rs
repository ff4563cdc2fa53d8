use book_nook_catalog::{Book, Library, SearchField};

fn book(title: &str, author: &str, year: i32, genre: &str, read: bool) -> Book {
    Book {
        title: title.to_string(),
        author: author.to_string(),
        year,
        genre: genre.to_string(),
        read,
    }
}

fn sample_library() -> Library {
    let mut lib = Library::new();
    lib.add(book("Dune", "Herbert", 1965, "Sci-Fi", true));
    lib.add(book("Emma", "Austen", 1815, "Romance", false));
    lib.add(book("Dune", "Herbert", 2021, "Sci-Fi", false));
    lib
}

#[test]
fn add_appends_in_order() {
    let mut lib = Library::new();
    for i in 0..5 {
        lib.add(book(&format!("Book {i}"), "Author", 2000 + i, "Genre", false));
    }
    assert_eq!(lib.len(), 5);
    let titles: Vec<_> = lib.books().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["Book 0", "Book 1", "Book 2", "Book 3", "Book 4"]);
}

#[test]
fn remove_takes_first_match_only() {
    let mut lib = sample_library();
    let removed = lib.remove_first("Dune").unwrap();
    assert_eq!(removed.year, 1965);
    assert_eq!(lib.len(), 2);
    // The later duplicate survives, order of the rest preserved.
    assert_eq!(lib.books()[0].title, "Emma");
    assert_eq!(lib.books()[1].year, 2021);
}

#[test]
fn remove_absent_title_is_a_noop() {
    let mut lib = sample_library();
    let before = lib.clone();
    assert!(lib.remove_first("Moby-Dick").is_none());
    assert_eq!(lib, before);
}

#[test]
fn remove_is_exact_match() {
    let mut lib = sample_library();
    assert!(lib.remove_first("dune").is_none());
    assert!(lib.remove_first("Dun").is_none());
    assert_eq!(lib.len(), 3);
}

#[test]
fn search_empty_query_matches_everything() {
    let lib = sample_library();
    let results: Vec<_> = lib.search(SearchField::Title, "").collect();
    assert_eq!(results.len(), lib.len());
    let all: Vec<_> = lib.books().iter().collect();
    assert_eq!(results, all);
}

#[test]
fn search_is_case_insensitive_substring() {
    let lib = sample_library();
    let by_author: Vec<_> = lib.search(SearchField::Author, "herb").collect();
    assert_eq!(by_author.len(), 2);
    assert!(by_author.iter().all(|b| b.author == "Herbert"));

    let by_title: Vec<_> = lib.search(SearchField::Title, "EMMA").collect();
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].author, "Austen");
}

#[test]
fn search_no_match_yields_empty() {
    let lib = sample_library();
    assert_eq!(lib.search(SearchField::Title, "Ulysses").count(), 0);
}

#[test]
fn search_does_not_mutate() {
    let lib = sample_library();
    let before = lib.clone();
    let _ = lib.search(SearchField::Author, "austen").count();
    assert_eq!(lib, before);
}

#[test]
fn summary_of_empty_library() {
    let lib = Library::new();
    let s = lib.summary();
    assert_eq!(s.total, 0);
    assert_eq!(s.read_count, 0);
    assert_eq!(s.percent_read, 0.0);
}

#[test]
fn summary_one_read_book_is_100_percent() {
    let mut lib = Library::new();
    lib.add(book("Dune", "Herbert", 1965, "Sci-Fi", true));
    let s = lib.summary();
    assert_eq!(s.total, 1);
    assert_eq!(s.read_count, 1);
    assert_eq!(s.percent_read, 100.0);
}

#[test]
fn summary_counts_read_books() {
    let s = sample_library().summary();
    assert_eq!(s.total, 3);
    assert_eq!(s.read_count, 1);
    assert!((s.percent_read - 100.0 / 3.0).abs() < 1e-9);
}
