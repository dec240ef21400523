mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use book_catalog::domain::repositories::BookRepository;
use book_catalog::state::AppState;
use book_catalog::web;
use chrono::{Datelike, Local};

fn make_server(state: AppState) -> TestServer {
    let app = web::routes::routes().with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_list_page_shows_books() {
    let (state, repo) = common::create_test_state();
    common::create_test_book(&repo, "1111111111111", "Dune Messiah").await;
    common::create_test_book(&repo, "2222222222222", "Children of Dune").await;

    let server = make_server(state);
    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Dune Messiah"));
    assert!(html.contains("Children of Dune"));
    assert!(html.contains("<form method=\"post\" action=\"/books\">"));
}

#[tokio::test]
async fn test_list_page_empty() {
    let (state, _repo) = common::create_test_state();
    let server = make_server(state);

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("No books yet"));
}

#[tokio::test]
async fn test_create_book_success() {
    let (state, repo) = common::create_test_state();
    let server = make_server(state);

    let response = server.post("/books").form(&common::valid_form()).await;

    response.assert_status(StatusCode::CREATED);
    assert!(response.text().contains("Book created successfully. ID: 1"));

    let books = repo.list_all().await.unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].isbn, common::VALID_ISBN);
}

#[tokio::test]
async fn test_created_book_appears_in_listing() {
    let (state, _repo) = common::create_test_state();
    let server = make_server(state);

    server
        .post("/books")
        .form(&common::form_with(&[("title", "Hyperion"), ("author", "Dan Simmons")]))
        .await
        .assert_status(StatusCode::CREATED);

    let html = server.get("/").await.text();
    assert!(html.contains("Hyperion"));
    assert!(html.contains("Dan Simmons"));
    assert!(html.contains(common::VALID_ISBN));
}

#[tokio::test]
async fn test_missing_field() {
    let (state, repo) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/books")
        .form(&common::form_without("author"))
        .await;

    response.assert_status_bad_request();
    assert!(response.text().contains("Missing required data."));
    assert_eq!(repo.list_all().await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_post_without_body_renders_missing_data() {
    let (state, repo) = common::create_test_state();
    let server = make_server(state);

    let response = server.post("/books").await;

    response.assert_status_bad_request();
    assert!(response.text().contains("Missing required data."));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_current_year_is_accepted() {
    let (state, _repo) = common::create_test_state();
    let server = make_server(state);
    let year = Local::now().year().to_string();

    let response = server
        .post("/books")
        .form(&common::form_with(&[("publication_year", year.as_str())]))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert!(response.text().contains("Book created successfully. ID: 1"));
}

#[tokio::test]
async fn test_non_integer_field() {
    let (state, _repo) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/books")
        .form(&common::form_with(&[("publication_year", "nineteen")]))
        .await;

    response.assert_status_bad_request();
    let html = response.text();
    assert!(html.contains("Error: parameter"));
    assert!(html.contains("must be an integer"));
}

#[tokio::test]
async fn test_copies_and_pages_invalid() {
    let (state, repo) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/books")
        .form(&common::form_with(&[
            ("isbn", "1234567890123"),
            ("publication_year", "2020"),
            ("page_count", "0"),
            ("available_copies", "0"),
        ]))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let html = response.text();
    assert!(html.contains("Error saving the book. Invalid data:"));
    assert!(html.contains("copies must be a whole number greater than 0."));
    assert!(html.contains("page count must be a whole number greater than 0."));
    assert!(!html.contains("ISBN must have 13 digits."));
    assert!(!html.contains("publication year must be"));
    assert_eq!(repo.list_all().await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_resubmitting_invalid_form_never_persists() {
    let (state, repo) = common::create_test_state();
    let server = make_server(state);
    let form = common::form_with(&[("isbn", "123456789012")]);

    let first = server.post("/books").form(&form).await;
    let second = server.post("/books").form(&form).await;

    first.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    second.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(first.text(), second.text());
    assert_eq!(repo.list_all().await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_duplicate_isbn_is_a_save_error() {
    let (state, repo) = common::create_test_state();
    common::create_test_book(&repo, common::VALID_ISBN, "Dune").await;
    let server = make_server(state);

    let response = server.post("/books").form(&common::valid_form()).await;

    response.assert_status(StatusCode::CONFLICT);
    assert!(response.text().contains("Error saving the book."));
}

#[tokio::test]
async fn test_storage_error() {
    let server = make_server(common::create_failing_state());

    let response = server.post("/books").form(&common::valid_form()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().contains("Error: Database error"));
}
