use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchBooksCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, json_to_server_error, method_not_allowed, path_to_server_error,
                              query_to_server_error, route_not_found, ServerError};

pub(crate) fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/books", get(list_books).post(add_book).fallback(method_not_allowed))
        .route("/books/search", get(search_books).fallback(method_not_allowed))
        .route("/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book).fallback(method_not_allowed))
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// A `null` body is an absent book rather than a malformed one.
fn parse_book(body: &Bytes) -> Result<BookDto, ServerError> {
    let book: Option<BookDto> = serde_json::from_slice(body).map_err(json_to_server_error)?;
    book.ok_or_else(|| ServerError::from(CommandError::invalid_input("book is required")))
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<(StatusCode, Json<ListBooksCommandResponse>), ServerError> {
    let res = ListBooksCommand::new(state.catalog).execute(ListBooksCommandRequest::default()).await?;
    // Non-standard: a non-empty listing answers 201 Created, an empty one 200 OK.
    let status = if res.books.is_empty() { StatusCode::OK } else { StatusCode::CREATED };
    Ok((status, Json(res)))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    body: Bytes) -> Result<(StatusCode, Json<AddBookCommandResponse>), ServerError> {
    let req = AddBookCommandRequest { book: parse_book(&body)? };
    let res = AddBookCommand::new(state.catalog).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub(crate) async fn search_books(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>) -> Result<Json<SearchBooksCommandResponse>, ServerError> {
    let Query(pairs) = query.map_err(query_to_server_error)?;
    let req = SearchBooksCommandRequest::from_pairs(pairs);
    let res = SearchBooksCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    book_id: Result<Path<String>, PathRejection>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let Path(book_id) = book_id.map_err(path_to_server_error)?;
    let req = GetBookCommandRequest { book_id };
    let res = GetBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    book_id: Result<Path<String>, PathRejection>,
    body: Bytes) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let Path(book_id) = book_id.map_err(path_to_server_error)?;
    let req = UpdateBookCommandRequest { book_id, book: parse_book(&body)? };
    let res = UpdateBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    book_id: Result<Path<String>, PathRejection>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let Path(book_id) = book_id.map_err(path_to_server_error)?;
    let req = RemoveBookCommandRequest { book_id };
    let res = RemoveBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use crate::catalog::controller::build_router;
    use crate::catalog::factory;
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;

    fn build_app() -> Router {
        let catalog = factory::create_catalog_service(&Configuration::new("test"));
        build_router(AppState::new(catalog))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(json) => builder.header("content-type", "application/json").body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }.expect("should build request");
        let res = app.clone().oneshot(req).await.expect("should handle request");
        let status = res.status();
        let bytes = hyper::body::to_bytes(res.into_body()).await.expect("should read body");
        let json = serde_json::from_slice(&bytes).expect("body should be json");
        (status, json)
    }

    #[tokio::test]
    async fn test_should_list_empty_catalog() {
        let app = build_app();
        let (status, body) = send(&app, Method::GET, "/books", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!([]), body);
    }

    #[tokio::test]
    async fn test_should_create_get_delete_book() {
        let app = build_app();
        let (status, created) = send(&app, Method::POST, "/books", Some(r#"{"title":"Dune","author":"Herbert"}"#)).await;
        assert_eq!(StatusCode::CREATED, status);
        let id = created["id"].as_str().expect("should have id").to_string();
        assert!(!id.is_empty());

        let uri = format!("/books/{}", id);
        let (status, loaded) = send(&app, Method::GET, uri.as_str(), None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!("Dune", loaded["title"]);
        assert_eq!("Herbert", loaded["author"]);

        let (status, deleted) = send(&app, Method::DELETE, uri.as_str(), None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!("Book deleted successfully", deleted["message"]);

        let (status, missing) = send(&app, Method::GET, uri.as_str(), None).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert!(missing["error"].is_string());

        let (status, _) = send(&app, Method::DELETE, uri.as_str(), None).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
    }

    #[tokio::test]
    async fn test_should_list_non_empty_catalog_as_created() {
        let app = build_app();
        let _ = send(&app, Method::POST, "/books", Some(r#"{"title":"Dune","author":"Herbert"}"#)).await;
        let (status, body) = send(&app, Method::GET, "/books", None).await;
        assert_eq!(StatusCode::CREATED, status);
        assert_eq!(1, body.as_array().expect("should be a list").len());
    }

    #[tokio::test]
    async fn test_should_reject_invalid_books() {
        let app = build_app();
        for payload in [r#"{"title":"","author":"Herbert"}"#, r#"{"title":"Dune"}"#, "null", "{not json"] {
            let (status, body) = send(&app, Method::POST, "/books", Some(payload)).await;
            assert_eq!(StatusCode::BAD_REQUEST, status, "payload {}", payload);
            assert!(body["error"].is_string());
        }
        let (status, body) = send(&app, Method::GET, "/books", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!([]), body);
    }

    #[tokio::test]
    async fn test_should_update_book() {
        let app = build_app();
        let (_, created) = send(&app, Method::POST, "/books", Some(r#"{"title":"Dune","author":"Herbert","isbn":"123"}"#)).await;
        let id = created["id"].as_str().expect("should have id").to_string();
        let uri = format!("/books/{}", id);

        let payload = r#"{"id":"999","title":"Dune Messiah","author":"Frank Herbert","publishedYear":1969}"#;
        let (status, updated) = send(&app, Method::PUT, uri.as_str(), Some(payload)).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(id.as_str(), updated["id"]);
        assert_eq!(1969, updated["publishedYear"]);
        assert_eq!("", updated["isbn"]);

        let (status, loaded) = send(&app, Method::GET, uri.as_str(), None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!("Dune Messiah", loaded["title"]);

        let (status, _) = send(&app, Method::PUT, "/books/999", Some(payload)).await;
        assert_eq!(StatusCode::NOT_FOUND, status);

        let (status, _) = send(&app, Method::PUT, uri.as_str(), Some(r#"{"title":"Dune","author":" "}"#)).await;
        assert_eq!(StatusCode::BAD_REQUEST, status);
    }

    #[tokio::test]
    async fn test_should_search_books() {
        let app = build_app();
        let _ = send(&app, Method::POST, "/books", Some(r#"{"title":"The Go Programming Language","author":"Alan Donovan"}"#)).await;
        let _ = send(&app, Method::POST, "/books", Some(r#"{"title":"Dune","author":"Frank Herbert"}"#)).await;

        let (status, body) = send(&app, Method::GET, "/books/search?title=go", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(1, body.as_array().expect("should be a list").len());

        let (status, body) = send(&app, Method::GET, "/books/search?author=herbert&title=go", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!("Dune", body[0]["title"]);

        let (status, body) = send(&app, Method::GET, "/books/search?author=Tolkien", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!([]), body);

        let (status, body) = send(&app, Method::GET, "/books/search", None).await;
        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert_eq!("no search query", body["error"]);

        let (status, _) = send(&app, Method::GET, "/books/search?author=%20", None).await;
        assert_eq!(StatusCode::BAD_REQUEST, status);
    }

    #[tokio::test]
    async fn test_should_answer_unknown_routes_with_json() {
        let app = build_app();
        let (status, body) = send(&app, Method::GET, "/authors", None).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_should_search_with_repeated_query_keys() {
        let app = build_app();
        let _ = send(&app, Method::POST, "/books", Some(r#"{"title":"Dune","author":"Frank Herbert"}"#)).await;
        let (status, body) = send(&app, Method::GET, "/books/search?author=herbert&author=tolkien", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!("Dune", body[0]["title"]);
    }

    #[tokio::test]
    async fn test_should_answer_invalid_path_with_json() {
        let app = build_app();
        for method in [Method::GET, Method::PUT, Method::DELETE] {
            let (status, body) = send(&app, method.clone(), "/books/%FF", Some(r#"{"title":"Dune","author":"Herbert"}"#)).await;
            assert_eq!(StatusCode::BAD_REQUEST, status, "method {}", method);
            assert!(body["error"].is_string());
        }
    }

    #[tokio::test]
    async fn test_should_answer_wrong_method_with_json() {
        let app = build_app();
        let (status, body) = send(&app, Method::POST, "/books/1", Some(r#"{"title":"Dune","author":"Herbert"}"#)).await;
        assert_eq!(StatusCode::METHOD_NOT_ALLOWED, status);
        assert!(body["error"].is_string());

        let (status, body) = send(&app, Method::DELETE, "/books", None).await;
        assert_eq!(StatusCode::METHOD_NOT_ALLOWED, status);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_should_accept_wide_or_null_published_year() {
        let app = build_app();
        let (status, created) = send(&app, Method::POST, "/books",
                                     Some(r#"{"title":"A","author":"B","publishedYear":3000000000}"#)).await;
        assert_eq!(StatusCode::CREATED, status);
        assert_eq!(3000000000i64, created["publishedYear"]);

        let (status, created) = send(&app, Method::POST, "/books",
                                     Some(r#"{"title":"A","author":"B","publishedYear":null}"#)).await;
        assert_eq!(StatusCode::CREATED, status);
        assert_eq!(0, created["publishedYear"]);
    }
}
