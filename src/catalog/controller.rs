use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_by_index_cmd::{GetBookByIndexCommand, GetBookByIndexCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandResponse};
use crate::catalog::command::random_book_cmd::RandomBookCommand;
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, server_error, ServerError};

pub const WELCOME_MESSAGE: &str = "Welcome to my bookstore app!";

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/random-book", get(random_book))
        .route("/list-books", get(list_books))
        .route("/book_by_index/:index", get(book_by_index))
        .route("/add-book", post(add_book))
        .route("/get-book", get(get_book))
        .with_state(state)
}

fn build_service(state: AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(state.book_repository)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct GetBookQuery {
    pub book_id: Option<String>,
}

pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse { message: WELCOME_MESSAGE.to_string() })
}

pub async fn random_book(
    State(state): State<AppState>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let svc = build_service(state);
    let res = RandomBookCommand::new(svc).execute(()).await?;
    Ok(Json(res))
}

pub async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let svc = build_service(state);
    let res = ListBooksCommand::new(svc).execute(()).await?;
    Ok(Json(res))
}

pub async fn book_by_index(
    State(state): State<AppState>,
    Path(index): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookByIndexCommandRequest::parse(index.as_str())?;
    let svc = build_service(state);
    let res = GetBookByIndexCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub async fn add_book(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let Json(json) = payload.map_err(rejection_to_server_error)?;
    let req: AddBookCommandRequest = serde_json::from_value(json).map_err(json_to_server_error)?;
    let svc = build_service(state);
    let res = AddBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

// unparseable bodies and a missing content type are reported like schema mismatches
fn rejection_to_server_error(rejection: JsonRejection) -> ServerError {
    server_error(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text().as_str())
}

pub async fn get_book(
    State(state): State<AppState>,
    Query(query): Query<GetBookQuery>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let book_id = query.book_id
        .ok_or_else(|| server_error(StatusCode::UNPROCESSABLE_ENTITY, "query parameter book_id is required"))?;
    let req = GetBookCommandRequest::new(book_id);
    let svc = build_service(state);
    let res = GetBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use crate::catalog::controller::{build_router, WELCOME_MESSAGE};
    use crate::catalog::factory;
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    async fn new_app(name: &str) -> Router {
        let repo = factory::create_test_repository(name).await;
        let config = Configuration::new(RepositoryStore::JsonFile, "books.json");
        build_router(AppState::new(config, repo))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }.unwrap();
        let res = app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = hyper::body::to_bytes(res.into_body()).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    async fn add(app: &Router, book: Value) -> String {
        let (status, res) = send(app, Method::POST, "/add-book", Some(book)).await;
        assert_eq!(StatusCode::OK, status);
        res["book_id"].as_str().expect("should return book_id").to_string()
    }

    #[tokio::test]
    async fn test_should_welcome() {
        let app = new_app("ctrl-welcome").await;
        let (status, res) = send(&app, Method::GET, "/", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!({"message": WELCOME_MESSAGE}), res);
    }

    #[tokio::test]
    async fn test_should_add_and_list_dune() {
        let app = new_app("ctrl-dune").await;
        let book_id = add(&app, json!({"name": "Dune", "genre": "fiction", "price": 9.99})).await;
        assert!(!book_id.is_empty());

        let (status, res) = send(&app, Method::GET, "/list-books", None).await;
        assert_eq!(StatusCode::OK, status);
        let books = res["books"].as_array().expect("should return books");
        let matching: Vec<_> = books.iter()
            .filter(|b| b["name"] == "Dune" && b["genre"] == "fiction" && b["price"] == 9.99)
            .collect();
        assert_eq!(1, matching.len());
        assert_eq!(book_id.as_str(), matching[0]["book_id"]);
    }

    #[tokio::test]
    async fn test_should_get_added_book() {
        let app = new_app("ctrl-get").await;
        let book_id = add(&app, json!({"name": "Sapiens", "genre": "non-fiction", "price": 15.5, "book_id": "mine"})).await;
        assert_ne!("mine", book_id.as_str());

        let (status, res) = send(&app, Method::GET, format!("/get-book?book_id={}", book_id).as_str(), None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!({"name": "Sapiens", "genre": "non-fiction", "price": 15.5, "book_id": book_id}), res);
    }

    #[tokio::test]
    async fn test_should_grow_list_by_one_per_add() {
        let app = new_app("ctrl-grow").await;
        for i in 0..4 {
            let (_, before) = send(&app, Method::GET, "/list-books", None).await;
            let _ = add(&app, json!({"name": format!("book {}", i), "genre": "fiction", "price": i})).await;
            let (_, after) = send(&app, Method::GET, "/list-books", None).await;
            assert_eq!(before["books"].as_array().unwrap().len() + 1, after["books"].as_array().unwrap().len());
        }
    }

    #[tokio::test]
    async fn test_should_get_book_by_index() {
        let app = new_app("ctrl-index").await;
        let first = add(&app, json!({"name": "Dune", "genre": "fiction", "price": 9.99})).await;
        let second = add(&app, json!({"name": "Emma", "genre": "fiction", "price": 4.0})).await;

        let (status, res) = send(&app, Method::GET, "/book_by_index/0", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(first.as_str(), res["book_id"]);
        let (_, res) = send(&app, Method::GET, "/book_by_index/1", None).await;
        assert_eq!(second.as_str(), res["book_id"]);

        for index in ["2", "100", "-1"] {
            let (status, res) = send(&app, Method::GET, format!("/book_by_index/{}", index).as_str(), None).await;
            assert_eq!(StatusCode::NOT_FOUND, status);
            assert_eq!(format!("Book index {} out of range.", index).as_str(), res["detail"]);
        }

        let (status, _) = send(&app, Method::GET, "/book_by_index/first", None).await;
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status);
    }

    #[tokio::test]
    async fn test_should_not_find_unknown_book() {
        let app = new_app("ctrl-unknown").await;
        let (status, res) = send(&app, Method::GET, "/get-book?book_id=unknown", None).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!("Book ID unknown not found in database.", res["detail"]);

        let (status, _) = send(&app, Method::GET, "/get-book", None).await;
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status);
    }

    #[tokio::test]
    async fn test_should_pick_random_book() {
        let app = new_app("ctrl-random").await;
        let (status, res) = send(&app, Method::GET, "/random-book", None).await;
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
        assert_eq!("No books available.", res["detail"]);

        let book_id = add(&app, json!({"name": "Dune", "genre": "fiction", "price": 9.99})).await;
        let (status, res) = send(&app, Method::GET, "/random-book", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(book_id.as_str(), res["book_id"]);
    }

    #[tokio::test]
    async fn test_should_reject_malformed_books() {
        let app = new_app("ctrl-malformed").await;
        for body in [
            json!({"name": "Dune", "genre": "poetry", "price": 9.99}),
            json!({"name": "Dune", "genre": "fiction"}),
            json!({"name": "Dune", "genre": "fiction", "price": "cheap"}),
            json!({"genre": "fiction", "price": 1.0}),
        ] {
            let (status, res) = send(&app, Method::POST, "/add-book", Some(body)).await;
            assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status);
            assert!(res["detail"].is_string());
        }
        let (_, res) = send(&app, Method::GET, "/list-books", None).await;
        assert!(res["books"].as_array().unwrap().is_empty());
    }

    async fn send_raw(app: &Router, content_type: Option<&str>, body: &str) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(Method::POST).uri("/add-book");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let res = app.clone().oneshot(builder.body(Body::from(body.to_string())).unwrap()).await.unwrap();
        let status = res.status();
        let bytes = hyper::body::to_bytes(res.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_should_reject_unparseable_body() {
        let app = new_app("ctrl-not-json").await;
        let (status, res) = send_raw(&app, Some("application/json"), "{not json").await;
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status);
        assert!(res["detail"].is_string());

        let (status, res) = send_raw(&app, None, r#"{"name": "Dune", "genre": "fiction", "price": 9.99}"#).await;
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, status);
        assert!(res["detail"].is_string());

        let (_, res) = send(&app, Method::GET, "/list-books", None).await;
        assert!(res["books"].as_array().unwrap().is_empty());
    }
}
