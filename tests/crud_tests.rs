mod common;

use axum::http::StatusCode;
use sea_orm::{EntityTrait, PaginatorTrait};
use uuid::Uuid;

use quotes_backend::entities::{author, quote, quote_tag, tag};
use quotes_backend::models::quote_model::{
    CreateAuthorRequest, CreateQuoteRequest, CreateTagRequest,
};
use quotes_backend::services::quote_service::QuoteService;

fn author_req(name: &str) -> CreateAuthorRequest {
    CreateAuthorRequest {
        name: name.to_string(),
    }
}

fn tag_req(name: &str) -> CreateTagRequest {
    CreateTagRequest {
        name: name.to_string(),
    }
}

fn quote_req(text: &str, author: Option<Uuid>, tags: Vec<Uuid>) -> CreateQuoteRequest {
    CreateQuoteRequest {
        text: text.to_string(),
        author,
        tags,
    }
}

#[tokio::test]
async fn duplicate_tag_name_is_rejected() {
    let db = common::setup_db().await;

    QuoteService::create_tag(&db, tag_req("wisdom")).await.unwrap();

    let (status, code, _) = QuoteService::create_tag(&db, tag_req("wisdom"))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(code, "TAG_EXISTS");

    assert_eq!(tag::Entity::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn duplicate_author_name_is_rejected() {
    let db = common::setup_db().await;

    QuoteService::create_author(&db, author_req("Mark Twain"))
        .await
        .unwrap();

    let (status, code, _) = QuoteService::create_author(&db, author_req("Mark Twain"))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(code, "AUTHOR_EXISTS");

    assert_eq!(author::Entity::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn create_quote_attaches_author_and_tags() {
    let db = common::setup_db().await;

    let twain = QuoteService::create_author(&db, author_req("Mark Twain"))
        .await
        .unwrap();
    let wisdom = QuoteService::create_tag(&db, tag_req("wisdom")).await.unwrap();
    let life = QuoteService::create_tag(&db, tag_req("life")).await.unwrap();

    let created = QuoteService::create_quote(
        &db,
        quote_req(
            "Adventure is worthwhile.",
            Some(twain.id),
            vec![wisdom.id, life.id],
        ),
    )
    .await
    .unwrap();

    assert_eq!(created.text, "Adventure is worthwhile.");
    assert_eq!(created.author.name, "Mark Twain");
    let mut names: Vec<String> = created.tags.into_iter().map(|t| t.name).collect();
    names.sort();
    assert_eq!(names, vec!["life", "wisdom"]);
}

#[tokio::test]
async fn create_quote_without_author_is_rejected() {
    let db = common::setup_db().await;

    let (status, code, _) =
        QuoteService::create_quote(&db, quote_req("Adventure is worthwhile.", None, vec![]))
            .await
            .unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(code, "AUTHOR_REQUIRED");
    assert_eq!(quote::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn create_quote_with_unknown_author_is_rejected() {
    let db = common::setup_db().await;

    let (status, code, _) = QuoteService::create_quote(
        &db,
        quote_req("Adventure is worthwhile.", Some(Uuid::now_v7()), vec![]),
    )
    .await
    .unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(code, "AUTHOR_NOT_FOUND");
}

#[tokio::test]
async fn repeated_tag_selection_collapses() {
    let db = common::setup_db().await;

    let twain = QuoteService::create_author(&db, author_req("Mark Twain"))
        .await
        .unwrap();
    let wisdom = QuoteService::create_tag(&db, tag_req("wisdom")).await.unwrap();

    QuoteService::create_quote(
        &db,
        quote_req(
            "Adventure is worthwhile.",
            Some(twain.id),
            vec![wisdom.id, wisdom.id],
        ),
    )
    .await
    .unwrap();

    assert_eq!(quote_tag::Entity::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn deleting_author_cascades_to_its_quotes_only() {
    let db = common::setup_db().await;

    let twain = QuoteService::create_author(&db, author_req("Mark Twain"))
        .await
        .unwrap();
    let wilde = QuoteService::create_author(&db, author_req("Oscar Wilde"))
        .await
        .unwrap();
    let wisdom = QuoteService::create_tag(&db, tag_req("wisdom")).await.unwrap();

    QuoteService::create_quote(
        &db,
        quote_req("Adventure is worthwhile.", Some(twain.id), vec![wisdom.id]),
    )
    .await
    .unwrap();
    QuoteService::create_quote(
        &db,
        quote_req("The secret of getting ahead is getting started.", Some(twain.id), vec![]),
    )
    .await
    .unwrap();
    let kept = QuoteService::create_quote(
        &db,
        quote_req("Be yourself; everyone else is already taken.", Some(wilde.id), vec![wisdom.id]),
    )
    .await
    .unwrap();

    QuoteService::delete_author(&db, twain.id).await.unwrap();

    assert_eq!(author::Entity::find().count(&db).await.unwrap(), 1);
    assert_eq!(quote::Entity::find().count(&db).await.unwrap(), 1);
    // Link rows for the removed quotes go with them; the tag itself stays.
    assert_eq!(quote_tag::Entity::find().count(&db).await.unwrap(), 1);
    assert_eq!(tag::Entity::find().count(&db).await.unwrap(), 1);

    let remaining = QuoteService::get_quote(&db, kept.id).await.unwrap();
    assert_eq!(remaining.author.name, "Oscar Wilde");
}

#[tokio::test]
async fn quotes_filter_by_author_and_tag() {
    let db = common::setup_db().await;

    let twain = QuoteService::create_author(&db, author_req("Mark Twain"))
        .await
        .unwrap();
    let wilde = QuoteService::create_author(&db, author_req("Oscar Wilde"))
        .await
        .unwrap();
    let wisdom = QuoteService::create_tag(&db, tag_req("wisdom")).await.unwrap();
    let humor = QuoteService::create_tag(&db, tag_req("humor")).await.unwrap();

    QuoteService::create_quote(
        &db,
        quote_req("Adventure is worthwhile.", Some(twain.id), vec![wisdom.id]),
    )
    .await
    .unwrap();
    QuoteService::create_quote(
        &db,
        quote_req("Be yourself; everyone else is already taken.", Some(wilde.id), vec![humor.id]),
    )
    .await
    .unwrap();

    let by_author = QuoteService::quotes_by_author(&db, twain.id).await.unwrap();
    assert_eq!(by_author.author.name, "Mark Twain");
    assert_eq!(by_author.quotes.len(), 1);
    assert_eq!(by_author.quotes[0].text, "Adventure is worthwhile.");

    let by_tag = QuoteService::quotes_by_tag(&db, humor.id).await.unwrap();
    assert_eq!(by_tag.tag.name, "humor");
    assert_eq!(by_tag.quotes.len(), 1);
    assert_eq!(by_tag.quotes[0].author.name, "Oscar Wilde");

    let all = QuoteService::list_quotes(&db).await.unwrap();
    assert_eq!(all.total, 2);

    let (status, _, _) = QuoteService::quotes_by_tag(&db, Uuid::now_v7())
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_quote_leaves_author_and_tags() {
    let db = common::setup_db().await;

    let twain = QuoteService::create_author(&db, author_req("Mark Twain"))
        .await
        .unwrap();
    let wisdom = QuoteService::create_tag(&db, tag_req("wisdom")).await.unwrap();
    let created = QuoteService::create_quote(
        &db,
        quote_req("Adventure is worthwhile.", Some(twain.id), vec![wisdom.id]),
    )
    .await
    .unwrap();

    QuoteService::delete_quote(&db, created.id).await.unwrap();

    assert_eq!(quote::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(quote_tag::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(author::Entity::find().count(&db).await.unwrap(), 1);
    assert_eq!(tag::Entity::find().count(&db).await.unwrap(), 1);
}
