//! Mock-service tests for the year-partitioned search pipeline.
//!
//! These verify the stopping rules and the dedup invariant by mocking the
//! arXiv query API.

use paper_trail::client::ArxivClient;
use paper_trail::config::Config;
use paper_trail::search;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(mock_server: &MockServer) -> ArxivClient {
    ArxivClient::new(&Config::for_testing(&mock_server.uri())).unwrap()
}

/// The query the pipeline issues for one topic/year window.
fn year_query(topic: &str, year: i32) -> String {
    format!("{topic} AND submittedDate:[{year}0101 TO {year}1231]")
}

/// One Atom entry for a synthetic paper.
fn entry_xml(num: u32, year: i32) -> String {
    format!(
        r#"<entry>
  <id>http://arxiv.org/abs/{year}.{num:05}v1</id>
  <published>{year}-02-01T00:00:00Z</published>
  <title>Paper {num} of {year}</title>
  <summary>Abstract for paper {num}.</summary>
  <author><name>Test Author</name></author>
  <link href="http://arxiv.org/abs/{year}.{num:05}v1" rel="alternate"/>
  <link title="pdf" href="http://arxiv.org/pdf/{year}.{num:05}v1" rel="related"/>
</entry>"#
    )
}

/// A whole Atom feed wrapping the given entries.
fn feed_xml(entries: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title type="html">ArXiv Query</title>
  <id>http://arxiv.org/api/feed</id>
{}
</feed>"#,
        entries.join("\n")
    )
}

fn feed_response(entries: &[String]) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_string(feed_xml(entries))
}

fn empty_feed_response() -> ResponseTemplate {
    feed_response(&[])
}

/// Mount an empty feed for every query not matched by an earlier mock.
async fn mount_catch_all(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(empty_feed_response())
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_dedup_across_years() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", year_query("x", 2019)))
        .respond_with(feed_response(&[entry_xml(1, 2019), entry_xml(2, 2019)]))
        .mount(&mock_server)
        .await;

    // 2020 re-serves paper 1 of 2019 alongside a new one.
    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", year_query("x", 2020)))
        .respond_with(feed_response(&[entry_xml(1, 2019), entry_xml(3, 2020)]))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let outcome = search::search_topic_in_years(&client, "x", 10, 2019..=2020).await;

    assert_eq!(outcome.papers.len(), 3);
    assert_eq!(outcome.papers.len(), outcome.seen_urls.len());

    let mut urls: Vec<_> = outcome.papers.iter().map(|p| p.url.clone()).collect();
    urls.sort();
    urls.dedup();
    assert_eq!(urls.len(), 3);
}

#[tokio::test]
async fn test_global_cap_stops_all_requests() {
    let mock_server = MockServer::start().await;

    // The first year alone saturates the cap: exactly one request, and the
    // second year is never queried.
    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", year_query("x", 2019)))
        .respond_with(feed_response(&[
            entry_xml(1, 2019),
            entry_xml(2, 2019),
            entry_xml(3, 2019),
        ]))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", year_query("x", 2020)))
        .respond_with(feed_response(&[entry_xml(4, 2020)]))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let outcome = search::search_topic_in_years(&client, "x", 2, 2019..=2020).await;

    assert_eq!(outcome.papers.len(), 2);
}

#[tokio::test]
async fn test_empty_year_advances_after_one_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", year_query("x", 2019)))
        .respond_with(empty_feed_response())
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", year_query("x", 2020)))
        .respond_with(feed_response(&[entry_xml(1, 2020)]))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let outcome = search::search_topic_in_years(&client, "x", 10, 2019..=2020).await;

    assert_eq!(outcome.papers.len(), 1);
    assert_eq!(outcome.papers[0].published_year(), 2020);
}

#[tokio::test]
async fn test_no_progress_terminates_year() {
    let mock_server = MockServer::start().await;

    // The service ignores the offset and returns the same page forever.
    // The pipeline must stop after the second (no-progress) batch.
    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", year_query("x", 2019)))
        .respond_with(feed_response(&[entry_xml(1, 2019)]))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let outcome = search::search_topic_in_years(&client, "x", 10, 2019..=2019).await;

    assert_eq!(outcome.papers.len(), 1);
}

#[tokio::test]
async fn test_service_error_abandons_year_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", year_query("x", 2019)))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", year_query("x", 2020)))
        .respond_with(feed_response(&[entry_xml(1, 2020)]))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let outcome = search::search_topic_in_years(&client, "x", 10, 2019..=2020).await;

    assert_eq!(outcome.papers.len(), 1);
    assert_eq!(outcome.papers[0].published_year(), 2020);
}

#[tokio::test]
async fn test_default_window_reaches_current_year() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", year_query("x", 2019)))
        .respond_with(feed_response(&[entry_xml(1, 2019)]))
        .mount(&mock_server)
        .await;

    mount_catch_all(&mock_server).await;

    let client = client_for(&mock_server);
    let outcome = search::search_topic(&client, "x", 10).await;

    assert_eq!(outcome.papers.len(), 1);
    assert_eq!(outcome.papers[0].published_year(), 2019);
}

#[tokio::test]
async fn test_zero_cap_issues_no_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(feed_response(&[entry_xml(1, 2019)]))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let outcome = search::search_topic_in_years(&client, "x", 0, 2019..=2020).await;

    assert!(outcome.papers.is_empty());
    assert!(outcome.seen_urls.is_empty());
}
