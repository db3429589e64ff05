//! `HttpFetcher` against a local mock server.

mod common;

use std::net::TcpListener;
use std::time::Duration;

use common::{record_page, RECORD_PAGE_URL};
use prospect_links::{Engine, HttpFetcher, LinkKind, Options, Page, PageFetcher, RecordingSink, RetryPolicy};
use url::Url;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fast_options() -> Options {
    Options {
        retry: RetryPolicy {
            max_attempts: 3,
            delay: Duration::from_millis(10),
        },
        ..Options::default()
    }
}

fn fetcher(options: &Options) -> HttpFetcher {
    HttpFetcher::new(options).unwrap()
}

fn mock_url(server: &MockServer, route: &str) -> Url {
    Url::parse(&format!("{}{route}", server.uri())).unwrap()
}

#[tokio::test]
async fn returns_status_content_type_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/acmeco"))
        .and(header_exists("user-agent"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html><body>hello</body></html>", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let page = fetcher(&Options::default())
        .fetch(&mock_url(&server, "/acmeco"))
        .await
        .unwrap();

    assert_eq!(page.status, 200);
    assert!(page.is_success());
    assert_eq!(page.content_type.as_deref(), Some("text/html; charset=utf-8"));
    assert!(page.text().contains("hello"));
}

#[tokio::test]
async fn body_is_decoded_with_the_header_charset() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cafe"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            b"<html><body>Caf\xE9 Acme</body></html>".to_vec(),
            "text/html; charset=windows-1252",
        ))
        .mount(&server)
        .await;

    let page = fetcher(&Options::default()).fetch(&mock_url(&server, "/cafe")).await.unwrap();

    assert_eq!(page.content_type.as_deref(), Some("text/html; charset=windows-1252"));
    assert!(page.text().contains("Café Acme"));
}

#[tokio::test]
async fn error_status_is_a_response_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let page = fetcher(&Options::default()).fetch(&mock_url(&server, "/down")).await.unwrap();

    assert_eq!(page.status, 503);
    assert!(!page.is_success());
}

#[tokio::test]
async fn unreachable_host_is_an_error() {
    // Reserve a free port, then release it so nothing is listening there.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let url = Url::parse(&format!("http://127.0.0.1:{port}/gone")).unwrap();

    let result = fetcher(&Options::default()).fetch(&url).await;

    assert!(matches!(result, Err(prospect_links::Error::Fetch(_))));
}

#[tokio::test]
async fn engine_retries_profile_fetch_until_page_id_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/acmeco"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/acmeco"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(
                    r#"<html><head><meta property="al:android:url" content="fb://page/?id=555"></head></html>"#,
                    "text/html",
                ),
        )
        .expect(1)
        .mount(&server)
        .await;

    let profile = mock_url(&server, "/acmeco");
    let html = record_page(&[
        ("Company", "Company", "<lightning-formatted-text>Acme Co</lightning-formatted-text>"),
        ("Facebook_URL__c", "Facebook URL", &format!(r#"<a href="{profile}">fb</a>"#)),
    ]);
    let page = Page::parse(RECORD_PAGE_URL, &html).unwrap();

    let options = fast_options();
    let engine = Engine::new(options.clone(), fetcher(&options));
    let mut sink = RecordingSink::default();
    let extraction = engine.run(&page, &mut sink).await;

    assert_eq!(
        extraction.link(LinkKind::AdsLibrary).map(Url::as_str),
        Some("https://www.facebook.com/ads/library/?view_all_page_id=555")
    );
    assert_eq!(extraction.link(LinkKind::SocialProfile), Some(&profile));
    server.verify().await;
}

#[tokio::test]
async fn engine_gives_up_after_the_attempt_budget() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/acmeco"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>Log in to continue</body></html>"))
        .expect(3)
        .mount(&server)
        .await;

    let profile = mock_url(&server, "/acmeco");
    let html = record_page(&[("Facebook_URL__c", "Facebook URL", &format!(r#"<a href="{profile}">fb</a>"#))]);
    let page = Page::parse(RECORD_PAGE_URL, &html).unwrap();

    let options = fast_options();
    let engine = Engine::new(options.clone(), fetcher(&options));
    let mut sink = RecordingSink::default();
    let extraction = engine.run(&page, &mut sink).await;

    assert!(extraction.record.ads_library.is_none());
    assert_eq!(sink.sent.len(), 1);
    assert_eq!(sink.sent[0].urls, vec![profile.to_string()]);
    server.verify().await;
}
