/// Client for the remote book search endpoint.
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::models::item::Item;
use crate::search::google_books::VolumesResponse;
use crate::search::SearchPlan;
use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use leptos::logging::log;

#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpReply {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One HTTP GET. Implemented over `fetch` in the browser and by fakes in tests.
pub trait HttpTransport {
    fn get<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, Result<HttpReply, SearchError>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl HttpTransport for FetchTransport {
    fn get<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, Result<HttpReply, SearchError>> {
        Box::pin(async move {
            let response = Request::get(url)
                .send()
                .await
                .map_err(|e| SearchError::Transport(e.to_string()))?;
            let status = response.status();
            let status_text = response.status_text();
            let body = response
                .text()
                .await
                .map_err(|e| SearchError::Transport(e.to_string()))?;
            Ok(HttpReply {
                status,
                status_text,
                body,
            })
        })
    }
}

#[derive(Debug, Clone)]
pub struct BookSearchClient<T> {
    transport: T,
    config: SearchConfig,
}

impl<T: HttpTransport> BookSearchClient<T> {
    pub fn new(transport: T, config: SearchConfig) -> Self {
        Self { transport, config }
    }

    pub async fn search(&self, plan: &SearchPlan) -> Result<Vec<Item>, SearchError> {
        let url = plan.url(&self.config);
        log!("[SEARCH] Fetching URL: {}", url);

        let reply = self.transport.get(&url).await?;
        if !reply.ok() {
            return Err(SearchError::Status {
                status: reply.status,
                status_text: reply.status_text,
            });
        }
        let response: VolumesResponse = serde_json::from_str(&reply.body)?;
        let items = response.into_items(self.config.popular_ratings_threshold);
        log!("[SEARCH] {} result(s)", items.len());
        Ok(items)
    }
}

impl BookSearchClient<FetchTransport> {
    pub fn browser(config: SearchConfig) -> Self {
        Self::new(FetchTransport, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::search_box::{ActiveFilters, FilterKey};
    use std::cell::RefCell;

    struct FakeTransport {
        reply: Result<HttpReply, SearchError>,
        seen: RefCell<Vec<String>>,
    }

    impl FakeTransport {
        fn answering(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(HttpReply {
                    status,
                    status_text: if status == 200 { "OK".into() } else { "Service Unavailable".into() },
                    body: body.to_string(),
                }),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn failing(err: SearchError) -> Self {
            Self {
                reply: Err(err),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl HttpTransport for FakeTransport {
        fn get<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, Result<HttpReply, SearchError>> {
            self.seen.borrow_mut().push(url.to_string());
            let reply = self.reply.clone();
            Box::pin(async move { reply })
        }
    }

    fn tolkien() -> SearchPlan {
        let mut filters = ActiveFilters::default();
        filters.set(FilterKey::Autor, "Tolkien".into());
        SearchPlan::build("", &filters).unwrap()
    }

    #[tokio::test]
    async fn maps_successful_response() {
        let client = BookSearchClient::new(
            FakeTransport::answering(200, r#"{ "items": [{ "id": "v1", "volumeInfo": { "title": "O Hobbit" } }] }"#),
            SearchConfig::default(),
        );
        let items = client.search(&tolkien()).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "O Hobbit");
        assert!(client.transport.seen.borrow()[0].contains("q=inauthor%3A%22Tolkien%22"));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let client = BookSearchClient::new(FakeTransport::answering(503, ""), SearchConfig::default());
        assert_eq!(
            client.search(&tolkien()).await,
            Err(SearchError::Status {
                status: 503,
                status_text: "Service Unavailable".into()
            })
        );
    }

    #[tokio::test]
    async fn transport_and_decode_errors_propagate() {
        let client = BookSearchClient::new(
            FakeTransport::failing(SearchError::Transport("offline".into())),
            SearchConfig::default(),
        );
        assert_eq!(
            client.search(&tolkien()).await,
            Err(SearchError::Transport("offline".into()))
        );

        let client = BookSearchClient::new(FakeTransport::answering(200, "<html>"), SearchConfig::default());
        assert!(matches!(client.search(&tolkien()).await, Err(SearchError::Decode(_))));
    }
}
