use crate::sdk::config::BingConfig;
use crate::sdk::routing::error::{BingErrorPayload, RoutingError};
use crate::sdk::routing::query::RouteQuery;
use crate::sdk::routing::service::RouteProvider;
use reqwest::{Client, Url};

pub struct BingRouteProvider {
    client: Client,
    config: BingConfig,
}

impl BingRouteProvider {
    pub fn new(config: BingConfig) -> Result<Self, RoutingError> {
        parse_base_url(&config)?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RoutingError::ClientBuild(e.to_string()))?;

        Ok(Self { client, config })
    }
}

/// Composes the driving-route GET URL with every value URL-encoded.
pub fn build_route_url(config: &BingConfig, query: &RouteQuery) -> Result<Url, RoutingError> {
    let mut url = parse_base_url(config)?;

    {
        let mut pairs = url.query_pairs_mut();
        pairs
            .append_pair("wp.0", query.origin())
            .append_pair("wp.1", query.destination());
        if let Some(avoid) = &config.avoid {
            pairs.append_pair("avoid", avoid);
        }
        pairs
            .append_pair("routeAttributes", "routePath")
            .append_pair("output", "json")
            .append_pair("key", &config.api_key);
    }

    Ok(url)
}

fn parse_base_url(config: &BingConfig) -> Result<Url, RoutingError> {
    Url::parse(&config.base_url).map_err(|e| RoutingError::InvalidBaseUrl {
        url: config.base_url.clone(),
        reason: e.to_string(),
    })
}

impl RouteProvider for BingRouteProvider {
    async fn fetch_route(&self, query: &RouteQuery) -> Result<String, RoutingError> {
        let url = build_route_url(&self.config, query)?;
        log::debug!(
            "[PROVIDER] Requesting route \"{}\" -> \"{}\"",
            query.origin(),
            query.destination()
        );

        let response = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::error!(
                    "Failed to send route request for \"{}\" -> \"{}\": {}",
                    query.origin(),
                    query.destination(),
                    e
                );
                return Err(e.into());
            }
        };

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            if let Ok(payload) = serde_json::from_str::<BingErrorPayload>(&text) {
                log::error!("Route API returned {}: {}", status, payload.message());
                return Err(RoutingError::ApiError {
                    status: status.as_u16(),
                    message: payload.message(),
                });
            }

            log::error!(
                "Route API returned non-success status: {}. Unparseable Body: {}",
                status,
                text
            );
            return Err(RoutingError::RawApiError {
                status: status.as_u16(),
                body: text,
            });
        }

        log::debug!("[PROVIDER] Route response received ({} bytes)", text.len());
        Ok(text)
    }
}
