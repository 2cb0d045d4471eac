#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header_exists, method, path, query_param},
    };

    use crate::{
        api::{AlphaVantage, QuoteProvider, YahooFinance},
        error::Error,
    };

    const CHART_BODY: &str = r#"{
        "chart": {
            "result": [{
                "meta": {"currency": "USD", "symbol": "AAPL", "regularMarketPrice": 30.25},
                "timestamp": [1735828200],
                "indicators": {"quote": [{"close": [29.9, 30.1, 30.25]}]}
            }],
            "error": null
        }
    }"#;

    const CHART_BODY_NO_META_PRICE: &str = r#"{
        "chart": {
            "result": [{
                "meta": {"currency": "USD", "symbol": "XYZ"},
                "timestamp": [1735828200],
                "indicators": {"quote": [{"close": [29.5, 30.75, null]}]}
            }],
            "error": null
        }
    }"#;

    const CHART_ERROR_BODY: &str = r#"{
        "chart": {
            "result": null,
            "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}
        }
    }"#;

    const GLOBAL_QUOTE_BODY: &str = r#"{
        "Global Quote": {
            "01. symbol": "IBM",
            "02. open": "262.0000",
            "03. high": "265.0900",
            "04. low": "261.4800",
            "05. price": "263.3300",
            "06. volume": "3584211",
            "07. latest trading day": "2025-01-02",
            "08. previous close": "261.7200",
            "09. change": "1.6100",
            "10. change percent": "0.6152%"
        }
    }"#;

    #[tokio::test]
    async fn yahoo_parses_regular_market_price() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/AAPL"))
            .and(query_param("interval", "1d"))
            .and(query_param("range", "1d"))
            .and(header_exists("user-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(CHART_BODY, "application/json"))
            .mount(&server)
            .await;

        let provider = YahooFinance::new().with_base_url(server.uri());
        let price = provider.fetch_last_close("AAPL").await.unwrap();

        assert_eq!(price, dec!(30.25));
    }

    #[tokio::test]
    async fn yahoo_falls_back_to_last_close_entry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/XYZ"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(CHART_BODY_NO_META_PRICE, "application/json"),
            )
            .mount(&server)
            .await;

        let provider = YahooFinance::new().with_base_url(server.uri());
        let price = provider.fetch_last_close("XYZ").await.unwrap();

        assert_eq!(price, dec!(30.75));
    }

    #[tokio::test]
    async fn yahoo_reports_api_error_body_as_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/GONE"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(CHART_ERROR_BODY, "application/json"),
            )
            .mount(&server)
            .await;

        let provider = YahooFinance::new().with_base_url(server.uri());
        let err = provider.fetch_last_close("GONE").await.unwrap_err();

        assert!(matches!(err, Error::QuoteUnavailable { .. }));
        assert!(err.to_string().contains("symbol may be delisted"));
    }

    #[tokio::test]
    async fn yahoo_http_failure_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let provider = YahooFinance::new().with_base_url(server.uri());
        let err = provider.fetch_last_close("AAPL").await.unwrap_err();

        assert!(matches!(err, Error::QuoteUnavailable { .. }));
    }

    #[tokio::test]
    async fn alpha_vantage_parses_global_quote() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("function", "GLOBAL_QUOTE"))
            .and(query_param("symbol", "IBM"))
            .and(query_param("apikey", "demo"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(GLOBAL_QUOTE_BODY, "application/json"),
            )
            .mount(&server)
            .await;

        let provider = AlphaVantage::new(String::from("demo")).with_base_url(server.uri());
        let price = provider.fetch_last_close("IBM").await.unwrap();

        assert_eq!(price, dec!(263.33));
    }

    #[tokio::test]
    async fn alpha_vantage_unknown_symbol_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/query"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(r#"{"Global Quote": {}}"#, "application/json"),
            )
            .mount(&server)
            .await;

        let provider = AlphaVantage::new(String::from("demo")).with_base_url(server.uri());
        let err = provider.fetch_last_close("NOPE").await.unwrap_err();

        assert!(matches!(err, Error::QuoteUnavailable { .. }));
    }
}
