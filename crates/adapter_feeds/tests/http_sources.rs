//! HTTP adapter tests against a local one-shot server.
//!
//! # Test Categories
//!
//! 1. **Wire shapes**: each provider's success response
//! 2. **Failure classification**: status, refused connection, malformed body, timeout
//! 3. **Fallback over HTTP**: aggregator skips a failing provider

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use adapter_feeds::sources::{BinanceSource, CoinGeckoSource, JupiterSource, KrakenSource};
use adapter_feeds::{FetchErrorKind, HttpClient, PriceAggregator, PriceSource};
use approx::assert_relative_eq;

const SOL_MINT: &str = "So11111111111111111111111111111111111111112";

/// Canned reply served once.
struct Reply {
    status: &'static str,
    body: String,
    delay: Duration,
}

impl Reply {
    fn ok(body: impl Into<String>) -> Self {
        Self {
            status: "200 OK",
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    fn status(status: &'static str) -> Self {
        Self {
            status,
            body: r#"{"message":"unavailable"}"#.to_string(),
            delay: Duration::ZERO,
        }
    }

    fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Serves one request; returns the base URL and a receiver for the request line.
fn serve_once(reply: Reply) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let request_line = read_request(&stream);
        let _ = tx.send(request_line);

        thread::sleep(reply.delay);
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            reply.status,
            reply.body.len(),
            reply.body
        );
        let mut stream = stream;
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
    });

    (base, rx)
}

fn read_request(stream: &TcpStream) -> String {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    reader.read_line(&mut request_line).unwrap();

    let mut header = String::new();
    while reader.read_line(&mut header).unwrap_or(0) > 0 {
        if header == "\r\n" {
            break;
        }
        header.clear();
    }
    request_line.trim_end().to_string()
}

fn client() -> HttpClient {
    HttpClient::new(Duration::from_secs(5), "solprice-test").unwrap()
}

/// Base URL nobody is listening on.
fn refused_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

// ============================================================================
// Wire Shapes
// ============================================================================

#[test]
fn test_jupiter_success() {
    let (base, requests) = serve_once(Reply::ok(format!(
        r#"{{"data":{{"{}":{{"id":"{}","mintSymbol":"SOL","price":145.23}}}},"timeTaken":0.002}}"#,
        SOL_MINT, SOL_MINT
    )));

    let quote = JupiterSource::new(client(), &base, SOL_MINT).fetch().unwrap();

    assert_relative_eq!(quote.price(), 145.23);
    assert_eq!(quote.source_name(), "Jupiter");
    assert_eq!(
        requests.recv().unwrap(),
        format!("GET /price?ids={} HTTP/1.1", SOL_MINT)
    );
}

#[test]
fn test_kraken_success() {
    let (base, requests) = serve_once(Reply::ok(
        r#"{"error":[],"result":{"SOLUSD":{"a":["145.31","12","12.0"],"b":["145.20","3","3.0"],"c":["145.25000","0.7"]}}}"#,
    ));

    let quote = KrakenSource::new(client(), &base, "SOLUSD").fetch().unwrap();

    assert_relative_eq!(quote.price(), 145.25);
    assert_eq!(quote.source_name(), "Kraken");
    assert_eq!(requests.recv().unwrap(), "GET /Ticker?pair=SOLUSD HTTP/1.1");
}

#[test]
fn test_coingecko_success() {
    let (base, requests) = serve_once(Reply::ok(r#"{"solana":{"usd":146.1}}"#));

    let quote = CoinGeckoSource::new(client(), &base, "solana", "usd")
        .fetch()
        .unwrap();

    assert_relative_eq!(quote.price(), 146.1);
    assert_eq!(
        requests.recv().unwrap(),
        "GET /simple/price?ids=solana&vs_currencies=usd HTTP/1.1"
    );
}

#[test]
fn test_binance_success() {
    let (base, requests) = serve_once(Reply::ok(r#"{"symbol":"SOLUSDT","price":"144.90000000"}"#));

    let quote = BinanceSource::new(client(), &base, "SOLUSDT").fetch().unwrap();

    assert_relative_eq!(quote.price(), 144.9);
    assert_eq!(quote.source_name(), "Binance");
    assert_eq!(requests.recv().unwrap(), "GET /ticker/price?symbol=SOLUSDT HTTP/1.1");
}

// ============================================================================
// Failure Classification
// ============================================================================

#[test]
fn test_server_error_status_is_network_error() {
    let (base, _requests) = serve_once(Reply::status("503 Service Unavailable"));

    let err = BinanceSource::new(client(), &base, "SOLUSDT").fetch().unwrap_err();

    assert_eq!(err.kind(), FetchErrorKind::Network);
    assert_eq!(err.source_name(), "Binance");
    assert!(err.message().contains("503"));
}

#[test]
fn test_client_error_status_is_network_error() {
    let (base, _requests) = serve_once(Reply::status("404 Not Found"));
    let err = CoinGeckoSource::new(client(), &base, "solana", "usd")
        .fetch()
        .unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Network);
}

#[test]
fn test_refused_connection_is_network_error() {
    let err = JupiterSource::new(client(), &refused_base(), SOL_MINT)
        .fetch()
        .unwrap_err();

    assert_eq!(err.kind(), FetchErrorKind::Network);
    assert_eq!(err.source_name(), "Jupiter");
}

#[test]
fn test_non_json_body_is_parse_error() {
    let (base, _requests) = serve_once(Reply::ok("<html>maintenance</html>"));
    let err = KrakenSource::new(client(), &base, "SOLUSD").fetch().unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Parse);
}

#[test]
fn test_missing_field_is_parse_error() {
    let (base, _requests) = serve_once(Reply::ok(r#"{"symbol":"SOLUSDT"}"#));
    let err = BinanceSource::new(client(), &base, "SOLUSDT").fetch().unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Parse);
}

#[test]
fn test_kraken_error_array_is_parse_error() {
    let (base, _requests) = serve_once(Reply::ok(r#"{"error":["EGeneral:Too many requests"]}"#));
    let err = KrakenSource::new(client(), &base, "SOLUSD").fetch().unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Parse);
}

#[test]
fn test_zero_price_is_parse_error() {
    let (base, _requests) = serve_once(Reply::ok(r#"{"solana":{"usd":0}}"#));
    let err = CoinGeckoSource::new(client(), &base, "solana", "usd")
        .fetch()
        .unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Parse);
}

#[test]
fn test_slow_server_is_timeout_error() {
    let (base, _requests) = serve_once(
        Reply::ok(r#"{"solana":{"usd":146.1}}"#).delayed(Duration::from_secs(3)),
    );
    let client = HttpClient::new(Duration::from_millis(300), "solprice-test").unwrap();

    let err = CoinGeckoSource::new(client, &base, "solana", "usd")
        .fetch()
        .unwrap_err();

    assert_eq!(err.kind(), FetchErrorKind::Timeout);
    assert_eq!(err.source_name(), "CoinGecko");
}

// ============================================================================
// Fallback Over HTTP
// ============================================================================

#[test]
fn test_aggregator_falls_back_past_failing_provider() {
    let (down, _) = serve_once(Reply::status("500 Internal Server Error"));
    let (up, _) = serve_once(Reply::ok(
        r#"{"error":[],"result":{"SOLUSD":{"c":["145.23","1.0"]}}}"#,
    ));

    let sources: Vec<Box<dyn PriceSource>> = vec![
        Box::new(JupiterSource::new(client(), &down, SOL_MINT)),
        Box::new(KrakenSource::new(client(), &up, "SOLUSD")),
        Box::new(BinanceSource::new(client(), &refused_base(), "SOLUSDT")),
    ];
    let aggregator = PriceAggregator::new(sources);

    let quote = aggregator.fetch_spot_price().unwrap();
    assert_relative_eq!(quote.price(), 145.23);
    assert_eq!(quote.source_name(), "Kraken");
}

#[test]
fn test_aggregator_total_failure_over_http() {
    let (bad_status, _) = serve_once(Reply::status("502 Bad Gateway"));
    let (bad_body, _) = serve_once(Reply::ok("{}"));

    let sources: Vec<Box<dyn PriceSource>> = vec![
        Box::new(JupiterSource::new(client(), &bad_status, SOL_MINT)),
        Box::new(KrakenSource::new(client(), &refused_base(), "SOLUSD")),
        Box::new(CoinGeckoSource::new(client(), &bad_body, "solana", "usd")),
    ];
    let aggregator = PriceAggregator::new(sources);

    let failure = aggregator.fetch_spot_price().unwrap_err();
    let kinds: Vec<_> = failure
        .errors()
        .iter()
        .map(|e| (e.source_name().to_string(), e.kind()))
        .collect();

    assert_eq!(
        kinds,
        vec![
            ("Jupiter".to_string(), FetchErrorKind::Network),
            ("Kraken".to_string(), FetchErrorKind::Network),
            ("CoinGecko".to_string(), FetchErrorKind::Parse),
        ]
    );
}
