//! `curl` and `ping` probes.
//!
//! Both run against the [`Network`] trait so the timing and reporting logic
//! is independent of the browser. [`crate::utils::BrowserNetwork`] is the
//! `fetch`-backed implementation.

use crate::config::network::{CURL_BODY_LIMIT, PING_COUNT, PING_INTERVAL_MS};
use crate::core::error::FetchError;
use crate::models::OutputLine;
use crate::utils::{extract_host, format_elapsed_ms, normalize_probe_url};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
        }
    }
}

/// A completed HTTP exchange, whatever its status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub status_text: String,
    pub content_type: Option<String>,
    /// Empty for `HEAD`.
    pub body: String,
}

/// What the probes need from the outside world.
#[allow(async_fn_in_trait)]
pub trait Network {
    async fn request(&self, method: Method, url: &str) -> Result<HttpReply, FetchError>;
    async fn sleep(&self, ms: u32);
    /// Monotonic clock in milliseconds.
    fn now_ms(&self) -> f64;
}

// =============================================================================
// curl
// =============================================================================

/// Fetch `url` and report status, content type, elapsed time and body.
pub async fn curl<N: Network>(net: &N, url: &str) -> Vec<OutputLine> {
    let start = net.now_ms();
    let reply = match net.request(Method::Get, url).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!(url, error = %e, "curl failed");
            return vec![OutputLine::error(format!("curl: {e}"))];
        }
    };
    let elapsed = net.now_ms() - start;

    let status = format!("HTTP {} {}", reply.status, reply.status_text)
        .trim_end()
        .to_string();
    let mut lines = vec![
        if reply.status < 400 {
            OutputLine::success(status)
        } else {
            OutputLine::error(status)
        },
        OutputLine::text(format!(
            "Content-Type: {}",
            reply.content_type.as_deref().unwrap_or("unknown")
        )),
        OutputLine::text(format!("Time: {}", format_elapsed_ms(elapsed))),
        OutputLine::empty(),
    ];
    lines.extend(OutputLine::text_block(&truncate_body(
        &reply.body,
        CURL_BODY_LIMIT,
    )));
    lines
}

/// Cut `body` to `limit` characters, marking the cut.
pub fn truncate_body(body: &str, limit: usize) -> String {
    match body.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}\n... [truncated]", &body[..cut]),
        None => body.to_string(),
    }
}

// =============================================================================
// ping
// =============================================================================

/// Outcome of one ping attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct PingSample {
    pub seq: usize,
    /// Round-trip time in milliseconds.
    pub result: Result<f64, FetchError>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PingReport {
    pub host: String,
    pub url: String,
    pub samples: Vec<PingSample>,
}

impl PingReport {
    fn new(target: &str) -> Self {
        let url = normalize_probe_url(target);
        Self {
            host: extract_host(&url).unwrap_or_else(|| target.to_string()),
            url,
            samples: Vec::with_capacity(PING_COUNT),
        }
    }

    pub fn received(&self) -> usize {
        self.samples.iter().filter(|s| s.result.is_ok()).count()
    }

    /// `(min, avg, max)` over successful samples.
    pub fn stats(&self) -> Option<(f64, f64, f64)> {
        let times: Vec<f64> = self
            .samples
            .iter()
            .filter_map(|s| s.result.as_ref().ok().copied())
            .collect();
        if times.is_empty() {
            return None;
        }
        let min = times.iter().copied().fold(f64::INFINITY, f64::min);
        let max = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let avg = times.iter().sum::<f64>() / times.len() as f64;
        Some((min, avg, max))
    }

    /// Header and one line per attempt so far.
    pub fn progress_lines(&self) -> Vec<OutputLine> {
        let mut lines = vec![OutputLine::info(format!("PING {} ({})", self.host, self.url))];
        lines.extend(self.samples.iter().map(|sample| match &sample.result {
            Ok(ms) => OutputLine::text(format!(
                "Reply from {}: seq={} time={}",
                self.host,
                sample.seq,
                format_elapsed_ms(*ms)
            )),
            Err(e) => OutputLine::error(format!("Request seq={} failed: {}", sample.seq, e)),
        }));
        lines
    }

    /// Progress lines followed by the statistics block.
    pub fn final_lines(&self) -> Vec<OutputLine> {
        let sent = self.samples.len();
        let received = self.received();
        let loss = if sent == 0 {
            0
        } else {
            (sent - received) * 100 / sent
        };

        let mut lines = self.progress_lines();
        lines.push(OutputLine::empty());
        lines.push(OutputLine::text(format!(
            "--- {} ping statistics ---",
            self.host
        )));
        lines.push(OutputLine::text(format!(
            "{sent} requests transmitted, {received} received, {loss}% loss"
        )));
        if let Some((min, avg, max)) = self.stats() {
            lines.push(OutputLine::text(format!(
                "round-trip min/avg/max = {:.1}/{:.1}/{:.1} ms",
                min, avg, max
            )));
        }
        lines
    }
}

/// Probe `host` with [`PING_COUNT`] sequential attempts.
///
/// Each attempt is a `HEAD` request, retried as `GET` when the server
/// answers 405. `on_update` receives the rendered progress after every
/// attempt.
pub async fn ping<N, F>(net: &N, host: &str, mut on_update: F) -> PingReport
where
    N: Network,
    F: FnMut(Vec<OutputLine>),
{
    let mut report = PingReport::new(host);

    for seq in 1..=PING_COUNT {
        if seq > 1 {
            net.sleep(PING_INTERVAL_MS).await;
        }

        let start = net.now_ms();
        let mut result = net.request(Method::Head, &report.url).await;
        if matches!(&result, Ok(reply) if reply.status == 405) {
            result = net.request(Method::Get, &report.url).await;
        }
        let elapsed = net.now_ms() - start;

        if let Err(e) = &result {
            tracing::debug!(host, seq, error = %e, "ping attempt failed");
        }
        report.samples.push(PingSample {
            seq,
            result: result.map(|_| elapsed),
        });
        on_update(report.progress_lines());
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    /// Scripted network: each request pops a reply and advances the clock.
    struct MockNet {
        replies: RefCell<VecDeque<Result<HttpReply, FetchError>>>,
        latency: RefCell<VecDeque<f64>>,
        clock: Cell<f64>,
        calls: RefCell<Vec<Method>>,
        sleeps: RefCell<Vec<u32>>,
    }

    impl MockNet {
        fn new(replies: Vec<Result<HttpReply, FetchError>>, latency: Vec<f64>) -> Self {
            Self {
                replies: RefCell::new(replies.into()),
                latency: RefCell::new(latency.into()),
                clock: Cell::new(0.0),
                calls: RefCell::new(vec![]),
                sleeps: RefCell::new(vec![]),
            }
        }
    }

    impl Network for MockNet {
        async fn request(&self, method: Method, _url: &str) -> Result<HttpReply, FetchError> {
            self.calls.borrow_mut().push(method);
            let step = self.latency.borrow_mut().pop_front().unwrap_or(10.0);
            self.clock.set(self.clock.get() + step);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(FetchError::Timeout))
        }

        async fn sleep(&self, ms: u32) {
            self.sleeps.borrow_mut().push(ms);
        }

        fn now_ms(&self) -> f64 {
            self.clock.get()
        }
    }

    fn reply(status: u16, body: &str) -> Result<HttpReply, FetchError> {
        Ok(HttpReply {
            status,
            status_text: if status == 200 { "OK".into() } else { String::new() },
            content_type: Some("text/html".into()),
            body: body.into(),
        })
    }

    fn texts(lines: &[OutputLine]) -> Vec<String> {
        lines.iter().map(|l| l.plain_text().to_string()).collect()
    }

    #[tokio::test]
    async fn test_curl_report() {
        let net = MockNet::new(vec![reply(200, "<h1>hi</h1>")], vec![12.34]);
        let lines = curl(&net, "https://example.com").await;
        assert_eq!(
            texts(&lines),
            vec![
                "HTTP 200 OK",
                "Content-Type: text/html",
                "Time: 12.3ms",
                "",
                "<h1>hi</h1>",
            ]
        );
        assert_eq!(lines[0], OutputLine::success("HTTP 200 OK"));
    }

    #[tokio::test]
    async fn test_curl_truncates_body() {
        let body = "x".repeat(CURL_BODY_LIMIT + 50);
        let net = MockNet::new(vec![reply(200, &body)], vec![]);
        let lines = curl(&net, "https://example.com").await;
        let text = texts(&lines);
        assert_eq!(text[4].len(), CURL_BODY_LIMIT);
        assert_eq!(text.last().unwrap(), "... [truncated]");
    }

    #[tokio::test]
    async fn test_curl_network_error() {
        let net = MockNet::new(
            vec![Err(FetchError::NetworkError("TypeError".into()))],
            vec![],
        );
        let lines = curl(&net, "https://example.com").await;
        assert_eq!(
            lines,
            vec![OutputLine::error("curl: Network error: TypeError")]
        );
    }

    #[test]
    fn test_truncate_body_counts_chars() {
        assert_eq!(truncate_body("héllo", 10), "héllo");
        assert_eq!(truncate_body("héllo", 2), "hé\n... [truncated]");
    }

    #[tokio::test]
    async fn test_ping_four_attempts_with_stats() {
        let net = MockNet::new(
            vec![
                reply(200, ""),
                Err(FetchError::Timeout),
                reply(200, ""),
                reply(200, ""),
            ],
            vec![10.0, 50.0, 20.0, 30.0],
        );
        let mut updates = 0;
        let report = ping(&net, "example.com", |_| updates += 1).await;

        assert_eq!(updates, PING_COUNT);
        assert_eq!(report.samples.len(), PING_COUNT);
        assert_eq!(*net.calls.borrow(), vec![Method::Head; 4]);
        assert_eq!(*net.sleeps.borrow(), vec![PING_INTERVAL_MS; 3]);
        assert_eq!(report.received(), 3);
        assert_eq!(report.stats(), Some((10.0, 20.0, 30.0)));

        let text = texts(&report.final_lines());
        assert!(text.contains(&"4 requests transmitted, 3 received, 25% loss".to_string()));
        assert!(text.contains(&"round-trip min/avg/max = 10.0/20.0/30.0 ms".to_string()));
    }

    #[tokio::test]
    async fn test_ping_falls_back_to_get_on_405() {
        let net = MockNet::new(
            vec![
                reply(405, ""),
                reply(200, ""),
                reply(200, ""),
                reply(200, ""),
                reply(200, ""),
            ],
            vec![],
        );
        let report = ping(&net, "example.com", |_| {}).await;
        assert_eq!(
            *net.calls.borrow(),
            vec![
                Method::Head,
                Method::Get,
                Method::Head,
                Method::Head,
                Method::Head
            ]
        );
        assert_eq!(report.url, "https://example.com");
        // Both requests of the first attempt count towards its round trip.
        assert_eq!(report.samples[0].result, Ok(20.0));
    }

    #[tokio::test]
    async fn test_ping_all_failed_has_no_stats() {
        let net = MockNet::new(vec![], vec![]);
        let report = ping(&net, "down.example", |_| {}).await;
        assert_eq!(report.received(), 0);
        assert_eq!(report.stats(), None);
        let text = texts(&report.final_lines());
        assert!(text.contains(&"4 requests transmitted, 0 received, 100% loss".to_string()));
        assert!(!text.iter().any(|l| l.starts_with("round-trip")));
    }
}
