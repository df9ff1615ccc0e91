//! URL helpers for the network probes.

/// Prefix bare hosts with `https://`.
///
/// Input that already names an `http` or `https` scheme (any case) is kept.
pub fn normalize_probe_url(target: &str) -> String {
    let target = target.trim();
    let lower = target.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        target.to_string()
    } else {
        format!("https://{}", target)
    }
}

/// Extract the host from a URL (lowercased, without port).
pub fn extract_host(url: &str) -> Option<String> {
    let lower = url.trim().to_ascii_lowercase();
    let without_protocol = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
        .unwrap_or(&lower);

    // Get the host part (before first / ? # or end of string)
    let host_part = without_protocol.split(['/', '?', '#']).next()?;

    // Remove port if present
    let host = host_part.split(':').next()?;

    if host.is_empty() {
        return None;
    }

    Some(host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_probe_url() {
        assert_eq!(normalize_probe_url("example.com"), "https://example.com");
        assert_eq!(
            normalize_probe_url("http://example.com/a"),
            "http://example.com/a"
        );
        assert_eq!(normalize_probe_url("HTTPS://Example.com"), "HTTPS://Example.com");
    }

    #[test]
    fn test_extract_host() {
        assert_eq!(
            extract_host("https://github.com/user"),
            Some("github.com".to_string())
        );
        assert_eq!(
            extract_host("https://api.github.com:443/repos"),
            Some("api.github.com".to_string())
        );
        assert_eq!(extract_host("example.com?q=1"), Some("example.com".to_string()));
        assert_eq!(extract_host("https://"), None);
    }
}
