//! Link validation and magnet helpers.

/// Accepts magnet URIs and http(s) URLs pointing at a .torrent file.
pub fn is_supported_link(link: &str) -> bool {
    if link.starts_with("magnet:?") {
        return true;
    }
    if link.starts_with("http://") || link.starts_with("https://") {
        // Strip query/fragment before checking the extension.
        let path = link.split(['?', '#']).next().unwrap_or(link);
        return path.ends_with(".torrent");
    }
    false
}

/// Extract the info hash from a magnet link.
///
/// Magnet links have the format: magnet:?xt=urn:btih:HASH&...
/// The hash can be 40 hex or 32 base32 characters; it is returned
/// lowercased.
pub fn extract_info_hash(magnet_url: &str) -> Option<String> {
    if !magnet_url.starts_with("magnet:?") {
        return None;
    }

    for param in magnet_url.split('&') {
        if let Some(hash_start) = param.find("xt=urn:btih:") {
            let hash = &param[hash_start + 12..];
            let hash_end = hash.find('&').unwrap_or(hash.len());
            let extracted = &hash[..hash_end];
            if !extracted.is_empty() {
                return Some(extracted.to_lowercase());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_supported_link() {
        assert!(is_supported_link("magnet:?xt=urn:btih:abc123"));
        assert!(is_supported_link("http://example.com/file.torrent"));
        assert!(is_supported_link("https://example.com/file.torrent?token=x"));
        assert!(!is_supported_link("https://example.com/file.iso"));
        assert!(!is_supported_link("ftp://example.com/file.torrent"));
        assert!(!is_supported_link("not a link"));
        assert!(!is_supported_link(""));
    }

    #[test]
    fn test_extract_info_hash() {
        // Standard magnet link
        let magnet = "magnet:?xt=urn:btih:abc123def456&dn=Test";
        assert_eq!(extract_info_hash(magnet), Some("abc123def456".to_string()));

        // Magnet with multiple parameters
        let magnet = "magnet:?dn=Test&xt=urn:btih:abc123def456&tr=http://tracker.example.com";
        assert_eq!(extract_info_hash(magnet), Some("abc123def456".to_string()));

        // Invalid magnet
        assert_eq!(extract_info_hash("http://example.com/file.torrent"), None);
        assert_eq!(extract_info_hash("not a magnet link"), None);

        // Uppercase hash should be lowercased
        let magnet = "magnet:?xt=urn:btih:ABC123DEF456";
        assert_eq!(extract_info_hash(magnet), Some("abc123def456".to_string()));
    }
}
