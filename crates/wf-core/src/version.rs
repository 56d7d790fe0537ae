//! Release version metadata supplied by an external fetch.

/// Latest-release record. Considered complete only when both fields are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VersionInfo {
    pub latest_version: Option<String>,
    pub download_page: Option<String>,
}

impl VersionInfo {
    pub fn new(latest_version: impl Into<String>, download_page: impl Into<String>) -> Self {
        Self {
            latest_version: Some(latest_version.into()),
            download_page: Some(download_page.into()),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.latest_version.is_some() && self.download_page.is_some()
    }
}

/// Holder for the current latest-release record.
///
/// Set at most once per session by the caller's fetcher and read thereafter.
/// An incomplete record clears the holder instead of being stored.
#[derive(Debug, Clone, Default)]
pub struct LatestVersion {
    current: Option<VersionInfo>,
}

impl LatestVersion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current record wholesale. Incomplete records are rejected.
    pub fn set(&mut self, version: Option<VersionInfo>) {
        self.current = version.filter(VersionInfo::is_complete);
    }

    pub fn get(&self) -> Option<&VersionInfo> {
        self.current.as_ref()
    }

    /// Whether `version` is older than the latest release.
    ///
    /// This is a plain lexicographic string comparison, not a semantic
    /// version ordering; the imprecision is a documented carry-over from the
    /// suite's release scheme. Unknown latest release compares as not-older.
    pub fn is_older_than(&self, version: &str) -> bool {
        self.current
            .as_ref()
            .and_then(|v| v.latest_version.as_deref())
            .is_some_and(|latest| version < latest)
    }

    /// The download page of the latest release, if known.
    pub fn download_page(&self) -> Option<&str> {
        self.current
            .as_ref()
            .and_then(|v| v.download_page.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_records_are_rejected() {
        let mut latest = LatestVersion::new();
        latest.set(Some(VersionInfo {
            latest_version: Some("2022/01/01".to_string()),
            download_page: None,
        }));
        assert!(latest.get().is_none());
        assert!(!latest.is_older_than("2020/01/01"));
    }

    #[test]
    fn lexicographic_comparison() {
        let mut latest = LatestVersion::new();
        latest.set(Some(VersionInfo::new("2022/06/15", "https://example.com/dl")));
        assert!(latest.is_older_than("2022/06/14"));
        assert!(latest.is_older_than("2021/12/31"));
        assert!(!latest.is_older_than("2022/06/15"));
        assert!(!latest.is_older_than("2023/01/01"));
        assert_eq!(latest.download_page(), Some("https://example.com/dl"));
    }

    #[test]
    fn replaceable_wholesale() {
        let mut latest = LatestVersion::new();
        latest.set(Some(VersionInfo::new("1", "a")));
        latest.set(Some(VersionInfo::new("2", "b")));
        assert_eq!(
            latest.get().and_then(|v| v.latest_version.as_deref()),
            Some("2")
        );
        latest.set(None);
        assert!(latest.get().is_none());
    }
}
