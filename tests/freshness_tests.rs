use web_search_config::{
    SearchProvider, WebSearchError, freshness_for, normalize_freshness,
};

#[test]
fn test_accepts_brave_shortcut_values() {
    assert_eq!(normalize_freshness(Some("pd")).as_deref(), Some("pd"));
    assert_eq!(normalize_freshness(Some("PW")).as_deref(), Some("pw"));
    assert_eq!(normalize_freshness(Some("Pm")).as_deref(), Some("pm"));
    assert_eq!(normalize_freshness(Some("py")).as_deref(), Some("py"));
}

#[test]
fn test_rejects_unknown_shortcuts() {
    assert_eq!(normalize_freshness(Some("pq")), None);
    assert_eq!(normalize_freshness(Some("p")), None);
    assert_eq!(normalize_freshness(Some("past-day")), None);
    assert_eq!(normalize_freshness(Some("")), None);
    assert_eq!(normalize_freshness(None), None);
}

#[test]
fn test_accepts_valid_date_ranges() {
    assert_eq!(
        normalize_freshness(Some("2024-01-01to2024-01-31")).as_deref(),
        Some("2024-01-01to2024-01-31")
    );
    assert_eq!(
        normalize_freshness(Some("2023-12-31to2024-01-01")).as_deref(),
        Some("2023-12-31to2024-01-01")
    );
}

#[test]
fn test_rejects_invalid_date_ranges() {
    assert_eq!(normalize_freshness(Some("2024-13-01to2024-01-31")), None);
    assert_eq!(normalize_freshness(Some("2024-02-30to2024-03-01")), None);
    assert_eq!(normalize_freshness(Some("2024-03-10to2024-03-01")), None);
}

#[test]
fn test_rejects_zero_fields() {
    assert_eq!(normalize_freshness(Some("2024-00-10to2024-03-01")), None);
    assert_eq!(normalize_freshness(Some("2024-01-00to2024-03-01")), None);
}

#[test]
fn test_leap_day_follows_gregorian_rule() {
    assert!(normalize_freshness(Some("2024-02-29to2024-03-01")).is_some());
    assert!(normalize_freshness(Some("2000-02-29to2000-03-01")).is_some());
    assert_eq!(normalize_freshness(Some("2023-02-29to2023-03-01")), None);
    assert_eq!(normalize_freshness(Some("1900-02-29to1900-03-01")), None);
}

#[test]
fn test_month_lengths() {
    assert!(normalize_freshness(Some("2024-04-30to2024-05-31")).is_some());
    assert_eq!(normalize_freshness(Some("2024-04-31to2024-05-01")), None);
    assert_eq!(normalize_freshness(Some("2024-01-01to2024-06-31")), None);
}

#[test]
fn test_rejects_malformed_separators() {
    assert_eq!(normalize_freshness(Some("2024-01-01TO2024-01-31")), None);
    assert_eq!(normalize_freshness(Some("2024-01-01..2024-01-31")), None);
    assert_eq!(normalize_freshness(Some("2024-01-01 to 2024-01-31")), None);
    assert_eq!(normalize_freshness(Some("2024-1-1to2024-1-31")), None);
}

// Single-day ranges (start == end) are treated as valid. Nothing upstream
// documents this boundary either way; this test pins the assumption.
#[test]
fn test_equal_start_and_end_is_single_day_range() {
    assert_eq!(
        normalize_freshness(Some("2024-03-01to2024-03-01")).as_deref(),
        Some("2024-03-01to2024-03-01")
    );
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    assert_eq!(normalize_freshness(Some("  pd ")).as_deref(), Some("pd"));
    assert_eq!(
        normalize_freshness(Some(" 2024-01-01to2024-01-31\n")).as_deref(),
        Some("2024-01-01to2024-01-31")
    );
}

#[test]
fn test_normalization_is_idempotent() {
    for raw in [
        "pd",
        "PW",
        "pM",
        "py",
        "2024-01-01to2024-01-31",
        "2024-02-29to2024-02-29",
        " 2020-02-01to2021-02-01 ",
    ] {
        let once = normalize_freshness(Some(raw)).unwrap();
        let twice = normalize_freshness(Some(&once)).unwrap();
        assert_eq!(once, twice, "{raw}");
    }
}

#[test]
fn test_freshness_for_brave() {
    assert_eq!(
        freshness_for(SearchProvider::Brave, Some("PD")).unwrap().as_deref(),
        Some("pd")
    );
    assert_eq!(freshness_for(SearchProvider::Brave, Some("  ")).unwrap(), None);
    assert_eq!(freshness_for(SearchProvider::Brave, None).unwrap(), None);

    let err = freshness_for(SearchProvider::Brave, Some("last week")).unwrap_err();
    assert!(matches!(err, WebSearchError::InvalidFreshness(ref raw) if raw == "last week"));
    assert_eq!(err.code(), "invalid_freshness");
}

#[test]
fn test_freshness_for_other_providers_is_unsupported() {
    for provider in [SearchProvider::Perplexity, SearchProvider::SerpApi] {
        let err = freshness_for(provider, Some("pd")).unwrap_err();
        assert!(matches!(err, WebSearchError::UnsupportedFreshness { provider: p } if p == provider));
        assert_eq!(err.code(), "unsupported_freshness");
    }

    // No filter requested: nothing to reject.
    assert_eq!(freshness_for(SearchProvider::SerpApi, None).unwrap(), None);
}
