//! Text version selection policy.
//!
//! Selecting which version of a bill's text to fetch is a pure function of
//! (preference list, version list), kept separate from the HTTP client so it
//! can be tested without stubbing any network calls.

use super::types::TextVersion;

/// Format label of the human-readable text variant.
pub const FORMATTED_TEXT: &str = "Formatted Text";

/// Default ordered preference list of version labels.
pub const PREFERRED_TEXT_TYPES: &[&str] = &["Enrolled Bill"];

/// Pick the text version to fetch.
///
/// Defaults to the first version in the upstream list. The preference list is
/// scanned in order, and the first entry that matches any version's label
/// overrides the default; among versions sharing that label the first
/// occurrence in the upstream list wins.
///
/// Returns `None` only when `versions` is empty.
#[must_use]
pub fn select_text_version<'a>(
    preferred: &[impl AsRef<str>],
    versions: &'a [TextVersion],
) -> Option<&'a TextVersion> {
    let first = versions.first()?;

    for label in preferred {
        let found = versions
            .iter()
            .find(|version| version.version_type.as_deref() == Some(label.as_ref()));
        if let Some(version) = found {
            return Some(version);
        }
    }

    Some(first)
}

/// URL of the formatted-text variant of a version, if it has one.
///
/// The first format entry labeled [`FORMATTED_TEXT`] wins; an entry that
/// matches but carries no URL yields `None`.
#[must_use]
pub fn formatted_text_url(version: &TextVersion) -> Option<&str> {
    version
        .formats
        .iter()
        .find(|format| format.format_type.as_deref() == Some(FORMATTED_TEXT))
        .and_then(|format| format.url.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::congress::types::TextFormat;

    fn version(label: Option<&str>, urls: &[(&str, Option<&str>)]) -> TextVersion {
        TextVersion {
            version_type: label.map(String::from),
            formats: urls
                .iter()
                .map(|(format_type, url)| TextFormat {
                    format_type: Some((*format_type).to_string()),
                    url: url.map(String::from),
                })
                .collect(),
        }
    }

    #[test]
    fn empty_version_list_selects_nothing() {
        let selected = select_text_version(PREFERRED_TEXT_TYPES, &[]);
        assert!(selected.is_none());
    }

    #[test]
    fn preferred_label_overrides_first_listed() {
        let versions = vec![
            version(Some("Introduced in House"), &[]),
            version(Some("Enrolled Bill"), &[]),
        ];

        let selected = select_text_version(PREFERRED_TEXT_TYPES, &versions).expect("non-empty");
        assert_eq!(selected.version_type.as_deref(), Some("Enrolled Bill"));
    }

    #[test]
    fn falls_back_to_first_listed_without_preferred_match() {
        let versions = vec![
            version(Some("Introduced in House"), &[]),
            version(Some("Engrossed in House"), &[]),
        ];

        let selected = select_text_version(PREFERRED_TEXT_TYPES, &versions).expect("non-empty");
        assert_eq!(
            selected.version_type.as_deref(),
            Some("Introduced in House")
        );
    }

    #[test]
    fn first_matching_preference_entry_wins() {
        let preferred = ["Enrolled Bill", "Engrossed in House"];
        let versions = vec![
            version(Some("Engrossed in House"), &[]),
            version(Some("Enrolled Bill"), &[]),
        ];

        let selected = select_text_version(&preferred, &versions).expect("non-empty");
        assert_eq!(selected.version_type.as_deref(), Some("Enrolled Bill"));
    }

    #[test]
    fn duplicate_labels_resolve_to_first_occurrence() {
        let versions = vec![
            version(Some("Introduced in House"), &[]),
            version(
                Some("Enrolled Bill"),
                &[("Formatted Text", Some("https://example.com/first.htm"))],
            ),
            version(
                Some("Enrolled Bill"),
                &[("Formatted Text", Some("https://example.com/second.htm"))],
            ),
        ];

        let selected = select_text_version(PREFERRED_TEXT_TYPES, &versions).expect("non-empty");
        assert_eq!(
            formatted_text_url(selected),
            Some("https://example.com/first.htm")
        );
    }

    #[test]
    fn unlabeled_versions_never_match_preferences() {
        let versions = vec![version(None, &[]), version(Some("Enrolled Bill"), &[])];

        let selected = select_text_version(PREFERRED_TEXT_TYPES, &versions).expect("non-empty");
        assert_eq!(selected.version_type.as_deref(), Some("Enrolled Bill"));
    }

    #[test]
    fn formatted_text_url_skips_other_formats() {
        let v = version(
            Some("Enrolled Bill"),
            &[
                ("PDF", Some("https://example.com/bill.pdf")),
                ("Formatted Text", Some("https://example.com/bill.htm")),
            ],
        );

        assert_eq!(formatted_text_url(&v), Some("https://example.com/bill.htm"));
    }

    #[test]
    fn formatted_text_entry_without_url_yields_none() {
        let v = version(Some("Enrolled Bill"), &[("Formatted Text", None)]);
        assert!(formatted_text_url(&v).is_none());
    }

    #[test]
    fn version_without_formats_yields_none() {
        let v = version(Some("Enrolled Bill"), &[]);
        assert!(formatted_text_url(&v).is_none());
    }
}
