//! URL diffing: eager orchestration plus the hostname and parameter
//! differs.

mod entry;

pub use entry::{DiffEntry, DiffKind, MarkerStyle};

use crate::url_model::{
    extract_hostname, extract_params, normalize_url, HostnameParseError, ParamMap,
};

/// Name carried by the hostname pseudo-parameter in diff output.
const HOSTNAME_ENTRY_NAME: &str = "Hostname";

/// Modes fixed at construction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffOptions {
    /// Also compare the two URLs' host segments.
    pub diff_hostname: bool,
    /// Marker characters for rendered values.
    pub style: MarkerStyle,
}

/// Compares two URLs and holds the resulting ordered diff.
///
/// All work happens eagerly in [`UrlDiffer::new`]; the constructed value
/// is immutable and every accessor returns an owned copy, so a shared
/// instance can be read from multiple threads without synchronization.
#[derive(Debug, Clone)]
pub struct UrlDiffer {
    left_params: ParamMap,
    right_params: ParamMap,
    diffs: Vec<DiffEntry>,
    style: MarkerStyle,
}

impl UrlDiffer {
    /// Normalizes and diffs the two URLs.
    ///
    /// Fails only when hostname diffing is requested and one of the URLs
    /// has no parseable host segment.
    pub fn new(
        left_url: &str,
        right_url: &str,
        options: DiffOptions,
    ) -> Result<Self, HostnameParseError> {
        let left_url = normalize_url(left_url);
        let right_url = normalize_url(right_url);

        let mut diffs = Vec::new();
        if options.diff_hostname {
            let left_host = extract_hostname(left_url)?;
            let right_host = extract_hostname(right_url)?;
            diffs.extend(diff_hostnames(left_host, right_host));
        }

        let left_params = extract_params(left_url);
        let right_params = extract_params(right_url);
        diffs.extend(diff_params(&left_params, &right_params));

        Ok(Self {
            left_params,
            right_params,
            diffs,
            style: options.style,
        })
    }

    /// True iff the two URLs diverge anywhere.
    pub fn are_different(&self) -> bool {
        !self.diffs.is_empty()
    }

    /// Owned copy of the ordered diff entries.
    pub fn diff(&self) -> Vec<DiffEntry> {
        self.diffs.clone()
    }

    /// Owned copy of the left URL's parameters.
    pub fn left_params(&self) -> ParamMap {
        self.left_params.clone()
    }

    /// Owned copy of the right URL's parameters.
    pub fn right_params(&self) -> ParamMap {
        self.right_params.clone()
    }

    /// Renders the whole diff: entry names joined by newlines, or full
    /// entry texts separated by blank lines.
    pub fn render(&self, names_only: bool) -> String {
        if names_only {
            self.diffs
                .iter()
                .map(DiffEntry::name)
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            self.diffs
                .iter()
                .map(|entry| entry.render(self.style))
                .collect::<Vec<_>>()
                .join("\n\n")
        }
    }
}

/// Compares two host segments. Unequal hosts yield one `BothDiffer` entry
/// named `Hostname`; equal hosts yield nothing.
fn diff_hostnames(left: &str, right: &str) -> Option<DiffEntry> {
    if left == right {
        None
    } else {
        Some(DiffEntry::both_differ(HOSTNAME_ENTRY_NAME, left, right))
    }
}

/// Two-pass parameter diff. Left-originated entries (value changes and
/// left-only names, in left insertion order) always precede right-only
/// names (in right insertion order).
fn diff_params(left: &ParamMap, right: &ParamMap) -> Vec<DiffEntry> {
    let mut diffs = Vec::new();

    for (name, left_value) in left.iter() {
        match right.get(name) {
            Some(right_value) if right_value != left_value => {
                diffs.push(DiffEntry::both_differ(name, left_value, right_value));
            }
            Some(_) => {}
            None => diffs.push(DiffEntry::left_only(name, left_value)),
        }
    }

    for (name, right_value) in right.iter() {
        if !left.contains(name) {
            diffs.push(DiffEntry::right_only(name, right_value));
        }
    }

    diffs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn differ(left: &str, right: &str, options: DiffOptions) -> UrlDiffer {
        UrlDiffer::new(left, right, options).unwrap()
    }

    #[test]
    fn identical_urls_yield_empty_diff() {
        let d = differ(
            "http://a.com/x?foo=1",
            "http://a.com/x?foo=1",
            DiffOptions::default(),
        );
        assert!(!d.are_different());
        assert!(d.diff().is_empty());
        assert_eq!(d.render(false), "");
        assert_eq!(d.render(true), "");
    }

    #[test]
    fn changed_value_yields_both_differ() {
        let d = differ(
            "http://a.com/x?foo=1&bar=2",
            "http://a.com/x?foo=1&bar=3",
            DiffOptions::default(),
        );
        let entries = d.diff();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name(), "bar");
        assert_eq!(entries[0].kind(), DiffKind::BothDiffer);
        assert_eq!(entries[0].left_value(), Some("2"));
        assert_eq!(entries[0].right_value(), Some("3"));
        assert_eq!(d.render(false), "bar\n< 2\n> 3");
    }

    #[test]
    fn left_entries_precede_right_entries() {
        let d = differ(
            "http://a.com?l1=1&shared=x&l2=2",
            "http://a.com?r1=3&shared=y&r2=4",
            DiffOptions::default(),
        );
        let names: Vec<_> = d.diff().iter().map(|e| e.name().to_string()).collect();
        assert_eq!(names, vec!["l1", "shared", "l2", "r1", "r2"]);
        let kinds: Vec<_> = d.diff().iter().map(DiffEntry::kind).collect();
        assert_eq!(
            kinds,
            vec![
                DiffKind::LeftOnly,
                DiffKind::BothDiffer,
                DiffKind::LeftOnly,
                DiffKind::RightOnly,
                DiffKind::RightOnly,
            ]
        );
    }

    #[test]
    fn names_only_render() {
        let d = differ(
            "http://a.com?a=1",
            "http://a.com?a=1&b=2",
            DiffOptions::default(),
        );
        assert_eq!(d.render(true), "b");
    }

    #[test]
    fn full_render_separates_entries_with_blank_line() {
        let d = differ(
            "http://a.com?a=1&b=2",
            "http://a.com?a=9",
            DiffOptions::default(),
        );
        assert_eq!(d.render(false), "a\n< 1\n> 9\n\nb\n< 2");
    }

    #[test]
    fn unified_style_markers() {
        let options = DiffOptions {
            style: MarkerStyle::Unified,
            ..DiffOptions::default()
        };
        let d = differ("http://a.com?bar=2", "http://a.com?bar=3", options);
        assert_eq!(d.render(false), "bar\n- 2\n+ 3");
    }

    #[test]
    fn hostname_diff_entry_comes_first() {
        let options = DiffOptions {
            diff_hostname: true,
            ..DiffOptions::default()
        };
        let d = differ("http://a.com/x?p=1", "http://b.com/x?p=2", options);
        let entries = d.diff();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name(), "Hostname");
        assert_eq!(entries[0].kind(), DiffKind::BothDiffer);
        assert_eq!(entries[0].left_value(), Some("a.com"));
        assert_eq!(entries[0].right_value(), Some("b.com"));
        assert_eq!(entries[1].name(), "p");
    }

    #[test]
    fn equal_hostnames_yield_no_entry() {
        let options = DiffOptions {
            diff_hostname: true,
            ..DiffOptions::default()
        };
        let d = differ("http://a.com/x", "http://a.com/y", options);
        assert!(!d.are_different());
    }

    #[test]
    fn hostname_mode_off_ignores_host_change() {
        let d = differ("http://a.com/x", "http://b.com/x", DiffOptions::default());
        assert!(!d.are_different());
    }

    #[test]
    fn hostname_parse_failure_propagates() {
        let options = DiffOptions {
            diff_hostname: true,
            ..DiffOptions::default()
        };
        let err = UrlDiffer::new("ftp://x.com/", "://bad", options).unwrap_err();
        assert_eq!(err.url, "://bad");
    }

    #[test]
    fn fragments_never_affect_the_diff() {
        let d = differ(
            "http://a.com/x?foo=1#frag",
            "http://a.com/x?foo=1#other",
            DiffOptions::default(),
        );
        assert!(!d.are_different());
    }

    #[test]
    fn param_accessors_return_owned_copies() {
        let d = differ(
            "http://a.com?a=1",
            "http://a.com?b=2",
            DiffOptions::default(),
        );
        let mut left = d.left_params();
        left.insert("a", "mutated");
        assert_eq!(d.left_params().get("a"), Some("1"));
        assert_eq!(d.right_params().get("b"), Some("2"));
    }

    #[test]
    fn public_entries_always_satisfy_kind_invariant() {
        let options = DiffOptions {
            diff_hostname: true,
            ..DiffOptions::default()
        };
        let d = differ(
            "http://a.com?only_left=1&changed=2",
            "http://b.com?changed=3&only_right=4",
            options,
        );
        for entry in d.diff() {
            match entry.kind() {
                DiffKind::LeftOnly => {
                    assert!(entry.left_value().is_some() && entry.right_value().is_none());
                }
                DiffKind::RightOnly => {
                    assert!(entry.left_value().is_none() && entry.right_value().is_some());
                }
                DiffKind::BothDiffer => {
                    assert!(entry.left_value().is_some() && entry.right_value().is_some());
                }
            }
        }
    }
}
