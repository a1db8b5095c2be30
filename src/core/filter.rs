//! Content filters for destinations
//!
//! A filter is a predicate over one component of a log event: the source
//! path, the canonical function name, or the resolved message. A
//! destination is eligible for an event only when every one of its filters
//! passes.

/// Which event component a filter inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterTarget {
    Path,
    Function,
    Message,
}

enum Matcher {
    StartsWith(String),
    Contains(String),
    EndsWith(String),
    Equals(String),
    Custom(Box<dyn Fn(&str) -> bool + Send + Sync>),
}

pub struct Filter {
    target: FilterTarget,
    matcher: Matcher,
    case_sensitive: bool,
    negate: bool,
}

impl Filter {
    fn new(target: FilterTarget, matcher: Matcher) -> Self {
        Self {
            target,
            matcher,
            case_sensitive: false,
            negate: false,
        }
    }

    pub fn starts_with(target: FilterTarget, needle: impl Into<String>) -> Self {
        Self::new(target, Matcher::StartsWith(needle.into()))
    }

    pub fn contains(target: FilterTarget, needle: impl Into<String>) -> Self {
        Self::new(target, Matcher::Contains(needle.into()))
    }

    pub fn ends_with(target: FilterTarget, needle: impl Into<String>) -> Self {
        Self::new(target, Matcher::EndsWith(needle.into()))
    }

    pub fn equals(target: FilterTarget, needle: impl Into<String>) -> Self {
        Self::new(target, Matcher::Equals(needle.into()))
    }

    /// An arbitrary predicate over the targeted component.
    pub fn custom<F>(target: FilterTarget, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::new(target, Matcher::Custom(Box::new(predicate)))
    }

    /// Compare case-sensitively (default is case-insensitive).
    #[must_use]
    pub fn case_sensitive(mut self, yes: bool) -> Self {
        self.case_sensitive = yes;
        self
    }

    /// Invert the match, turning the filter into an exclusion.
    #[must_use]
    pub fn negated(mut self) -> Self {
        self.negate = true;
        self
    }

    pub fn target(&self) -> FilterTarget {
        self.target
    }

    /// Apply the matcher to a single subject string.
    pub fn matches(&self, subject: &str) -> bool {
        let hit = match &self.matcher {
            Matcher::Custom(predicate) => predicate(subject),
            matcher => {
                let (subject, needle) = self.fold_case(subject, matcher);
                match matcher {
                    Matcher::StartsWith(_) => subject.starts_with(&needle),
                    Matcher::Contains(_) => subject.contains(&needle),
                    Matcher::EndsWith(_) => subject.ends_with(&needle),
                    Matcher::Equals(_) => subject == needle,
                    Matcher::Custom(_) => unreachable!("handled above"),
                }
            }
        };
        hit != self.negate
    }

    /// Evaluate against a full event. Message-target filters require an
    /// already-resolved message; with none present the filter does not
    /// pass (the dispatcher resolves the message before evaluating any
    /// destination that declares message filters, so that case only
    /// arises when `should_log` is called outside a dispatch).
    pub fn passes(&self, path: &str, function: &str, message: Option<&str>) -> bool {
        match self.target {
            FilterTarget::Path => self.matches(path),
            FilterTarget::Function => self.matches(function),
            FilterTarget::Message => message.map(|m| self.matches(m)).unwrap_or(false),
        }
    }

    fn fold_case(&self, subject: &str, matcher: &Matcher) -> (String, String) {
        let needle = match matcher {
            Matcher::StartsWith(n)
            | Matcher::Contains(n)
            | Matcher::EndsWith(n)
            | Matcher::Equals(n) => n.clone(),
            Matcher::Custom(_) => String::new(),
        };
        if self.case_sensitive {
            (subject.to_string(), needle)
        } else {
            (subject.to_lowercase(), needle.to_lowercase())
        }
    }
}

impl std::fmt::Debug for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match &self.matcher {
            Matcher::StartsWith(n) => format!("starts_with({:?})", n),
            Matcher::Contains(n) => format!("contains({:?})", n),
            Matcher::EndsWith(n) => format!("ends_with({:?})", n),
            Matcher::Equals(n) => format!("equals({:?})", n),
            Matcher::Custom(_) => "custom(..)".to_string(),
        };
        f.debug_struct("Filter")
            .field("target", &self.target)
            .field("matcher", &kind)
            .field("case_sensitive", &self.case_sensitive)
            .field("negate", &self.negate)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_case_insensitive_by_default() {
        let filter = Filter::contains(FilterTarget::Message, "Timeout");
        assert!(filter.matches("connection timeout after 3s"));
        assert!(!filter.matches("connection refused"));
    }

    #[test]
    fn test_case_sensitive() {
        let filter = Filter::contains(FilterTarget::Message, "Timeout").case_sensitive(true);
        assert!(!filter.matches("connection timeout"));
        assert!(filter.matches("connection Timeout"));
    }

    #[test]
    fn test_negated_excludes() {
        let filter = Filter::starts_with(FilterTarget::Path, "src/vendor").negated();
        assert!(!filter.matches("src/vendor/third_party.rs"));
        assert!(filter.matches("src/core/dispatcher.rs"));
    }

    #[test]
    fn test_equals_and_ends_with() {
        let eq = Filter::equals(FilterTarget::Function, "main()");
        assert!(eq.matches("MAIN()"));
        assert!(!eq.matches("main_loop()"));

        let ends = Filter::ends_with(FilterTarget::Path, ".rs");
        assert!(ends.matches("src/lib.rs"));
        assert!(!ends.matches("build.gradle"));
    }

    #[test]
    fn test_custom_predicate() {
        let filter = Filter::custom(FilterTarget::Message, |m| m.len() > 10);
        assert!(filter.matches("a long enough message"));
        assert!(!filter.matches("short"));
    }

    #[test]
    fn test_passes_selects_target() {
        let filter = Filter::contains(FilterTarget::Function, "handle");
        assert!(filter.passes("src/server.rs", "handle_request()", None));
        assert!(!filter.passes("src/handle.rs", "main()", None));
    }

    #[test]
    fn test_message_filter_without_resolved_message() {
        let filter = Filter::contains(FilterTarget::Message, "x");
        assert!(!filter.passes("f.rs", "f()", None));
        assert!(filter.passes("f.rs", "f()", Some("axb")));
    }
}
