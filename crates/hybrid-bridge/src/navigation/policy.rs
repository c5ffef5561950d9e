use super::NavigationDecision;

/// Decides whether a navigation target may load.
pub trait NavigationPolicy: Send {
    fn decide(&self, target: &str) -> NavigationDecision;
}

/// Allow every navigation.
pub struct AllowAll;

impl NavigationPolicy for AllowAll {
    fn decide(&self, _target: &str) -> NavigationDecision {
        NavigationDecision::Allow
    }
}

/// Allow only targets that start with a configured prefix. `about:blank`
/// is always allowed so the view can start empty.
pub struct PrefixAllowList {
    prefixes: Vec<String>,
}

impl PrefixAllowList {
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }
}

impl NavigationPolicy for PrefixAllowList {
    fn decide(&self, target: &str) -> NavigationDecision {
        if is_navigation_allowed(&self.prefixes, target) {
            NavigationDecision::Allow
        } else {
            NavigationDecision::Cancel
        }
    }
}

/// Check `url` against an allowlist of prefixes.
pub fn is_navigation_allowed(prefixes: &[String], url: &str) -> bool {
    url == "about:blank" || prefixes.iter().any(|p| url.starts_with(p.as_str()))
}

/// Policy for a configured prefix list: an empty list allows everything.
pub fn policy_for(prefixes: Vec<String>) -> Box<dyn NavigationPolicy> {
    if prefixes.is_empty() {
        Box::new(AllowAll)
    } else {
        Box::new(PrefixAllowList::new(prefixes))
    }
}
