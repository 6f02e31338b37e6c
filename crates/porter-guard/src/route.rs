//! Route descriptors consumed by the guard.

/// What the guard needs to know about a navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// The route's path (e.g. `/profile`).
    pub path: String,
    /// Page title to apply on every transition attempt.
    pub title: String,
    /// Whether the route requires an authenticated session.
    pub requires_auth: bool,
}

impl RouteDescriptor {
    /// A public route.
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            requires_auth: false,
        }
    }

    /// Mark this route as requiring an authenticated session.
    pub fn protected(mut self) -> Self {
        self.requires_auth = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_routes_are_public() {
        let route = RouteDescriptor::new("/", "Home");
        assert!(!route.requires_auth);
        assert_eq!(route.path, "/");
        assert_eq!(route.title, "Home");
    }

    #[test]
    fn protected_marks_requires_auth() {
        let route = RouteDescriptor::new("/profile", "Profile").protected();
        assert!(route.requires_auth);
    }
}
