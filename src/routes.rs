//! Client-side route table

/// Every page reachable by URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Landing,
    Chat,
    Login,
    SignUp,
    ForgotPassword,
    ResetPassword,
}

impl AppRoute {
    pub const ALL: [AppRoute; 6] = [
        AppRoute::Landing,
        AppRoute::Chat,
        AppRoute::Login,
        AppRoute::SignUp,
        AppRoute::ForgotPassword,
        AppRoute::ResetPassword,
    ];

    /// Absolute URL path of the page
    pub const fn path(self) -> &'static str {
        match self {
            AppRoute::Landing => "/",
            AppRoute::Chat => "/chat",
            AppRoute::Login => "/login",
            AppRoute::SignUp => "/signup",
            AppRoute::ForgotPassword => "/forgotpassword",
            AppRoute::ResetPassword => "/reset_password",
        }
    }

    /// Path without the leading slash, as the router's static segment
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Resolve a URL path to its page. Only exact matches resolve.
    pub fn from_path(path: &str) -> Option<AppRoute> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Resolve the browser's current pathname, ignoring one trailing slash
    /// the router also accepts.
    pub fn from_location(pathname: &str) -> Option<AppRoute> {
        match pathname.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() && !trimmed.ends_with('/') => {
                Self::from_path(trimmed)
            }
            _ => Self::from_path(pathname),
        }
    }

    /// Document title shown while the page is active
    pub const fn title(self) -> &'static str {
        match self {
            AppRoute::Landing => "TA Chatbot",
            AppRoute::Chat => "Chat | TA Chatbot",
            AppRoute::Login => "Sign in | TA Chatbot",
            AppRoute::SignUp => "Sign up | TA Chatbot",
            AppRoute::ForgotPassword => "Forgot password | TA Chatbot",
            AppRoute::ResetPassword => "Reset password | TA Chatbot",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case("/", AppRoute::Landing)]
    #[case("/chat", AppRoute::Chat)]
    #[case("/login", AppRoute::Login)]
    #[case("/signup", AppRoute::SignUp)]
    #[case("/forgotpassword", AppRoute::ForgotPassword)]
    #[case("/reset_password", AppRoute::ResetPassword)]
    fn test_path_resolves_to_its_page(#[case] path: &str, #[case] expected: AppRoute) {
        assert_eq!(AppRoute::from_path(path), Some(expected));
        assert_eq!(expected.path(), path);
    }

    #[rstest]
    #[case("")]
    #[case("/chat/")]
    #[case("/Login")]
    #[case("/forgot_password")]
    #[case("/reset-password")]
    #[case("/signup?next=/chat")]
    #[case("/unknown")]
    fn test_unmatched_paths_do_not_resolve(#[case] path: &str) {
        assert_eq!(AppRoute::from_path(path), None);
    }

    #[rstest]
    #[case("/chat/", Some(AppRoute::Chat))]
    #[case("/reset_password/", Some(AppRoute::ResetPassword))]
    #[case("/", Some(AppRoute::Landing))]
    #[case("/login", Some(AppRoute::Login))]
    #[case("//", None)]
    #[case("/chat//", None)]
    #[case("/unknown/", None)]
    fn test_location_tolerates_trailing_slash(#[case] pathname: &str, #[case] expected: Option<AppRoute>) {
        assert_eq!(AppRoute::from_location(pathname), expected);
    }

    #[test]
    fn test_paths_are_unique() {
        let paths: HashSet<_> = AppRoute::ALL.iter().map(|r| r.path()).collect();
        assert_eq!(paths.len(), AppRoute::ALL.len());
    }

    #[test]
    fn test_each_route_maps_to_exactly_one_page() {
        for route in AppRoute::ALL {
            let matches: Vec<_> = AppRoute::ALL
                .into_iter()
                .filter(|other| other.path() == route.path())
                .collect();
            assert_eq!(matches, vec![route]);
        }
    }

    #[test]
    fn test_segments_drop_leading_slash() {
        assert_eq!(AppRoute::Landing.segment(), "");
        assert_eq!(AppRoute::ResetPassword.segment(), "reset_password");
    }
}
