//! Landing page

mod app_bar;
mod faq;
mod footer;
mod hero;
mod highlights;
mod logo_collection;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::AppRoute;
use crate::state::AppState;
use crate::theme::ThemeProvider;

pub use app_bar::AppBar;
pub use faq::Faq;
pub use footer::Footer;
pub use hero::Hero;
pub use highlights::Highlights;
pub use logo_collection::LogoCollection;

/// One block of the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingSection {
    AppBar,
    Hero,
    LogoCollection,
    Highlights,
    Faq,
    Footer,
    Divider,
}

/// Top-to-bottom order of the landing page
pub const LANDING_LAYOUT: [LandingSection; 9] = [
    LandingSection::AppBar,
    LandingSection::Hero,
    LandingSection::LogoCollection,
    LandingSection::Divider,
    LandingSection::Highlights,
    LandingSection::Divider,
    LandingSection::Faq,
    LandingSection::Divider,
    LandingSection::Footer,
];

impl LandingSection {
    fn render(self) -> AnyView {
        match self {
            LandingSection::AppBar => view! { <AppBar /> }.into_any(),
            LandingSection::Hero => view! { <Hero /> }.into_any(),
            LandingSection::LogoCollection => view! { <LogoCollection /> }.into_any(),
            LandingSection::Highlights => view! { <Highlights /> }.into_any(),
            LandingSection::Faq => view! { <Faq /> }.into_any(),
            LandingSection::Footer => view! { <Footer /> }.into_any(),
            LandingSection::Divider => view! {
                <hr class="section-divider border-[var(--border-default)]" />
            }
            .into_any(),
        }
    }
}

/// Landing page: every section of [`LANDING_LAYOUT`] inside the theme provider
#[component]
pub fn LandingPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <Title text=AppRoute::Landing.title() />
        <ThemeProvider mode=state.theme>
            {LANDING_LAYOUT.into_iter().map(LandingSection::render).collect::<Vec<_>>()}
        </ThemeProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_layout_order() {
        use LandingSection::*;
        assert_eq!(
            LANDING_LAYOUT.to_vec(),
            vec![AppBar, Hero, LogoCollection, Divider, Highlights, Divider, Faq, Divider, Footer]
        );
    }

    #[test]
    fn test_layout_starts_with_app_bar_and_ends_with_footer() {
        assert_eq!(LANDING_LAYOUT.first(), Some(&LandingSection::AppBar));
        assert_eq!(LANDING_LAYOUT.last(), Some(&LandingSection::Footer));
    }

    #[test]
    fn test_content_sections_appear_once() {
        let content: Vec<_> = LANDING_LAYOUT
            .iter()
            .filter(|s| **s != LandingSection::Divider)
            .collect();
        assert_eq!(content.len(), 6);
        for section in &content {
            assert_eq!(content.iter().filter(|s| s == &section).count(), 1);
        }
    }

    #[test]
    fn test_dividers_separate_lower_sections() {
        let dividers: Vec<usize> = LANDING_LAYOUT
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == LandingSection::Divider)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(dividers, vec![3, 5, 7]);
    }
}
