/// Application root for Media Reviews.
/// Two tabs share one screen: the feed loaded from the review service, and a
/// home tab showing fixed sample cards.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::components::review_feed::ReviewFeedScreen;
use crate::config::AppConfig;
use crate::feed::FeedSource;
use crate::submission::log_submission;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppConfig::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/mediareview.css"/>
        // Glyphs for each card's `icon` name
        <Link rel="stylesheet" href="https://fonts.googleapis.com/icon?family=Material+Icons"/>
        <Title text="Media Reviews"/>
        <Router>
            <main class="container">
                <Routes>
                    <Route path="" view=RemoteFeedPage/>
                    <Route path="/home" view=SampleFeedPage/>
                </Routes>
            </main>
            <nav class="tab-bar">
                <A href="/" exact=true>{ "Feed" }</A>
                <A href="/home">{ "Home" }</A>
            </nav>
        </Router>
    }
}

#[component]
fn RemoteFeedPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    view! { <ReviewFeedScreen source=FeedSource::Remote(config) on_submit=log_submission /> }
}

#[component]
fn SampleFeedPage() -> impl IntoView {
    view! { <ReviewFeedScreen source=FeedSource::Sample on_submit=log_submission /> }
}
