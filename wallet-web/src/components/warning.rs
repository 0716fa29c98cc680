//! Warning banner for failed connections and signing

use leptos::prelude::*;

#[component]
pub fn WarningBanner(text: String) -> impl IntoView {
    view! {
        <div class="error warning-banner" role="alert">
            <span class="warning-icon">"⚠"</span>
            <p>{text}</p>
        </div>
    }
}
