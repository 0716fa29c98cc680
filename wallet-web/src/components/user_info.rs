//! Connected user line

use leptos::prelude::*;

#[component]
pub fn ConnectedUserInfo(username: String) -> impl IntoView {
    view! {
        <div class="user-info">
            <span class="user-avatar">"👤"</span>
            <span class="user-name">{username}</span>
        </div>
    }
}
