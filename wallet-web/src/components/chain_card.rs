//! Chain Card Component

use leptos::prelude::*;

use crate::state::chain::ChainDescriptor;

#[component]
pub fn ChainCard(chain: ChainDescriptor) -> impl IntoView {
    let title = chain.title().to_string();
    let alt = chain.label.clone();

    view! {
        <div class="chain-card">
            {chain.icon.map(|icon| view! {
                <img class="chain-icon" src=icon alt=alt width="32" height="32"/>
            })}
            <span class="chain-name">{title}</span>
        </div>
    }
}
