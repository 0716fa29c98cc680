//! Secret Permit Wallet Web App - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::components::Navbar;
use crate::config::{provide_app_config, AppConfig};
use crate::pages::WalletSection;
use crate::state::chain::chain_info;
use crate::state::wallet::provide_session_context;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let config = provide_app_config(config);
    provide_session_context(chain_info(&config.chain_name));

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=WalletSection/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 style="color: #ffffff; margin-bottom: 16px; font-size: 32px; font-weight: 700;">"404 - Page Not Found"</h1>
                <A href="/">
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Go to Wallet"
                    </span>
                </A>
            </div>
        </div>
    }
}
