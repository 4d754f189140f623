//! Supra Wallet Demo - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::Navbar;
use crate::pages::{
    BalancePage, ConnectPage, NetworkPage, SignMessagePage, TransferPage, ViewFunctionPage,
};
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    provide_wallet_context();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=ConnectPage/>
                    <Route path=path!("/balance") view=BalancePage/>
                    <Route path=path!("/sign") view=SignMessagePage/>
                    <Route path=path!("/network") view=NetworkPage/>
                    <Route path=path!("/transfer") view=TransferPage/>
                    <Route path=path!("/view") view=ViewFunctionPage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="card" style="max-width: 500px; margin: 40px auto; text-align: center;">
            <h1 style="margin-bottom: 16px; font-size: 32px; font-weight: 700;">"404 - Page Not Found"</h1>
            <p style="margin-bottom: 24px;">"The page you're looking for doesn't exist."</p>
            <A href="/">
                <span class="btn" style="display: inline-block;">"Go to Home"</span>
            </A>
        </div>
    }
}
