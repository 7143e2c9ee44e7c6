//! User Manager App
//!
//! Single screen: toolbar, users table and the add/edit dialogs.

use leptos::prelude::*;
use reactive_stores::Store;
use user_manager_core::{ClientConfig, HttpUserStore, Msg};

use crate::components::{AddUserDialog, EditUserDialog, UserTable};
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new(store, HttpUserStore::new(config));
    provide_context(ctx);

    // Load users on mount
    Effect::new(move |_| {
        ctx.dispatch(Msg::Load);
    });

    view! {
        <main class="container">
            <h1 class="title">"User Management"</h1>

            <div class="toolbar">
                <button class="btn btn-primary" on:click=move |_| ctx.dispatch(Msg::AddUser)>
                    "Add User"
                </button>
                <AddUserDialog />
            </div>

            <h2 class="subtitle">"Users List"</h2>
            <UserTable />

            <EditUserDialog />
        </main>
    }
}
