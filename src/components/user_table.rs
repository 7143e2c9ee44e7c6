//! Users Table Component
//!
//! Renders the local user list in cache order.

use leptos::prelude::*;

use crate::components::UserRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// Users table with an empty-state row
#[component]
pub fn UserTable() -> impl IntoView {
    let store = use_app_store();

    // Draft keystrokes also write `manager`; the memos stop those from reaching the rows.
    let users = Memo::new(move |_| store.manager().read().users().as_slice().to_vec());
    let has_users = Memo::new(move |_| !store.manager().read().users().is_empty());
    let busy = move || if *store.in_flight().read() > 0 { "true" } else { "false" };

    view! {
        <div class="table-container">
            <table class="users-table" aria-busy=busy>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th class="align-right">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || has_users.get()
                        fallback=|| view! {
                            <tr>
                                <td colspan="3" class="align-center empty-row">"No users found."</td>
                            </tr>
                        }
                    >
                        // Key on the whole record so an in-place replacement re-renders its row
                        <For
                            each=move || users.get()
                            key=|user| user.clone()
                            children=move |user| view! { <UserRow user=user /> }
                        />
                    </Show>
                </tbody>
            </table>
        </div>
    }
}
