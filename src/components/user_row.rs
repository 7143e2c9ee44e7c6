//! User Row Component

use leptos::prelude::*;
use user_manager_core::{Msg, User};

use crate::context::use_app_context;

/// One user with its edit and delete actions
#[component]
pub fn UserRow(user: User) -> impl IntoView {
    let ctx = use_app_context();
    let edit_id = user.id.clone();
    let delete_id = user.id.clone();

    view! {
        <tr>
            <td>{user.name}</td>
            <td>{user.email}</td>
            <td class="align-right">
                <button
                    class="icon-btn"
                    aria-label="edit"
                    title="Edit"
                    on:click=move |_| ctx.dispatch(Msg::EditUser(edit_id.clone()))
                >
                    "✎"
                </button>
                <button
                    class="icon-btn"
                    aria-label="delete"
                    title="Delete"
                    on:click=move |_| ctx.dispatch(Msg::DeleteUser(delete_id.clone()))
                >
                    "🗑"
                </button>
            </td>
        </tr>
    }
}
