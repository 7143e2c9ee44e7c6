//! Edit User Dialog
//!
//! Shown only while a user is being edited. Typing changes the edit draft,
//! never the row itself; the row is replaced once the server confirms.

use leptos::prelude::*;
use user_manager_core::{FormKind, Msg};

use crate::components::{DraftFields, Modal};
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn EditUserDialog() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let editing = Signal::derive(move || store.manager().read().edit_dialog().is_open());

    view! {
        <Modal
            open=editing
            title="Edit User"
            text="Please update the details for the user."
            on_close=move |()| ctx.dispatch(Msg::CancelEdit)
        >
            <DraftFields form=FormKind::Edit />
            <div class="dialog-actions">
                <button class="btn btn-secondary" on:click=move |_| ctx.dispatch(Msg::CancelEdit)>
                    "Cancel"
                </button>
                <button class="btn btn-primary" on:click=move |_| ctx.dispatch(Msg::SubmitEdit)>
                    "Save"
                </button>
            </div>
        </Modal>
    }
}
