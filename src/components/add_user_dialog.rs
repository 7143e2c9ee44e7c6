//! Add User Dialog

use leptos::prelude::*;
use user_manager_core::{FormKind, Msg};

use crate::components::{DraftFields, Modal};
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// Dialog for creating a user from the create draft
#[component]
pub fn AddUserDialog() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let open = Signal::derive(move || store.manager().read().create_dialog().is_open());

    view! {
        <Modal
            open=open
            title="Add a New User"
            text="Please enter the details for the new user."
            on_close=move |()| ctx.dispatch(Msg::CancelCreate)
        >
            <DraftFields form=FormKind::Create />
            <div class="dialog-actions">
                <button class="btn btn-secondary" on:click=move |_| ctx.dispatch(Msg::CancelCreate)>
                    "Cancel"
                </button>
                <button class="btn btn-primary" on:click=move |_| ctx.dispatch(Msg::SubmitCreate)>
                    "Add"
                </button>
            </div>
        </Modal>
    }
}
