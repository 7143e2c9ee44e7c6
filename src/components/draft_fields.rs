//! Draft Fields Component
//!
//! Name and email inputs bound to one of the two drafts.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use user_manager_core::{Field, FormKind, Msg};

use crate::context::{use_app_context, AppContext};
use crate::store::AppStateStoreFields;

/// Inputs for every draft field. Each input's `name` attribute selects the
/// field it updates.
#[component]
pub fn DraftFields(form: FormKind) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    Field::ALL
        .into_iter()
        .enumerate()
        .map(move |(index, field)| {
            view! {
                <label class="field">
                    <span class="field-label">{field.label()}</span>
                    <input
                        type="text"
                        class="field-input"
                        name=field.as_str()
                        autofocus={index == 0}
                        prop:value=move || store.manager().read().field_value(form, field).to_owned()
                        on:input=move |ev| on_field_input(ctx, form, &ev)
                    />
                </label>
            }
        })
        .collect_view()
}

fn on_field_input(ctx: AppContext, form: FormKind, ev: &web_sys::Event) {
    let Some(input) = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
    else {
        return;
    };

    match input.name().parse::<Field>() {
        Ok(field) => ctx.dispatch(Msg::Input {
            form,
            field,
            value: input.value(),
        }),
        Err(e) => log::warn!("[DraftFields] {}", e),
    }
}
