//! Modal Dialog Component
//!
//! Dialog shell with title, helper text and arbitrary content. Clicking the
//! backdrop or pressing Escape anywhere in the window while the dialog is
//! shown calls `on_close`.

use leptos::ev;
use leptos::prelude::*;

/// Keys that dismiss an open dialog ("Esc" is the legacy Edge name)
fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Modal dialog shell
///
/// # Arguments
/// * `open` - Whether the dialog is shown
/// * `title` - Heading text
/// * `text` - Helper text shown above the content
/// * `on_close` - Called on backdrop click or Escape
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] text: String,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    // Escape counts wherever focus is
    let handle = window_event_listener(ev::keydown, move |ev| {
        if open.get_untracked() && is_dismiss_key(&ev.key()) {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="dialog"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    <h2 class="dialog-title">{title.clone()}</h2>
                    <div class="dialog-content">
                        <p class="dialog-text">{text.clone()}</p>
                        {children()}
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_dismisses() {
        assert!(is_dismiss_key("Escape"));
        assert!(is_dismiss_key("Esc"));
    }

    #[test]
    fn test_other_keys_keep_dialog_open() {
        for key in ["Enter", "e", "Tab", " ", "escape"] {
            assert!(!is_dismiss_key(key), "key: {key:?}");
        }
    }
}
