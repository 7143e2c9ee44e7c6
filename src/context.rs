//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use user_manager_core::{execute, update, Command, HttpUserStore, Msg};

use crate::store::{AppStateStoreFields, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    /// Users API client (not `Send` on wasm, so kept in local storage)
    client: StoredValue<HttpUserStore, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, client: HttpUserStore) -> Self {
        Self {
            store,
            client: StoredValue::new_local(client),
        }
    }

    /// Feed a message through the reducer and start whatever request it asks for
    pub fn dispatch(&self, msg: Msg) {
        let command = update(&mut self.store.manager().write(), msg);
        if let Some(command) = command {
            self.run(command);
        }
    }

    /// Run a request in the background. Nothing waits for it and nothing is
    /// disabled meanwhile; its outcome is dispatched when it resolves.
    fn run(&self, command: Command) {
        let ctx = *self;
        *ctx.store.in_flight().write() += 1;
        spawn_local(async move {
            let client = ctx.client.get_value();
            let outcome = execute(&client, command).await;
            {
                let in_flight_field = ctx.store.in_flight();
                let mut in_flight = in_flight_field.write();
                *in_flight = in_flight.saturating_sub(1);
            }
            ctx.dispatch(Msg::Completed(outcome));
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
