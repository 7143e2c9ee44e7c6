//! User Manager Core
//!
//! Everything behind the user manager screen that does not touch the DOM:
//! - model: users, ids and drafts
//! - client: the users REST API behind the `UserStore` trait
//! - cache: the local list the table renders from
//! - dialog / reducer: form state and the single state-reducing function

mod cache;
mod client;
mod config;
mod dialog;
mod error;
mod model;
mod reducer;


pub use cache::UserList;
pub use client::{HttpUserStore, UserStore};
pub use config::{ClientConfig, DEFAULT_API_ORIGIN};
pub use dialog::{CreateDialog, EditDialog, FormKind};
pub use error::{ConfigError, StoreError, StoreResult, UnknownField};
pub use model::{Draft, Field, User, UserId};
pub use reducer::{dispatch, execute, update, Command, ManagerState, Msg, Operation, Outcome};
