//! Intent Reducer
//!
//! Every user action and every finished request is a [`Msg`] fed through
//! [`update`], the only function that mutates [`ManagerState`]. Actions that
//! need the server return a [`Command`]; the caller runs it with [`execute`]
//! whenever it likes and feeds the resulting [`Outcome`] back in. Commands
//! may be in flight concurrently and their outcomes apply in arrival order.

use std::fmt;

use crate::cache::UserList;
use crate::client::UserStore;
use crate::dialog::{CreateDialog, EditDialog, FormKind};
use crate::error::StoreError;
use crate::model::{Draft, Field, User, UserId};

/// Everything the user manager screen holds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManagerState {
    users: UserList,
    create: CreateDialog,
    edit: EditDialog,
}

impl ManagerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &UserList {
        &self.users
    }

    pub fn create_dialog(&self) -> &CreateDialog {
        &self.create
    }

    pub fn edit_dialog(&self) -> &EditDialog {
        &self.edit
    }

    /// Current text of a form field; empty for a closed edit dialog
    pub fn field_value(&self, form: FormKind, field: Field) -> &str {
        match form {
            FormKind::Create => self.create.draft().get(field),
            FormKind::Edit => self.edit.draft().map_or("", |draft| draft.get(field)),
        }
    }

    /// Back to the freshly mounted state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Intents and request outcomes
#[derive(Debug)]
pub enum Msg {
    /// Fetch the full list (on mount, or to refresh)
    Load,
    /// Open the create dialog
    AddUser,
    CancelCreate,
    /// Open the edit dialog on a cached user
    EditUser(UserId),
    CancelEdit,
    /// Generic field update for either draft
    Input {
        form: FormKind,
        field: Field,
        value: String,
    },
    SubmitCreate,
    SubmitEdit,
    DeleteUser(UserId),
    /// A command finished
    Completed(Outcome),
}

/// Remote request to issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Create(Draft),
    Update(UserId, Draft),
    Delete(UserId),
}

impl Command {
    pub fn operation(&self) -> Operation {
        match self {
            Command::List => Operation::List,
            Command::Create(_) => Operation::Create,
            Command::Update(..) => Operation::Update,
            Command::Delete(_) => Operation::Delete,
        }
    }
}

/// Kind of remote operation, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::List => "fetching users",
            Operation::Create => "adding user",
            Operation::Update => "updating user",
            Operation::Delete => "deleting user",
        })
    }
}

/// Result of running a [`Command`]
#[derive(Debug)]
pub enum Outcome {
    Listed(Vec<User>),
    Created(User),
    /// `id` is the id the update was sent for
    Updated { id: UserId, user: User },
    Deleted(UserId),
    Failed { operation: Operation, error: StoreError },
}

/// Apply one message to the state, returning the request it calls for.
pub fn update(state: &mut ManagerState, msg: Msg) -> Option<Command> {
    match msg {
        Msg::Load => Some(Command::List),

        Msg::AddUser => {
            state.create.open();
            None
        }

        Msg::CancelCreate => {
            state.create.close();
            None
        }

        Msg::EditUser(id) => {
            match state.users.get(&id) {
                Some(user) => state.edit.open(user),
                None => log::warn!("[UserManager] Cannot edit user {}: not in the list", id),
            }
            None
        }

        Msg::CancelEdit => {
            state.edit.close();
            None
        }

        Msg::Input { form, field, value } => {
            match form {
                FormKind::Create => state.create.set_field(field, value),
                FormKind::Edit => {
                    if !state.edit.set_field(field, value) {
                        log::debug!("[UserManager] Ignoring {} input, edit dialog is closed", field);
                    }
                }
            }
            None
        }

        Msg::SubmitCreate => {
            if !state.create.is_open() {
                log::debug!("[UserManager] Ignoring create submit, dialog is closed");
                return None;
            }
            Some(Command::Create(state.create.draft().clone()))
        }

        Msg::SubmitEdit => match &state.edit {
            EditDialog::Open { id, draft } => Some(Command::Update(id.clone(), draft.clone())),
            EditDialog::Closed => {
                log::debug!("[UserManager] Ignoring edit submit, dialog is closed");
                None
            }
        },

        Msg::DeleteUser(id) => Some(Command::Delete(id)),

        Msg::Completed(outcome) => {
            apply(state, outcome);
            None
        }
    }
}

fn apply(state: &mut ManagerState, outcome: Outcome) {
    match outcome {
        Outcome::Listed(users) => {
            log::info!("[UserManager] Loaded {} users", users.len());
            state.users.replace_all(users);
        }
        Outcome::Created(user) => {
            state.users.append(user);
            state.create.close();
        }
        Outcome::Updated { id, user } => {
            if !state.users.replace(&id, user) {
                log::warn!("[UserManager] Updated user {} is no longer in the list", id);
            }
            if state.edit.target() == Some(&id) {
                state.edit.close();
            }
        }
        Outcome::Deleted(id) => {
            state.users.remove(&id);
        }
        Outcome::Failed { operation, error } => {
            log::error!("Error {}: {}", operation, error);
        }
    }
}

/// Run a command against the store, folding any error into the outcome.
pub async fn execute<S>(store: &S, command: Command) -> Outcome
where
    S: UserStore + ?Sized,
{
    let operation = command.operation();
    let result = match command {
        Command::List => store.list().await.map(Outcome::Listed),
        Command::Create(draft) => store.create(&draft).await.map(Outcome::Created),
        Command::Update(id, draft) => {
            let result = store.update(&id, &draft).await;
            result.map(|user| Outcome::Updated { id, user })
        }
        Command::Delete(id) => {
            let result = store.delete(&id).await;
            result.map(|()| Outcome::Deleted(id))
        }
    };
    result.unwrap_or_else(|error| Outcome::Failed { operation, error })
}

/// Update, run the resulting command (if any) to completion, and apply its outcome.
pub async fn dispatch<S>(state: &mut ManagerState, store: &S, msg: Msg)
where
    S: UserStore + ?Sized,
{
    if let Some(command) = update(state, msg) {
        let outcome = execute(store, command).await;
        update(state, Msg::Completed(outcome));
    }
}
