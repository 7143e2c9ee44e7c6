//! Dialog State
//!
//! Create and edit dialogs, each either closed or open with its own draft.

use crate::model::{Draft, Field, User, UserId};

/// Which dialog a form input belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Create,
    Edit,
}

/// "Add user" dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateDialog {
    open: bool,
    draft: Draft,
}

impl CreateDialog {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Close and reset the draft (cancel, or after a successful create)
    pub fn close(&mut self) {
        self.open = false;
        self.draft.clear();
    }
}

/// "Edit user" dialog, open on one user at a time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditDialog {
    #[default]
    Closed,
    Open { id: UserId, draft: Draft },
}

impl EditDialog {
    pub fn is_open(&self) -> bool {
        matches!(self, EditDialog::Open { .. })
    }

    /// Open on `user`, seeding the draft with a copy of its fields
    pub fn open(&mut self, user: &User) {
        *self = EditDialog::Open {
            id: user.id.clone(),
            draft: Draft::from(user),
        };
    }

    pub fn target(&self) -> Option<&UserId> {
        match self {
            EditDialog::Open { id, .. } => Some(id),
            EditDialog::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            EditDialog::Open { draft, .. } => Some(draft),
            EditDialog::Closed => None,
        }
    }

    /// Returns `false` when there is no open draft to update
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        match self {
            EditDialog::Open { draft, .. } => {
                draft.set(field, value);
                true
            }
            EditDialog::Closed => false,
        }
    }

    pub fn close(&mut self) {
        *self = EditDialog::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dialog_lifecycle() {
        let mut dialog = CreateDialog::default();
        assert!(!dialog.is_open());

        dialog.open();
        dialog.set_field(Field::Name, "Ana");
        dialog.set_field(Field::Email, "ana@x.com");
        assert!(dialog.is_open());
        assert_eq!(dialog.draft(), &Draft::new("Ana", "ana@x.com"));

        dialog.close();
        assert!(!dialog.is_open());
        assert_eq!(dialog.draft(), &Draft::default());
    }

    #[test]
    fn test_edit_dialog_seeds_copy() {
        let user = User::new(7, "Ana", "ana@x.com");
        let mut dialog = EditDialog::default();
        dialog.open(&user);

        assert_eq!(dialog.target(), Some(&UserId::from(7)));
        assert!(dialog.set_field(Field::Name, "Ana B."));
        assert_eq!(dialog.draft(), Some(&Draft::new("Ana B.", "ana@x.com")));
        assert_eq!(user.name, "Ana");
    }

    #[test]
    fn test_edit_dialog_closed_ignores_input() {
        let mut dialog = EditDialog::default();
        assert!(!dialog.set_field(Field::Email, "x@x.com"));
        assert_eq!(dialog, EditDialog::Closed);
        assert!(dialog.draft().is_none());
    }

    #[test]
    fn test_edit_dialog_reopen_switches_target() {
        let mut dialog = EditDialog::default();
        dialog.open(&User::new(1, "Ana", "ana@x.com"));
        dialog.set_field(Field::Name, "typed");
        dialog.open(&User::new(2, "Bo", "bo@x.com"));
        assert_eq!(dialog.target(), Some(&UserId::from(2)));
        assert_eq!(dialog.draft(), Some(&Draft::new("Bo", "bo@x.com")));

        dialog.close();
        assert!(!dialog.is_open());
    }
}
