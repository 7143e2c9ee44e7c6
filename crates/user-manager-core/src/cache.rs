//! Local List Cache
//!
//! The ordered user list the table renders from. It only changes after the
//! server confirmed an operation, and keeps server order followed by local
//! append order; nothing here sorts.

use crate::model::{User, UserId};

/// Ordered users with unique ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserList {
    users: Vec<User>,
}

impl UserList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a server listing. Repeated ids keep their first occurrence.
    pub fn from_server(users: Vec<User>) -> Self {
        let mut list = Self::new();
        list.replace_all(users);
        list
    }

    /// Replace the whole list with a fresh listing (no diffing)
    pub fn replace_all(&mut self, users: Vec<User>) {
        self.users.clear();
        for user in users {
            if self.contains(&user.id) {
                log::warn!("[UserList] Listing repeats id {}, keeping the first entry", user.id);
                continue;
            }
            self.users.push(user);
        }
    }

    /// Add a newly created user at the end.
    ///
    /// An id that is already present is replaced in place instead, so ids stay unique.
    pub fn append(&mut self, user: User) {
        if self.contains(&user.id) {
            log::warn!("[UserList] Created user reuses id {}, replacing in place", user.id);
            self.replace(&user.id.clone(), user);
            return;
        }
        self.users.push(user);
    }

    /// Replace the user whose id is `id`, keeping its position.
    ///
    /// Returns `false` (and changes nothing) when no user has that id. If the
    /// replacement carries a different id that another entry already holds,
    /// that other entry is dropped so ids stay unique.
    pub fn replace(&mut self, id: &UserId, user: User) -> bool {
        if !self.contains(id) {
            return false;
        }
        if &user.id != id {
            if let Some(clash) = self.position(&user.id) {
                log::warn!("[UserList] User {} came back as {}, dropping the other entry with that id", id, user.id);
                self.users.remove(clash);
            }
        }
        match self.position(id) {
            Some(slot) => {
                self.users[slot] = user;
                true
            }
            None => false,
        }
    }

    /// Remove the user with `id`; returns whether one was removed
    pub fn remove(&mut self, id: &UserId) -> bool {
        let before = self.users.len();
        self.users.retain(|user| &user.id != id);
        self.users.len() != before
    }

    fn position(&self, id: &UserId) -> Option<usize> {
        self.users.iter().position(|user| &user.id == id)
    }

    pub fn get(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|user| &user.id == id)
    }

    pub fn contains(&self, id: &UserId) -> bool {
        self.get(id).is_some()
    }

    pub fn as_slice(&self) -> &[User] {
        &self.users
    }

    pub fn iter(&self) -> std::slice::Iter<'_, User> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl<'a> IntoIterator for &'a UserList {
    type Item = &'a User;
    type IntoIter = std::slice::Iter<'a, User>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UserList {
        UserList::from_server(vec![
            User::new(1, "Ana", "ana@x.com"),
            User::new(2, "Bo", "bo@x.com"),
            User::new(3, "Cy", "cy@x.com"),
        ])
    }

    fn ids(list: &UserList) -> Vec<UserId> {
        list.iter().map(|user| user.id.clone()).collect()
    }

    #[test]
    fn test_append_goes_last() {
        let mut list = sample();
        list.append(User::new(7, "Dee", "dee@x.com"));
        assert_eq!(list.len(), 4);
        assert_eq!(list.as_slice().last(), Some(&User::new(7, "Dee", "dee@x.com")));
    }

    #[test]
    fn test_append_existing_id_replaces_in_place() {
        let mut list = sample();
        list.append(User::new(2, "Bo B.", "bo@y.com"));
        assert_eq!(list.len(), 3);
        assert_eq!(list.as_slice()[1], User::new(2, "Bo B.", "bo@y.com"));
    }

    #[test]
    fn test_replace_keeps_order_and_neighbours() {
        let mut list = sample();
        let before = list.clone();
        assert!(list.replace(&UserId::from(2), User::new(2, "Bo B.", "bo@x.com")));

        assert_eq!(ids(&list), ids(&before));
        assert_eq!(list.as_slice()[0], before.as_slice()[0]);
        assert_eq!(list.as_slice()[1].name, "Bo B.");
        assert_eq!(list.as_slice()[2], before.as_slice()[2]);
    }

    #[test]
    fn test_replace_unknown_id_is_noop() {
        let mut list = sample();
        let before = list.clone();
        assert!(!list.replace(&UserId::from(99), User::new(99, "Nobody", "")));
        assert_eq!(list, before);
    }

    #[test]
    fn test_replace_with_id_of_another_entry_keeps_ids_unique() {
        let mut list = sample();
        assert!(list.replace(&UserId::from(1), User::new(2, "Ana B.", "ana@x.com")));

        assert_eq!(ids(&list), vec![UserId::from(2), UserId::from(3)]);
        assert_eq!(list.as_slice()[0].name, "Ana B.");
    }

    #[test]
    fn test_replace_with_fresh_id_keeps_position() {
        let mut list = sample();
        assert!(list.replace(&UserId::from(2), User::new("b2", "Bo", "bo@x.com")));
        assert_eq!(ids(&list), vec![UserId::from(1), UserId::from("b2"), UserId::from(3)]);
    }

    #[test]
    fn test_remove_by_id() {
        let mut list = sample();
        assert!(list.remove(&UserId::from(1)));
        assert_eq!(list.len(), 2);
        assert!(!list.contains(&UserId::from(1)));
        assert!(!list.remove(&UserId::from(1)));
    }

    #[test]
    fn test_replace_all_does_not_sort_and_dedups() {
        let mut list = sample();
        list.replace_all(vec![
            User::new(9, "Zed", "z@x.com"),
            User::new(4, "Al", "al@x.com"),
            User::new(9, "Zed again", "z2@x.com"),
        ]);
        assert_eq!(ids(&list), vec![UserId::from(9), UserId::from(4)]);
        assert_eq!(list.get(&UserId::from(9)).map(|u| u.name.as_str()), Some("Zed"));
    }
}
