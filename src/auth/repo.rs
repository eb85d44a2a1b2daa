use crate::auth::repo_types::User;

impl User {
    /// Find the first user with this exact username.
    pub fn find_by_username<'a>(users: &'a [User], username: &str) -> Option<&'a User> {
        users.iter().find(|u| u.username == username)
    }

    /// Append a new user with an already hashed password.
    pub fn create<'a>(users: &'a mut Vec<User>, username: &str, password_hash: &str) -> &'a User {
        users.push(User::new(username, password_hash));
        &users[users.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_returns_first_exact_match() {
        let users = vec![
            User::new("alice", "h1"),
            User::new("bob", "h2"),
            User::new("alice", "h3"),
        ];
        let found = User::find_by_username(&users, "alice").expect("alice should exist");
        assert_eq!(found.password, "h1");
        assert!(User::find_by_username(&users, "Alice").is_none());
        assert!(User::find_by_username(&users, "carol").is_none());
    }

    #[test]
    fn create_appends() {
        let mut users = vec![User::new("alice", "h1")];
        let created = User::create(&mut users, "bob", "h2");
        assert_eq!(created.username, "bob");
        assert_eq!(users.len(), 2);
        assert_eq!(users[1], User::new("bob", "h2"));
    }
}
