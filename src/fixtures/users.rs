//! User and credential fixtures

/// Access level attached to a mock user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Editor,
    Viewer,
}

impl UserRole {
    /// Display label for badges and table cells
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Editor => "editor",
            UserRole::Viewer => "viewer",
        }
    }
}

/// A mock user record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub role: UserRole,
}

impl User {
    /// Initials used by avatar stories when no image is available
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect()
    }
}

/// A mock credential pair for login stories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials {
    pub email: &'static str,
    pub password: &'static str,
}

static USERS: &[User] = &[
    User {
        id: "user-1",
        name: "Jane Doe",
        email: "jane@example.com",
        role: UserRole::Admin,
    },
    User {
        id: "user-2",
        name: "John Smith",
        email: "john@example.com",
        role: UserRole::Editor,
    },
    User {
        id: "user-3",
        name: "Emily Chen",
        email: "emily@example.com",
        role: UserRole::Viewer,
    },
];

/// The primary mock user
pub fn mock_user() -> &'static User {
    &USERS[0]
}

/// All mock users
pub fn mock_users() -> &'static [User] {
    USERS
}

/// Login credentials matching the primary mock user
pub fn mock_credentials() -> Credentials {
    Credentials {
        email: "jane@example.com",
        password: "password123",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_ids_are_distinct() {
        let mut ids: Vec<_> = mock_users().iter().map(|u| u.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), mock_users().len());
    }

    #[test]
    fn credentials_match_primary_user() {
        assert_eq!(mock_credentials().email, mock_user().email);
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(mock_user().initials(), "JD");
    }
}
