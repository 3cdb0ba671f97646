use serde::Serialize;

/// Read-only identity record handed to display layers.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
}

// TODO: replace with a real session lookup once sign-in exists.
pub fn current_user() -> UserInfo {
    UserInfo {
        id: "u1".into(),
        name: "Andrian Kusuma".into(),
        email: "budi@example.com".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_identity_is_stable() {
        let user = current_user();
        assert_eq!(user.id, "u1");
        assert_eq!(user, current_user());
    }
}
