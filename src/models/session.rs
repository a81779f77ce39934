use serde::{Deserialize, Serialize};

use crate::models::User;

/// The single active-login record for this profile.
///
/// `is_authenticated` is true exactly when `user` is present. Build sessions
/// through [`Session::authenticated`] and [`Session::anonymous`] so the two
/// fields never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

impl Session {
    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            user: None,
            is_authenticated: false,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_anonymous() {
        let session = Session::default();
        assert!(session.user.is_none());
        assert!(!session.is_authenticated);
    }

    #[test]
    fn test_constructors_keep_fields_in_sync() {
        let user = User {
            id: "1".to_string(),
            email: "a@x.com".to_string(),
            display_name: "Ann".to_string(),
        };
        let session = Session::authenticated(user);
        assert_eq!(session.is_authenticated, session.user.is_some());

        let session = Session::anonymous();
        assert_eq!(session.is_authenticated, session.user.is_some());
    }

    #[test]
    fn test_serialized_shape_is_camel_case() {
        let json = serde_json::to_string(&Session::anonymous()).unwrap();
        assert_eq!(json, "{\"user\":null,\"isAuthenticated\":false}");
    }
}
