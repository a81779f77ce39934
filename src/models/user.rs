use serde::{Deserialize, Serialize};

/// A registered account profile.
///
/// `id` and `email` are assigned at signup and never change; only
/// `display_name` is mutable. Serialized field names are camelCase to match
/// the persisted JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub display_name: String,
}

impl User {
    /// Initials for avatar display: first letter of up to two name words,
    /// uppercased.
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User {
            id: "1700000000000".to_string(),
            email: "a@x.com".to_string(),
            display_name: name.to_string(),
        }
    }

    #[test]
    fn test_initials_two_words() {
        assert_eq!(user("Ann Smith").initials(), "AS");
    }

    #[test]
    fn test_initials_single_word() {
        assert_eq!(user("annie").initials(), "A");
    }

    #[test]
    fn test_initials_caps_at_two() {
        assert_eq!(user("Mary Jane Watson").initials(), "MJ");
    }

    #[test]
    fn test_initials_empty_name() {
        assert_eq!(user("").initials(), "");
    }

    #[test]
    fn test_serialized_shape_is_camel_case() {
        let json = serde_json::to_string(&user("Ann")).unwrap();
        assert!(json.contains("\"displayName\":\"Ann\""));
        assert!(!json.contains("display_name"));
    }
}
