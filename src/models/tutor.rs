use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutor {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl Tutor {
    /// Name with the optional honorific, e.g. "Dr. Charles Xavier"
    pub fn display_name(&self) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => {
                format!("{title} {} {}", self.first_name, self.last_name)
            }
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tutor_without_title() {
        let json = r#"{"id": 2, "first_name": "Jean", "last_name": "Grey", "email": "grey@school.edu"}"#;
        let tutor: Tutor = serde_json::from_str(json).unwrap();
        assert_eq!(tutor.title, None);
        assert_eq!(tutor.display_name(), "Jean Grey");
    }

    #[test]
    fn test_tutor_with_title() {
        let json = r#"{"id": 1, "first_name": "Charles", "last_name": "Xavier", "email": "xavier@school.edu", "title": "Dr."}"#;
        let tutor: Tutor = serde_json::from_str(json).unwrap();
        assert_eq!(tutor.display_name(), "Dr. Charles Xavier");
    }
}
