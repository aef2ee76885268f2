use serde::{Deserialize, Serialize};

/// Breed name as given by the caller. No trimming or case folding is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BreedQuery(String);

impl BreedQuery {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BreedQuery {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for BreedQuery {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for BreedQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sub-breeds in the order the service listed them.
pub type SubBreedList = Vec<String>;

/// `{"status": ..., "message": ...}` payload of the breed-listing service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceResponse {
    pub status: Option<String>,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Message {
    List(Vec<String>),
    Text(String),
}

impl ServiceResponse {
    pub const ERROR_STATUS: &'static str = "error";

    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some(Self::ERROR_STATUS)
    }

    /// The sub-breed list, or `None` when the message is not an array of strings.
    pub fn into_sub_breeds(self) -> Option<SubBreedList> {
        match self.message {
            Some(Message::List(items)) => Some(items),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> ServiceResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_success_payload_keeps_order() {
        let response = parse(r#"{"status":"success","message":["afghan","basset","blood"]}"#);
        assert!(!response.is_error());
        assert_eq!(
            response.into_sub_breeds(),
            Some(vec!["afghan".to_string(), "basset".to_string(), "blood".to_string()])
        );
    }

    #[test]
    fn test_error_payload() {
        let response = parse(r#"{"status":"error","message":"Breed not found","code":404}"#);
        assert!(response.is_error());
        assert_eq!(response.message, Some(Message::Text("Breed not found".to_string())));
    }

    #[test]
    fn test_missing_fields_decode_as_none() {
        let response = parse("{}");
        assert!(!response.is_error());
        assert_eq!(response.into_sub_breeds(), None);
    }

    #[test]
    fn test_mixed_array_is_rejected() {
        assert!(serde_json::from_str::<ServiceResponse>(r#"{"message":["a",1]}"#).is_err());
    }

    #[test]
    fn test_breed_query_is_not_normalized() {
        let query = BreedQuery::from(" Husky ");
        assert_eq!(query.as_str(), " Husky ");
        assert_eq!(query.to_string(), " Husky ");
    }
}
