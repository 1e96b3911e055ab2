use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Endereço embutido no documento do usuário (sem identidade própria)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct Address {
    #[schema(example = "Vapi")]
    pub city: String,
    #[schema(example = "Gujarat")]
    pub state: String,
    #[schema(example = 396191)]
    pub pincode: i64,
}

/// Usuário armazenado na coleção `users`.
/// `name` é a chave de busca por convenção (sem índice único).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    #[schema(example = "Aaditya")]
    pub name: String,
    #[schema(example = 21)]
    pub age: i32,
    pub address: Address,
}

/// Resposta padrão com apenas uma mensagem
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_json_shape() {
        let raw = r#"{"name":"Aaditya","age":21,"address":{"city":"Vapi","state":"Gujarat","pincode":396191}}"#;
        let user: User = serde_json::from_str(raw).unwrap();

        assert_eq!(user.name, "Aaditya");
        assert_eq!(user.age, 21);
        assert_eq!(user.address.pincode, 396191);
        assert_eq!(serde_json::to_string(&user).unwrap(), raw);
    }

    #[test]
    fn test_user_rejects_missing_address() {
        let result = serde_json::from_str::<User>(r#"{"name":"Aaditya","age":21}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_user_rejects_string_age() {
        let raw = r#"{"name":"Aaditya","age":"21","address":{"city":"Vapi","state":"Gujarat","pincode":396191}}"#;
        assert!(serde_json::from_str::<User>(raw).is_err());
    }

    #[test]
    fn test_user_bson_uses_json_field_names() {
        let user = User {
            name: "Aaditya".into(),
            age: 21,
            address: Address { city: "Vapi".into(), state: "Gujarat".into(), pincode: 396191 },
        };
        let doc = mongodb::bson::to_document(&user).unwrap();

        assert_eq!(doc.get_str("name").unwrap(), "Aaditya");
        assert_eq!(doc.get_i32("age").unwrap(), 21);
        let address = doc.get_document("address").unwrap();
        assert_eq!(address.get_str("city").unwrap(), "Vapi");
        assert_eq!(address.get_i64("pincode").unwrap(), 396191);
    }
}
