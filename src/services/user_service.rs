// ==================== USER SERVICE ====================
// Contrato entre a camada HTTP e a persistência + implementação MongoDB

use async_trait::async_trait;
use futures::stream::StreamExt;
use mongodb::bson::{doc, Document};
use mongodb::Collection;

use crate::{
    database::MongoDB,
    models::User,
    utils::{deadline::Deadline, error::AppError},
};

#[async_trait]
pub trait UserService: Send + Sync {
    async fn create_user(&self, user: &User, deadline: &Deadline) -> Result<(), AppError>;

    async fn get_user(&self, name: &str, deadline: &Deadline) -> Result<User, AppError>;

    /// Todos os documentos, na ordem retornada pelo banco
    async fn get_all(&self, deadline: &Deadline) -> Result<Vec<User>, AppError>;

    /// Localiza por `name` e substitui name/age/address pelos valores de `user`
    async fn update_user(&self, name: &str, user: &User, deadline: &Deadline) -> Result<(), AppError>;

    async fn delete_user(&self, name: &str, deadline: &Deadline) -> Result<(), AppError>;
}

pub(crate) fn user_not_found(name: &str) -> AppError {
    AppError::NotFound(format!("user '{}' does not exist", name))
}

fn name_filter(name: &str) -> Document {
    doc! { "name": name }
}

fn replacement_update(user: &User) -> Result<Document, AppError> {
    Ok(doc! {
        "$set": {
            "name": &user.name,
            "address": mongodb::bson::to_bson(&user.address)?,
            "age": user.age,
        }
    })
}

pub struct MongoUserService {
    users: Collection<User>,
}

impl MongoUserService {
    pub fn new(db: &MongoDB, collection: &str) -> Self {
        Self { users: db.collection::<User>(collection) }
    }
}

#[async_trait]
impl UserService for MongoUserService {
    async fn create_user(&self, user: &User, deadline: &Deadline) -> Result<(), AppError> {
        deadline
            .run(async {
                self.users.insert_one(user).await?;
                Ok::<_, AppError>(())
            })
            .await
    }

    async fn get_user(&self, name: &str, deadline: &Deadline) -> Result<User, AppError> {
        deadline
            .run(async {
                self.users
                    .find_one(name_filter(name))
                    .await?
                    .ok_or_else(|| user_not_found(name))
            })
            .await
    }

    async fn get_all(&self, deadline: &Deadline) -> Result<Vec<User>, AppError> {
        deadline
            .run(async {
                let mut cursor = self.users.find(doc! {}).await?;
                let mut users = Vec::new();

                // Falha de decode no meio aborta e descarta o parcial
                while let Some(result) = cursor.next().await {
                    users.push(result?);
                }
                Ok::<_, AppError>(users)
            })
            .await
    }

    async fn update_user(&self, name: &str, user: &User, deadline: &Deadline) -> Result<(), AppError> {
        let update = replacement_update(user)?;
        deadline
            .run(async {
                let result = self.users.update_one(name_filter(name), update).await?;
                if result.matched_count == 0 {
                    return Err(user_not_found(name));
                }
                Ok::<_, AppError>(())
            })
            .await
    }

    async fn delete_user(&self, name: &str, deadline: &Deadline) -> Result<(), AppError> {
        deadline
            .run(async {
                let result = self.users.delete_one(name_filter(name)).await?;
                if result.deleted_count == 0 {
                    return Err(user_not_found(name));
                }
                Ok::<_, AppError>(())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Address;
    use std::time::Duration;

    fn sample_user(name: &str) -> User {
        User {
            name: name.to_string(),
            age: 21,
            address: Address { city: "Vapi".into(), state: "Gujarat".into(), pincode: 396191 },
        }
    }

    #[test]
    fn test_name_filter() {
        assert_eq!(name_filter("Aaditya"), doc! { "name": "Aaditya" });
    }

    #[test]
    fn test_replacement_update_sets_all_fields() {
        let update = replacement_update(&sample_user("Aaditya")).unwrap();
        let set = update.get_document("$set").unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.get_str("name").unwrap(), "Aaditya");
        assert_eq!(set.get_i32("age").unwrap(), 21);
        assert_eq!(
            set.get_document("address").unwrap(),
            &doc! { "city": "Vapi", "state": "Gujarat", "pincode": 396191_i64 }
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            user_not_found("ghost").to_string(),
            "Not found: user 'ghost' does not exist"
        );
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongo_crud_cycle() {
        dotenv::dotenv().ok();
        let uri = std::env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let db = MongoDB::new(&uri, "userCrudApp_test").await.unwrap();
        let service = MongoUserService::new(&db, "users_crud_cycle");
        let deadline = Deadline::after(Duration::from_secs(10));
        db.collection::<Document>("users_crud_cycle").drop().await.unwrap();

        let user = sample_user("Aaditya");
        service.create_user(&user, &deadline).await.unwrap();
        assert_eq!(service.get_user("Aaditya", &deadline).await.unwrap(), user);
        assert_eq!(service.get_all(&deadline).await.unwrap(), vec![user.clone()]);

        let mut older = user.clone();
        older.age = 22;
        service.update_user("Aaditya", &older, &deadline).await.unwrap();
        assert_eq!(service.get_user("Aaditya", &deadline).await.unwrap().age, 22);

        service.delete_user("Aaditya", &deadline).await.unwrap();
        assert!(matches!(service.delete_user("Aaditya", &deadline).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.update_user("Aaditya", &older, &deadline).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.get_user("Aaditya", &deadline).await, Err(AppError::NotFound(_))));
    }
}
