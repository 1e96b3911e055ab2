// Test double em memória para os handlers HTTP (mesma semântica do MongoUserService)

use async_trait::async_trait;
use std::sync::Mutex;

use crate::{
    models::User,
    services::user_service::{user_not_found, UserService},
    utils::{deadline::Deadline, error::AppError},
};

#[derive(Default)]
pub struct InMemoryUserService {
    users: Mutex<Vec<User>>,
    failure: Option<String>,
}

impl InMemoryUserService {
    pub fn with_users(users: Vec<User>) -> Self {
        Self { users: Mutex::new(users), failure: None }
    }

    /// Toda operação falha com `AppError::DatabaseError(message)`
    pub fn failing(message: &str) -> Self {
        Self { users: Mutex::default(), failure: Some(message.to_string()) }
    }

    fn check(&self, deadline: &Deadline) -> Result<(), AppError> {
        if let Some(message) = &self.failure {
            return Err(AppError::DatabaseError(message.clone()));
        }
        if deadline.is_expired() {
            return Err(AppError::Timeout("request deadline exceeded".into()));
        }
        Ok(())
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserService for InMemoryUserService {
    async fn create_user(&self, user: &User, deadline: &Deadline) -> Result<(), AppError> {
        self.check(deadline)?;
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn get_user(&self, name: &str, deadline: &Deadline) -> Result<User, AppError> {
        self.check(deadline)?;
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.name == name)
            .cloned()
            .ok_or_else(|| user_not_found(name))
    }

    async fn get_all(&self, deadline: &Deadline) -> Result<Vec<User>, AppError> {
        self.check(deadline)?;
        Ok(self.snapshot())
    }

    async fn update_user(&self, name: &str, user: &User, deadline: &Deadline) -> Result<(), AppError> {
        self.check(deadline)?;
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.name == name) {
            Some(existing) => {
                *existing = user.clone();
                Ok(())
            }
            None => Err(user_not_found(name)),
        }
    }

    async fn delete_user(&self, name: &str, deadline: &Deadline) -> Result<(), AppError> {
        self.check(deadline)?;
        let mut users = self.users.lock().unwrap();
        match users.iter().position(|u| u.name == name) {
            Some(idx) => {
                users.remove(idx);
                Ok(())
            }
            None => Err(user_not_found(name)),
        }
    }
}
