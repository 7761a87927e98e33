//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use common::{AppError, AppResult};
use domain::{Email, User, UserId, UserName};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity.
///
/// Stored values go back through the value object constructors, so a row
/// that no longer satisfies the domain rules is reported instead of loaded.
impl TryFrom<Model> for User {
    type Error = AppError;

    fn try_from(model: Model) -> AppResult<Self> {
        let corrupt = |e: domain::DomainError| {
            AppError::internal(format!("Stored user {} is invalid: {}", model.id, e))
        };

        let id = UserId::new(model.id.clone()).map_err(corrupt)?;
        let name = UserName::new(model.name.clone()).map_err(corrupt)?;
        let email = Email::new(model.email.clone()).map_err(corrupt)?;

        Ok(User::restore(id, name, email))
    }
}
