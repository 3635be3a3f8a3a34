use sea_orm::{entity::prelude::*, DatabaseConnection, NotSet, QueryOrder, Set, SqlErr};
use serde::{Deserialize, Serialize};

use crate::{errors, worker};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub worker_id: i32,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub price_range: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Worker }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Worker => Entity::belongs_to(worker::Entity)
                .from(Column::WorkerId)
                .to(worker::Column::Id)
                .into(),
        }
    }
}

impl Related<worker::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Worker.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for common::Service {
    fn from(m: Model) -> Self {
        common::Service {
            id: m.id,
            worker_id: m.worker_id,
            title: m.title,
            description: m.description,
            price_range: m.price_range,
        }
    }
}

pub fn validate_title(title: &str) -> Result<(), errors::ModelError> {
    if title.trim().is_empty() {
        return Err(errors::ModelError::Validation("title is required".into()));
    }
    Ok(())
}

pub fn validate_worker_id(worker_id: i32) -> Result<(), errors::ModelError> {
    if worker_id <= 0 {
        return Err(errors::ModelError::Validation("worker_id must be a positive integer".into()));
    }
    Ok(())
}

pub fn validate(input: &common::NewService) -> Result<(), errors::ModelError> {
    validate_worker_id(input.worker_id)?;
    validate_title(&input.title)
}

fn is_foreign_key_violation(e: &DbErr) -> bool {
    matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
        || e.to_string().to_ascii_lowercase().contains("foreign key")
}

/// Insert a service. An unknown `worker_id` is rejected by the foreign key and
/// surfaces as a validation error.
pub async fn create(db: &DatabaseConnection, input: &common::NewService) -> Result<Model, errors::ModelError> {
    validate(input)?;
    let am = ActiveModel {
        id: NotSet,
        worker_id: Set(input.worker_id),
        title: Set(input.title.trim().to_string()),
        description: Set(input.description.trim().to_string()),
        price_range: Set(input.price_range.trim().to_string()),
    };
    am.insert(db).await.map_err(|e| {
        if is_foreign_key_violation(&e) {
            errors::ModelError::Validation(format!(
                "worker_id {} does not reference an existing worker",
                input.worker_id
            ))
        } else {
            errors::ModelError::Db(e.to_string())
        }
    })
}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// All services, ascending by id.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_id_must_be_positive() {
        let s = common::NewService {
            worker_id: 0,
            title: "Drain Cleaning".into(),
            description: String::new(),
            price_range: "$75 - $150".into(),
        };
        assert!(validate(&s).is_err());
        assert!(validate(&common::NewService { worker_id: 1, ..s }).is_ok());
    }

    #[test]
    fn price_range_stays_free_text() {
        let s = common::NewService {
            worker_id: 4,
            title: "UI/UX Consultation".into(),
            description: "Consulting".into(),
            price_range: "$75/hour".into(),
        };
        assert!(validate(&s).is_ok());
    }
}
