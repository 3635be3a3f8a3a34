use sea_orm::{entity::prelude::*, DatabaseConnection, NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "workers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub skill: String,
    #[sea_orm(column_type = "Text")]
    pub location: String,
    pub rating: f64,
    #[sea_orm(column_type = "Text")]
    pub contact: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for common::Worker {
    fn from(m: Model) -> Self {
        common::Worker {
            id: m.id,
            name: m.name,
            skill: m.skill,
            location: m.location,
            rating: m.rating,
            contact: m.contact,
        }
    }
}

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name is required".into()));
    }
    Ok(())
}

pub fn validate_skill(skill: &str) -> Result<(), errors::ModelError> {
    if skill.trim().is_empty() {
        return Err(errors::ModelError::Validation("skill is required".into()));
    }
    Ok(())
}

pub fn validate_rating(rating: f64) -> Result<(), errors::ModelError> {
    if !rating.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(errors::ModelError::Validation(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}"
        )));
    }
    Ok(())
}

pub fn validate(input: &common::NewWorker) -> Result<(), errors::ModelError> {
    validate_name(&input.name)?;
    validate_skill(&input.skill)?;
    validate_rating(input.rating)
}

pub async fn create(db: &DatabaseConnection, input: &common::NewWorker) -> Result<Model, errors::ModelError> {
    validate(input)?;
    let am = ActiveModel {
        id: NotSet,
        name: Set(input.name.trim().to_string()),
        skill: Set(input.skill.trim().to_string()),
        location: Set(input.location.trim().to_string()),
        rating: Set(input.rating),
        contact: Set(input.contact.trim().to_string()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// All workers, ascending by id.
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

    fn input(rating: f64) -> common::NewWorker {
        common::NewWorker {
            name: "John Doe".into(),
            skill: "Plumber".into(),
            location: "New York, NY".into(),
            rating,
            contact: "john.doe@email.com".into(),
        }
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(validate(&input(0.0)).is_ok());
        assert!(validate(&input(5.0)).is_ok());
        assert!(validate(&input(5.01)).is_err());
        assert!(validate(&input(-0.1)).is_err());
        assert!(validate(&input(f64::NAN)).is_err());
    }

    #[test]
    fn blank_name_or_skill_is_rejected() {
        let mut w = input(4.0);
        w.name = "   ".into();
        assert!(matches!(validate(&w), Err(errors::ModelError::Validation(m)) if m == "name is required"));
        let mut w = input(4.0);
        w.skill = String::new();
        assert!(validate(&w).is_err());
    }
}
