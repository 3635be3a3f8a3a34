use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// A service-providing professional, as it travels over the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: i32,
    pub name: String,
    pub skill: String,
    pub location: String,
    pub rating: f64,
    pub contact: String,
}

/// An offering tied to exactly one worker through `worker_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: i32,
    pub worker_id: i32,
    pub title: String,
    pub description: String,
    pub price_range: String,
}

/// Body of `POST /api/workers`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewWorker {
    pub name: String,
    pub skill: String,
    pub location: String,
    pub rating: f64,
    pub contact: String,
}

/// Body of `POST /api/services`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewService {
    pub worker_id: i32,
    pub title: String,
    pub description: String,
    pub price_range: String,
}

/// Error payload returned by every failing API route: `{"error": "..."}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_wire_shape_matches_table_columns() {
        let w = Worker {
            id: 2,
            name: "Jane Smith".into(),
            skill: "Electrician".into(),
            location: "Los Angeles, CA".into(),
            rating: 4.9,
            contact: "jane.smith@email.com".into(),
        };
        let v = serde_json::to_value(&w).unwrap();
        assert_eq!(v["id"], 2);
        assert_eq!(v["skill"], "Electrician");
        assert_eq!(v["rating"], 4.9);
    }

    #[test]
    fn new_service_requires_worker_id() {
        let err = serde_json::from_value::<NewService>(serde_json::json!({
            "title": "Pipe Repair",
            "description": "Fixing leaks",
            "price_range": "$100 - $300"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("worker_id"));
    }

    #[test]
    fn error_body_serializes_as_error_field() {
        let v = serde_json::to_value(ErrorBody::new("Worker not found")).unwrap();
        assert_eq!(v, serde_json::json!({"error": "Worker not found"}));
    }
}
