//! Built-in sample catalog shown when the backend cannot be reached.

use common::{Service, Worker};
use once_cell::sync::Lazy;

use crate::snapshot::Catalog;

fn worker(id: i32, name: &str, skill: &str, location: &str, rating: f64, contact: &str) -> Worker {
    Worker {
        id,
        name: name.into(),
        skill: skill.into(),
        location: location.into(),
        rating,
        contact: contact.into(),
    }
}

fn service(id: i32, worker_id: i32, title: &str, description: &str, price_range: &str) -> Service {
    Service {
        id,
        worker_id,
        title: title.into(),
        description: description.into(),
        price_range: price_range.into(),
    }
}

pub static WORKERS: Lazy<Vec<Worker>> = Lazy::new(|| {
    vec![
        worker(1, "John Doe", "Plumber", "New York, NY", 4.8, "john.doe@email.com"),
        worker(2, "Jane Smith", "Electrician", "Los Angeles, CA", 4.9, "jane.smith@email.com"),
        worker(3, "Mike Johnson", "Painter", "Chicago, IL", 4.5, "mike.johnson@email.com"),
        worker(4, "Emily White", "Web Designer", "San Francisco, CA", 5.0, "emily.white@email.com"),
    ]
});

pub static SERVICES: Lazy<Vec<Service>> = Lazy::new(|| {
    vec![
        service(101, 1, "Drain Cleaning", "Expert drain cleaning services for all types of pipes.", "$75 - $150"),
        service(102, 1, "Pipe Repair", "Fixing leaks and breaks in residential and commercial pipes.", "$100 - $300"),
        service(103, 2, "Electrical Wiring", "New home and renovation electrical wiring installation.", "$500+"),
        service(104, 2, "Fixture Installation", "Installation of light fixtures, outlets, and switches.", "$50 - $100"),
        service(105, 3, "Interior Painting", "Professional interior painting for a fresh new look.", "$200 - $1000"),
        service(106, 4, "Custom Website Design", "Building beautiful, responsive websites from scratch.", "$1000+"),
        service(107, 4, "UI/UX Consultation", "Consulting services to improve user experience on your site.", "$75/hour"),
    ]
});

pub fn catalog() -> Catalog {
    Catalog::new(WORKERS.clone(), SERVICES.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fallback_service_has_its_worker() {
        let c = catalog();
        assert_eq!((c.workers().len(), c.services().len()), (4, 7));
        for s in c.services() {
            assert!(c.worker_for_service(s).is_some(), "dangling {}", s.id);
        }
    }
}
