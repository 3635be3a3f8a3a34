//! Screens derived from a snapshot and a view, plus their terminal rendering.

use std::fmt;

use common::{Service, Worker};

use crate::snapshot::Catalog;
use crate::view::View;

#[derive(Debug, PartialEq)]
pub enum Screen<'a> {
    Home,
    Contact,
    Workers { workers: &'a [Worker], error: Option<&'a str> },
    Services { services: &'a [Service], error: Option<&'a str> },
    WorkerDetail { worker: &'a Worker, services: Vec<&'a Service> },
    WorkerNotFound,
    ServiceDetail { service: &'a Service, worker: Option<&'a Worker> },
    ServiceNotFound,
    SearchResults { query: String, workers: Vec<&'a Worker> },
}

impl<'a> Screen<'a> {
    pub fn build(catalog: &'a Catalog, error: Option<&'a str>, view: View) -> Self {
        match view {
            View::Home => Screen::Home,
            View::Contact => Screen::Contact,
            View::Workers => Screen::Workers { workers: catalog.workers(), error },
            View::Services => Screen::Services { services: catalog.services(), error },
            View::WorkerDetail(id) => match catalog.find_worker(id) {
                Some(worker) => Screen::WorkerDetail { worker, services: catalog.services_for_worker(worker.id) },
                None => Screen::WorkerNotFound,
            },
            View::ServiceDetail(id) => match catalog.find_service(id) {
                Some(service) => Screen::ServiceDetail { service, worker: catalog.worker_for_service(service) },
                None => Screen::ServiceNotFound,
            },
        }
    }

    pub fn search(catalog: &'a Catalog, query: &str) -> Self {
        Screen::SearchResults { query: query.trim().to_string(), workers: catalog.search(query) }
    }
}

fn write_worker_card(f: &mut fmt::Formatter<'_>, w: &Worker) -> fmt::Result {
    writeln!(f, "  [{}] {}", w.id, w.name)?;
    writeln!(f, "      {} | {} | ★ {}", w.skill, w.location, w.rating)
}

fn write_service_card(f: &mut fmt::Formatter<'_>, s: &Service) -> fmt::Result {
    writeln!(f, "  [{}] {}", s.id, s.title)?;
    if !s.description.is_empty() {
        writeln!(f, "      {}", s.description)?;
    }
    writeln!(f, "      Price: {}", s.price_range)
}

fn write_error(f: &mut fmt::Formatter<'_>, error: Option<&str>) -> fmt::Result {
    match error {
        Some(e) => writeln!(f, "Error: {e}\n(showing sample data)\n"),
        None => Ok(()),
    }
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Home => {
                writeln!(f, "SkillLink")?;
                writeln!(f, "Your One Stop for Every Skill\n")?;
                writeln!(
                    f,
                    "Find the perfect professional for any job, from local handymen to expert freelancers, all in one place.\n"
                )?;
                writeln!(f, "* Find Workers: browse a diverse range of skilled workers.")?;
                writeln!(f, "* List Services: skilled professionals list their services here.")?;
                writeln!(f, "* Seamless Experience: easy navigation and smooth transactions.")
            }
            Screen::Contact => {
                writeln!(f, "Contact Us\n")?;
                writeln!(f, "Have a question or want to get in touch? Send us your name, email and message.")
            }
            Screen::Workers { workers, error } => {
                writeln!(f, "Our Skilled Workers\n")?;
                write_error(f, *error)?;
                workers.iter().try_for_each(|w| write_worker_card(f, w))
            }
            Screen::Services { services, error } => {
                writeln!(f, "Browse Our Services\n")?;
                write_error(f, *error)?;
                services.iter().try_for_each(|s| write_service_card(f, s))
            }
            Screen::WorkerDetail { worker, services } => {
                writeln!(f, "← Back to Workers\n")?;
                writeln!(f, "{}", worker.name)?;
                writeln!(f, "{}", worker.skill)?;
                writeln!(f, "Location: {}", worker.location)?;
                writeln!(f, "Contact: {}", worker.contact)?;
                writeln!(f, "★ {}\n", worker.rating)?;
                writeln!(f, "Services Offered")?;
                if services.is_empty() {
                    writeln!(f, "No services listed yet.")
                } else {
                    services.iter().try_for_each(|s| write_service_card(f, s))
                }
            }
            Screen::WorkerNotFound => writeln!(f, "Worker not found."),
            Screen::ServiceDetail { service, worker } => {
                writeln!(f, "← Back to Services\n")?;
                writeln!(f, "{}", service.title)?;
                writeln!(f, "{}", service.description)?;
                writeln!(f, "Price: {}\n", service.price_range)?;
                writeln!(f, "Provided by:")?;
                match worker {
                    Some(w) => {
                        writeln!(f, "  [{}] {}", w.id, w.name)?;
                        writeln!(f, "      {}", w.skill)?;
                        writeln!(f, "      Location: {}", w.location)
                    }
                    None => writeln!(f, "Worker not found."),
                }
            }
            Screen::ServiceNotFound => writeln!(f, "Service not found."),
            Screen::SearchResults { query, workers } => {
                writeln!(f, "Results for \"{query}\"\n")?;
                if workers.is_empty() {
                    writeln!(f, "No workers match.")
                } else {
                    workers.iter().try_for_each(|w| write_worker_card(f, w))
                }
            }
        }
    }
}
