//! Starter collection used on first run and by `reset`.

use tt_core::entities::Technology;
use tt_core::enums::TechStatus;
use tt_core::ids::TechnologyId;

const STARTER: &[(&str, &str, TechStatus)] = &[
    (
        "HTML & CSS",
        "Semantic markup, the box model, flexbox and grid layouts",
        TechStatus::Completed,
    ),
    (
        "JavaScript",
        "Closures, prototypes, promises and the event loop",
        TechStatus::InProgress,
    ),
    (
        "React",
        "Components, props, state and hooks for building interfaces",
        TechStatus::InProgress,
    ),
    (
        "Node.js",
        "Server-side JavaScript, modules and the npm ecosystem",
        TechStatus::NotStarted,
    ),
    (
        "Git",
        "Branching, rebasing and collaborating through pull requests",
        TechStatus::NotStarted,
    ),
];

/// The built-in starter collection, numbered from 1.
#[must_use]
pub fn starter_collection() -> Vec<Technology> {
    STARTER
        .iter()
        .zip(1_i64..)
        .map(|(&(title, description, status), id)| {
            let mut tech = Technology::new(TechnologyId::Number(id), title, description);
            tech.status = status;
            tech
        })
        .collect()
}
