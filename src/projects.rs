//! Project gallery helpers: the projects page shows everything, the home
//! page shows a ~25% preview (always at least one project).

use crate::models::Project;

pub fn preview_count(total: usize) -> usize {
    if total == 0 {
        0
    } else {
        // ceil(total / 4), never below 1
        ((total + 3) / 4).max(1)
    }
}

pub fn preview(projects: &[Project]) -> &[Project] {
    &projects[..preview_count(projects.len())]
}
