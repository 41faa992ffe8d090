//! Page handlers and the router. Every page re-reads its backing JSON
//! document; a failed load falls back per section and is logged, never
//! surfaced to the visitor beyond the generic notice.

use std::path::Path;

use askama::Template;
use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::Redirect,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::error;

use crate::experience::{card_for, ExperienceCard};
use crate::links::{nav_items, social_items, LinkItem};
use crate::models::{ExperienceDoc, NavDoc, Project, ProjectsDoc, SkillsDoc, SocialDoc, StatusBadge};
use crate::projects::preview;
use crate::skills::SkillsView;
use crate::state::AppState;
use crate::theme::ThemePrefs;

/// Per-page chrome shared by every template: theme classes and the nav bar.
pub struct PageChrome {
    pub body_class: &'static str,
    pub indicator_class: &'static str,
    pub nav: Vec<LinkItem>,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page: PageChrome,
    pub socials: Vec<LinkItem>,
    pub status: StatusBadge,
    pub projects: Vec<Project>,
}

#[derive(Template)]
#[template(path = "experiences.html")]
pub struct ExperiencesTemplate {
    pub page: PageChrome,
    /// None means the document could not be fetched or parsed; the template
    /// then renders the single fallback notice.
    pub cards: Option<Vec<ExperienceCard>>,
}

#[derive(Template)]
#[template(path = "projects.html")]
pub struct ProjectsTemplate {
    pub page: PageChrome,
    pub projects: Vec<Project>,
}

#[derive(Template)]
#[template(path = "skills.html")]
pub struct SkillsTemplate {
    pub page: PageChrome,
    pub view: Option<SkillsView>,
}

fn current_prefs(state: &AppState) -> ThemePrefs {
    let saved = state.theme.load();
    ThemePrefs::resolve(saved.map(|p| p.theme), saved.map(|p| p.tod))
}

async fn chrome(state: &AppState) -> PageChrome {
    let prefs = current_prefs(state);
    let nav = match state.data.load::<NavDoc>("navLinks.json").await {
        Ok(doc) => nav_items(&doc),
        Err(err) => {
            error!(%err, "failed to load nav links");
            Vec::new()
        }
    };
    PageChrome {
        body_class: prefs.body_class(),
        indicator_class: prefs.indicator_class(),
        nav,
    }
}

pub async fn home(State(state): State<AppState>) -> HomeTemplate {
    let page = chrome(&state).await;
    let socials = match state.data.load::<SocialDoc>("socialLinks.json").await {
        Ok(doc) => social_items(&doc),
        Err(err) => {
            error!(%err, "failed to load social links");
            Vec::new()
        }
    };
    let projects = match state.data.load::<ProjectsDoc>("projects.json").await {
        Ok(doc) => preview(&doc.projects).to_vec(),
        Err(err) => {
            error!(%err, "failed to load projects");
            Vec::new()
        }
    };
    HomeTemplate {
        page,
        socials,
        status: state.status.clone(),
        projects,
    }
}

pub async fn experiences(State(state): State<AppState>) -> ExperiencesTemplate {
    let page = chrome(&state).await;
    let cards = match state.data.load::<ExperienceDoc>("experiences.json").await {
        Ok(doc) => {
            let today = Utc::now().date_naive();
            Some(doc.jobs().iter().map(|job| card_for(job, today)).collect())
        }
        Err(err) => {
            error!(%err, "failed to render experiences");
            None
        }
    };
    ExperiencesTemplate { page, cards }
}

pub async fn projects_page(State(state): State<AppState>) -> ProjectsTemplate {
    let page = chrome(&state).await;
    let projects = match state.data.load::<ProjectsDoc>("projects.json").await {
        Ok(doc) => doc.projects,
        Err(err) => {
            error!(%err, "failed to load projects");
            Vec::new()
        }
    };
    ProjectsTemplate { page, projects }
}

pub async fn skills_page(State(state): State<AppState>) -> SkillsTemplate {
    let page = chrome(&state).await;
    let view = match state.data.load::<SkillsDoc>("skills.json").await {
        Ok(doc) => Some(SkillsView::from_doc(&doc)),
        Err(err) => {
            error!(%err, "failed to load skills");
            None
        }
    };
    SkillsTemplate { page, view }
}

pub async fn toggle_theme(State(state): State<AppState>) -> Redirect {
    let next = current_prefs(&state).toggled();
    if let Err(err) = state.theme.save(&next) {
        error!(%err, "failed to save theme preference");
    }
    Redirect::to("/")
}

pub fn build_router(state: AppState, assets_dir: &Path) -> Router {
    let assets = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=3600"),
        ))
        .service(ServeDir::new(assets_dir));

    Router::new()
        .route("/", get(home))
        .route("/experiences", get(experiences))
        .route("/projects", get(projects_page))
        .route("/skills", get(skills_page))
        .route("/theme/toggle", post(toggle_theme))
        .nest_service("/assets", assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
