use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum_extra::extract::CookieJar;

use crate::content;
use crate::error::AppError;
use crate::form::{FormStatus, FormVariant};
use crate::models::{
    Article, Brand, NavLink, Office, OfficeAddress, Program, Service, Stat, Testimonial, Workshop,
};
use crate::promo::CookieStore;
use crate::state::SharedState;
use crate::submission::FieldMap;

use super::partials::render_form;

/// Shared header/footer data for every page.
struct Layout {
    brand: Brand,
    nav: Vec<NavLink>,
    current: &'static str,
    footer_offices: Vec<Office>,
    /// Set on first visits only: delay before the contact modal auto-opens.
    modal_auto_ms: Option<u128>,
}

impl Layout {
    fn new(current: &'static str) -> Self {
        let meta = content::meta();
        Self {
            brand: meta.brand,
            nav: content::nav_links(),
            current,
            footer_offices: meta.offices,
            modal_auto_ms: None,
        }
    }

    fn is_current(&self, link: &NavLink) -> bool {
        !link.is_section() && link.href == self.current
    }
}

struct Hero {
    tagline: &'static str,
    headline: &'static str,
    subline: &'static str,
}

#[derive(Template)]
#[template(path = "pages/home.html")]
struct HomeTemplate {
    layout: Layout,
    hero: Hero,
    stats: Vec<Stat>,
    programs: Vec<Program>,
    services: Vec<Service>,
    workshops: Vec<Workshop>,
    testimonials: Vec<Testimonial>,
    articles: Vec<Article>,
    offices: Vec<OfficeAddress>,
    contact_form: String,
}

#[derive(Template)]
#[template(path = "pages/vision.html")]
struct VisionTemplate {
    layout: Layout,
    hero: Hero,
}

#[derive(Template)]
#[template(path = "pages/services.html")]
struct ServicesTemplate {
    layout: Layout,
    hero: Hero,
    services: Vec<Service>,
}

#[derive(Template)]
#[template(path = "pages/leadership.html")]
struct LeadershipTemplate {
    layout: Layout,
    hero: Hero,
}

#[derive(Template)]
#[template(path = "pages/offices.html")]
struct OfficesTemplate {
    layout: Layout,
    hero: Hero,
    offices: Vec<OfficeAddress>,
}

#[derive(Template)]
#[template(path = "pages/contact.html")]
struct ContactTemplate {
    layout: Layout,
    contact_form: String,
}

pub(crate) fn render_home(
    state: &SharedState,
    jar: &CookieJar,
    status: FormStatus,
    submitted: Option<&FieldMap>,
) -> Result<String, AppError> {
    let mut layout = Layout::new("/");
    let store = CookieStore::new(jar.clone());
    if state.promo.is_armed(&store) {
        layout.modal_auto_ms = Some(state.promo.delay().as_millis());
    }

    let form = state.form(FormVariant::Home);
    let template = HomeTemplate {
        layout,
        hero: Hero {
            tagline: "Nova Vista – Education Beyond Boundaries",
            headline: "Empowering Growth. Elevating Futures.",
            subline: "A platform committed to academic recognition and personal skill enhancement.",
        },
        stats: content::meta().stats,
        programs: content::programs(),
        services: content::services(),
        workshops: content::workshops(),
        testimonials: content::testimonials(),
        articles: content::articles(),
        offices: content::office_addresses(),
        contact_form: render_form(&form, status, submitted)?,
    };
    Ok(template.render()?)
}

pub(crate) fn render_contact(
    state: &SharedState,
    status: FormStatus,
    submitted: Option<&FieldMap>,
) -> Result<String, AppError> {
    let form = state.form(FormVariant::Contact);
    let template = ContactTemplate {
        layout: Layout::new("/contact"),
        contact_form: render_form(&form, status, submitted)?,
    };
    Ok(template.render()?)
}

pub async fn home(State(state): State<SharedState>, jar: CookieJar) -> impl IntoResponse {
    Html(render_home(&state, &jar, FormStatus::Idle, None).unwrap_or_default())
}

pub async fn contact(State(state): State<SharedState>) -> impl IntoResponse {
    Html(render_contact(&state, FormStatus::Idle, None).unwrap_or_default())
}

pub async fn vision() -> impl IntoResponse {
    let template = VisionTemplate {
        layout: Layout::new("/vision"),
        hero: Hero {
            tagline: "Nova Vista – Education Beyond Boundaries",
            headline: "Our Vision. Education for Every Stratum of Society.",
            subline: "NovaVista is a not for profit trust established to help students from all strata of society get high quality education.",
        },
    };
    Html(template.render().unwrap_or_default())
}

pub async fn services() -> impl IntoResponse {
    let template = ServicesTemplate {
        layout: Layout::new("/services"),
        hero: Hero {
            tagline: "Nova Vista – Learning Without Limits",
            headline: "Global Education. Empowering Learners.",
            subline: "Partnerships, institutions, training and admissions support for students and educators worldwide.",
        },
        services: content::services(),
    };
    Html(template.render().unwrap_or_default())
}

pub async fn leadership() -> impl IntoResponse {
    let template = LeadershipTemplate {
        layout: Layout::new("/leadership"),
        hero: Hero {
            tagline: "Nova Vista – Education Beyond Boundaries",
            headline: "Our Leadership. Transforming Education Globally.",
            subline: "Our leadership team brings together experienced professionals from around the world, dedicated to transforming education and creating opportunities for students globally.",
        },
    };
    Html(template.render().unwrap_or_default())
}

pub async fn offices() -> impl IntoResponse {
    let template = OfficesTemplate {
        layout: Layout::new("/offices"),
        hero: Hero {
            tagline: "Nova Vista – Education Beyond Boundaries",
            headline: "Connecting Continents. Serving Students Globally.",
            subline: "With offices spanning India, Germany, USA, Bangladesh, Qatar, and Nepal, we create initiatives that assist students and scholars across cultures.",
        },
        offices: content::office_addresses(),
    };
    Html(template.render().unwrap_or_default())
}
