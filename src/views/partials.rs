use std::collections::HashMap;

use askama::Template;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::error::AppError;
use crate::form::{ContactFormConfig, FormStatus, FormVariant};
use crate::promo::CookieStore;
use crate::state::SharedState;
use crate::submission::{parser, FieldMap};

use super::pages;

/// Placeholder the modal swaps back into when closed.
pub const CLOSED_MODAL: &str = r#"<div id="contact-modal"></div>"#;

#[derive(Template)]
#[template(path = "partials/contact_form.html")]
struct ContactFormTemplate<'a> {
    form: &'a ContactFormConfig,
    status: FormStatus,
    values: HashMap<String, String>,
}

impl ContactFormTemplate<'_> {
    fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    fn is_selected(&self, option: &str) -> bool {
        self.value("program") == option
    }
}

#[derive(Template)]
#[template(path = "partials/contact_modal.html")]
struct ContactModalTemplate {
    form_html: String,
}

/// Render a form in `status`. Values are echoed back only after an error,
/// so a success always leaves the form cleared.
pub fn render_form(
    form: &ContactFormConfig,
    status: FormStatus,
    submitted: Option<&FieldMap>,
) -> Result<String, AppError> {
    let values = match (status, submitted) {
        (FormStatus::Error, Some(raw)) => raw
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
            .collect(),
        _ => HashMap::new(),
    };

    let template = ContactFormTemplate {
        form,
        status,
        values,
    };
    Ok(template.render()?)
}

fn render_modal(state: &SharedState) -> Result<String, AppError> {
    let form = state.form(FormVariant::Modal);
    let template = ContactModalTemplate {
        form_html: render_form(&form, FormStatus::Idle, None)?,
    };
    Ok(template.render()?)
}

fn variant_from_path(slug: &str) -> Result<FormVariant, AppError> {
    FormVariant::from_slug(slug).ok_or_else(|| AppError::NotFound("Form not found".to_string()))
}

fn is_htmx(headers: &HeaderMap) -> bool {
    headers.contains_key("hx-request")
}

/// Idle copy of a form. Fetched by the delayed reset after a success.
pub async fn form_idle(
    State(state): State<SharedState>,
    Path(variant): Path<String>,
) -> Result<Html<String>, AppError> {
    let form = state.form(variant_from_path(&variant)?);
    Ok(Html(render_form(&form, FormStatus::Idle, None)?))
}

pub async fn form_submit(
    State(state): State<SharedState>,
    Path(variant): Path<String>,
    jar: CookieJar,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let variant = variant_from_path(&variant)?;
    let form = state.form(variant);

    let raw = parser::parse_request(&headers, body)
        .await
        .map_err(AppError::BadRequest)?;

    let client_status = FormStatus::from_client(raw.get("form_status").and_then(|v| v.as_str()));
    let status = match client_status.begin() {
        Ok(loading) => {
            let outcome = state.relay.submit(&raw).await;
            loading.resolve(&outcome)
        }
        Err(rejected) => {
            tracing::debug!("Ignoring {} form submit: {rejected}", variant.slug());
            client_status
        }
    };

    if is_htmx(&headers) || variant == FormVariant::Modal {
        let html = render_form(&form, status, Some(&raw))?;
        return Ok(Html(html).into_response());
    }

    // Plain form post without htmx: answer with the whole page.
    let html = match variant {
        FormVariant::Contact => pages::render_contact(&state, status, Some(&raw))?,
        _ => pages::render_home(&state, &jar, status, Some(&raw))?,
    };
    Ok(Html(html).into_response())
}

#[derive(Deserialize)]
pub struct ModalQuery {
    pub auto: Option<bool>,
}

/// The contact modal. `?auto=true` is the first-visit trigger: it shows the
/// modal only if the seen flag is absent, and sets the flag when it does.
pub async fn contact_modal(
    State(state): State<SharedState>,
    Query(q): Query<ModalQuery>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    if !q.auto.unwrap_or(false) {
        return Ok(Html(render_modal(&state)?).into_response());
    }

    let mut store = CookieStore::new(jar);
    if !state.promo.fire(&mut store) {
        return Ok(Html(CLOSED_MODAL).into_response());
    }

    tracing::debug!("Auto-opening contact modal on first visit");
    Ok((store.into_jar(), Html(render_modal(&state)?)).into_response())
}

pub async fn contact_modal_closed() -> Html<&'static str> {
    Html(CLOSED_MODAL)
}
