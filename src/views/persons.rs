use askama::Template;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse};
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::dates;
use crate::db;
use crate::error::AppError;
use crate::models::Person;
use crate::routes::persons::SearchParams;
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "persons/list.html")]
#[allow(dead_code)]
struct PersonListTemplate {
    operator: String,
    query: String,
    total: usize,
    rows: Vec<PersonRow>,
}

#[allow(dead_code)]
struct PersonRow {
    id: String,
    registration_code: String,
    full_name: String,
    national_id: String,
    class_name: String,
    phone: String,
    birth_date: String,
}

#[derive(Template)]
#[template(path = "persons/form.html")]
#[allow(dead_code)]
struct PersonFormTemplate {
    operator: String,
    title: String,
    submit_url: String,
    method: String,
    registration_code: String,
    form: PersonForm,
}

#[derive(Default)]
#[allow(dead_code)]
struct PersonForm {
    full_name: String,
    national_id: String,
    birth_date: String,
    email: String,
    phone: String,
    role: String,
    class_name: String,
    room: String,
    enrollment_year: String,
    sex: String,
    postal_code: String,
    street: String,
    number: String,
    complement: String,
    neighborhood: String,
    city: String,
    state: String,
    education_level: String,
    theology_course: String,
    leadership_course: String,
    baptized: String,
    occupation: String,
}

impl From<&Person> for PersonForm {
    fn from(person: &Person) -> Self {
        let opt = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            full_name: person.full_name.clone(),
            national_id: person.national_id.clone(),
            birth_date: dates::format_br_date(person.birth_date),
            email: person.email.clone(),
            phone: person.phone.clone(),
            role: opt(&person.role),
            class_name: person.class_name.clone(),
            room: opt(&person.room),
            enrollment_year: opt(&person.enrollment_year),
            sex: opt(&person.sex),
            postal_code: opt(&person.postal_code),
            street: opt(&person.street),
            number: opt(&person.number),
            complement: opt(&person.complement),
            neighborhood: opt(&person.neighborhood),
            city: opt(&person.city),
            state: opt(&person.state),
            education_level: opt(&person.education_level),
            theology_course: opt(&person.theology_course),
            leadership_course: opt(&person.leadership_course),
            baptized: opt(&person.baptized),
            occupation: opt(&person.occupation),
        }
    }
}

pub async fn list_page(
    auth: AuthUser,
    State(state): State<SharedState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let query = params.q.unwrap_or_default();
    let persons = db::persons::search(&state.pool, &query).await?;

    let rows: Vec<PersonRow> = persons
        .iter()
        .map(|p| PersonRow {
            id: p.id.to_string(),
            registration_code: p.registration_code.clone(),
            full_name: p.full_name.clone(),
            national_id: p.national_id.clone(),
            class_name: p.class_name.clone(),
            phone: p.phone.clone(),
            birth_date: dates::format_br_date(p.birth_date),
        })
        .collect();

    let template = PersonListTemplate {
        operator: auth.login,
        query,
        total: rows.len(),
        rows,
    };
    Ok(Html(template.render().unwrap_or_default()))
}

pub async fn new_page(auth: AuthUser) -> impl IntoResponse {
    let template = PersonFormTemplate {
        operator: auth.login,
        title: "New registration".to_string(),
        submit_url: "/api/v1/persons".to_string(),
        method: "POST".to_string(),
        registration_code: String::new(),
        form: PersonForm::default(),
    };
    Html(template.render().unwrap_or_default())
}

pub async fn edit_page(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let person = db::persons::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Person not found".to_string()))?;

    let template = PersonFormTemplate {
        operator: auth.login,
        title: format!("Edit {}", person.full_name),
        submit_url: format!("/api/v1/persons/{}", person.id),
        method: "PUT".to_string(),
        registration_code: person.registration_code.clone(),
        form: PersonForm::from(&person),
    };
    Ok(Html(template.render().unwrap_or_default()))
}
