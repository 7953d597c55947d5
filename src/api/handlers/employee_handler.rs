//! Add-employee and employee-list pages.

use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::cookie::SignedCookieJar;
use tera::Context;

use crate::api::flash::{self, Flash};
use crate::api::templates::{ADD_EMPLOYEE_PAGE, EMPLOYEES_PAGE};
use crate::api::AppState;
use crate::config::{MSG_ADD_FAILED_PREFIX, MSG_EMPLOYEE_ADDED};
use crate::domain::EmployeeForm;
use crate::errors::{AppError, AppResult};

/// Create employee routes
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(add_employee_page))
        .route("/add", post(add_employee))
        .route("/employees", get(list_employees))
}

/// Render the add-employee form
pub async fn add_employee_page(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> AppResult<(SignedCookieJar, Html<String>)> {
    let (jar, flashes) = flash::take(jar);

    let mut context = Context::new();
    context.insert("flashes", &flashes);

    let page = state.templates.render(ADD_EMPLOYEE_PAGE, &context)?;
    Ok((jar, Html(page)))
}

/// Store a submitted employee, then redirect with a flash message.
///
/// Missing fields go back to the form with a warning; store failures go
/// back with an error carrying the store's message.
pub async fn add_employee(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<EmployeeForm>,
) -> AppResult<(SignedCookieJar, Redirect)> {
    match state.employee_service.add_employee(form).await {
        Ok(_) => Ok((
            flash::push(jar, Flash::success(MSG_EMPLOYEE_ADDED))?,
            Redirect::to("/employees"),
        )),
        Err(AppError::Validation(msg)) => {
            Ok((flash::push(jar, Flash::warning(msg))?, Redirect::to("/")))
        }
        Err(e) if e.is_store_failure() => {
            let message = format!("{}: {}", MSG_ADD_FAILED_PREFIX, e);
            Ok((flash::push(jar, Flash::error(message))?, Redirect::to("/")))
        }
        Err(e) => Err(e),
    }
}

/// Render every employee, ordered by employee ID
pub async fn list_employees(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> AppResult<(SignedCookieJar, Html<String>)> {
    let employees = state.employee_service.list_employees().await?;
    let (jar, flashes) = flash::take(jar);

    let mut context = Context::new();
    context.insert("flashes", &flashes);
    context.insert("employees", &employees);

    let page = state.templates.render(EMPLOYEES_PAGE, &context)?;
    Ok((jar, Html(page)))
}
