//! Page templates, compiled into the binary and rendered with Tera.

use tera::{Context, Tera};

use crate::errors::AppResult;

pub const ADD_EMPLOYEE_PAGE: &str = "add_employee.html";
pub const EMPLOYEES_PAGE: &str = "employees.html";

/// Stylesheet served at `/style.css`
pub const STYLESHEET: &str = include_str!("../../static/style.css");

/// Parsed page templates. `.html` templates are autoescaped.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new() -> AppResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", include_str!("../../templates/base.html")),
            (ADD_EMPLOYEE_PAGE, include_str!("../../templates/add_employee.html")),
            (EMPLOYEES_PAGE, include_str!("../../templates/employees.html")),
        ])?;
        Ok(Self { tera })
    }

    pub fn render(&self, name: &str, context: &Context) -> AppResult<String> {
        Ok(self.tera.render(name, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::flash::Flash;
    use crate::domain::EmployeeView;

    fn view(employee_id: &str) -> EmployeeView {
        EmployeeView {
            employee_id: employee_id.to_string(),
            first_name: "Grace".into(),
            last_name: "<Hopper>".into(),
            nic_number: String::new(),
            date_of_birth: Some("1906-12-09".into()),
            contact_number: String::new(),
            address: String::new(),
            department: "Navy".into(),
            role: "User".into(),
            email: "grace@example.com".into(),
            date_of_joining: None,
        }
    }

    #[test]
    fn test_add_page_renders_form_and_flashes() {
        let templates = Templates::new().unwrap();
        let mut context = Context::new();
        context.insert("flashes", &vec![Flash::warning("Email is required")]);

        let html = templates.render(ADD_EMPLOYEE_PAGE, &context).unwrap();
        assert!(html.contains(r#"action="/add""#));
        assert!(html.contains(r#"name="date_of_joining""#));
        assert!(html.contains(r#"class="flash-message warning""#));
        assert!(html.contains("Email is required"));
    }

    #[test]
    fn test_employee_table_escapes_values() {
        let templates = Templates::new().unwrap();
        let mut context = Context::new();
        context.insert("flashes", &Vec::<Flash>::new());
        context.insert("employees", &vec![view("E1")]);

        let html = templates.render(EMPLOYEES_PAGE, &context).unwrap();
        assert!(html.contains("1906-12-09"));
        assert!(html.contains("&lt;Hopper&gt;"));
        assert!(!html.contains("<Hopper>"));
    }

    #[test]
    fn test_empty_listing() {
        let templates = Templates::new().unwrap();
        let mut context = Context::new();
        context.insert("flashes", &Vec::<Flash>::new());
        context.insert("employees", &Vec::<EmployeeView>::new());

        let html = templates.render(EMPLOYEES_PAGE, &context).unwrap();
        assert!(html.contains("No employees recorded yet."));
    }
}
