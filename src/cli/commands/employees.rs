use crate::api::{self, ApiClient};
use crate::cli::commands::{Context, confirm, print_page};
use crate::cli::parser::EmployeeAction;
use crate::errors::AppResult;
use crate::models::{DocumentUpload, Employee, EmployeeStatus, NewEmployee, name_of_ref};
use crate::session::Session;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::colorize_status;
use crate::utils::mask_phone;
use crate::utils::table::Table;
use std::path::PathBuf;

pub fn handle(action: &EmployeeAction, ctx: &Context) -> AppResult<()> {
    let (api, session) = ctx.connect()?;
    let mask = ctx.cfg.phone_mask.as_str();

    match action {
        EmployeeAction::List { paging, status } => {
            let employees = api::employees::list(&api, &session)?;
            let rows: Vec<Vec<String>> = employees
                .iter()
                .filter(|e| status.is_none_or(|s| e.status == s))
                .map(|e| employee_line(e, mask))
                .collect();
            print_page(
                "Employees",
                &["ID", "Name", "Email", "Phone", "Role", "Site", "Status"],
                rows,
                paging.page,
                ctx.page_size(paging),
            );
        }

        EmployeeAction::Show { id } => {
            let e = api::employees::profile(&api, &session, id)?;
            print_profile(&e, mask);
        }

        EmployeeAction::Create {
            first_name,
            last_name,
            email,
            phone,
            role_id,
            site_id,
        } => {
            let body = NewEmployee {
                first_name: first_name.trim().to_string(),
                last_name: last_name.trim().to_string(),
                email: email.trim().to_string(),
                phone: phone.as_deref().map(|p| mask_phone(p, mask)),
                role_id: role_id.clone(),
                site_id: site_id.clone(),
            };
            let created = api::employees::create(&api, &session, &body)?;
            success(format!(
                "Employee {} created (id {}, status {})",
                created.display_name(),
                created.id,
                created.status
            ));
        }

        EmployeeAction::Delete { id, yes } => {
            if !*yes && !confirm(&format!("Delete employee {id}? This action is irreversible.")) {
                info("Operation cancelled.");
                return Ok(());
            }
            api::employees::delete(&api, &session, id)?;
            success(format!("Employee {id} deleted"));
        }

        EmployeeAction::Approve { id, remarks } => {
            decide(&api, &session, id, EmployeeStatus::Approved, remarks)?;
        }

        EmployeeAction::Reject { id, remarks } => {
            decide(&api, &session, id, EmployeeStatus::Rejected, remarks)?;
        }

        EmployeeAction::Documents { id } => {
            let docs = api::employees::documents(&api, &session, id)?;
            let rows = docs
                .iter()
                .map(|d| {
                    vec![
                        d.id.clone(),
                        d.title.clone().unwrap_or_default(),
                        d.file_name.clone().unwrap_or_default(),
                        d.created_at.clone().unwrap_or_default(),
                    ]
                })
                .collect();
            print_page(
                &format!("Documents of employee {id}"),
                &["ID", "Title", "File", "Uploaded"],
                rows,
                1,
                usize::MAX,
            );
        }

        EmployeeAction::Upload { id, file, title } => {
            let upload = DocumentUpload {
                title: title.clone(),
                file: PathBuf::from(file),
            };
            let doc = api::employees::upload_document(&api, &session, id, &upload)?;
            success(format!("Document uploaded (id {})", doc.id));
        }
    }

    Ok(())
}

/// Pre-employment decision.
fn decide(
    api: &ApiClient,
    session: &Session,
    id: &str,
    status: EmployeeStatus,
    remarks: &Option<String>,
) -> AppResult<()> {
    let updated = api::employees::set_status(api, session, id, status, remarks.clone())?;
    success(format!(
        "Employee {} is now {}",
        updated.display_name(),
        updated.status
    ));
    Ok(())
}

fn employee_line(e: &Employee, mask: &str) -> Vec<String> {
    vec![
        e.id.clone(),
        e.display_name(),
        e.email.clone().unwrap_or_default(),
        e.phone.as_deref().map(|p| mask_phone(p, mask)).unwrap_or_default(),
        name_of_ref(&e.role),
        name_of_ref(&e.site),
        colorize_status(e.status.as_str()),
    ]
}

fn print_profile(e: &Employee, mask: &str) {
    header(format!("Employee {}", e.id));
    let mut table = Table::new(&["Field", "Value"]);
    let fields = [
        ("Name", e.display_name()),
        ("Email", e.email.clone().unwrap_or_default()),
        (
            "Phone",
            e.phone.as_deref().map(|p| mask_phone(p, mask)).unwrap_or_default(),
        ),
        ("Position", e.position.clone().unwrap_or_default()),
        ("Role", name_of_ref(&e.role)),
        ("Site", name_of_ref(&e.site)),
        ("Address", e.address.clone().unwrap_or_default()),
        ("Date of birth", e.date_of_birth.clone().unwrap_or_default()),
        ("Status", colorize_status(e.status.as_str())),
    ];
    for (k, v) in fields {
        table.add_row(vec![k.to_string(), v]);
    }
    print!("{}", table.render());
}
