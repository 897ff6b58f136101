use crate::api;
use crate::cli::commands::{Context, print_page};
use crate::cli::parser::RoleAction;
use crate::errors::{AppError, AppResult};
use crate::models::RolePayload;
use crate::ui::messages::success;

pub fn handle(action: &RoleAction, ctx: &Context) -> AppResult<()> {
    let (api, session) = ctx.connect()?;

    match action {
        RoleAction::List => {
            let roles = api::roles::list(&api, &session)?;
            let rows = roles
                .iter()
                .map(|r| vec![r.id.clone(), r.name.clone(), r.permission_list()])
                .collect();
            print_page("Roles", &["ID", "Name", "Permissions"], rows, 1, usize::MAX);
        }

        RoleAction::Create { name, permissions } => {
            let body = RolePayload {
                name: Some(name.clone()),
                permissions: permissions.clone(),
            };
            let role = api::roles::create(&api, &session, &body)?;
            success(format!("Role '{}' created (id {})", role.name, role.id));
        }

        RoleAction::Update {
            id,
            name,
            permissions,
        } => {
            if name.is_none() && permissions.is_empty() {
                return Err(AppError::Other(
                    "nothing to update: pass --name and/or --permission".into(),
                ));
            }
            let body = RolePayload {
                name: name.clone(),
                permissions: permissions.clone(),
            };
            let role = api::roles::update(&api, &session, id, &body)?;
            success(format!("Role '{}' updated", role.name));
        }
    }

    Ok(())
}
