use crate::api::{self, ApiClient};
use crate::cli::commands::{Context, confirm, print_page};
use crate::cli::parser::CategoryAction;
use crate::core::OptimisticToggles;
use crate::errors::{AppError, AppResult};
use crate::models::OccurrenceCategory;
use crate::models::category::status_label;
use crate::session::Session;
use crate::ui::messages::{error, info, success};
use crate::utils::colors::colorize_status;

pub fn handle(action: &CategoryAction, ctx: &Context) -> AppResult<()> {
    let (api, session) = ctx.connect()?;

    match action {
        CategoryAction::List => {
            let categories = api::categories::list(&api, &session)?;
            print_categories(&categories);
        }

        CategoryAction::Create { name } => {
            let c = api::categories::create(&api, &session, name)?;
            success(format!("Category '{}' created (id {})", c.name, c.id));
        }

        CategoryAction::Rename { id, name } => {
            let c = api::categories::rename(&api, &session, id, name)?;
            success(format!("Category {} renamed to '{}'", c.id, c.name));
        }

        CategoryAction::Toggle { id } => toggle(&api, &session, id)?,

        CategoryAction::Delete { id, yes } => {
            if !*yes && !confirm(&format!("Delete category {id}?")) {
                info("Operation cancelled.");
                return Ok(());
            }
            api::categories::delete(&api, &session, id)?;
            success(format!("Category {id} deleted"));
        }
    }

    Ok(())
}

/// Optimistic status switch: show the new state, send it, roll back on failure,
/// then reload the list so server-side changes show up.
fn toggle(api: &ApiClient, session: &Session, id: &str) -> AppResult<()> {
    let categories = api::categories::list(api, session)?;

    let mut toggles = OptimisticToggles::new();
    for c in &categories {
        toggles.insert(c.id.clone(), c.status);
    }

    let key = id.to_string();
    let Some(current) = toggles.displayed(&key) else {
        return Err(AppError::Other(format!("category {id} not found")));
    };

    info(format!(
        "Category {id}: {} → {}",
        status_label(current),
        status_label(!current)
    ));

    let outcome = toggles.toggle_with(&key, |active| {
        api::categories::set_status(api, session, id, active)
    });

    let shown = toggles.displayed(&key).unwrap_or(current);
    match outcome {
        Ok(_) => {
            success(format!("Category {id} is now {}", status_label(shown)));
            let refreshed = api::categories::list(api, session)?;
            print_categories(&refreshed);
            Ok(())
        }
        Err(e) => {
            error(format!(
                "Status change failed, category {id} stays {}",
                status_label(shown)
            ));
            Err(e)
        }
    }
}

fn print_categories(categories: &[OccurrenceCategory]) {
    let rows = categories
        .iter()
        .map(|c| {
            vec![
                c.id.clone(),
                c.name.clone(),
                colorize_status(c.status_label()),
            ]
        })
        .collect();
    print_page(
        "Occurrence categories",
        &["ID", "Name", "Status"],
        rows,
        1,
        usize::MAX,
    );
}
