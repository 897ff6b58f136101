use crate::api;
use crate::cli::commands::{Context, confirm, print_page};
use crate::cli::parser::{OccurrenceAction, OccurrenceFields};
use crate::errors::{AppError, AppResult};
use crate::models::{OccurrencePayload, name_of_ref};
use crate::ui::messages::{info, success};
use crate::utils::colors::colorize_status;
use crate::utils::datetime::{parse_optional_date, parse_optional_time};

pub fn handle(action: &OccurrenceAction, ctx: &Context) -> AppResult<()> {
    let (api, session) = ctx.connect()?;

    match action {
        OccurrenceAction::List { paging } => {
            let items = api::occurrences::list(&api, &session)?;
            let rows = items
                .iter()
                .map(|o| {
                    vec![
                        o.id.clone(),
                        name_of_ref(&o.category),
                        name_of_ref(&o.site),
                        name_of_ref(&o.user),
                        o.date.clone().unwrap_or_default(),
                        o.time.clone().unwrap_or_default(),
                        colorize_status(o.status.as_deref().unwrap_or_default()),
                    ]
                })
                .collect();
            print_page(
                "Occurrences",
                &["ID", "Category", "Site", "User", "Date", "Time", "Status"],
                rows,
                paging.page,
                ctx.page_size(paging),
            );
        }

        OccurrenceAction::Create { fields } => {
            let payload = payload_from(fields)?;
            if payload.category_id.is_none() || payload.description.is_none() {
                return Err(AppError::Other(
                    "--category and --description are required".into(),
                ));
            }
            let o = api::occurrences::create(&api, &session, &payload)?;
            success(format!("Occurrence logged (id {})", o.id));
        }

        OccurrenceAction::Update { id, fields } => {
            let payload = payload_from(fields)?;
            if payload.is_empty() {
                return Err(AppError::Other("nothing to update".into()));
            }
            api::occurrences::update(&api, &session, id, &payload)?;
            success(format!("Occurrence {id} updated"));
        }

        OccurrenceAction::Delete { id, yes } => {
            if !*yes && !confirm(&format!("Delete occurrence {id}?")) {
                info("Operation cancelled.");
                return Ok(());
            }
            api::occurrences::delete(&api, &session, id)?;
            success(format!("Occurrence {id} deleted"));
        }
    }

    Ok(())
}

fn payload_from(f: &OccurrenceFields) -> AppResult<OccurrencePayload> {
    Ok(OccurrencePayload {
        category_id: f.category_id.clone(),
        site_id: f.site_id.clone(),
        description: f.description.clone(),
        date: parse_optional_date(f.date.as_ref())?,
        time: parse_optional_time(f.time.as_ref())?,
        status: f.status.clone(),
    })
}
