use crate::api;
use crate::cli::commands::{Context, print_page};
use crate::cli::parser::SopAction;
use crate::errors::AppResult;
use crate::models::DocumentUpload;
use crate::ui::messages::success;
use std::path::PathBuf;

pub fn handle(action: &SopAction, ctx: &Context) -> AppResult<()> {
    let (api, session) = ctx.connect()?;

    match action {
        SopAction::List => {
            let docs = api::documents::list_sop(&api, &session)?;
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
                "SOP documents",
                &["ID", "Title", "File", "Uploaded"],
                rows,
                1,
                usize::MAX,
            );
        }

        SopAction::Upload { file, title } => {
            let upload = DocumentUpload {
                title: title.clone(),
                file: PathBuf::from(file),
            };
            let doc = api::documents::upload_sop(&api, &session, &upload)?;
            success(format!("SOP document uploaded (id {})", doc.id));
        }
    }

    Ok(())
}
