use crate::api;
use crate::cli::commands::{Context, print_page};
use crate::cli::parser::SiteAction;
use crate::errors::AppResult;
use crate::models::NewSite;
use crate::ui::messages::success;

pub fn handle(action: &SiteAction, ctx: &Context) -> AppResult<()> {
    let (api, session) = ctx.connect()?;

    match action {
        SiteAction::List { paging } => {
            let sites = api::sites::list(&api, &session)?;
            let rows = sites
                .iter()
                .map(|s| {
                    vec![
                        s.id.clone(),
                        s.name.clone(),
                        s.address.clone().unwrap_or_default(),
                    ]
                })
                .collect();
            print_page(
                "Sites",
                &["ID", "Name", "Address"],
                rows,
                paging.page,
                ctx.page_size(paging),
            );
        }

        SiteAction::Create {
            name,
            address,
            details,
        } => {
            let body = NewSite {
                name: name.clone(),
                address: address.clone(),
                details: details.clone(),
            };
            let site = api::sites::create(&api, &session, &body)?;
            success(format!("Site '{}' created (id {})", site.name, site.id));
        }
    }

    Ok(())
}
