use crate::cli::commands::Context;
use crate::core::{Overview, Pager};
use crate::errors::{AppError, AppResult};
use crate::models::name_of_ref;
use crate::ui::messages::{header, warning};
use crate::utils::table::Table;

/// Three lists paged together: page N of each, sized by the longest one.
pub fn handle(ctx: &Context, page: usize) -> AppResult<()> {
    let (api, session) = ctx.connect()?;
    let overview = Overview::fetch(&api, &session);

    // a dead session fails every list the same way
    for e in [
        overview.employees.as_ref().err(),
        overview.occurrences.as_ref().err(),
        overview.sites.as_ref().err(),
    ]
    .into_iter()
    .flatten()
    {
        if e.is_auth_failure() {
            return Err(AppError::SessionExpired);
        }
    }

    let mut pager = Pager::for_lists(&overview.counts(), ctx.cfg.page_size);
    pager.go_to(page);

    header(format!("Overview — {}", pager.label()));

    match &overview.employees {
        Ok(list) => {
            let mut t = Table::new(&["ID", "Employee", "Status"]);
            for e in pager.slice(list) {
                t.add_row(vec![e.id.clone(), e.display_name(), e.status.to_string()]);
            }
            section("Employees", &t, list.len());
        }
        Err(e) => warning(format!("Employees unavailable: {e}")),
    }

    match &overview.occurrences {
        Ok(list) => {
            let mut t = Table::new(&["ID", "Category", "Date"]);
            for o in pager.slice(list) {
                t.add_row(vec![
                    o.id.clone(),
                    name_of_ref(&o.category),
                    o.date.clone().unwrap_or_default(),
                ]);
            }
            section("Occurrences", &t, list.len());
        }
        Err(e) => warning(format!("Occurrences unavailable: {e}")),
    }

    match &overview.sites {
        Ok(list) => {
            let mut t = Table::new(&["ID", "Site"]);
            for s in pager.slice(list) {
                t.add_row(vec![s.id.clone(), s.name.clone()]);
            }
            section("Sites", &t, list.len());
        }
        Err(e) => warning(format!("Sites unavailable: {e}")),
    }

    Ok(())
}

fn section(title: &str, table: &Table, total: usize) {
    println!("\n{title} ({total})");
    if table.is_empty() {
        println!("  (nothing on this page)");
    } else {
        print!("{}", table.render());
    }
}
