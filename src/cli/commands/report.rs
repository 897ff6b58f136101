use crate::cli::commands::Context;
use crate::cli::parser::ReportArgs;
use crate::core::ReportLogic;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportLogic, ExportTarget, Report, ReportFilters};
use crate::utils::datetime::{parse_optional_date, parse_optional_time};
use std::path::Path;

pub fn handle(args: &ReportArgs, ctx: &Context) -> AppResult<()> {
    let filters = ReportFilters {
        category: args.category.clone(),
        user: args.user.clone(),
        status: args.status.clone(),
        date: parse_optional_date(args.date.as_ref())?,
        time: parse_optional_time(args.time.as_ref())?,
    };

    let report = match (&args.kind, &args.input) {
        (Some(kind), _) => {
            let (api, session) = ctx.connect()?;
            let rows = ReportLogic::fetch(&api, &session, *kind, args.employee.as_deref())?;
            Report::for_kind(*kind, rows)
        }
        (None, Some(input)) => {
            let rows = ReportLogic::load_file(Path::new(input))?;
            let title = args.title.as_deref().unwrap_or("Report");
            Report::ad_hoc(title, rows)
        }
        (None, None) => {
            return Err(AppError::Other("pass --kind or --input".into()));
        }
    };

    let report = report.with_filters(filters).apply_filters();

    let target = ExportTarget {
        output_dir: ctx.cfg.output_dir.clone(),
        out: args.out.clone(),
        force: args.force,
    };

    ExportLogic::export(&report, args.format, &target)?;
    Ok(())
}
