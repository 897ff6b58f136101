pub mod auth;
pub mod categories;
pub mod config;
pub mod employees;
pub mod init;
pub mod occurrences;
pub mod overview;
pub mod report;
pub mod roles;
pub mod sites;
pub mod sop;

use crate::api::ApiClient;
use crate::cli::parser::PageArgs;
use crate::config::Config;
use crate::core::Pager;
use crate::errors::AppResult;
use crate::session::{Session, SessionStore};
use crate::ui::messages::{header, info, warning};
use crate::utils::table::Table;
use std::io::{self, Write};

/// Everything a command needs besides its own arguments.
pub struct Context {
    pub cfg: Config,
    pub store: SessionStore,
}

impl Context {
    pub fn new(cfg: Config) -> Self {
        let store = SessionStore::new(&cfg.session_file);
        Self { cfg, store }
    }

    /// Client plus the stored session; fails with `LoginRequired` when
    /// there is none.
    pub fn connect(&self) -> AppResult<(ApiClient, Session)> {
        let session = self.store.require()?;
        let api = ApiClient::from_config(&self.cfg)?;
        Ok((api, session))
    }

    pub fn page_size(&self, paging: &PageArgs) -> usize {
        paging.page_size.unwrap_or(self.cfg.page_size)
    }
}

/// Ask a yes/no confirmation from the user
pub(crate) fn confirm(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Render one page of `rows` under `title`.
pub(crate) fn print_page(
    title: &str,
    headers: &[&str],
    rows: Vec<Vec<String>>,
    page: usize,
    page_size: usize,
) {
    header(title);

    if rows.is_empty() {
        info("No records found.");
        return;
    }

    let mut pager = Pager::new(rows.len(), page_size);
    pager.go_to(page);
    if pager.current() != page {
        warning(format!("Page {page} is out of range, showing page {}.", pager.current()));
    }

    let mut table = Table::new(headers);
    for row in pager.slice(&rows) {
        table.add_row(row.clone());
    }

    print!("{}", table.render());
    println!("{} ({} records)", pager.label(), rows.len());
}
