use crate::export::{ExportFormat, ReportKind};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for siteops
#[derive(Parser)]
#[command(
    name = "siteops",
    version = env!("CARGO_PKG_VERSION"),
    about = "Admin console for the site-operations backend: employees, occurrences, roles and reports",
    long_about = None
)]
pub struct Cli {
    /// Override the backend base URL
    #[arg(global = true, long = "api")]
    pub api: Option<String>,

    /// Override the session file path
    #[arg(global = true, long = "session")]
    pub session: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Start a session with a token or with email/password
    Login {
        #[arg(long, conflicts_with_all = ["email", "password"], help = "Use an existing bearer token")]
        token: Option<String>,

        #[arg(long, requires = "password")]
        email: Option<String>,

        #[arg(long, requires = "email")]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show who the stored session belongs to
    Whoami,

    /// Employee records and pre-employment approvals
    Employees {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Roles and their permissions
    Roles {
        #[command(subcommand)]
        action: RoleAction,
    },

    /// Occurrence categories (master settings)
    Categories {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Occurrence log
    Occurrences {
        #[command(subcommand)]
        action: OccurrenceAction,
    },

    /// Sites
    Sites {
        #[command(subcommand)]
        action: SiteAction,
    },

    /// Standard operating procedure documents
    Sop {
        #[command(subcommand)]
        action: SopAction,
    },

    /// Employees, occurrences and sites side by side, one shared page
    Overview {
        #[arg(long, short, default_value_t = 1)]
        page: usize,
    },

    /// Export a report to XLSX, PDF, CSV or JSON
    Report(ReportArgs),
}

#[derive(Args, Clone)]
pub struct PageArgs {
    #[arg(long, short, default_value_t = 1, help = "Page number (1-based)")]
    pub page: usize,

    #[arg(long, help = "Rows per page (defaults to the configured page_size)")]
    pub page_size: Option<usize>,
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// List employees
    List {
        #[command(flatten)]
        paging: PageArgs,

        #[arg(long, value_enum)]
        status: Option<crate::models::EmployeeStatus>,
    },

    /// Show one employee's profile
    Show { id: String },

    /// Register a new employee (starts as pending)
    Create {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long = "role")]
        role_id: Option<String>,
        #[arg(long = "site")]
        site_id: Option<String>,
    },

    /// Delete an employee
    Delete {
        id: String,
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Approve a pre-employment application
    Approve {
        id: String,
        #[arg(long)]
        remarks: Option<String>,
    },

    /// Reject a pre-employment application
    Reject {
        id: String,
        #[arg(long)]
        remarks: Option<String>,
    },

    /// List an employee's documents
    Documents { id: String },

    /// Upload a document for an employee
    Upload {
        id: String,
        #[arg(long)]
        file: String,
        #[arg(long)]
        title: String,
    },
}

#[derive(Subcommand)]
pub enum RoleAction {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long = "permission", help = "Permission to grant (repeatable)")]
        permissions: Vec<String>,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "permission", help = "Permission to grant (repeatable)")]
        permissions: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum CategoryAction {
    List,
    Create {
        #[arg(long)]
        name: String,
    },
    Rename {
        id: String,
        #[arg(long)]
        name: String,
    },
    /// Flip a category between active and inactive
    Toggle { id: String },
    Delete {
        id: String,
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Args, Clone, Default)]
pub struct OccurrenceFields {
    #[arg(long = "category")]
    pub category_id: Option<String>,
    #[arg(long = "site")]
    pub site_id: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, help = "YYYY-MM-DD")]
    pub date: Option<String>,
    #[arg(long, help = "HH:MM")]
    pub time: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Subcommand)]
pub enum OccurrenceAction {
    List {
        #[command(flatten)]
        paging: PageArgs,
    },
    Create {
        #[command(flatten)]
        fields: OccurrenceFields,
    },
    Update {
        id: String,
        #[command(flatten)]
        fields: OccurrenceFields,
    },
    Delete {
        id: String,
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum SiteAction {
    List {
        #[command(flatten)]
        paging: PageArgs,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        details: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum SopAction {
    List,
    Upload {
        #[arg(long)]
        file: String,
        #[arg(long)]
        title: String,
    },
}

#[derive(Args)]
pub struct ReportArgs {
    /// Report to fetch from the backend
    #[arg(long, value_enum, required_unless_present = "input", conflicts_with = "input")]
    pub kind: Option<ReportKind>,

    /// Export rows from a JSON file (array of flat objects) instead
    #[arg(long, value_name = "FILE", requires = "title")]
    pub input: Option<String>,

    /// Title of a report loaded with --input
    #[arg(long)]
    pub title: Option<String>,

    /// Employee id (employee-documents report)
    #[arg(long)]
    pub employee: Option<String>,

    #[arg(long, value_enum, default_value = "xlsx")]
    pub format: ExportFormat,

    /// Output file (defaults to the report's file name in output_dir)
    #[arg(long, value_name = "FILE")]
    pub out: Option<String>,

    #[arg(long, short = 'f')]
    pub force: bool,

    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub user: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long, help = "YYYY-MM-DD")]
    pub date: Option<String>,
    #[arg(long, help = "HH:MM")]
    pub time: Option<String>,
}
