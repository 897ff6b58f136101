use crate::api::{self, ApiClient};
use crate::cli::commands::Context;
use crate::errors::{AppError, AppResult};
use crate::session::Session;
use crate::ui::messages::{info, success};

pub fn login(
    ctx: &Context,
    token: &Option<String>,
    email: &Option<String>,
    password: &Option<String>,
) -> AppResult<()> {
    let session = match (token, email, password) {
        (Some(t), _, _) if !t.trim().is_empty() => Session::new(t.trim()),
        (_, Some(e), Some(p)) => {
            let api = ApiClient::from_config(&ctx.cfg)?;
            api::auth::login(&api, e, p)?
        }
        _ => {
            return Err(AppError::Other(
                "provide --token, or --email and --password".to_string(),
            ));
        }
    };

    ctx.store.save(&session)?;
    tracing::info!(path = %ctx.store.path().display(), "session stored");

    match session.user.as_ref().and_then(|u| u.name.as_deref()) {
        Some(name) => success(format!("Logged in as {name}")),
        None => success("Logged in"),
    }
    Ok(())
}

pub fn logout(ctx: &Context) -> AppResult<()> {
    ctx.store.clear()?;
    success("Session cleared");
    Ok(())
}

pub fn whoami(ctx: &Context) -> AppResult<()> {
    let session = ctx.store.require()?;
    match session.user {
        Some(u) => {
            info(format!(
                "{} <{}> (id {}, role {})",
                u.name.unwrap_or_default(),
                u.email.unwrap_or_default(),
                u.id,
                u.role.map(|r| r.to_string()).unwrap_or_else(|| "-".into())
            ));
        }
        None => info("Logged in with a bearer token (no user details)"),
    }
    Ok(())
}
