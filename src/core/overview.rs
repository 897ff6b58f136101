use crate::api::{self, ApiClient};
use crate::errors::{AppError, AppResult};
use crate::models::{Employee, Occurrence, Site};
use crate::session::Session;
use std::thread;

/// Independent results of the dashboard fetches; one failing list does not
/// hide the others.
pub struct Overview {
    pub employees: AppResult<Vec<Employee>>,
    pub occurrences: AppResult<Vec<Occurrence>>,
    pub sites: AppResult<Vec<Site>>,
}

impl Overview {
    /// Issue the three list calls together and wait for all of them.
    pub fn fetch(api: &ApiClient, session: &Session) -> Overview {
        thread::scope(|s| {
            let employees = s.spawn(|| api::employees::list(api, session));
            let occurrences = s.spawn(|| api::occurrences::list(api, session));
            let sites = s.spawn(|| api::sites::list(api, session));

            Overview {
                employees: join(employees),
                occurrences: join(occurrences),
                sites: join(sites),
            }
        })
    }

    /// Lengths of the lists that loaded.
    pub fn counts(&self) -> Vec<usize> {
        [
            self.employees.as_ref().map(Vec::len).ok(),
            self.occurrences.as_ref().map(Vec::len).ok(),
            self.sites.as_ref().map(Vec::len).ok(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

fn join<T>(handle: thread::ScopedJoinHandle<'_, AppResult<T>>) -> AppResult<T> {
    handle
        .join()
        .unwrap_or_else(|_| Err(AppError::Other("fetch worker panicked".into())))
}
