use domain_workslip::{
    model::vo::{Credentials, Identity},
    service::AuthProvider,
};
use serde::Deserialize;

const DEFAULT_USERNAME: &str = "admin";
const DEFAULT_PASSWORD: &str = "admin123";

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct StaticAccount {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for StaticAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticAccount")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Accounts as configured. `accounts` are the numbered accounts; `legacy`
/// is the single account of older deployments.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StaticAuthSettings {
    pub accounts: Vec<StaticAccount>,
    pub legacy: Option<StaticAccount>,
    pub super_admin: Option<String>,
}

impl StaticAuthSettings {
    /// Adds the accounts described by `LOGIN_USERNAME{n}`/`LOGIN_PASSWORD{n}`
    /// (n = 1, 2, ... until the first gap), `LOGIN_USERNAME` or `LOGIN_EMAIL`
    /// with `LOGIN_PASSWORD`, and `SUPERADMIN_USERNAME`.
    pub fn merge_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|el| !el.trim().is_empty());
        for index in 1.. {
            match (
                lookup(&format!("LOGIN_USERNAME{index}")),
                lookup(&format!("LOGIN_PASSWORD{index}")),
            ) {
                (Some(username), Some(password)) => {
                    self.accounts.push(StaticAccount { username, password })
                }
                _ => break,
            }
        }
        let username = lookup("LOGIN_USERNAME").or_else(|| lookup("LOGIN_EMAIL"));
        let password = lookup("LOGIN_PASSWORD");
        if username.is_some() || password.is_some() {
            self.legacy = Some(StaticAccount {
                username: username.unwrap_or_else(|| DEFAULT_USERNAME.to_owned()),
                password: password.unwrap_or_else(|| DEFAULT_PASSWORD.to_owned()),
            });
        }
        if let Some(super_admin) = lookup("SUPERADMIN_USERNAME") {
            self.super_admin = Some(super_admin);
        }
        self
    }
}

/// Credentials fixed at start-up.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    accounts: Vec<StaticAccount>,
    super_admin: Option<String>,
}

fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}

impl StaticCredentialProvider {
    /// Falls back to `admin`/`admin123` when no account is configured. The
    /// super admin defaults to the first numbered account.
    pub fn new(settings: StaticAuthSettings) -> Self {
        let super_admin = settings
            .super_admin
            .or_else(|| settings.accounts.first().map(|el| el.username.clone()))
            .map(|el| normalize_username(&el))
            .filter(|el| !el.is_empty());
        let mut accounts = settings.accounts;
        accounts.extend(settings.legacy);
        if accounts.is_empty() {
            tracing::warn!("No login accounts configured, using the default account.");
            accounts.push(StaticAccount {
                username: DEFAULT_USERNAME.to_owned(),
                password: DEFAULT_PASSWORD.to_owned(),
            });
        }
        Self {
            accounts,
            super_admin,
        }
    }
}

impl AuthProvider for StaticCredentialProvider {
    fn authenticate(&self, credentials: &Credentials) -> Option<Identity> {
        let username = normalize_username(&credentials.username);
        let password = credentials.password.trim();
        if username.is_empty() || password.is_empty() {
            return None;
        }
        self.accounts
            .iter()
            .any(|el| normalize_username(&el.username) == username && el.password.trim() == password)
            .then(|| Identity {
                is_super_admin: self.super_admin.as_deref() == Some(username.as_str()),
                username: credentials.username.trim().to_owned(),
            })
    }
}
