use anyhow::Result;

use dash_e2e_ci_utils::{AssertionError, Browser, PageNavigator, PageRoute, Query};

pub const LOGIN: PageRoute = PageRoute {
    url: "#/login",
    id: "cd-login",
};

pub const USERNAME_INPUT: &str = "#username";
pub const PASSWORD_INPUT: &str = "#password";
pub const SUBMIT: &str = "input[type=submit]";

pub struct LoginPageHelper<'a, N> {
    nav: &'a N,
}

impl<'a, N: PageNavigator> LoginPageHelper<'a, N> {
    pub fn new(nav: &'a N) -> Self {
        Self { nav }
    }

    /// Sign in through the login form and wait to be routed away from it.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        log::info!("🔑 Logging in as '{username}'");
        let nav = self.nav;
        let browser = nav.browser();

        nav.navigate_to(&LOGIN).await?;
        let user = nav.get_first(None, &Query::css(USERNAME_INPUT)).await?;
        browser.clear(&user).await?;
        browser.type_text(&user, username).await?;
        let pass = nav.get_first(None, &Query::css(PASSWORD_INPUT)).await?;
        browser.clear(&pass).await?;
        browser.type_text(&pass, password).await?;
        let submit = nav.get_first(None, &Query::css(SUBMIT)).await?;
        browser.click(&submit).await?;

        nav.waiter()
            .retry("leaving the login page", move || async move {
                let hash = browser.location_hash().await?;
                if hash.starts_with(LOGIN.url) {
                    Err(AssertionError::postcondition(format!(
                        "still on {hash} after submitting credentials for '{username}'"
                    ))
                    .into())
                } else {
                    Ok(())
                }
            })
            .await?;
        log::info!("✅ Logged in as '{username}'");
        Ok(())
    }
}
