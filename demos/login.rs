//! Requires chromedriver running on port 4444:
//!
//!     chromedriver --port=4444
//!
//! Run as follows:
//!
//!     cargo run --example login
//!
//! Set `BROWSER=firefox` (with geckodriver on the same port) to use another browser.

use page_elements_sync::prelude::*;

/// Elements of the login page at the-internet.herokuapp.com.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Login {
    LoginField,
    PasswordField,
    SubmitButton,
    LogOutButton,
    FlashMessage,
}

impl PageElement for Login {
    fn descriptor(&self) -> LocatorDescriptor {
        match self {
            Login::LoginField => LocatorDescriptor::xpath("//input[@id='username']"),
            Login::PasswordField => LocatorDescriptor::xpath("//input[@id='password']"),
            Login::SubmitButton => LocatorDescriptor::xpath("//button[@type='submit']"),
            Login::LogOutButton => LocatorDescriptor::xpath("//a[contains(@href, '/logout')]"),
            Login::FlashMessage => LocatorDescriptor::xpath("//div[@id='flash' and contains(@class, '%s')]"),
        }
    }
}

struct LoginPage<'a> {
    driver: &'a WebDriverSession,
}

impl<'a> LoginPage<'a> {
    fn new(driver: &'a WebDriverSession) -> Self {
        LoginPage { driver }
    }

    fn fill_login_field(&self, login: &str) -> PageResult<()> {
        let field = self.driver.wait_until().visible(&Login::LoginField.by()?)?;
        self.driver.send_keys(&field, login)
    }

    fn fill_password_field(&self, password: &str) -> PageResult<()> {
        let field = self.driver.wait_until().visible(&Login::PasswordField.by()?)?;
        self.driver.send_keys(&field, password)
    }

    fn click_submit_button(&self) -> PageResult<()> {
        let button = self
            .driver
            .wait_until()
            .timeout(TimeoutTier::Minimum)
            .clickable(&Login::SubmitButton.by()?)?;
        self.driver.click(&button)
    }

    fn click_log_out_button(&self) -> PageResult<()> {
        let button = self
            .driver
            .wait_until()
            .timeout(TimeoutTier::Loading)
            .error("log out button never became clickable")
            .clickable(&Login::LogOutButton.by()?)?;
        self.driver.click(&button)
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let browser: Browser = std::env::var("BROWSER").unwrap_or_else(|_| "chrome".to_string()).parse()?;
    let driver = WebDriverSession::start("http://localhost:4444", browser)?;
    driver.get("https://the-internet.herokuapp.com/login")?;

    let page = LoginPage::new(&driver);
    page.fill_login_field("tomsmith")?;
    page.fill_password_field("SuperSecretPassword!")?;
    page.click_submit_button()?;

    // The success banner carries the "success" class.
    driver.wait_until().visible(&Login::FlashMessage.by_with(&["success"])?)?;
    assert!(is_element_visible(&driver, &Login::LogOutButton.by()?)?);

    page.click_log_out_button()?;
    let gone = driver.wait_until().not_present(&Login::LogOutButton.by()?)?;
    assert!(gone, "still logged in");

    driver.quit()?;

    Ok(())
}
