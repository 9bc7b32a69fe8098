use page_elements_sync::locator::{resolve, resolve_string};
use page_elements_sync::prelude::*;
use page_elements_sync::{FormatError, LocatorStrategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Login {
    LoginField,
    PasswordField,
    SubmitButton,
    LogoutButton,
}

impl PageElement for Login {
    fn descriptor(&self) -> LocatorDescriptor {
        match self {
            Login::LoginField => LocatorDescriptor::xpath("//input[@id='username']"),
            Login::PasswordField => LocatorDescriptor::id("password"),
            Login::SubmitButton => LocatorDescriptor::css("button[type='%s']"),
            Login::LogoutButton => LocatorDescriptor::link_text("Log out"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dialog {
    Container,
    Title,
}

impl PageElement for Dialog {
    fn descriptor(&self) -> LocatorDescriptor {
        match self {
            Dialog::Container => LocatorDescriptor::xpath("//div[@role='dialog' and @data-id='%s-%s']"),
            Dialog::Title => LocatorDescriptor::xpath("//h2"),
        }
    }
}

/// Rows live inside the dialog, declared as a separate catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogRow {
    Cell,
    CellRepeated,
    Plain,
}

impl PageElement for DialogRow {
    fn descriptor(&self) -> LocatorDescriptor {
        match self {
            DialogRow::Cell => LocatorDescriptor::xpath("//tr[%s]/td[%s]"),
            DialogRow::CellRepeated => LocatorDescriptor::xpath("//td[@data-owner='%1$s-%2$s']"),
            DialogRow::Plain => LocatorDescriptor::xpath("//tr"),
        }
    }
}

impl ContainerPageElement for DialogRow {
    type Container = Dialog;

    fn container(&self) -> Dialog {
        Dialog::Container
    }
}

impl ContainerPageElement for Dialog {
    type Container = Dialog;

    fn container(&self) -> Dialog {
        Dialog::Container
    }
}

#[test]
fn plain_catalog_resolves_each_strategy() {
    assert_eq!(Login::LoginField.by().unwrap(), ResolvedLocator::xpath("//input[@id='username']"));
    assert_eq!(Login::PasswordField.by().unwrap().strategy(), LocatorStrategy::Id);
    assert_eq!(
        Login::SubmitButton.by_with(&["submit"]).unwrap(),
        ResolvedLocator::css("button[type='submit']")
    );
}

#[test]
fn unsupported_strategy_is_a_configuration_error() {
    let err = Login::LogoutButton.by().unwrap_err();
    assert!(matches!(err, PageError::UnsupportedLocatorStrategy { .. }));
    assert!(err.to_string().contains("Log out"));
    assert!(!err.is_transient());
}

#[test]
fn chaining_takes_container_arguments_first() {
    let by = DialogRow::Cell.chained_by_with(&["users", "7", "2", "3"]).unwrap();
    assert_eq!(by.value(), "//div[@role='dialog' and @data-id='users-7']//tr[2]/td[3]");
}

#[test]
fn repeated_child_pattern_reuses_container_arguments() {
    let by = DialogRow::CellRepeated.chained_by_with(&["users", "7"]).unwrap();
    assert_eq!(
        by.value(),
        "//div[@role='dialog' and @data-id='users-7']//td[@data-owner='users-7']"
    );
}

#[test]
fn chaining_without_arguments_keeps_placeholders() {
    let by = DialogRow::Plain.chained_by().unwrap();
    assert_eq!(by.value(), "//div[@role='dialog' and @data-id='%s-%s']//tr");
    assert_eq!(by.strategy(), LocatorStrategy::XPath);
}

#[test]
fn chaining_with_wrong_argument_count_fails() {
    let err = Dialog::Title.chained_by_with(&["users"]).unwrap_err();
    assert!(matches!(err, PageError::Format(FormatError::MissingArgument { index: 2, .. })));
}

#[test]
fn resolution_is_repeatable() {
    let d = LocatorDescriptor::xpath("//li[%s][@data-id='%s']");
    let first = resolve(&d, &["1", "abc"]).unwrap();
    let second = resolve(&d, &["1", "abc"]).unwrap();
    assert_eq!(first, second);
    assert_eq!(resolve_string(&d, &["1", "abc"]).unwrap(), first.value());
}

#[test]
fn owned_patterns_are_supported() {
    let d = LocatorDescriptor::new(LocatorStrategy::Css, format!("#{}", "generated-%s"));
    assert_eq!(resolve(&d, &[String::from("42")]).unwrap().value(), "#generated-42");
}
