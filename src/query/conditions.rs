//! Single evaluations of each wait condition against live driver state.
//!
//! Every function here looks once and returns `Ok(Some(_))` when the condition holds
//! or `Ok(None)` when it does not hold yet.
//!
//! Transient errors (no such element, stale reference) mean "not yet" only when the
//! target is a locator, because the next poll looks it up again. A reference the caller
//! passed in cannot recover, so for element targets those errors are returned as they
//! are. Conditions about an element going away treat staleness as success instead.

use std::fmt;

use crate::driver::WebDriverCommands;
use crate::error::{absorb_transient, PageError, PageResult};
use crate::locator::ResolvedLocator;

/// The kinds of condition a [`Waiter`](super::Waiter) can poll for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionKind {
    Presence,
    AllPresent,
    Visibility,
    AllVisible,
    Clickable,
    Invisibility,
    AllInvisible,
    NotPresent,
    Selected,
    NotSelected,
    Custom,
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConditionKind::Presence => "presence",
            ConditionKind::AllPresent => "presence of all elements",
            ConditionKind::Visibility => "visibility",
            ConditionKind::AllVisible => "visibility of all elements",
            ConditionKind::Clickable => "element to be clickable",
            ConditionKind::Invisibility => "invisibility",
            ConditionKind::AllInvisible => "invisibility of all elements",
            ConditionKind::NotPresent => "staleness",
            ConditionKind::Selected => "element to be selected",
            ConditionKind::NotSelected => "element to be deselected",
            ConditionKind::Custom => "custom condition",
        };
        f.write_str(s)
    }
}

/// What a condition is evaluated against.
///
/// Locators are resolved again on every poll, which is what a wait needs when the
/// page may have been re-rendered and earlier references gone stale.
#[derive(Debug)]
pub enum Target<'a, E> {
    Locator(&'a ResolvedLocator),
    Element(&'a E),
}

impl<'a, E: fmt::Debug> Target<'a, E> {
    pub fn describe(&self) -> String {
        match self {
            Target::Locator(by) => format!("locator '{}'", by),
            Target::Element(e) => format!("element {:?}", e),
        }
    }
}

/// A group of elements a condition is evaluated against.
#[derive(Debug)]
pub enum Targets<'a, E> {
    Locator(&'a ResolvedLocator),
    Elements(&'a [E]),
}

impl<'a, E: fmt::Debug> Targets<'a, E> {
    pub fn describe(&self) -> String {
        match self {
            Targets::Locator(by) => format!("locator '{}'", by),
            Targets::Elements(e) => format!("{} element(s) {:?}", e.len(), e),
        }
    }
}

fn settle<T, E>(target: &Target<'_, E>, result: PageResult<Option<T>>) -> PageResult<Option<T>> {
    match target {
        Target::Locator(_) => absorb_transient(result, None),
        Target::Element(_) => result,
    }
}

fn settle_all<T, E>(targets: &Targets<'_, E>, result: PageResult<Option<T>>) -> PageResult<Option<T>> {
    match targets {
        Targets::Locator(_) => absorb_transient(result, None),
        Targets::Elements(_) => result,
    }
}

/// Look up the target, treating a vanished element as "not found".
fn lookup<D>(driver: &D, target: &Target<'_, D::Element>) -> PageResult<Option<D::Element>>
where
    D: WebDriverCommands + ?Sized,
{
    match target {
        Target::Locator(by) => match driver.find_element(by) {
            Ok(e) => Ok(Some(e)),
            Err(e) if e.is_transient() => Ok(None),
            Err(e) => Err(e),
        },
        Target::Element(e) => Ok(Some((*e).clone())),
    }
}

fn lookup_all<D>(driver: &D, targets: &Targets<'_, D::Element>) -> PageResult<Vec<D::Element>>
where
    D: WebDriverCommands + ?Sized,
{
    match targets {
        Targets::Locator(by) => driver.find_elements(by),
        Targets::Elements(e) => Ok(e.to_vec()),
    }
}

/// Scroll to the element, then check that it is displayed.
fn displayed<D>(driver: &D, element: &D::Element) -> PageResult<bool>
where
    D: WebDriverCommands + ?Sized,
{
    driver.scroll_into_view_centered(element)?;
    driver.is_displayed(element)
}

/// False if the element disappeared or went stale, true if it is hidden.
fn hidden<D>(driver: &D, element: &D::Element) -> PageResult<bool>
where
    D: WebDriverCommands + ?Sized,
{
    match driver.is_displayed(element) {
        Ok(shown) => Ok(!shown),
        Err(e) if e.is_transient() => Ok(true),
        Err(e) => Err(e),
    }
}

pub fn presence<D>(driver: &D, target: &Target<'_, D::Element>) -> PageResult<Option<D::Element>>
where
    D: WebDriverCommands + ?Sized,
{
    match target {
        Target::Locator(_) => lookup(driver, target),
        Target::Element(e) => Ok(if driver.is_stale(e)? { None } else { Some((*e).clone()) }),
    }
}

pub fn all_present<D>(driver: &D, targets: &Targets<'_, D::Element>) -> PageResult<Option<Vec<D::Element>>>
where
    D: WebDriverCommands + ?Sized,
{
    let result = lookup_all(driver, targets).and_then(|elements| {
        if elements.is_empty() {
            return Ok(None);
        }
        for e in &elements {
            if driver.is_stale(e)? {
                return Ok(None);
            }
        }
        Ok(Some(elements))
    });
    settle_all(targets, result)
}

pub fn visibility<D>(driver: &D, target: &Target<'_, D::Element>) -> PageResult<Option<D::Element>>
where
    D: WebDriverCommands + ?Sized,
{
    let result = lookup(driver, target).and_then(|found| match found {
        Some(e) if displayed(driver, &e)? => Ok(Some(e)),
        _ => Ok(None),
    });
    settle(target, result)
}

pub fn all_visible<D>(driver: &D, targets: &Targets<'_, D::Element>) -> PageResult<Option<Vec<D::Element>>>
where
    D: WebDriverCommands + ?Sized,
{
    let result = lookup_all(driver, targets).and_then(|elements| {
        if elements.is_empty() {
            return Ok(None);
        }
        for e in &elements {
            if !displayed(driver, e)? {
                return Ok(None);
            }
        }
        Ok(Some(elements))
    });
    settle_all(targets, result)
}

pub fn clickable<D>(driver: &D, target: &Target<'_, D::Element>) -> PageResult<Option<D::Element>>
where
    D: WebDriverCommands + ?Sized,
{
    let result = visibility(driver, target).and_then(|found| match found {
        Some(e) if driver.is_enabled(&e)? => Ok(Some(e)),
        _ => Ok(None),
    });
    settle(target, result)
}

pub fn invisibility<D>(driver: &D, target: &Target<'_, D::Element>) -> PageResult<Option<()>>
where
    D: WebDriverCommands + ?Sized,
{
    let satisfied = match lookup(driver, target)? {
        None => true,
        Some(e) => hidden(driver, &e)?,
    };
    Ok(if satisfied { Some(()) } else { None })
}

pub fn all_invisible<D>(driver: &D, targets: &Targets<'_, D::Element>) -> PageResult<Option<()>>
where
    D: WebDriverCommands + ?Sized,
{
    let elements = match lookup_all(driver, targets) {
        Ok(elements) => elements,
        Err(e) if e.is_transient() => Vec::new(),
        Err(e) => return Err(e),
    };
    for e in &elements {
        if !hidden(driver, e)? {
            return Ok(None);
        }
    }
    Ok(Some(()))
}

pub fn not_present<D>(driver: &D, target: &Target<'_, D::Element>) -> PageResult<Option<()>>
where
    D: WebDriverCommands + ?Sized,
{
    let gone = match target {
        Target::Locator(by) => driver.find_elements(by)?.is_empty(),
        Target::Element(e) => match driver.is_stale(e) {
            Ok(stale) => stale,
            Err(PageError::NoSuchElement(_)) => true,
            Err(e) => return Err(e),
        },
    };
    Ok(if gone { Some(()) } else { None })
}

pub fn selection_state<D>(
    driver: &D,
    target: &Target<'_, D::Element>,
    selected: bool,
) -> PageResult<Option<()>>
where
    D: WebDriverCommands + ?Sized,
{
    let result = lookup(driver, target).and_then(|found| match found {
        Some(e) if driver.is_selected(&e)? == selected => Ok(Some(())),
        _ => Ok(None),
    });
    settle(target, result)
}
