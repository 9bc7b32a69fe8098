use log::trace;

use crate::error::{PageError, PageResult};
use crate::locator::format::format_pattern;
use crate::locator::{LocatorDescriptor, LocatorStrategy, ResolvedLocator};

/// Resolve `descriptor` against `args`.
///
/// With no arguments the pattern is returned exactly as declared, even if it contains
/// `%` characters. Otherwise the arguments are substituted and the result trimmed
/// according to the strategy.
pub fn resolve<S: AsRef<str>>(descriptor: &LocatorDescriptor, args: &[S]) -> PageResult<ResolvedLocator> {
    let strategy = supported_strategy(descriptor)?;
    if args.is_empty() {
        return Ok(ResolvedLocator::new(strategy, descriptor.pattern()));
    }
    let value = trim_for(strategy, &format_pattern(descriptor.pattern(), args)?).to_string();
    trace!("{}: {}", strategy, value);
    Ok(ResolvedLocator::new(strategy, value))
}

/// Like [`resolve`], but returns only the pattern text.
///
/// The result is always trimmed, which makes it suitable for concatenating locator
/// fragments.
pub fn resolve_string<S: AsRef<str>>(descriptor: &LocatorDescriptor, args: &[S]) -> PageResult<String> {
    let strategy = supported_strategy(descriptor)?;
    if args.is_empty() {
        return Ok(trim_for(strategy, descriptor.pattern()).to_string());
    }
    let value = format_pattern(descriptor.pattern(), args)?;
    Ok(trim_for(strategy, &value).to_string())
}

pub(crate) fn supported_strategy(descriptor: &LocatorDescriptor) -> PageResult<LocatorStrategy> {
    let strategy = descriptor.strategy();
    if strategy.is_templatable() {
        Ok(strategy)
    } else {
        Err(PageError::UnsupportedLocatorStrategy {
            strategy,
            pattern: descriptor.pattern().to_string(),
        })
    }
}

/// Strip control characters and spaces from both ends.
fn trim_ascii(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

/// Ids additionally lose unicode whitespace such as no-break spaces.
fn trim_id(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ' || c.is_whitespace())
}

fn trim_for(strategy: LocatorStrategy, s: &str) -> &str {
    match strategy {
        LocatorStrategy::Id => trim_id(s),
        _ => trim_ascii(s),
    }
}
