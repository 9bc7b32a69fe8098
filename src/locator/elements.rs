//! Element catalogs.
//!
//! A page (or modal, or form) declares its elements as a plain enum and implements
//! [`PageElement`] for it. Elements nested inside a container element also implement
//! [`ContainerPageElement`], which prepends the container's pattern to their own.
//!
//! # Example:
//! ```rust
//! use page_elements_sync::locator::{ContainerPageElement, LocatorDescriptor, PageElement};
//!
//! #[derive(Debug, Clone, Copy)]
//! enum Modal {
//!     Container,
//!     Row,
//!     RowRepeated,
//! }
//!
//! impl PageElement for Modal {
//!     fn descriptor(&self) -> LocatorDescriptor {
//!         match self {
//!             Modal::Container => LocatorDescriptor::xpath("//div[@id='modal-%s']"),
//!             Modal::Row => LocatorDescriptor::xpath("//tr[%s]"),
//!             Modal::RowRepeated => LocatorDescriptor::xpath("//tr[@data-modal='%1$s']"),
//!         }
//!     }
//! }
//!
//! impl ContainerPageElement for Modal {
//!     type Container = Modal;
//!
//!     fn container(&self) -> Modal {
//!         Modal::Container
//!     }
//! }
//!
//! # fn main() -> page_elements_sync::error::PageResult<()> {
//! assert_eq!(Modal::Row.chained_by_with(&["a", "3"])?.value(), "//div[@id='modal-a']//tr[3]");
//! assert_eq!(
//!     Modal::RowRepeated.chained_by_with(&["a"])?.value(),
//!     "//div[@id='modal-a']//tr[@data-modal='a']"
//! );
//! # Ok(())
//! # }
//! ```

use std::fmt::Debug;

use log::trace;

use crate::error::PageResult;
use crate::locator::format::format_pattern;
use crate::locator::resolver::supported_strategy;
use crate::locator::{resolve, resolve_string, LocatorDescriptor, ResolvedLocator};

const NO_ARGS: &[&str] = &[];

/// Anything that owns exactly one locator descriptor.
pub trait PageElement: Debug {
    fn descriptor(&self) -> LocatorDescriptor;

    /// The locator exactly as declared.
    fn by(&self) -> PageResult<ResolvedLocator> {
        resolve(&self.descriptor(), NO_ARGS)
    }

    /// The locator with `args` substituted into its placeholders.
    fn by_with<S: AsRef<str>>(&self, args: &[S]) -> PageResult<ResolvedLocator>
    where
        Self: Sized,
    {
        resolve(&self.descriptor(), args)
    }

    /// Locator string as-is, without resolving any placeholders.
    fn locator_string(&self) -> PageResult<String> {
        resolve_string(&self.descriptor(), NO_ARGS)
    }

    /// Locator string with placeholders substituted.
    fn locator_string_with<S: AsRef<str>>(&self, args: &[S]) -> PageResult<String>
    where
        Self: Sized,
    {
        resolve_string(&self.descriptor(), args)
    }
}

/// An element nested inside a container element.
///
/// Child patterns are fragments appended directly to the container's pattern, so they
/// should start with `//` rather than `.//`.
pub trait ContainerPageElement: PageElement {
    type Container: PageElement;

    /// The element whose locator is prepended to this one.
    fn container(&self) -> Self::Container;

    /// Container pattern followed by this element's pattern, with no substitution.
    fn chained_by(&self) -> PageResult<ResolvedLocator> {
        let descriptor = self.descriptor();
        let strategy = supported_strategy(&descriptor)?;
        let chained = self.container().locator_string()? + &resolve_string(&descriptor, NO_ARGS)?;
        Ok(ResolvedLocator::new(strategy, chained))
    }

    /// Concatenate both patterns first, then substitute `args` over the whole.
    ///
    /// Arguments are given container first, then child, each in pattern order. A child
    /// pattern using indexed placeholders (`%1$s`) refers to the same numbering, so it
    /// can reuse the container's arguments without them being passed twice.
    fn chained_by_with<S: AsRef<str>>(&self, args: &[S]) -> PageResult<ResolvedLocator>
    where
        Self: Sized,
    {
        if args.is_empty() {
            return self.chained_by();
        }
        let descriptor = self.descriptor();
        let strategy = supported_strategy(&descriptor)?;
        let template = self.container().locator_string()? + &resolve_string(&descriptor, NO_ARGS)?;
        let value = format_pattern(&template, args)?;
        trace!("chained {}: {}", strategy, value);
        Ok(ResolvedLocator::new(strategy, value))
    }
}
