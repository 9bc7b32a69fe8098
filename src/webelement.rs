use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use thirtyfour::common::command::MAGIC_ELEMENTID;
use thirtyfour::ElementId;

use crate::error::{PageError, PageResult};

/// A reference to a single element on the page, as returned by a find command.
///
/// The reference is only meaningful to the session that returned it, and goes stale
/// when the page re-renders the element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WebElement {
    pub element_id: ElementId,
}

impl WebElement {
    pub fn new(element_id: ElementId) -> Self {
        WebElement { element_id }
    }
}

impl fmt::Display for WebElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, r#"(element="{}")"#, self.element_id)
    }
}

/// Serialized as a W3C element reference so it can be passed as a script argument.
impl Serialize for WebElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(MAGIC_ELEMENTID, &self.element_id.to_string())?;
        map.end()
    }
}

/// Unwrap the raw JSON into a WebElement struct.
pub fn convert_element(value: &Value) -> PageResult<WebElement> {
    value[MAGIC_ELEMENTID]
        .as_str()
        .map(|id| WebElement::new(ElementId::from(id)))
        .ok_or_else(|| PageError::UnexpectedResponse(format!("not an element reference: {}", value)))
}

/// Unwrap the raw JSON into a Vec of WebElement structs.
pub fn convert_elements(value: &Value) -> PageResult<Vec<WebElement>> {
    value
        .as_array()
        .ok_or_else(|| PageError::UnexpectedResponse(format!("not an element list: {}", value)))?
        .iter()
        .map(convert_element)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn element_reference_round_trips_through_json() {
        let elem = WebElement::new(ElementId::from("abc-123"));
        let value = serde_json::to_value(&elem).unwrap();
        assert_eq!(value, json!({ MAGIC_ELEMENTID: "abc-123" }));
        assert_eq!(convert_element(&value).unwrap(), elem);
    }

    #[test]
    fn malformed_references_are_rejected() {
        assert!(convert_element(&json!({"id": "x"})).is_err());
        assert!(convert_elements(&json!({})).is_err());
        assert!(convert_elements(&json!([])).unwrap().is_empty());
    }
}
