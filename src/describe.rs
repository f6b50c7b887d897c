use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::registry::{EnumRegistry, EnumTypeMetadata};

/// A raw value from a schema's enum list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumValue {
    Numeric(i64),
    Text(String),
}

impl EnumValue {
    /// `None` for anything but an integer or a string
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(number) => number.as_i64().map(Self::Numeric),
            Value::String(text) => Some(Self::Text(text.clone())),
            _ => None,
        }
    }
}

/// Format one line per raw value and join them with `separator`.
///
/// String values are member names and render as `"<name> = <description>"`.
/// Numeric values are mapped through the member codes and render as
/// `"<code> = <name> (<description>)"`; a code without a member is an error.
pub fn describe_values(
    metadata: &EnumTypeMetadata,
    values: &[EnumValue],
    separator: &str,
) -> Result<String> {
    let lines = values
        .iter()
        .map(|value| match value {
            EnumValue::Text(name) => Ok(format!(
                "{name} = {}",
                metadata.description_of(name).unwrap_or_default()
            )),
            EnumValue::Numeric(code) => {
                let member = metadata
                    .by_code(*code)
                    .ok_or_else(|| Error::NumericValueUnmapped {
                        type_name: metadata.name.clone(),
                        code: *code,
                    })?;
                Ok(format!(
                    "{code} = {} ({})",
                    member.name,
                    member.description.as_deref().unwrap_or_default()
                ))
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(lines.join(separator))
}

/// Resolves enum types against a registry and renders their value lists.
#[derive(Debug, Clone, Copy)]
pub struct EnumValueDescriber<'a> {
    registry: &'a EnumRegistry,
    separator: &'a str,
}

impl<'a> EnumValueDescriber<'a> {
    pub fn new(registry: &'a EnumRegistry, separator: &'a str) -> Self {
        Self {
            registry,
            separator,
        }
    }

    pub fn separator(&self) -> &'a str {
        self.separator
    }

    /// Describe `values` as members of the enum named `type_name`.
    ///
    /// Returns `Ok(None)` when the registry has no such type.
    pub fn describe(&self, type_name: &str, values: &[EnumValue]) -> Result<Option<String>> {
        let Some(metadata) = self.registry.lookup(type_name) else {
            debug!(type_name, "no registered enum type, description left unchanged");
            return Ok(None);
        };
        describe_values(metadata, values, self.separator).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::EnumMember;
    use serde_json::json;

    fn basket_status() -> EnumTypeMetadata {
        EnumTypeMetadata::new("BasketStatus", "shop")
            .with_member(EnumMember::new("Basket", 0).described("Still a basket"))
            .with_member(EnumMember::new("Order", 1).described("Order has been placed"))
            .with_member(EnumMember::new("Gone", 4))
    }

    #[test]
    fn parses_json_values() {
        assert_eq!(EnumValue::from_json(&json!(3)), Some(EnumValue::Numeric(3)));
        assert_eq!(EnumValue::from_json(&json!(-1)), Some(EnumValue::Numeric(-1)));
        assert_eq!(
            EnumValue::from_json(&json!("Order")),
            Some(EnumValue::Text("Order".into()))
        );
        assert_eq!(EnumValue::from_json(&json!(1.5)), None);
        assert_eq!(EnumValue::from_json(&json!(true)), None);
        assert_eq!(EnumValue::from_json(&json!(null)), None);
    }

    #[test]
    fn describes_numeric_values() {
        let text = describe_values(
            &basket_status(),
            &[EnumValue::Numeric(0), EnumValue::Numeric(1)],
            "<br />",
        )
        .unwrap();
        assert_eq!(
            text,
            "0 = Basket (Still a basket)<br />1 = Order (Order has been placed)"
        );
    }

    #[test]
    fn undocumented_member_gets_empty_parentheses() {
        let text = describe_values(&basket_status(), &[EnumValue::Numeric(4)], "\n").unwrap();
        assert_eq!(text, "4 = Gone ()");
    }

    #[test]
    fn describes_string_values() {
        let text = describe_values(
            &basket_status(),
            &[
                EnumValue::Text("Order".into()),
                EnumValue::Text("Gone".into()),
                EnumValue::Text("Unknown".into()),
            ],
            "\n",
        )
        .unwrap();
        assert_eq!(text, "Order = Order has been placed\nGone = \nUnknown = ");
    }

    #[test]
    fn unmapped_code_is_an_error() {
        let err = describe_values(
            &basket_status(),
            &[EnumValue::Numeric(0), EnumValue::Numeric(9)],
            "\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::NumericValueUnmapped { ref type_name, code: 9 } if type_name == "BasketStatus"
        ));
        assert_eq!(err.to_string(), "enum `BasketStatus` has no member with code 9");
    }

    #[test]
    fn describer_skips_unknown_types() {
        let mut registry = EnumRegistry::new("shop");
        registry.insert(basket_status());
        let describer = EnumValueDescriber::new(&registry, "<br />");

        assert_eq!(
            describer
                .describe("Colour", &[EnumValue::Numeric(99)])
                .unwrap(),
            None
        );
        assert_eq!(
            describer
                .describe("BasketStatus", &[EnumValue::Numeric(4)])
                .unwrap()
                .as_deref(),
            Some("4 = Gone ()")
        );
    }
}
