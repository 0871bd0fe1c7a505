use std::borrow::Cow;

use crate::builder::{AliasMap, Namespace, NamespaceWrite, XmlBuilderError, escape};

/// Represents an XML attribute with a name and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute<'a> {
    /// The name of the attribute.
    name: &'a str,
    /// The value of the attribute, escaped on write.
    value: Cow<'a, str>,

    namespace: Option<Namespace<'a>>,
}

impl<'a> Attribute<'a> {
    /// Creates a new instance of `Attribute`.
    ///
    /// # Example
    ///
    /// ```
    /// use vboxweb_xml::builder::Attribute;
    /// let attribute = Attribute::new("name", "value");
    /// ```
    pub fn new(name: &'a str, value: impl Into<Cow<'a, str>>) -> Self {
        Attribute {
            name,
            value: value.into(),
            namespace: None,
        }
    }

    pub fn new_with_namespace(
        name: &'a str,
        value: impl Into<Cow<'a, str>>,
        namespace: Option<impl Into<Namespace<'a>>>,
    ) -> Self {
        Attribute {
            name,
            value: value.into(),
            namespace: namespace.map(Into::into),
        }
    }

    pub fn set_namespace(mut self, namespace: impl Into<Namespace<'a>>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl<'a> NamespaceWrite<'a> for Attribute<'a> {
    fn ns_write<W: std::io::Write>(
        &self,
        w: &mut W,
        aliases: Option<&AliasMap<'a>>,
    ) -> Result<(), XmlBuilderError> {
        let prefix = match &self.namespace {
            None => None,
            Some(ns) => {
                let aliases = aliases.ok_or_else(|| XmlBuilderError::MissingAliasMapForAttribute {
                    attr: self.name.to_owned(),
                    ns: ns.url.to_owned(),
                })?;
                match aliases.get(ns) {
                    Some(Some(alias)) => Some(*alias),
                    // Unprefixed attributes never belong to the default namespace.
                    Some(None) => {
                        return Err(XmlBuilderError::NamespaceHasNoAlias {
                            tag: self.name.to_owned(),
                            ns: ns.url.to_owned(),
                        });
                    }
                    None => {
                        return Err(XmlBuilderError::NamespaceNotDeclared {
                            tag: self.name.to_owned(),
                            ns: ns.url.to_owned(),
                        });
                    }
                }
            }
        };

        match prefix {
            Some(prefix) => write!(w, " {prefix}:{}", self.name)?,
            None => write!(w, " {}", self.name)?,
        }
        write!(w, "=\"{}\"", escape(&self.value))?;
        Ok(())
    }
}
