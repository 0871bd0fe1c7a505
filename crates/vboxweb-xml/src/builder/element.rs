use std::borrow::Cow;

use crate::builder::{AliasMap, Attribute, Namespace, NamespaceWrite, XmlBuilderError, escape};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content<'a> {
    /// Represents a text content within an XML element.
    Text(Cow<'a, str>),
    /// Represents a child element within an XML element.
    Elements(Vec<Element<'a>>),

    None,
}

/// Represents an XML element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element<'a> {
    /// The name of the element.
    name: &'a str,
    /// The namespace the element belongs to.
    namespace: Option<Namespace<'a>>,
    /// `xmlns` declarations made on this element, in insertion order.
    namespaces_declaration: Vec<(Namespace<'a>, Option<&'a str>)>,
    /// The attributes of the element.
    attributes: Vec<Attribute<'a>>,
    /// The child elements of the element.
    content: Content<'a>,
}

impl<'a> Element<'a> {
    /// Creates a new instance of `Element` with the given name.
    ///
    /// # Example
    ///
    /// ```
    /// use vboxweb_xml::builder::Element;
    /// let element = Element::new("root");
    /// ```
    pub fn new(name: &'a str) -> Self {
        Element {
            name,
            namespace: None,
            namespaces_declaration: Vec::new(),
            attributes: Vec::new(),
            content: Content::None,
        }
    }

    /// Puts the element in a namespace. The namespace must be declared on
    /// this element or one of its ancestors before the tree is written.
    ///
    /// # Example
    ///
    /// ```
    /// use vboxweb_xml::builder::{Element, Namespace};
    /// let element = Element::new("Envelope")
    ///     .set_namespace(Namespace::new("http://schemas.xmlsoap.org/soap/envelope/"))
    ///     .add_namespace_declaration("http://schemas.xmlsoap.org/soap/envelope/", Some("soap"));
    /// ```
    pub fn set_namespace(mut self, namespace: impl Into<Namespace<'a>>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn set_namespace_optional(mut self, namespace: Option<impl Into<Namespace<'a>>>) -> Self {
        self.namespace = namespace.map(Into::into);
        self
    }

    /// Declares `url` on this element, bound to `alias`, or as the default
    /// namespace when `alias` is `None`.
    pub fn add_namespace_declaration(mut self, url: &'a str, alias: Option<&'a str>) -> Self {
        self.namespaces_declaration.push((Namespace::new(url), alias));
        self
    }

    /// Adds an attribute to the element and returns a modified `Element`.
    pub fn add_attribute(mut self, attribute: Attribute<'a>) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Adds a child element. Any text content set earlier is replaced.
    ///
    /// # Example
    ///
    /// ```
    /// use vboxweb_xml::builder::Element;
    /// let child = Element::new("child");
    /// let element = Element::new("root")
    ///     .add_child(child);
    /// ```
    pub fn add_child(mut self, child: Element<'a>) -> Self {
        match self.content {
            Content::None | Content::Text(_) => {
                self.content = Content::Elements(vec![child]);
            }
            Content::Elements(ref mut children) => {
                children.push(child);
            }
        }
        self
    }

    pub fn add_children(mut self, children: Vec<Element<'a>>) -> Self {
        for child in children {
            self = self.add_child(child);
        }
        self
    }

    /// Sets the text content of the element, replacing any children.
    ///
    /// # Example
    ///
    /// ```
    /// use vboxweb_xml::builder::Element;
    /// let element = Element::new("returnval")
    ///    .set_text("MyVM");
    /// ```
    pub fn set_text(mut self, text: impl Into<Cow<'a, str>>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn with_text(&mut self, text: impl Into<Cow<'a, str>>) -> &mut Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn namespace(&self) -> Option<&Namespace<'a>> {
        self.namespace.as_ref()
    }

    pub fn content(&self) -> &Content<'a> {
        &self.content
    }

    /// Returns the text content, if the element holds text.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the child elements, empty when the element holds text or nothing.
    pub fn children(&self) -> &[Element<'a>] {
        match &self.content {
            Content::Elements(children) => children,
            _ => &[],
        }
    }

    fn qualified_name(&self, aliases: &AliasMap<'a>) -> Result<Cow<'a, str>, XmlBuilderError> {
        let Some(ns) = &self.namespace else {
            return Ok(Cow::Borrowed(self.name));
        };

        match aliases.get(ns) {
            Some(Some(alias)) => Ok(Cow::Owned(format!("{alias}:{}", self.name))),
            Some(None) => Ok(Cow::Borrowed(self.name)),
            None => Err(XmlBuilderError::NamespaceNotDeclared {
                tag: self.name.to_owned(),
                ns: ns.url.to_owned(),
            }),
        }
    }
}

impl<'a> NamespaceWrite<'a> for Element<'a> {
    fn ns_write<W: std::io::Write>(
        &self,
        w: &mut W,
        aliases: Option<&AliasMap<'a>>,
    ) -> Result<(), XmlBuilderError> {
        // Declarations made here shadow the inherited ones for the whole subtree.
        let mut scope = aliases.cloned().unwrap_or_default();
        for (ns, alias) in &self.namespaces_declaration {
            scope.insert(*ns, *alias);
        }

        let name = self.qualified_name(&scope)?;
        write!(w, "<{name}")?;

        for (ns, alias) in &self.namespaces_declaration {
            match alias {
                Some(alias) => write!(w, " xmlns:{alias}=\"{}\"", escape(ns.url))?,
                None => write!(w, " xmlns=\"{}\"", escape(ns.url))?,
            }
        }

        for attribute in &self.attributes {
            attribute.ns_write(w, Some(&scope))?;
        }

        match &self.content {
            Content::None => {
                w.write_all(b"/>")?;
            }
            Content::Text(value) => {
                write!(w, ">{}</{name}>", escape(value))?;
            }
            Content::Elements(children) => {
                w.write_all(b">")?;
                for child in children {
                    child.ns_write(w, Some(&scope))?;
                }
                write!(w, "</{name}>")?;
            }
        }
        Ok(())
    }
}
