use core::fmt;

/// Represents a namespace in XML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Namespace<'a> {
    pub url: &'a str,
}

impl fmt::Display for Namespace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.url.fmt(f)
    }
}

impl<'a> From<&'a str> for Namespace<'a> {
    fn from(url: &'a str) -> Self {
        Namespace { url }
    }
}

impl<'a> Namespace<'a> {
    /// Creates a new instance of `Namespace` for the given URI.
    ///
    /// # Example
    ///
    /// ```
    /// use vboxweb_xml::builder::Namespace;
    /// let namespace = Namespace::new("http://www.virtualbox.org/");
    /// ```
    pub fn new(uri: &'a str) -> Self {
        Namespace { url: uri }
    }
}
