#[macro_export]
macro_rules! define_custom_tagname {
    ($name:ident, $tagName:expr, $namespace:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name;

        impl $crate::cores::TagName for $name {
            const TAG_NAME: &'static str = $tagName;
            const NAMESPACE: Option<&'static str> = $namespace;
        }

        impl $name {
            pub fn new_tag<V>(value: V) -> $crate::cores::Tag<V, Self> {
                $crate::cores::Tag::new(value)
            }
        }
    };
}

#[macro_export]
macro_rules! define_tagname {
    ($name:ident, $namespace:expr) => {
        $crate::define_custom_tagname!($name, stringify!($name), $namespace);
    };
}

/// Declares a string-backed enum of the remote type system.
///
/// Each variant maps to its exact wire literal. The first variant is the
/// `Default`. A literal that is not listed decodes to `Other` and is written
/// back unchanged, so values from newer servers survive a round trip.
///
/// ```
/// vboxweb_soap::define_wire_enum! {
///     /// Power state of a machine.
///     pub enum Power {
///         Off => "PoweredOff",
///         Running => "Running",
///     }
/// }
///
/// assert_eq!(Power::Running.as_wire_str(), "Running");
/// assert_eq!(Power::from_wire_str("PoweredOff"), Power::Off);
/// assert_eq!(Power::from_wire_str("Paused"), Power::Other("Paused".to_owned()));
/// assert!(!Power::from_wire_str("Paused").is_known());
/// ```
#[macro_export]
macro_rules! define_wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $first:ident => $first_wire:literal
            $(, $variant:ident => $wire:literal)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        $vis enum $name {
            #[default]
            $first,
            $($variant,)*
            /// A literal this client does not know, kept verbatim.
            Other(String),
        }

        impl $name {
            /// Every listed variant, in declaration order.
            pub const ALL: &'static [Self] = &[Self::$first, $(Self::$variant,)*];

            pub fn as_wire_str(&self) -> &str {
                match self {
                    Self::$first => $first_wire,
                    $(Self::$variant => $wire,)*
                    Self::Other(literal) => literal.as_str(),
                }
            }

            pub fn from_wire_str(literal: &str) -> Self {
                match literal {
                    $first_wire => Self::$first,
                    $($wire => Self::$variant,)*
                    other => Self::Other(other.to_owned()),
                }
            }

            pub const fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_wire_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from_wire_str(s))
            }
        }

        impl $crate::cores::WireScalar for $name {
            fn from_wire(text: &str) -> Result<Self, String> {
                let literal = text.trim();
                let value = Self::from_wire_str(literal);
                if !value.is_known() {
                    ::tracing::debug!(
                        enum_type = stringify!($name),
                        literal,
                        "keeping unrecognized enum literal"
                    );
                }
                Ok(value)
            }
        }

        impl<'a> $crate::cores::TagValue<'a> for $name {
            fn append_to_element(
                self,
                element: ::vboxweb_xml::builder::Element<'a>,
            ) -> ::vboxweb_xml::builder::Element<'a> {
                match self {
                    Self::Other(literal) => element.set_text(literal),
                    known => element.set_text(known.as_wire_str().to_owned()),
                }
            }
        }

        impl<'a> ::vboxweb_xml::parser::XmlDeserialize<'a> for $name {
            type Visitor = $crate::cores::ScalarVisitor<Self>;

            fn visitor() -> Self::Visitor {
                $crate::cores::ScalarVisitor::new()
            }
        }
    };
}
