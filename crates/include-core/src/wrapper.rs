//! The include-resolving field wrapper

use crate::capability::IncludeContext;
use crate::directive::Directive;
use crate::resolver::{self, Fetch, RootResolver};
use crate::{Error, Result};
use serde::de::{self, DeserializeOwned, DeserializeSeed, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::marker::PhantomData;
use std::ops::Deref;

/// A value that may be written inline or included by reference.
///
/// `C` is the resolution context, probed for capabilities when a directive
/// is decoded. It is never serialized and survives repeated decode and
/// encode cycles. `T` is the resolved value.
///
/// Encoding writes `T` inline, so an included field no longer carries its
/// directive after one round trip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wrapper<C, T> {
    context: C,
    value: T,
}

/// Wrapper resolving names against the process-wide root on the filesystem.
pub type Include<T> = Wrapper<RootResolver, T>;

/// Wrapper whose value type is also its resolution context.
pub type SelfInclude<T> = Wrapper<T, T>;

impl<C: Default, T> Wrapper<C, T> {
    pub fn new(value: T) -> Self {
        Self::with_context(C::default(), value)
    }
}

impl<C, T> Wrapper<C, T> {
    pub fn with_context(context: C, value: T) -> Self {
        Self { context, value }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn into_parts(self) -> (C, T) {
        (self.context, self.value)
    }
}

impl<T: Clone> Wrapper<T, T> {
    /// Use `seed` both as the resolution context and the initial value.
    pub fn self_resolving(seed: T) -> Self {
        Self {
            context: seed.clone(),
            value: seed,
        }
    }
}

impl<C, T> Wrapper<C, T>
where
    C: IncludeContext,
    T: DeserializeOwned,
{
    /// Decode one field's raw bytes using the context held by this wrapper.
    ///
    /// On error the previous value is left untouched.
    pub fn decode(&mut self, raw: &[u8]) -> Result<()> {
        let value: Value = serde_json::from_slice(raw).map_err(Error::Inline)?;
        self.decode_value(value)
    }

    /// Like [`Wrapper::decode`], for a field that is already parsed.
    pub fn decode_value(&mut self, raw: Value) -> Result<()> {
        self.value = decode_with(&self.context, raw)?;
        Ok(())
    }
}

impl<C, T: Serialize> Wrapper<C, T> {
    pub fn encode(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.value).map_err(Error::Serialization)
    }

    pub fn encode_pretty(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(&self.value).map_err(Error::Serialization)
    }
}

/// Resolve `raw` through `context` into a `T`.
fn decode_with<C, T>(context: &C, raw: Value) -> Result<T>
where
    C: IncludeContext + ?Sized,
    T: DeserializeOwned,
{
    let Some(directive) = Directive::parse(&raw) else {
        tracing::trace!("Decoding inline content");
        return T::deserialize(raw).map_err(Error::Inline);
    };

    let resolved = resolver::resolve(context, directive.name())?;
    let format = context.content_format(&resolved.path);
    let decoded = match resolved.fetch {
        Fetch::Data => format.decode(&resolved.content),
        Fetch::Stream | Fetch::Filesystem => format.decode_leading(&resolved.content),
    };
    decoded.map_err(|source| Error::content_invalid(directive.name(), format, source))
}

impl<C, T> Deref for Wrapper<C, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<C: Default, T> From<T> for Wrapper<C, T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<C, T: Serialize> Serialize for Wrapper<C, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

/// Decodes through `C::default()`. Use [`IncludeSeed`] or
/// [`Wrapper::decode`] to supply a configured context instead.
impl<'de, C, T> Deserialize<'de> for Wrapper<C, T>
where
    C: IncludeContext + Default,
    T: DeserializeOwned,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let context = C::default();
        let value = IncludeSeed::new(&context).deserialize(deserializer)?;
        Ok(Self { context, value })
    }
}

/// Deserializes an include field with a borrowed, caller-supplied context.
///
/// ```rust,no_run
/// use include_core::{DirResolver, IncludeSeed};
/// use serde::de::DeserializeSeed;
///
/// let ctx = DirResolver::new("./testdata");
/// let mut de = serde_json::Deserializer::from_str(r#"{"include": "int.json"}"#);
/// let n: i64 = IncludeSeed::new(&ctx).deserialize(&mut de).unwrap();
/// assert_eq!(n, 123);
/// ```
pub struct IncludeSeed<'a, C: ?Sized, T> {
    context: &'a C,
    marker: PhantomData<fn() -> T>,
}

impl<'a, C: ?Sized, T> IncludeSeed<'a, C, T> {
    pub fn new(context: &'a C) -> Self {
        Self {
            context,
            marker: PhantomData,
        }
    }
}

impl<'de, C, T> DeserializeSeed<'de> for IncludeSeed<'_, C, T>
where
    C: IncludeContext + ?Sized,
    T: DeserializeOwned,
{
    type Value = T;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> std::result::Result<T, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        decode_with(self.context, raw).map_err(de::Error::custom)
    }
}
