//! Single-key JSON envelope codec.
//!
//! The resell API wraps every payload in an object keyed by the resource
//! name: `{"user": {...}}` for a single entity and `{"users": [...]}` for a
//! collection. [`encode`] and [`decode`] handle that wrapping for any payload
//! type with the key chosen at the call site.

use serde::de::{self, DeserializeOwned, DeserializeSeed, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Borrowed view of a payload wrapped under `key`.
#[derive(Debug)]
pub struct Envelope<'a, T: ?Sized> {
    key: &'a str,
    payload: &'a T,
}

impl<'a, T: ?Sized> Envelope<'a, T> {
    /// Wrap `payload` under `key`.
    #[must_use]
    pub const fn new(key: &'a str, payload: &'a T) -> Self {
        Self { key, payload }
    }
}

impl<T> Serialize for Envelope<'_, T>
where
    T: Serialize + ?Sized,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, self.payload)?;
        map.end()
    }
}

/// Serialize `payload` as `{"<key>": payload}`.
///
/// # Errors
///
/// Returns the serializer error if the payload cannot be represented as JSON.
pub fn encode<T>(key: &str, payload: &T) -> serde_json::Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    serde_json::to_vec(&Envelope::new(key, payload))
}

/// Decode the value stored under `key` from a JSON object, ignoring any
/// sibling keys.
///
/// # Errors
///
/// Fails if the body is not JSON, is not an object, lacks `key`, or the
/// value under `key` does not match `T`.
pub fn decode<T>(key: &str, body: &[u8]) -> serde_json::Result<T>
where
    T: DeserializeOwned,
{
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    let value = EnvelopeSeed::<T>::new(key).deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(value)
}

/// Seed that extracts one key from a map.
struct EnvelopeSeed<'k, T> {
    key: &'k str,
    marker: PhantomData<T>,
}

impl<'k, T> EnvelopeSeed<'k, T> {
    const fn new(key: &'k str) -> Self {
        Self {
            key,
            marker: PhantomData,
        }
    }
}

impl<'de, T> DeserializeSeed<'de> for EnvelopeSeed<'_, T>
where
    T: DeserializeOwned,
{
    type Value = T;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<T, D::Error> {
        deserializer.deserialize_map(self)
    }
}

impl<'de, T> Visitor<'de> for EnvelopeSeed<'_, T>
where
    T: DeserializeOwned,
{
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "an object with a `{}` key", self.key)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<T, A::Error> {
        let mut found = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == self.key {
                if found.is_some() {
                    return Err(de::Error::custom(format_args!(
                        "duplicate field `{}`",
                        self.key
                    )));
                }
                found = Some(map.next_value::<T>()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        found.ok_or_else(|| de::Error::custom(format_args!("missing field `{}`", self.key)))
    }
}
