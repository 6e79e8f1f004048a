use serde::{Deserialize, Deserializer, Serialize};

/// Fields shared by every catalog entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BaseObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub modified: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub origin: i64,
}

impl BaseObject {
    /// Clears everything the server assigns, so the entity can be added again.
    pub fn clear_server_fields(&mut self) {
        self.id = None;
        self.created = 0;
        self.modified = 0;
    }
}

/// Common access to the identity of an entity.
pub trait Entity {
    fn base(&self) -> &BaseObject;

    fn base_mut(&mut self) -> &mut BaseObject;

    fn name(&self) -> &str;

    fn id(&self) -> Option<&str> {
        self.base().id.as_deref()
    }
}

macro_rules! impl_entity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::base::Entity for $ty {
                fn base(&self) -> &$crate::base::BaseObject {
                    &self.base
                }

                fn base_mut(&mut self) -> &mut $crate::base::BaseObject {
                    &mut self.base
                }

                fn name(&self) -> &str {
                    &self.name
                }
            }
        )+
    };
}

pub(crate) use impl_entity;

// The service serializes absent values as explicit nulls.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
