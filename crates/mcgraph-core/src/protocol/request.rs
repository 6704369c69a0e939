//! Cache request variants.
//!
//! Requests are immutable once handed to the routing graph: nodes that need
//! a different request build a new one from a clone. Payloads are `Bytes`,
//! so a clone shares the underlying buffers instead of copying them.

use bytes::Bytes;
use serde::Deserialize;

/// Expiration sentinel: the item never expires.
pub const EXPTIME_NEVER: i32 = 0;

/// Capability of request types that carry an expiration (TTL) field.
pub trait HasExptime {
    fn exptime(&self) -> i32;
    fn set_exptime(&mut self, exptime: i32);
}

/// Storage mode of an update request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateMode {
    #[default]
    Set,
    Add,
    Replace,
    Append,
    Prepend,
}

impl UpdateMode {
    pub fn as_str(self) -> &'static str {
        match self {
            UpdateMode::Set => "set",
            UpdateMode::Add => "add",
            UpdateMode::Replace => "replace",
            UpdateMode::Append => "append",
            UpdateMode::Prepend => "prepend",
        }
    }
}

/// Direction of an arithmetic request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArithMode {
    #[default]
    Incr,
    Decr,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetRequest {
    pub key: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateRequest {
    #[serde(default)]
    pub mode: UpdateMode,
    pub key: Bytes,
    #[serde(default)]
    pub value: Bytes,
    #[serde(default)]
    pub flags: u64,
    #[serde(default)]
    pub exptime: i32,
}

impl UpdateRequest {
    /// Plain `set` with no flags.
    pub fn set(key: impl Into<Bytes>, value: impl Into<Bytes>, exptime: i32) -> Self {
        Self {
            mode: UpdateMode::Set,
            key: key.into(),
            value: value.into(),
            flags: 0,
            exptime,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CasRequest {
    pub key: Bytes,
    #[serde(default)]
    pub value: Bytes,
    #[serde(default)]
    pub flags: u64,
    #[serde(default)]
    pub exptime: i32,
    pub cas_token: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TouchRequest {
    pub key: Bytes,
    #[serde(default)]
    pub exptime: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeleteRequest {
    pub key: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArithRequest {
    #[serde(default)]
    pub mode: ArithMode,
    pub key: Bytes,
    #[serde(default = "default_delta")]
    pub delta: u64,
}

fn default_delta() -> u64 {
    1
}

macro_rules! impl_has_exptime {
    ($($ty:ty),* $(,)?) => {
        $(
            impl HasExptime for $ty {
                fn exptime(&self) -> i32 {
                    self.exptime
                }
                fn set_exptime(&mut self, exptime: i32) {
                    self.exptime = exptime;
                }
            }
        )*
    };
}

impl_has_exptime!(UpdateRequest, CasRequest, TouchRequest);

/// Any request the routing graph can carry.
///
/// Decodes from JSON with a `type` tag, e.g.
/// `{"type": "update", "mode": "add", "key": "k", "value": "v", "exptime": 30}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Request {
    Get(GetRequest),
    Update(UpdateRequest),
    Cas(CasRequest),
    Touch(TouchRequest),
    Delete(DeleteRequest),
    Arith(ArithRequest),
    Version,
}

impl Request {
    /// Operation name as a memcache client would spell it.
    pub fn op_name(&self) -> &'static str {
        match self {
            Request::Get(_) => "get",
            Request::Update(r) => r.mode.as_str(),
            Request::Cas(_) => "cas",
            Request::Touch(_) => "touch",
            Request::Delete(_) => "delete",
            Request::Arith(r) => match r.mode {
                ArithMode::Incr => "incr",
                ArithMode::Decr => "decr",
            },
            Request::Version => "version",
        }
    }

    pub fn key(&self) -> Option<&Bytes> {
        match self {
            Request::Get(r) => Some(&r.key),
            Request::Update(r) => Some(&r.key),
            Request::Cas(r) => Some(&r.key),
            Request::Touch(r) => Some(&r.key),
            Request::Delete(r) => Some(&r.key),
            Request::Arith(r) => Some(&r.key),
            Request::Version => None,
        }
    }

    /// Expiration of variants that carry one; `None` for the rest.
    pub fn exptime(&self) -> Option<i32> {
        self.as_has_exptime().map(|r| r.exptime())
    }

    /// View of the expiration capability, if this variant has it.
    pub fn as_has_exptime(&self) -> Option<&dyn HasExptime> {
        match self {
            Request::Update(r) => Some(r),
            Request::Cas(r) => Some(r),
            Request::Touch(r) => Some(r),
            Request::Get(_) | Request::Delete(_) | Request::Arith(_) | Request::Version => None,
        }
    }
}

impl From<GetRequest> for Request {
    fn from(r: GetRequest) -> Self {
        Request::Get(r)
    }
}

impl From<UpdateRequest> for Request {
    fn from(r: UpdateRequest) -> Self {
        Request::Update(r)
    }
}

impl From<CasRequest> for Request {
    fn from(r: CasRequest) -> Self {
        Request::Cas(r)
    }
}

impl From<TouchRequest> for Request {
    fn from(r: TouchRequest) -> Self {
        Request::Touch(r)
    }
}

impl From<DeleteRequest> for Request {
    fn from(r: DeleteRequest) -> Self {
        Request::Delete(r)
    }
}

impl From<ArithRequest> for Request {
    fn from(r: ArithRequest) -> Self {
        Request::Arith(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exptime_capability_by_variant() {
        let set: Request = UpdateRequest::set("k", "v", 30).into();
        assert_eq!(set.exptime(), Some(30));

        let touch: Request = TouchRequest {
            key: "k".into(),
            exptime: 0,
        }
        .into();
        assert_eq!(touch.exptime(), Some(EXPTIME_NEVER));

        let get: Request = GetRequest { key: "k".into() }.into();
        assert_eq!(get.exptime(), None);
        assert_eq!(Request::Version.exptime(), None);
    }

    #[test]
    fn op_names() {
        let mut add = UpdateRequest::set("k", "v", 0);
        add.mode = UpdateMode::Add;
        assert_eq!(Request::from(add).op_name(), "add");

        let decr = ArithRequest {
            mode: ArithMode::Decr,
            key: "n".into(),
            delta: 2,
        };
        assert_eq!(Request::from(decr).op_name(), "decr");
        assert_eq!(Request::Version.op_name(), "version");
        assert!(Request::Version.key().is_none());
    }

    #[test]
    fn clone_is_independent() {
        let original = UpdateRequest::set("k", "v", 10);
        let mut copy = original.clone();
        copy.set_exptime(99);
        assert_eq!(original.exptime(), 10);
        assert_eq!(copy.exptime(), 99);
        assert_eq!(copy.value, original.value);
    }
}
