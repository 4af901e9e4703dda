// Wrapper types making it harder to accidentaly use the wrong underlying type.

use std::{
    borrow::Cow,
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, de};

use crate::math::Vector3;

/// A block position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockPos(pub Vector3<i32>);

impl BlockPos {
    /// Creates a block position from its coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// The block containing the given world position.
    #[must_use]
    pub fn containing(pos: Vector3<f64>) -> Self {
        Self(pos.floor())
    }

    /// Offsets the position by the given amounts.
    #[must_use]
    pub fn offset(&self, x: i32, y: i32, z: i32) -> Self {
        Self(self.0.offset(x, y, z))
    }

    /// The position `n` blocks above.
    #[must_use]
    pub fn above(&self, n: i32) -> Self {
        self.offset(0, n, 0)
    }

    /// The position directly below.
    #[must_use]
    pub fn below(&self) -> Self {
        self.offset(0, -1, 0)
    }

    /// X coordinate
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.0.x
    }

    /// Y coordinate
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.0.y
    }

    /// Z coordinate
    #[must_use]
    pub const fn z(&self) -> i32 {
        self.0.z
    }
}

/// A namespaced identifier such as `minecraft:iron_ingot`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceLocation {
    /// Namespace part, `minecraft` for vanilla content.
    pub namespace: Cow<'static, str>,
    /// Path part.
    pub path: Cow<'static, str>,
}

impl ResourceLocation {
    /// The vanilla namespace.
    pub const VANILLA_NAMESPACE: &'static str = "minecraft";

    /// Creates a vanilla location usable in constants.
    #[must_use]
    pub const fn vanilla_static(path: &'static str) -> Self {
        ResourceLocation {
            namespace: Cow::Borrowed(Self::VANILLA_NAMESPACE),
            path: Cow::Borrowed(path),
        }
    }

    /// Whether `namespace_char` may appear in a namespace.
    #[must_use]
    pub fn valid_namespace_char(namespace_char: char) -> bool {
        namespace_char == '_'
            || namespace_char == '-'
            || namespace_char.is_ascii_lowercase()
            || namespace_char.is_ascii_digit()
            || namespace_char == '.'
    }

    /// Whether `path_char` may appear in a path.
    #[must_use]
    pub fn valid_path_char(path_char: char) -> bool {
        path_char == '_'
            || path_char == '-'
            || path_char.is_ascii_lowercase()
            || path_char.is_ascii_digit()
            || path_char == '/'
            || path_char == '.'
    }

    /// Validates a namespace.
    #[must_use]
    pub fn validate_namespace(namespace: &str) -> bool {
        !namespace.is_empty() && namespace.chars().all(Self::valid_namespace_char)
    }

    /// Validates a path.
    #[must_use]
    pub fn validate_path(path: &str) -> bool {
        !path.is_empty() && path.chars().all(Self::valid_path_char)
    }
}

impl Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for ResourceLocation {
    type Err = String;

    /// Parses `namespace:path`; a bare path gets the vanilla namespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, path) = match s.split_once(':') {
            Some((namespace, path)) => (namespace, path),
            None => (Self::VANILLA_NAMESPACE, s),
        };

        if !ResourceLocation::validate_namespace(namespace) {
            return Err(format!("Invalid namespace: {namespace}"));
        }

        if !ResourceLocation::validate_path(path) {
            return Err(format!("Invalid path: {path}"));
        }

        Ok(ResourceLocation {
            namespace: Cow::Owned(namespace.to_string()),
            path: Cow::Owned(path.to_string()),
        })
    }
}

impl<'de> Deserialize<'de> for ResourceLocation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
