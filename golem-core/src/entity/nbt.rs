//! NBT helpers for entity save data.
//!
//! Readers are lenient: a tag of an unexpected type reads as `None` so the
//! caller can fall back to its default.

use simdnbt::owned::{NbtCompound, NbtTag};
use uuid::Uuid;

/// Helper to parse boolean from NBT (accepts Byte or Int)
#[must_use]
pub fn nbt_bool(tag: &NbtTag) -> Option<bool> {
    match tag {
        NbtTag::Byte(b) => Some(*b != 0),
        NbtTag::Int(i) => Some(*i != 0),
        _ => None,
    }
}

/// Helper to parse i32 from NBT
#[must_use]
pub fn nbt_i32(tag: &NbtTag) -> Option<i32> {
    match tag {
        NbtTag::Byte(b) => Some(i32::from(*b)),
        NbtTag::Short(s) => Some(i32::from(*s)),
        NbtTag::Int(i) => Some(*i),
        _ => None,
    }
}

/// Helper to parse f32 from NBT
#[must_use]
pub fn nbt_f32(tag: &NbtTag) -> Option<f32> {
    match tag {
        NbtTag::Float(f) => Some(*f),
        NbtTag::Double(d) => Some(*d as f32),
        NbtTag::Int(i) => Some(*i as f32),
        _ => None,
    }
}

/// Parses a UUID stored as four big-endian ints, most significant first.
#[must_use]
pub fn nbt_uuid(tag: &NbtTag) -> Option<Uuid> {
    let NbtTag::IntArray(ints) = tag else {
        return None;
    };
    let [a, b, c, d] = ints.as_slice() else {
        return None;
    };

    let most = (u64::from(*a as u32) << 32) | u64::from(*b as u32);
    let least = (u64::from(*c as u32) << 32) | u64::from(*d as u32);
    Some(Uuid::from_u64_pair(most, least))
}

/// Encodes a UUID as the four-int array used in save files.
#[must_use]
pub fn uuid_to_nbt(uuid: Uuid) -> NbtTag {
    let (most, least) = uuid.as_u64_pair();
    NbtTag::IntArray(vec![
        (most >> 32) as i32,
        most as i32,
        (least >> 32) as i32,
        least as i32,
    ])
}

/// Writes a boolean the way the game does, as a byte.
pub fn put_bool(nbt: &mut NbtCompound, key: &str, value: bool) {
    nbt.insert(key, NbtTag::Byte(i8::from(value)));
}
