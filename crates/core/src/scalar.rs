//! Scalar getters and setters
//!
//! Numeric accessors all go through the single `Number` slot: setters widen
//! to `f64`, getters narrow with `as` (truncating toward zero, saturating at
//! the target's bounds, NaN to zero). A kind mismatch yields the zero value
//! on read and is ignored on write.

use crate::kind::Kind;
use crate::node::{Node, Payload};

impl Node {
    fn number(&self) -> Option<f64> {
        let mut payload = self.payload_mut();
        if !payload.ensure(Kind::Number) {
            return None;
        }
        match &*payload {
            Payload::Number(n) => Some(*n),
            _ => None,
        }
    }

    fn store(&self, value: Payload) {
        let mut payload = self.payload_mut();
        if payload.ensure(value.kind()) {
            *payload = value;
        }
    }

    fn set_number(&self, n: f64) {
        self.store(Payload::Number(n));
    }

    /// String value, or `""` if the node is not a string.
    pub fn get_string(&self) -> String {
        let mut payload = self.payload_mut();
        if !payload.ensure(Kind::String) {
            return String::new();
        }
        match &*payload {
            Payload::String(s) => s.clone(),
            _ => String::new(),
        }
    }

    /// Boolean value, or `false` if the node is not a bool.
    pub fn get_bool(&self) -> bool {
        let mut payload = self.payload_mut();
        if !payload.ensure(Kind::Bool) {
            return false;
        }
        matches!(&*payload, Payload::Bool(true))
    }

    pub fn get_float32(&self) -> f32 {
        self.number().map_or(0.0, |n| n as f32)
    }

    /// The stored number as-is, or `0.0` if the node is not a number.
    pub fn get_float64(&self) -> f64 {
        self.number().unwrap_or(0.0)
    }

    pub fn get_int32(&self) -> i32 {
        self.number().map_or(0, |n| n as i32)
    }

    pub fn get_int(&self) -> isize {
        self.number().map_or(0, |n| n as isize)
    }

    pub fn get_int64(&self) -> i64 {
        self.number().map_or(0, |n| n as i64)
    }

    pub fn get_uint32(&self) -> u32 {
        self.number().map_or(0, |n| n as u32)
    }

    pub fn get_uint(&self) -> usize {
        self.number().map_or(0, |n| n as usize)
    }

    pub fn get_uint64(&self) -> u64 {
        self.number().map_or(0, |n| n as u64)
    }

    pub fn set_string(&self, value: impl Into<String>) {
        self.store(Payload::String(value.into()));
    }

    pub fn set_bool(&self, value: bool) {
        self.store(Payload::Bool(value));
    }

    pub fn set_float32(&self, value: f32) {
        self.set_number(value as f64);
    }

    pub fn set_float64(&self, value: f64) {
        self.set_number(value);
    }

    pub fn set_int32(&self, value: i32) {
        self.set_number(value as f64);
    }

    pub fn set_int(&self, value: isize) {
        self.set_number(value as f64);
    }

    /// Values beyond ±2^53 are rounded to the nearest representable `f64`.
    pub fn set_int64(&self, value: i64) {
        self.set_number(value as f64);
    }

    pub fn set_uint32(&self, value: u32) {
        self.set_number(value as f64);
    }

    pub fn set_uint(&self, value: usize) {
        self.set_number(value as f64);
    }

    /// Values beyond 2^53 are rounded to the nearest representable `f64`.
    pub fn set_uint64(&self, value: u64) {
        self.set_number(value as f64);
    }
}
