use crate::bridge::{FieldKind, TypedValue};

/// Largest magnitude below which every integer is exactly representable as `f64`.
pub(crate) const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Widen a 32-bit integer. Always exact.
pub fn widen_i32(value: i32) -> f64 {
	f64::from(value)
}

/// Widen a 64-bit integer. Values above 2^53 in magnitude round to the nearest representable double.
pub fn widen_i64(value: i64) -> f64 {
	value as f64
}

/// Widen a 32-bit float. Always exact.
pub fn widen_f32(value: f32) -> f64 {
	f64::from(value)
}

/// Narrow a bridge number to the declared numeric field width.
///
/// Integer kinds truncate toward zero and saturate at the target bounds; NaN becomes 0.
/// Returns `None` when `kind` is not numeric.
pub fn narrow_number(value: f64, kind: &FieldKind) -> Option<TypedValue> {
	match kind {
		FieldKind::Integer => Some(TypedValue::I32(value as i32)),
		FieldKind::Long => Some(TypedValue::I64(value as i64)),
		FieldKind::Float => Some(TypedValue::F32(value as f32)),
		FieldKind::Double => Some(TypedValue::F64(value)),
		_ => None,
	}
}

/// Integer view of a finite, integral number inside the exactly-representable range.
pub(crate) fn exact_integer(value: f64) -> Option<i64> {
	if !value.is_finite() || value.fract() != 0.0 || value.abs() > MAX_SAFE_INTEGER {
		return None;
	}
	Some(value as i64)
}
