//! 标识符类型
//!
//! Dense arena handles for patients and doctors.

use serde::{Deserialize, Serialize};

/// 病人标识符（registry 中的下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PatientId(pub usize);

/// 医生标识符（注册顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DoctorId(pub usize);
