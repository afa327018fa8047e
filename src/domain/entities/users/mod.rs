//! # User Entities
//!
//! 사용자 계정과 관련된 엔티티들입니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::AdminUser;
//!
//! let mut user = AdminUser::default();
//! user.set_name(Some("Kim".to_string()));
//! assert_eq!(user.name(), Some("Kim"));
//! ```

pub mod admin_user;

pub use admin_user::*;
