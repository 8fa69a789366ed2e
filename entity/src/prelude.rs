pub use super::member::Entity as Member;
pub use super::promotion::Entity as Promotion;
