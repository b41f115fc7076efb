pub use super::image::Entity as Image;
pub use super::moodboard::Entity as Moodboard;
