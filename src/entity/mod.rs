pub mod favorites;
pub mod history;
pub mod media_entries;
pub mod users;

pub use favorites::Entity as Favorites;
pub use history::Entity as History;
pub use media_entries::Entity as MediaEntries;
pub use users::Entity as Users;
