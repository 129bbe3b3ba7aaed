pub mod game_users;
pub mod games;
pub mod reviews;
pub mod users;

pub use game_users::Entity as GameUsers;
pub use game_users::Model as GameUser;
pub use games::Entity as Games;
pub use games::Model as Game;
pub use reviews::Entity as Reviews;
pub use reviews::Model as Review;
pub use users::Entity as Users;
pub use users::Model as User;
