mod favorite_record;
mod user_session;

pub use favorite_record::FavoriteRecord;
pub use user_session::UserSession;
