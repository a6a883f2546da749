use crate::models::{FilteredUser, User};

pub fn filter_user_record(user: &User) -> FilteredUser {
	FilteredUser {
		id: user.id.to_string(),
		name: user.name.to_owned(),
		email: user.email.to_owned(),
		role: user.role.to_owned(),
		created_at: user.created_at,
		updated_at: user.updated_at,
	}
}
