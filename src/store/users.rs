/*!
`Store` methods for users: logging in and listing Students.
*/
use super::{Store, StoreError};
use crate::user::{PublicUser, Role, User};

impl Store {
    /**
    Return the user matching all of `username`, `password`, and `role`,
    minus the password.

    `role` is taken as the raw string the client sent; a string that isn't a
    valid `Role` simply matches nobody.
    */
    pub fn login(
        &self,
        username: &str,
        password: &str,
        role: &str,
    ) -> Result<PublicUser, StoreError> {
        log::trace!("Store::login( {:?}, [ password ], {:?} ) called.", username, role);

        let role: Role = match role.parse() {
            Ok(r) => r,
            Err(e) => {
                log::debug!("Login for {:?} failed: {}", username, &e);
                return Err(StoreError::Unauthorized);
            },
        };

        match self.users.iter().find(|u| u.matches(username, password, role)) {
            Some(u) => {
                log::debug!("{} {:?} logged in.", &u.role, &u.username);
                Ok(u.public())
            },
            None => {
                log::debug!("No {} matching {:?} with that password.", &role, username);
                Err(StoreError::Unauthorized)
            },
        }
    }

    /// All Student users, in seed order, passwords stripped.
    pub fn students(&self) -> Vec<PublicUser> {
        log::trace!("Store::students() called.");

        self.users.iter()
            .filter(|u| u.role == Role::Student)
            .map(User::public)
            .collect()
    }

    pub fn user(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::ensure_logging;

    #[test]
    fn login_good_and_bad() {
        ensure_logging();
        let store = Store::default();

        let u = store.login("admin", "password", "Admin").unwrap();
        assert_eq!(u.id, 1);
        assert_eq!(u.role, Role::Admin);
        assert_eq!(&u.name, "Admin User");

        let u = store.login("faculty1", "password", "Faculty").unwrap();
        assert_eq!(u.id, 201);

        assert_eq!(
            store.login("nobody", "password", "Admin"),
            Err(StoreError::Unauthorized)
        );
        assert_eq!(
            store.login("admin", "wrong", "Admin"),
            Err(StoreError::Unauthorized)
        );
        assert_eq!(
            store.login("admin", "password", "Student"),
            Err(StoreError::Unauthorized)
        );
        assert_eq!(
            store.login("admin", "password", "Superuser"),
            Err(StoreError::Unauthorized)
        );
        assert_eq!(store.login("", "", ""), Err(StoreError::Unauthorized));
    }

    #[test]
    fn only_students_listed() {
        ensure_logging();
        let store = Store::default();
        let studs = store.students();

        let ids: Vec<i64> = studs.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![101, 102]);
        assert!(studs.iter().all(|s| s.role == Role::Student));
    }
}
